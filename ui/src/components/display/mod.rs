pub mod loading_indicator;
pub mod notification_toast;

pub use loading_indicator::*;
pub use notification_toast::*;
