mod validated_input;

pub use validated_input::*;
