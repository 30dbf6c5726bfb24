/// Macros for timestamped browser console logging.
///
/// Every line is prefixed with `js_sys::Date::now()` and the level, and is
/// formatted on the Rust side so only a plain string crosses into JS.
#[doc(hidden)]
#[macro_export]
macro_rules! __console_line {
    ($level:literal, $($arg:tt)*) => {
        format!("[{}] [{}] {}", js_sys::Date::now(), $level, format!($($arg)*))
    };
}

#[macro_export]
macro_rules! console_info {
    ($($arg:tt)*) => {
        gloo_console::info!($crate::__console_line!("INFO", $($arg)*))
    };
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        gloo_console::warn!($crate::__console_line!("WARN", $($arg)*))
    };
}

#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {
        gloo_console::error!($crate::__console_line!("ERROR", $($arg)*))
    };
}

#[macro_export]
macro_rules! console_debug {
    ($($arg:tt)*) => {
        gloo_console::debug!($crate::__console_line!("DEBUG", $($arg)*))
    };
}
