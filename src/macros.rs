//! Small crate-wide convenience macros.

/// Log a formatted message to the browser console in **debug** builds.
///
/// In release builds the branch is constant-false and optimised out.
///
/// ```rust,ignore
/// debug_log!("opened tooltip for {}", trigger_id);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
    };
}
