//! Status macros routed through `tracing`.
//!
//! The CLI formatter picks the status symbol from the target, so library code can
//! report outcomes without knowing how the terminal renders them.

pub const SUCCESS_TARGET: &str = "teamgen::success";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "teamgen::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}
