//! Internal diagnostics macros.
//!
//! With the `debug-log` feature enabled these forward to the `log` facade
//! (`debug!` for chatter, `error!` for failures). Without it they expand to
//! nothing, so release builds carry no logging code. Diagnostics are advisory
//! only and never affect control flow.

#[cfg(feature = "debug-log")]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-log"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(feature = "debug-log")]
macro_rules! error_log {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}

#[cfg(not(feature = "debug-log"))]
macro_rules! error_log {
    ($($arg:tt)*) => {{}};
}

pub(crate) use debug_log;
pub(crate) use error_log;
