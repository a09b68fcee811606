//! Crate-private diagnostics.
//!
//! Every macro expands to a `tracing` event under the `virtual_scroll` target when the `tracing`
//! feature is enabled, and to nothing otherwise. Use them in statement position only.

#[cfg(feature = "tracing")]
pub(crate) const TARGET: &str = "virtual_scroll";

macro_rules! vtrace {
    ($($tt:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!(target: $crate::macros::TARGET, $($tt)*);
    };
}

macro_rules! vdebug {
    ($($tt:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(target: $crate::macros::TARGET, $($tt)*);
    };
}

macro_rules! vwarn {
    ($($tt:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::warn!(target: $crate::macros::TARGET, $($tt)*);
    };
}
