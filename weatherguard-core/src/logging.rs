//! Optional logging macros
//!
//! The core never installs a logger. With the `log` feature (enabled by `std`)
//! these forward to the `log` facade; with only `defmt` enabled they forward to
//! `defmt`; otherwise they compile to nothing so the hot path stays free of
//! formatting code on bare-metal builds.

#[cfg(feature = "log")]
macro_rules! wg_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(all(not(feature = "log"), feature = "defmt"))]
macro_rules! wg_trace {
    ($($arg:tt)*) => { defmt::trace!($($arg)*) };
}

#[cfg(not(any(feature = "log", feature = "defmt")))]
macro_rules! wg_trace {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! wg_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(all(not(feature = "log"), feature = "defmt"))]
macro_rules! wg_debug {
    ($($arg:tt)*) => { defmt::debug!($($arg)*) };
}

#[cfg(not(any(feature = "log", feature = "defmt")))]
macro_rules! wg_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! wg_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(all(not(feature = "log"), feature = "defmt"))]
macro_rules! wg_warn {
    ($($arg:tt)*) => { defmt::warn!($($arg)*) };
}

#[cfg(not(any(feature = "log", feature = "defmt")))]
macro_rules! wg_warn {
    ($($arg:tt)*) => {};
}
