// Not every macro is used under every feature combination.
#![allow(unused_macros)]

// Expands to nothing unless the `logging` feature is enabled. The arguments
// are not evaluated when logging is disabled, so they must be free of side
// effects.
macro_rules! log {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            $($tt)*
        }
    }
}

macro_rules! debug {
    ($($tt:tt)*) => { log!(log::debug!(target: "humanity", $($tt)*)) }
}

macro_rules! trace {
    ($($tt:tt)*) => { log!(log::trace!(target: "humanity", $($tt)*)) }
}
