//! Synchronization primitives
//!
//! The capacity counter is the only atomic in the crate. Under the `loom`
//! feature it is swapped for loom's instrumented atomic so the admission
//! controller can be model-checked; everything else uses `core`.

#[cfg(feature = "loom")]
pub(crate) use loom::sync::atomic::{AtomicUsize, Ordering};

#[cfg(not(feature = "loom"))]
pub(crate) use core::sync::atomic::{AtomicUsize, Ordering};
