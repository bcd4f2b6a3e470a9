//! Session Quota (Capacity Counter)
//!
//! A counting semaphore over a single atomic: the number of admission
//! slots still free.
//!
//! # Invariant
//! `0 <= available <= capacity` at every observable point. Both mutations
//! are one `fetch_update` each, so a racing pair of callers can never both
//! take the last slot and a stray release can never push the count past
//! `capacity`.

use crate::sync::{AtomicUsize, Ordering};

/// Error type for quota operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotaError {
    /// A release arrived while every slot was already free.
    ///
    /// Only reachable when a caller releases without a matching grant.
    ReleaseWithoutAcquire,
}

impl core::fmt::Display for QuotaError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ReleaseWithoutAcquire => write!(f, "release without matching acquire"),
        }
    }
}

/// Fixed-capacity admission counter.
#[derive(Debug)]
pub struct SessionQuota {
    /// Remaining admission slots.
    available: AtomicUsize,
    /// Slots available when no session is open.
    capacity: usize,
}

impl SessionQuota {
    /// Create a quota with every slot free.
    pub fn new(capacity: usize) -> Self {
        Self {
            available: AtomicUsize::new(capacity),
            capacity,
        }
    }

    /// Try to reserve one slot.
    ///
    /// Returns `true` and takes the slot iff one was free at the moment of
    /// the call. A denial leaves the counter untouched.
    pub fn try_acquire(&self) -> bool {
        let granted = self
            .available
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();

        if !granted {
            log::warn!("[QUOTA] quota exceeded ({} sessions active)", self.capacity);
        }
        granted
    }

    /// Return one slot.
    ///
    /// Must be called exactly once per successful [`try_acquire`]. An
    /// unmatched release is refused and leaves the counter unchanged.
    ///
    /// [`try_acquire`]: Self::try_acquire
    pub fn release(&self) -> Result<(), QuotaError> {
        let capacity = self.capacity;
        self.available
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| {
                (n < capacity).then(|| n + 1)
            })
            .map(|_| ())
            .map_err(|_| {
                log::warn!("[QUOTA] release without matching acquire ignored");
                QuotaError::ReleaseWithoutAcquire
            })
    }

    /// Snapshot of the free slots.
    #[inline]
    pub fn available(&self) -> usize {
        self.available.load(Ordering::SeqCst)
    }

    /// Total number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot of the slots currently held.
    #[inline]
    pub fn active(&self) -> usize {
        self.capacity - self.available()
    }
}
