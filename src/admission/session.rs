//! Sessions
//!
//! A [`Session`] is proof that one admission slot is held. It carries no
//! other state. Dropping it (or calling [`Session::close`]) returns the slot,
//! so a session can be closed at most once and never without having been
//! opened.

use super::quota::SessionQuota;

/// Error returned when a session cannot be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenError {
    /// Every admission slot is taken.
    ResourceExhausted,
}

impl core::fmt::Display for OpenError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ResourceExhausted => write!(f, "session quota exhausted"),
        }
    }
}

/// An active session holding one slot of a [`SessionQuota`].
#[derive(Debug)]
#[must_use = "dropping a session closes it immediately"]
pub struct Session<'q> {
    quota: &'q SessionQuota,
}

impl<'q> Session<'q> {
    /// Open a session against `quota`.
    pub fn open(quota: &'q SessionQuota) -> Result<Self, OpenError> {
        if !quota.try_acquire() {
            return Err(OpenError::ResourceExhausted);
        }
        log::debug!(
            "[QUOTA] session opened ({}/{} active)",
            quota.active(),
            quota.capacity()
        );
        Ok(Self { quota })
    }

    /// Close the session, returning its slot.
    pub fn close(self) {
        drop(self);
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        // A live session always owns a slot, so this release cannot be
        // unmatched.
        if self.quota.release().is_ok() {
            log::debug!(
                "[QUOTA] session closed ({}/{} active)",
                self.quota.active(),
                self.quota.capacity()
            );
        }
    }
}
