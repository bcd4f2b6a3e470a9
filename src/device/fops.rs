//! File Operations
//!
//! The boundary between the host's open/close/ioctl events and a device.
//! A host (or test harness) only ever talks to a device through this trait.

use crate::admission::Session;

use super::errno::Errno;

/// An open file on a device: one granted session.
///
/// Only a device's `open` can create one and `release` consumes it, so a
/// file is released at most once. Dropping it without `release` closes the
/// session just the same.
#[derive(Debug)]
pub struct OpenFile<'a> {
    session: Session<'a>,
}

impl<'a> OpenFile<'a> {
    pub(crate) fn new(session: Session<'a>) -> Self {
        Self { session }
    }

    /// The session backing this file.
    #[inline]
    pub fn session(&self) -> &Session<'a> {
        &self.session
    }

    pub(crate) fn into_session(self) -> Session<'a> {
        self.session
    }
}

/// Operations a character device exposes to its clients.
pub trait FileOperations: Sync {
    /// Attach a new client.
    fn open(&self) -> Result<OpenFile<'_>, Errno>;

    /// Detach a client. Always succeeds for a file this device opened.
    fn release<'a>(&'a self, file: OpenFile<'a>) -> Result<(), Errno>;

    /// Run one command, reading and writing the client's operand buffer.
    fn ioctl(&self, file: &OpenFile<'_>, cmd: u32, arg: &mut [i32]) -> Result<(), Errno>;
}
