//! Kernel Error Codes
//!
//! Negative error numbers returned across the file-operations boundary.
//! Every typed error in the crate converts into one of these.

use crate::admission::OpenError;
use crate::command::Fault;

/// Kernel error codes
#[repr(i64)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Errno {
    /// Bad address (operand buffer too short)
    Efault = -14,
    /// Device or resource busy (session quota exhausted)
    Ebusy = -16,
    /// No such device (nothing registered under the major number)
    Enodev = -19,
    /// Invalid argument
    Einval = -22,
    /// Inappropriate ioctl for device (unknown command code)
    Enotty = -25,
}

impl Errno {
    /// The raw negative value.
    #[inline]
    pub const fn as_i64(self) -> i64 {
        self as i64
    }
}

impl core::fmt::Display for Errno {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::Efault => "EFAULT",
            Self::Ebusy => "EBUSY",
            Self::Enodev => "ENODEV",
            Self::Einval => "EINVAL",
            Self::Enotty => "ENOTTY",
        };
        write!(f, "{} ({})", name, self.as_i64())
    }
}

impl From<Fault> for Errno {
    fn from(fault: Fault) -> Self {
        match fault {
            Fault::UnknownOperation => Self::Enotty,
            Fault::InvalidArgument => Self::Einval,
        }
    }
}

impl From<OpenError> for Errno {
    fn from(err: OpenError) -> Self {
        match err {
            OpenError::ResourceExhausted => Self::Ebusy,
        }
    }
}

/// Flatten a file-operation result into the kernel return convention:
/// `0` on success, a negative error number otherwise.
#[inline]
pub fn to_retval(result: Result<(), Errno>) -> i64 {
    match result {
        Ok(()) => 0,
        Err(e) => e.as_i64(),
    }
}
