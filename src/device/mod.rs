//! Character Device Interface
//!
//! Exposes the arithmetic service to clients the way a host kernel would:
//! a registry of character devices, file operations (open/release/ioctl)
//! and an in-place operand buffer ABI.
//!
//! # Error Convention
//! Entry points return [`Errno`]; `ioctl_raw` flattens to `0` or a
//! negative error number.
//!
//! | Condition               | Errno    |
//! |-------------------------|----------|
//! | Session quota exhausted | `EBUSY`  |
//! | Unknown command code    | `ENOTTY` |
//! | Arithmetic hazard       | `EINVAL` |
//! | Operand buffer too short| `EFAULT` |
//! | Unregistered major      | `ENODEV` |

pub mod chrdev;
pub mod config;
pub mod errno;
pub mod fops;
pub mod ioctl;
mod math;

pub use chrdev::{DeviceRegistry, RegistryError};
pub use config::{ConfigError, DeviceConfig};
pub use errno::Errno;
pub use fops::{FileOperations, OpenFile};
pub use ioctl::{OperandBuffer, MAX_BUFFER_SLOTS};
pub use math::MathDevice;
