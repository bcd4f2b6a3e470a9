//! mathdev - Quota-Limited Arithmetic Device
//!
//! An in-kernel arithmetic service: clients open a session, issue
//! fixed-size commands on signed 32-bit integers, and close the session.
//!
//! # Components
//! - [`admission`]: capacity counter and session handles
//! - [`command`]: opcode decoding and checked arithmetic
//! - [`device`]: character-device registry, file operations, ioctl ABI
//!
//! # Guarantees
//! - At most `max_sessions` (default 4) sessions are open at once
//! - The capacity counter never goes negative or exceeds its capacity
//! - Arithmetic never wraps: every hazard is reported as a fault
//! - No operation blocks
//!
//! # Example
//! ```
//! use mathdev::command::numbers::MATH_ADD;
//! use mathdev::device::{DeviceConfig, FileOperations, MathDevice};
//!
//! let device = MathDevice::new(DeviceConfig::DEFAULT).unwrap();
//! let file = device.open().unwrap();
//!
//! let mut x = [2, -5, 0];
//! device.ioctl(&file, MATH_ADD, &mut x).unwrap();
//! assert_eq!(x[2], -3);
//!
//! device.release(file).unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod admission;
pub mod command;
pub mod device;

mod sync;

pub use admission::{OpenError, Session, SessionQuota};
pub use command::{dispatch, Command, Fault, Opcode};
pub use device::{DeviceConfig, DeviceRegistry, Errno, FileOperations, MathDevice};
