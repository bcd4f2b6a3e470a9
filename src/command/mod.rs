//! Command Processing
//!
//! Validates and executes arithmetic commands on signed 32-bit operands.
//!
//! # Guarantees
//! - Unknown codes are rejected before operands are looked at
//! - Every operation is range-checked in 64-bit before narrowing
//! - Division truncates toward zero; `x / 0` and `i32::MIN / -1` are
//!   rejected

pub mod dispatch;
pub mod opcode;
pub mod request;

pub use dispatch::dispatch;
pub use opcode::{numbers, Opcode};
pub use request::{Command, Fault};
