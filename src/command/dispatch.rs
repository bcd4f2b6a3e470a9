//! Command Dispatcher
//!
//! `Received -> Validated -> Computed -> Responded`, or `Rejected` at
//! validation. No state survives a call and no shared state is touched.

use crate::admission::Session;

use super::request::{Command, Fault};

/// Dispatch one command on behalf of an open session.
///
/// # Arguments
/// * `session` - The caller's active session
/// * `code` - Raw operation code
/// * `operands` - Input operands; at least the operation's arity
///
/// # Returns
/// The `i32` result, or the [`Fault`] that rejected the command.
pub fn dispatch(_session: &Session<'_>, code: u32, operands: &[i32]) -> Result<i32, Fault> {
    let command = Command::decode(code, operands).map_err(|fault| {
        log::debug!("[MATH] rejected command {}: {}", code, fault);
        fault
    })?;

    command.execute().map_err(|fault| {
        log::debug!("[MATH] {:?} failed: {}", command, fault);
        fault
    })
}
