//! Ioctl Operand Buffer ABI
//!
//! Clients pass one small `i32` array per call. Inputs sit at the front and
//! the result is written into the slot directly after them:
//!
//! ```text
//! 1-ary:  [ a | out ]
//! 2-ary:  [ a | b | out ]
//! ```
//!
//! # Checks
//! - The command code is validated before the buffer is looked at
//! - The buffer must hold the inputs and the output slot; a short buffer
//!   is `EFAULT` and nothing is read or written
//! - On any failure the output slot is left untouched

use crate::admission::Session;
use crate::command::{dispatch, Opcode};

use super::errno::Errno;

/// Size of the largest operand buffer any command needs.
pub const MAX_BUFFER_SLOTS: usize = 3;

/// An operand buffer checked to be long enough for its command.
#[derive(Debug)]
pub struct OperandBuffer<'a> {
    slots: &'a mut [i32],
    op: Opcode,
}

impl<'a> OperandBuffer<'a> {
    /// The input operands.
    #[inline]
    pub fn inputs(&self) -> &[i32] {
        &self.slots[..self.op.arity()]
    }

    /// Write the result into the output slot.
    #[inline]
    pub fn write_result(&mut self, value: i32) {
        self.slots[self.op.output_slot()] = value;
    }
}

/// Validate a client operand buffer for `op`.
///
/// # Returns
/// * `Ok(OperandBuffer)` - Buffer holds the inputs and the output slot
/// * `Err(Errno::Efault)` - Buffer is too short
pub fn validate_operand_buffer(slots: &mut [i32], op: Opcode) -> Result<OperandBuffer<'_>, Errno> {
    if slots.len() <= op.output_slot() {
        return Err(Errno::Efault);
    }
    Ok(OperandBuffer { slots, op })
}

/// Handle one ioctl on an open session.
///
/// # Arguments
/// * `session` - The caller's session
/// * `cmd` - Raw command code
/// * `arg` - Operand buffer, updated in place on success
pub fn ioctl(session: &Session<'_>, cmd: u32, arg: &mut [i32]) -> Result<(), Errno> {
    let op = Opcode::from_code(cmd).ok_or_else(|| {
        log::debug!("[MATH] unknown ioctl {}", cmd);
        Errno::Enotty
    })?;

    let mut buf = validate_operand_buffer(arg, op).map_err(|e| {
        log::debug!("[MATH] {}: operand buffer validation failed: {}", op, e);
        e
    })?;

    let result = dispatch(session, op.code(), buf.inputs())?;
    buf.write_result(result);
    Ok(())
}

#[cfg(all(test, not(feature = "loom")))]
mod tests {
    use super::*;
    use crate::admission::SessionQuota;
    use crate::command::numbers::*;

    #[test]
    fn test_short_buffer() {
        let mut slots = [1];
        assert_eq!(
            validate_operand_buffer(&mut slots, Opcode::Negate).unwrap_err(),
            Errno::Efault
        );
        let mut slots = [1, 2];
        assert!(validate_operand_buffer(&mut slots, Opcode::Add).is_err());
        assert!(validate_operand_buffer(&mut slots, Opcode::Square).is_ok());
    }

    #[test]
    fn test_max_buffer_fits_every_command() {
        for op in Opcode::ALL {
            let mut slots = [0; MAX_BUFFER_SLOTS];
            assert!(op.output_slot() < MAX_BUFFER_SLOTS);
            assert!(validate_operand_buffer(&mut slots, op).is_ok());
        }
    }

    #[test]
    fn test_result_slots() {
        let quota = SessionQuota::new(1);
        let session = Session::open(&quota).unwrap();

        let mut unary = [4, 0];
        assert_eq!(ioctl(&session, MATH_NEG, &mut unary), Ok(()));
        assert_eq!(unary, [4, -4]);

        let mut binary = [200, -3, 0];
        assert_eq!(ioctl(&session, MATH_DIV, &mut binary), Ok(()));
        assert_eq!(binary, [200, -3, -66]);
    }

    #[test]
    fn test_failure_leaves_output_untouched() {
        let quota = SessionQuota::new(1);
        let session = Session::open(&quota).unwrap();

        let mut slots = [i32::MAX, 2, 123];
        assert_eq!(ioctl(&session, MATH_ADD, &mut slots), Err(Errno::Einval));
        assert_eq!(slots, [i32::MAX, 2, 123]);

        let mut slots = [1, 2, 3];
        assert_eq!(ioctl(&session, 0, &mut slots), Err(Errno::Enotty));
        assert_eq!(slots, [1, 2, 3]);
    }

    #[test]
    fn test_unknown_code_checked_before_buffer() {
        let quota = SessionQuota::new(1);
        let session = Session::open(&quota).unwrap();
        assert_eq!(ioctl(&session, 1000, &mut []), Err(Errno::Enotty));
        assert_eq!(ioctl(&session, MATH_SQR, &mut []), Err(Errno::Efault));
    }
}
