//! Decoded Commands and Checked Arithmetic
//!
//! A [`Command`] is a validated request: a recognized opcode with exactly
//! the operands it needs. Executing it widens to `i64`, computes, and only
//! narrows back when the result fits in `i32`.

use super::opcode::Opcode;

/// Typed rejection of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// The command code is not one of the recognized operations.
    UnknownOperation,
    /// The operands overflow, negate `i32::MIN`, divide by zero, or divide
    /// `i32::MIN` by `-1`. Also returned when too few operands are supplied.
    InvalidArgument,
}

impl core::fmt::Display for Fault {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnknownOperation => write!(f, "unknown operation"),
            Self::InvalidArgument => write!(f, "invalid argument"),
        }
    }
}

/// A validated arithmetic request.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    Square(i32),
    Negate(i32),
    Add(i32, i32),
    Subtract(i32, i32),
    Multiply(i32, i32),
    Divide(i32, i32),
}

impl Command {
    /// Decode a raw code and operand list.
    ///
    /// The code is checked first, so an unknown code is reported as
    /// [`Fault::UnknownOperation`] whatever the operands. Operands beyond the
    /// operation's arity are ignored.
    pub fn decode(code: u32, operands: &[i32]) -> Result<Self, Fault> {
        let op = Opcode::from_code(code).ok_or(Fault::UnknownOperation)?;
        Self::from_operands(op, operands)
    }

    /// Build a command for a known opcode.
    pub fn from_operands(op: Opcode, operands: &[i32]) -> Result<Self, Fault> {
        if operands.len() < op.arity() {
            return Err(Fault::InvalidArgument);
        }

        let a = operands[0];
        let b = || operands[1];

        Ok(match op {
            Opcode::Square => Self::Square(a),
            Opcode::Negate => Self::Negate(a),
            Opcode::Add => Self::Add(a, b()),
            Opcode::Subtract => Self::Subtract(a, b()),
            Opcode::Multiply => Self::Multiply(a, b()),
            Opcode::Divide => Self::Divide(a, b()),
        })
    }

    /// The operation this command performs.
    pub const fn opcode(&self) -> Opcode {
        match self {
            Self::Square(_) => Opcode::Square,
            Self::Negate(_) => Opcode::Negate,
            Self::Add(..) => Opcode::Add,
            Self::Subtract(..) => Opcode::Subtract,
            Self::Multiply(..) => Opcode::Multiply,
            Self::Divide(..) => Opcode::Divide,
        }
    }

    /// Compute the result.
    pub fn execute(self) -> Result<i32, Fault> {
        match self {
            Self::Square(a) => narrow(i64::from(a) * i64::from(a)),
            Self::Negate(a) => {
                if a == i32::MIN {
                    return Err(Fault::InvalidArgument);
                }
                Ok(-a)
            }
            Self::Add(a, b) => narrow(i64::from(a) + i64::from(b)),
            Self::Subtract(a, b) => narrow(i64::from(a) - i64::from(b)),
            Self::Multiply(a, b) => narrow(i64::from(a) * i64::from(b)),
            Self::Divide(a, b) => {
                if b == 0 || (a == i32::MIN && b == -1) {
                    return Err(Fault::InvalidArgument);
                }
                // Rust integer division truncates toward zero.
                Ok(a / b)
            }
        }
    }
}

/// Narrow a widened result, rejecting anything outside `i32`.
#[inline]
fn narrow(wide: i64) -> Result<i32, Fault> {
    i32::try_from(wide).map_err(|_| Fault::InvalidArgument)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(code: u32, operands: &[i32]) -> Result<i32, Fault> {
        Command::decode(code, operands)?.execute()
    }

    #[test]
    fn test_square() {
        assert_eq!(Command::Square(2).execute(), Ok(4));
        assert_eq!(Command::Square(-46340).execute(), Ok(2_147_395_600));
        assert_eq!(Command::Square(46341).execute(), Err(Fault::InvalidArgument));
        assert_eq!(
            Command::Square(1_073_741_824).execute(),
            Err(Fault::InvalidArgument)
        );
        assert_eq!(
            Command::Square(i32::MAX / 2).execute(),
            Err(Fault::InvalidArgument)
        );
    }

    #[test]
    fn test_negate() {
        assert_eq!(Command::Negate(4).execute(), Ok(-4));
        assert_eq!(Command::Negate(i32::MAX).execute(), Ok(-i32::MAX));
        assert_eq!(Command::Negate(i32::MIN).execute(), Err(Fault::InvalidArgument));
    }

    #[test]
    fn test_add_sub_mul() {
        assert_eq!(Command::Add(2, 2).execute(), Ok(4));
        assert_eq!(Command::Add(2, -5).execute(), Ok(-3));
        assert_eq!(Command::Add(i32::MAX, 2).execute(), Err(Fault::InvalidArgument));
        assert_eq!(Command::Add(i32::MIN, -1).execute(), Err(Fault::InvalidArgument));
        assert_eq!(Command::Subtract(2, 2).execute(), Ok(0));
        assert_eq!(Command::Subtract(2, -2).execute(), Ok(4));
        assert_eq!(
            Command::Subtract(i32::MIN, 1).execute(),
            Err(Fault::InvalidArgument)
        );
        assert_eq!(Command::Multiply(2, 3).execute(), Ok(6));
        assert_eq!(Command::Multiply(-1, i32::MAX).execute(), Ok(-i32::MAX));
        assert_eq!(
            Command::Multiply(i32::MIN, -1).execute(),
            Err(Fault::InvalidArgument)
        );
    }

    #[test]
    fn test_divide_truncates_toward_zero() {
        assert_eq!(Command::Divide(6, 3).execute(), Ok(2));
        assert_eq!(Command::Divide(200, -3).execute(), Ok(-66));
        assert_eq!(Command::Divide(-7, 2).execute(), Ok(-3));
        assert_eq!(Command::Divide(i32::MIN, 1).execute(), Ok(i32::MIN));
    }

    #[test]
    fn test_divide_hazards() {
        assert_eq!(Command::Divide(1, 0).execute(), Err(Fault::InvalidArgument));
        assert_eq!(
            Command::Divide(i32::MIN, -1).execute(),
            Err(Fault::InvalidArgument)
        );
    }

    #[test]
    fn test_unknown_code_wins_over_operands() {
        assert_eq!(run(0, &[]), Err(Fault::UnknownOperation));
        assert_eq!(run(99, &[1, 0]), Err(Fault::UnknownOperation));
    }

    #[test]
    fn test_missing_operands() {
        assert_eq!(run(3, &[1]), Err(Fault::InvalidArgument));
        assert_eq!(run(1, &[]), Err(Fault::InvalidArgument));
    }

    #[test]
    fn test_decoded_opcode_matches_code() {
        for op in Opcode::ALL {
            let command = Command::decode(op.code(), &[1, 1]).unwrap();
            assert_eq!(command.opcode(), op);
        }
    }

    #[test]
    fn test_decode_ignores_trailing_slots() {
        assert_eq!(Command::decode(2, &[4, 123]), Ok(Command::Negate(4)));
        assert_eq!(run(3, &[2, 2, 77]), Ok(4));
    }
}
