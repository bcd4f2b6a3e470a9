//! Operation Codes
//!
//! Stable numeric command codes shared with existing clients.
//!
//! | Code | Operation | Arity | Output slot |
//! |------|-----------|-------|-------------|
//! | 1    | SQR       | 1     | 1           |
//! | 2    | NEG       | 1     | 1           |
//! | 3    | ADD       | 2     | 2           |
//! | 4    | SUB       | 2     | 2           |
//! | 5    | MUL       | 2     | 2           |
//! | 6    | DIV       | 2     | 2           |

/// Command code numbers
pub mod numbers {
    pub const MATH_SQR: u32 = 1;
    pub const MATH_NEG: u32 = 2;
    pub const MATH_ADD: u32 = 3;
    pub const MATH_SUB: u32 = 4;
    pub const MATH_MUL: u32 = 5;
    pub const MATH_DIV: u32 = 6;
}

/// A recognized operation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u32)]
pub enum Opcode {
    /// `a * a`
    Square = numbers::MATH_SQR,
    /// `-a`
    Negate = numbers::MATH_NEG,
    /// `a + b`
    Add = numbers::MATH_ADD,
    /// `a - b`
    Subtract = numbers::MATH_SUB,
    /// `a * b`
    Multiply = numbers::MATH_MUL,
    /// `a / b`, truncating toward zero
    Divide = numbers::MATH_DIV,
}

impl Opcode {
    /// Every recognized operation, in code order.
    pub const ALL: [Self; 6] = [
        Self::Square,
        Self::Negate,
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
    ];

    /// Look up a raw code. Returns `None` for anything unrecognized.
    #[inline]
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            numbers::MATH_SQR => Some(Self::Square),
            numbers::MATH_NEG => Some(Self::Negate),
            numbers::MATH_ADD => Some(Self::Add),
            numbers::MATH_SUB => Some(Self::Subtract),
            numbers::MATH_MUL => Some(Self::Multiply),
            numbers::MATH_DIV => Some(Self::Divide),
            _ => None,
        }
    }

    /// The raw wire code.
    #[inline]
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Number of input operands.
    #[inline]
    pub const fn arity(self) -> usize {
        match self {
            Self::Square | Self::Negate => 1,
            Self::Add | Self::Subtract | Self::Multiply | Self::Divide => 2,
        }
    }

    /// Buffer slot the result is written to. Always directly after the
    /// inputs.
    #[inline]
    pub const fn output_slot(self) -> usize {
        self.arity()
    }

    /// Short name used in log output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Square => "SQR",
            Self::Negate => "NEG",
            Self::Add => "ADD",
            Self::Subtract => "SUB",
            Self::Multiply => "MUL",
            Self::Divide => "DIV",
        }
    }
}

impl TryFrom<u32> for Opcode {
    type Error = u32;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(code)
    }
}

impl core::fmt::Display for Opcode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
