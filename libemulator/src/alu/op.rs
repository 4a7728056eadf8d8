use std::fmt::Display;

const LOGIC_FLAG: u32 = 0b10000;
const OP_MASK: u32 = 0b01111;

/// An ALU operation, as selected by the 5-bit command register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AluOp {
    Arithmetic(ArithmeticOp),
    Logic(LogicOp),
}

impl AluOp {
    pub fn decode(command: u32) -> Self {
        let index = (command & OP_MASK) as usize;

        if command & LOGIC_FLAG == 0 {
            Self::Arithmetic(ArithmeticOp::ALL[index])
        } else {
            Self::Logic(LogicOp::ALL[index])
        }
    }
}

/// Operations over the unsigned values of R1 (`a`) and R2 (`b`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticOp {
    Zero,
    Divide,
    ProductMinusOne,
    Add,
    DifferenceOfSquares,
    Double,
    Average,
    Multiply,
    Modulo,
    Halve,
    ProductMinusSum,
    Subtract,
    SquaredDifference,
    Identity,
    Square,
    Decrement,
}

impl ArithmeticOp {
    pub const ALL: [ArithmeticOp; 16] = [
        Self::Zero,
        Self::Divide,
        Self::ProductMinusOne,
        Self::Add,
        Self::DifferenceOfSquares,
        Self::Double,
        Self::Average,
        Self::Multiply,
        Self::Modulo,
        Self::Halve,
        Self::ProductMinusSum,
        Self::Subtract,
        Self::SquaredDifference,
        Self::Identity,
        Self::Square,
        Self::Decrement,
    ];

    /// The unreduced result, or `None` when the operation divides by zero.
    pub fn apply(&self, a: i32, b: i32) -> Option<i32> {
        Some(match self {
            Self::Zero => 0,
            Self::Divide => a.checked_div(b)?,
            Self::ProductMinusOne => a * b - 1,
            Self::Add => a + b,
            Self::DifferenceOfSquares => a * a - b * b,
            Self::Double => a * 2,
            Self::Average => (a + b) / 2,
            Self::Multiply => a * b,
            Self::Modulo => a.checked_rem(b)?,
            Self::Halve => a / 2,
            Self::ProductMinusSum => a * b - (a + b),
            Self::Subtract => a - b,
            Self::SquaredDifference => (a - b) * (a - b),
            Self::Identity => a,
            Self::Square => a * a,
            Self::Decrement => a - 1,
        })
    }
}

/// Per-bit functions of an R1 bit (`a`) and the matching R2 bit (`b`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicOp {
    NotA,
    Nand,
    AImpliesB,
    One,
    Xor,
    Differs,
    Implication,
    Or,
    NotImplication,
    BImpliesA,
    And,
    Xnor,
    NotB,
    Nor,
    Equivalence,
    XnorAlt,
}

impl LogicOp {
    pub const ALL: [LogicOp; 16] = [
        Self::NotA,
        Self::Nand,
        Self::AImpliesB,
        Self::One,
        Self::Xor,
        Self::Differs,
        Self::Implication,
        Self::Or,
        Self::NotImplication,
        Self::BImpliesA,
        Self::And,
        Self::Xnor,
        Self::NotB,
        Self::Nor,
        Self::Equivalence,
        Self::XnorAlt,
    ];

    pub fn apply(&self, a: bool, b: bool) -> bool {
        match self {
            Self::NotA => !a,
            Self::Nand => !(a && b),
            Self::AImpliesB => !a || b,
            Self::One => true,
            Self::Xor => a ^ b,
            Self::Differs => a != b,
            Self::Implication => !a || b,
            Self::Or => a || b,
            Self::NotImplication => !(!a || b),
            Self::BImpliesA => !(!a && b),
            Self::And => a && b,
            Self::Xnor => !(a ^ b),
            Self::NotB => !b,
            Self::Nor => !(a || b),
            Self::Equivalence => a == b,
            Self::XnorAlt => !(a ^ b),
        }
    }
}

impl Display for AluOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arithmetic(op) => op.fmt(f),
            Self::Logic(op) => op.fmt(f),
        }
    }
}

impl Display for ArithmeticOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Zero => "0",
            Self::Divide => "R1 / R2",
            Self::ProductMinusOne => "R1 * R2 - 1",
            Self::Add => "R1 + R2",
            Self::DifferenceOfSquares => "R1^2 - R2^2",
            Self::Double => "R1 * 2",
            Self::Average => "(R1 + R2) / 2",
            Self::Multiply => "R1 * R2",
            Self::Modulo => "R1 % R2",
            Self::Halve => "R1 / 2",
            Self::ProductMinusSum => "R1 * R2 - (R1 + R2)",
            Self::Subtract => "R1 - R2",
            Self::SquaredDifference => "(R1 - R2)^2",
            Self::Identity => "R1",
            Self::Square => "R1^2",
            Self::Decrement => "R1 - 1",
        })
    }
}

impl Display for LogicOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::NotA => "not R1",
            Self::Nand => "R1 nand R2",
            Self::AImpliesB => "R1 -> R2",
            Self::One => "1",
            Self::Xor => "R1 xor R2",
            Self::Differs => "R1 != R2",
            Self::Implication => "R1 -> R2",
            Self::Or => "R1 or R2",
            Self::NotImplication => "not (R1 -> R2)",
            Self::BImpliesA => "R2 -> R1",
            Self::And => "R1 and R2",
            Self::Xnor => "R1 xnor R2",
            Self::NotB => "not R2",
            Self::Nor => "R1 nor R2",
            Self::Equivalence => "R1 == R2",
            Self::XnorAlt => "R1 xnor R2",
        })
    }
}
