use op::{AluOp, ArithmeticOp};
use thiserror::Error;

use crate::{regfile::DATA_WIDTH, register::BitRegister};

pub mod op;

#[cfg(test)]
mod tests;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AluError {
    #[error("Division by zero ({0})")]
    DivisionByZero(ArithmeticOp),
}

/// The combinational unit. Its only state is the output register it drives onto the bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alu {
    output: BitRegister,
}

impl Alu {
    pub fn new() -> Self {
        Self {
            output: BitRegister::new(DATA_WIDTH),
        }
    }

    pub fn output(&self) -> &BitRegister {
        &self.output
    }

    /// Evaluates the operation latched in `command` over `r1` and `r2`.
    ///
    /// Arithmetic results wrap modulo 2^4. On division by zero the output register keeps its
    /// previous value.
    pub fn evaluate(
        &mut self,
        r1: &BitRegister,
        r2: &BitRegister,
        command: &BitRegister,
    ) -> Result<&BitRegister, AluError> {
        match AluOp::decode(command.to_value()) {
            AluOp::Arithmetic(op) => {
                let a = r1.to_value() as i32;
                let b = r2.to_value() as i32;

                let value = op.apply(a, b).ok_or(AluError::DivisionByZero(op))?;
                let modulus = 1 << self.output.width();

                self.output.from_value(value.rem_euclid(modulus) as u32);
            }

            AluOp::Logic(op) => {
                for k in 0..self.output.width() {
                    self.output.set_bit(k, op.apply(r1.bit(k), r2.bit(k)));
                }
            }
        }

        Ok(&self.output)
    }
}

impl Default for Alu {
    fn default() -> Self {
        Self::new()
    }
}
