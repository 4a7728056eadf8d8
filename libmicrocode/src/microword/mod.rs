use std::{fmt::Display, str::FromStr};

use selector::{Destination, Source};
use thiserror::Error;

pub mod selector;

#[cfg(test)]
mod tests;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MicrowordParseError {
    #[error("Expected {expected} bits, found {0}", expected = crate::MICROWORD_BITS)]
    WrongLength(usize),

    #[error("Invalid bit character {0:?}")]
    InvalidBit(char),
}

/// One 8-bit control word: `ttt rrr cc`, most significant bit first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Microword(u8);

impl Microword {
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Builds a word from raw field codes. Codes wider than their field are masked.
    pub const fn new(source_code: u8, destination_code: u8, command_bits: [bool; 2]) -> Self {
        Self(
            (source_code & 0b111) << 5
                | (destination_code & 0b111) << 2
                | (command_bits[0] as u8) << 1
                | command_bits[1] as u8,
        )
    }

    pub fn transfer(source: Source, destination: Destination, command_bits: [bool; 2]) -> Self {
        Self::new(source.code(), destination.code(), command_bits)
    }

    pub const fn bits(&self) -> u8 {
        self.0
    }

    pub const fn source_code(&self) -> u8 {
        self.0 >> 5
    }

    pub const fn destination_code(&self) -> u8 {
        (self.0 >> 2) & 0b111
    }

    /// The two trailing bits, in the order they are shifted into the command register.
    pub const fn command_bits(&self) -> [bool; 2] {
        [self.0 & 0b10 != 0, self.0 & 0b1 != 0]
    }

    pub fn source(&self) -> Option<Source> {
        Source::from_code(self.source_code())
    }

    pub fn destination(&self) -> Option<Destination> {
        Destination::from_code(self.destination_code())
    }

    /// Human-readable transfer, e.g. `A -> R1 [11]`.
    pub fn mnemonic(&self) -> String {
        let source = self
            .source()
            .map(|source| source.to_string())
            .unwrap_or_else(|| format!("tx{}", self.source_code()));
        let destination = self
            .destination()
            .map(|destination| destination.to_string())
            .unwrap_or_else(|| format!("rx{}", self.destination_code()));
        let [high, low] = self.command_bits();

        format!("{} -> {} [{}{}]", source, destination, high as u8, low as u8)
    }
}

impl FromStr for Microword {
    type Err = MicrowordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let length = s.chars().count();
        if length != crate::MICROWORD_BITS {
            return Err(MicrowordParseError::WrongLength(length));
        }

        s.chars()
            .try_fold(0u8, |word, c| match c {
                '0' => Ok(word << 1),
                '1' => Ok(word << 1 | 1),
                other => Err(MicrowordParseError::InvalidBit(other)),
            })
            .map(Self)
    }
}

impl Display for Microword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:08b}", self.0)
    }
}
