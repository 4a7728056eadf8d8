use std::fmt::Display;

use bimap::BiMap;
use lazy_static::lazy_static;

lazy_static! {
    static ref SOURCE_CODE_BIMAP: BiMap<Source, u8> = BiMap::from_iter([
        (Source::InstructionRegister, 0),
        (Source::A, 1),
        (Source::B, 2),
        (Source::C, 3),
        (Source::Alu, 4),
        (Source::Input, 5),
    ]);
    static ref DESTINATION_CODE_BIMAP: BiMap<Destination, u8> = BiMap::from_iter([
        (Destination::InstructionRegister, 0),
        (Destination::A, 1),
        (Destination::B, 2),
        (Destination::C, 3),
        (Destination::R1, 4),
        (Destination::R2, 5),
        (Destination::Output, 6),
    ]);
}

/// What drives the bus during a microcycle (the `txId` field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    InstructionRegister,
    A,
    B,
    C,
    Alu,
    Input,
}

/// What latches the bus during a microcycle (the `rxId` field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    InstructionRegister,
    A,
    B,
    C,
    R1,
    R2,
    Output,
}

impl Source {
    pub fn from_code(code: u8) -> Option<Self> {
        SOURCE_CODE_BIMAP.get_by_right(&code).copied()
    }

    pub fn code(&self) -> u8 {
        *SOURCE_CODE_BIMAP
            .get_by_left(self)
            .expect("No code mapping for source")
    }
}

impl Destination {
    pub fn from_code(code: u8) -> Option<Self> {
        DESTINATION_CODE_BIMAP.get_by_right(&code).copied()
    }

    pub fn code(&self) -> u8 {
        *DESTINATION_CODE_BIMAP
            .get_by_left(self)
            .expect("No code mapping for destination")
    }

    /// Transfers into these destinations also clock the microword's command bits
    /// into the command register, ahead of the ALU use that consumes them.
    pub fn shifts_command(&self) -> bool {
        matches!(self, Self::InstructionRegister | Self::R1 | Self::R2)
    }
}

impl Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::InstructionRegister => "RI",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::Alu => "ALU",
            Self::Input => "input",
        })
    }
}

impl Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::InstructionRegister => "RI",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::R1 => "R1",
            Self::R2 => "R2",
            Self::Output => "output",
        })
    }
}
