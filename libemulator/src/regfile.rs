use libmicrocode::{Destination, Source};

use crate::register::BitRegister;

pub const INSTRUCTION_REGISTER_WIDTH: usize = 3;
pub const CYCLE_COUNTER_WIDTH: usize = 2;
pub const DATA_WIDTH: usize = 4;
pub const COMMAND_WIDTH: usize = 5;

pub const REGISTER_COUNT: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegisterId {
    InstructionRegister,
    CycleCounter,
    A,
    B,
    C,
    R1,
    R2,
    Command,
    Input,
}

impl RegisterId {
    pub const ALL: [RegisterId; REGISTER_COUNT] = [
        Self::InstructionRegister,
        Self::CycleCounter,
        Self::A,
        Self::B,
        Self::C,
        Self::R1,
        Self::R2,
        Self::Command,
        Self::Input,
    ];

    pub fn width(&self) -> usize {
        match self {
            Self::InstructionRegister => INSTRUCTION_REGISTER_WIDTH,
            Self::CycleCounter => CYCLE_COUNTER_WIDTH,
            Self::Command => COMMAND_WIDTH,
            Self::A | Self::B | Self::C | Self::R1 | Self::R2 | Self::Input => DATA_WIDTH,
        }
    }

    /// The register a plain bus source reads. The ALU and input sources have side effects and are
    /// resolved by the device instead.
    pub fn for_source(source: Source) -> Option<Self> {
        match source {
            Source::InstructionRegister => Some(Self::InstructionRegister),
            Source::A => Some(Self::A),
            Source::B => Some(Self::B),
            Source::C => Some(Self::C),
            Source::Alu | Source::Input => None,
        }
    }

    /// The register a destination latches into, `None` for the output side channel.
    pub fn for_destination(destination: Destination) -> Option<Self> {
        match destination {
            Destination::InstructionRegister => Some(Self::InstructionRegister),
            Destination::A => Some(Self::A),
            Destination::B => Some(Self::B),
            Destination::C => Some(Self::C),
            Destination::R1 => Some(Self::R1),
            Destination::R2 => Some(Self::R2),
            Destination::Output => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::InstructionRegister => "RI",
            Self::CycleCounter => "Rc",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::R1 => "R1",
            Self::R2 => "R2",
            Self::Command => "command",
            Self::Input => "input",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegFile([BitRegister; REGISTER_COUNT]);

impl RegFile {
    pub fn new() -> Self {
        Self(RegisterId::ALL.map(|id| BitRegister::new(id.width())))
    }

    pub fn register(&self, id: RegisterId) -> &BitRegister {
        &self.0[id.index()]
    }

    pub fn register_mut(&mut self, id: RegisterId) -> &mut BitRegister {
        &mut self.0[id.index()]
    }

    pub fn value(&self, id: RegisterId) -> u8 {
        self.register(id).to_value() as u8
    }

    pub fn iter(&self) -> impl Iterator<Item = (RegisterId, &BitRegister)> + '_ {
        RegisterId::ALL.into_iter().zip(self.0.iter())
    }
}

impl Default for RegFile {
    fn default() -> Self {
        Self::new()
    }
}
