use crate::regfile::{RegFile, RegisterId};

/// Register values at one instant, for display layers and traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Snapshot {
    pub ri: u8,
    pub rc: u8,
    pub a: u8,
    pub b: u8,
    pub c: u8,
    pub r1: u8,
    pub r2: u8,
    pub command: u8,
    pub input: u8,
}

impl Snapshot {
    pub fn of(reg_file: &RegFile) -> Self {
        Self {
            ri: reg_file.value(RegisterId::InstructionRegister),
            rc: reg_file.value(RegisterId::CycleCounter),
            a: reg_file.value(RegisterId::A),
            b: reg_file.value(RegisterId::B),
            c: reg_file.value(RegisterId::C),
            r1: reg_file.value(RegisterId::R1),
            r2: reg_file.value(RegisterId::R2),
            command: reg_file.value(RegisterId::Command),
            input: reg_file.value(RegisterId::Input),
        }
    }

    pub fn get(&self, id: RegisterId) -> u8 {
        match id {
            RegisterId::InstructionRegister => self.ri,
            RegisterId::CycleCounter => self.rc,
            RegisterId::A => self.a,
            RegisterId::B => self.b,
            RegisterId::C => self.c,
            RegisterId::R1 => self.r1,
            RegisterId::R2 => self.r2,
            RegisterId::Command => self.command,
            RegisterId::Input => self.input,
        }
    }

    pub fn is_origin(&self) -> bool {
        self.ri == 0 && self.rc == 0
    }
}
