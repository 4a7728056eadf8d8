use bitflags::bitflags;
use libmicrocode::Microword;

use crate::snapshot::Snapshot;

pub mod history;
pub mod none;

#[cfg(test)]
mod tests;

bitflags! {
    /// What a single step did besides advancing the counters.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StepEvents: u8 {
        const ALU_EVALUATED   = 0b1;
        const INPUT_READ      = 0b10;
        const OUTPUT_EMITTED  = 0b100;
        const TRANSFERRED     = 0b1000;
        const COMMAND_SHIFTED = 0b10000;
        const HALTED          = 0b100000;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepTrace {
    pub instruction: usize,
    pub cycle: usize,
    pub microword: Microword,
    /// Register state before the step ran.
    pub before: Snapshot,
    pub events: StepEvents,
}

pub trait TraceData {
    fn add_trace(&mut self, trace: StepTrace);
}
