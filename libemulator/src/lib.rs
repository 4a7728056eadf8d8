use std::{fs::File, io::BufReader, path::Path};

use alu::Alu;
use anyhow::Context;
use libmicrocode::MicrocodeStore;
use regfile::{RegFile, RegisterId};
use register::BitRegister;
use snapshot::Snapshot;
use tracing::{none::NoTraceData, TraceData};

pub mod alu;
pub mod execute;
pub mod io;
pub mod regfile;
pub mod register;
pub mod snapshot;
pub mod tracing;

pub use execute::{
    run::{FreeRunGate, GateDecision, RunOutcome, StepGate},
    ExecuteErr, ExecuteOk,
};

/// The toy computer: its registers, ALU and microcode, driven one bus transfer per step.
pub struct Device<T = NoTraceData>
where
    T: TraceData,
{
    microcode: MicrocodeStore,
    reg_file: RegFile,
    alu: Alu,
    halted: bool,
    pub tracing: T,
}

impl Device<NoTraceData> {
    pub fn new(microcode: MicrocodeStore) -> Self {
        Self::new_traced(microcode, NoTraceData)
    }
}

impl<T> Device<T>
where
    T: TraceData,
{
    pub fn new_traced(microcode: MicrocodeStore, tracing: T) -> Self {
        Self {
            microcode,
            reg_file: RegFile::new(),
            alu: Alu::new(),
            halted: false,
            tracing,
        }
    }

    /// Zeroes every register and clears the halt flag. Microcode and traces are kept.
    pub fn reset(&mut self) {
        self.reg_file = RegFile::new();
        self.alu = Alu::new();
        self.halted = false;
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(&self.reg_file)
    }

    pub fn register(&self, id: RegisterId) -> &BitRegister {
        self.reg_file.register(id)
    }

    pub fn microcode(&self) -> &MicrocodeStore {
        &self.microcode
    }

    pub fn alu(&self) -> &Alu {
        &self.alu
    }
}

/// Loads a microcode resource from disk.
pub fn load_microcode<P>(path: P) -> anyhow::Result<MicrocodeStore>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = File::open(path)
        .with_context(|| format!("Couldn't open microcode file {}", path.display()))?;
    let store = MicrocodeStore::load(BufReader::new(file))
        .with_context(|| format!("Couldn't read microcode file {}", path.display()))?;

    log::info!("Loaded microcode from {}", path.display());

    Ok(store)
}
