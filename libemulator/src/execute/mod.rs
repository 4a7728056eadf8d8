use libmicrocode::{Destination, Microword, Source};
use thiserror::Error;

use crate::{
    alu::{op::AluOp, AluError},
    io::Peripherals,
    regfile::RegisterId,
    register::BitRegister,
    tracing::{StepEvents, StepTrace, TraceData},
    Device,
};

pub mod run;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteOk {
    Normal,
    Halted,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteErr {
    #[error(transparent)]
    Alu(#[from] AluError),

    #[error("No input available")]
    InputExhausted,
}

impl<T> Device<T>
where
    T: TraceData,
{
    /// Runs one microcycle: fetch, route the bus transfer, clock the command register and advance
    /// the counters.
    ///
    /// A failed step leaves every register as it was.
    pub fn step<P>(&mut self, peripherals: &mut P) -> Result<ExecuteOk, ExecuteErr>
    where
        P: Peripherals + ?Sized,
    {
        let before = self.snapshot();
        let (instruction, cycle) = (before.ri as usize, before.rc as usize);
        let microword = self.microcode.lookup(instruction, cycle);

        log::debug!("[{}:{}] {}", instruction, cycle, microword.mnemonic());

        let mut events = StepEvents::empty();

        let value = self.resolve_source(microword, peripherals, &mut events)?;
        self.transfer(microword, value, peripherals, &mut events);

        if microword
            .destination()
            .is_some_and(|destination| destination.shifts_command())
        {
            self.shift_command(microword);
            events |= StepEvents::COMMAND_SHIFTED;
        }

        self.advance_counters();

        let snapshot = self.snapshot();
        self.halted = snapshot.is_origin();
        if self.halted {
            events |= StepEvents::HALTED;
        }

        self.tracing.add_trace(StepTrace {
            instruction,
            cycle,
            microword,
            before,
            events,
        });

        Ok(if self.halted {
            ExecuteOk::Halted
        } else {
            ExecuteOk::Normal
        })
    }

    /// Reads the value driven onto the bus. The ALU and input sources act here, before anything
    /// is written.
    fn resolve_source<P>(
        &mut self,
        microword: Microword,
        peripherals: &mut P,
        events: &mut StepEvents,
    ) -> Result<Option<BitRegister>, ExecuteErr>
    where
        P: Peripherals + ?Sized,
    {
        let Some(source) = microword.source() else {
            log::trace!("No source for tx{}", microword.source_code());
            return Ok(None);
        };

        let value = match source {
            Source::Alu => {
                let command = self.reg_file.register(RegisterId::Command);
                log::debug!("ALU {}", AluOp::decode(command.to_value()));

                let output = self.alu.evaluate(
                    self.reg_file.register(RegisterId::R1),
                    self.reg_file.register(RegisterId::R2),
                    command,
                )?;

                *events |= StepEvents::ALU_EVALUATED;
                output.clone()
            }

            Source::Input => {
                let input = peripherals
                    .read_input()
                    .ok_or(ExecuteErr::InputExhausted)?;

                let buffer = self.reg_file.register_mut(RegisterId::Input);
                buffer.from_value(input as u32);

                *events |= StepEvents::INPUT_READ;
                buffer.clone()
            }

            _ => {
                let id = RegisterId::for_source(source).expect("Source without a register");
                self.reg_file.register(id).clone()
            }
        };

        Ok(Some(value))
    }

    fn transfer<P>(
        &mut self,
        microword: Microword,
        value: Option<BitRegister>,
        peripherals: &mut P,
        events: &mut StepEvents,
    ) where
        P: Peripherals + ?Sized,
    {
        let (Some(destination), Some(value)) = (microword.destination(), value) else {
            log::trace!("No transfer for {}", microword.mnemonic());
            return;
        };

        match RegisterId::for_destination(destination) {
            Some(id) => {
                log::trace!("{} <- {}", id.name(), value);
                self.reg_file.register_mut(id).parallel_load(&value);
                *events |= StepEvents::TRANSFERRED;
            }

            None => {
                debug_assert_eq!(destination, Destination::Output);
                log::trace!("output <- {}", value);
                peripherals.write_output(&value);
                *events |= StepEvents::OUTPUT_EMITTED;
            }
        }
    }

    fn shift_command(&mut self, microword: Microword) {
        let command = self.reg_file.register_mut(RegisterId::Command);

        for bit in microword.command_bits() {
            command.shift_in(bit);
        }

        log::trace!("command <- {}", command);
    }

    fn advance_counters(&mut self) {
        let cycle = self.reg_file.register_mut(RegisterId::CycleCounter);
        cycle.increment();

        if cycle.is_zero() {
            self.reg_file
                .register_mut(RegisterId::InstructionRegister)
                .increment();
        }
    }
}
