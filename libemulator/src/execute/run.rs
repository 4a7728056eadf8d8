use crate::{io::Peripherals, snapshot::Snapshot, tracing::TraceData, Device};

use super::{ExecuteErr, ExecuteOk};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Continue,
    /// Keep going without asking again for the rest of the run.
    FreeRun,
    Quit,
}

/// Decides, between steps, whether a run goes on. Interactive front ends block in here.
pub trait StepGate {
    /// Called before every step, including while free-running.
    fn before_step(&mut self, _snapshot: &Snapshot) {}

    fn after_step(&mut self, snapshot: &Snapshot) -> GateDecision;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FreeRunGate;

impl StepGate for FreeRunGate {
    fn after_step(&mut self, _: &Snapshot) -> GateDecision {
        GateDecision::FreeRun
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Halted { steps: usize },
    Quit { steps: usize },
    StepLimit { steps: usize },
}

impl RunOutcome {
    pub fn steps(&self) -> usize {
        match self {
            Self::Halted { steps } | Self::Quit { steps } | Self::StepLimit { steps } => *steps,
        }
    }
}

impl<T> Device<T>
where
    T: TraceData,
{
    /// Steps until the counters return to the origin, or `max_steps` steps have run.
    pub fn execute_to_halt<P>(
        &mut self,
        peripherals: &mut P,
        max_steps: usize,
    ) -> Result<RunOutcome, ExecuteErr>
    where
        P: Peripherals + ?Sized,
    {
        self.execute_gated(peripherals, &mut FreeRunGate, max_steps)
    }

    pub fn execute_gated<P, G>(
        &mut self,
        peripherals: &mut P,
        gate: &mut G,
        max_steps: usize,
    ) -> Result<RunOutcome, ExecuteErr>
    where
        P: Peripherals + ?Sized,
        G: StepGate + ?Sized,
    {
        let mut free_running = false;
        let mut steps = 0;

        let outcome = loop {
            if steps >= max_steps {
                break RunOutcome::StepLimit { steps };
            }

            gate.before_step(&self.snapshot());

            let result = self.step(peripherals)?;
            steps += 1;

            if result == ExecuteOk::Halted {
                break RunOutcome::Halted { steps };
            }

            if !free_running {
                match gate.after_step(&self.snapshot()) {
                    GateDecision::Continue => {}
                    GateDecision::FreeRun => free_running = true,
                    GateDecision::Quit => break RunOutcome::Quit { steps },
                }
            }
        };

        log::info!("Run finished: {:?}", outcome);

        Ok(outcome)
    }
}
