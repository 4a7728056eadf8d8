use super::{StepEvents, StepTrace, TraceData};

/// Keeps every step trace of a run, in execution order.
#[derive(Debug, Clone, Default)]
pub struct StepHistory {
    pub traces: Vec<StepTrace>,
}

impl StepHistory {
    pub fn len(&self) -> usize {
        self.traces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }

    pub fn with_events(&self, events: StepEvents) -> impl Iterator<Item = &StepTrace> + '_ {
        self.traces
            .iter()
            .filter(move |trace| trace.events.contains(events))
    }

    pub fn count(&self, events: StepEvents) -> usize {
        self.with_events(events).count()
    }

    /// `(slot, cycle)` of every executed step.
    pub fn addresses(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.traces.iter().map(|trace| (trace.instruction, trace.cycle))
    }
}

impl TraceData for StepHistory {
    fn add_trace(&mut self, trace: StepTrace) {
        self.traces.push(trace);
    }
}
