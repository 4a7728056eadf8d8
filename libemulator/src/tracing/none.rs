use super::{StepTrace, TraceData};

#[derive(Debug, Clone, Copy, Default)]
pub struct NoTraceData;

impl TraceData for NoTraceData {
    fn add_trace(&mut self, _: StepTrace) {}
}
