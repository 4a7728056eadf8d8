use std::collections::VecDeque;

use crate::register::BitRegister;

/// The outside world as seen by the bus: an input port and an output side channel.
pub trait Peripherals {
    /// Supplies one input value, or `None` when there is nothing left to read.
    /// Values wider than the input buffer are reduced modulo its width.
    fn read_input(&mut self) -> Option<u8>;

    fn write_output(&mut self, value: &BitRegister);
}

/// Headless peripherals fed from a queue, recording everything written to the output.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPeripherals {
    pub inputs: VecDeque<u8>,
    pub outputs: Vec<u8>,
}

impl ScriptedPeripherals {
    pub fn new<I>(inputs: I) -> Self
    where
        I: IntoIterator<Item = u8>,
    {
        Self {
            inputs: inputs.into_iter().collect(),
            outputs: Vec::new(),
        }
    }
}

impl Peripherals for ScriptedPeripherals {
    fn read_input(&mut self) -> Option<u8> {
        self.inputs.pop_front()
    }

    fn write_output(&mut self, value: &BitRegister) {
        self.outputs.push(value.to_value() as u8);
    }
}
