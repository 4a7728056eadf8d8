use std::collections::VecDeque;

use libemulator::{
    io::Peripherals, regfile::RegisterId, register::BitRegister, snapshot::Snapshot, GateDecision,
    StepGate,
};
use libmicrocode::MicrocodeStore;
use thiserror::Error;

use crate::command::{Command, GateCommand};

pub const INPUT_BITS: usize = 4;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Expected {expected} bits, found {0}", expected = INPUT_BITS)]
    WrongLength(usize),

    #[error("Invalid bit character {0:?}")]
    InvalidBit(char),
}

/// Parses a 4-bit input value written as `0`/`1` characters, most significant first.
pub fn parse_input_bits(text: &str) -> Result<u8, InputError> {
    let length = text.chars().count();
    if length != INPUT_BITS {
        return Err(InputError::WrongLength(length));
    }

    text.chars().try_fold(0, |value, c| match c {
        '0' => Ok(value << 1),
        '1' => Ok(value << 1 | 1),
        other => Err(InputError::InvalidBit(other)),
    })
}

fn bits(id: RegisterId, value: u8) -> String {
    format!("{:0width$b}", value, width = id.width())
}

pub fn format_state(snapshot: &Snapshot) -> String {
    format!(
        "RI: {} Rc: {} A: {} B: {} C: {}",
        bits(RegisterId::InstructionRegister, snapshot.ri),
        bits(RegisterId::CycleCounter, snapshot.rc),
        bits(RegisterId::A, snapshot.a),
        bits(RegisterId::B, snapshot.b),
        bits(RegisterId::C, snapshot.c),
    )
}

pub fn format_register(snapshot: &Snapshot, id: RegisterId) -> String {
    format!("{}: {}", id.name(), bits(id, snapshot.get(id)))
}

pub fn format_listing(microcode: &MicrocodeStore) -> String {
    let mut output = String::new();

    for (slot, cycle, word) in microcode.iter() {
        if cycle == 0 {
            output.push_str(&format!("slot {}\n", slot));
        }

        output.push_str(&format!("  {}: {}  {}\n", cycle, word, word.mnemonic()));
    }

    output
}

/// Reads inputs from the command line queue first, then from stdin.
pub struct ConsolePeripherals {
    queued: VecDeque<u8>,
}

impl ConsolePeripherals {
    pub fn new<I>(queued: I) -> Self
    where
        I: IntoIterator<Item = u8>,
    {
        Self {
            queued: queued.into_iter().collect(),
        }
    }
}

impl Peripherals for ConsolePeripherals {
    fn read_input(&mut self) -> Option<u8> {
        if let Some(value) = self.queued.pop_front() {
            return Some(value);
        }

        loop {
            let line = match Command::prompt("Input: ") {
                Ok(Some(line)) => line,
                Ok(None) => return None,
                Err(e) => {
                    log::error!("{}", e);
                    return None;
                }
            };

            match parse_input_bits(line.text()) {
                Ok(value) => return Some(value),
                Err(e) => eprintln!("!> {}", e),
            }
        }
    }

    fn write_output(&mut self, value: &BitRegister) {
        println!("Output: {}", value);
    }
}

/// Prints the state before each step and waits for a command after it.
pub struct ConsoleGate {
    no_wait: bool,
}

impl ConsoleGate {
    pub fn new(no_wait: bool) -> Self {
        Self { no_wait }
    }
}

impl StepGate for ConsoleGate {
    fn before_step(&mut self, snapshot: &Snapshot) {
        println!("{}", format_state(snapshot));
    }

    fn after_step(&mut self, snapshot: &Snapshot) -> GateDecision {
        if self.no_wait {
            return GateDecision::FreeRun;
        }

        loop {
            let command = match Command::prompt("> ") {
                Ok(Some(command)) => command,
                Ok(None) => return GateDecision::Quit,
                Err(e) => {
                    log::error!("{}", e);
                    return GateDecision::Quit;
                }
            };

            match command.parse_gate() {
                Ok(GateCommand::Step) => return GateDecision::Continue,
                Ok(GateCommand::FreeRun) => {
                    self.no_wait = true;
                    return GateDecision::FreeRun;
                }
                Ok(GateCommand::Quit) => return GateDecision::Quit,
                Ok(GateCommand::Show(id)) => println!("{}", format_register(snapshot, id)),
                Ok(GateCommand::ShowAll) => {
                    for id in RegisterId::ALL {
                        println!("{}", format_register(snapshot, id));
                    }
                }
                Err(e) => eprintln!("!> {}", e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use libemulator::{regfile::RegisterId, snapshot::Snapshot};
    use libmicrocode::{Destination, MicrocodeStore, Microword, Source};

    use super::{format_listing, format_register, format_state, parse_input_bits, InputError};

    #[test]
    fn input_bits_are_msb_first() {
        assert_eq!(parse_input_bits("0101"), Ok(5));
        assert_eq!(parse_input_bits("1111"), Ok(15));
    }

    #[test]
    fn input_must_be_four_binary_digits() {
        assert_eq!(parse_input_bits("101"), Err(InputError::WrongLength(3)));
        assert_eq!(parse_input_bits("10101"), Err(InputError::WrongLength(5)));
        assert_eq!(parse_input_bits("10a1"), Err(InputError::InvalidBit('a')));
    }

    #[test]
    fn state_line_uses_register_widths() {
        let snapshot = Snapshot {
            ri: 5,
            rc: 1,
            a: 3,
            b: 12,
            c: 0,
            ..Default::default()
        };

        assert_eq!(
            format_state(&snapshot),
            "RI: 101 Rc: 01 A: 0011 B: 1100 C: 0000"
        );
        assert_eq!(
            format_register(&snapshot, RegisterId::Command),
            "command: 00000"
        );
    }

    #[test]
    fn listing_shows_text_and_mnemonic() {
        let microcode = MicrocodeStore::from_words([Microword::transfer(
            Source::Input,
            Destination::A,
            [false, true],
        )]);

        let listing = format_listing(&microcode);

        assert!(listing.starts_with("slot 0\n  0: 10100101  input -> A [01]\n"));
        assert_eq!(listing.lines().count(), 8 * 5);
    }
}
