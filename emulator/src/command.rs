use std::io::{self, Write};

use anyhow::anyhow;
use libemulator::regfile::RegisterId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command {0:?}")]
    UnknownCommand(String),

    #[error("{0} unused command arguments")]
    UnusedArguments(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateCommand {
    Step,
    FreeRun,
    Quit,
    Show(RegisterId),
    ShowAll,
}

pub struct Command(String);

impl Command {
    /// Reads one line from stdin, `None` once stdin is closed.
    pub fn prompt(prompt: &str) -> anyhow::Result<Option<Self>> {
        print!("{}", prompt);
        io::stdout().flush()?;

        io::stdin()
            .lines()
            .next()
            .transpose()
            .map(|line| line.map(Self))
            .map_err(|e| anyhow!("Couldn't read command from stdin: {}", e))
    }

    pub fn text(&self) -> &str {
        self.0.trim()
    }

    pub fn parse_gate(&self) -> Result<GateCommand, CommandError> {
        let mut args = self.0.split_whitespace();

        let command = match args.next() {
            None => GateCommand::Step,
            Some("n") => GateCommand::FreeRun,
            Some("q") => GateCommand::Quit,
            Some("a" | "A") => GateCommand::Show(RegisterId::A),
            Some("b" | "B") => GateCommand::Show(RegisterId::B),
            Some("c" | "C") => GateCommand::Show(RegisterId::C),
            Some("s") => GateCommand::ShowAll,
            Some(other) => return Err(CommandError::UnknownCommand(other.to_string())),
        };

        let unused_arg_count = args.count();
        if unused_arg_count != 0 {
            return Err(CommandError::UnusedArguments(unused_arg_count));
        }

        Ok(command)
    }
}
