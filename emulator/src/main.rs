use std::{path::PathBuf, process::exit};

use anyhow::{anyhow, bail};
use clap::Parser;
use console::{ConsoleGate, ConsolePeripherals};
use libemulator::{Device, RunOutcome};

mod command;
mod console;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Microcode resource to load.
    #[arg(short, long, default_value = "RAM.txt")]
    microcode: PathBuf,

    /// Run to the end without pausing after each step.
    #[arg(short, long)]
    no_wait: bool,

    /// 4-bit input values (e.g. 0101), consumed before prompting on stdin.
    #[arg(short, long, value_parser = console::parse_input_bits)]
    input: Vec<u8>,

    #[arg(long, default_value_t = 10_000)]
    max_steps: usize,

    /// Print the microcode listing and exit.
    #[arg(short, long)]
    list: bool,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("{:#}", e);
        exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let microcode = libemulator::load_microcode(&args.microcode)?;

    if args.list {
        print!("{}", console::format_listing(&microcode));
        return Ok(());
    }

    let mut device = Device::new(microcode);
    let mut peripherals = ConsolePeripherals::new(args.input);
    let mut gate = ConsoleGate::new(args.no_wait);

    let outcome = device
        .execute_gated(&mut peripherals, &mut gate, args.max_steps)
        .map_err(|e| {
            let snapshot = device.snapshot();
            anyhow!("{} at RI: {} Rc: {}", e, snapshot.ri, snapshot.rc)
        })?;

    match outcome {
        RunOutcome::Halted { steps } => println!("Halted after {} steps", steps),
        RunOutcome::Quit { steps } => println!("Stopped after {} steps", steps),
        RunOutcome::StepLimit { steps } => {
            bail!("Didn't halt within {} steps", steps)
        }
    }

    Ok(())
}
