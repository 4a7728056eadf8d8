use libmicrocode::{Destination, MicrocodeStore, Microword, Source};

use crate::{io::ScriptedPeripherals, Device};

use super::{history::StepHistory, StepEvents};

#[test]
fn step_trace_gets_created() -> anyhow::Result<()> {
    let mut device = Device::new_traced(MicrocodeStore::default(), StepHistory::default());
    device.step(&mut ScriptedPeripherals::default())?;

    let trace = device.tracing.traces.first().expect("No trace was created");

    assert_eq!((trace.instruction, trace.cycle), (0, 0));
    assert!(trace.before.is_origin());
    assert!(trace.events.contains(StepEvents::TRANSFERRED | StepEvents::COMMAND_SHIFTED));

    Ok(())
}

#[test]
fn history_follows_the_addressing_order() -> anyhow::Result<()> {
    let mut device = Device::new_traced(MicrocodeStore::default(), StepHistory::default());
    device.execute_to_halt(&mut ScriptedPeripherals::default(), 1000)?;

    let addresses: Vec<_> = device.tracing.addresses().collect();
    let expected: Vec<_> = (0..8)
        .flat_map(|slot| (0..4).map(move |cycle| (slot, cycle)))
        .collect();

    assert_eq!(addresses, expected);
    assert_eq!(device.tracing.count(StepEvents::HALTED), 1);
    assert!(device
        .tracing
        .traces
        .last()
        .is_some_and(|trace| trace.events.contains(StepEvents::HALTED)));

    Ok(())
}

#[test]
fn events_describe_side_effects() -> anyhow::Result<()> {
    let microcode = MicrocodeStore::from_words([
        Microword::transfer(Source::Input, Destination::A, [false, false]),
        Microword::transfer(Source::A, Destination::R1, [true, true]),
        Microword::transfer(Source::Alu, Destination::Output, [false, false]),
        Microword::new(6, 7, [false, false]),
    ]);
    let mut device = Device::new_traced(microcode, StepHistory::default());
    let mut peripherals = ScriptedPeripherals::new([4]);

    for _ in 0..4 {
        device.step(&mut peripherals)?;
    }

    let events: Vec<_> = device
        .tracing
        .traces
        .iter()
        .map(|trace| trace.events)
        .collect();

    assert_eq!(
        events,
        [
            StepEvents::INPUT_READ | StepEvents::TRANSFERRED,
            StepEvents::TRANSFERRED | StepEvents::COMMAND_SHIFTED,
            StepEvents::ALU_EVALUATED | StepEvents::OUTPUT_EMITTED,
            StepEvents::empty(),
        ]
    );
    assert_eq!(device.tracing.count(StepEvents::OUTPUT_EMITTED), 1);
    assert_eq!(device.tracing.traces[2].before.command, 0b11);

    Ok(())
}

#[test]
fn failed_steps_leave_no_trace() {
    let microcode =
        MicrocodeStore::from_words([Microword::transfer(Source::Input, Destination::A, [false, false])]);
    let mut device = Device::new_traced(microcode, StepHistory::default());

    assert!(device.step(&mut ScriptedPeripherals::default()).is_err());
    assert!(device.tracing.is_empty());
}
