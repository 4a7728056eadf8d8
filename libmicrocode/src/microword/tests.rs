use super::{
    selector::{Destination, Source},
    Microword, MicrowordParseError,
};

#[test]
fn fields_are_decoded_msb_first() -> anyhow::Result<()> {
    let word: Microword = "10110011".parse()?;

    assert_eq!(word.source_code(), 0b101);
    assert_eq!(word.destination_code(), 0b100);
    assert_eq!(word.command_bits(), [true, true]);
    assert_eq!(word.source(), Some(Source::Input));
    assert_eq!(word.destination(), Some(Destination::R1));

    Ok(())
}

#[test]
fn command_bits_keep_their_order() -> anyhow::Result<()> {
    let word: Microword = "00000010".parse()?;
    assert_eq!(word.command_bits(), [true, false]);

    let word: Microword = "00000001".parse()?;
    assert_eq!(word.command_bits(), [false, true]);

    Ok(())
}

#[test]
fn unassigned_selectors_decode_to_none() -> anyhow::Result<()> {
    let word: Microword = "11011100".parse()?;

    assert_eq!(word.source_code(), 6);
    assert_eq!(word.source(), None);
    assert_eq!(word.destination_code(), 7);
    assert_eq!(word.destination(), None);

    let word: Microword = "11100000".parse()?;
    assert_eq!(word.source(), None);

    Ok(())
}

#[test]
fn rejects_partial_and_oversized_words() {
    assert_eq!(
        "0101".parse::<Microword>(),
        Err(MicrowordParseError::WrongLength(4))
    );
    assert_eq!(
        "010101010".parse::<Microword>(),
        Err(MicrowordParseError::WrongLength(9))
    );
}

#[test]
fn rejects_non_binary_characters() {
    assert_eq!(
        "0101201a".parse::<Microword>(),
        Err(MicrowordParseError::InvalidBit('2'))
    );
}

#[test]
fn built_words_match_their_text_form() {
    let word = Microword::transfer(Source::A, Destination::R1, [true, false]);

    assert_eq!(word.to_string(), "00110010");
    assert_eq!(word.mnemonic(), "A -> R1 [10]");
}

#[test]
fn mnemonic_names_unassigned_codes() {
    let word = Microword::new(7, 7, [false, false]);

    assert_eq!(word.mnemonic(), "tx7 -> rx7 [00]");
}

#[test]
fn only_control_and_operand_destinations_shift_the_command() {
    assert!(Destination::InstructionRegister.shifts_command());
    assert!(Destination::R1.shifts_command());
    assert!(Destination::R2.shifts_command());

    assert!(!Destination::A.shifts_command());
    assert!(!Destination::B.shifts_command());
    assert!(!Destination::C.shifts_command());
    assert!(!Destination::Output.shifts_command());
}
