use crate::register::BitRegister;

use super::{
    op::{AluOp, ArithmeticOp, LogicOp},
    Alu, AluError,
};

fn operands(r1: u32, r2: u32) -> (BitRegister, BitRegister) {
    (BitRegister::with_value(4, r1), BitRegister::with_value(4, r2))
}

fn arithmetic(command: u32, r1: u32, r2: u32) -> Result<u32, AluError> {
    let (r1, r2) = operands(r1, r2);
    let command = BitRegister::with_value(5, command);

    Alu::new()
        .evaluate(&r1, &r2, &command)
        .map(|output| output.to_value())
}

#[test]
fn add() {
    assert_eq!(arithmetic(3, 3, 5), Ok(0b1000));
}

#[test]
fn multiply() {
    assert_eq!(arithmetic(7, 3, 5), Ok(0b1111));
}

#[test]
fn multiply_wraps() {
    assert_eq!(arithmetic(7, 4, 5), Ok(20 % 16));
}

#[test]
fn decrement_wraps_below_zero() {
    assert_eq!(arithmetic(15, 0, 9), Ok(0b1111));
}

#[test]
fn subtraction_wraps_euclidean() {
    assert_eq!(arithmetic(11, 2, 5), Ok(13));
    assert_eq!(arithmetic(4, 1, 3), Ok((1 - 9i32).rem_euclid(16) as u32));
}

#[test]
fn full_arithmetic_table() {
    let (a, b) = (7, 3);
    let expected = [
        0,
        7 / 3,
        7 * 3 - 1,
        7 + 3,
        49 - 9,
        14,
        5,
        21,
        7 % 3,
        3,
        21 - 10,
        4,
        16,
        7,
        49,
        6,
    ];

    for (command, expected) in expected.into_iter().enumerate() {
        assert_eq!(
            arithmetic(command as u32, a, b),
            Ok(expected % 16),
            "command {}",
            command
        );
    }
}

#[test]
fn average_floors() {
    assert_eq!(arithmetic(6, 4, 7), Ok(5));
}

#[test]
fn division_by_zero_is_reported() {
    assert_eq!(
        arithmetic(1, 9, 0),
        Err(AluError::DivisionByZero(ArithmeticOp::Divide))
    );
    assert_eq!(
        arithmetic(8, 9, 0),
        Err(AluError::DivisionByZero(ArithmeticOp::Modulo))
    );
}

#[test]
fn division_by_zero_keeps_previous_output() {
    let mut alu = Alu::new();
    let (r1, r2) = operands(6, 3);

    alu.evaluate(&r1, &r2, &BitRegister::with_value(5, 3))
        .unwrap();
    assert_eq!(alu.output().to_value(), 9);

    let zero = BitRegister::new(4);
    let result = alu.evaluate(&r1, &zero, &BitRegister::with_value(5, 1));

    assert!(result.is_err());
    assert_eq!(alu.output().to_value(), 9);
}

#[test]
fn not_r1_ignores_r2() {
    for r2 in [0b0000, 0b1111, 0b0110] {
        let (r1, r2) = operands(0b1010, r2);
        let mut alu = Alu::new();

        let output = alu
            .evaluate(&r1, &r2, &BitRegister::with_value(5, 16))
            .unwrap();

        assert_eq!(output.to_string(), "0101");
    }
}

#[test]
fn logic_truth_table() {
    // R1 = 0011 and R2 = 0101 cover every (a, b) pair, one per bit: (0,0) (0,1) (1,0) (1,1).
    let expected = [
        "1100", "1110", "1101", "1111", "0110", "0110", "1101", "0111", "0010", "1011", "0001",
        "1001", "1010", "1000", "1001", "1001",
    ];
    let (r1, r2) = operands(0b0011, 0b0101);

    for (index, expected) in expected.into_iter().enumerate() {
        let command = BitRegister::with_value(5, 16 + index as u32);
        let mut alu = Alu::new();

        let output = alu.evaluate(&r1, &r2, &command).unwrap();

        assert_eq!(output.to_string(), expected, "logic op {}", index);
    }
}

#[test]
fn logic_outputs_stay_binary() {
    let (r1, r2) = operands(0b1111, 0b0000);

    for index in 0..16 {
        let command = BitRegister::with_value(5, 16 + index);
        let mut alu = Alu::new();

        let value = alu.evaluate(&r1, &r2, &command).unwrap().to_value();
        assert!(value < 16);
    }
}

#[test]
fn decode_splits_on_the_high_bit() {
    assert_eq!(AluOp::decode(3), AluOp::Arithmetic(ArithmeticOp::Add));
    assert_eq!(AluOp::decode(15), AluOp::Arithmetic(ArithmeticOp::Decrement));
    assert_eq!(AluOp::decode(16), AluOp::Logic(LogicOp::NotA));
    assert_eq!(AluOp::decode(26), AluOp::Logic(LogicOp::And));
    assert_eq!(AluOp::decode(31), AluOp::Logic(LogicOp::XnorAlt));
}
