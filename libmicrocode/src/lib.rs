pub mod assembler;
pub mod microword;
pub mod store;

pub use microword::{
    selector::{Destination, Source},
    Microword, MicrowordParseError,
};
pub use store::MicrocodeStore;

/// Number of instruction slots addressed by the instruction register.
pub const INSTRUCTION_SLOTS: usize = 8;

/// Number of microcycles per instruction slot, addressed by the cycle counter.
pub const CYCLES_PER_INSTRUCTION: usize = 4;

pub const MICROWORD_BITS: usize = 8;

pub const COMMENT_PREFIX: char = '#';
