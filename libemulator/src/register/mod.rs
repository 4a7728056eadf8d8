use std::{fmt::Display, ops::Index};


pub type Value = u32;

/// A fixed-width register of bits, most significant first.
///
/// Every architectural register is one of these: the control counters use
/// [`BitRegister::increment`], the command register uses [`BitRegister::shift_in`]
/// and bus transfers use [`BitRegister::parallel_load`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitRegister {
    bits: Vec<bool>,
}

impl BitRegister {
    pub const MAX_WIDTH: usize = 8;

    pub fn new(width: usize) -> Self {
        assert!(
            (1..=Self::MAX_WIDTH).contains(&width),
            "Unsupported register width {}",
            width
        );

        Self {
            bits: vec![false; width],
        }
    }

    pub fn with_value(width: usize, value: Value) -> Self {
        let mut register = Self::new(width);
        register.from_value(value);
        register
    }

    pub fn width(&self) -> usize {
        self.bits.len()
    }

    pub fn bit(&self, index: usize) -> bool {
        *self.bits.get(index).expect("Out of bounds bit access")
    }

    pub fn set_bit(&mut self, index: usize, bit: bool) {
        *self.bits.get_mut(index).expect("Out of bounds bit access") = bit;
    }

    /// Serial load: drops the most significant bit and appends `bit` at the bottom.
    pub fn shift_in(&mut self, bit: bool) {
        self.bits.rotate_left(1);
        if let Some(last) = self.bits.last_mut() {
            *last = bit;
        }
    }

    /// Copies `source` right-aligned, zero-extending or truncating the high bits.
    pub fn parallel_load(&mut self, source: &BitRegister) {
        let width = self.width();
        let source_width = source.width();

        for k in 0..width {
            self.bits[width - 1 - k] = k < source_width && source.bits[source_width - 1 - k];
        }
    }

    /// Adds one with carry from the least significant bit, wrapping to zero on overflow.
    pub fn increment(&mut self) {
        for bit in self.bits.iter_mut().rev() {
            *bit = !*bit;
            if *bit {
                break;
            }
        }
    }

    pub fn to_value(&self) -> Value {
        self.bits
            .iter()
            .fold(0, |value, bit| value << 1 | *bit as Value)
    }

    /// Stores `value` reduced modulo 2^width.
    pub fn from_value(&mut self, value: Value) {
        let width = self.width();

        for (k, bit) in self.bits.iter_mut().enumerate() {
            *bit = (value >> (width - 1 - k)) & 1 == 1;
        }
    }

    pub fn is_zero(&self) -> bool {
        self.bits.iter().all(|bit| !bit)
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }
}

impl Index<usize> for BitRegister {
    type Output = bool;

    fn index(&self, index: usize) -> &Self::Output {
        self.bits.get(index).expect("Out of bounds bit access")
    }
}

impl Display for BitRegister {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for bit in &self.bits {
            f.write_str(if *bit { "1" } else { "0" })?;
        }

        Ok(())
    }
}
