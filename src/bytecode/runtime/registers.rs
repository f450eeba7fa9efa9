use std::collections::BTreeMap;
use crate::{Integer, RegisterIndex, NUM_REGISTERS};

/// The VM's register bank.
///
/// Registers `1..=NUM_REGISTERS` exist from the start, initialized to zero. Any other index is treated as a fresh
/// zero-valued register that is added to the bank on first use.
#[derive(Clone, Debug, PartialEq)]
pub struct Registers {
    values: BTreeMap<RegisterIndex, Integer>,
}

impl Registers {
    /// Creates a register bank with all initial registers set to zero.
    pub fn new() -> Self {
        Registers {
            values: (1..=NUM_REGISTERS).map(|index| (index, 0)).collect(),
        }
    }
    /// Returns the value of the given register, adding it to the bank if it did not exist.
    pub fn load(self: &mut Self, index: RegisterIndex) -> Integer {
        *self.values.entry(index).or_insert(0)
    }
    /// Stores a value in the given register.
    pub fn store(self: &mut Self, index: RegisterIndex, value: Integer) {
        self.values.insert(index, value);
    }
    /// Returns the value of the given register if it exists.
    pub fn get(self: &Self, index: RegisterIndex) -> Option<Integer> {
        self.values.get(&index).copied()
    }
    /// Returns the number of registers in the bank.
    pub fn len(self: &Self) -> usize {
        self.values.len()
    }
    /// Iterates over all registers in index order.
    pub fn iter(self: &Self) -> impl Iterator<Item = (RegisterIndex, Integer)> + '_ {
        self.values.iter().map(|(&index, &value)| (index, value))
    }
}

impl Default for Registers {
    fn default() -> Self {
        Registers::new()
    }
}
