//! Program store: an immutable instruction buffer and the program counter indexing into it.

use std::fmt::{self, Display};
use crate::{Address, Integer, Text};

/// Returned by program store reads that would run past the end of the instruction buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EndOfProgram;

impl Display for EndOfProgram {
    fn fmt(self: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unexpected end of program.")
    }
}

pub type ReadResult<T> = Result<T, EndOfProgram>;

/// A CVM bytecode program along with its program counter.
#[derive(Clone, Debug)]
pub struct Program {
    instructions: Vec<u8>,
    pc          : Address,
}

impl Program {
    /// Creates a new program store with the program counter at the start of the buffer.
    pub fn new(instructions: Vec<u8>) -> Self {
        Program {
            instructions,
            pc: 0,
        }
    }
    /// Returns the instruction buffer.
    pub fn instructions(self: &Self) -> &[u8] {
        &self.instructions[..]
    }
    /// Returns the length of the instruction buffer.
    pub fn len(self: &Self) -> Address {
        self.instructions.len()
    }
    /// Returns whether the instruction buffer is empty.
    pub fn is_empty(self: &Self) -> bool {
        self.instructions.is_empty()
    }
    /// Returns the current program counter.
    pub fn pc(self: &Self) -> Address {
        self.pc
    }
    /// Sets the program counter. Bounds are the caller's responsibility.
    pub fn set_pc(self: &mut Self, pc: Address) {
        self.pc = pc;
    }
    /// Returns whether the program counter is at (or past) the end of the instruction buffer.
    pub fn at_end(self: &Self) -> bool {
        self.pc >= self.instructions.len()
    }
    /// Returns the opcode byte at the program counter without advancing.
    pub fn current_opcode(self: &Self) -> ReadResult<u8> {
        self.instructions.get(self.pc).copied().ok_or(EndOfProgram)
    }
    /// Moves the program counter forward by the given number of bytes. Performs no bounds checks.
    pub fn advance(self: &mut Self, num_bytes: Address) {
        self.pc += num_bytes;
    }
    /// Reads a single byte operand and advances past it.
    pub fn read_byte(self: &mut Self) -> ReadResult<u8> {
        Self::take_byte(&self.instructions, &mut self.pc)
    }
    /// Reads a 4 byte little endian signed integer and advances past it.
    pub fn read_int32(self: &mut Self) -> ReadResult<Integer> {
        Self::take_int32(&self.instructions, &mut self.pc)
    }
    /// Reads a text value prefixed by a single length byte and advances past both.
    pub fn read_length_prefixed_text(self: &mut Self) -> ReadResult<Text> {
        Self::take_text(&self.instructions, &mut self.pc)
    }

    /// Consumes the given number of bytes at counter, advancing the counter only on success.
    fn take<'a>(code: &'a [u8], counter: &mut Address, num_bytes: usize) -> ReadResult<&'a [u8]> {
        let end = counter.checked_add(num_bytes).ok_or(EndOfProgram)?;
        let slice = code.get(*counter..end).ok_or(EndOfProgram)?;
        *counter = end;
        Ok(slice)
    }
    pub(crate) fn take_byte(code: &[u8], counter: &mut Address) -> ReadResult<u8> {
        Ok(Self::take(code, counter, 1)?[0])
    }
    pub(crate) fn take_int32(code: &[u8], counter: &mut Address) -> ReadResult<Integer> {
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(Self::take(code, counter, 4)?);
        Ok(Integer::from_le_bytes(bytes))
    }
    pub(crate) fn take_text(code: &[u8], counter: &mut Address) -> ReadResult<Text> {
        let mut position = *counter;
        let len = Self::take_byte(code, &mut position)? as usize;
        let text = Self::take(code, &mut position, len)?.to_vec();
        *counter = position;
        Ok(text)
    }

    /// Disassembles the whole program, one instruction per line. Stops at the first byte that does not decode.
    #[cfg(feature="debugging")]
    pub fn format_program(self: &Self) -> String {
        let mut position = 0;
        let mut result = String::new();
        while let Some((instruction, next_position)) = self.describe_instruction(position) {
            result.push_str(&instruction);
            result.push('\n');
            position = next_position;
        }
        if position < self.len() {
            result.push_str(&format!("{:>5} <undecodable 0x{:02x}>\n", position, self.instructions[position]));
        }
        result
    }
}

impl From<Vec<u8>> for Program {
    fn from(instructions: Vec<u8>) -> Self {
        Program::new(instructions)
    }
}
