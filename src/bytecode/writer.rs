//! Bytecode buffer and writer.

use std::io::{self, Write, Seek, SeekFrom};
use crate::Address;
use crate::bytecode::Program;

/// Bytecode buffer and writer. Instruction writers (one per opcode) are generated by the `impl_opcodes!` macro.
#[derive(Debug, Default)]
pub struct Writer {
    instructions: Vec<u8>,
    position    : Address,
}

impl Writer {
    /// Creates a new writer instance.
    pub fn new() -> Self {
        Writer {
            instructions: Vec::new(),
            position    : 0,
        }
    }
    /// Returns the current length of the program.
    pub fn len(self: &Self) -> Address {
        self.instructions.len()
    }
    /// Returns whether nothing has been written yet.
    pub fn is_empty(self: &Self) -> bool {
        self.instructions.is_empty()
    }
    /// Returns the current write position.
    pub fn position(self: &Self) -> Address {
        self.position
    }
    /// Sets the current write position.
    pub fn set_position(self: &mut Self, new_position: Address) {
        self.position = new_position;
    }
    /// Returns the bytes written so far.
    pub fn bytes(self: &Self) -> &[u8] {
        &self.instructions[..]
    }
    /// Converts the writer into the underlying buffer.
    pub fn into_bytes(self: Self) -> Vec<u8> {
        self.instructions
    }
    /// Converts the writer into a program store.
    pub fn into_program(self: Self) -> Program {
        Program::new(self.instructions)
    }
    /// Overwrites the program at given position and returns to the previous position afterwards.
    pub fn overwrite<F, R>(self: &mut Self, position: Address, mut write_fn: F) -> R
        where F: FnMut(&mut Self) -> R
    {
        let original_position = self.position;
        self.position = position;
        let result = write_fn(self);
        self.position = original_position;
        result
    }
}

impl Write for Writer {
    fn write(self: &mut Self, buf: &[u8]) -> io::Result<usize> {
        if self.position > self.len() {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "write position beyond end of program"));
        }
        if self.position == self.len() {
            // append
            self.instructions.extend_from_slice(buf);
        } else {
            // overwrite
            let end = ::std::cmp::min(self.position + buf.len(), self.len());
            self.instructions.splice(self.position .. end, buf.iter().cloned());
        }
        self.position += buf.len();
        Ok(buf.len())
    }
    fn flush(self: &mut Self) -> io::Result<()> {
        Ok(())
    }
}

impl Seek for Writer {
    fn seek(self: &mut Self, pos: SeekFrom) -> io::Result<u64> {
        let new_position = match pos {
            SeekFrom::Start(pos) => pos as i64,
            SeekFrom::End(pos) => self.instructions.len() as i64 + pos,
            SeekFrom::Current(pos) => self.position as i64 + pos,
        };
        if new_position < 0 {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "seek to a negative position"));
        }
        self.position = new_position as Address;
        Ok(self.position as u64)
    }
}
