use std::fmt::{self, Display};
use std::io;
use crate::{Address, Integer};

/// Represents the various possible runtime error-kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuntimeErrorKind {
    /// The opcode byte is not part of the instruction set.
    InvalidInstruction(u8),
    /// The program ended while operand bytes were still expected.
    EndOfProgram,
    /// A conditional jump found no comparison flag on the integer stack.
    EmptyStack,
    /// A jump targeted an address outside of the program.
    InvalidJumpTarget(Integer),
    /// An input token could not be parsed as an integer.
    InvalidInput,
    /// The console ran out of input while a token was required.
    EndOfInput,
    /// Reading from or writing to the console failed.
    Io(io::ErrorKind),
}

/// An error reported by the runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeError {
    kind: RuntimeErrorKind,
    offset: Address,
}

impl RuntimeError {
    pub(crate) fn new(offset: Address, kind: RuntimeErrorKind) -> RuntimeError {
        Self { kind, offset }
    }
    /// The kind of the error.
    pub fn kind(self: &Self) -> &RuntimeErrorKind {
        &self.kind
    }
    /// Offset of the opcode that raised the error.
    pub fn offset(self: &Self) -> Address {
        self.offset
    }
}

impl Display for RuntimeError {
    fn fmt(self: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            RuntimeErrorKind::InvalidInstruction(opcode) => write!(f, "Invalid instruction 0x{:02x} at offset {}.", opcode, self.offset),
            RuntimeErrorKind::EndOfProgram => write!(f, "Unexpected end of program while decoding the instruction at offset {}.", self.offset),
            RuntimeErrorKind::EmptyStack => write!(f, "Conditional jump at offset {} found an empty integer stack.", self.offset),
            RuntimeErrorKind::InvalidJumpTarget(target) => write!(f, "Jump at offset {} targets invalid address {}.", self.offset, target),
            RuntimeErrorKind::InvalidInput => write!(f, "Input at offset {} is not an integer.", self.offset),
            RuntimeErrorKind::EndOfInput => write!(f, "Input at offset {} reached the end of input.", self.offset),
            RuntimeErrorKind::Io(kind) => write!(f, "Console error at offset {}: {}.", self.offset, io::Error::from(*kind)),
        }
    }
}

impl std::error::Error for RuntimeError { }

pub type RuntimeResult<T = ()> = Result<T, RuntimeError>;
