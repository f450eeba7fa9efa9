use std::fmt::{self, Display};

/// Represents the various possible assembler error-kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AsmErrorKind {
    SyntaxError,
    InvalidNumerical,
    UnknownMnemonic,
    UnknownRegister,
    TextTooLong,
    DuplicateLabel,
    UndefinedLabel,
    ScratchRegister,
}

/// An error reported by the assembler (e.g. syntax error).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AsmError {
    kind: AsmErrorKind,
    position: usize,
}

impl AsmError {
    pub(crate) fn new(kind: AsmErrorKind, position: usize) -> AsmError {
        Self { kind, position }
    }
    /// The kind of the error.
    pub fn kind(self: &Self) -> &AsmErrorKind {
        &self.kind
    }
    /// Byte offset into the assembly source where the error occured.
    pub fn position(self: &Self) -> usize {
        self.position
    }
    /// Compute 1-based line/column number in string.
    pub fn loc(self: &Self, input: &str) -> (u32, u32) {
        let before = input.get(..self.position).unwrap_or(input);
        let line = before.matches('\n').count() as u32 + 1;
        let column = match before.rfind('\n') {
            Some(newline) => before[newline + 1..].chars().count(),
            None => before.chars().count(),
        } as u32 + 1;
        (line, column)
    }
}

impl Display for AsmError {
    fn fmt(self: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            AsmErrorKind::SyntaxError => write!(f, "Syntax error"),
            AsmErrorKind::InvalidNumerical => write!(f, "Invalid numeric value"),
            AsmErrorKind::UnknownMnemonic => write!(f, "Unknown instruction"),
            AsmErrorKind::UnknownRegister => write!(f, "Unknown register, expected one of ax, bx, cx, dx, ex"),
            AsmErrorKind::TextTooLong => write!(f, "Text exceeds {} bytes", crate::MAX_TEXT_LEN),
            AsmErrorKind::DuplicateLabel => write!(f, "Label is already defined"),
            AsmErrorKind::UndefinedLabel => write!(f, "Label is not defined"),
            AsmErrorKind::ScratchRegister => write!(f, "Register ex is used as scratch register for immediate operands and cannot be the destination"),
        }
    }
}

impl std::error::Error for AsmError { }

pub type AsmResult<T = ()> = Result<T, AsmError>;
