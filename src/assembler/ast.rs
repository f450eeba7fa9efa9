//! Parsed assembly statements.

use crate::{Integer, RegisterIndex, Text};

/// Second operand of register instructions.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Register(RegisterIndex),
    Integer(Integer),
}

/// Operand of `push`.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Register(RegisterIndex),
    Integer(Integer),
    Text(Text),
}

/// Register arithmetic and comparison.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ArithmeticOp {
    Add,
    Sub,
    Mul,
    Cmp,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum JumpKind {
    Always,
    IfZero,
    IfNotZero,
}

#[derive(Clone, Debug, PartialEq)]
pub enum StatementKind {
    /// `mov r, r|n`
    Move(RegisterIndex, Operand),
    /// `push n|"text"|r`
    Push(Value),
    Print,
    Input,
    /// `pop` or `pop r`
    Pop(Option<RegisterIndex>),
    /// `add|sub|mul|cmp r, r|n`
    Arithmetic(ArithmeticOp, RegisterIndex, Operand),
    /// `tag NAME`
    Label(String),
    /// `jmp|je|jne NAME`
    Jump(JumpKind, String),
    /// `call NAME`
    Call(String),
}

/// A single assembly statement along with its byte offset in the source.
#[derive(Clone, Debug, PartialEq)]
pub struct Statement {
    pub position: usize,
    pub kind    : StatementKind,
}
