//! Lowers parsed statements to bytecode.

use std::collections::HashMap;
use std::io;
use crate::{Address, Integer, RegisterIndex, MAX_TEXT_LEN};
use crate::bytecode::Writer;
use crate::assembler::ast::*;
use crate::assembler::error::{AsmError, AsmErrorKind, AsmResult};

/// Register clobbered when lowering arithmetic with an immediate operand.
pub const SCRATCH_REGISTER: RegisterIndex = 5;

/// A jump whose target label was not yet known when the jump was written.
struct Fixup<'a> {
    offset  : Address,
    kind    : JumpKind,
    label   : &'a str,
    position: usize,
}

/// Bytecode emitter state.
pub(crate) struct Emitter<'a> {
    writer  : Writer,
    labels  : HashMap<&'a str, Address>,
    fixups  : Vec<Fixup<'a>>,
}

impl<'a> Emitter<'a> {
    pub(crate) fn new() -> Self {
        Emitter {
            writer  : Writer::new(),
            labels  : HashMap::new(),
            fixups  : Vec::new(),
        }
    }

    /// Emits all statements, resolves jump targets and returns the bytecode.
    pub(crate) fn emit(mut self: Self, statements: &'a [ Statement ]) -> AsmResult<Vec<u8>> {
        for statement in statements {
            self.emit_statement(statement)?;
        }
        for fixup in std::mem::take(&mut self.fixups) {
            let target = match self.labels.get(fixup.label) {
                Some(&target) => target,
                None => return Err(AsmError::new(AsmErrorKind::UndefinedLabel, fixup.position)),
            };
            let target = Integer::try_from(target).map_err(|_| AsmError::new(AsmErrorKind::InvalidNumerical, fixup.position))?;
            let result = self.writer.overwrite(fixup.offset, |writer| Self::write_jump(writer, fixup.kind, target));
            written(result, fixup.position)?;
        }
        Ok(self.writer.into_bytes())
    }

    fn emit_statement(self: &mut Self, statement: &'a Statement) -> AsmResult {
        let position = statement.position;
        let writer = &mut self.writer;
        match &statement.kind {
            StatementKind::Move(reg, Operand::Register(source)) => written(writer.move_reg(*reg, *source), position),
            StatementKind::Move(reg, Operand::Integer(value)) => written(writer.move_int(*reg, *value), position),
            StatementKind::Push(Value::Register(reg)) => written(writer.push_reg(*reg), position),
            StatementKind::Push(Value::Integer(value)) => written(writer.push_int(*value), position),
            StatementKind::Push(Value::Text(text)) => written(writer.push_str(text), position),
            StatementKind::Print => written(writer.print(), position),
            StatementKind::Input => written(writer.input(), position),
            StatementKind::Pop(None) => written(writer.pop(), position),
            StatementKind::Pop(Some(reg)) => written(writer.pop_reg(*reg), position),
            StatementKind::Arithmetic(op, reg, operand) => {
                let source = match operand {
                    Operand::Register(source) => *source,
                    Operand::Integer(value) => {
                        if *reg == SCRATCH_REGISTER {
                            return Err(AsmError::new(AsmErrorKind::ScratchRegister, position));
                        }
                        written(writer.move_int(SCRATCH_REGISTER, *value), position)?;
                        SCRATCH_REGISTER
                    }
                };
                let result = match op {
                    ArithmeticOp::Add => writer.add(*reg, source),
                    ArithmeticOp::Sub => writer.sub(*reg, source),
                    ArithmeticOp::Mul => writer.mul(*reg, source),
                    ArithmeticOp::Cmp => writer.cmp(*reg, source),
                };
                written(result, position)
            },
            StatementKind::Label(name) => {
                if self.labels.insert(name, writer.position()).is_some() {
                    return Err(AsmError::new(AsmErrorKind::DuplicateLabel, position));
                }
                Ok(())
            },
            StatementKind::Jump(kind, label) => {
                // target is patched once all labels are known
                let offset = write_offset(Self::write_jump(writer, *kind, 0), position)?;
                self.fixups.push(Fixup { offset, kind: *kind, label, position });
                Ok(())
            },
            StatementKind::Call(name) => {
                if name.len() > MAX_TEXT_LEN {
                    return Err(AsmError::new(AsmErrorKind::TextTooLong, position));
                }
                written(writer.push_str(name.as_bytes()), position)?;
                written(writer.call_back(), position)
            },
        }
    }

    fn write_jump(writer: &mut Writer, kind: JumpKind, target: Integer) -> io::Result<Address> {
        match kind {
            JumpKind::Always => writer.jump(target),
            JumpKind::IfZero => writer.jump_if_zero(target),
            JumpKind::IfNotZero => writer.jump_if_not_zero(target),
        }
    }
}

/// Maps a writer result to an assembler result. The writer only rejects overlong text operands.
fn written<T>(result: io::Result<T>, position: usize) -> AsmResult {
    write_offset(result, position).map(|_| ())
}

/// Like `written`, but keeps the value returned by the writer (the instruction offset).
fn write_offset<T>(result: io::Result<T>, position: usize) -> AsmResult<T> {
    result.map_err(|_| AsmError::new(AsmErrorKind::TextTooLong, position))
}
