//! A virtual machine for running CVM bytecode.

use std::fmt;
use tracing::{debug, error};
use crate::{Address, Integer, RegisterIndex, Text};
use crate::bytecode::{Program, HostFunctions};
use crate::bytecode::runtime::{Stack, Registers, Console, RuntimeError, RuntimeErrorKind, RuntimeResult};

/// Current state of the vm, checked after each instruction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VMState {
    /// The program is ready to run (or continue running).
    Ready,
    /// The program counter reached the end of the program. The VM cannot run again.
    Terminated,
    /// The program halted on a runtime error. The VM cannot run again.
    Error(RuntimeErrorKind),
}

/// A virtual machine for running CVM bytecode.
///
/// The VM owns its program and value stacks and borrows the host function table for its lifetime.
pub struct VM<'h, H: ?Sized> {
    pub(crate) host         : &'h H,
    pub(crate) program      : Program,
    /// Offset of the instruction currently being executed.
    pub(crate) opcode_pc    : Address,
    pub(crate) state        : VMState,
    pub(crate) runtime_error: Option<RuntimeError>,
    pub int_stack           : Stack<Integer>,
    pub text_stack          : Stack<Text>,
    pub registers           : Registers,
}

/// Public VM methods.
impl<'h, H> VM<'h, H> where H: HostFunctions + ?Sized {
    /// Create a new VM instance for the given program and host function table.
    pub fn new(program: impl Into<Program>, host: &'h H) -> Self {
        VM {
            host,
            program         : program.into(),
            opcode_pc       : 0,
            state           : VMState::Ready,
            runtime_error   : None,
            int_stack       : Stack::new(),
            text_stack      : Stack::new(),
            registers       : Registers::new(),
        }
    }

    /// Executes bytecode until it terminates or a runtime error halts it.
    pub fn run(self: &mut Self, console: &mut dyn Console) -> VMState {
        if self.state != VMState::Ready {
            debug!(state = ?self.state, "vm is not ready to run");
            return self.state;
        }
        debug!(len = self.program.len(), pc = self.program.pc(), "running program");
        while self.state == VMState::Ready {
            self.step(console);
        }
        self.state
    }

    /// Executes at most the given number of instructions. Returns `VMState::Ready` if the program has not halted yet.
    pub fn run_for(self: &mut Self, console: &mut dyn Console, max_steps: usize) -> VMState {
        for _ in 0..max_steps {
            if self.step(console) != VMState::Ready {
                break;
            }
        }
        self.state
    }

    /// Executes a single bytecode instruction.
    pub fn step(self: &mut Self, console: &mut dyn Console) -> VMState {
        if self.state != VMState::Ready {
            return self.state;
        }
        if self.program.at_end() {
            self.terminate();
            return self.state;
        }
        self.opcode_pc = self.program.pc();
        let result = match self.program.current_opcode() {
            Ok(opcode) => {
                self.program.advance(1);
                self.exec_instruction(opcode, console)
            },
            Err(_) => Err(self.error(RuntimeErrorKind::EndOfProgram)),
        };
        match result {
            Ok(()) => if self.program.at_end() {
                self.terminate();
            },
            Err(runtime_error) => self.fail(runtime_error, console),
        }
        self.state
    }

    /// Returns the current state of the VM.
    pub fn state(self: &Self) -> VMState {
        self.state
    }

    /// Returns the error that halted the VM, if any.
    pub fn runtime_error(self: &Self) -> Option<&RuntimeError> {
        self.runtime_error.as_ref()
    }

    /// Returns the current program counter.
    pub fn pc(self: &Self) -> Address {
        self.program.pc()
    }

    /// Returns the program store.
    pub fn program(self: &Self) -> &Program {
        &self.program
    }
}

/// Support methods used by the instruction handlers.
impl<'h, H> VM<'h, H> where H: HostFunctions + ?Sized {
    /// Creates a runtime error for the instruction currently being executed.
    pub(crate) fn error(self: &Self, kind: RuntimeErrorKind) -> RuntimeError {
        RuntimeError::new(self.opcode_pc, kind)
    }

    /// Reads a 4 byte integer operand.
    pub(crate) fn operand_integer(self: &mut Self) -> RuntimeResult<Integer> {
        self.program.read_int32().map_err(|_| self.error(RuntimeErrorKind::EndOfProgram))
    }

    /// Reads a register index operand.
    pub(crate) fn operand_register(self: &mut Self) -> RuntimeResult<RegisterIndex> {
        self.program.read_byte().map_err(|_| self.error(RuntimeErrorKind::EndOfProgram))
    }

    /// Reads a length prefixed text operand.
    pub(crate) fn operand_text(self: &mut Self) -> RuntimeResult<Text> {
        self.program.read_length_prefixed_text().map_err(|_| self.error(RuntimeErrorKind::EndOfProgram))
    }

    /// Sets the program counter to the given target. Jumping to the end of the program is valid and terminates it.
    pub(crate) fn jump_to(self: &mut Self, target: Integer) -> RuntimeResult {
        match Address::try_from(target) {
            Ok(address) if address <= self.program.len() => {
                self.program.set_pc(address);
                Ok(())
            },
            _ => Err(self.error(RuntimeErrorKind::InvalidJumpTarget(target))),
        }
    }

    /// Reads the next input token from the console.
    pub(crate) fn read_token(self: &Self, console: &mut dyn Console) -> RuntimeResult<Text> {
        match console.read_token() {
            Ok(Some(token)) => Ok(token),
            Ok(None) => Err(self.error(RuntimeErrorKind::EndOfInput)),
            Err(err) => Err(self.error(RuntimeErrorKind::Io(err.kind()))),
        }
    }

    fn terminate(self: &mut Self) {
        debug!(pc = self.program.pc(), "program terminated");
        self.state = VMState::Terminated;
    }

    fn fail(self: &mut Self, runtime_error: RuntimeError, console: &mut dyn Console) {
        error!(offset = runtime_error.offset(), "{}", runtime_error);
        console.report(&runtime_error);
        self.state = VMState::Error(*runtime_error.kind());
        self.runtime_error = Some(runtime_error);
    }
}

impl<'h, H> fmt::Debug for VM<'h, H> where H: ?Sized {
    fn fmt(self: &Self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VM")
            .field("pc", &self.program.pc())
            .field("state", &self.state)
            .field("int_stack", &self.int_stack)
            .field("text_stack", &self.text_stack)
            .field("registers", &self.registers)
            .finish()
    }
}
