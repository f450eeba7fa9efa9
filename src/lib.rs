//! CVM, a tiny register-and-stack bytecode virtual machine.
//!
//! A program is a flat buffer of encoded instructions that operate on an integer stack, a text stack,
//! a small bank of integer registers and a table of host functions. Programs can be produced with the
//! bytecode [`Writer`](bytecode::Writer) or, with the `assembler` feature, from assembly text.
//!
//! ```
//! use cvm::{bytecode::{Writer, runtime::{VM, VMState, StreamConsole}}, Standalone};
//!
//! let mut writer = Writer::new();
//! writer.move_int(1, 3).unwrap();
//! writer.move_int(2, 4).unwrap();
//! writer.add(1, 2).unwrap();
//! writer.push_reg(1).unwrap();
//! writer.print().unwrap();
//!
//! let mut console = StreamConsole::new(&b""[..], Vec::new(), Vec::new());
//! let mut vm = VM::new(writer.into_bytes(), &Standalone);
//! assert_eq!(vm.run(&mut console), VMState::Terminated);
//! assert_eq!(console.output(), b"7\n");
//! ```

mod config;
#[macro_use]
pub mod bytecode;
#[cfg(feature="assembler")]
pub mod assembler;

pub use config::*;
pub use bytecode::{HostFunctions, Standalone};

/// One stop shop to execute a bytecode buffer against the given host functions, using stdin/stdout/stderr
/// as the console. Returns the final state of the VM.
///
/// ```
/// use cvm::{bytecode::runtime::VMState, Standalone};
///
/// // pop on empty stacks does nothing
/// assert_eq!(cvm::run(vec![ 0x10, 0x10 ], &Standalone), VMState::Terminated);
/// assert_eq!(cvm::run(vec![ 0x13 ], &Standalone), VMState::Error(cvm::bytecode::runtime::RuntimeErrorKind::InvalidInstruction(0x13)));
/// ```
#[cfg(feature="runtime")]
pub fn run<H>(program: Vec<u8>, host: &H) -> bytecode::runtime::VMState where H: HostFunctions + ?Sized {
    use bytecode::runtime::{VM, StdConsole};
    let mut console = StdConsole::stdio();
    let mut vm = VM::new(program, host);
    vm.run(&mut console)
}
