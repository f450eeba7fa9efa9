//! Bytecode execution.

pub mod vm;
pub mod stack;
pub mod registers;
pub mod console;
pub mod error;

pub use vm::{VM, VMState};
pub use stack::Stack;
pub use registers::Registers;
pub use console::{Console, StreamConsole, StdConsole};
pub use error::{RuntimeError, RuntimeErrorKind, RuntimeResult};
