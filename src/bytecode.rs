//! Bytecode program store, instruction set and execution.

#[macro_use]
pub mod macros;
pub mod program;
pub mod writer;
pub mod opcodes;
pub mod host;
#[cfg(feature="runtime")]
pub mod runtime;

pub use program::{Program, EndOfProgram, ReadResult};
pub use writer::Writer;
pub use opcodes::OpCode;
pub use host::{HostFunctions, Standalone};
