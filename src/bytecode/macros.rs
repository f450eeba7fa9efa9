//! Bytecode macros.

pub mod impl_opcodes;
pub(crate) use impl_opcodes::impl_opcodes;

pub mod host_functions;
