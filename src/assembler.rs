//! Assembler for CVM assembly text.
//!
//! Each line holds at most one statement, `//` starts a comment. Registers are named `ax` to `ex`.
//!
//! ```text
//! mov ax, 1           // ax = 1
//! tag loop
//! push ax
//! print
//! add ax, 1           // lowered to `mov ex, 1; add ax, ex`
//! mov bx, ax
//! cmp bx, 4           // pushes bx - 4
//! jne loop
//! push "Test"
//! call Test           // pushes "Test" and calls the host function of that name
//! ```

pub mod ast;
mod parser;
mod error;
mod emitter;

pub use parser::parse;
pub use error::{AsmError, AsmErrorKind, AsmResult};
pub use emitter::SCRATCH_REGISTER;

/// Assembles the given source into a bytecode buffer.
///
/// ```
/// let bytecode = cvm::assembler::assemble("mov ax, 3\npush ax\nprint").unwrap();
/// assert_eq!(bytecode, [ 0x0E, 1, 3, 0, 0, 0, 0x03, 1, 0x04 ]);
/// ```
pub fn assemble(source: &str) -> AsmResult<Vec<u8>> {
    let statements = parse(source)?;
    tracing::debug!(statements = statements.len(), "assembling");
    emitter::Emitter::new().emit(&statements)
}
