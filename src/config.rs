
/// Type representing an integer value, both on the integer stack and in registers. Encoded as 4 bytes.
pub type Integer = i32;

/// Type representing a text value on the text stack.
pub type Text = Vec<u8>;

/// Type representing a register index operand.
pub type RegisterIndex = u8;

/// Type representing an offset into the program buffer (the program counter).
pub type Address = usize;

/// Number of registers initialized (to zero) when a VM is created. Registers are numbered from 1.
pub const NUM_REGISTERS: RegisterIndex = 5;

/// Maximum length of a text operand, limited by its single length byte.
pub const MAX_TEXT_LEN: usize = u8::MAX as usize;
