//! Opcode definitions. Implemented on Writer/VM/Program.

use crate::RegisterIndex;
use crate::bytecode::macros::impl_opcodes;
#[cfg(feature="runtime")]
use crate::bytecode::runtime::RuntimeErrorKind;

/// Assembly names of the registers, starting with register 1.
pub const REGISTER_NAMES: [ &str; crate::NUM_REGISTERS as usize ] = [ "ax", "bx", "cx", "dx", "ex" ];

/// Returns the assembly name of the given register, or `r<index>` for registers without a name.
pub fn register_name(index: RegisterIndex) -> String {
    match index {
        1..=crate::NUM_REGISTERS => REGISTER_NAMES[index as usize - 1].to_string(),
        _ => format!("r{}", index),
    }
}

/// Returns the register index for the given assembly name.
pub fn register_index(name: &str) -> Option<RegisterIndex> {
    REGISTER_NAMES.iter().position(|&n| n == name).map(|position| position as RegisterIndex + 1)
}

impl_opcodes!{

    /// Pushes an integer literal onto the integer stack.
    0x01 fn push_int(&mut self, value: Integer) {
        self.int_stack.push(value);
        Ok(())
    }

    /// Pushes a text literal onto the text stack.
    0x02 fn push_str(&mut self, text: Text) {
        self.text_stack.push(text);
        Ok(())
    }

    /// Pushes the value of a register onto the integer stack.
    0x03 fn push_reg(&mut self, reg: Register) {
        let value = self.registers.load(reg);
        self.int_stack.push(value);
        Ok(())
    }

    /// Pops the top of the integer stack, or the text stack if the integer stack is empty, and prints it as one line.
    0x04 fn print(&mut self, &mut console) {
        if let Some(value) = self.int_stack.pop() {
            console.print(value.to_string().as_bytes()).map_err(|err| self.error(RuntimeErrorKind::Io(err.kind())))
        } else if let Some(text) = self.text_stack.pop() {
            console.print(&text).map_err(|err| self.error(RuntimeErrorKind::Io(err.kind())))
        } else {
            Ok(())
        }
    }

    /// Reads a token from the console onto the integer stack if it holds values, otherwise onto the text stack if
    /// that holds values.
    0x05 fn input(&mut self, &mut console) {
        if !self.int_stack.is_empty() {
            let token = self.read_token(console)?;
            let value = ::std::str::from_utf8(&token).ok()
                .and_then(|token| token.parse::<crate::Integer>().ok())
                .ok_or_else(|| self.error(RuntimeErrorKind::InvalidInput))?;
            self.int_stack.push(value);
        } else if !self.text_stack.is_empty() {
            let token = self.read_token(console)?;
            self.text_stack.push(token);
        }
        Ok(())
    }

    /// Adds register r2 to register r1.
    0x06 fn add(&mut self, r1: Register, r2: Register) {
        let value = self.registers.load(r1).wrapping_add(self.registers.load(r2));
        self.registers.store(r1, value);
        Ok(())
    }

    /// Subtracts register r2 from register r1.
    0x07 fn sub(&mut self, r1: Register, r2: Register) {
        let value = self.registers.load(r1).wrapping_sub(self.registers.load(r2));
        self.registers.store(r1, value);
        Ok(())
    }

    /// Multiplies register r1 by register r2.
    0x08 fn mul(&mut self, r1: Register, r2: Register) {
        let value = self.registers.load(r1).wrapping_mul(self.registers.load(r2));
        self.registers.store(r1, value);
        Ok(())
    }

    /// Pushes the difference r1 - r2 onto the integer stack as comparison flag.
    0x09 fn cmp(&mut self, r1: Register, r2: Register) {
        let flag = self.registers.load(r1).wrapping_sub(self.registers.load(r2));
        self.int_stack.push(flag);
        Ok(())
    }

    /// Pops the comparison flag and jumps to the given target if it is zero.
    0x0A fn jump_if_zero(&mut self, target: Integer) {
        let flag = self.int_stack.pop().ok_or_else(|| self.error(RuntimeErrorKind::EmptyStack))?;
        if flag == 0 {
            self.jump_to(target)?;
        }
        Ok(())
    }

    /// Pops the comparison flag and jumps to the given target if it is not zero.
    0x0B fn jump_if_not_zero(&mut self, target: Integer) {
        let flag = self.int_stack.pop().ok_or_else(|| self.error(RuntimeErrorKind::EmptyStack))?;
        if flag != 0 {
            self.jump_to(target)?;
        }
        Ok(())
    }

    /// Jumps to the given target.
    0x0C fn jump(&mut self, target: Integer) {
        self.jump_to(target)
    }

    /// Invokes the host function named by the top of the text stack (which is left in place) and pushes its result
    /// onto the integer stack. Does nothing if the text stack is empty or the function does not exist.
    0x0D fn call_back(&mut self) {
        let result = match self.text_stack.top() {
            Some(name) => match ::std::str::from_utf8(name) {
                Ok(name) => {
                    let result = self.host.invoke(name);
                    if result.is_none() {
                        ::tracing::debug!(offset = self.opcode_pc, name, "no such host function");
                    }
                    result
                },
                Err(_) => None,
            },
            None => None,
        };
        if let Some(value) = result {
            self.int_stack.push(value);
        }
        Ok(())
    }

    /// Stores an integer literal in the given register.
    0x0E fn move_int(&mut self, reg: Register, value: Integer) {
        self.registers.store(reg, value);
        Ok(())
    }

    /// Copies register r2 into register r1.
    0x0F fn move_reg(&mut self, r1: Register, r2: Register) {
        let value = self.registers.load(r2);
        self.registers.store(r1, value);
        Ok(())
    }

    /// Discards the top of the integer stack, or of the text stack if the integer stack is empty.
    0x10 fn pop(&mut self) {
        if self.int_stack.pop().is_none() {
            self.text_stack.pop();
        }
        Ok(())
    }

    /// Pops the top of the integer stack into the given register. Does nothing if the integer stack is empty.
    0x11 fn pop_reg(&mut self, reg: Register) {
        if let Some(value) = self.int_stack.pop() {
            self.registers.store(reg, value);
        }
        Ok(())
    }
}
