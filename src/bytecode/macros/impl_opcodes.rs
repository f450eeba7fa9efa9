/// Macro to generate the opcode enum, bytecode writers, the VM dispatcher and the disassembler from instruction signatures.
macro_rules! impl_opcodes {
    // Read opcode arguments from the VM's program store
    (@read_arg Integer, $vm:ident) => ( $vm.operand_integer()? );
    (@read_arg Register, $vm:ident) => ( $vm.operand_register()? );
    (@read_arg Text, $vm:ident) => ( $vm.operand_text()? );
    // Map parameter type names to reader types
    (@map_reader_type Integer) => ( crate::Integer );
    (@map_reader_type Register) => ( crate::RegisterIndex );
    (@map_reader_type Text) => ( crate::Text );
    // Validate opcode arguments before anything is written
    (@check_arg Text, $value:expr) => (
        if $value.len() > crate::MAX_TEXT_LEN {
            return Err(::std::io::Error::new(::std::io::ErrorKind::InvalidInput, format!("text operand of {} bytes exceeds {} bytes", $value.len(), crate::MAX_TEXT_LEN)));
        }
    );
    (@check_arg $ty:ident, $value:expr) => ( );
    // Write opcode arguments
    (@write_arg Integer, $value:expr, $to:ident) => ( $to.write_all(&$value.to_le_bytes()[..])? );
    (@write_arg Register, $value:expr, $to:ident) => ( $to.write_all(&[ $value ])? );
    (@write_arg Text, $value:expr, $to:ident) => ( {
        $to.write_all(&[ $value.len() as u8 ])?;
        $to.write_all($value)?;
    } );
    // Map parameter type names to writer types
    (@map_writer_type Integer) => ( crate::Integer );
    (@map_writer_type Register) => ( crate::RegisterIndex );
    (@map_writer_type Text) => ( &[u8] );
    // Disassemble opcode arguments
    (@describe_arg Integer, $code:expr, $position:ident) => (
        crate::bytecode::Program::take_int32($code, &mut $position).ok()?.to_string()
    );
    (@describe_arg Register, $code:expr, $position:ident) => (
        crate::bytecode::opcodes::register_name(crate::bytecode::Program::take_byte($code, &mut $position).ok()?)
    );
    (@describe_arg Text, $code:expr, $position:ident) => (
        format!("{:?}", String::from_utf8_lossy(&crate::bytecode::Program::take_text($code, &mut $position).ok()?))
    );
    // Main definition block
    (
        $(
            $( #[ $attr:meta ] )*
            $opcode:literal fn $name:ident ( & mut $self:ident $(, & mut $console:ident)? $(, $arg_name:ident : $arg_type:ident )* )
            $code:block
        )+
    ) => { ::paste::paste! {

        /// Bytecode instructions. Generated from instruction signatures defined via the `impl_opcodes!` macro.
        #[repr(u8)]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum OpCode {
            $(
                $( #[ $attr ] )*
                [<$name:camel>] = $opcode,
            )+
        }

        impl OpCode {
            /// Converts an opcode byte to an opcode, returning None for bytes outside the instruction set.
            pub fn from_u8(opcode: u8) -> Option<Self> {
                match opcode {
                    $( $opcode => Some(Self::[<$name:camel>]), )+
                    _ => None,
                }
            }
            /// Returns the instruction's mnemonic as used by the disassembler and the bytecode writer.
            pub fn mnemonic(self: Self) -> &'static str {
                match self {
                    $( Self::[<$name:camel>] => stringify!($name), )+
                }
            }
        }

        /// Bytecode writers. Generated from instruction signatures defined via the `impl_opcodes!` macro.
        impl crate::bytecode::Writer {
            $(
                $( #[ $attr ] )*
                ///
                /// Writes the instruction at the current position and returns that position.
                pub fn $name(self: &mut Self $(, $arg_name: impl_opcodes!(@map_writer_type $arg_type) )* ) -> ::std::io::Result<crate::Address> {
                    use ::std::io::Write;
                    $( impl_opcodes!(@check_arg $arg_type, $arg_name); )*
                    let insert_pos = self.position();
                    self.write_all(&[ $opcode ])?;
                    $( impl_opcodes!(@write_arg $arg_type, $arg_name, self); )*
                    Ok(insert_pos)
                }
            )+
        }

        /// Bytecode dispatch.
        #[cfg(feature="runtime")]
        impl<'h, H> crate::bytecode::runtime::VM<'h, H> where H: crate::bytecode::HostFunctions + ?Sized {
            /// Decodes the operands of the given (already fetched) opcode and executes the instruction.
            #[allow(unused_doc_comments)]
            pub(crate) fn exec_instruction(self: &mut Self, opcode: u8, console: &mut dyn crate::bytecode::runtime::Console) -> crate::bytecode::runtime::RuntimeResult {
                match opcode {
                    $(
                        $( #[ $attr ] )*
                        $opcode => {
                            $( let $arg_name = impl_opcodes!(@read_arg $arg_type, self); )*
                            ::tracing::trace!(offset = self.opcode_pc, "{}", stringify!($name));
                            $( let $console: &mut dyn crate::bytecode::runtime::Console = console; )?
                            self.$name( $( $console, )? $( $arg_name ),* )
                        }
                    )+
                    _ => Err(self.error(crate::bytecode::runtime::RuntimeErrorKind::InvalidInstruction(opcode))),
                }
            }
        }

        /// Bytecode instructions. Implemented on VM by the `impl_opcodes!` macro.
        #[cfg(feature="runtime")]
        impl<'h, H> crate::bytecode::runtime::VM<'h, H> where H: crate::bytecode::HostFunctions + ?Sized {
            $(
                $( #[ $attr ] )*
                fn $name ( $self: &mut Self $(, $console: &mut dyn crate::bytecode::runtime::Console)? $(, $arg_name: impl_opcodes!(@map_reader_type $arg_type) )* ) -> crate::bytecode::runtime::RuntimeResult {
                    $code
                }
            )+
        }

        /// Bytecode disassembly.
        #[cfg(feature="debugging")]
        impl crate::bytecode::Program {
            /// Disassembles the instruction at the given position. Returns its text along with the position of the next
            /// instruction, or None if the position is at the end of the program or the bytes there do not decode.
            #[allow(unused_doc_comments)]
            pub fn describe_instruction(self: &Self, mut position: crate::Address) -> Option<(String, crate::Address)> {
                let code = self.instructions();
                let start = position;
                let opcode = Self::take_byte(code, &mut position).ok()?;
                match opcode {
                    $(
                        $( #[ $attr ] )*
                        $opcode => {
                            let operands: Vec<String> = vec![ $( impl_opcodes!(@describe_arg $arg_type, code, position) ),* ];
                            let mut result = format!("{:>5} {}", start, stringify!($name));
                            if !operands.is_empty() {
                                result.push(' ');
                                result.push_str(&operands.join(", "));
                            }
                            Some((result, position))
                        }
                    )+
                    _ => None,
                }
            }
        }
    } }
}

pub(crate) use impl_opcodes;
