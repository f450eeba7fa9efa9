use crate::util::*;

#[test]
fn empty_program() {
    let (vm, output) = exec(Vec::new());
    assert_eq!(vm.state(), VMState::Terminated);
    assert_eq!(vm.pc(), 0);
    assert!(output.output().is_empty());
    assert!(output.error().is_empty());
    let mut vm = VM::new(Vec::new(), &TestFns);
    assert_eq!(vm.step(&mut console("")), VMState::Terminated);
}

#[test]
fn invalid_instruction() {
    for opcode in [ 0x00, 0x12, 0xff ] {
        let (vm, console) = exec(vec![ 0x04, opcode, 0x04 ]);
        assert_eq!(vm.state(), VMState::Error(RuntimeErrorKind::InvalidInstruction(opcode)));
        let error = vm.runtime_error().unwrap();
        assert_eq!(error.offset(), 1);
        assert_eq!(diagnostics(&console), format!("{}\n", error));
        assert!(diagnostics(&console).contains(&format!("0x{:02x}", opcode)));
    }
}

#[test]
fn truncated_operands() {
    let programs: [ &[u8]; 6 ] = [
        &[ 0x01 ],
        &[ 0x01, 0x01, 0x02 ],
        &[ 0x02, 0x05, b'a', b'b' ],
        &[ 0x0E, 0x01 ],
        &[ 0x04, 0x06, 0x01 ],
        &[ 0x0C, 0x00, 0x00 ],
    ];
    for program in programs {
        let (vm, console) = exec(program.to_vec());
        assert_eq!(vm.state(), VMState::Error(RuntimeErrorKind::EndOfProgram), "program {:?}", program);
        assert!(!diagnostics(&console).is_empty());
        assert!(vm.int_stack.is_empty());
        assert!(vm.text_stack.is_empty());
    }
}

#[test]
fn conditional_jump_on_empty_stack() {
    for opcode in [ 0x0A, 0x0B ] {
        let (vm, console) = exec(vec![ opcode, 0x00, 0x00, 0x00, 0x00 ]);
        assert_eq!(vm.state(), VMState::Error(RuntimeErrorKind::EmptyStack));
        assert_eq!(vm.runtime_error().map(|error| error.offset()), Some(0));
        assert_eq!(diagnostics(&console).lines().count(), 1);
    }
}

#[test]
fn invalid_jump_target() {
    let (vm, _) = exec(build(|w| w.jump(100).map(|_| ())));
    assert_eq!(vm.state(), VMState::Error(RuntimeErrorKind::InvalidJumpTarget(100)));
    let (vm, _) = exec(build(|w| w.jump(-1).map(|_| ())));
    assert_eq!(vm.state(), VMState::Error(RuntimeErrorKind::InvalidJumpTarget(-1)));
    let (vm, _) = exec(build(|w| {
        w.push_int(0)?;
        w.jump_if_zero(11)?;
        Ok(())
    }));
    assert_eq!(vm.state(), VMState::Error(RuntimeErrorKind::InvalidJumpTarget(11)));
}

#[test]
fn halted_vm_stays_halted() {
    let mut console = console("");
    let mut vm = VM::new(vec![ 0x04, 0xff, 0x01, 0x01, 0x00, 0x00, 0x00 ], &TestFns);
    assert_eq!(vm.run(&mut console), VMState::Error(RuntimeErrorKind::InvalidInstruction(0xff)));
    let pc = vm.pc();
    assert_eq!(vm.step(&mut console), VMState::Error(RuntimeErrorKind::InvalidInstruction(0xff)));
    assert_eq!(vm.run_for(&mut console, 10), VMState::Error(RuntimeErrorKind::InvalidInstruction(0xff)));
    assert_eq!(vm.pc(), pc);
    assert!(vm.int_stack.is_empty());
    assert_eq!(diagnostics(&console).lines().count(), 1);
}

#[test]
fn error_messages() {
    let (vm, _) = exec(vec![ 0x0A, 0x00, 0x00, 0x00, 0x00 ]);
    assert_eq!(vm.runtime_error().unwrap().to_string(), "Conditional jump at offset 0 found an empty integer stack.");
    let (vm, _) = exec(vec![ 0x04, 0x04, 0x20 ]);
    assert_eq!(vm.runtime_error().unwrap().to_string(), "Invalid instruction 0x20 at offset 2.");
}
