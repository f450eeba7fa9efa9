use crate::util::*;
use proptest::prelude::*;

#[test]
fn add_registers() {
    let (vm, console) = exec(build(|w| {
        w.move_int(1, 3)?;
        w.move_int(2, 4)?;
        w.add(1, 2)?;
        w.push_reg(1)?;
        w.print()?;
        Ok(())
    }));
    assert_eq!(vm.state(), VMState::Terminated);
    assert_eq!(lines(&console), [ "7" ]);
}

#[test]
fn handwritten_bytecode() {
    // mov r1, 3; push r1; print
    let (vm, console) = exec(vec![ 0x0E, 0x01, 0x03, 0x00, 0x00, 0x00, 0x03, 0x01, 0x04 ]);
    assert_eq!(vm.state(), VMState::Terminated);
    assert_eq!(lines(&console), [ "3" ]);
}

#[test]
fn sub_and_mul() {
    let result = run("
        mov ax, 10
        mov bx, 4
        sub ax, bx
        push ax
        print
        mul ax, bx
        push ax
        print
        mul ax, -2
        push ax
        print
    ");
    assert_eq!(result, [ "6", "24", "-48" ]);
}

#[test]
fn move_register() {
    let result = run("
        mov ax, 12
        mov cx, ax
        mov ax, 0
        push cx
        print
        push ax
        print
    ");
    assert_eq!(result, [ "12", "0" ]);
}

#[test]
fn arithmetic_wraps() {
    let result = run("
        mov ax, 2147483647
        add ax, 1
        push ax
        print
        mov bx, -2147483648
        sub bx, 1
        push bx
        print
    ");
    assert_eq!(result, [ "-2147483648", "2147483647" ]);
}

#[test]
fn immediate_uses_scratch_register() {
    let (vm, _) = exec(assemble("mov ax, 1\nadd ax, 5").unwrap());
    assert_eq!(vm.registers.get(1), Some(6));
    assert_eq!(vm.registers.get(5), Some(5));
}

#[test]
fn cmp_pushes_difference() {
    let (vm, _) = exec(assemble("mov ax, 3\nmov bx, 10\ncmp ax, bx\ncmp bx, ax").unwrap());
    assert_eq!(vm.int_stack.data(), &[ -7, 7 ]);
    assert_eq!(vm.registers.get(1), Some(3));
    assert_eq!(vm.registers.get(2), Some(10));
}

#[test]
fn registers_start_at_zero() {
    let (vm, console) = exec(assemble("push ax\npush ex\nprint\nprint").unwrap());
    assert_eq!(lines(&console), [ "0", "0" ]);
    assert_eq!(vm.registers.len(), 5);
    assert!(vm.registers.iter().all(|(_, value)| value == 0));
}

#[test]
fn unnamed_registers() {
    let (vm, console) = exec(build(|w| {
        w.move_int(9, 4)?;
        w.push_reg(7)?;
        w.print()?;
        w.add(9, 9)?;
        Ok(())
    }));
    assert_eq!(vm.state(), VMState::Terminated);
    assert_eq!(lines(&console), [ "0" ]);
    assert_eq!(vm.registers.get(9), Some(8));
    assert_eq!(vm.registers.get(7), Some(0));
    assert_eq!(vm.registers.len(), 7);
}

fn binary_op(op: fn(&mut Writer, u8, u8) -> std::io::Result<usize>, a: Integer, b: Integer) -> Vec<String> {
    let (_, console) = exec(build(|w| {
        w.move_int(1, a)?;
        w.move_int(2, b)?;
        op(w, 1, 2)?;
        w.push_reg(1)?;
        w.print()?;
        Ok(())
    }));
    lines(&console)
}

proptest! {
    #[test]
    fn add_matches_integer_semantics(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(binary_op(Writer::add, a, b), vec![ a.wrapping_add(b).to_string() ]);
    }

    #[test]
    fn sub_matches_integer_semantics(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(binary_op(Writer::sub, a, b), vec![ a.wrapping_sub(b).to_string() ]);
    }

    #[test]
    fn mul_matches_integer_semantics(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(binary_op(Writer::mul, a, b), vec![ a.wrapping_mul(b).to_string() ]);
    }
}
