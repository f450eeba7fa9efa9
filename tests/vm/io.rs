use crate::util::*;

#[test]
fn input_integer() {
    let result = run_with_input("
        push 0
        input
        print
        print
    ", "17\n");
    assert_eq!(result, [ "17", "0" ]);
}

#[test]
fn input_negative_integer() {
    let result = run_with_input("push 0\ninput\nprint", "  -305\n");
    assert_eq!(result, [ "-305" ]);
}

#[test]
fn input_text() {
    let result = run_with_input("
        push \"name?\"
        input
        print
        print
    ", "hello\n");
    assert_eq!(result, [ "hello", "name?" ]);
}

#[test]
fn input_tokens() {
    let result = run_with_input("
        push 0
        input
        input
        input
        print
        print
        print
    ", "1 2\n\n  3");
    assert_eq!(result, [ "3", "2", "1" ]);
}

#[test]
fn input_into_registers() {
    let result = run_with_input("
        push 0
        input
        pop ax
        push 0
        input
        pop bx
        add ax, bx
        push ax
        print
    ", "20 22");
    assert_eq!(result, [ "42" ]);
}

#[test]
fn input_without_values_is_noop() {
    let (vm, console) = exec_with_input(assemble("input\nprint").unwrap(), "5\n");
    assert_eq!(vm.state(), VMState::Terminated);
    assert!(console.output().is_empty());
    assert!(vm.int_stack.is_empty());
    assert!(vm.text_stack.is_empty());
}

#[test]
fn end_of_input() {
    let (vm, console) = exec_with_input(assemble("push 0\ninput\nprint").unwrap(), "  \n");
    assert_eq!(vm.state(), VMState::Error(RuntimeErrorKind::EndOfInput));
    assert!(console.output().is_empty());
    assert_eq!(diagnostics(&console).lines().count(), 1);
}

#[test]
fn invalid_integer() {
    let (vm, console) = exec_with_input(assemble("push 0\ninput").unwrap(), "abc\n");
    assert_eq!(vm.state(), VMState::Error(RuntimeErrorKind::InvalidInput));
    assert_eq!(vm.runtime_error().map(|error| error.offset()), Some(5));
    assert_eq!(vm.int_stack.data(), &[ 0 ]);
    assert!(diagnostics(&console).contains("not an integer"));
}

#[test]
fn output_precedes_input() {
    let result = run_with_input("
        push \"prompt\"
        print
        push \"\"
        input
        print
    ", "answer");
    assert_eq!(result, [ "prompt", "answer" ]);
}

#[test]
fn input_prefers_integers() {
    let (vm, console) = exec_with_input(assemble("
        push \"t\"
        push 1
        input
    ").unwrap(), "5\n");
    assert_eq!(vm.state(), VMState::Terminated);
    assert_eq!(vm.int_stack.data(), &[ 1, 5 ]);
    assert_eq!(vm.int_stack[1], 5);
    assert_eq!(vm.text_stack.data(), &[ b"t".to_vec() ]);
    let (_, output, error) = console.into_inner();
    assert!(output.is_empty());
    assert!(error.is_empty());
}
