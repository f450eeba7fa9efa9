use crate::util::*;

#[test]
fn format_program() {
    let mut writer = Writer::new();
    writer.move_int(1, 3).unwrap();
    writer.push_reg(1).unwrap();
    writer.print().unwrap();
    writer.push_str(b"Hi").unwrap();
    writer.move_reg(9, 2).unwrap();
    writer.jump(0).unwrap();
    let program = writer.into_program();
    assert_eq!(program.format_program(), "    0 move_int ax, 3
    6 push_reg ax
    8 print
    9 push_str \"Hi\"
   13 move_reg r9, bx
   16 jump 0
");
}

#[test]
fn describe_instruction() {
    let program = Program::new(assemble("call Test\npop dx").unwrap());
    assert_eq!(program.describe_instruction(0), Some(("    0 push_str \"Test\"".to_string(), 6)));
    assert_eq!(program.describe_instruction(6), Some(("    6 call_back".to_string(), 7)));
    assert_eq!(program.describe_instruction(7), Some(("    7 pop_reg dx".to_string(), 9)));
    assert_eq!(program.describe_instruction(9), None);
}

#[test]
fn undecodable_bytes() {
    let program = Program::new(vec![ 0x04, 0xff, 0x04 ]);
    assert_eq!(program.format_program(), "    0 print\n    1 <undecodable 0xff>\n");
    let program = Program::new(vec![ 0x10, 0x01, 0x02 ]);
    assert_eq!(program.format_program(), "    0 pop\n    1 <undecodable 0x01>\n");
}

#[test]
fn opcodes() {
    assert_eq!(OpCode::from_u8(0x01), Some(OpCode::PushInt));
    assert_eq!(OpCode::from_u8(0x0D), Some(OpCode::CallBack));
    assert_eq!(OpCode::from_u8(0x11), Some(OpCode::PopReg));
    assert_eq!(OpCode::from_u8(0x00), None);
    assert_eq!(OpCode::from_u8(0x12), None);
    assert_eq!(OpCode::JumpIfNotZero as u8, 0x0B);
    assert_eq!(OpCode::MoveInt.mnemonic(), "move_int");
    for opcode in 0x01..=0x11u8 {
        assert_eq!(OpCode::from_u8(opcode).map(|opcode| opcode as u8), Some(opcode));
    }
}

#[test]
fn writer_overwrite() {
    let mut writer = Writer::new();
    let jump = writer.jump(0).unwrap();
    writer.print().unwrap();
    let end = writer.position();
    writer.overwrite(jump, |w| w.jump(end as Integer)).unwrap();
    assert_eq!(writer.position(), end);
    assert_eq!(writer.bytes(), &[ 0x0C, 0x06, 0x00, 0x00, 0x00, 0x04 ]);
    let (vm, console) = exec(writer.into_bytes());
    assert_eq!(vm.state(), VMState::Terminated);
    assert!(console.output().is_empty());
}

#[test]
fn writer_seek() {
    use std::io::{Seek, SeekFrom, Write};
    let mut writer = Writer::new();
    writer.push_int(1).unwrap();
    writer.seek(SeekFrom::Start(1)).unwrap();
    writer.write_all(&7i32.to_le_bytes()).unwrap();
    assert_eq!(writer.len(), 5);
    writer.seek(SeekFrom::End(0)).unwrap();
    writer.push_reg(1).unwrap();
    assert_eq!(writer.bytes(), &[ 0x01, 0x07, 0x00, 0x00, 0x00, 0x03, 0x01 ]);
    assert!(writer.seek(SeekFrom::Current(-100)).is_err());
}
