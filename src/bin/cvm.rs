use cvm::{assembler, bytecode::{Program, runtime::{VM, VMState, StdConsole}}};
use std::{env, fs, path::Path, process::ExitCode};

/*
 * Command line front end: assembles, runs and disassembles CVM programs.
 * Set RUST_LOG (e.g. RUST_LOG=cvm=trace) to trace execution on stderr.
 */

mod shared;
use shared::{DemoFunctions, init_logging};

const USAGE: &str = "usage:
  cvm run <file.asm>             assemble and execute
  cvm exec <file.bin>            execute raw bytecode
  cvm asm <file.asm> <file.bin>  assemble to bytecode
  cvm dis <file>                 disassemble bytecode or assembly";

fn main() -> ExitCode {
    init_logging();
    let args: Vec<String> = env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(|arg| arg.as_str()).collect();
    let result = match args[..] {
        [ "run", source ] => load_assembly(source).and_then(execute),
        [ "exec", binary ] => load_bytecode(binary).and_then(execute),
        [ "asm", source, target ] => load_assembly(source).and_then(|bytecode| {
            fs::write(target, bytecode).map_err(|err| format!("{}: {}", target, err))
        }),
        [ "dis", file ] => load(file).map(|bytecode| print!("{}", Program::new(bytecode).format_program())),
        _ => Err(format!("{}\n\nhost functions: {}", USAGE, DemoFunctions::names().join(", "))),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}

/// Runs the program against the demo host functions and stdio.
fn execute(bytecode: Vec<u8>) -> Result<(), String> {
    let mut console = StdConsole::stdio();
    let mut vm = VM::new(bytecode, &DemoFunctions);
    match vm.run(&mut console) {
        VMState::Terminated => Ok(()),
        // the console already reported the error
        state => Err(format!("halted: {:?}", state)),
    }
}

/// Loads a file as bytecode, assembling it first if it has an `.asm` extension.
fn load(file: &str) -> Result<Vec<u8>, String> {
    if Path::new(file).extension().map_or(false, |extension| extension == "asm") {
        load_assembly(file)
    } else {
        load_bytecode(file)
    }
}

fn load_bytecode(file: &str) -> Result<Vec<u8>, String> {
    fs::read(file).map_err(|err| format!("{}: {}", file, err))
}

fn load_assembly(file: &str) -> Result<Vec<u8>, String> {
    let source = fs::read_to_string(file).map_err(|err| format!("{}: {}", file, err))?;
    assembler::assemble(&source).map_err(|err| {
        let (line, column) = err.loc(&source);
        format!("{} in line {}, column {} in file {}", err, line, column, file)
    })
}
