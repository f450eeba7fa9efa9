//! Nom parsers used to generate assembly statements.

use nom::IResult;
use nom::character::complete::{alpha1, alphanumeric1, char, digit1, line_ending, multispace1, none_of, not_line_ending, one_of, space0, space1};
use nom::bytes::complete::{escaped_transform, tag};
use nom::combinator::{eof, map, opt, peek, recognize, value};
use nom::multi::many0;
use nom::branch::alt;
use nom::sequence::{delimited, pair, preceded};
use crate::{Integer, RegisterIndex, Text, MAX_TEXT_LEN};
use crate::bytecode::opcodes::register_index;
use crate::assembler::ast::*;
use crate::assembler::error::{AsmError, AsmErrorKind, AsmResult};

/// Parser failure carrying the remaining input (to compute the error position) and the error kind.
#[derive(Debug)]
struct Failure<'a> {
    input: &'a str,
    kind: AsmErrorKind,
}

impl<'a> nom::error::ParseError<&'a str> for Failure<'a> {
    fn from_error_kind(input: &'a str, _: nom::error::ErrorKind) -> Self {
        Failure { input, kind: AsmErrorKind::SyntaxError }
    }
    fn append(_: &'a str, _: nom::error::ErrorKind, other: Self) -> Self {
        other
    }
}

type Output<'a, O> = IResult<&'a str, O, Failure<'a>>;

fn fail<'a, O>(input: &'a str, kind: AsmErrorKind) -> Output<'a, O> {
    Err(nom::Err::Failure(Failure { input, kind }))
}

// whitespace, newlines and line comments between statements

fn comment(i: &str) -> Output<&str> {
    recognize(pair(tag("//"), not_line_ending))(i)
}

fn ws(i: &str) -> Output<()> {
    value((), many0(alt((multispace1, comment))))(i)
}

fn end_of_statement(i: &str) -> Output<()> {
    preceded(space0, alt((
        value((), line_ending),
        value((), eof),
        value((), peek(tag("//"))),
    )))(i)
}

fn comma(i: &str) -> Output<char> {
    delimited(space0, char(','), space0)(i)
}

// identifier ([a-zA-Z_][a-zA-Z0-9_]*)

fn identifier(i: &str) -> Output<&str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_"))))
    ))(i)
}

// register (ax)

fn register(i: &str) -> Output<RegisterIndex> {
    let (remaining, name) = identifier(i)?;
    match register_index(name) {
        Some(index) => Ok((remaining, index)),
        None => fail(i, AsmErrorKind::UnknownRegister),
    }
}

// integer literal (-42)

fn integer(i: &str) -> Output<Integer> {
    let (remaining, digits) = recognize(pair(opt(one_of("+-")), digit1))(i)?;
    match digits.parse::<Integer>() {
        Ok(value) => Ok((remaining, value)),
        Err(_) => fail(i, AsmErrorKind::InvalidNumerical),
    }
}

// text literal ("hello world")

fn text(i: &str) -> Output<Text> {
    let (remaining, text) = alt((
        // escaped_transform needs at least one character, so the empty string is matched separately
        map(tag("\"\""), |_| String::new()),
        delimited(
            char('"'),
            escaped_transform(
                none_of("\\\"\n"),
                '\\',
                alt((
                    value("\\", char('\\')),
                    value("\"", char('"')),
                    value("\n", char('n')),
                    value("\t", char('t')),
                ))
            ),
            char('"')
        ),
    ))(i)?;
    if text.len() > MAX_TEXT_LEN {
        fail(i, AsmErrorKind::TextTooLong)
    } else {
        Ok((remaining, text.into_bytes()))
    }
}

fn operand(i: &str) -> Output<Operand> {
    alt((
        map(integer, Operand::Integer),
        map(register, Operand::Register),
    ))(i)
}

fn push_value(i: &str) -> Output<Value> {
    alt((
        map(integer, Value::Integer),
        map(text, Value::Text),
        map(register, Value::Register),
    ))(i)
}

fn register_operand_pair(i: &str) -> Output<(RegisterIndex, Operand)> {
    pair(preceded(space1, register), preceded(comma, operand))(i)
}

fn label_name(i: &str) -> Output<String> {
    map(preceded(space1, identifier), |name: &str| name.to_string())(i)
}

// statement (mnemonic followed by its operands)

fn statement(i: &str) -> Output<StatementKind> {
    let (rest, mnemonic) = identifier(i)?;
    match mnemonic {
        "mov" => map(register_operand_pair, |(reg, operand)| StatementKind::Move(reg, operand))(rest),
        "push" => map(preceded(space1, push_value), StatementKind::Push)(rest),
        "print" => Ok((rest, StatementKind::Print)),
        "input" => Ok((rest, StatementKind::Input)),
        "pop" => map(opt(preceded(space1, register)), StatementKind::Pop)(rest),
        "add" | "sub" | "mul" | "cmp" => {
            let op = match mnemonic {
                "add" => ArithmeticOp::Add,
                "sub" => ArithmeticOp::Sub,
                "mul" => ArithmeticOp::Mul,
                _ => ArithmeticOp::Cmp,
            };
            map(register_operand_pair, move |(reg, operand)| StatementKind::Arithmetic(op, reg, operand))(rest)
        },
        "tag" => map(label_name, StatementKind::Label)(rest),
        "jmp" | "je" | "jne" => {
            let kind = match mnemonic {
                "jmp" => JumpKind::Always,
                "je" => JumpKind::IfZero,
                _ => JumpKind::IfNotZero,
            };
            map(label_name, move |name| StatementKind::Jump(kind, name))(rest)
        },
        "call" => map(label_name, StatementKind::Call)(rest),
        _ => fail(i, AsmErrorKind::UnknownMnemonic),
    }
}

/// Converts a nom error into an assembler error. `at` is used when nom does not provide a position.
fn to_error(source: &str, err: nom::Err<Failure<'_>>, at: usize) -> AsmError {
    match err {
        nom::Err::Error(failure) | nom::Err::Failure(failure) => AsmError::new(failure.kind, source.len() - failure.input.len()),
        nom::Err::Incomplete(_) => AsmError::new(AsmErrorKind::SyntaxError, at),
    }
}

/// Parses assembly source into a list of statements.
pub fn parse(source: &str) -> AsmResult<Vec<Statement>> {
    let mut statements = Vec::new();
    let mut input = source;
    loop {
        let start = source.len() - input.len();
        input = match ws(input) {
            Ok((remaining, ())) => remaining,
            Err(err) => return Err(to_error(source, err, start)),
        };
        if input.is_empty() {
            break;
        }
        let start = source.len() - input.len();
        let (remaining, kind) = statement(input).map_err(|err| to_error(source, err, start))?;
        let (remaining, ()) = end_of_statement(remaining).map_err(|err| to_error(source, err, start))?;
        statements.push(Statement { position: start, kind });
        input = remaining;
    }
    Ok(statements)
}
