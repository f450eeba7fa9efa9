use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use crate::Text;
use crate::bytecode::runtime::RuntimeError;

/// Input, output and diagnostic channels used by the `print` and `input` instructions and for error reporting.
pub trait Console {
    /// Writes one line of output.
    fn print(self: &mut Self, line: &[u8]) -> io::Result<()>;
    /// Reads the next whitespace-delimited token, blocking until one is available. Returns None at the end of input.
    fn read_token(self: &mut Self) -> io::Result<Option<Text>>;
    /// Reports a fatal runtime error.
    fn report(self: &mut Self, error: &RuntimeError);
}

/// A console over arbitrary input, output and diagnostic streams.
#[derive(Debug)]
pub struct StreamConsole<R, W, E> {
    input   : R,
    output  : W,
    error   : E,
    pending : VecDeque<Text>,
}

/// A console connected to the process' standard streams.
pub type StdConsole = StreamConsole<io::StdinLock<'static>, io::Stdout, io::Stderr>;

impl StdConsole {
    /// Creates a console reading from stdin, printing to stdout and reporting to stderr.
    pub fn stdio() -> Self {
        StreamConsole::new(io::stdin().lock(), io::stdout(), io::stderr())
    }
}

impl<R, W, E> StreamConsole<R, W, E> where R: BufRead, W: Write, E: Write {
    /// Creates a console over the given streams.
    pub fn new(input: R, output: W, error: E) -> Self {
        StreamConsole {
            input,
            output,
            error,
            pending: VecDeque::new(),
        }
    }
    /// Returns the output stream.
    pub fn output(self: &Self) -> &W {
        &self.output
    }
    /// Returns the diagnostic stream.
    pub fn error(self: &Self) -> &E {
        &self.error
    }
    /// Converts the console back into its streams.
    pub fn into_inner(self: Self) -> (R, W, E) {
        (self.input, self.output, self.error)
    }
}

impl<R, W, E> Console for StreamConsole<R, W, E> where R: BufRead, W: Write, E: Write {
    fn print(self: &mut Self, line: &[u8]) -> io::Result<()> {
        self.output.write_all(line)?;
        self.output.write_all(b"\n")
    }
    fn read_token(self: &mut Self) -> io::Result<Option<Text>> {
        // prompts written by print have to be visible before blocking
        self.output.flush()?;
        let mut line = Vec::new();
        while self.pending.is_empty() {
            line.clear();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split(|byte| byte.is_ascii_whitespace()).filter(|token| !token.is_empty()).map(|token| token.to_vec()));
        }
        Ok(self.pending.pop_front())
    }
    fn report(self: &mut Self, error: &RuntimeError) {
        // diagnostics are best effort, the VM halts regardless
        let _ = writeln!(self.error, "{}", error);
        let _ = self.error.flush();
    }
}
