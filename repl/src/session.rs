//! Interactive session and file runner.
use crate::{Error, config::Mode};
use monkey_core::{Interpreter, ParseErrors, Value, lex};
use std::{
    fs,
    io::{self, BufRead, Write},
    path::Path,
};

pub const PROMPT: &str = ">> ";
pub const MONKEY_FACE: &str = "  /~\\ \n C oo \n _( ^) \n/   ~\\ \n";

/// Result of processing one unit of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    ParseFailed,
    RuntimeError,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

/// Processes source text against a persistent interpreter.
pub struct Session {
    mode: Mode,
    interpreter: Interpreter,
}

impl Session {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            interpreter: Interpreter::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Process source text, writing the result.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all, fields(mode = %self.mode)))]
    pub fn process(&mut self, src: &str, out: &mut impl Write) -> io::Result<Outcome> {
        match self.mode {
            Mode::Lex => {
                for token in lex::tokenize(src) {
                    writeln!(out, "{token}")?;
                }
                Ok(Outcome::Ok)
            }

            Mode::Parse => match monkey_core::parse(src) {
                Ok(program) => {
                    writeln!(out, "{program}")?;
                    Ok(Outcome::Ok)
                }
                Err(errors) => {
                    write_parse_errors(out, &errors)?;
                    Ok(Outcome::ParseFailed)
                }
            },

            Mode::Eval => match self.interpreter.run(src) {
                Ok(value) => {
                    writeln!(out, "{value}")?;
                    if matches!(value, Value::Error(_)) {
                        Ok(Outcome::RuntimeError)
                    } else {
                        Ok(Outcome::Ok)
                    }
                }
                Err(errors) => {
                    write_parse_errors(out, &errors)?;
                    Ok(Outcome::ParseFailed)
                }
            },
        }
    }

    /// Run the read-eval-print loop until the input is exhausted.
    /// Each line is processed on its own, blank lines are skipped.
    pub fn start(&mut self, mut input: impl BufRead, out: &mut impl Write) -> Result<(), Error> {
        let mut line = String::new();
        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                #[cfg(feature = "tracing")]
                tracing::debug!("end of input");

                return Ok(());
            }

            let src = line.trim_end_matches(['\n', '\r']);
            if src.trim().is_empty() {
                continue;
            }

            self.process(src, out)?;
        }
    }
}

/// Write parser diagnostics under the monkey face banner.
pub fn write_parse_errors(out: &mut impl Write, errors: &ParseErrors) -> io::Result<()> {
    write!(out, "{MONKEY_FACE}")?;
    writeln!(out, "Woops! We ran into some monkey business here!")?;
    writeln!(out, " parser errors:")?;
    for err in errors.iter() {
        writeln!(out, "\t{err}")?;
    }
    Ok(())
}

/// Process the contents of a file as a single unit.
pub fn run_file(path: impl AsRef<Path>, mode: Mode, out: &mut impl Write) -> Result<Outcome, Error> {
    let path = path.as_ref();
    let src = fs::read_to_string(path).map_err(|error| Error::ReadFile {
        path: path.to_path_buf(),
        error,
    })?;

    let mut session = Session::new(mode);
    let outcome = session.process(&src, out)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(?path, ?outcome);

    Ok(outcome)
}
