//! Command line configuration.
use std::path::PathBuf;

/// What is done with each unit of source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::Display)]
pub enum Mode {
    /// Print the tokens.
    #[display("lex")]
    Lex,

    /// Print the rendered program.
    #[display("parse")]
    Parse,

    /// Evaluate and print the resulting value.
    #[default]
    #[display("eval")]
    Eval,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,

    /// Source file to run.
    /// An interactive session is started if not set.
    pub path: Option<PathBuf>,
}

impl Config {
    /// Parse command line arguments, excluding the program name.
    ///
    /// `monkey [--lex | --parse] [path]`
    pub fn from_args<I>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut config = Self::default();
        let mut mode_set = false;
        for arg in args {
            let arg = arg.into();
            let mode = match arg.as_str() {
                "--lex" => Mode::Lex,
                "--parse" => Mode::Parse,
                flag if flag.starts_with("--") => return Err(Error::UnknownFlag(arg)),
                _ => {
                    if config.path.is_some() {
                        return Err(Error::UnexpectedArgument(arg));
                    }
                    config.path = Some(PathBuf::from(arg));
                    continue;
                }
            };

            if mode_set {
                return Err(Error::ConflictingModes);
            }
            config.mode = mode;
            mode_set = true;
        }

        Ok(config)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unknown flag `{0}`")]
    UnknownFlag(String),

    /// More than one path was given.
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),

    #[error("only one of `--lex` and `--parse` may be given")]
    ConflictingModes,
}
