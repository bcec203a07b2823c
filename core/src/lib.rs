//! Monkey language lexer, parser and tree walking interpreter.
pub mod ast;
pub mod env;
pub mod eval;
pub mod lex;
pub mod parse;
pub mod token;
pub mod value;

pub use env::{Env, EnvRef};
pub use value::Value;

/// All diagnostics produced while parsing a source text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::From, thiserror::Error)]
pub struct ParseErrors(pub Vec<parse::error::Kind>);

impl ParseErrors {
    pub fn iter(&self) -> impl Iterator<Item = &parse::error::Kind> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages = self
            .0
            .iter()
            .map(|err| err.to_string())
            .collect::<Vec<_>>();
        write!(f, "{}", messages.join("\n"))
    }
}

/// Parse source text into a program.
pub fn parse(src: impl AsRef<str>) -> Result<ast::Program, ParseErrors> {
    parse::parse(src).map_err(ParseErrors)
}

/// Evaluates programs against a single top level scope,
/// so bindings persist from one run to the next.
#[derive(Debug)]
pub struct Interpreter {
    env: EnvRef,
}

impl Interpreter {
    pub fn new() -> Self {
        Self { env: Env::new() }
    }

    /// Top level scope.
    pub fn env(&self) -> &EnvRef {
        &self.env
    }

    /// Parse and evaluate source text.
    /// Nothing is evaluated if the source does not parse.
    ///
    /// # Returns
    /// Value of the last statement evaluated.
    /// Runtime errors are returned as [`Value::Error`].
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all))]
    pub fn run(&mut self, src: impl AsRef<str>) -> Result<Value, ParseErrors> {
        let program = match parse(src) {
            Ok(program) => program,
            Err(errors) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(count = errors.len(), "parse failed");

                return Err(errors);
            }
        };

        Ok(self.eval(&program))
    }

    pub fn eval(&mut self, program: &ast::Program) -> Value {
        let value = eval::eval(program, &self.env);

        #[cfg(feature = "tracing")]
        if let Value::Error(err) = &value {
            tracing::debug!(?err);
        }

        value
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
