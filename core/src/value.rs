use super::{ast, env::EnvRef, eval};
use std::{fmt, rc::Rc};

/// Runtime value.
#[derive(Debug, Clone)]
pub enum Value {
    Int(i64),
    Bool(bool),
    /// Result of anything that does not produce a value.
    Nil,
    /// Value of a `return` statement on its way to the enclosing call.
    Return(Box<Value>),
    /// Runtime error.
    Error(eval::Error),
    Function(Rc<Function>),
}

impl Value {
    pub const TRUE: Self = Self::Bool(true);
    pub const FALSE: Self = Self::Bool(false);
    pub const NIL: Self = Self::Nil;

    /// Name of the value's type as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "INT",
            Self::Bool(_) => "BOOL",
            Self::Nil => "NIL",
            Self::Return(_) => "RETURN",
            Self::Error(_) => "EXCEPT",
            Self::Function(_) => "FUNCTION",
        }
    }

    /// `nil` and `false` are falsy, every other value is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Self::Nil | Self::Bool(false))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Identity comparison.
    /// Booleans and `nil` are compared by value, functions by reference.
    pub fn is_identical(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(left), Self::Int(right)) => left == right,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Nil, Self::Nil) => true,
            (Self::Function(left), Self::Function(right)) => Rc::ptr_eq(left, right),
            _ => false,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Return(left), Self::Return(right)) => left == right,
            (Self::Error(left), Self::Error(right)) => left == right,
            _ => self.is_identical(other),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        if value { Self::TRUE } else { Self::FALSE }
    }
}

impl From<eval::Error> for Value {
    fn from(value: eval::Error) -> Self {
        Self::Error(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Nil => write!(f, "nil"),
            Self::Return(value) => write!(f, "{value}"),
            Self::Error(err) => write!(f, "Error! {err}"),
            Self::Function(function) => write!(f, "{function}"),
        }
    }
}

/// User defined function together with the scope it was defined in.
pub struct Function {
    pub parameters: Vec<ast::Identifier>,
    pub body: Rc<ast::StmtBlock>,
    pub env: EnvRef,
}

impl fmt::Debug for Function {
    // The captured scope usually contains the function itself.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("parameters", &self.parameters)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parameters = self
            .parameters
            .iter()
            .map(|param| param.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "fn ({parameters}) {{ {} }}", self.body.display_statements())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::env::Env;

    fn function(parameters: &[&str], body: ast::StmtBlock) -> Rc<Function> {
        Rc::new(Function {
            parameters: parameters
                .iter()
                .map(|name| ast::Identifier::new(*name))
                .collect(),
            body: Rc::new(body),
            env: Env::new(),
        })
    }

    #[test]
    fn display() {
        assert_eq!(Value::Int(-12).to_string(), "-12");
        assert_eq!(Value::TRUE.to_string(), "true");
        assert_eq!(Value::FALSE.to_string(), "false");
        assert_eq!(Value::NIL.to_string(), "nil");
        assert_eq!(Value::Return(Box::new(Value::Int(3))).to_string(), "3");
        assert_eq!(
            Value::from(eval::Error::IdentifierNotFound("x".to_string())).to_string(),
            "Error! identifier not found: x"
        );
    }

    #[test]
    fn display_function() {
        let body = ast::StmtBlock {
            statements: vec![
                ast::StmtExpr {
                    expr: ast::Identifier::new("x").into(),
                }
                .into(),
            ],
        };
        let value = Value::Function(function(&["x", "y"], body));
        assert_eq!(value.to_string(), "fn (x, y) { x }");
    }

    #[test]
    fn truthiness() {
        assert!(Value::Int(0).is_truthy());
        assert!(Value::Int(1).is_truthy());
        assert!(Value::TRUE.is_truthy());
        assert!(!Value::FALSE.is_truthy());
        assert!(!Value::NIL.is_truthy());
        assert!(Value::Function(function(&[], ast::StmtBlock::default())).is_truthy());
    }

    #[test]
    fn identity() {
        assert!(Value::from(true).is_identical(&Value::TRUE));
        assert!(!Value::TRUE.is_identical(&Value::FALSE));
        assert!(Value::NIL.is_identical(&Value::NIL));
        assert!(!Value::NIL.is_identical(&Value::FALSE));

        let f = Value::Function(function(&[], ast::StmtBlock::default()));
        let g = Value::Function(function(&[], ast::StmtBlock::default()));
        assert!(f.is_identical(&f.clone()));
        assert!(!f.is_identical(&g));
        assert_ne!(f, g);
    }

    #[test]
    fn type_names() {
        assert_eq!(Value::Int(1).type_name(), "INT");
        assert_eq!(Value::TRUE.type_name(), "BOOL");
        assert_eq!(Value::NIL.type_name(), "NIL");
        assert_eq!(
            Value::Function(function(&[], ast::StmtBlock::default())).type_name(),
            "FUNCTION"
        );
    }
}
