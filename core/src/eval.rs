//! Tree walking evaluator.
//!
//! Runtime errors are values ([`Value::Error`]) rather than `Err`s.
//! Every rule checks the result of each sub-node and returns an error or a
//! `return` value as soon as one is produced, without evaluating the remaining
//! siblings. A `return` is only unwrapped at a call or at the top level.
use super::{
    ast,
    env::{Env, EnvRef},
    value::{Function, Value},
};
use std::rc::Rc;

/// Runtime error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("identifier not found: {0}")]
    IdentifierNotFound(String),

    /// Attempt to call a value that is not a function.
    #[error("not a function: {0}")]
    NotAFunction(&'static str),

    #[error("unknown operator: {op}{operand}")]
    UnknownPrefixOperator {
        op: ast::OpPrefix,
        operand: &'static str,
    },

    /// Operands are of the same type, which does not support the operator.
    #[error("unknown operator: {left} {op} {right}")]
    UnknownInfixOperator {
        left: &'static str,
        op: ast::OpInfix,
        right: &'static str,
    },

    /// Operands are of different types.
    #[error("type mismatch: {left} {op} {right}")]
    TypeMismatch {
        left: &'static str,
        op: ast::OpInfix,
        right: &'static str,
    },

    #[error("division by zero: {left} / 0")]
    DivisionByZero { left: i64 },

    /// Integer result does not fit in 64 bits.
    #[error("integer overflow: {expr}")]
    Overflow { expr: String },

    #[error("wrong number of arguments: expected {expected}, got {found}")]
    WrongArgumentCount { expected: usize, found: usize },
}

/// Return early if the value is an error or a `return` on its way out.
macro_rules! try_value {
    ($value:expr) => {
        match $value {
            value @ (Value::Error(_) | Value::Return(_)) => return value,
            value => value,
        }
    };
}

/// Evaluate a node within a scope.
pub fn eval<'a>(node: impl Into<ast::Node<'a>>, env: &EnvRef) -> Value {
    match node.into() {
        ast::Node::Program(program) => eval_program(program, env),
        ast::Node::Stmt(stmt) => eval_stmt(stmt, env),
        ast::Node::Expr(expr) => eval_expr(expr, env),
    }
}

/// A `return` at the top level ends the program with its value.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
fn eval_program(program: &ast::Program, env: &EnvRef) -> Value {
    let mut result = Value::NIL;
    for stmt in &program.statements {
        result = match eval_stmt(stmt, env) {
            Value::Return(value) => return *value,
            value @ Value::Error(_) => return value,
            value => value,
        };
    }
    result
}

/// `return` and errors stop the block and are passed on as is.
fn eval_block(block: &ast::StmtBlock, env: &EnvRef) -> Value {
    let mut result = Value::NIL;
    for stmt in &block.statements {
        result = eval_stmt(stmt, env);
        if matches!(result, Value::Return(_) | Value::Error(_)) {
            return result;
        }
    }
    result
}

fn eval_stmt(stmt: &ast::Stmt, env: &EnvRef) -> Value {
    match stmt {
        ast::Stmt::Expr(stmt) => eval_expr(&stmt.expr, env),
        ast::Stmt::Let(stmt) => eval_let(stmt, env),
        ast::Stmt::Return(stmt) => {
            let value = try_value!(eval_expr(&stmt.value, env));
            Value::Return(Box::new(value))
        }
        ast::Stmt::Block(block) => eval_block(block, env),
    }
}

fn eval_let(stmt: &ast::StmtLet, env: &EnvRef) -> Value {
    let value = try_value!(eval_expr(&stmt.value, env));
    let name = &stmt.name.name;

    // Make a function defined in another scope visible to itself by name.
    if let Value::Function(function) = &value
        && !Rc::ptr_eq(&function.env, env)
    {
        let mut closure = function.env.borrow_mut();
        if !closure.contains_local(name) {
            closure.set(name.clone(), value.clone());
        }
    }

    env.borrow_mut().set(name.clone(), value);
    Value::NIL
}

fn eval_expr(expr: &ast::Expr, env: &EnvRef) -> Value {
    match expr {
        ast::Expr::Ident(ident) => eval_identifier(ident, env),
        ast::Expr::Literal(ast::ExprLiteral::Int(lit)) => Value::Int(lit.value),
        ast::Expr::Literal(ast::ExprLiteral::Bool(lit)) => Value::from(lit.value),
        ast::Expr::Prefix(expr) => {
            let operand = try_value!(eval_expr(&expr.operand, env));
            eval_prefix(expr.op, operand)
        }
        ast::Expr::Infix(expr) => {
            let left = try_value!(eval_expr(&expr.left, env));
            let right = try_value!(eval_expr(&expr.right, env));
            eval_infix(expr.op, left, right)
        }
        ast::Expr::If(expr) => eval_if(expr, env),
        ast::Expr::Function(expr) => Value::Function(Rc::new(Function {
            parameters: expr.parameters.clone(),
            body: expr.body.clone(),
            env: env.clone(),
        })),
        ast::Expr::Call(expr) => eval_call(expr, env),
    }
}

fn eval_identifier(ident: &ast::Identifier, env: &EnvRef) -> Value {
    match env.borrow().get(&ident.name) {
        Some(value) => value,
        None => {
            #[cfg(feature = "tracing")]
            tracing::debug!(name = %ident.name, "unbound identifier");

            Error::IdentifierNotFound(ident.name.clone()).into()
        }
    }
}

fn eval_if(expr: &ast::ExprIf, env: &EnvRef) -> Value {
    let condition = try_value!(eval_expr(&expr.condition, env));
    if condition.is_truthy() {
        eval_block(&expr.consequence, env)
    } else if let Some(alternative) = &expr.alternative {
        eval_block(alternative, env)
    } else {
        Value::NIL
    }
}

fn eval_call(expr: &ast::ExprCall, env: &EnvRef) -> Value {
    let callee = try_value!(eval_expr(&expr.callee, env));
    let mut arguments = Vec::with_capacity(expr.arguments.len());
    for argument in &expr.arguments {
        arguments.push(try_value!(eval_expr(argument, env)));
    }
    apply_function(callee, arguments)
}

/// Call a function value.
/// Parameters are bound in a new scope enclosed by the function's own scope,
/// not the caller's.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all, fields(args = arguments.len())))]
fn apply_function(callee: Value, arguments: Vec<Value>) -> Value {
    let function = match callee {
        Value::Function(function) => function,
        callee => return Error::NotAFunction(callee.type_name()).into(),
    };

    if function.parameters.len() != arguments.len() {
        return Error::WrongArgumentCount {
            expected: function.parameters.len(),
            found: arguments.len(),
        }
        .into();
    }

    let call_env = Env::enclose(&function.env);
    {
        let mut scope = call_env.borrow_mut();
        for (param, argument) in function.parameters.iter().zip(arguments) {
            scope.set(param.name.clone(), argument);
        }
    }

    match eval_block(&function.body, &call_env) {
        Value::Return(value) => *value,
        value => value,
    }
}

fn eval_prefix(op: ast::OpPrefix, operand: Value) -> Value {
    match op {
        ast::OpPrefix::Not => Value::from(!operand.is_truthy()),
        ast::OpPrefix::Minus => match operand {
            Value::Int(value) => match value.checked_neg() {
                Some(value) => Value::Int(value),
                None => Error::Overflow {
                    expr: format!("-({value})"),
                }
                .into(),
            },
            operand => Error::UnknownPrefixOperator {
                op,
                operand: operand.type_name(),
            }
            .into(),
        },
    }
}

fn eval_infix(op: ast::OpInfix, left: Value, right: Value) -> Value {
    match (&left, &right) {
        (Value::Int(left), Value::Int(right)) => eval_int_infix(op, *left, *right),
        _ if op == ast::OpInfix::Equal => Value::from(left.is_identical(&right)),
        _ if op == ast::OpInfix::NotEqual => Value::from(!left.is_identical(&right)),
        _ if left.type_name() != right.type_name() => Error::TypeMismatch {
            left: left.type_name(),
            op,
            right: right.type_name(),
        }
        .into(),
        _ => Error::UnknownInfixOperator {
            left: left.type_name(),
            op,
            right: right.type_name(),
        }
        .into(),
    }
}

fn eval_int_infix(op: ast::OpInfix, left: i64, right: i64) -> Value {
    let checked = |value: Option<i64>| match value {
        Some(value) => Value::Int(value),
        None => Error::Overflow {
            expr: format!("{left} {op} {right}"),
        }
        .into(),
    };

    match op {
        ast::OpInfix::Add => checked(left.checked_add(right)),
        ast::OpInfix::Subtract => checked(left.checked_sub(right)),
        ast::OpInfix::Multiply => checked(left.checked_mul(right)),
        ast::OpInfix::Divide => {
            if right == 0 {
                Error::DivisionByZero { left }.into()
            } else {
                checked(left.checked_div(right))
            }
        }
        ast::OpInfix::Less => Value::from(left < right),
        ast::OpInfix::Greater => Value::from(left > right),
        ast::OpInfix::Equal => Value::from(left == right),
        ast::OpInfix::NotEqual => Value::from(left != right),
    }
}
