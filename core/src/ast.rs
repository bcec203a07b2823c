//! Syntax tree produced by the parser.
//!
//! Every node renders back to source text through [`Display`](fmt::Display).
//! Infix and prefix nodes are fully parenthesised, so the rendering of any
//! error-free program parses back into an equal tree.
use super::token;
use std::{fmt, rc::Rc};

/// Root of a parsed source unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Program {
    pub statements: Vec<Stmt>,
}

#[derive(Debug, Clone, derive_more::From, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stmt {
    Let(StmtLet),
    Return(StmtReturn),
    Expr(StmtExpr),
    Block(StmtBlock),
}

/// `let <name> = <value>;`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StmtLet {
    pub name: Identifier,
    pub value: Expr,
}

/// `return <value>;`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StmtReturn {
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StmtExpr {
    pub expr: Expr,
}

/// Brace delimited sequence of statements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StmtBlock {
    pub statements: Vec<Stmt>,
}

#[derive(Debug, Clone, derive_more::From, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    Ident(Identifier),
    Literal(ExprLiteral),
    Prefix(ExprPrefix),
    Infix(ExprInfix),
    If(ExprIf),
    Function(ExprFunction),
    Call(ExprCall),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(derive_more::From, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExprLiteral {
    Int(LitInt),
    Bool(LitBool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LitInt {
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LitBool {
    pub value: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprPrefix {
    pub op: OpPrefix,
    pub operand: Box<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OpPrefix {
    #[display("!")]
    Not,
    #[display("-")]
    Minus,
}

impl OpPrefix {
    pub fn from_token(token: &token::Kind) -> Option<Self> {
        match token {
            token::Kind::Bang => Some(Self::Not),
            token::Kind::Minus => Some(Self::Minus),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprInfix {
    pub op: OpInfix,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OpInfix {
    #[display("+")]
    Add,
    #[display("-")]
    Subtract,
    #[display("*")]
    Multiply,
    #[display("/")]
    Divide,
    #[display("<")]
    Less,
    #[display(">")]
    Greater,
    #[display("==")]
    Equal,
    #[display("!=")]
    NotEqual,
}

impl OpInfix {
    pub fn from_token(token: &token::Kind) -> Option<Self> {
        match token {
            token::Kind::Plus => Some(Self::Add),
            token::Kind::Minus => Some(Self::Subtract),
            token::Kind::Star => Some(Self::Multiply),
            token::Kind::SlashForward => Some(Self::Divide),
            token::Kind::Less => Some(Self::Less),
            token::Kind::Greater => Some(Self::Greater),
            token::Kind::EqualEqual => Some(Self::Equal),
            token::Kind::BangEqual => Some(Self::NotEqual),
            _ => None,
        }
    }
}

/// `if (<condition>) { ... } else { ... }`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprIf {
    pub condition: Box<Expr>,
    pub consequence: StmtBlock,
    pub alternative: Option<StmtBlock>,
}

/// `fn (<parameters>) { <body> }`
///
/// The body is shared with every function value created from the literal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprFunction {
    pub parameters: Vec<Identifier>,
    pub body: Rc<StmtBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExprCall {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
}

/// Any node the evaluator accepts.
#[derive(Debug, Clone, Copy, derive_more::From)]
pub enum Node<'a> {
    Program(&'a Program),
    Stmt(&'a Stmt),
    Expr(&'a Expr),
}

/// Write a sequence of statements.
/// Expression statements that are followed by another statement are terminated
/// with `;` so adjacent expressions are not merged when parsed again.
fn fmt_statements(statements: &[Stmt], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut it = statements.iter().peekable();
    while let Some(stmt) = it.next() {
        write!(f, "{stmt}")?;
        if matches!(stmt, Stmt::Expr(_)) && it.peek().is_some() {
            write!(f, ";")?;
        }
    }
    Ok(())
}

/// Write a comma separated list.
fn fmt_list<T: fmt::Display>(items: &[T], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_statements(&self.statements, f)
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let(stmt) => write!(f, "{stmt}"),
            Self::Return(stmt) => write!(f, "{stmt}"),
            Self::Expr(stmt) => write!(f, "{}", stmt.expr),
            Self::Block(stmt) => write!(f, "{stmt}"),
        }
    }
}

impl fmt::Display for StmtLet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "let {} = {};", self.name, self.value)
    }
}

impl fmt::Display for StmtReturn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "return {};", self.value)
    }
}

impl StmtBlock {
    /// Render the statements without the enclosing braces.
    pub fn display_statements(&self) -> impl fmt::Display + '_ {
        struct Statements<'a>(&'a [Stmt]);
        impl fmt::Display for Statements<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt_statements(self.0, f)
            }
        }

        Statements(&self.statements)
    }
}

impl fmt::Display for StmtBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.statements.is_empty() {
            write!(f, "{{ }}")
        } else {
            write!(f, "{{ {} }}", self.display_statements())
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(expr) => write!(f, "{expr}"),
            Self::Literal(ExprLiteral::Int(lit)) => write!(f, "{}", lit.value),
            Self::Literal(ExprLiteral::Bool(lit)) => write!(f, "{}", lit.value),
            Self::Prefix(expr) => write!(f, "({}{})", expr.op, expr.operand),
            Self::Infix(expr) => write!(f, "({} {} {})", expr.left, expr.op, expr.right),
            Self::If(expr) => write!(f, "{expr}"),
            Self::Function(expr) => {
                write!(f, "fn (")?;
                fmt_list(&expr.parameters, f)?;
                write!(f, ") {}", expr.body)
            }
            Self::Call(expr) => {
                write!(f, "{}(", expr.callee)?;
                fmt_list(&expr.arguments, f)?;
                write!(f, ")")
            }
        }
    }
}

impl fmt::Display for ExprIf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.condition.as_ref() {
            Expr::Prefix(_) | Expr::Infix(_) => write!(f, "if{}", self.condition)?,
            condition => write!(f, "if({condition})")?,
        }
        write!(f, " {}", self.consequence)?;
        if let Some(alternative) = &self.alternative {
            write!(f, " else {alternative}")?;
        }
        Ok(())
    }
}
