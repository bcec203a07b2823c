use super::{
    ast, lex,
    token::{self, Keyword, Kind, Token},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Lowest,
    /// == !=
    Equals,
    /// < >
    LessGreater,
    /// + -
    Sum,
    /// * /
    Product,
    /// ! -
    Prefix,
    /// Function calls
    Call,
}

impl Precedence {
    /// Binding power of a token in infix position.
    pub fn of(token: &token::Kind) -> Self {
        match token {
            Kind::EqualEqual | Kind::BangEqual => Self::Equals,
            Kind::Less | Kind::Greater => Self::LessGreater,
            Kind::Plus | Kind::Minus => Self::Sum,
            Kind::Star | Kind::SlashForward => Self::Product,
            Kind::ParenLeft => Self::Call,
            _ => Self::Lowest,
        }
    }
}

type PrefixRule = fn(&mut Parser<'_>) -> Option<ast::Expr>;
type InfixRule = fn(&mut Parser<'_>, ast::Expr) -> Option<ast::Expr>;

/// Rule to parse an expression starting with the token.
fn prefix_rule(token: &token::Kind) -> Option<PrefixRule> {
    match token {
        Kind::Identifier => Some(parse_identifier),
        Kind::Int => Some(parse_integer),
        Kind::Keyword(Keyword::True | Keyword::False) => Some(parse_boolean),
        Kind::Bang | Kind::Minus => Some(parse_prefix),
        Kind::ParenLeft => Some(parse_group),
        Kind::Keyword(Keyword::If) => Some(parse_if),
        Kind::Keyword(Keyword::Fn) => Some(parse_function),
        _ => None,
    }
}

/// Rule to continue an expression with the token in infix position.
fn infix_rule(token: &token::Kind) -> Option<InfixRule> {
    match token {
        Kind::Plus
        | Kind::Minus
        | Kind::Star
        | Kind::SlashForward
        | Kind::Less
        | Kind::Greater
        | Kind::EqualEqual
        | Kind::BangEqual => Some(parse_infix),
        Kind::ParenLeft => Some(parse_call),
        _ => None,
    }
}

/// Parse source text.
///
/// # Returns
/// `Err` with every diagnostic if any were recorded.
pub fn parse(src: impl AsRef<str>) -> Result<ast::Program, Vec<error::Kind>> {
    let mut parser = Parser::new(lex::Lexer::new(src.as_ref()));
    let program = parser.parse_program();
    if parser.errors.is_empty() {
        Ok(program)
    } else {
        Err(parser.errors)
    }
}

/// Precedence climbing parser over a token stream.
///
/// Parsing does not stop at the first error.
/// Diagnostics are collected and a best-effort tree is produced,
/// so [`Parser::errors`] must be checked before the tree is used.
pub struct Parser<'a> {
    lexer: lex::Lexer<'a>,
    current: Token,
    peek: Token,
    errors: Vec<error::Kind>,
}

impl<'a> Parser<'a> {
    pub fn new(mut lexer: lex::Lexer<'a>) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();
        Self {
            lexer,
            current,
            peek,
            errors: vec![],
        }
    }

    /// Human readable diagnostics, in the order they were encountered.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(|err| err.to_string()).collect()
    }

    pub fn diagnostics(&self) -> &[error::Kind] {
        &self.errors
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
    pub fn parse_program(&mut self) -> ast::Program {
        let mut statements = vec![];
        while !self.current.is(Kind::Eof) {
            if let Some(stmt) = parse_stmt(self) {
                statements.push(stmt);
            }
            self.advance();
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(statements = statements.len(), errors = self.errors.len());

        ast::Program { statements }
    }
}

impl<'a> Parser<'a> {
    fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    fn current_is(&self, kind: Kind) -> bool {
        self.current.is(kind)
    }

    fn peek_is(&self, kind: Kind) -> bool {
        self.peek.is(kind)
    }

    /// Advance if the next token is of the expected kind,
    /// otherwise record an error.
    fn expect_peek(&mut self, expected: Kind) -> Option<()> {
        if self.peek_is(expected) {
            self.advance();
            Some(())
        } else {
            self.errors.push(error::Kind::UnexpectedToken {
                expected,
                found: self.peek.kind,
            });
            None
        }
    }

    /// Consume an optional trailing token.
    fn skip_peek(&mut self, kind: Kind) {
        if self.peek_is(kind) {
            self.advance();
        }
    }
}

fn parse_stmt(parser: &mut Parser<'_>) -> Option<ast::Stmt> {
    match parser.current.kind {
        Kind::Keyword(Keyword::Let) => Some(parse_let(parser)?.into()),
        Kind::Keyword(Keyword::Return) => Some(parse_return(parser)?.into()),
        _ => Some(parse_expr_stmt(parser)?.into()),
    }
}

fn parse_let(parser: &mut Parser<'_>) -> Option<ast::StmtLet> {
    parser.expect_peek(Kind::Identifier)?;
    let name = ast::Identifier::new(parser.current.literal.clone());
    parser.expect_peek(Kind::Equal)?;
    parser.advance();
    let value = parse_expr(parser, Precedence::Lowest)?;
    parser.skip_peek(Kind::Semicolon);
    Some(ast::StmtLet { name, value })
}

fn parse_return(parser: &mut Parser<'_>) -> Option<ast::StmtReturn> {
    parser.advance();
    let value = parse_expr(parser, Precedence::Lowest)?;
    parser.skip_peek(Kind::Semicolon);
    Some(ast::StmtReturn { value })
}

fn parse_expr_stmt(parser: &mut Parser<'_>) -> Option<ast::StmtExpr> {
    let expr = parse_expr(parser, Precedence::Lowest)?;
    parser.skip_peek(Kind::Semicolon);
    Some(ast::StmtExpr { expr })
}

/// Parse statements until the closing brace.
/// Current token must be the opening brace.
fn parse_block(parser: &mut Parser<'_>) -> ast::StmtBlock {
    parser.advance();
    let mut statements = vec![];
    while !parser.current_is(Kind::BraceRight) && !parser.current_is(Kind::Eof) {
        if let Some(stmt) = parse_stmt(parser) {
            statements.push(stmt);
        }
        parser.advance();
    }
    ast::StmtBlock { statements }
}

#[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(parser)))]
fn parse_expr(parser: &mut Parser<'_>, precedence: Precedence) -> Option<ast::Expr> {
    let Some(prefix) = prefix_rule(&parser.current.kind) else {
        parser.errors.push(error::Kind::NoPrefixRule {
            found: parser.current.kind,
        });
        return None;
    };

    let mut expr = prefix(parser)?;
    while !parser.peek_is(Kind::Semicolon) && precedence < Precedence::of(&parser.peek.kind) {
        let Some(infix) = infix_rule(&parser.peek.kind) else {
            return Some(expr);
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(next = ?parser.peek);

        parser.advance();
        expr = infix(parser, expr)?;
    }
    Some(expr)
}

fn parse_identifier(parser: &mut Parser<'_>) -> Option<ast::Expr> {
    Some(ast::Identifier::new(parser.current.literal.clone()).into())
}

fn parse_integer(parser: &mut Parser<'_>) -> Option<ast::Expr> {
    match parser.current.literal.parse::<i64>() {
        Ok(value) => Some(ast::ExprLiteral::from(ast::LitInt { value }).into()),
        Err(_) => {
            parser.errors.push(error::Kind::InvalidInteger {
                literal: parser.current.literal.clone(),
            });
            None
        }
    }
}

fn parse_boolean(parser: &mut Parser<'_>) -> Option<ast::Expr> {
    let value = parser.current_is(Kind::Keyword(Keyword::True));
    Some(ast::ExprLiteral::from(ast::LitBool { value }).into())
}

fn parse_prefix(parser: &mut Parser<'_>) -> Option<ast::Expr> {
    let op = ast::OpPrefix::from_token(&parser.current.kind)?;
    parser.advance();
    let operand = parse_expr(parser, Precedence::Prefix)?;
    Some(
        ast::ExprPrefix {
            op,
            operand: Box::new(operand),
        }
        .into(),
    )
}

fn parse_infix(parser: &mut Parser<'_>, left: ast::Expr) -> Option<ast::Expr> {
    let op = ast::OpInfix::from_token(&parser.current.kind)?;
    let precedence = Precedence::of(&parser.current.kind);
    parser.advance();
    let right = parse_expr(parser, precedence)?;
    Some(
        ast::ExprInfix {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
        .into(),
    )
}

fn parse_group(parser: &mut Parser<'_>) -> Option<ast::Expr> {
    parser.advance();
    let expr = parse_expr(parser, Precedence::Lowest)?;
    parser.expect_peek(Kind::ParenRight)?;
    Some(expr)
}

fn parse_if(parser: &mut Parser<'_>) -> Option<ast::Expr> {
    parser.expect_peek(Kind::ParenLeft)?;
    parser.advance();
    let condition = parse_expr(parser, Precedence::Lowest)?;
    parser.expect_peek(Kind::ParenRight)?;
    parser.expect_peek(Kind::BraceLeft)?;
    let consequence = parse_block(parser);

    let alternative = if parser.peek_is(Kind::Keyword(Keyword::Else)) {
        parser.advance();
        parser.expect_peek(Kind::BraceLeft)?;
        Some(parse_block(parser))
    } else {
        None
    };

    Some(
        ast::ExprIf {
            condition: Box::new(condition),
            consequence,
            alternative,
        }
        .into(),
    )
}

fn parse_function(parser: &mut Parser<'_>) -> Option<ast::Expr> {
    parser.expect_peek(Kind::ParenLeft)?;
    let parameters = parse_parameters(parser)?;
    parser.expect_peek(Kind::BraceLeft)?;
    let body = parse_block(parser);
    Some(
        ast::ExprFunction {
            parameters,
            body: body.into(),
        }
        .into(),
    )
}

/// Parse a comma separated list of identifiers.
/// Current token must be the opening parenthesis.
fn parse_parameters(parser: &mut Parser<'_>) -> Option<Vec<ast::Identifier>> {
    let mut parameters = vec![];
    if parser.peek_is(Kind::ParenRight) {
        parser.advance();
        return Some(parameters);
    }

    parser.expect_peek(Kind::Identifier)?;
    parameters.push(ast::Identifier::new(parser.current.literal.clone()));
    while parser.peek_is(Kind::Comma) {
        parser.advance();
        parser.expect_peek(Kind::Identifier)?;
        parameters.push(ast::Identifier::new(parser.current.literal.clone()));
    }
    parser.expect_peek(Kind::ParenRight)?;
    Some(parameters)
}

fn parse_call(parser: &mut Parser<'_>, callee: ast::Expr) -> Option<ast::Expr> {
    let arguments = parse_expr_list(parser, Kind::ParenRight)?;
    Some(
        ast::ExprCall {
            callee: Box::new(callee),
            arguments,
        }
        .into(),
    )
}

/// Parse a comma separated list of expressions terminated by `end`.
/// Current token must be the opening delimeter.
fn parse_expr_list(parser: &mut Parser<'_>, end: Kind) -> Option<Vec<ast::Expr>> {
    let mut exprs = vec![];
    if parser.peek_is(end) {
        parser.advance();
        return Some(exprs);
    }

    parser.advance();
    exprs.push(parse_expr(parser, Precedence::Lowest)?);
    while parser.peek_is(Kind::Comma) {
        parser.advance();
        parser.advance();
        exprs.push(parse_expr(parser, Precedence::Lowest)?);
    }
    parser.expect_peek(end)?;
    Some(exprs)
}

pub mod error {
    use crate::token;

    #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub enum Kind {
        /// A specific token was required next.
        #[error("expected next token to be {expected}, got {found} instead")]
        UnexpectedToken {
            expected: token::Kind,
            found: token::Kind,
        },

        /// The token can not begin an expression.
        #[error("no prefix parse function for {found} found")]
        NoPrefixRule { found: token::Kind },

        /// Integer literal does not fit in 64 bits.
        #[error("could not parse {literal} as integer")]
        InvalidInteger { literal: String },
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse_ok(src: &str) -> ast::Program {
        let mut parser = Parser::new(lex::Lexer::new(src));
        let program = parser.parse_program();
        assert!(
            parser.errors().is_empty(),
            "unexpected errors for {src:?}: {:?}",
            parser.errors()
        );
        program
    }

    fn parse_errors(src: &str) -> Vec<String> {
        let mut parser = Parser::new(lex::Lexer::new(src));
        parser.parse_program();
        parser.errors()
    }

    fn single_expr(src: &str) -> ast::Expr {
        let mut program = parse_ok(src);
        assert_eq!(program.statements.len(), 1, "{src:?}");
        let ast::Stmt::Expr(stmt) = program.statements.remove(0) else {
            panic!("expected expression statement");
        };
        stmt.expr
    }

    #[test]
    fn parse_let() {
        let cases = [
            ("let x = 5;", "x", "5"),
            ("let y = true;", "y", "true"),
            ("let foobar = y", "foobar", "y"),
        ];
        for (src, name, value) in cases {
            let program = parse_ok(src);
            assert_eq!(program.statements.len(), 1);
            let ast::Stmt::Let(stmt) = &program.statements[0] else {
                panic!("expected let statement");
            };
            assert_eq!(stmt.name.name, name);
            assert_eq!(stmt.value.to_string(), value);
        }
    }

    #[test]
    fn parse_return() {
        let cases = [("return 5;", "5"), ("return x", "x"), ("return a + b;", "(a + b)")];
        for (src, value) in cases {
            let program = parse_ok(src);
            assert_eq!(program.statements.len(), 1);
            let ast::Stmt::Return(stmt) = &program.statements[0] else {
                panic!("expected return statement");
            };
            assert_eq!(stmt.value.to_string(), value);
        }
    }

    #[test]
    fn parse_literals() {
        let ast::Expr::Ident(ident) = single_expr("foobar;") else {
            panic!("expected identifier");
        };
        assert_eq!(ident.name, "foobar");

        let expr = single_expr("5;");
        assert_eq!(
            expr,
            ast::Expr::Literal(ast::ExprLiteral::Int(ast::LitInt { value: 5 }))
        );

        let expr = single_expr("true");
        assert_eq!(
            expr,
            ast::Expr::Literal(ast::ExprLiteral::Bool(ast::LitBool { value: true }))
        );

        let expr = single_expr("false;");
        assert_eq!(
            expr,
            ast::Expr::Literal(ast::ExprLiteral::Bool(ast::LitBool { value: false }))
        );
    }

    #[test]
    fn parse_prefix_test() {
        let cases = [
            ("!5;", ast::OpPrefix::Not, "5"),
            ("-15;", ast::OpPrefix::Minus, "15"),
            ("!true;", ast::OpPrefix::Not, "true"),
        ];
        for (src, op, operand) in cases {
            let ast::Expr::Prefix(expr) = single_expr(src) else {
                panic!("expected prefix expression");
            };
            assert_eq!(expr.op, op);
            assert_eq!(expr.operand.to_string(), operand);
        }
    }

    #[test]
    fn parse_infix_test() {
        let cases = [
            ("5 + 5;", ast::OpInfix::Add),
            ("5 - 5;", ast::OpInfix::Subtract),
            ("5 * 5;", ast::OpInfix::Multiply),
            ("5 / 5;", ast::OpInfix::Divide),
            ("5 > 5;", ast::OpInfix::Greater),
            ("5 < 5;", ast::OpInfix::Less),
            ("5 == 5;", ast::OpInfix::Equal),
            ("5 != 5;", ast::OpInfix::NotEqual),
        ];
        for (src, op) in cases {
            let ast::Expr::Infix(expr) = single_expr(src) else {
                panic!("expected infix expression");
            };
            assert_eq!(expr.op, op);
            assert_eq!(expr.left.to_string(), "5");
            assert_eq!(expr.right.to_string(), "5");
        }
    }

    #[test]
    fn parse_precedence() {
        let cases = [
            ("-a * b", "((-a) * b)"),
            ("!-a", "(!(-a))"),
            ("a + b + c", "((a + b) + c)"),
            ("a + b - c", "((a + b) - c)"),
            ("a * b * c", "((a * b) * c)"),
            ("a * b / c", "((a * b) / c)"),
            ("a + b / c", "(a + (b / c))"),
            ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
            ("3 + 4; -5 * 5", "(3 + 4);((-5) * 5)"),
            ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
            ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
            (
                "3 + 4 * 5 == 3 * 1 + 4 * 5",
                "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))",
            ),
            ("true", "true"),
            ("3 > 5 == false", "((3 > 5) == false)"),
            ("3 < 5 == true", "((3 < 5) == true)"),
            ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
            ("(5 + 5) * 2", "((5 + 5) * 2)"),
            ("2 / (5 + 5)", "(2 / (5 + 5))"),
            ("-(5 + 5)", "(-(5 + 5))"),
            ("!(true == true)", "(!(true == true))"),
            ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
            (
                "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))",
            ),
            (
                "add(a + b + c * d / f + g)",
                "add((((a + b) + ((c * d) / f)) + g))",
            ),
        ];
        for (src, expected) in cases {
            let program = parse_ok(src);
            assert_eq!(program.to_string(), expected, "{src:?}");
        }
    }

    #[test]
    fn parse_if_test() {
        let ast::Expr::If(expr) = single_expr("if (x < y) { x }") else {
            panic!("expected if expression");
        };
        assert_eq!(expr.condition.to_string(), "(x < y)");
        assert_eq!(expr.consequence.statements.len(), 1);
        assert_eq!(expr.consequence.statements[0].to_string(), "x");
        assert!(expr.alternative.is_none());

        let ast::Expr::If(expr) = single_expr("if (x < y) { x } else { y; z }") else {
            panic!("expected if expression");
        };
        assert_eq!(expr.condition.to_string(), "(x < y)");
        let alternative = expr.alternative.expect("alternative to exist");
        assert_eq!(alternative.statements.len(), 2);
        assert_eq!(alternative.statements[1].to_string(), "z");
    }

    #[test]
    fn parse_function_literal() {
        let ast::Expr::Function(expr) = single_expr("fn(x, y) { x + y; }") else {
            panic!("expected function literal");
        };
        let names = expr
            .parameters
            .iter()
            .map(|param| param.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["x", "y"]);
        assert_eq!(expr.body.statements.len(), 1);
        assert_eq!(expr.body.statements[0].to_string(), "(x + y)");
    }

    #[test]
    fn parse_function_parameters() {
        let cases: [(&str, &[&str]); 3] = [
            ("fn() {};", &[]),
            ("fn(x) {};", &["x"]),
            ("fn(x, y, z) {};", &["x", "y", "z"]),
        ];
        for (src, expected) in cases {
            let ast::Expr::Function(expr) = single_expr(src) else {
                panic!("expected function literal");
            };
            let names = expr
                .parameters
                .iter()
                .map(|param| param.name.as_str())
                .collect::<Vec<_>>();
            assert_eq!(names, expected);
        }
    }

    #[test]
    fn parse_call_test() {
        let ast::Expr::Call(expr) = single_expr("add(1, 2 * 3, 4 + 5);") else {
            panic!("expected call expression");
        };
        assert_eq!(expr.callee.to_string(), "add");
        let args = expr
            .arguments
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        assert_eq!(args, vec!["1", "(2 * 3)", "(4 + 5)"]);

        let ast::Expr::Call(expr) = single_expr("f()") else {
            panic!("expected call expression");
        };
        assert!(expr.arguments.is_empty());

        let ast::Expr::Call(expr) = single_expr("fn(x) { x }(5)") else {
            panic!("expected call expression");
        };
        assert!(matches!(*expr.callee, ast::Expr::Function(_)));
    }

    #[test]
    fn parse_let_errors() {
        let errors = parse_errors("let x 5;");
        assert_eq!(errors[0], "expected next token to be ASSIGN, got INT instead");

        let errors = parse_errors("let = 10;");
        assert_eq!(
            errors[0],
            "expected next token to be IDENT, got ASSIGN instead"
        );

        let errors = parse_errors("let 838383;");
        assert_eq!(errors[0], "expected next token to be IDENT, got INT instead");
    }

    #[test]
    fn parse_no_prefix_rule() {
        let errors = parse_errors("+ 5");
        assert_eq!(errors, vec!["no prefix parse function for PLUS found"]);

        let errors = parse_errors("1 + ;");
        assert_eq!(errors, vec!["no prefix parse function for SEMICOLON found"]);

        let errors = parse_errors("@");
        assert_eq!(errors, vec!["no prefix parse function for ILLEGAL found"]);
    }

    #[test]
    fn parse_group_errors() {
        let errors = parse_errors("(1 + 2");
        assert_eq!(errors, vec!["expected next token to be RPAREN, got EOF instead"]);

        let errors = parse_errors("add(1, 2");
        assert_eq!(errors, vec!["expected next token to be RPAREN, got EOF instead"]);
    }

    #[test]
    fn parse_if_errors() {
        let errors = parse_errors("if x { 1 }");
        assert_eq!(
            errors[0],
            "expected next token to be LPAREN, got IDENT instead"
        );

        let errors = parse_errors("if (x) 1");
        assert_eq!(
            errors[0],
            "expected next token to be LBRACE, got INT instead"
        );
    }

    #[test]
    fn parse_function_errors() {
        let errors = parse_errors("fn(1) { 1 }");
        assert_eq!(
            errors[0],
            "expected next token to be IDENT, got INT instead"
        );

        let errors = parse_errors("fn(x y) { x }");
        assert_eq!(
            errors[0],
            "expected next token to be RPAREN, got IDENT instead"
        );
    }

    #[test]
    fn parse_integer_overflow() {
        let errors = parse_errors("99999999999999999999");
        assert_eq!(errors, vec!["could not parse 99999999999999999999 as integer"]);
    }

    #[test]
    fn parse_continues_after_error() {
        let mut parser = Parser::new(lex::Lexer::new("let x 5; let y = 2; y"));
        let program = parser.parse_program();
        assert_eq!(parser.diagnostics().len(), 1);
        assert!(
            program
                .statements
                .iter()
                .any(|stmt| stmt.to_string() == "let y = 2;")
        );
    }

    #[test]
    fn parse_unclosed_block_ends_at_eof() {
        let ast::Expr::Function(expr) = single_expr("fn(x) { x") else {
            panic!("expected function literal");
        };
        assert_eq!(expr.body.statements.len(), 1);
    }

    #[test]
    fn parse_fn_result() {
        assert!(parse("let x = 1; x").is_ok());
        let errors = parse("let x 1").expect_err("input should be invalid");
        assert!(matches!(
            errors[0],
            error::Kind::UnexpectedToken {
                expected: Kind::Equal,
                found: Kind::Int
            }
        ));
    }

    #[test]
    fn render_round_trip() {
        let sources = [
            "let x = 5; let y = x * (2 + 3); y",
            "a; -b",
            "if (x < y) { x } else { y }",
            "if (x) { 1 }; if (f(x)) { 2 } else { }",
            "let add = fn(x, y) { x + y; }; add(1, 2);",
            "let newAdder = fn(x) { fn(y) { x + y } }; let addTwo = newAdder(2); addTwo(3);",
            "let fact = fn(n) { if (n == 0) { return 1; } return n * fact(n - 1); }; fact(5);",
            "fn() { }(); !!true; -(-5)",
            "f(g)(h, 1)",
        ];
        for src in sources {
            let program = parse_ok(src);
            let rendered = program.to_string();
            let reparsed = parse_ok(&rendered);
            assert_eq!(reparsed, program, "{src:?} rendered as {rendered:?}");
            assert_eq!(reparsed.to_string(), rendered);
        }
    }
}
