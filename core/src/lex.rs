use super::token::{Kind, Token};
use std::iter;

/// Tokenize the entire source.
///
/// # Returns
/// Every token in the source, terminated by a single `Eof` token.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(src), fields(src = %src.as_ref())))]
pub fn tokenize(src: impl AsRef<str>) -> Vec<Token> {
    let mut lexer = Lexer::new(src.as_ref());
    let mut tokens = vec![];
    loop {
        let token = lexer.next_token();
        let eof = token.is(Kind::Eof);
        tokens.push(token);
        if eof {
            break;
        }
    }
    tokens
}

struct Scanner<'a> {
    /// Iterator over src characters.
    iter: iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            iter: src.chars().peekable(),
        }
    }

    /// Peek at the next character without consuming it.
    pub fn peek(&mut self) -> Option<&char> {
        self.iter.peek()
    }

    /// Consume the next character if it is equal to the expected one.
    pub fn next_if_eq(&mut self, expected: char) -> Option<char> {
        self.iter.next_if_eq(&expected)
    }
}

impl<'a> iter::Iterator for Scanner<'a> {
    type Item = char;
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }
}

/// Cursor over source text producing one token at a time.
pub struct Lexer<'a> {
    it: Scanner<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            it: Scanner::new(src),
        }
    }

    /// Produce the next token and advance the cursor.
    /// Once the input is exhausted, `Eof` is returned on every call.
    pub fn next_token(&mut self) -> Token {
        self.next_while(Self::is_whitespace);
        let Some(char) = self.it.next() else {
            return Token::eof();
        };

        let token = match char {
            '+' => Token::new(Kind::Plus, "+"),
            '-' => Token::new(Kind::Minus, "-"),
            '*' => Token::new(Kind::Star, "*"),
            '/' => Token::new(Kind::SlashForward, "/"),
            '<' => Token::new(Kind::Less, "<"),
            '>' => Token::new(Kind::Greater, ">"),
            ',' => Token::new(Kind::Comma, ","),
            ';' => Token::new(Kind::Semicolon, ";"),
            '(' => Token::new(Kind::ParenLeft, "("),
            ')' => Token::new(Kind::ParenRight, ")"),
            '{' => Token::new(Kind::BraceLeft, "{"),
            '}' => Token::new(Kind::BraceRight, "}"),

            '=' => self.next_if_else(
                '=',
                Token::new(Kind::EqualEqual, "=="),
                Token::new(Kind::Equal, "="),
            ),

            '!' => self.next_if_else(
                '=',
                Token::new(Kind::BangEqual, "!="),
                Token::new(Kind::Bang, "!"),
            ),

            char if Self::is_valid_ident_char(&char) => {
                let rest = self.next_while(|ch| Self::is_valid_ident_char(&ch));
                let value = iter::once(char).chain(rest).collect::<String>();
                Token::new(Kind::lookup_ident(&value), value)
            }

            char if char.is_ascii_digit() => {
                let rest = self.next_while(|ch| ch.is_ascii_digit());
                let value = iter::once(char).chain(rest).collect::<String>();
                Token::new(Kind::Int, value)
            }

            char => Token::new(Kind::Illegal, char),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(?token);

        token
    }

    fn is_whitespace(ch: char) -> bool {
        ch == ' ' || ch == '\t' || ch == '\r' || ch == '\n'
    }

    /// Validates if the character is valid within an identifier.
    /// Valid characters are letters and underscore (`_`).
    fn is_valid_ident_char(ch: &char) -> bool {
        ch.is_alphabetic() || *ch == '_'
    }

    fn next_if_else(&mut self, to_match: char, matched: Token, unmatched: Token) -> Token {
        if self.it.next_if_eq(to_match).is_some() {
            matched
        } else {
            unmatched
        }
    }

    fn next_while<F>(&mut self, predicate: F) -> Vec<char>
    where
        F: Fn(char) -> bool,
    {
        let mut chars = vec![];
        while let Some(&ch) = self.it.peek() {
            if !predicate(ch) {
                break;
            }
            self.it.next();
            chars.push(ch);
        }
        chars
    }
}

/// Yields tokens up to, but not including, `Eof`.
impl<'a> Iterator for Lexer<'a> {
    type Item = Token;
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is(Kind::Eof) { None } else { Some(token) }
    }
}
