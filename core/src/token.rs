#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Keyword {
    #[display("FUNCTION")]
    Fn,
    #[display("LET")]
    Let,
    #[display("TRUE")]
    True,
    #[display("FALSE")]
    False,
    #[display("IF")]
    If,
    #[display("ELSE")]
    Else,
    #[display("RETURN")]
    Return,
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Fn => "fn",
            Keyword::Let => "let",
            Keyword::True => "true",
            Keyword::False => "false",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::Return => "return",
        }
    }

    /// Look up a reserved word.
    /// Keywords are case sensitive.
    pub fn from_str(value: impl AsRef<str>) -> Option<Self> {
        match value.as_ref() {
            "fn" => Some(Self::Fn),
            "let" => Some(Self::Let),
            "true" => Some(Self::True),
            "false" => Some(Self::False),
            "if" => Some(Self::If),
            "else" => Some(Self::Else),
            "return" => Some(Self::Return),
            _ => None,
        }
    }
}

/// Kind of token.
///
/// Displays as the name used in parser diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    #[display("ILLEGAL")]
    Illegal,
    #[display("EOF")]
    Eof,
    #[display("IDENT")]
    Identifier,
    #[display("INT")]
    Int,
    /// `=`
    #[display("ASSIGN")]
    Equal,
    /// `+`
    #[display("PLUS")]
    Plus,
    /// `-`
    #[display("MINUS")]
    Minus,
    /// `!`
    #[display("BANG")]
    Bang,
    /// `*`
    #[display("ASTERISK")]
    Star,
    /// `/`
    #[display("SLASH")]
    SlashForward,
    /// `<`
    #[display("LT")]
    Less,
    /// `>`
    #[display("GT")]
    Greater,
    /// `==`
    #[display("EQ")]
    EqualEqual,
    /// `!=`
    #[display("NOT_EQ")]
    BangEqual,
    #[display("COMMA")]
    Comma,
    #[display("SEMICOLON")]
    Semicolon,
    #[display("LPAREN")]
    ParenLeft,
    #[display("RPAREN")]
    ParenRight,
    #[display("LBRACE")]
    BraceLeft,
    #[display("RBRACE")]
    BraceRight,
    #[display("{_0}")]
    Keyword(Keyword),
}

impl Kind {
    /// Kind of a word.
    /// Reserved words map to their keyword, everything else is an identifier.
    pub fn lookup_ident(ident: impl AsRef<str>) -> Self {
        match Keyword::from_str(ident) {
            Some(word) => Self::Keyword(word),
            None => Self::Identifier,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: Kind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: Kind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    pub fn eof() -> Self {
        Self::new(Kind::Eof, "")
    }

    pub fn is(&self, kind: Kind) -> bool {
        self.kind == kind
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?}", self.kind, self.literal)
    }
}
