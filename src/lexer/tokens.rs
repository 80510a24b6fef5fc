use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

/// Display name for category codes outside the enumeration.
pub const UNKNOWN_KIND: &str = "<unknown>";

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("fn", TokenKind::Fn);
        map.insert("or", TokenKind::Or);
        map.insert("and", TokenKind::And);
        map.insert("for", TokenKind::For);
        map.insert("if", TokenKind::If);
        map.insert("var", TokenKind::Var);
        map.insert("return", TokenKind::Return);
        map.insert("int", TokenKind::Int);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("bool", TokenKind::Bool);
        map
    };

    static ref DISPLAY_NAMES: HashMap<TokenKind, &'static str> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::BadSyntax, "bad syntax");

        map.insert(TokenKind::OpenParen, "(");
        map.insert(TokenKind::CloseParen, ")");
        map.insert(TokenKind::OpenCurly, "{");
        map.insert(TokenKind::CloseCurly, "}");
        map.insert(TokenKind::Comma, ",");
        map.insert(TokenKind::Dot, ".");
        map.insert(TokenKind::Plus, "+");
        map.insert(TokenKind::Dash, "-");
        map.insert(TokenKind::Slash, "/");
        map.insert(TokenKind::Star, "*");
        map.insert(TokenKind::Assignment, "=");
        map.insert(TokenKind::Semicolon, ";");

        map.insert(TokenKind::Bool, "<bool>");
        map.insert(TokenKind::Float, "<float>");
        map.insert(TokenKind::String, "<string>");
        map.insert(TokenKind::Integer, "<integer>");
        map.insert(TokenKind::Identifier, "<identifier>");

        map.insert(TokenKind::Fn, "fn");
        map.insert(TokenKind::Or, "or");
        map.insert(TokenKind::And, "and");
        map.insert(TokenKind::For, "for");
        map.insert(TokenKind::If, "if");
        map.insert(TokenKind::Var, "var");
        map.insert(TokenKind::Return, "return");
        map.insert(TokenKind::Int, "int");
        map.insert(TokenKind::True, "true");
        map.insert(TokenKind::False, "false");

        map.insert(TokenKind::EOF, "end of file");
        map
    };
}

/// Looks up an identifier-shaped literal in the reserved word table.
///
/// Returns `(TokenKind::Identifier, false)` when the spelling is not reserved.
pub fn lookup_keyword(literal: &str) -> (TokenKind, bool) {
    match RESERVED_LOOKUP.get(literal) {
        Some(kind) => (*kind, true),
        None => (TokenKind::Identifier, false),
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(u8)]
pub enum TokenKind {
    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    Comma,
    Dot,
    Plus,
    Dash,
    Slash,
    Star,
    Assignment, // =
    Semicolon,

    // Literals
    Bool,
    True,
    False,
    Float,
    String,
    Integer,
    Identifier,

    // Reserved
    Fn,
    Or,
    And,
    For,
    If,
    Var,
    Return,
    Int,

    EOF,

    BadSyntax,
}

impl TokenKind {
    /// Every category, in declaration order. `TokenKind::ALL[k as usize] == k`.
    pub const ALL: [TokenKind; 29] = [
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::OpenCurly,
        TokenKind::CloseCurly,
        TokenKind::Comma,
        TokenKind::Dot,
        TokenKind::Plus,
        TokenKind::Dash,
        TokenKind::Slash,
        TokenKind::Star,
        TokenKind::Assignment,
        TokenKind::Semicolon,
        TokenKind::Bool,
        TokenKind::True,
        TokenKind::False,
        TokenKind::Float,
        TokenKind::String,
        TokenKind::Integer,
        TokenKind::Identifier,
        TokenKind::Fn,
        TokenKind::Or,
        TokenKind::And,
        TokenKind::For,
        TokenKind::If,
        TokenKind::Var,
        TokenKind::Return,
        TokenKind::Int,
        TokenKind::EOF,
        TokenKind::BadSyntax,
    ];

    pub fn as_str(&self) -> &'static str {
        DISPLAY_NAMES.get(self).copied().unwrap_or(UNKNOWN_KIND)
    }

    /// Renders a raw category code, falling back to [`UNKNOWN_KIND`].
    pub fn name_of(code: u8) -> &'static str {
        TokenKind::try_from(code)
            .map(|kind| kind.as_str())
            .unwrap_or(UNKNOWN_KIND)
    }

    pub fn is_eof(&self) -> bool {
        *self == TokenKind::EOF
    }

    pub fn is_invalid(&self) -> bool {
        *self == TokenKind::BadSyntax
    }

    pub fn is(&self, other: TokenKind) -> bool {
        *self == other
    }
}

impl TryFrom<u8> for TokenKind {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        TokenKind::ALL.get(code as usize).copied().ok_or(code)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Token {
    pub fn new(kind: TokenKind) -> Self {
        Token {
            kind,
            value: String::new(),
        }
    }

    pub fn with_value(kind: TokenKind, value: impl Into<String>) -> Self {
        Token {
            kind,
            value: value.into(),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind, self.value)
    }
}
