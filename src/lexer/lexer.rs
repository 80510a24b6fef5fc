use std::rc::Rc;

use tracing::{debug, trace};
use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

use crate::{errors::errors::{Error, ErrorImpl}, Position, MK_TOKEN};

use super::tokens::{lookup_keyword, Token, TokenKind};

/// Identifier start character treated the same as a letter.
pub const BLANK_IDENTIFIER: char = '_';

/// Literal of the malformed token produced for a string missing its closing quote.
pub const UNTERMINATED_STRING: &str = "string literal must be closed";

#[derive(Clone, Debug)]
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            file: file_name,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Byte offset of the cursor into the source.
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn at(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Scans the next token. Never fails: malformed input yields a
    /// `BadSyntax` token and the cursor still moves past it.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(ch) = self.at() else {
            return Token::new(TokenKind::EOF);
        };

        let token = if is_letter(ch) || ch == BLANK_IDENTIFIER {
            self.read_identifier()
        } else if is_digit(ch) {
            self.read_number()
        } else if ch == '"' {
            self.read_string()
        } else {
            self.advance_n(ch.len_utf8());
            match punctuation(ch) {
                Some(kind) => MK_TOKEN!(kind, ch),
                None => MK_TOKEN!(TokenKind::BadSyntax, format!("unknown {}", ch)),
            }
        };

        trace!(kind = ?token.kind, value = %token.value, pos = self.pos, "token");
        token
    }

    /// Drains the source into a token list ending with `EOF`, failing on the
    /// first malformed token.
    pub fn process(&mut self) -> Result<Vec<Token>, Error> {
        let mut tokens = vec![];

        loop {
            self.skip_whitespace();
            let start = self.pos;
            let token = self.next_token();

            if token.kind.is_invalid() {
                debug!(file = %self.file, pos = start, token = %token, "malformed token");
                return Err(Error::new(
                    ErrorImpl::InvalidCharacter { token: token.to_string() },
                    Position::at(start, Rc::clone(&self.file)),
                ));
            }

            let done = token.kind.is_eof();
            tokens.push(token);

            if done {
                break;
            }
        }

        debug!(file = %self.file, count = tokens.len(), "tokenized");
        Ok(tokens)
    }

    fn skip_whitespace(&mut self) {
        let skipped: usize = self.source[self.pos..]
            .chars()
            .take_while(|c| c.is_whitespace())
            .map(char::len_utf8)
            .sum();
        self.advance_n(skipped);
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &str {
        let start = self.pos;
        let len: usize = self.source[start..]
            .chars()
            .take_while(|c| pred(*c))
            .map(char::len_utf8)
            .sum();
        self.advance_n(len);
        &self.source[start..self.pos]
    }

    fn read_identifier(&mut self) -> Token {
        let literal = self.take_while(|c| is_letter(c) || is_digit(c) || c == BLANK_IDENTIFIER);
        let (kind, _) = lookup_keyword(literal);
        MK_TOKEN!(kind, literal)
    }

    fn read_number(&mut self) -> Token {
        let literal = self.take_while(is_digit);
        MK_TOKEN!(TokenKind::Integer, literal)
    }

    fn read_string(&mut self) -> Token {
        // opening quote
        self.advance_n(1);

        match self.source[self.pos..].find('"') {
            Some(len) => {
                let token = MK_TOKEN!(TokenKind::String, &self.source[self.pos..self.pos + len]);
                self.advance_n(len + 1);
                token
            }
            None => {
                self.pos = self.source.len();
                MK_TOKEN!(TokenKind::BadSyntax, UNTERMINATED_STRING)
            }
        }
    }
}

/// Any code point in a letter category (`L*`).
fn is_letter(ch: char) -> bool {
    matches!(ch.general_category_group(), GeneralCategoryGroup::Letter)
}

/// Decimal digits from any script (`Nd`).
fn is_digit(ch: char) -> bool {
    matches!(ch.general_category(), GeneralCategory::DecimalNumber)
}

fn punctuation(ch: char) -> Option<TokenKind> {
    let kind = match ch {
        '(' => TokenKind::OpenParen,
        ')' => TokenKind::CloseParen,
        '{' => TokenKind::OpenCurly,
        '}' => TokenKind::CloseCurly,
        ',' => TokenKind::Comma,
        '.' => TokenKind::Dot,
        '+' => TokenKind::Plus,
        '-' => TokenKind::Dash,
        '/' => TokenKind::Slash,
        '*' => TokenKind::Star,
        '=' => TokenKind::Assignment,
        ';' => TokenKind::Semicolon,
        _ => return None,
    };

    Some(kind)
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    Lexer::new(source, file).process()
}
