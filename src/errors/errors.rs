use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::lexer::UNTERMINATED_STRING, Position};

#[derive(Error, Debug, Clone)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    /// Display text of the token that caused the error.
    pub fn get_token(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { token } => token,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { .. } => "InvalidCharacter",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { token } if token.ends_with(UNTERMINATED_STRING) => {
                ErrorTip::Suggestion(String::from("Close the string literal with `\"`"))
            }
            ErrorImpl::InvalidCharacter { .. } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("invalid character: {token}")]
    InvalidCharacter { token: String },
}
