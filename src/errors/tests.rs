//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::lexer::tokenize;
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::InvalidCharacter {
            token: "bad syntax unknown @".to_string(),
        },
        Position(10, Rc::new("test.cv".to_string())),
    );

    assert_eq!(error.get_error_name(), "InvalidCharacter");
    assert_eq!(error.get_token(), "bad syntax unknown @");
    assert_eq!(error.get_position().0, 10);
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::InvalidCharacter {
            token: "bad syntax unknown $".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.to_string(), "invalid character: bad syntax unknown $");
}

#[test]
fn test_error_tip_none() {
    let error = tokenize("a ? b".to_string(), None).unwrap_err();

    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(error.get_position().0, 2);
}

#[test]
fn test_error_tip_unterminated_string() {
    let error = tokenize("x = \"never closed".to_string(), Some("test.cv".to_string())).unwrap_err();

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
    assert_eq!(error.get_position().0, 4);
    assert_eq!(*error.get_position().1, "test.cv");
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
