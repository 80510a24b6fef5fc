//! Lexical analysis.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Recognition of keywords, identifiers, integer and string literals
//! - Single-character operators and punctuation
//! - Malformed input, reported as `BadSyntax` tokens

pub mod lexer;
pub mod tokens;
