//! Error types for tokenization.
//!
//! A malformed token aborts a bulk drain with an `InvalidCharacter` error
//! carrying the offending token's text and the byte offset it started at.

pub mod errors;

#[cfg(test)]
mod tests;
