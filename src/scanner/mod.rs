//! Lexical analysis module for the Qbe language.
//!
//! This module contains the scanner that converts source text into a
//! stream of tokens for parsing. It handles:
//!
//! - Single-pass character classification with bounded lookahead
//! - Recognition of keywords, identifiers, literals, and punctuation
//! - Line comments (`#`) and block comments (`#> ... |`)
//! - Logical-line tracking (EOL tokens, backslash continuations)
//! - Token line numbering for error reporting

pub mod scanner;
pub mod tokens;
