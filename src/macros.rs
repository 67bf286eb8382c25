//! Utility macros for the scanner.
//!
//! This module defines helper macros used throughout the crate:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! These macros reduce boilerplate in the scanner implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The token's source text
/// * `$line` - The 1-based line the token ends on
/// * `$literal` - The token's literal value
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::NumberLit, "42".to_string(), 1, Literal::Number(42.0));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $line:expr, $literal:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            line: $line,
            literal: $literal,
        }
    };
}
