//! Integration tests for end-to-end scanning.
//!
//! These tests verify that whole Qbe programs scan correctly: keywords,
//! literals, comments, logical-line handling, and recovery from lexical
//! errors, always finishing with a single EOF token.

use qbe_lang::diagnostics::diagnostics::{CollectSink, ScanErrorKind};
use qbe_lang::scan;
use qbe_lang::scanner::scanner::tokenize;
use qbe_lang::scanner::tokens::{Literal, TokenKind};

#[test]
fn test_scan_full_program() {
    let source = "\
#> pointer warmup
moves the address pointer |
func main [
up
incr 2, incr 'a'
out \"value = \", getaddrval
]
";
    let (tokens, errors) = scan(source.to_string());

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Function,
            TokenKind::Identifier,
            TokenKind::LeftBracket,
            TokenKind::EOL,
            TokenKind::PointerUp,
            TokenKind::EOL,
            TokenKind::IncrAddr,
            TokenKind::NumberLit,
            TokenKind::Comma,
            TokenKind::IncrAddr,
            TokenKind::CharLit,
            TokenKind::EOL,
            TokenKind::Output,
            TokenKind::StringLit,
            TokenKind::Comma,
            TokenKind::GetAddrValue,
            TokenKind::EOL,
            TokenKind::RightBracket,
            TokenKind::EOL,
            TokenKind::EOF,
        ]
    );

    assert_eq!(tokens[1].lexeme, "main");
    assert_eq!(tokens[7].literal, Literal::Number(2.0));
    assert_eq!(tokens[10].literal, Literal::Char('a'));
    assert_eq!(tokens[13].literal, Literal::String(String::from("value = ")));
    assert!(errors.is_empty());
}

#[test]
fn test_scan_program_with_continuation() {
    let source = "jmp 4. \\\nup down\n";
    let (tokens, errors) = scan(source.to_string());

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::JumpToAddr,
            TokenKind::NumberLit,
            TokenKind::Dot,
            TokenKind::PointerUp,
            TokenKind::PointerDown,
            TokenKind::EOL,
            TokenKind::EOF,
        ]
    );

    // The continued line still advances the physical line counter
    assert_eq!(tokens[3].line, 2);
    assert!(errors.is_empty());
}

#[test]
fn test_scan_recovers_from_every_error() {
    let source = "incr ;\n'' \"oops";
    let mut sink = CollectSink::new();
    let tokens = tokenize(source.to_string(), &mut sink);

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(kinds, vec![TokenKind::IncrAddr, TokenKind::EOL, TokenKind::EOF]);

    let errors = sink.errors();
    assert_eq!(errors.len(), 3);
    assert_eq!(
        *errors[0].kind(),
        ScanErrorKind::UnexpectedCharacter { character: ';' }
    );
    assert_eq!(errors[0].line(), 1);
    assert_eq!(*errors[1].kind(), ScanErrorKind::CharLiteralTooLong);
    assert_eq!(errors[1].line(), 2);
    assert_eq!(*errors[2].kind(), ScanErrorKind::UnterminatedString);
    assert_eq!(errors[2].line(), 2);
}

#[test]
fn test_scan_never_starts_with_eol() {
    let source = "\n\n# header comment\nup\n";
    let (tokens, errors) = scan(source.to_string());

    assert_ne!(tokens[0].kind, TokenKind::EOL);
    assert_eq!(tokens[0].kind, TokenKind::PointerUp);
    assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::EOF));
    assert!(errors.is_empty());
}
