use std::fmt::Display;

use thiserror::Error;

/// A lexical error tied to the 1-based source line it was discovered on.
///
/// Every scan error is recoverable: the scanner reports it through a
/// [`DiagnosticSink`] and keeps going, so a scan always runs to completion.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanError {
    internal_error: ScanErrorKind,
    line: usize,
}

impl ScanError {
    pub fn new(error_kind: ScanErrorKind, line: usize) -> Self {
        ScanError {
            internal_error: error_kind,
            line,
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn kind(&self) -> &ScanErrorKind {
        &self.internal_error
    }

    pub fn name(&self) -> &str {
        match &self.internal_error {
            ScanErrorKind::UnterminatedString => "UnterminatedString",
            ScanErrorKind::UnterminatedChar => "UnterminatedChar",
            ScanErrorKind::CharLiteralTooLong => "CharLiteralTooLong",
            ScanErrorKind::UnexpectedCharacter { .. } => "UnexpectedCharacter",
        }
    }
}

impl Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line {}: {}", self.line, self.internal_error)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScanErrorKind {
    #[error("Unterminated string literal")]
    UnterminatedString,
    #[error("Unterminated character literal")]
    UnterminatedChar,
    #[error("Too many characters in character literal")]
    CharLiteralTooLong,
    #[error("Unexpected character '{character}'")]
    UnexpectedCharacter { character: char },
}

/// Where the scanner sends its errors. Reports arrive in the order the
/// errors are discovered in the source.
pub trait DiagnosticSink {
    fn report(&mut self, error: ScanError);
}

/// Accumulates every reported error, for callers that need to inspect or
/// count diagnostics after the scan.
#[derive(Debug, Default)]
pub struct CollectSink {
    errors: Vec<ScanError>,
}

impl CollectSink {
    pub fn new() -> Self {
        CollectSink { errors: vec![] }
    }

    pub fn errors(&self) -> &[ScanError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ScanError> {
        self.errors
    }
}

impl DiagnosticSink for CollectSink {
    fn report(&mut self, error: ScanError) {
        self.errors.push(error);
    }
}

/// Prints each error as it is reported and keeps a count for the caller.
#[derive(Debug, Default)]
pub struct ConsoleSink {
    reported: usize,
}

impl ConsoleSink {
    pub fn new() -> Self {
        ConsoleSink { reported: 0 }
    }

    pub fn reported(&self) -> usize {
        self.reported
    }
}

impl DiagnosticSink for ConsoleSink {
    fn report(&mut self, error: ScanError) {
        println!("Error: {}", error);
        self.reported += 1;
    }
}
