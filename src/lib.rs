#![allow(clippy::module_inception)]

//! Lexical scanner for the Qbe language, a small address/pointer-oriented
//! language. The scanner turns raw source text into an ordered token stream
//! for a downstream parser, reporting recoverable lexical errors through a
//! [`diagnostics::diagnostics::DiagnosticSink`] instead of aborting.

use crate::diagnostics::diagnostics::{CollectSink, ScanError};
use crate::scanner::scanner::tokenize;
use crate::scanner::tokens::Token;

pub mod diagnostics;
pub mod macros;
pub mod scanner;

/// Scans `source` to completion, collecting every diagnostic.
///
/// The token stream is always terminated by exactly one EOF token; the
/// error list is empty when the source was lexically clean.
pub fn scan(source: String) -> (Vec<Token>, Vec<ScanError>) {
    let mut sink = CollectSink::new();
    let tokens = tokenize(source, &mut sink);
    (tokens, sink.into_errors())
}
