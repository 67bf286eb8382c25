//! Error types and reporting for the scanner.
//!
//! This module defines the lexical error taxonomy and the sink the
//! scanner reports through. It includes:
//!
//! - Error structures carrying the source line they occurred on
//! - Specific error variants for each recoverable lexical error
//! - `Line {line}: {message}` formatting
//! - Collecting and printing sink implementations

pub mod diagnostics;
