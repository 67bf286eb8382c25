use crate::{
    diagnostics::diagnostics::{DiagnosticSink, ScanError, ScanErrorKind},
    MK_TOKEN,
};

use super::tokens::{Literal, Token, TokenKind, RESERVED_LOOKUP};

/// Whether the scanner is classifying tokens or swallowing a `#> ... |`
/// comment block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    Normal,
    BlockComment,
}

pub struct Scanner {
    source: Vec<char>,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
    mode: ScanMode,
}

impl Scanner {
    pub fn new(source: String) -> Scanner {
        Scanner {
            source: source.chars().collect(),
            tokens: vec![],
            start: 0,
            current: 0,
            line: 1,
            mode: ScanMode::Normal,
        }
    }

    pub fn at_eof(&self) -> bool {
        self.current >= self.source.len()
    }

    pub fn peek(&self) -> char {
        if self.at_eof() {
            return '\0';
        }
        self.source[self.current]
    }

    pub fn peek_ahead(&self, ahead: usize) -> char {
        if self.current + ahead >= self.source.len() {
            return '\0';
        }
        self.source[self.current + ahead]
    }

    pub fn peek_behind(&self, behind: usize) -> char {
        if behind > self.current || self.current - behind >= self.source.len() {
            return '\0';
        }
        self.source[self.current - behind]
    }

    pub fn advance(&mut self) -> char {
        if self.at_eof() {
            return '\0';
        }

        let c = self.source[self.current];
        self.current += 1;
        c
    }

    pub fn match_char(&mut self, expected: char) -> bool {
        if self.at_eof() {
            return false;
        }

        if self.source[self.current] != expected {
            return false;
        }

        self.current += 1;
        true
    }

    pub fn current_lexeme(&self) -> String {
        self.source[self.start..self.current].iter().collect()
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn scan(mut self, sink: &mut dyn DiagnosticSink) -> Vec<Token> {
        while !self.at_eof() {
            // We are at the beginning of the next lexeme
            self.start = self.current;
            self.scan_token(sink);
        }

        let line = self.line;
        self.push(MK_TOKEN!(TokenKind::EOF, String::new(), line, Literal::None));

        // A source that begins with a blank line would otherwise start the
        // stream with an EOL token.
        if self.tokens.first().map(|token| token.kind) == Some(TokenKind::EOL) {
            self.tokens.remove(0);
        }

        self.tokens
    }

    fn add_token(&mut self, kind: TokenKind, literal: Literal) {
        let lexeme = self.current_lexeme();
        let line = self.line;
        self.push(MK_TOKEN!(kind, lexeme, line, literal));
    }

    fn scan_token(&mut self, sink: &mut dyn DiagnosticSink) {
        let c = self.advance();

        if self.mode == ScanMode::BlockComment {
            match c {
                '|' => self.mode = ScanMode::Normal,
                '\n' => self.line += 1,
                _ => {}
            }
            return;
        }

        match c {
            '[' => self.add_token(TokenKind::LeftBracket, Literal::None),
            ']' => self.add_token(TokenKind::RightBracket, Literal::None),
            ',' => self.add_token(TokenKind::Comma, Literal::None),
            '.' => self.add_token(TokenKind::Dot, Literal::None),
            '+' => self.add_token(TokenKind::Plus, Literal::None),
            '*' => self.add_token(TokenKind::Star, Literal::None),
            '=' => self.add_token(TokenKind::Equals, Literal::None),
            '"' => self.scan_string(sink),
            '\'' => self.scan_char(sink),
            '\\' => {
                // Line continuation: swallow the newline so the next
                // physical line extends the current logical line.
                if self.match_char('\n') {
                    self.line += 1;
                }
            }
            ' ' | '\r' | '\t' => {
                // Ignore whitespace
            }
            '\n' => {
                // Consecutive blank lines collapse into a single EOL.
                if self.tokens.last().map(|token| token.kind) != Some(TokenKind::EOL) {
                    self.add_token(TokenKind::EOL, Literal::None);
                }
                self.line += 1;
            }
            '|' => {
                // Stray block-comment terminator, nothing to close
            }
            '#' => {
                if self.match_char('>') {
                    self.mode = ScanMode::BlockComment;
                } else {
                    // Line comment, swallowed through its newline
                    while self.peek() != '\n' && !self.at_eof() {
                        self.advance();
                    }
                    if self.match_char('\n') {
                        self.line += 1;
                    }
                }
            }
            _ => {
                if c.is_ascii_digit() {
                    self.scan_number();
                } else if c.is_alphabetic() || c == '_' {
                    self.scan_identifier();
                } else {
                    sink.report(ScanError::new(
                        ScanErrorKind::UnexpectedCharacter { character: c },
                        self.line,
                    ));
                }
            }
        }
    }

    fn scan_number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        // A dot with no digit behind it is left alone for Dot
        if self.peek() == '.' && self.peek_ahead(1).is_ascii_digit() {
            self.advance();

            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let value: f64 = self.current_lexeme().parse().unwrap();
        self.add_token(TokenKind::NumberLit, Literal::Number(value));
    }

    fn scan_string(&mut self, sink: &mut dyn DiagnosticSink) {
        while self.peek() != '"' && !self.at_eof() {
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.at_eof() {
            sink.report(ScanError::new(ScanErrorKind::UnterminatedString, self.line));
            return;
        }

        // Closing quote
        self.advance();

        // Remove the surrounding quotes
        let value: String = self.source[self.start + 1..self.current - 1].iter().collect();
        self.add_token(TokenKind::StringLit, Literal::String(value));
    }

    fn scan_char(&mut self, sink: &mut dyn DiagnosticSink) {
        while self.peek() != '\'' && !self.at_eof() {
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.at_eof() {
            sink.report(ScanError::new(ScanErrorKind::UnterminatedChar, self.line));
            return;
        }

        // Closing quote
        self.advance();

        let inner = &self.source[self.start + 1..self.current - 1];
        if inner.len() != 1 {
            sink.report(ScanError::new(ScanErrorKind::CharLiteralTooLong, self.line));
            return;
        }

        let value = inner[0];
        self.add_token(TokenKind::CharLit, Literal::Char(value));
    }

    fn scan_identifier(&mut self) {
        while self.peek().is_alphanumeric() || self.peek() == '_' {
            self.advance();
        }

        let lexeme = self.current_lexeme();
        if let Some(kind) = RESERVED_LOOKUP.get(lexeme.as_str()) {
            self.add_token(*kind, Literal::None);
        } else {
            self.add_token(TokenKind::Identifier, Literal::None);
        }
    }
}

pub fn tokenize(source: String, sink: &mut dyn DiagnosticSink) -> Vec<Token> {
    Scanner::new(source).scan(sink)
}
