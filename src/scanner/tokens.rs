use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("up", TokenKind::PointerUp);
        map.insert("down", TokenKind::PointerDown);
        map.insert("incr", TokenKind::IncrAddr);
        map.insert("decr", TokenKind::DecrAddr);
        map.insert("getaddrval", TokenKind::GetAddrValue);
        map.insert("getaddrpos", TokenKind::GetAddrPos);
        map.insert("getptrpos", TokenKind::GetPtrPosition);
        map.insert("jmp", TokenKind::JumpToAddr);
        map.insert("out", TokenKind::Output);
        map.insert("in", TokenKind::Input);
        map.insert("func", TokenKind::Function);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    StringLit,
    NumberLit,
    Identifier,
    CharLit,

    // Pointer
    PointerUp,
    PointerDown,
    GetPtrPosition,
    JumpToAddr,

    // Address
    IncrAddr,
    DecrAddr,
    GetAddrValue,
    GetAddrPos,

    Output,
    Input,
    Function,

    LeftBracket,
    RightBracket,
    Comma,
    Dot,
    Plus,
    Star,
    Equals,

    EOL,
    EOF,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The value a literal-carrying token holds. Everything else is `None`,
/// so consumers match exhaustively instead of downcasting.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    None,
    Number(f64),
    Char(char),
    String(String),
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::None => write!(f, ""),
            Literal::Number(value) => write!(f, "{}", value),
            Literal::Char(value) => write!(f, "{}", value),
            Literal::String(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
    pub literal: Literal,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token {{\nkind: {},\nlexeme: {},\nline: {}}}",
            self.kind, self.lexeme, self.line
        )
    }
}

impl Token {
    fn is_one_of_many(&self, kinds: Vec<TokenKind>) -> bool {
        for kind in kinds {
            if kind == self.kind {
                return true;
            }
        }

        false
    }

    pub fn debug(&self) {
        if self.is_one_of_many(vec![
            TokenKind::StringLit,
            TokenKind::NumberLit,
            TokenKind::CharLit,
        ]) {
            println!("{} ({})", self.kind, self.literal);
        } else if self.kind == TokenKind::Identifier {
            println!("{} ({})", self.kind, self.lexeme);
        } else {
            println!("{} ()", self.kind);
        }
    }
}
