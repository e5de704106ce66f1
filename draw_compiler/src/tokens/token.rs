//! Token model for the drawing language

use crate::grammar::Keyword;
use crate::utils::Span;
use serde::{Deserialize, Serialize};

/// Lexical category of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Keyword(Keyword),
    XCoordinate,
    YCoordinate,
    Comma,
    Semicolon,
    Eof,
}

impl TokenKind {
    /// Short category name used in logs and token listings
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Keyword(keyword) if keyword.is_marker() => "marker",
            TokenKind::Keyword(_) => "action",
            TokenKind::XCoordinate => "x",
            TokenKind::YCoordinate => "y",
            TokenKind::Comma => "comma",
            TokenKind::Semicolon => "semicolon",
            TokenKind::Eof => "eof",
        }
    }

    pub fn is_action_keyword(&self) -> bool {
        matches!(self, TokenKind::Keyword(keyword) if keyword.action_kind().is_some())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Canonical text: keyword spelling, upper-case letter, digit or punctuation
    pub literal: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            literal: literal.into(),
            span,
        }
    }

    /// Byte offset of the token in the input
    pub fn offset(&self) -> usize {
        self.span.start.offset
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// How the token is named in diagnostics
    pub fn describe(&self) -> String {
        if self.is_eof() {
            "end of input".to_string()
        } else {
            format!("`{}`", self.literal)
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})@{}", self.kind.name(), self.literal, self.offset())
    }
}
