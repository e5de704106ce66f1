//! Lexical diagnostics
//!
//! Lexing never stops at the first problem; every error below is collected
//! in input order and reported together.

use crate::config::compile_time::lexical::MAX_TOKEN_COUNT;
use crate::logging::{codes, Code};
use crate::utils::Span;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexicalError {
    #[error("stray variable `{context}` is invalid: `{letter}` is not a valid <x> (must be one of A-E)")]
    StrayVariable {
        letter: char,
        context: String,
        span: Span,
    },

    #[error("variable `{letter}` is invalid: <x> must be one of A-E and followed by a <y> of 1-5")]
    InvalidVariable { letter: char, span: Span },

    #[error("action `{word}` not valid")]
    InvalidAction { word: String, span: Span },

    #[error("invalid <y> value(s) {} in `{context}`: <y> must be one of 1-5", quote_values(.values))]
    InvalidYValues {
        values: Vec<char>,
        context: String,
        span: Span,
    },

    #[error("unrecognized value `{text}`")]
    UnrecognizedValue { text: String, span: Span },

    #[error("unrecognized symbol `{symbol}`")]
    UnrecognizedSymbol { symbol: char, span: Span },

    #[error("too many tokens: {count} (max {MAX_TOKEN_COUNT})")]
    TooManyTokens { count: usize, span: Span },
}

fn quote_values(values: &[char]) -> String {
    values
        .iter()
        .map(|value| format!("`{}`", value))
        .collect::<Vec<_>>()
        .join(", ")
}

impl LexicalError {
    pub fn error_code(&self) -> Code {
        match self {
            LexicalError::StrayVariable { .. } => codes::lexical::STRAY_VARIABLE,
            LexicalError::InvalidVariable { .. } => codes::lexical::INVALID_VARIABLE,
            LexicalError::InvalidAction { .. } => codes::lexical::INVALID_ACTION,
            LexicalError::InvalidYValues { .. } => codes::lexical::INVALID_Y_VALUE,
            LexicalError::UnrecognizedValue { .. } => codes::lexical::UNRECOGNIZED_VALUE,
            LexicalError::UnrecognizedSymbol { .. } => codes::lexical::UNRECOGNIZED_SYMBOL,
            LexicalError::TooManyTokens { .. } => codes::lexical::TOO_MANY_TOKENS,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            LexicalError::StrayVariable { span, .. }
            | LexicalError::InvalidVariable { span, .. }
            | LexicalError::InvalidAction { span, .. }
            | LexicalError::InvalidYValues { span, .. }
            | LexicalError::UnrecognizedValue { span, .. }
            | LexicalError::UnrecognizedSymbol { span, .. }
            | LexicalError::TooManyTokens { span, .. } => *span,
        }
    }

    pub fn severity(&self) -> &'static str {
        codes::get_severity(self.error_code().as_str()).as_str()
    }

    pub fn category(&self) -> &'static str {
        codes::get_category(self.error_code().as_str())
    }

    pub fn recommended_action(&self) -> &'static str {
        codes::get_action(self.error_code().as_str())
    }
}

/// Every lexical error found in one input, in input order
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{} lexical error(s): {}", .0.len(), join_messages(.0))]
pub struct LexicalErrors(pub Vec<LexicalError>);

fn join_messages(errors: &[LexicalError]) -> String {
    errors
        .iter()
        .map(|error| error.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl LexicalErrors {
    pub fn errors(&self) -> &[LexicalError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Code of the first error, used for the summary log event
    pub fn error_code(&self) -> Code {
        self.0
            .first()
            .map(LexicalError::error_code)
            .unwrap_or(codes::system::INTERNAL_ERROR)
    }
}
