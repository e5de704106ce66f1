//! Syntax errors for the drawing grammar
//!
//! Parsing is fail-fast: the first violation ends the parse and is the only
//! error reported. `found` fields hold the offending token as rendered by
//! `Token::describe`.

use crate::config::compile_time::syntax::MAX_PARSE_DEPTH;
use crate::logging::{codes, Code};
use crate::utils::Span;

pub type SyntaxResult<T> = Result<T, SyntaxError>;

/// Expected-slot description for `<x>` positions
pub const EXPECTED_X: &str = "<x> letter A-E";

/// Expected-slot description for `<y>` positions
pub const EXPECTED_Y: &str = "<y> digit 1-5";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SyntaxError {
    #[error("expected start marker `HI`, found {found}")]
    MissingStartMarker { found: String, span: Span },

    #[error("expected end marker `BYE`, found {found}")]
    MissingEndMarker { found: String, span: Span },

    #[error("unexpected token {found} after end marker `BYE`")]
    TrailingInput { found: String, span: Span },

    #[error("variable {found} not valid: expected {expected}")]
    InvalidVariable {
        found: String,
        expected: &'static str,
        span: Span,
    },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput { expected: &'static str, span: Span },

    #[error("unrecognized value {found}, expected {expected}")]
    UnrecognizedValue {
        found: String,
        expected: &'static str,
        span: Span,
    },

    #[error("expected ',' after `{after}`")]
    MissingComma { after: String, span: Span },

    #[error("action {found} not valid")]
    InvalidAction { found: String, span: Span },

    #[error("expected action keyword (bar, line, fill), found {found}")]
    UnexpectedMarker { found: String, span: Span },

    #[error("unexpected end of input while parsing action")]
    UnexpectedEndOfAction { span: Span },

    #[error("maximum parse depth {MAX_PARSE_DEPTH} exceeded at {span}")]
    MaxRecursionDepth { span: Span },

    #[error("internal parser error: {message}")]
    InternalParserError { message: String },
}

impl SyntaxError {
    pub fn internal_parser_error(message: &str) -> Self {
        Self::InternalParserError {
            message: message.to_string(),
        }
    }

    /// Get error code for global logging system
    pub fn error_code(&self) -> Code {
        match self {
            Self::MissingStartMarker { .. } => codes::syntax::MISSING_START_MARKER,
            Self::MissingEndMarker { .. } => codes::syntax::MISSING_END_MARKER,
            Self::TrailingInput { .. } => codes::syntax::TRAILING_INPUT,
            Self::InvalidVariable { .. } => codes::syntax::INVALID_VARIABLE,
            Self::UnexpectedEndOfInput { .. } | Self::UnexpectedEndOfAction { .. } => {
                codes::syntax::UNEXPECTED_END_OF_INPUT
            }
            Self::UnrecognizedValue { .. } => codes::syntax::UNRECOGNIZED_VALUE,
            Self::MissingComma { .. } => codes::syntax::MISSING_COMMA,
            Self::InvalidAction { .. } => codes::syntax::INVALID_ACTION,
            Self::UnexpectedMarker { .. } => codes::syntax::UNEXPECTED_MARKER,
            Self::MaxRecursionDepth { .. } => codes::syntax::MAX_RECURSION_DEPTH,
            Self::InternalParserError { .. } => codes::syntax::INTERNAL_PARSER_ERROR,
        }
    }

    /// Get span if available
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::MissingStartMarker { span, .. }
            | Self::MissingEndMarker { span, .. }
            | Self::TrailingInput { span, .. }
            | Self::InvalidVariable { span, .. }
            | Self::UnexpectedEndOfInput { span, .. }
            | Self::UnrecognizedValue { span, .. }
            | Self::MissingComma { span, .. }
            | Self::InvalidAction { span, .. }
            | Self::UnexpectedMarker { span, .. }
            | Self::UnexpectedEndOfAction { span }
            | Self::MaxRecursionDepth { span } => Some(*span),
            Self::InternalParserError { .. } => None,
        }
    }

    /// Byte offset of the offending token, when known
    pub fn offset(&self) -> Option<usize> {
        self.span().map(|span| span.start.offset)
    }

    pub fn requires_halt(&self) -> bool {
        codes::requires_halt(self.error_code().as_str())
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
