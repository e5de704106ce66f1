//! Shared source-location utilities for the lexer, parser and renderers

pub mod span;

pub use span::{Position, SourceMap, Span};
