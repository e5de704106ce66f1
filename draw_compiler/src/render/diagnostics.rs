//! Caret diagnostics under the offending input

use crate::lexical::LexicalError;
use crate::syntax::SyntaxError;
use crate::utils::SourceMap;

/// One caret block per lexical error, in input order
pub fn format_lexical_errors(input: &str, errors: &[LexicalError]) -> String {
    let source_map = SourceMap::new(input);

    errors
        .iter()
        .map(|error| {
            let message = format!("[{}] {}", error.error_code(), error);
            source_map.format_error(&error.span(), &message)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_syntax_error(input: &str, error: &SyntaxError) -> String {
    let message = format!("[{}] {}", error.error_code(), error);

    match error.span() {
        Some(span) => SourceMap::new(input).format_error(&span, &message),
        None => format!("error: {}\n", message),
    }
}
