//! Lexical analysis for drawing commands
//!
//! Turns one input line into a `TokenStream` and collects every lexical
//! error along the way.

pub mod analyzer;
pub mod error;

use crate::config::compile_time::lexical::*;
use crate::logging::codes;
use crate::tokens::TokenStream;

pub use analyzer::{LexicalAnalyzer, LexicalMetrics, LexicalOutput};
pub use error::{LexicalError, LexicalErrors};

/// Tokenize with default preferences, failing with every error found
pub fn tokenize(input: &str) -> Result<TokenStream, LexicalErrors> {
    let mut analyzer = LexicalAnalyzer::new();
    analyzer.tokenize(input).into_result()
}

/// Check that every lexical code is registered and the limits are usable
pub fn validate_lexical_setup() -> Result<(), String> {
    let lexical_codes = [
        codes::lexical::STRAY_VARIABLE,
        codes::lexical::INVALID_VARIABLE,
        codes::lexical::INVALID_ACTION,
        codes::lexical::INVALID_Y_VALUE,
        codes::lexical::UNRECOGNIZED_VALUE,
        codes::lexical::UNRECOGNIZED_SYMBOL,
        codes::lexical::TOO_MANY_TOKENS,
    ];

    for code in &lexical_codes {
        if codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "Lexical error code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    if MAX_TOKEN_COUNT == 0 {
        return Err("MAX_TOKEN_COUNT cannot be zero".to_string());
    }
    if INVALID_Y_GROUP_WINDOW == 0 {
        return Err("INVALID_Y_GROUP_WINDOW cannot be zero".to_string());
    }

    crate::log_debug!("Lexical limits initialized",
        "max_token_count" => MAX_TOKEN_COUNT,
        "invalid_y_group_window" => INVALID_Y_GROUP_WINDOW
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_ok() {
        let tokens = tokenize("HI fill A2 BYE").unwrap();
        assert_eq!(tokens.sentence(), "HI fill A2 BYE");
    }

    #[test]
    fn test_tokenize_collects_all_errors() {
        let errors = tokenize("HI fil F2 # BYE").unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_lexical_setup_is_valid() {
        assert!(validate_lexical_setup().is_ok());
    }
}
