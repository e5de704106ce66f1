//! Syntax analysis - TokenStream to parse tree and leftmost derivation
//!
//! Fail-fast: the first structural violation ends the parse. The derivation
//! collected up to that point is still returned for diagnostics.

pub mod derivation;
pub mod error;
pub mod parser;

pub use derivation::Derivation;
pub use error::{SyntaxError, SyntaxResult, EXPECTED_X, EXPECTED_Y};
pub use parser::{DrawParser, ParseResult};

use crate::tokens::TokenStream;
use crate::log_debug;

/// Parse a lexically clean token stream
pub fn parse(token_stream: TokenStream) -> ParseResult {
    log_debug!("Starting syntax analysis", "tokens" => token_stream.len());

    let result = DrawParser::new(token_stream).parse();

    log_debug!("Syntax analysis finished",
        "accepted" => result.is_accepted(),
        "steps" => result.derivation.len()
    );

    result
}

/// Parse into a `Result`, keeping only the tree and derivation on success
pub fn parse_strict(token_stream: TokenStream) -> SyntaxResult<(crate::tree::TreeNode, Vec<String>)> {
    let mut result = parse(token_stream);

    match (result.root.take(), result.errors.into_iter().next()) {
        (Some(root), None) => Ok((root, result.derivation)),
        (_, Some(error)) => Err(error),
        (None, None) => Err(SyntaxError::internal_parser_error(
            "parse produced neither a tree nor an error",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical;

    #[test]
    fn test_parse_accepts_sample() {
        let tokens = lexical::tokenize("HI bar D2,5; fill A2; line B4,D2 BYE").unwrap();
        let result = parse(tokens);

        assert!(result.is_accepted());
        assert_eq!(
            result.final_step(),
            Some("HI bar D2,5; fill A2; line B4,D2 BYE")
        );
    }

    #[test]
    fn test_parse_strict_error() {
        let tokens = lexical::tokenize("HI bar A1 BYE").unwrap();
        let error = parse_strict(tokens).unwrap_err();
        assert_eq!(error.error_code().as_str(), "E046");
    }
}
