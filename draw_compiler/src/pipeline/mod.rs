//! Recognition pipeline: input check -> lexing -> parsing
//!
//! Lexical errors short-circuit parsing, so one report never mixes lexical
//! and syntax diagnostics.

mod error;
pub mod output;
mod result;

pub use error::PipelineError;
pub use output::{PipelineOutput, ReportedError};
pub use result::PipelineResult;

use crate::config::compile_time::input::MAX_INPUT_LENGTH;
use crate::config::runtime::RuntimeConfig;
use crate::lexical::LexicalAnalyzer;
use crate::{log_error, log_info};
use std::time::Instant;

/// Recognize one input line with default preferences
pub fn process_input(input: &str) -> Result<PipelineResult, PipelineError> {
    process_input_with_config(input, &RuntimeConfig::default())
}

/// Recognize one input line
pub fn process_input_with_config(
    input: &str,
    config: &RuntimeConfig,
) -> Result<PipelineResult, PipelineError> {
    let start_time = Instant::now();
    let input = input.trim();

    crate::log_debug!("Starting drawing command pipeline", "length" => input.len());

    if input.len() > MAX_INPUT_LENGTH {
        let error = PipelineError::InputTooLong {
            length: input.len(),
        };
        log_error!(error.error_code(), "Input rejected before lexing",
            "length" => input.len(),
            "max_length" => MAX_INPUT_LENGTH
        );
        return Err(error);
    }

    // Stage 1: Lexical analysis
    let mut analyzer = LexicalAnalyzer::with_preferences(config.lexical.clone());
    let tokens = analyzer.tokenize(input).into_result()?;
    let lexical_metrics = analyzer.metrics().clone();
    let sentence = tokens.sentence();

    // Stage 2: Syntax analysis
    let mut parsed = crate::syntax::parse(tokens.clone());
    let tree = match (parsed.root.take(), parsed.errors.into_iter().next()) {
        (Some(tree), None) => tree,
        (_, error) => {
            let error = error.unwrap_or_else(|| {
                crate::syntax::SyntaxError::internal_parser_error(
                    "parser returned neither a tree nor an error",
                )
            });
            return Err(PipelineError::Syntax {
                error,
                derivation: parsed.derivation,
            });
        }
    };

    let result = PipelineResult {
        input: input.to_string(),
        sentence,
        tokens,
        tree,
        derivation: parsed.derivation,
        lexical_metrics,
        processing_duration: start_time.elapsed(),
    };

    result.log_success();
    log_info!("Pipeline finished", "steps" => result.derivation.len());

    Ok(result)
}
