use crate::config::compile_time::input::MAX_INPUT_LENGTH;
use crate::lexical::LexicalErrors;
use crate::logging::{codes, Code};
use crate::syntax::SyntaxError;

/// Pipeline processing errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum PipelineError {
    #[error("input is {length} bytes long (max {MAX_INPUT_LENGTH})")]
    InputTooLong { length: usize },

    #[error("Lexical analysis failed: {0}")]
    Lexical(#[from] LexicalErrors),

    #[error("Syntax analysis failed: {error}")]
    Syntax {
        #[source]
        error: SyntaxError,
        /// Derivation steps recorded before the failure
        derivation: Vec<String>,
    },
}

impl PipelineError {
    pub fn error_code(&self) -> Code {
        match self {
            Self::InputTooLong { .. } => codes::input::INPUT_TOO_LONG,
            Self::Lexical(errors) => errors.error_code(),
            Self::Syntax { error, .. } => error.error_code(),
        }
    }

    /// Partial derivation for syntax failures; empty for the other stages
    pub fn derivation(&self) -> &[String] {
        match self {
            Self::Syntax { derivation, .. } => derivation,
            _ => &[],
        }
    }
}
