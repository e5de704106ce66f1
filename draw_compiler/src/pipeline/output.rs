use crate::pipeline::{PipelineError, PipelineResult};
use crate::tokens::Token;
use crate::tree::TreeNode;
use serde::{Deserialize, Serialize};

/// One diagnostic in a JSON report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportedError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
}

/// Serializable report of one recognition attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineOutput {
    pub accepted: bool,
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentence: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tokens: Vec<Token>,
    pub derivation: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree: Option<TreeNode>,
    #[serde(default)]
    pub errors: Vec<ReportedError>,
}

impl PipelineOutput {
    pub fn from_result(result: &PipelineResult) -> Self {
        Self {
            accepted: true,
            input: result.input.clone(),
            sentence: Some(result.sentence.clone()),
            tokens: result.tokens.significant().to_vec(),
            derivation: result.derivation.clone(),
            tree: Some(result.tree.clone()),
            errors: Vec::new(),
        }
    }

    pub fn from_error(input: &str, error: &PipelineError) -> Self {
        let errors = match error {
            PipelineError::Lexical(errors) => errors
                .errors()
                .iter()
                .map(|error| ReportedError {
                    code: error.error_code().to_string(),
                    message: error.to_string(),
                    offset: Some(error.span().start.offset),
                })
                .collect(),
            PipelineError::Syntax { error, .. } => vec![ReportedError {
                code: error.error_code().to_string(),
                message: error.to_string(),
                offset: error.offset(),
            }],
            PipelineError::InputTooLong { .. } => vec![ReportedError {
                code: error.error_code().to_string(),
                message: error.to_string(),
                offset: None,
            }],
        };

        Self {
            accepted: false,
            input: input.to_string(),
            sentence: None,
            tokens: Vec::new(),
            derivation: error.derivation().to_vec(),
            tree: None,
            errors,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
