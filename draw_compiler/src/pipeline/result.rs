use crate::lexical::LexicalMetrics;
use crate::logging::codes;
use crate::tokens::TokenStream;
use crate::tree::TreeNode;
use std::time::Duration;

/// Everything produced for one accepted input
#[derive(Debug, Clone)]
pub struct PipelineResult {
    /// Trimmed input as received
    pub input: String,
    /// Token literals joined with canonical spacing
    pub sentence: String,
    pub tokens: TokenStream,
    pub tree: TreeNode,
    pub derivation: Vec<String>,
    pub lexical_metrics: LexicalMetrics,
    pub processing_duration: Duration,
}

impl PipelineResult {
    pub fn action_count(&self) -> usize {
        self.tree.count_labeled("<action>")
    }

    pub fn log_success(&self) {
        crate::log_performance!(
            codes::success::INPUT_ACCEPTED,
            "Drawing command accepted",
            duration = self.processing_duration,
            "sentence" => &self.sentence,
            "actions" => self.action_count(),
            "steps" => self.derivation.len(),
            "tokens" => self.lexical_metrics.total_tokens
        );
    }
}
