// Internal modules
pub mod config;
pub mod grammar;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod pipeline;
pub mod render;
pub mod syntax;
pub mod tokens;
pub mod tree;
pub mod utils;

// Re-export key types for library consumers
pub use lexical::{LexicalAnalyzer, LexicalError, LexicalErrors};
pub use pipeline::{process_input, process_input_with_config, PipelineError, PipelineResult};
pub use syntax::{DrawParser, ParseResult, SyntaxError};
pub use tokens::{Token, TokenKind, TokenStream};
pub use tree::TreeNode;

// Re-export pipeline output for report consumers
pub use pipeline::output::PipelineOutput;
