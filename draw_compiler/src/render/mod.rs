//! Display transforms for recognition results
//!
//! Nothing here knows how to parse; each function takes finished output.

pub mod derivation;
pub mod diagnostics;
pub mod tree;

pub use derivation::format_derivation;
pub use diagnostics::{format_lexical_errors, format_syntax_error};
pub use tree::{render_tree, TreeStyle, EMPTY_TREE};
