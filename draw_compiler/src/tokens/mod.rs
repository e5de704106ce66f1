//! Token types and token-stream cursor

pub mod token;
pub mod token_stream;

pub use token::{Token, TokenKind};
pub use token_stream::{TokenStream, TokenStreamBuilder};
