//! Cursor over a lexed token sequence
//!
//! The sequence always ends in exactly one end-of-stream token. The cursor
//! never moves past it, so `current` is always defined.

use crate::grammar::{render_symbols, Symbol};
use crate::tokens::token::{Token, TokenKind};
use crate::utils::{Position, Span};

#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    position: usize,
}

impl TokenStream {
    /// Wrap a token vector, appending the end-of-stream token when absent
    pub fn new(mut tokens: Vec<Token>) -> Self {
        tokens.retain(|token| !token.is_eof());
        let end = tokens.last().map(|token| token.span.end).unwrap_or_default();
        tokens.push(Token::new(TokenKind::Eof, "", Span::new(end, end)));

        Self {
            tokens,
            position: 0,
        }
    }

    /// Wrap a sequence whose final token is already the end-of-stream token
    pub(crate) fn from_terminated(tokens: Vec<Token>) -> Self {
        debug_assert!(tokens.last().map(Token::is_eof).unwrap_or(false));
        debug_assert_eq!(tokens.iter().filter(|token| token.is_eof()).count(), 1);
        Self {
            tokens,
            position: 0,
        }
    }

    pub fn current(&self) -> &Token {
        &self.tokens[self.position.min(self.tokens.len() - 1)]
    }

    /// Look `n` tokens past the cursor; clamps to the end-of-stream token
    pub fn peek_ahead(&self, n: usize) -> &Token {
        let index = (self.position + n).min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    /// Consume the current token and return it
    pub fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if !token.is_eof() {
            self.position += 1;
        }
        token
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_at_end(&self) -> bool {
        self.current().is_eof()
    }

    /// Number of tokens including end-of-stream
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.len() <= 1
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Tokens without the end-of-stream marker
    pub fn significant(&self) -> &[Token] {
        &self.tokens[..self.tokens.len() - 1]
    }

    /// Reconstruct the input sentence from token literals with canonical spacing
    pub fn sentence(&self) -> String {
        let symbols: Vec<Symbol> = self
            .significant()
            .iter()
            .map(|token| Symbol::terminal(token.kind, token.literal.as_str()))
            .collect();
        render_symbols(&symbols)
    }

    pub fn count_kind(&self, kind: TokenKind) -> usize {
        self.tokens.iter().filter(|token| token.kind == kind).count()
    }
}

/// Token stream builder for constructing streams programmatically
#[derive(Debug, Default)]
pub struct TokenStreamBuilder {
    tokens: Vec<Token>,
    offset: usize,
}

impl TokenStreamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token spanning its literal, separated from the previous one by a space
    pub fn push(mut self, kind: TokenKind, literal: &str) -> Self {
        if !self.tokens.is_empty() {
            self.offset += 1;
        }
        let start = self.offset;
        let end = start + literal.len();
        let span = Span::new(
            Position::new(start, 1, start as u32 + 1),
            Position::new(end, 1, end as u32 + 1),
        );
        self.tokens.push(Token::new(kind, literal, span));
        self.offset = end;
        self
    }

    pub fn push_token(mut self, token: Token) -> Self {
        self.offset = token.span.end.offset;
        self.tokens.push(token);
        self
    }

    pub fn build(self) -> TokenStream {
        TokenStream::new(self.tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Keyword;

    fn sample() -> TokenStream {
        TokenStreamBuilder::new()
            .push(TokenKind::Keyword(Keyword::Hi), "HI")
            .push(TokenKind::Keyword(Keyword::Fill), "fill")
            .push(TokenKind::XCoordinate, "A")
            .push(TokenKind::YCoordinate, "2")
            .push(TokenKind::Keyword(Keyword::Bye), "BYE")
            .build()
    }

    #[test]
    fn test_builder_appends_single_eof() {
        let stream = sample();
        assert_eq!(stream.len(), 6);
        assert_eq!(stream.count_kind(TokenKind::Eof), 1);
        assert!(stream.tokens().last().unwrap().is_eof());
    }

    #[test]
    fn test_new_drops_stray_eof_tokens() {
        let mut tokens = sample().into_tokens();
        let eof = tokens.last().unwrap().clone();
        tokens.insert(1, eof);

        let stream = TokenStream::new(tokens);
        assert_eq!(stream.count_kind(TokenKind::Eof), 1);
        assert_eq!(stream.len(), 6);
    }

    #[test]
    fn test_cursor_never_passes_eof() {
        let mut stream = sample();
        for _ in 0..10 {
            stream.advance();
        }
        assert!(stream.is_at_end());
        assert_eq!(stream.position(), 5);
        assert!(stream.peek_ahead(3).is_eof());
    }

    #[test]
    fn test_sentence_reconstruction() {
        assert_eq!(sample().sentence(), "HI fill A2 BYE");
    }

    #[test]
    fn test_empty_stream() {
        let stream = TokenStream::new(Vec::new());
        assert!(stream.is_empty());
        assert!(stream.is_at_end());
        assert_eq!(stream.sentence(), "");
    }
}
