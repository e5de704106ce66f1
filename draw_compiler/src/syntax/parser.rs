//! Predictive recursive-descent parser for the drawing grammar
//!
//! Every non-terminal goes through `predict`, which picks a production from
//! the upcoming tokens, and `apply`, which records the derivation step and
//! builds the matching tree node. Routing both through one place keeps the
//! derivation trace and the tree in lockstep.

use crate::config::compile_time::syntax::*;
use crate::grammar::{Keyword, NonTerminal, Production, Slot, Symbol};
use crate::logging::codes;
use crate::syntax::derivation::Derivation;
use crate::syntax::error::{SyntaxError, SyntaxResult, EXPECTED_X, EXPECTED_Y};
use crate::tokens::{Token, TokenKind, TokenStream};
use crate::tree::TreeNode;
use crate::{log_debug, log_error, log_success};

/// Outcome of one parse
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Present only when the whole input was accepted
    pub root: Option<TreeNode>,
    /// Sentential forms from `<graph>` up to the last successful expansion
    pub derivation: Vec<String>,
    /// At most one error; parsing stops at the first
    pub errors: Vec<SyntaxError>,
}

impl ParseResult {
    pub fn is_accepted(&self) -> bool {
        self.root.is_some() && self.errors.is_empty()
    }

    pub fn final_step(&self) -> Option<&str> {
        self.derivation.last().map(String::as_str)
    }

    pub fn first_error(&self) -> Option<&SyntaxError> {
        self.errors.first()
    }
}

pub struct DrawParser {
    tokens: TokenStream,
    derivation: Derivation,
    parse_depth: usize,
    /// Text of the coordinate most recently matched, for missing-comma messages
    last_coordinate: String,
}

impl DrawParser {
    pub fn new(tokens: TokenStream) -> Self {
        log_debug!("Creating drawing parser", "tokens" => tokens.len());

        Self {
            tokens,
            derivation: Derivation::new(),
            parse_depth: 0,
            last_coordinate: String::new(),
        }
    }

    /// Parse the whole stream; consumes the parser
    pub fn parse(mut self) -> ParseResult {
        let outcome = self.parse_graph();
        let derivation = self.derivation.into_steps();

        match outcome {
            Ok(root) => {
                log_success!(
                    codes::success::PARSE_TREE_COMPLETE,
                    "Parse tree completed",
                    "actions" => root.count_labeled("<action>"),
                    "depth" => root.depth()
                );
                log_success!(
                    codes::success::DERIVATION_COMPLETE,
                    "Leftmost derivation completed",
                    "steps" => derivation.len()
                );
                ParseResult {
                    root: Some(root),
                    derivation,
                    errors: Vec::new(),
                }
            }
            Err(error) => {
                match error.span() {
                    Some(span) => log_error!(
                        error.error_code(),
                        "Parsing stopped at first syntax error",
                        span = span,
                        "error" => &error,
                        "steps" => derivation.len()
                    ),
                    None => log_error!(
                        error.error_code(),
                        "Parsing stopped at first syntax error",
                        "error" => &error,
                        "steps" => derivation.len()
                    ),
                }
                ParseResult {
                    root: None,
                    derivation,
                    errors: vec![error],
                }
            }
        }
    }

    fn parse_graph(&mut self) -> SyntaxResult<TreeNode> {
        let production = self.predict(NonTerminal::Graph)?;
        let root = self.apply(production)?;

        let next = self.tokens.current();
        if !next.is_eof() {
            return Err(SyntaxError::TrailingInput {
                found: next.describe(),
                span: next.span,
            });
        }

        Ok(root)
    }

    /// Expand one production into the derivation and the tree
    fn apply(&mut self, production: Production) -> SyntaxResult<TreeNode> {
        if self.parse_depth >= MAX_PARSE_DEPTH {
            let span = self.tokens.current().span;
            log_error!(codes::syntax::MAX_RECURSION_DEPTH, "Maximum parse depth exceeded",
                "depth" => self.parse_depth,
                "max_depth" => MAX_PARSE_DEPTH
            );
            return Err(SyntaxError::MaxRecursionDepth { span });
        }

        self.parse_depth += 1;
        let result = self.expand(production);
        self.parse_depth -= 1;
        result
    }

    fn expand(&mut self, production: Production) -> SyntaxResult<TreeNode> {
        match &production {
            Production::X(letter) => self.last_coordinate = letter.clone(),
            Production::Y(digit) => self.last_coordinate.push_str(digit),
            _ => {}
        }

        let lhs = production.lhs();
        let rhs = production.rhs();
        self.derivation.expand(lhs, rhs.clone())?;

        let mut node = TreeNode::new(lhs.label());
        for symbol in rhs {
            let child = match symbol {
                Symbol::NonTerminal(non_terminal) => {
                    let next = self.predict(non_terminal)?;
                    self.apply(next)?
                }
                Symbol::Terminal { kind, .. } => {
                    let token = self.match_terminal(kind)?;
                    TreeNode::leaf(token.literal)
                }
            };
            node.push_child(child);
        }

        Ok(node)
    }

    /// Choose the production for `non_terminal` from the upcoming tokens
    fn predict(&self, non_terminal: NonTerminal) -> SyntaxResult<Production> {
        let current = self.tokens.current();

        match non_terminal {
            NonTerminal::Graph => match current.kind {
                TokenKind::Keyword(Keyword::Hi) => Ok(Production::Graph),
                _ => Err(SyntaxError::MissingStartMarker {
                    found: current.describe(),
                    span: current.span,
                }),
            },
            NonTerminal::Draw => {
                let sequence = match self.scan_action() {
                    Some(token_count) => {
                        token_count < MAX_LOOKAHEAD_TOKENS
                            && self.tokens.peek_ahead(token_count).kind == TokenKind::Semicolon
                    }
                    // Malformed action: the first separator after it decides
                    None => self.separator_ahead() == Some(TokenKind::Semicolon),
                };
                if sequence {
                    Ok(Production::DrawSequence)
                } else {
                    Ok(Production::DrawSingle)
                }
            }
            NonTerminal::Action => match current.kind {
                TokenKind::Keyword(keyword) => match keyword.action_kind() {
                    Some(kind) => Ok(Production::Action(kind)),
                    None => Err(SyntaxError::UnexpectedMarker {
                        found: current.describe(),
                        span: current.span,
                    }),
                },
                TokenKind::Eof => Err(SyntaxError::UnexpectedEndOfAction { span: current.span }),
                _ => Err(SyntaxError::InvalidAction {
                    found: current.describe(),
                    span: current.span,
                }),
            },
            NonTerminal::X => match current.kind {
                TokenKind::XCoordinate => Ok(Production::X(current.literal.clone())),
                other => Err(coordinate_error(current, other, TokenKind::YCoordinate, EXPECTED_X)),
            },
            NonTerminal::Y => match current.kind {
                TokenKind::YCoordinate => Ok(Production::Y(current.literal.clone())),
                other => Err(coordinate_error(current, other, TokenKind::XCoordinate, EXPECTED_Y)),
            },
        }
    }

    /// Token count of a complete action at the cursor, found without consuming it
    fn scan_action(&self) -> Option<usize> {
        let kind = match self.tokens.current().kind {
            TokenKind::Keyword(keyword) => keyword.action_kind()?,
            _ => return None,
        };

        let signature = kind.signature();
        if signature.len() >= MAX_LOOKAHEAD_TOKENS {
            return None;
        }

        for (index, slot) in signature.iter().enumerate() {
            let expected = match slot {
                Slot::X => TokenKind::XCoordinate,
                Slot::Y => TokenKind::YCoordinate,
                Slot::Comma => TokenKind::Comma,
            };
            if self.tokens.peek_ahead(index + 1).kind != expected {
                return None;
            }
        }

        Some(signature.len() + 1)
    }

    /// First `;`, keyword or end of input past the cursor, within the lookahead bound
    fn separator_ahead(&self) -> Option<TokenKind> {
        (1..MAX_LOOKAHEAD_TOKENS)
            .map(|n| self.tokens.peek_ahead(n).kind)
            .find(|kind| {
                matches!(
                    kind,
                    TokenKind::Semicolon | TokenKind::Keyword(_) | TokenKind::Eof
                )
            })
    }

    /// Consume a terminal the current production requires
    fn match_terminal(&mut self, kind: TokenKind) -> SyntaxResult<Token> {
        let current = self.tokens.current();
        if current.kind == kind {
            return Ok(self.tokens.advance());
        }

        let found = current.describe();
        let span = current.span;

        Err(match kind {
            TokenKind::Keyword(Keyword::Hi) => SyntaxError::MissingStartMarker { found, span },
            TokenKind::Keyword(Keyword::Bye) => SyntaxError::MissingEndMarker { found, span },
            TokenKind::Comma => SyntaxError::MissingComma {
                after: self.last_coordinate.clone(),
                span,
            },
            expected => SyntaxError::internal_parser_error(&format!(
                "predicted {} but found {}",
                expected.name(),
                found
            )),
        })
    }
}

/// Error for a coordinate slot holding something else
fn coordinate_error(
    current: &Token,
    found_kind: TokenKind,
    plausible: TokenKind,
    expected: &'static str,
) -> SyntaxError {
    let span = current.span;

    if found_kind == plausible {
        SyntaxError::InvalidVariable {
            found: current.describe(),
            expected,
            span,
        }
    } else if found_kind == TokenKind::Eof {
        SyntaxError::UnexpectedEndOfInput { expected, span }
    } else {
        SyntaxError::UnrecognizedValue {
            found: current.describe(),
            expected,
            span,
        }
    }
}
