//! Grammar symbols and sentential-form rendering

use crate::tokens::TokenKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NonTerminal {
    Graph,
    Draw,
    Action,
    X,
    Y,
}

impl NonTerminal {
    /// Label used in derivations and parse-tree nodes
    pub fn label(&self) -> &'static str {
        match self {
            NonTerminal::Graph => "<graph>",
            NonTerminal::Draw => "<draw>",
            NonTerminal::Action => "<action>",
            NonTerminal::X => "<x>",
            NonTerminal::Y => "<y>",
        }
    }
}

/// A grammar symbol inside a sentential form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbol {
    NonTerminal(NonTerminal),
    Terminal { kind: TokenKind, text: String },
}

impl Symbol {
    pub fn terminal(kind: TokenKind, text: impl Into<String>) -> Self {
        Symbol::Terminal {
            kind,
            text: text.into(),
        }
    }

    pub fn is_non_terminal(&self) -> bool {
        matches!(self, Symbol::NonTerminal(_))
    }

    pub fn text(&self) -> &str {
        match self {
            Symbol::NonTerminal(non_terminal) => non_terminal.label(),
            Symbol::Terminal { text, .. } => text,
        }
    }

    fn is_x_position(&self) -> bool {
        matches!(
            self,
            Symbol::NonTerminal(NonTerminal::X)
                | Symbol::Terminal {
                    kind: TokenKind::XCoordinate,
                    ..
                }
        )
    }

    fn is_y_position(&self) -> bool {
        matches!(
            self,
            Symbol::NonTerminal(NonTerminal::Y)
                | Symbol::Terminal {
                    kind: TokenKind::YCoordinate,
                    ..
                }
        )
    }

    fn is_punctuation(&self, kind: TokenKind) -> bool {
        matches!(self, Symbol::Terminal { kind: k, .. } if *k == kind)
    }
}

/// Join symbols with the drawing language's spacing rules.
///
/// One space separates symbols, except: none before `,` or `;`, none after
/// `,`, and none between an x-position symbol and a following y-position one.
/// `HI bar D2,5; fill A2 BYE` is the canonical shape.
pub fn render_symbols(symbols: &[Symbol]) -> String {
    let mut rendered = String::new();
    let mut previous: Option<&Symbol> = None;

    for symbol in symbols {
        if let Some(prev) = previous {
            let glued = symbol.is_punctuation(TokenKind::Comma)
                || symbol.is_punctuation(TokenKind::Semicolon)
                || prev.is_punctuation(TokenKind::Comma)
                || (prev.is_x_position() && symbol.is_y_position());
            if !glued {
                rendered.push(' ');
            }
        }
        rendered.push_str(symbol.text());
        previous = Some(symbol);
    }

    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Keyword;

    fn nt(non_terminal: NonTerminal) -> Symbol {
        Symbol::NonTerminal(non_terminal)
    }

    #[test]
    fn test_placeholder_spacing() {
        let form = vec![
            Symbol::terminal(TokenKind::Keyword(Keyword::Hi), "HI"),
            Symbol::terminal(TokenKind::Keyword(Keyword::Bar), "bar"),
            nt(NonTerminal::X),
            nt(NonTerminal::Y),
            Symbol::terminal(TokenKind::Comma, ","),
            nt(NonTerminal::Y),
            Symbol::terminal(TokenKind::Semicolon, ";"),
            nt(NonTerminal::Draw),
            Symbol::terminal(TokenKind::Keyword(Keyword::Bye), "BYE"),
        ];

        assert_eq!(render_symbols(&form), "HI bar <x><y>,<y>; <draw> BYE");
    }

    #[test]
    fn test_resolved_spacing() {
        let form = vec![
            Symbol::terminal(TokenKind::Keyword(Keyword::Line), "line"),
            Symbol::terminal(TokenKind::XCoordinate, "B"),
            Symbol::terminal(TokenKind::YCoordinate, "4"),
            Symbol::terminal(TokenKind::Comma, ","),
            Symbol::terminal(TokenKind::XCoordinate, "D"),
            nt(NonTerminal::Y),
        ];

        assert_eq!(render_symbols(&form), "line B4,D<y>");
    }

    #[test]
    fn test_y_after_non_x_keeps_space() {
        let form = vec![
            Symbol::terminal(TokenKind::Keyword(Keyword::Fill), "fill"),
            nt(NonTerminal::Y),
        ];

        assert_eq!(render_symbols(&form), "fill <y>");
        assert_eq!(render_symbols(&[]), "");
    }
}
