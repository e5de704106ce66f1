//! Productions of the drawing grammar
//!
//! ```text
//! <graph>  -> HI <draw> BYE
//! <draw>   -> <action> | <action> ; <draw>
//! <action> -> bar <x><y>,<y> | line <x><y>,<x><y> | fill <x><y>
//! <x>      -> A | B | C | D | E
//! <y>      -> 1 | 2 | 3 | 4 | 5
//! ```

use super::keywords::{ActionKind, Keyword, Slot};
use super::symbols::{NonTerminal, Symbol};
use crate::tokens::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Production {
    Graph,
    DrawSingle,
    DrawSequence,
    Action(ActionKind),
    /// `<x>` rewritten to the scanned letter
    X(String),
    /// `<y>` rewritten to the scanned digit
    Y(String),
}

impl Production {
    pub fn lhs(&self) -> NonTerminal {
        match self {
            Production::Graph => NonTerminal::Graph,
            Production::DrawSingle | Production::DrawSequence => NonTerminal::Draw,
            Production::Action(_) => NonTerminal::Action,
            Production::X(_) => NonTerminal::X,
            Production::Y(_) => NonTerminal::Y,
        }
    }

    pub fn rhs(&self) -> Vec<Symbol> {
        match self {
            Production::Graph => vec![
                keyword(Keyword::Hi),
                Symbol::NonTerminal(NonTerminal::Draw),
                keyword(Keyword::Bye),
            ],
            Production::DrawSingle => vec![Symbol::NonTerminal(NonTerminal::Action)],
            Production::DrawSequence => vec![
                Symbol::NonTerminal(NonTerminal::Action),
                Symbol::terminal(TokenKind::Semicolon, ";"),
                Symbol::NonTerminal(NonTerminal::Draw),
            ],
            Production::Action(kind) => {
                let mut rhs = Vec::with_capacity(kind.signature().len() + 1);
                rhs.push(keyword(kind.keyword()));
                rhs.extend(kind.signature().iter().map(|slot| match slot {
                    Slot::X => Symbol::NonTerminal(NonTerminal::X),
                    Slot::Y => Symbol::NonTerminal(NonTerminal::Y),
                    Slot::Comma => Symbol::terminal(TokenKind::Comma, ","),
                }));
                rhs
            }
            Production::X(letter) => vec![Symbol::terminal(TokenKind::XCoordinate, letter.as_str())],
            Production::Y(digit) => vec![Symbol::terminal(TokenKind::YCoordinate, digit.as_str())],
        }
    }
}

fn keyword(keyword: Keyword) -> Symbol {
    Symbol::terminal(TokenKind::Keyword(keyword), keyword.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::render_symbols;

    #[test]
    fn test_rhs_rendering() {
        assert_eq!(render_symbols(&Production::Graph.rhs()), "HI <draw> BYE");
        assert_eq!(
            render_symbols(&Production::DrawSequence.rhs()),
            "<action>; <draw>"
        );
        assert_eq!(
            render_symbols(&Production::Action(ActionKind::Line).rhs()),
            "line <x><y>,<x><y>"
        );
        assert_eq!(
            render_symbols(&Production::Action(ActionKind::Fill).rhs()),
            "fill <x><y>"
        );
    }

    #[test]
    fn test_lhs() {
        assert_eq!(Production::DrawSingle.lhs(), NonTerminal::Draw);
        assert_eq!(Production::Y("3".to_string()).lhs(), NonTerminal::Y);
    }
}
