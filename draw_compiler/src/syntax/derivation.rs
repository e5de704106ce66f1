//! Leftmost derivation trace
//!
//! Holds the current sentential form. Each expansion rewrites the leftmost
//! non-terminal and records the rendered form as a new step.

use crate::grammar::{render_symbols, NonTerminal, Symbol};
use crate::syntax::error::{SyntaxError, SyntaxResult};

#[derive(Debug, Clone)]
pub struct Derivation {
    form: Vec<Symbol>,
    steps: Vec<String>,
}

impl Derivation {
    /// Start from the lone start symbol
    pub fn new() -> Self {
        let form = vec![Symbol::NonTerminal(NonTerminal::Graph)];
        let steps = vec![render_symbols(&form)];
        Self { form, steps }
    }

    /// Rewrite the leftmost non-terminal, which must be `lhs`
    pub fn expand(&mut self, lhs: NonTerminal, rhs: Vec<Symbol>) -> SyntaxResult<()> {
        let index = self
            .form
            .iter()
            .position(Symbol::is_non_terminal)
            .ok_or_else(|| {
                SyntaxError::internal_parser_error(&format!(
                    "no non-terminal left to expand as {}",
                    lhs.label()
                ))
            })?;

        if self.form[index] != Symbol::NonTerminal(lhs) {
            return Err(SyntaxError::internal_parser_error(&format!(
                "leftmost non-terminal is {}, not {}",
                self.form[index].text(),
                lhs.label()
            )));
        }

        let tail = self.form.split_off(index + 1);
        self.form.truncate(index);
        self.form.extend(rhs);
        self.form.extend(tail);
        self.steps.push(render_symbols(&self.form));
        Ok(())
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<String> {
        self.steps
    }

    /// True once only terminals remain
    pub fn is_complete(&self) -> bool {
        !self.form.iter().any(Symbol::is_non_terminal)
    }
}

impl Default for Derivation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{ActionKind, Production};

    fn apply(derivation: &mut Derivation, production: Production) {
        derivation
            .expand(production.lhs(), production.rhs())
            .unwrap();
    }

    #[test]
    fn test_fill_derivation() {
        let mut derivation = Derivation::new();
        apply(&mut derivation, Production::Graph);
        apply(&mut derivation, Production::DrawSingle);
        apply(&mut derivation, Production::Action(ActionKind::Fill));
        apply(&mut derivation, Production::X("A".to_string()));
        apply(&mut derivation, Production::Y("2".to_string()));

        assert_eq!(
            derivation.steps(),
            &[
                "<graph>",
                "HI <draw> BYE",
                "HI <action> BYE",
                "HI fill <x><y> BYE",
                "HI fill A<y> BYE",
                "HI fill A2 BYE",
            ]
        );
        assert!(derivation.is_complete());
    }

    #[test]
    fn test_expand_rejects_non_leftmost() {
        let mut derivation = Derivation::new();
        apply(&mut derivation, Production::Graph);

        let error = derivation
            .expand(NonTerminal::Action, Production::DrawSingle.rhs())
            .unwrap_err();
        assert_eq!(error.error_code().as_str(), "E050");
        assert_eq!(derivation.steps().len(), 2);
    }
}
