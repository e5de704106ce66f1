//! Hard-coded grammar of the drawing language
//!
//! Keywords, non-terminals, productions, coordinate ranges and the help text
//! shown by the interactive prompt.

pub mod keywords;
pub mod productions;
pub mod symbols;

pub use keywords::{ActionKind, Keyword, Slot};
pub use productions::Production;
pub use symbols::{render_symbols, NonTerminal, Symbol};

/// Column letters accepted as `<x>`
pub const X_RANGE: std::ops::RangeInclusive<char> = 'A'..='E';

/// Row digits accepted as `<y>`
pub const Y_RANGE: std::ops::RangeInclusive<char> = '1'..='5';

/// Case-insensitive `<x>` check
pub fn is_x_letter(ch: char) -> bool {
    X_RANGE.contains(&ch.to_ascii_uppercase())
}

pub fn is_y_digit(ch: char) -> bool {
    Y_RANGE.contains(&ch)
}

/// Grammar summary printed by the `grammar` and `help` prompt commands
pub fn help_text() -> String {
    let mut text = String::new();
    text.push_str("Drawing command grammar:\n\n");
    text.push_str("  <graph>  -> HI <draw> BYE\n");
    text.push_str("  <draw>   -> <action>\n");
    text.push_str("            | <action> ; <draw>\n");
    text.push_str("  <action> -> bar <x><y>,<y>\n");
    text.push_str("            | line <x><y>,<x><y>\n");
    text.push_str("            | fill <x><y>\n");
    text.push_str("  <x>      -> A | B | C | D | E\n");
    text.push_str("  <y>      -> 1 | 2 | 3 | 4 | 5\n\n");
    text.push_str("Keywords are case-insensitive. Example:\n");
    text.push_str("  HI bar D2,5; fill A2; line B4,D2 BYE\n");
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_ranges() {
        assert!(is_x_letter('a'));
        assert!(is_x_letter('E'));
        assert!(!is_x_letter('F'));
        assert!(is_y_digit('5'));
        assert!(!is_y_digit('0'));
        assert!(!is_y_digit('6'));
    }

    #[test]
    fn test_help_text_lists_every_action() {
        let help = help_text();
        for keyword in Keyword::ALL {
            assert!(help.contains(keyword.as_str()));
        }
    }
}
