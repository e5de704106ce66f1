//! Reserved words of the drawing language
//!
//! Markers are written upper case (`HI`, `BYE`), actions lower case
//! (`bar`, `line`, `fill`). Input matching is case-insensitive and the
//! canonical spelling is what tokens carry.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    /// Start marker
    Hi,
    /// End marker
    Bye,
    Bar,
    Line,
    Fill,
}

impl Keyword {
    pub const ALL: [Keyword; 5] = [
        Keyword::Hi,
        Keyword::Bye,
        Keyword::Bar,
        Keyword::Line,
        Keyword::Fill,
    ];

    /// Case-insensitive lookup of a scanned word
    pub fn from_word(word: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|keyword| keyword.as_str().eq_ignore_ascii_case(word))
    }

    /// Canonical spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Hi => "HI",
            Keyword::Bye => "BYE",
            Keyword::Bar => "bar",
            Keyword::Line => "line",
            Keyword::Fill => "fill",
        }
    }

    pub fn is_marker(&self) -> bool {
        matches!(self, Keyword::Hi | Keyword::Bye)
    }

    pub fn action_kind(&self) -> Option<ActionKind> {
        match self {
            Keyword::Bar => Some(ActionKind::Bar),
            Keyword::Line => Some(ActionKind::Line),
            Keyword::Fill => Some(ActionKind::Fill),
            Keyword::Hi | Keyword::Bye => None,
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One position in an action's fixed-width parameter list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    X,
    Y,
    Comma,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Bar,
    Line,
    Fill,
}

impl ActionKind {
    pub fn keyword(&self) -> Keyword {
        match self {
            ActionKind::Bar => Keyword::Bar,
            ActionKind::Line => Keyword::Line,
            ActionKind::Fill => Keyword::Fill,
        }
    }

    /// Parameter slots following the keyword
    pub fn signature(&self) -> &'static [Slot] {
        match self {
            ActionKind::Bar => &[Slot::X, Slot::Y, Slot::Comma, Slot::Y],
            ActionKind::Line => &[Slot::X, Slot::Y, Slot::Comma, Slot::X, Slot::Y],
            ActionKind::Fill => &[Slot::X, Slot::Y],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup_ignores_case() {
        assert_eq!(Keyword::from_word("hi"), Some(Keyword::Hi));
        assert_eq!(Keyword::from_word("Bye"), Some(Keyword::Bye));
        assert_eq!(Keyword::from_word("BAR"), Some(Keyword::Bar));
        assert_eq!(Keyword::from_word("LiNe"), Some(Keyword::Line));
        assert_eq!(Keyword::from_word("fil"), None);
        assert_eq!(Keyword::from_word("fills"), None);
    }

    #[test]
    fn test_canonical_spelling() {
        assert_eq!(Keyword::Hi.as_str(), "HI");
        assert_eq!(Keyword::Fill.to_string(), "fill");
    }

    #[test]
    fn test_action_signatures() {
        assert_eq!(ActionKind::Fill.signature().len(), 2);
        assert_eq!(ActionKind::Bar.signature()[2], Slot::Comma);
        assert_eq!(ActionKind::Line.signature().len(), 5);
        assert_eq!(Keyword::Line.action_kind(), Some(ActionKind::Line));
        assert!(Keyword::Bye.action_kind().is_none());
    }
}
