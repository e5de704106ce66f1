//! Consolidated diagnostic codes and classification system
//!
//! Single source of truth for every code the recognizer emits, together with
//! the behavioral metadata used by log formatting and error reporting.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for an error code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub requires_halt: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        requires_halt: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            requires_halt,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Input acceptance error codes
pub mod input {
    use super::Code;

    pub const INPUT_TOO_LONG: Code = Code::new("E005");
}

/// Runtime configuration error codes
pub mod config {
    use super::Code;

    pub const CONFIG_READ_FAILED: Code = Code::new("E011");
    pub const CONFIG_PARSE_FAILED: Code = Code::new("E012");
}

/// Lexical analysis error codes
pub mod lexical {
    use super::Code;

    pub const STRAY_VARIABLE: Code = Code::new("E020");
    pub const INVALID_VARIABLE: Code = Code::new("E021");
    pub const INVALID_ACTION: Code = Code::new("E022");
    pub const INVALID_Y_VALUE: Code = Code::new("E023");
    pub const UNRECOGNIZED_VALUE: Code = Code::new("E024");
    pub const UNRECOGNIZED_SYMBOL: Code = Code::new("E025");
    pub const TOO_MANY_TOKENS: Code = Code::new("E026");
}

/// Syntax analysis error codes
pub mod syntax {
    use super::Code;

    pub const MISSING_START_MARKER: Code = Code::new("E040");
    pub const MISSING_END_MARKER: Code = Code::new("E041");
    pub const TRAILING_INPUT: Code = Code::new("E042");
    pub const INVALID_VARIABLE: Code = Code::new("E043");
    pub const UNEXPECTED_END_OF_INPUT: Code = Code::new("E044");
    pub const UNRECOGNIZED_VALUE: Code = Code::new("E045");
    pub const MISSING_COMMA: Code = Code::new("E046");
    pub const INVALID_ACTION: Code = Code::new("E047");
    pub const UNEXPECTED_MARKER: Code = Code::new("E048");
    pub const MAX_RECURSION_DEPTH: Code = Code::new("E049");
    pub const INTERNAL_PARSER_ERROR: Code = Code::new("E050");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I001");
    pub const TOKENIZATION_COMPLETE: Code = Code::new("I002");
    pub const PARSE_TREE_COMPLETE: Code = Code::new("I003");
    pub const DERIVATION_COMPLETE: Code = Code::new("I004");
    pub const INPUT_ACCEPTED: Code = Code::new("I005");
    pub const CONFIG_LOADED: Code = Code::new("I006");
}

// ============================================================================
// ERROR METADATA REGISTRY
// ============================================================================

/// Error metadata registry using OnceLock for thread safety
static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

/// Initialize and get the error registry
fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        let entries = [
            // System errors
            ErrorMetadata::new(
                "ERR001",
                "System",
                Severity::Critical,
                false,
                true,
                "Critical internal system error",
                "File a bug report with the input that triggered it",
            ),
            ErrorMetadata::new(
                "ERR002",
                "System",
                Severity::Critical,
                false,
                true,
                "System initialization failure",
                "Check logging configuration and environment variables",
            ),
            // Input errors
            ErrorMetadata::new(
                "E005",
                "Input",
                Severity::Medium,
                false,
                false,
                "Input line exceeds the configured maximum length",
                "Split the drawing into shorter commands",
            ),
            // Configuration errors
            ErrorMetadata::new(
                "E011",
                "Configuration",
                Severity::High,
                false,
                true,
                "Configuration file could not be read",
                "Check that the configuration path exists and is readable",
            ),
            ErrorMetadata::new(
                "E012",
                "Configuration",
                Severity::High,
                false,
                true,
                "Configuration file is not valid TOML for this tool",
                "Fix the reported key or remove it to use the default",
            ),
            // Lexical errors
            ErrorMetadata::new(
                "E020",
                "Lexical",
                Severity::Medium,
                true,
                false,
                "Letter outside A-E used as a coordinate",
                "Use one of the column letters A, B, C, D or E",
            ),
            ErrorMetadata::new(
                "E021",
                "Lexical",
                Severity::Medium,
                true,
                false,
                "Single letter is not a valid <x> coordinate",
                "Use a letter A-E followed by a digit 1-5",
            ),
            ErrorMetadata::new(
                "E022",
                "Lexical",
                Severity::Medium,
                true,
                false,
                "Word is neither a marker nor an action keyword",
                "Use one of HI, BYE, bar, line or fill",
            ),
            ErrorMetadata::new(
                "E023",
                "Lexical",
                Severity::Medium,
                true,
                false,
                "Digit outside the <y> range 1-5",
                "Use a row digit between 1 and 5",
            ),
            ErrorMetadata::new(
                "E024",
                "Lexical",
                Severity::Medium,
                true,
                false,
                "Numeric value is not a single digit 1-5",
                "Write each <y> coordinate as one digit",
            ),
            ErrorMetadata::new(
                "E025",
                "Lexical",
                Severity::Low,
                true,
                false,
                "Character is not part of the drawing language",
                "Remove the character",
            ),
            ErrorMetadata::new(
                "E026",
                "Lexical",
                Severity::High,
                false,
                true,
                "Token count exceeds the compile-time limit",
                "Shorten the input",
            ),
            // Syntax errors
            ErrorMetadata::new(
                "E040",
                "Syntax",
                Severity::Medium,
                false,
                false,
                "Input does not begin with the start marker HI",
                "Begin the command with HI",
            ),
            ErrorMetadata::new(
                "E041",
                "Syntax",
                Severity::Medium,
                false,
                false,
                "Action sequence is not followed by the end marker BYE",
                "Separate actions with ';' and end the command with BYE",
            ),
            ErrorMetadata::new(
                "E042",
                "Syntax",
                Severity::Medium,
                false,
                false,
                "Tokens found after the end marker BYE",
                "Remove everything after BYE",
            ),
            ErrorMetadata::new(
                "E043",
                "Syntax",
                Severity::Medium,
                false,
                false,
                "Coordinate of the wrong kind in a coordinate position",
                "Write coordinates as <x><y>, for example A1",
            ),
            ErrorMetadata::new(
                "E044",
                "Syntax",
                Severity::Medium,
                false,
                false,
                "Input ended in the middle of an action",
                "Complete the action and end the command with BYE",
            ),
            ErrorMetadata::new(
                "E045",
                "Syntax",
                Severity::Medium,
                false,
                false,
                "Token cannot appear in a coordinate position",
                "Write coordinates as <x><y>, for example A1",
            ),
            ErrorMetadata::new(
                "E046",
                "Syntax",
                Severity::Medium,
                false,
                false,
                "Missing ',' between the parameters of bar or line",
                "Insert ',' after the first coordinate",
            ),
            ErrorMetadata::new(
                "E047",
                "Syntax",
                Severity::Medium,
                false,
                false,
                "Token is not an action keyword",
                "Start each action with bar, line or fill",
            ),
            ErrorMetadata::new(
                "E048",
                "Syntax",
                Severity::Medium,
                false,
                false,
                "Marker found where an action was expected",
                "Put at least one action between HI and BYE",
            ),
            ErrorMetadata::new(
                "E049",
                "Syntax",
                Severity::High,
                false,
                true,
                "Maximum parser recursion depth exceeded",
                "Reduce the number of actions in a single command",
            ),
            ErrorMetadata::new(
                "E050",
                "Syntax",
                Severity::Critical,
                false,
                true,
                "Internal parser error",
                "File a bug report with the input that triggered it",
            ),
        ];

        entries
            .into_iter()
            .map(|metadata| (metadata.code, metadata))
            .collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get error metadata for a specific error code
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

/// Get error severity from error code
pub fn get_severity(code: &str) -> Severity {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Check if error is recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

/// Check if error requires immediate halt
pub fn requires_halt(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.requires_halt)
        .unwrap_or(false)
}

/// Get human-readable description for error code
pub fn get_description(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

/// Get recommended action for error code
pub fn get_action(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

/// Get error category from error code
pub fn get_category(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_error_code_has_metadata() {
        let all = [
            system::INTERNAL_ERROR,
            system::INITIALIZATION_FAILURE,
            input::INPUT_TOO_LONG,
            config::CONFIG_READ_FAILED,
            config::CONFIG_PARSE_FAILED,
            lexical::STRAY_VARIABLE,
            lexical::INVALID_VARIABLE,
            lexical::INVALID_ACTION,
            lexical::INVALID_Y_VALUE,
            lexical::UNRECOGNIZED_VALUE,
            lexical::UNRECOGNIZED_SYMBOL,
            lexical::TOO_MANY_TOKENS,
            syntax::MISSING_START_MARKER,
            syntax::MISSING_END_MARKER,
            syntax::TRAILING_INPUT,
            syntax::INVALID_VARIABLE,
            syntax::UNEXPECTED_END_OF_INPUT,
            syntax::UNRECOGNIZED_VALUE,
            syntax::MISSING_COMMA,
            syntax::INVALID_ACTION,
            syntax::UNEXPECTED_MARKER,
            syntax::MAX_RECURSION_DEPTH,
            syntax::INTERNAL_PARSER_ERROR,
        ];

        for code in all {
            assert!(
                get_error_metadata(code.as_str()).is_some(),
                "missing metadata for {}",
                code
            );
        }
    }

    #[test]
    fn test_classification_lookups() {
        assert_eq!(get_category("E022"), "Lexical");
        assert_eq!(get_category("E046"), "Syntax");
        assert_eq!(get_severity("ERR001"), Severity::Critical);
        assert!(requires_halt("E050"));
        assert!(is_recoverable("E023"));
        assert!(!is_recoverable("E041"));
    }

    #[test]
    fn test_unknown_code_defaults() {
        assert_eq!(get_description("X999"), "Unknown error");
        assert_eq!(get_action("X999"), "No specific action available");
        assert_eq!(get_category("X999"), "Unknown");
        assert_eq!(get_severity("X999"), Severity::Medium);
    }
}
