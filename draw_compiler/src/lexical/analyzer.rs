//! Core lexical analyzer implementation
//!
//! Single left-to-right scan over the input line. Words are maximal runs of
//! ASCII letters, numbers maximal runs of ASCII digits. Every problem becomes
//! a `LexicalError`; scanning always reaches the end of the input.

use crate::config::compile_time::lexical::*;
use crate::config::runtime::LexicalPreferences;
use crate::grammar::{self, Keyword};
use crate::lexical::error::{LexicalError, LexicalErrors};
use crate::logging::codes;
use crate::tokens::{Token, TokenKind, TokenStream};
use crate::utils::SourceMap;
use crate::{log_debug, log_error, log_success};
use serde::Serialize;

/// Essential lexical analysis metrics with runtime preferences
#[derive(Debug, Default, Clone, Serialize)]
pub struct LexicalMetrics {
    pub total_tokens: usize,
    pub error_count: usize,

    // Runtime preference-controlled metrics
    pub marker_tokens: usize,
    pub action_tokens: usize,
    pub coordinate_tokens: usize,
    pub punctuation_tokens: usize,
    pub invalid_y_groups: usize,
}

impl LexicalMetrics {
    pub(crate) fn record_token(&mut self, token: &Token, preferences: &LexicalPreferences) {
        self.total_tokens += 1;

        if !preferences.collect_detailed_metrics {
            return;
        }

        match token.kind {
            TokenKind::Keyword(keyword) if keyword.is_marker() => self.marker_tokens += 1,
            TokenKind::Keyword(_) => self.action_tokens += 1,
            TokenKind::XCoordinate | TokenKind::YCoordinate => self.coordinate_tokens += 1,
            TokenKind::Comma | TokenKind::Semicolon => self.punctuation_tokens += 1,
            TokenKind::Eof => {}
        }
    }

    pub(crate) fn record_error(&mut self, error: &LexicalError, preferences: &LexicalPreferences) {
        self.error_count += 1;

        if preferences.collect_detailed_metrics
            && matches!(error, LexicalError::InvalidYValues { .. })
        {
            self.invalid_y_groups += 1;
        }
    }
}

/// Tokens plus every lexical error found in the same pass
#[derive(Debug, Clone)]
pub struct LexicalOutput {
    pub tokens: TokenStream,
    pub errors: Vec<LexicalError>,
}

impl LexicalOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Tokens when the input is lexically clean, otherwise all errors
    pub fn into_result(self) -> Result<TokenStream, LexicalErrors> {
        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(LexicalErrors(self.errors))
        }
    }
}

/// Run of out-of-range digits waiting to be reported as one error
#[derive(Debug)]
struct PendingYGroup {
    values: Vec<char>,
    context_start: usize,
    end: usize,
    last_offset: usize,
}

/// Lexical analyzer with runtime preferences
pub struct LexicalAnalyzer {
    metrics: LexicalMetrics,
    preferences: LexicalPreferences,
}

impl LexicalAnalyzer {
    pub fn new() -> Self {
        Self::with_preferences(LexicalPreferences::default())
    }

    pub fn with_preferences(preferences: LexicalPreferences) -> Self {
        Self {
            metrics: LexicalMetrics::default(),
            preferences,
        }
    }

    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    /// Tokenize one input line
    pub fn tokenize(&mut self, source: &str) -> LexicalOutput {
        log_debug!("Starting tokenization", "length" => source.len());

        self.metrics = LexicalMetrics::default();

        let mut scanner = Scanner::new(source, &self.preferences);
        scanner.run();
        let Scanner { tokens, errors, .. } = scanner;

        for token in &tokens {
            self.metrics.record_token(token, &self.preferences);
        }
        for error in &errors {
            self.metrics.record_error(error, &self.preferences);
        }

        if errors.is_empty() {
            log_success!(
                codes::success::TOKENIZATION_COMPLETE,
                "Tokenization completed",
                "tokens" => self.metrics.total_tokens,
                "actions" => self.metrics.action_tokens
            );
        } else {
            log_error!(
                errors[0].error_code(),
                "Tokenization found lexical errors",
                span = errors[0].span(),
                "errors" => errors.len(),
                "first" => &errors[0]
            );
        }

        LexicalOutput {
            tokens: TokenStream::from_terminated(tokens),
            errors,
        }
    }
}

impl Default for LexicalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-call scanning state
struct Scanner<'a> {
    source: &'a str,
    source_map: SourceMap,
    preferences: &'a LexicalPreferences,
    chars: Vec<(usize, char)>,
    tokens: Vec<Token>,
    errors: Vec<LexicalError>,
    pending: Option<PendingYGroup>,
    /// End offset of the most recent single-letter `<x>` token
    x_letter_end: Option<usize>,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str, preferences: &'a LexicalPreferences) -> Self {
        Self {
            source,
            source_map: SourceMap::new(source),
            preferences,
            chars: source.char_indices().collect(),
            tokens: Vec::new(),
            errors: Vec::new(),
            pending: None,
            x_letter_end: None,
        }
    }

    fn run(&mut self) {
        let mut index = 0;

        while index < self.chars.len() {
            let (offset, ch) = self.chars[index];

            index = match ch {
                ' ' | '\t' | '\n' | '\r' => index + 1,
                ',' => {
                    self.push_token(TokenKind::Comma, ",", offset, offset + 1);
                    index + 1
                }
                ';' => {
                    self.push_token(TokenKind::Semicolon, ";", offset, offset + 1);
                    index + 1
                }
                c if c.is_ascii_alphabetic() => {
                    let end = self.run_end(index, |c| c.is_ascii_alphabetic());
                    self.scan_word(index, end)
                }
                c if c.is_ascii_digit() => {
                    let end = self.run_end(index, |c| c.is_ascii_digit());
                    self.scan_number(index, end)
                }
                other => {
                    self.flush_pending();
                    let span = self.source_map.span(offset, offset + other.len_utf8());
                    self.push_error(LexicalError::UnrecognizedSymbol {
                        symbol: other,
                        span,
                    });
                    index + 1
                }
            };
        }

        self.flush_pending();

        if self.tokens.len() + 1 > MAX_TOKEN_COUNT {
            let span = self.source_map.span(0, self.source.len());
            self.push_error(LexicalError::TooManyTokens {
                count: self.tokens.len() + 1,
                span,
            });
        }

        let end = self.source.len();
        self.tokens.push(Token::new(
            TokenKind::Eof,
            "",
            self.source_map.span(end, end),
        ));
    }

    /// Char index one past the run starting at `start`
    fn run_end(&self, start: usize, in_run: impl Fn(char) -> bool) -> usize {
        let mut end = start;
        while end < self.chars.len() && in_run(self.chars[end].1) {
            end += 1;
        }
        end
    }

    /// Byte offset of a char index; one past the last char maps to the input length
    fn byte_at(&self, index: usize) -> usize {
        self.chars
            .get(index)
            .map(|(offset, _)| *offset)
            .unwrap_or(self.source.len())
    }

    fn scan_word(&mut self, start_index: usize, end_index: usize) -> usize {
        let start = self.byte_at(start_index);
        let end = self.byte_at(end_index);
        let source = self.source;
        let word = &source[start..end];

        if let Some(keyword) = Keyword::from_word(word) {
            self.push_token(TokenKind::Keyword(keyword), keyword.as_str(), start, end);
            return end_index;
        }

        if end_index - start_index > 1 {
            self.flush_pending();
            let span = self.source_map.span(start, end);
            self.push_error(LexicalError::InvalidAction {
                word: word.to_string(),
                span,
            });
            return end_index;
        }

        let letter = self.chars[start_index].1;

        if grammar::is_x_letter(letter) {
            let literal = letter.to_ascii_uppercase().to_string();
            self.push_token(TokenKind::XCoordinate, &literal, start, end);
            self.x_letter_end = Some(end);
            return end_index;
        }

        self.flush_pending();

        let followed_by_digit = self
            .chars
            .get(end_index)
            .map(|(_, c)| c.is_ascii_digit())
            .unwrap_or(false);

        if followed_by_digit {
            let digits_end_index = self.run_end(end_index, |c| c.is_ascii_digit());
            let context_end = self.byte_at(digits_end_index);
            let span = self.source_map.span(start, context_end);
            self.push_error(LexicalError::StrayVariable {
                letter,
                context: self.source[start..context_end].to_string(),
                span,
            });
            return digits_end_index;
        }

        let span = self.source_map.span(start, end);
        self.push_error(LexicalError::InvalidVariable { letter, span });
        end_index
    }

    fn scan_number(&mut self, start_index: usize, end_index: usize) -> usize {
        let start = self.byte_at(start_index);
        let end = self.byte_at(end_index);
        let source = self.source;
        let text = &source[start..end];

        if end_index - start_index > 1 || text == "0" {
            self.flush_pending();
            let span = self.source_map.span(start, end);
            self.push_error(LexicalError::UnrecognizedValue {
                text: text.to_string(),
                span,
            });
            return end_index;
        }

        let digit = self.chars[start_index].1;

        if grammar::is_y_digit(digit) {
            self.push_token(TokenKind::YCoordinate, text, start, end);
            return end_index;
        }

        // 6-9: report together with the <x> letter written directly before it
        let context_start = match self.x_letter_end {
            Some(letter_end) if letter_end == start => start - 1,
            _ => start,
        };

        match self.pending.as_mut() {
            Some(group) if start - group.last_offset <= INVALID_Y_GROUP_WINDOW => {
                group.values.push(digit);
                group.end = end;
                group.last_offset = start;
            }
            _ => {
                self.flush_pending();
                self.pending = Some(PendingYGroup {
                    values: vec![digit],
                    context_start,
                    end,
                    last_offset: start,
                });
            }
        }

        end_index
    }

    /// Keyword and coordinate tokens close an open 6-9 group; punctuation does not
    fn push_token(&mut self, kind: TokenKind, literal: &str, start: usize, end: usize) {
        if !matches!(kind, TokenKind::Comma | TokenKind::Semicolon) {
            self.flush_pending();
        }

        let token = Token::new(kind, literal, self.source_map.span(start, end));

        if self.preferences.log_token_details {
            log_debug!("Token produced", "token" => &token);
        }

        self.tokens.push(token);
    }

    fn push_error(&mut self, error: LexicalError) {
        log_debug!("Lexical error recorded",
            "code" => error.error_code(),
            "message" => &error
        );
        self.errors.push(error);
    }

    fn flush_pending(&mut self) {
        if let Some(group) = self.pending.take() {
            let span = self.source_map.span(group.context_start, group.end);
            self.errors.push(LexicalError::InvalidYValues {
                values: group.values,
                context: self.source[group.context_start..group.end].to_string(),
                span,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn tokenize(source: &str) -> LexicalOutput {
        LexicalAnalyzer::new().tokenize(source)
    }

    fn kinds(output: &LexicalOutput) -> Vec<TokenKind> {
        output.tokens.tokens().iter().map(|token| token.kind).collect()
    }

    #[test]
    fn test_valid_command_tokens() {
        let output = tokenize("HI bar D2,5; fill A2 BYE");

        assert!(!output.has_errors());
        assert_eq!(
            kinds(&output),
            vec![
                TokenKind::Keyword(Keyword::Hi),
                TokenKind::Keyword(Keyword::Bar),
                TokenKind::XCoordinate,
                TokenKind::YCoordinate,
                TokenKind::Comma,
                TokenKind::YCoordinate,
                TokenKind::Semicolon,
                TokenKind::Keyword(Keyword::Fill),
                TokenKind::XCoordinate,
                TokenKind::YCoordinate,
                TokenKind::Keyword(Keyword::Bye),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_keywords_and_letters_are_normalized() {
        let output = tokenize("hi FILL b3 bye");
        let literals: Vec<&str> = output
            .tokens
            .significant()
            .iter()
            .map(|token| token.literal.as_str())
            .collect();

        assert_eq!(literals, vec!["HI", "fill", "B", "3", "BYE"]);
    }

    #[test]
    fn test_eof_sits_at_input_length() {
        let source = "HI fill A2 BYE  ";
        let output = tokenize(source);
        let eof = output.tokens.tokens().last().unwrap();

        assert!(eof.is_eof());
        assert_eq!(eof.offset(), source.len());
        assert_eq!(output.tokens.count_kind(TokenKind::Eof), 1);
    }

    #[test]
    fn test_offsets_are_byte_offsets() {
        let output = tokenize("HI  fill A2 BYE");
        let fill = &output.tokens.tokens()[1];
        assert_eq!(fill.offset(), 4);
    }

    #[test]
    fn test_invalid_action_word() {
        let output = tokenize("HI fil A2 BYE");

        assert_eq!(output.errors.len(), 1);
        assert_matches!(&output.errors[0], LexicalError::InvalidAction { word, .. } if word == "fil");
        assert_eq!(output.errors[0].to_string(), "action `fil` not valid");
    }

    #[test]
    fn test_stray_variable_consumes_digits() {
        let output = tokenize("HI bar F2,3 BYE");

        assert_eq!(output.errors.len(), 1);
        assert_matches!(
            &output.errors[0],
            LexicalError::StrayVariable { letter: 'F', context, .. } if context == "F2"
        );
        assert_eq!(output.tokens.count_kind(TokenKind::YCoordinate), 1);
    }

    #[test]
    fn test_lone_invalid_letter() {
        let output = tokenize("HI fill Z BYE");

        assert_eq!(output.errors.len(), 1);
        assert_matches!(output.errors[0], LexicalError::InvalidVariable { letter: 'Z', .. });
    }

    #[test]
    fn test_grouped_invalid_y_values() {
        let output = tokenize("HI bar A9,8 BYE");

        assert_eq!(output.errors.len(), 1);
        assert_eq!(
            output.errors[0].to_string(),
            "invalid <y> value(s) `9`, `8` in `A9,8`: <y> must be one of 1-5"
        );
        assert_eq!(output.errors[0].span().slice("HI bar A9,8 BYE"), "A9,8");
    }

    #[test]
    fn test_distant_invalid_y_values_are_separate() {
        let output = tokenize("HI bar A9,   8 BYE");

        assert_eq!(output.errors.len(), 2);
        assert_matches!(
            &output.errors[1],
            LexicalError::InvalidYValues { values, context, .. } if values == &vec!['8'] && context == "8"
        );
    }

    #[test]
    fn test_invalid_y_after_letter_uses_letter_context() {
        let output = tokenize("HI fill A7 BYE");

        assert_matches!(
            &output.errors[0],
            LexicalError::InvalidYValues { context, .. } if context == "A7"
        );
    }

    #[test]
    fn test_invalid_y_after_keyword_stands_alone() {
        let output = tokenize("HI fill7 BYE");

        assert_eq!(output.errors.len(), 1);
        assert_matches!(
            &output.errors[0],
            LexicalError::InvalidYValues { values, context, .. } if values == &vec!['7'] && context == "7"
        );
        assert_eq!(output.tokens.count_kind(TokenKind::Keyword(Keyword::Fill)), 1);
    }

    #[test]
    fn test_invalid_y_group_closed_by_coordinate() {
        let output = tokenize("HI line A6,B7 BYE");

        assert_eq!(output.errors.len(), 2);
        assert_matches!(
            &output.errors[1],
            LexicalError::InvalidYValues { context, .. } if context == "B7"
        );
    }

    #[test]
    fn test_unrecognized_values() {
        let output = tokenize("HI fill A12 BYE 0");
        let texts: Vec<String> = output.errors.iter().map(|e| e.to_string()).collect();

        assert_eq!(texts, vec!["unrecognized value `12`", "unrecognized value `0`"]);
    }

    #[test]
    fn test_unrecognized_symbol_and_error_order() {
        let output = tokenize("HI # fil A9 BYE");
        let codes: Vec<&str> = output.errors.iter().map(|e| e.error_code().as_str()).collect();

        assert_eq!(codes, vec!["E025", "E022", "E023"]);
    }

    #[test]
    fn test_non_ascii_symbol_span() {
        let source = "HI fill A2 € BYE";
        let output = tokenize(source);

        assert_eq!(output.errors.len(), 1);
        assert_eq!(output.errors[0].span().slice(source), "€");
        assert_eq!(output.tokens.tokens().last().unwrap().offset(), source.len());
    }

    #[test]
    fn test_metrics() {
        let mut analyzer = LexicalAnalyzer::new();
        analyzer.tokenize("HI bar D2,5; fill A2 BYE");
        let metrics = analyzer.metrics();

        assert_eq!(metrics.total_tokens, 12);
        assert_eq!(metrics.error_count, 0);

        let mut detailed = LexicalAnalyzer::with_preferences(LexicalPreferences {
            collect_detailed_metrics: true,
            log_token_details: false,
        });
        detailed.tokenize("HI bar D2,5; fill A2 BYE");
        let detailed = detailed.metrics();
        assert_eq!(detailed.marker_tokens, 2);
        assert_eq!(detailed.action_tokens, 2);
        assert_eq!(detailed.coordinate_tokens, 5);
        assert_eq!(detailed.punctuation_tokens, 2);
    }

    #[test]
    fn test_into_result() {
        assert!(tokenize("HI fill A2 BYE").into_result().is_ok());

        let errors = tokenize("HI fil A9 BYE").into_result().unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
