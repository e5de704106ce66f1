use assert_matches::assert_matches;
use draw_compiler::grammar::Keyword;
use draw_compiler::lexical::{self, LexicalAnalyzer, LexicalError};
use draw_compiler::render::{self, TreeStyle};
use draw_compiler::{process_input, syntax, PipelineError, SyntaxError, TokenKind};
use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

const SAMPLE: &str = "HI bar D2,5; fill A2; line B4,D2 BYE";

const LETTERS: [char; 5] = ['A', 'B', 'C', 'D', 'E'];
const DIGITS: [char; 5] = ['1', '2', '3', '4', '5'];
const INTERIOR_LABELS: [&str; 5] = ["<graph>", "<draw>", "<action>", "<x>", "<y>"];

/// Every well-formed action in canonical spelling
fn every_action() -> Vec<String> {
    let mut actions = Vec::new();

    for x in LETTERS {
        for y in DIGITS {
            actions.push(format!("fill {x}{y}"));
            for y2 in DIGITS {
                actions.push(format!("bar {x}{y},{y2}"));
            }
            for x2 in LETTERS {
                for y2 in DIGITS {
                    actions.push(format!("line {x}{y},{x2}{y2}"));
                }
            }
        }
    }

    actions
}

fn roll(rng: &mut Xoshiro256StarStar, sides: u32) -> usize {
    (rng.next_u32() % sides) as usize
}

/// The same command with random letter case and extra blanks between tokens
fn scramble(canonical: &str, rng: &mut Xoshiro256StarStar) -> String {
    let mut scrambled = " ".repeat(roll(rng, 3));

    for ch in canonical.chars() {
        match ch {
            ' ' => scrambled.push_str(&" ".repeat(1 + roll(rng, 3))),
            ',' | ';' => {
                if roll(rng, 2) == 0 {
                    scrambled.push(' ');
                }
                scrambled.push(ch);
                if roll(rng, 2) == 0 {
                    scrambled.push('\t');
                }
            }
            c if roll(rng, 2) == 0 => scrambled.push(c.to_ascii_lowercase()),
            c => scrambled.push(c.to_ascii_uppercase()),
        }
    }

    scrambled.push_str(&" ".repeat(roll(rng, 3)));
    scrambled
}

fn assert_recognized(input: &str, canonical: &str, actions: usize) {
    let result = process_input(input)
        .unwrap_or_else(|error| panic!("{input:?} rejected: {error}"));

    assert_eq!(result.sentence, canonical);
    assert_eq!(result.derivation.last(), Some(&result.sentence));

    let action_keywords = result
        .tokens
        .tokens()
        .iter()
        .filter(|token| token.kind.is_action_keyword())
        .count();
    let semicolons = result.tokens.count_kind(TokenKind::Semicolon);
    let labeled = result.tree.count_labeled("<action>");
    assert_eq!(labeled, actions, "{input:?}");
    assert_eq!(labeled, action_keywords, "{input:?}");
    assert_eq!(labeled, semicolons + 1, "{input:?}");

    let interior: usize = INTERIOR_LABELS
        .iter()
        .map(|label| result.tree.count_labeled(label))
        .sum();
    assert_eq!(result.derivation.len(), interior + 1, "{input:?}");
}

#[test]
fn every_single_action_is_recognized() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(0x00d2_a3b4);

    for action in every_action() {
        let canonical = format!("HI {action} BYE");
        assert_recognized(&canonical, &canonical, 1);
        assert_recognized(&scramble(&canonical, &mut rng), &canonical, 1);
    }
}

#[test]
fn generated_sequences_are_recognized() {
    let pool = every_action();
    let mut rng = Xoshiro256StarStar::seed_from_u64(0x5eed_0001);

    for _ in 0..300 {
        let length = 2 + roll(&mut rng, 4);
        let chosen: Vec<&str> = (0..length)
            .map(|_| pool[roll(&mut rng, pool.len() as u32)].as_str())
            .collect();
        let canonical = format!("HI {} BYE", chosen.join("; "));

        assert_recognized(&canonical, &canonical, length);
        assert_recognized(&scramble(&canonical, &mut rng), &canonical, length);
    }
}

#[test]
fn sample_command_is_accepted() {
    let output = LexicalAnalyzer::new().tokenize(SAMPLE);
    assert!(output.errors.is_empty());

    let result = syntax::parse(output.tokens);
    assert!(result.is_accepted());
    assert_eq!(result.final_step(), Some(SAMPLE));
    assert_eq!(result.derivation[0], "<graph>");
}

#[test]
fn misspelled_action_is_one_lexical_error() {
    let output = LexicalAnalyzer::new().tokenize("HI fil A2 BYE");

    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].to_string(), "action `fil` not valid");
    assert_eq!(
        output
            .tokens
            .tokens()
            .iter()
            .filter(|token| token.kind.is_action_keyword())
            .count(),
        0
    );
}

#[test]
fn out_of_range_letter_blocks_derivation() {
    let error = process_input("HI bar F2,3 BYE").unwrap_err();

    assert_matches!(&error, PipelineError::Lexical(errors) => {
        assert_matches!(&errors.errors()[0], LexicalError::StrayVariable { letter: 'F', .. });
        assert!(errors.errors()[0].to_string().contains("`F`"));
    });
    assert!(error.derivation().is_empty());
}

#[test]
fn close_out_of_range_digits_are_one_error() {
    let errors = lexical::tokenize("HI bar A9,8 BYE").unwrap_err();

    assert_eq!(errors.len(), 1);
    let message = errors.errors()[0].to_string();
    assert!(message.contains("`9`"));
    assert!(message.contains("`8`"));
}

#[test]
fn missing_comma_names_coordinate() {
    let error = process_input("HI bar A1 BYE").unwrap_err();

    assert_matches!(
        &error,
        PipelineError::Syntax { error: SyntaxError::MissingComma { after, .. }, .. } if after == "A1"
    );
    assert!(error.to_string().contains("expected ',' after `A1`"));
}

#[test]
fn missing_semicolon_fails_at_next_action() {
    let input = "HI bar A1,2 fill B3 BYE";
    let error = process_input(input).unwrap_err();

    assert_matches!(&error, PipelineError::Syntax { error, .. } => {
        assert_matches!(error, SyntaxError::MissingEndMarker { .. });
        assert_eq!(error.offset(), input.find("fill"));
    });
}

#[test]
fn sentence_matches_normalized_input() {
    let result = process_input("  hi   BAR d2 , 5 ;FILL a2;line b4,d2   bye ").unwrap();

    assert_eq!(result.sentence, SAMPLE);
    assert_eq!(result.derivation.last().map(String::as_str), Some(SAMPLE));
}

#[test]
fn final_step_has_no_non_terminals() {
    for input in [SAMPLE, "HI fill E5 BYE", "HI line A1,B2; bar C3,4 BYE"] {
        let result = process_input(input).unwrap();
        let last = result.derivation.last().unwrap();

        assert!(!last.contains('<'), "unexpanded symbol in {last}");
        assert_eq!(last, &result.sentence);
    }
}

#[test]
fn action_count_matches_keywords_and_separators() {
    let result = process_input(SAMPLE).unwrap();

    let action_keywords = result
        .tokens
        .tokens()
        .iter()
        .filter(|token| token.kind.is_action_keyword())
        .count();
    let semicolons = result.tokens.count_kind(TokenKind::Semicolon);

    assert_eq!(result.action_count(), 3);
    assert_eq!(result.action_count(), action_keywords);
    assert_eq!(result.action_count(), semicolons + 1);
}

#[test]
fn keywords_are_case_insensitive() {
    let tokens = lexical::tokenize("Hi Bar a1,2 bYe").unwrap();
    let kinds: Vec<TokenKind> = tokens.significant().iter().map(|token| token.kind).collect();

    assert_eq!(kinds[0], TokenKind::Keyword(Keyword::Hi));
    assert_eq!(kinds[1], TokenKind::Keyword(Keyword::Bar));
    assert_eq!(tokens.sentence(), "HI bar A1,2 BYE");
}

#[test]
fn lexical_errors_are_reported_in_input_order() {
    let output = LexicalAnalyzer::new().tokenize("HI @ bar Z9 A12 line A7 BYE");
    let codes: Vec<&str> = output
        .errors
        .iter()
        .map(|error| error.error_code().as_str())
        .collect();

    assert_eq!(codes, vec!["E025", "E020", "E024", "E023"]);
}

#[test]
fn rendered_tree_holds_every_token() {
    let result = process_input("HI fill A2 BYE").unwrap();

    for style in [TreeStyle::Indented, TreeStyle::Centered] {
        let rendered = render::render_tree(Some(&result.tree), style);
        for literal in ["<graph>", "HI", "<draw>", "<action>", "fill", "A", "2", "BYE"] {
            assert!(rendered.contains(literal), "{literal} missing from\n{rendered}");
        }
    }
}
