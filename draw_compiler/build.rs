// build.rs - TOML-driven compile-time limit generation
use std::env;
use std::fs;
use std::path::Path;

#[derive(serde::Deserialize)]
struct CompileTimeConfig {
    input: InputLimits,
    lexical: LexicalLimits,
    syntax: SyntaxLimits,
    logging: LoggingLimits,
}

#[derive(serde::Deserialize)]
struct InputLimits {
    max_input_length: usize,
}

#[derive(serde::Deserialize)]
struct LexicalLimits {
    max_token_count: usize,
    invalid_y_group_window: usize,
}

#[derive(serde::Deserialize)]
struct SyntaxLimits {
    max_parse_depth: usize,
    max_lookahead_tokens: usize,
}

#[derive(serde::Deserialize)]
struct LoggingLimits {
    log_buffer_size: usize,
    max_log_message_length: usize,
}

fn main() {
    println!("cargo:rerun-if-env-changed=DRAW_BUILD_PROFILE");
    println!("cargo:rerun-if-env-changed=DRAW_CONFIG_DIR");

    let profile = env::var("DRAW_BUILD_PROFILE").unwrap_or_else(|_| "development".to_string());
    let config_dir = env::var("DRAW_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    // Workspace root is the parent of draw_compiler
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = Path::new(&manifest_dir)
        .parent()
        .expect("Could not find workspace root (parent directory)");

    let config_path = workspace_root
        .join(&config_dir)
        .join(format!("{}.toml", profile));

    println!("cargo:rerun-if-changed={}", config_path.display());

    if !config_path.exists() {
        panic!(
            "Configuration file not found: {}\nLooking for: {}/{}/{}.toml",
            config_path.display(),
            workspace_root.display(),
            config_dir,
            profile
        );
    }

    let config_content = fs::read_to_string(&config_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", config_path.display(), e));

    let config: CompileTimeConfig = toml::from_str(&config_content)
        .unwrap_or_else(|e| panic!("Invalid TOML in {}: {}", config_path.display(), e));

    validate_limits(&config);
    generate_constants(&config, &profile);
}

fn validate_limits(config: &CompileTimeConfig) {
    const ABSOLUTE_MAX_INPUT_LENGTH: usize = 1_000_000;

    if config.input.max_input_length == 0
        || config.input.max_input_length > ABSOLUTE_MAX_INPUT_LENGTH
    {
        panic!("LIMITS: max_input_length must be between 1 and {ABSOLUTE_MAX_INPUT_LENGTH}");
    }

    if config.lexical.invalid_y_group_window == 0 {
        panic!("LIMITS: invalid_y_group_window must be at least 1");
    }

    if config.syntax.max_parse_depth < 8 {
        panic!("LIMITS: max_parse_depth too small to parse a single action");
    }

    // Longest action is `line <x><y>,<x><y>` followed by `;`
    if config.syntax.max_lookahead_tokens < 7 {
        panic!("LIMITS: max_lookahead_tokens must cover the widest action signature");
    }

    if config.logging.log_buffer_size < 100 {
        panic!("LIMITS: log_buffer_size too small (min: 100)");
    }
}

fn generate_constants(config: &CompileTimeConfig, profile: &str) {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("constants.rs");

    let constants_code = format!(
        r#"
// Generated compile-time constants from TOML configuration
// Profile: {}
// DO NOT EDIT - Generated by build.rs

pub mod compile_time {{
    pub mod input {{
        pub const MAX_INPUT_LENGTH: usize = {};
    }}

    pub mod lexical {{
        pub const MAX_TOKEN_COUNT: usize = {};
        pub const INVALID_Y_GROUP_WINDOW: usize = {};
    }}

    pub mod syntax {{
        pub const MAX_PARSE_DEPTH: usize = {};
        pub const MAX_LOOKAHEAD_TOKENS: usize = {};
    }}

    pub mod logging {{
        pub const LOG_BUFFER_SIZE: usize = {};
        pub const MAX_LOG_MESSAGE_LENGTH: usize = {};
    }}
}}
"#,
        profile,
        config.input.max_input_length,
        config.lexical.max_token_count,
        config.lexical.invalid_y_group_window,
        config.syntax.max_parse_depth,
        config.syntax.max_lookahead_tokens,
        config.logging.log_buffer_size,
        config.logging.max_log_message_length,
    );

    fs::write(output_path, constants_code).unwrap();
}
