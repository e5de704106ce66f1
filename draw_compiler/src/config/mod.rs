//! Configuration module for the draw compiler
//! Compile-time limits are generated from the workspace TOML configuration

// Generated by build.rs from config/<profile>.toml
include!(concat!(env!("OUT_DIR"), "/constants.rs"));

pub mod runtime;

pub use runtime::{ConfigError, RuntimeConfig};

/// Build information and configuration metadata
pub mod build_info {
    /// Returns the configuration profile used during build
    pub fn profile() -> &'static str {
        option_env!("DRAW_BUILD_PROFILE").unwrap_or("development")
    }

    /// Returns the configuration directory used during build
    pub fn config_dir() -> &'static str {
        option_env!("DRAW_CONFIG_DIR").unwrap_or("config")
    }

    /// Returns configuration source information
    pub fn source_info() -> String {
        format!("Generated from {}/{}.toml", config_dir(), profile())
    }
}

#[cfg(test)]
mod tests {
    use super::compile_time;

    #[test]
    fn test_generated_limits_are_sane() {
        assert!(compile_time::input::MAX_INPUT_LENGTH > 0);
        assert!(compile_time::lexical::INVALID_Y_GROUP_WINDOW >= 1);
        assert!(compile_time::syntax::MAX_PARSE_DEPTH >= 8);
        assert!(compile_time::syntax::MAX_LOOKAHEAD_TOKENS >= 7);
    }

    #[test]
    fn test_source_info_names_profile() {
        assert!(super::build_info::source_info().ends_with(".toml"));
    }
}
