//! Coded events emitted through the global logger
//!
//! Lives in its own test binary: the global logger is set once per process.

use draw_compiler::logging::{
    self, codes, LogLevel, LoggingService, MemoryLogger, MultiLogger,
};
use draw_compiler::process_input;
use std::sync::{Arc, OnceLock};

static MEMORY: OnceLock<Arc<MemoryLogger>> = OnceLock::new();

fn memory_logger() -> &'static MemoryLogger {
    MEMORY.get_or_init(|| {
        let (multi, memory) = MultiLogger::new(LogLevel::Debug).with_memory();
        let service = LoggingService::new(Arc::new(multi), LogLevel::Debug);
        logging::init_global_logging_with_service(Arc::new(service)).unwrap();
        memory
    })
}

#[test]
fn logger_is_installed_once() {
    memory_logger();

    assert!(logging::is_initialized());
    let second = LoggingService::new(Arc::new(MemoryLogger::new()), LogLevel::Debug);
    assert!(logging::init_global_logging_with_service(Arc::new(second)).is_err());
}

#[test]
fn accepted_command_logs_every_stage() {
    let memory = memory_logger();

    process_input("HI bar D2,5; fill A2 BYE").unwrap();

    assert!(memory.has_success_with_code(codes::success::TOKENIZATION_COMPLETE));
    assert!(memory.has_success_with_code(codes::success::PARSE_TREE_COMPLETE));
    assert!(memory.has_success_with_code(codes::success::DERIVATION_COMPLETE));
    assert!(memory.has_success_with_code(codes::success::INPUT_ACCEPTED));
}

#[test]
fn misspelled_action_logs_lexical_code() {
    let memory = memory_logger();

    process_input("HI fil A2 BYE").unwrap_err();

    assert!(memory.has_error_with_code(codes::lexical::INVALID_ACTION));
}

#[test]
fn missing_comma_logs_syntax_code() {
    let memory = memory_logger();

    process_input("HI bar A1 BYE").unwrap_err();

    assert!(memory.has_error_with_code(codes::syntax::MISSING_COMMA));
    let event = memory
        .get_errors()
        .into_iter()
        .find(|event| event.code == codes::syntax::MISSING_COMMA)
        .unwrap();
    assert_eq!(event.category(), "Syntax");
}

#[test]
fn overlong_input_logs_before_lexing() {
    let memory = memory_logger();
    let input = format!("HI {} BYE", "fill A2; ".repeat(200));

    process_input(&input).unwrap_err();

    assert!(memory.has_error_with_code(codes::input::INPUT_TOO_LONG));
}
