use clap::Parser;
use draw_compiler::config::runtime::{parse_log_level, DisplayPreferences, RuntimeConfig};
use draw_compiler::logging::{self, codes};
use draw_compiler::render::{self, TreeStyle};
use draw_compiler::{grammar, pipeline, PipelineError, PipelineOutput, PipelineResult};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "draw_compiler")]
#[command(about = "Recognizer for HI ... BYE drawing commands")]
#[command(version)]
struct Cli {
    /// Drawing command to recognize; starts the interactive prompt when omitted
    #[arg(value_name = "COMMAND")]
    input: Option<String>,

    /// Runtime configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Parse tree layout: indented or centered
    #[arg(long, value_name = "STYLE", value_parser = parse_tree_style)]
    tree_style: Option<TreeStyle>,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,

    /// List the tokens of accepted commands
    #[arg(long)]
    tokens: bool,

    /// Write log events to stderr as JSON lines
    #[arg(long)]
    structured_logs: bool,

    /// Minimum log level written to stderr (error, warning, info, debug)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Print the grammar and exit
    #[arg(long)]
    grammar: bool,
}

fn parse_tree_style(value: &str) -> Result<TreeStyle, String> {
    TreeStyle::parse(value).ok_or_else(|| format!("unknown tree style '{}'", value))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.grammar {
        print!("{}", grammar::help_text());
        return Ok(());
    }

    let config = load_config(&cli)?;

    // Initialize global logging system
    logging::config::init_runtime_preferences(config.logging.clone())?;
    logging::init_global_logging()?;
    draw_compiler::lexical::validate_lexical_setup()?;

    if let Some(path) = &cli.config {
        draw_compiler::log_success!(codes::success::CONFIG_LOADED, "Runtime configuration loaded",
            "path" => path.display()
        );
    }

    match &cli.input {
        Some(input) => {
            if !run_once(input, &config, cli.json) {
                std::process::exit(1);
            }
        }
        None => run_prompt(&config, cli.json)?,
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<RuntimeConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => RuntimeConfig::from_toml_file(path)?,
        None => RuntimeConfig::default(),
    };

    if let Some(style) = cli.tree_style {
        config.display.tree_style = style;
    }
    if cli.tokens {
        config.display.show_tokens = true;
    }
    if cli.structured_logs {
        config.logging.use_structured_logging = true;
        config.logging.enable_console_logging = true;
    }
    if let Some(level) = &cli.log_level {
        config.logging.min_log_level =
            parse_log_level(level).ok_or_else(|| format!("unknown log level '{}'", level))?;
        config.logging.enable_console_logging = true;
    }

    Ok(config)
}

fn run_prompt(config: &RuntimeConfig, json: bool) -> io::Result<()> {
    println!("Drawing command recognizer v{}", env!("CARGO_PKG_VERSION"));
    println!("Type a command such as `HI fill A2 BYE`, `help` for the grammar, `quit` to leave.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("draw> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line?;

        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            "help" | "grammar" => print!("{}", grammar::help_text()),
            input => {
                run_once(input, config, json);
            }
        }
    }

    Ok(())
}

/// Recognize one command and print the outcome; true when accepted
fn run_once(input: &str, config: &RuntimeConfig, json: bool) -> bool {
    match pipeline::process_input_with_config(input, config) {
        Ok(result) => {
            if json {
                print_json(&PipelineOutput::from_result(&result));
            } else {
                print_accepted(&result, &config.display);
            }
            true
        }
        Err(error) => {
            if json {
                print_json(&PipelineOutput::from_error(input.trim(), &error));
            } else {
                print_rejected(input.trim(), &error, &config.display);
            }
            false
        }
    }
}

fn print_json(output: &PipelineOutput) {
    match output.to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize report: {}", e),
    }
}

fn print_accepted(result: &PipelineResult, display: &DisplayPreferences) {
    println!("Accepted: {}", result.sentence);

    if display.show_tokens {
        println!();
        println!("Tokens:");
        for token in result.tokens.significant() {
            println!("  {}", token);
        }
    }

    if display.show_derivation {
        println!();
        println!("Derivation:");
        println!("{}", render::format_derivation(&result.derivation));
    }

    if display.show_tree {
        println!();
        println!("Parse tree:");
        println!(
            "{}",
            render::render_tree(Some(&result.tree), display.tree_style)
        );
    }

    println!();
}

fn print_rejected(input: &str, error: &PipelineError, display: &DisplayPreferences) {
    match error {
        PipelineError::InputTooLong { .. } => {
            eprintln!("Rejected: [{}] {}", error.error_code(), error);
        }
        PipelineError::Lexical(errors) => {
            eprintln!("Rejected: {} lexical error(s)", errors.len());
            if display.show_error_context {
                eprint!("{}", render::format_lexical_errors(input, errors.errors()));
            } else {
                for lexical_error in errors.errors() {
                    eprintln!("  [{}] {}", lexical_error.error_code(), lexical_error);
                }
            }
        }
        PipelineError::Syntax { error: syntax_error, derivation } => {
            eprintln!("Rejected: syntax error");
            if display.show_error_context {
                eprint!("{}", render::format_syntax_error(input, syntax_error));
            } else {
                eprintln!("  [{}] {}", syntax_error.error_code(), syntax_error);
            }

            if display.show_derivation && derivation.len() > 1 {
                eprintln!();
                eprintln!("Derivation before the error:");
                eprintln!("{}", render::format_derivation(derivation));
            }
        }
    }

    eprintln!();
}
