//! Command-line interface for templex
//! This binary tokenizes template files and prints the classified spans.
//!
//! Usage:
//!   templex tokenize `<path>` [--lexer `<name>`] [--format `<format>`] [--config `<file>`]
//!   templex list-lexers

use clap::{Arg, Command};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use templex::templex::config::DelimiterConfig;
use templex::templex::lexers::fallback::{GenericCode, GenericMarkup};
use templex::templex::lexers::{CompositeLexer, LexError, LexerRegistry};
use templex::templex::token::Token;

fn main() {
    let matches = Command::new("templex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for highlighting templated markup")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tokenize")
                .about("Tokenize a template file and print the classified spans")
                .arg(
                    Arg::new("path")
                        .help("Path to the template file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("lexer")
                        .long("lexer")
                        .short('l')
                        .help("Registered lexer to use (see list-lexers)")
                        .default_value("template"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('plain' or 'json')")
                        .default_value("plain"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("YAML file describing a custom delimiter table"),
                ),
        )
        .subcommand(Command::new("list-lexers").about("List registered lexers"))
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("tokenize", tokenize_matches)) => {
            let path = tokenize_matches.get_one::<String>("path").unwrap();
            let lexer = tokenize_matches.get_one::<String>("lexer").unwrap();
            let format = tokenize_matches.get_one::<String>("format").unwrap();
            let config = tokenize_matches.get_one::<String>("config");
            handle_tokenize_command(path, lexer, format, config.map(String::as_str));
        }
        Some(("list-lexers", _)) => {
            handle_list_lexers_command();
        }
        _ => unreachable!(),
    }
}

/// Handle the tokenize command
fn handle_tokenize_command(path: &str, lexer_name: &str, format: &str, config: Option<&str>) {
    let file_path = PathBuf::from(path);
    let source = match std::fs::read_to_string(&file_path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: cannot read {}: {}", file_path.display(), e);
            std::process::exit(1);
        }
    };

    let result = match config {
        Some(config_path) => tokenize_with_config(config_path, &source),
        None => tokenize_with_registry(lexer_name, &source),
    };
    let tokens = match result {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match format {
        "plain" => {
            for token in &tokens {
                println!("{}", token);
            }
        }
        "json" => match serde_json::to_string_pretty(&tokens) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        other => {
            eprintln!("Error: unknown format '{}', expected 'plain' or 'json'", other);
            std::process::exit(1);
        }
    }
}

/// Tokenize with a custom delimiter table loaded from YAML
fn tokenize_with_config(config_path: &str, source: &str) -> Result<Vec<Token>, LexError> {
    let config = DelimiterConfig::load(Path::new(config_path))?;
    let delimiters = config.to_delimiter_set()?;
    let lexer = CompositeLexer::new(
        config.name.clone(),
        delimiters,
        Arc::new(GenericMarkup),
        Arc::new(GenericCode),
    );
    Ok(lexer.tokenize(source))
}

/// Tokenize with a lexer registered under `name`
fn tokenize_with_registry(name: &str, source: &str) -> Result<Vec<Token>, LexError> {
    LexerRegistry::init_defaults();
    let registry = LexerRegistry::global().lock().expect("lexer registry poisoned");
    registry.tokenize(name, source)
}

/// Handle the list-lexers command
fn handle_list_lexers_command() {
    LexerRegistry::init_defaults();
    let registry = LexerRegistry::global().lock().expect("lexer registry poisoned");
    for name in registry.available() {
        println!("{}", name);
    }
}
