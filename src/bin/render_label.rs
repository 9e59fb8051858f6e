//! `render_label` - render a content item from the command line
//!
//! Reads a content item as JSON, renders it, and prints the segments as JSON
//! along with the style each segment is drawn with.
//! With `--tap` it also resolves a tap at a character offset and prints the
//! bound action and the command it maps to.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin render_label -- item.json
//! cargo run --bin render_label -- --tap 25 < item.json
//! cargo run --bin render_label -- --sentinel '#' --log debug item.json
//! ```

use richlabel::{Command, ContentItem, LogLevel, RenderOptions, Renderer, set_log_callback};
use serde_json::json;
use std::ffi::OsString;
use std::io::{self, Read};
use std::path::PathBuf;

// ============================================================================
// CLI Parsing
// ============================================================================

const HELP_TEXT: &str = "render_label - render a rich text content item

USAGE:
    render_label [OPTIONS] [FILE]

ARGS:
    [FILE]                  Content item JSON (default: read stdin)

OPTIONS:
    -h, --help              Print this help message and exit
    --sentinel <C>          Placeholder delimiter (default: $)
    --tap <N>               Resolve a tap at character offset N
    --keep-empty            Keep empty fragments around the styled run
    --log <LEVEL>           Print library logs at or above LEVEL to stderr:
                            debug, info, warn, error (default: off)

EXAMPLES:
    render_label item.json              # Print rendered segments
    render_label --tap 25 < item.json   # Also resolve a tap
";

/// Command line configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Input file; stdin when absent.
    pub input: Option<PathBuf>,
    /// Placeholder delimiter override.
    pub sentinel: Option<char>,
    /// Character offset to resolve.
    pub tap: Option<usize>,
    /// Keep empty before/after fragments.
    pub keep_empty: bool,
    /// Minimum level of library logs echoed to stderr.
    pub log_level: Option<LogLevel>,
}

/// Result of parsing the command line.
#[derive(Debug)]
pub enum ParseResult {
    /// Successfully parsed configuration.
    Config(Config),
    /// User requested help.
    Help,
    /// Parse error with message.
    Error(String),
}

impl Config {
    /// Parse configuration from command line arguments.
    pub fn from_args<I>(args: I) -> ParseResult
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        // Skip program name
        args.next();

        while let Some(arg) = args.next() {
            let arg_str = arg.to_string_lossy();

            match arg_str.as_ref() {
                "-h" | "--help" => return ParseResult::Help,

                "--sentinel" => {
                    let value = match args.next() {
                        Some(v) => v.to_string_lossy().to_string(),
                        None => {
                            return ParseResult::Error("--sentinel requires a value".to_string());
                        }
                    };
                    let mut chars = value.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => config.sentinel = Some(c),
                        _ => {
                            return ParseResult::Error(format!(
                                "Invalid --sentinel value: {value} (must be a single character)"
                            ));
                        }
                    }
                }

                "--tap" => {
                    let value = match args.next() {
                        Some(v) => v.to_string_lossy().to_string(),
                        None => return ParseResult::Error("--tap requires a value".to_string()),
                    };
                    match value.parse::<usize>() {
                        Ok(n) => config.tap = Some(n),
                        Err(_) => {
                            return ParseResult::Error(format!("Invalid --tap value: {value}"));
                        }
                    }
                }

                "--keep-empty" => config.keep_empty = true,

                "--log" => {
                    let value = match args.next() {
                        Some(v) => v.to_string_lossy().to_string(),
                        None => return ParseResult::Error("--log requires a value".to_string()),
                    };
                    match parse_level(&value) {
                        Some(level) => config.log_level = Some(level),
                        None => {
                            return ParseResult::Error(format!(
                                "Unknown --log level: {value} (valid: debug, info, warn, error)"
                            ));
                        }
                    }
                }

                other => {
                    if other.starts_with('-') && other != "-" {
                        return ParseResult::Error(format!("Unknown option: {other}"));
                    }
                    if config.input.is_some() {
                        return ParseResult::Error(format!("Unexpected argument: {other}"));
                    }
                    if other != "-" {
                        config.input = Some(PathBuf::from(other));
                    }
                }
            }
        }

        ParseResult::Config(config)
    }

    fn render_options(&self) -> RenderOptions {
        let mut options = RenderOptions::default().keep_empty_fragments(self.keep_empty);
        if let Some(sentinel) = self.sentinel {
            options = options.sentinel(sentinel);
        }
        options
    }
}

fn parse_level(s: &str) -> Option<LogLevel> {
    match s.to_lowercase().as_str() {
        "debug" => Some(LogLevel::Debug),
        "info" => Some(LogLevel::Info),
        "warn" | "warning" => Some(LogLevel::Warn),
        "error" => Some(LogLevel::Error),
        _ => None,
    }
}

const fn level_rank(level: LogLevel) -> u8 {
    match level {
        LogLevel::Debug => 0,
        LogLevel::Info => 1,
        LogLevel::Warn => 2,
        LogLevel::Error => 3,
    }
}

// ============================================================================
// Entry Point
// ============================================================================

fn main() {
    match Config::from_args(std::env::args_os()) {
        ParseResult::Config(config) => {
            if let Err(err) = run(&config) {
                eprintln!("Error: {err}");
                std::process::exit(1);
            }
        }
        ParseResult::Help => print!("{HELP_TEXT}"),
        ParseResult::Error(msg) => {
            eprintln!("Error: {msg}");
            eprintln!("Run with --help for usage information.");
            std::process::exit(2);
        }
    }
}

fn run(config: &Config) -> richlabel::Result<()> {
    if let Some(min) = config.log_level {
        set_log_callback(move |level, message| {
            if level_rank(level) >= level_rank(min) {
                eprintln!("[{level:?}] {message}");
            }
        });
    }

    let json = read_input(config)?;
    let item = ContentItem::from_json(&json)?;
    let renderer = Renderer::new(config.render_options());
    let rendered = renderer.render(&item)?;

    let styles: Vec<_> = rendered
        .segments
        .iter()
        .map(|seg| rendered.effective_style(seg))
        .collect();
    let mut output = json!({ "rendered": rendered, "styles": styles });
    if let Some(offset) = config.tap {
        output["tap"] = match rendered.resolve_tap(offset) {
            Some(action) => json!({
                "offset": offset,
                "action": action,
                "command": Command::from_action(action),
            }),
            None => json!({ "offset": offset, "action": null }),
        };
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn read_input(config: &Config) -> io::Result<String> {
    match &config.input {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
