//! Command-line interface for Leafmark.

use clap::Parser;
use std::path::PathBuf;

/// Leafmark - inline markdown to HTML.
///
/// Every input line is split into styled runs and wrapped in a paragraph
/// element. Block-level markdown is left to the caller.
#[derive(Parser, Debug)]
#[command(
    name = "lm",
    author = "Leafmark Contributors",
    version,
    about = "Convert inline markdown lines into HTML",
    after_help = "Examples:\n  \
                  echo 'some **bold** text' | lm\n  \
                  lm notes.md\n  \
                  lm -t li -c '[output]\nSkipBlank = false' items.md"
)]
pub struct Cli {
    /// Input files to process (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Tag wrapping each line (overrides the config)
    #[arg(short = 't', long = "tag")]
    pub tag: Option<String>,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }
}

/// Show paths information.
pub fn show_paths() {
    use leafmark_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}
