//! Leafmark - inline markdown to HTML.
//!
//! This binary provides the CLI interface to the leafmark library,
//! reading lines from files or stdin and printing one HTML element per line.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, trace, LevelFilter};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use leafmark_config::{Config, OutputConfig};
use leafmark_core::Result;
use leafmark_html::{Node, ParentNode};
use leafmark_parser::InlineParser;

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    setup_logging(&cli.log_level);
    info!("Leafmark v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    debug!("Loaded config: {:?}", config);

    let parser = InlineParser::with_rules(config.inline.delimiters.clone());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.should_read_stdin() {
        info!("Reading from stdin");
        render_lines(io::stdin().lock(), "<stdin>", &parser, &config.output, &mut out)?;
    } else {
        for path in &cli.files {
            info!("Processing file: {}", path.display());
            let reader = BufReader::new(File::open(path)?);
            let source = path.display().to_string();
            render_lines(reader, &source, &parser, &config.output, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Load configuration and apply CLI overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load_with_override(cli.config.as_deref())?;

    if let Some(ref tag) = cli.tag {
        debug!("Overriding paragraph tag: {}", tag);
        config.output.paragraph_tag = tag.clone();
        config.validate()?;
    }

    Ok(config)
}

/// Render every line of `reader` as one wrapped element per output line.
///
/// The first failing line stops rendering; it is logged as `source:line`.
fn render_lines<R: BufRead, W: Write>(
    reader: R,
    source: &str,
    parser: &InlineParser,
    output: &OutputConfig,
    out: &mut W,
) -> Result<()> {
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        trace!("Input line: {}", line);

        if output.skip_blank && line.trim().is_empty() {
            continue;
        }

        let html = render_line(&line, parser, &output.paragraph_tag).map_err(|e| {
            error!("{}:{}: {}", source, index + 1, e);
            e
        })?;
        writeln!(out, "{}", html)?;
    }
    Ok(())
}

/// Parse one line and wrap its leaves in a `tag` element.
fn render_line(line: &str, parser: &InlineParser, tag: &str) -> Result<String> {
    let children = parser
        .to_leaves(line)?
        .into_iter()
        .map(Node::from)
        .collect();
    ParentNode::new(tag, children).to_html()
}

#[cfg(test)]
mod tests {
    use super::*;
    use leafmark_core::LeafmarkError;
    use std::io::Cursor;

    fn render(input: &str, output: &OutputConfig) -> Result<String> {
        let mut out = Vec::new();
        render_lines(Cursor::new(input), "test", &InlineParser::new(), output, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_render_line() {
        let html = render_line("a **b** `c`", &InlineParser::new(), "p").unwrap();
        assert_eq!(html, "<p>a <b>b</b> <code>c</code></p>");
    }

    #[test]
    fn test_render_lines_skips_blank() {
        let html = render("first\n\n   \nsecond _line_\n", &OutputConfig::default()).unwrap();
        assert_eq!(html, "<p>first</p>\n<p>second <i>line</i></p>\n");
    }

    #[test]
    fn test_render_lines_keeps_blank() {
        let output = OutputConfig {
            paragraph_tag: "li".into(),
            skip_blank: false,
        };
        let html = render("one\n\ntwo", &output).unwrap();
        assert_eq!(html, "<li>one</li>\n<li></li>\n<li>two</li>\n");
    }

    #[test]
    fn test_render_lines_stops_on_unbalanced() {
        let err = render("ok\nbroken **bold\nnever reached", &OutputConfig::default()).unwrap_err();
        assert!(matches!(err, LeafmarkError::UnbalancedDelimiter { .. }));
    }

    #[test]
    fn test_load_config_tag_override() {
        let cli = Cli::parse_from(["lm", "-t", "li", "-c", "[output]\nSkipBlank = false"]);
        let config = load_config(&cli).unwrap();
        assert_eq!(config.output.paragraph_tag, "li");
        assert!(!config.output.skip_blank);
    }

    #[test]
    fn test_load_config_rejects_empty_tag() {
        let cli = Cli::parse_from(["lm", "-t", "", "-c", "[output]"]);
        assert!(matches!(load_config(&cli), Err(LeafmarkError::Config(_))));
    }
}
