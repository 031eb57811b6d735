//! `routegen generate`: print, write or check the generated client.

use std::fmt::Write as _;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::{env, fs};

use clap::Args;
use routegen_core::generate;
use similar::{ChangeTag, TextDiff};
use tracing::info;

use crate::common::{DialectArg, MethodNamingArg, QuoteArg, SourceArgs, load_config, load_routes};
use crate::run_command;

/// Arguments of `routegen generate`.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Manifest and layout.
    #[command(flatten)]
    pub source: SourceArgs,
    /// Write the client to this file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,
    /// Fail with a diff when the output file is out of date; writes nothing
    #[arg(long, requires = "out")]
    pub check: bool,
    /// Spaces per indentation level
    #[arg(long, value_name = "N")]
    pub indent: Option<usize>,
    /// String literal quotes
    #[arg(long, value_enum)]
    pub quote: Option<QuoteArg>,
    /// Output language
    #[arg(long, value_enum)]
    pub dialect: Option<DialectArg>,
    /// Spelling of the generated verb methods
    #[arg(long = "method-naming", value_enum)]
    pub method_naming: Option<MethodNamingArg>,
    /// Omit the generated-file banner
    #[arg(long = "no-banner")]
    pub no_banner: bool,
}

/// Run the command, returning the exit code.
pub fn run(args: GenerateArgs) -> i32 {
    run_command(|| run_inner(args))
}

fn run_inner(args: GenerateArgs) -> Result<(), String> {
    let routes = load_routes(&args.source.routes)?;
    let mut config = load_config(&args.source)?;

    if let Some(indent) = args.indent {
        config.format.indent_width = indent;
    }
    if let Some(quote) = args.quote {
        config.format.quote_style = quote.into();
    }
    if let Some(dialect) = args.dialect {
        config.format.dialect = dialect.into();
    }
    if let Some(naming) = args.method_naming {
        config.codegen.method_naming = naming.into();
    }
    if args.no_banner {
        config.codegen.banner.clear();
    }

    let source =
        generate(&routes, &config).map_err(|err| format!("Failed to generate client: {err}"))?;

    match &args.out {
        None => {
            print!("{source}");
            Ok(())
        }
        Some(out) if args.check => check_output(out, &source),
        Some(out) => {
            if write_if_changed(out, &source)? {
                println!("regenerated");
            } else {
                println!("unchanged");
            }
            Ok(())
        }
    }
}

/// Write `content` to `path` unless it already holds exactly that text.
/// Returns whether the file was written.
pub fn write_if_changed(path: &Path, content: &str) -> Result<bool, String> {
    if fs::read_to_string(path).is_ok_and(|existing| existing == content) {
        info!(path = %path.display(), "Client is up to date.");
        return Ok(false);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|err| format!("Failed to create {}: {err}", parent.display()))?;
    }
    fs::write(path, content)
        .map_err(|err| format!("Failed to write {}: {err}", path.display()))?;
    info!(path = %path.display(), bytes = content.len(), "Wrote client.");
    Ok(true)
}

fn check_output(path: &Path, content: &str) -> Result<(), String> {
    let existing = fs::read_to_string(path)
        .map_err(|err| format!("Failed to read {}: {err}", path.display()))?;

    let label = path.display().to_string();
    match render_diff(&label, &existing, content, DiffStyle::for_stdout()) {
        None => {
            println!("up to date");
            Ok(())
        }
        Some(diff) => {
            print!("{diff}");
            Err(format!(
                "{} is out of date; run `routegen generate` to update it",
                path.display()
            ))
        }
    }
}

/// How [`render_diff`] marks up its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffStyle {
    /// Standard unified diff text.
    Plain,
    /// Unified diff with ANSI colours for a terminal.
    Color,
}

impl DiffStyle {
    /// Colour when stdout is a terminal and `NO_COLOR` is unset.
    pub fn for_stdout() -> Self {
        if io::stdout().is_terminal() && env::var_os("NO_COLOR").is_none() {
            Self::Color
        } else {
            Self::Plain
        }
    }
}

const CONTEXT_LINES: usize = 3;
const BOLD: &str = "\x1b[1m";
const CYAN: &str = "\x1b[36m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Unified diff from `current` to `new`, or None when they match.
pub fn render_diff(label: &str, current: &str, new: &str, style: DiffStyle) -> Option<String> {
    if current == new {
        return None;
    }

    let diff = TextDiff::from_lines(current, new);
    let old_header = format!("{label} (current)");
    let new_header = format!("{label} (new)");

    let mut unified = diff.unified_diff();
    unified.context_radius(CONTEXT_LINES);

    let output = match style {
        DiffStyle::Plain => unified.header(&old_header, &new_header).to_string(),
        DiffStyle::Color => {
            let mut output =
                format!("{BOLD}--- {old_header}{RESET}\n{BOLD}+++ {new_header}{RESET}\n");
            for hunk in unified.iter_hunks() {
                let _ = writeln!(output, "{CYAN}{}{RESET}", hunk.header());
                for change in hunk.iter_changes() {
                    let (sign, color) = match change.tag() {
                        ChangeTag::Delete => ('-', RED),
                        ChangeTag::Insert => ('+', GREEN),
                        ChangeTag::Equal => (' ', ""),
                    };
                    output.push_str(color);
                    output.push(sign);
                    output.push_str(change.value());
                    if change.missing_newline() {
                        output.push('\n');
                    }
                    if !color.is_empty() {
                        output.push_str(RESET);
                    }
                }
            }
            output
        }
    };
    Some(output)
}
