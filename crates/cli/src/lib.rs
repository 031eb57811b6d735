//! Command-line interface for routegen.
//!
//! Commands return `Result<(), String>` internally; [`run_cli`] maps them to
//! process exit codes.

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

pub mod commands;
pub mod common;

#[derive(Parser)]
#[command(
    name = "routegen",
    version,
    about = "Generate a typed TypeScript client from file-system route definitions"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the client from a route manifest
    Generate(commands::generate::GenerateArgs),
    /// Print the route tree built from a manifest
    Tree(commands::tree::TreeArgs),
}

/// Parse `args` (including the program name) and run the command.
/// Returns the process exit code.
pub fn run_cli(args: Vec<String>) -> i32 {
    match Cli::try_parse_from(args) {
        Ok(cli) => {
            init_tracing();
            match cli.command {
                Some(Commands::Generate(args)) => commands::generate::run(args),
                Some(Commands::Tree(args)) => commands::tree::run(args),
                None => {
                    let mut cmd = Cli::command();
                    let _ = cmd.print_help();
                    println!();
                    0
                }
            }
        }
        Err(e) => {
            let code = e.exit_code();
            let _ = e.print();
            code
        }
    }
}

/// Run a command body, printing its error to stderr.
pub fn run_command<F>(f: F) -> i32
where
    F: FnOnce() -> Result<(), String>,
{
    match f() {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{err}");
            1
        }
    }
}

const LOG_TARGETS: [&str; 2] = ["routegen_core", "routegen_cli"];

/// Build the log filter from the value of `ROUTEGEN_LOG`.
fn log_filter(var: Option<&str>) -> String {
    // ROUTEGEN_LOG is either a plain level applied to the routegen crates
    // or a full tracing filter spec like "routegen_core=debug,warn"
    match var {
        Some(level) if is_plain_level(level) => LOG_TARGETS
            .iter()
            .map(|target| format!("{target}={}", level.to_ascii_lowercase()))
            .collect::<Vec<_>>()
            .join(","),
        Some(spec) => spec.to_string(),
        None => LOG_TARGETS
            .iter()
            .map(|target| format!("{target}=info"))
            .collect::<Vec<_>>()
            .join(","),
    }
}

fn init_tracing() {
    let filter = log_filter(std::env::var("ROUTEGEN_LOG").ok().as_deref());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_filter(EnvFilter::new(filter));

    // Tests call run_cli repeatedly; the first subscriber wins.
    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}

fn is_plain_level(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}
