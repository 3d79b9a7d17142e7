//! `jsonlet` CLI — parse a JSON document and print the value tree.
//!
//! ## Usage
//!
//! ```sh
//! # Parse an inline argument
//! jsonlet '{"name": "Alice", "age": 30}'
//!
//! # Parse a file
//! jsonlet -f data.json
//! ```
//!
//! The rendered tree goes to stdout. Any failure — missing input, an
//! unreadable file, or a parse error — prints a diagnostic to stderr and
//! exits non-zero.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "jsonlet",
    version,
    about = "Parse a JSON document and print the value tree"
)]
struct Cli {
    /// Inline JSON text to parse
    json: Option<String>,

    /// Read the document from a file instead of the command line
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let text = read_input(&cli)?;
    log::debug!("loaded {} input bytes", text.len());

    let (value, eaten) =
        jsonlet_core::parse_prefix(&text).context("Failed to parse input")?;
    log::debug!("parse consumed {eaten} of {} bytes", text.len());

    println!("{}", jsonlet_core::render(&value));
    Ok(())
}

/// Load the document text. The file wins when both sources are given;
/// with neither, abort with a usage hint.
fn read_input(cli: &Cli) -> Result<String> {
    if let Some(path) = &cli.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()));
    }
    match &cli.json {
        Some(text) => Ok(text.clone()),
        None => bail!("no input: pass a JSON argument or -f/--file <path>"),
    }
}
