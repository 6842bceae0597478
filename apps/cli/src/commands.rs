//! CLI command definitions, routing, and tracing setup.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use plantag_encoder::{TAG_LEN, decode_schedule, encode_schedule};
use plantag_preprocessor::preprocess_info;
use plantag_shared::PlantagError;
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// plantag — delivery-schedule tag tooling.
#[derive(Parser)]
#[command(
    name = "plantag",
    version,
    about = "Encode French delivery-schedule text into fixed-width tags, and back.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Encode schedule text into concatenated tags.
    Encode {
        /// Schedule text (reads stdin if neither this nor --file is given).
        text: Option<String>,

        /// Read the schedule text from a file.
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Decode a tag string back into schedule rules.
    Decode {
        /// The tag string, e.g. "2VeMfFr2VeMfSe".
        code: String,

        /// Emit the rules as JSON instead of one line per rule.
        #[arg(long)]
        json: bool,
    },

    /// Preprocess an info field, rewriting UD counts and planning blocks
    /// into $-delimited tags.
    Preprocess {
        /// Info-field text (reads stdin if neither this nor --file is given).
        text: Option<String>,

        /// Read the info-field text from a file.
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "plantag=info",
        1 => "plantag=debug",
        _ => "plantag=trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Encode { text, file } => cmd_encode(text.as_deref(), file.as_deref()),
        Command::Decode { code, json } => cmd_decode(&code, json),
        Command::Preprocess { text, file } => cmd_preprocess(text.as_deref(), file.as_deref()),
    }
}

fn cmd_encode(text: Option<&str>, file: Option<&Path>) -> Result<()> {
    let input = resolve_input(text, file)?;
    let code = encode_schedule(&input);
    info!(tags = code.len() / TAG_LEN, "schedule encoded");
    println!("{code}");
    Ok(())
}

fn cmd_decode(code: &str, json: bool) -> Result<()> {
    let rules = decode_schedule(code.trim())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rules)?);
        return Ok(());
    }

    for rule in &rules {
        let categories: Vec<&str> = rule.categories.iter().map(|c| c.code()).collect();
        println!(
            "{} {} {} {}",
            rule.ordinal,
            rule.weekday.code(),
            rule.slot.code(),
            categories.join("+")
        );
    }
    Ok(())
}

fn cmd_preprocess(text: Option<&str>, file: Option<&Path>) -> Result<()> {
    let input = resolve_input(text, file)?;
    println!("{}", preprocess_info(&input));
    Ok(())
}

// ---------------------------------------------------------------------------
// Input resolution
// ---------------------------------------------------------------------------

/// Take input from the positional argument, a file, or stdin, in that order.
fn resolve_input(text: Option<&str>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }

    if let Some(path) = file {
        let content =
            std::fs::read_to_string(path).map_err(|e| PlantagError::io(path, e))?;
        return Ok(content);
    }

    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf).map_err(|e| PlantagError::io("<stdin>", e))?;
    Ok(buf)
}
