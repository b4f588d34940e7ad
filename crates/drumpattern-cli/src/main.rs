use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use drumpattern_core::{
    NoteLayout, PatternError, PatternFormat, PatternReport, check_pattern, make_report,
    render_pattern,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const SPEC_URL: &str = "https://github.com/internetofdrums/internet-drum-pattern-spec#readme";

#[derive(Parser, Debug)]
#[command(name = "internet-drum-pattern-validator")]
#[command(version)]
#[command(
    about = "Validate and pretty-print an Internet Drum Pattern.",
    long_about = None,
    after_help = "<PATTERN> is a standard Base64 (see RFC 4648) encoded byte array following the\nInternet Drum Pattern Specification, see:\n\n  https://github.com/internetofdrums/internet-drum-pattern-spec#readme\n\nIf the pattern is valid, the pattern data is formatted and written to stdout.\n\nExamples:\n  internet-drum-pattern-validator f38AAAAA...AAA=\n  internet-drum-pattern-validator --variant velocity fwAAAH8A...AAAA\n  internet-drum-pattern-validator --json f38AAAAA...AAA="
)]
struct Cli {
    /// Base64 encoded drum pattern
    pattern: String,

    /// Format revision to validate against
    #[arg(long, value_enum, default_value_t = Variant::Standard)]
    variant: Variant,

    /// Print the structured pattern as JSON instead of a grid
    #[arg(long, conflicts_with = "quiet")]
    json: bool,

    /// Print only the grid
    #[arg(long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log pipeline stages to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Variant {
    /// 16 instruments, (length, velocity) notes, 512 bytes
    Standard,
    /// 12 instruments, velocity-only notes, 192 bytes
    Velocity,
}

impl Variant {
    fn format(self) -> PatternFormat {
        match self {
            Variant::Standard => PatternFormat::STANDARD,
            Variant::Velocity => PatternFormat::VELOCITY_ONLY,
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                eprint!("{}", err);
                return ExitCode::from(1);
            }
        },
    };

    init_logging(cli.verbose, !cli.no_color);
    if cli.no_color {
        colored::control::set_override(false);
    }

    match cmd_validate(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", format!("error: {}", err.message).red());
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(1)
        }
    }
}

fn init_logging(verbose: bool, ansi: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(ansi)
        .init();
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{:#}", err), None)
    }
}

fn cmd_validate(cli: &Cli) -> Result<(), CliError> {
    let format = cli.variant.format();
    debug!(
        variant = format.name,
        input_len = cli.pattern.len(),
        "validating pattern"
    );

    let pattern =
        check_pattern(&cli.pattern, &format).map_err(|err| pattern_error(err, &format))?;

    if cli.json {
        let json = serialize_report(&make_report(&format, pattern))?;
        println!("{}", json);
        return Ok(());
    }

    let grid = render_pattern(&pattern, &format);
    if !cli.quiet {
        println!("{}", "The drum pattern is valid!".green());
        println!();
        println!("{}", legend(&format));
        println!();
    }
    print!("{}", grid);
    Ok(())
}

fn pattern_error(err: PatternError, format: &PatternFormat) -> CliError {
    let hint = match &err {
        PatternError::Decode(_) => {
            "the pattern must be standard Base64 (RFC 4648) with padding".to_string()
        }
        PatternError::Validation(_) => format!(
            "the {} format expects exactly {} bytes with values up to {:#04x}; see {}",
            format.name,
            format.total_bytes(),
            format.max_value,
            SPEC_URL
        ),
    };
    CliError::new(err.to_string(), Some(hint))
}

fn serialize_report(report: &PatternReport) -> Result<String, CliError> {
    serde_json::to_string_pretty(report)
        .context("JSON serialization failed")
        .map_err(Into::into)
}

fn legend(format: &PatternFormat) -> String {
    let notation = match format.note_layout {
        NoteLayout::LengthVelocity => {
            "(XX,YY) is one note with a length of XX and a velocity of YY"
        }
        NoteLayout::Velocity => "XX is one note with a velocity of XX",
    };
    format!(
        "After decoding, the pattern looks like this, where {}:",
        notation
    )
}
