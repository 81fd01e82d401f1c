//! Demo application for the tolerance-bounded substring count.
//!
//! Run with:
//! ```bash
//! cargo run --example demo --features demo
//! ```
//!
//! The defaults reproduce the canonical scenario: input `"str"`, no letter
//! engaged, tolerance 2, which prints `5`.

use clap::{Parser, ValueEnum};
use finestra::engagement::Engagement;
use finestra::snapshot::ScanSnapshot;
use finestra::window::CountError;

/// Output format for the scan result.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// The bare count on a single line
    #[default]
    Plain,
    /// A JSON snapshot of the whole scan
    Json,
}

/// Demo application for finestra - sliding-window substring counting.
///
/// Counts the contiguous substrings of INPUT containing at most TOLERANCE
/// characters outside the engaged set.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input string to scan (lowercase letters only)
    #[arg(short, long, default_value = "str")]
    input: String,

    /// Letters to mark as engaged, e.g. "ae"
    #[arg(short, long, default_value = "")]
    engaged: String,

    /// Maximum number of non-engaged characters per counted substring
    #[arg(short, long, default_value = "2")]
    tolerance: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    format: OutputFormat,

    /// Pretty print JSON output
    #[arg(long)]
    pretty: bool,
}

fn run(args: &Args) -> Result<String, CountError> {
    // The builder treats out-of-alphabet letters as a programmer error;
    // coming from the command line they are a data error instead.
    if let Some((index, ch)) = args
        .engaged
        .char_indices()
        .find(|(_, ch)| !ch.is_ascii_lowercase())
    {
        return Err(CountError::UnsupportedCharacter { ch, index });
    }
    let engagement = Engagement::none().engage_all(&args.engaged);

    match args.format {
        OutputFormat::Plain => {
            let total = finestra::window::count(&args.input, &engagement, args.tolerance)?;
            Ok(total.to_string())
        }
        OutputFormat::Json => {
            let snapshot = ScanSnapshot::capture(&args.input, &engagement, args.tolerance)?;
            Ok(snapshot
                .to_json(args.pretty)
                .unwrap_or_else(|e| format!("Error: {e}")))
        }
    }
}

fn main() {
    let args = Args::parse();

    match run(&args) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
