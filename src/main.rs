use std::{io, path::PathBuf};

use anyhow::Result;
use clap::Parser;

use vendstock::{prompt, Report};

/// Aggregate vending-machine inventory snapshots into a per-beverage
/// restocking report, then browse it interactively.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Machine snapshot files (JSON), one per machine
    #[arg(
        value_name = "SNAPSHOT",
        default_values = [
            "REID_1F_20171004.json",
            "REID_2F_20171004.json",
            "REID_3F_20171004.json",
        ]
    )]
    snapshots: Vec<PathBuf>,

    /// Report unrecognized sort choices instead of silently reprinting
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut report = Report::new();
    for path in &cli.snapshots {
        report.read_json(path)?;
    }
    prompt::run(
        report.into_items(),
        io::stdin().lock(),
        io::stdout(),
        cli.strict,
    )
}
