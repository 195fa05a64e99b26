use std::convert::TryFrom;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use attendance_overlap::{
    AttendanceInput, BaselineEngine, FixedPointMerge, OverlapEngine,
    RawIntervals, SweepMerge,
};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MergeKind {
    /// Rescan all pairs after every merge
    FixedPoint,
    /// Sort by start, then merge in one pass
    Sweep,
}

#[derive(Parser, Debug)]
#[command(name = "attendance")]
#[command(version)]
#[command(
    about = "Seconds during which a lesson, its pupil and its tutor overlap",
    long_about = None
)]
struct Cli {
    /// JSON file with `lesson`, `pupil` and `tutor` arrays (stdin if omitted)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Strategy used to merge overlapping candidate intervals
    #[arg(long = "merge", value_enum, default_value = "fixed-point")]
    merge: MergeKind,

    /// Also run the brute-force baseline and fail if it disagrees
    #[arg(long)]
    check: bool,

    /// Enable trace-level logging on stderr
    #[arg(long)]
    debug: bool,
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::from_default_env()
            .add_directive(tracing::Level::TRACE.into())
    } else {
        EnvFilter::from_default_env()
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_raw(path: Option<&PathBuf>) -> Result<RawIntervals> {
    let raw: RawIntervals = match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            serde_json::from_str(&text).context("parsing stdin")?
        }
    };
    Ok(raw)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let raw = read_raw(cli.input.as_ref())?;
    let input = AttendanceInput::try_from(raw).context("invalid intervals")?;

    let total = match cli.merge {
        MergeKind::FixedPoint => {
            OverlapEngine::<FixedPointMerge>::new().compute(&input)
        }
        MergeKind::Sweep => OverlapEngine::<SweepMerge>::new().compute(&input),
    };
    info!(total, merge = ?cli.merge, "computed overlap");

    if cli.check {
        let expected = BaselineEngine::new().compute(&input);
        if expected != total {
            bail!(
                "engine computed {} but baseline computed {}",
                total,
                expected
            );
        }
    }

    println!("{}", total);
    Ok(())
}
