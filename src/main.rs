use anyhow::Context as _;
use clap::{ArgAction, Parser};
use freqstats::plot::FrequencyPolygon;
use freqstats::report;
use freqstats::{FrequencyDistribution, Observations, Statistics};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "freqstats",
    version,
    about = "Descriptive statistics and a grouped frequency distribution of a list of numbers"
)]
struct Args {
    /// Input file holding one number per line
    input: Option<PathBuf>,

    /// Output path of the frequency polygon (SVG)
    #[arg(long, default_value = "frequency-polygon.svg")]
    plot: PathBuf,

    /// Do not draw the frequency polygon
    #[arg(long)]
    no_plot: bool,

    /// Increase log verbosity (`-v` debug, `-vv` trace); `RUST_LOG` takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    let input = match &args.input {
        Some(input) => input,
        None => {
            println!("No input file specified!");
            return ExitCode::FAILURE;
        }
    };
    if !input.is_file() {
        println!("The provided file is invalid!");
        return ExitCode::FAILURE;
    }

    match run(input, &args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(input: &Path, args: &Args) -> anyhow::Result<()> {
    let observations = Observations::from_path(input)
        .with_context(|| format!("failed to load {}", input.display()))?;
    let stats = Statistics::compute(observations.values())
        .context("cannot compute descriptive statistics")?;
    let dist = FrequencyDistribution::compute(observations.values())
        .context("cannot build the frequency distribution")?;

    report::write_report(io::stdout().lock(), observations.values(), &stats, &dist)?;

    if !args.no_plot {
        FrequencyPolygon::from_distribution(&dist)
            .write_svg(&args.plot)
            .with_context(|| format!("failed to write {}", args.plot.display()))?;
        log::info!("frequency polygon written to {}", args.plot.display());
        println!("\nFrequency polygon: {}", args.plot.display());
    }
    Ok(())
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
