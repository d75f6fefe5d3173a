//! headless runner, steps the simulation and reports on it

use anyhow::Context;
use clap::{Parser, ValueEnum};
use evosim::stats::{Format, ReportLog};
use evosim::{Report, Session, TickSummary, World};
use std::ops::ControlFlow;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "evosim")]
#[command(version)]
#[command(about = "Runs the creature simulation without a window")]
struct Cli {
    /// Number of ticks to simulate
    #[arg(short, long, default_value = "10000")]
    ticks: u64,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Ticks per second, 0 runs as fast as possible
    #[arg(long, default_value = "0")]
    fps: u32,

    /// Report every this many ticks, 0 disables reports
    #[arg(long, default_value = "600")]
    report_every: u64,

    /// Also write the reports into this file
    #[arg(short, long)]
    report: Option<PathBuf>,

    /// Format of the report file
    #[arg(long, value_enum, default_value = "csv")]
    format: FormatArg,

    /// Stop as soon as every creature has died
    #[arg(long)]
    stop_on_extinction: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Csv,
    Json,
}

impl From<FormatArg> for Format {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Csv => Format::Csv,
            FormatArg::Json => Format::Json,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut session = Session::new(cli.seed);

    let mut reports = ReportLog::new(cli.report_every);
    if let Some(path) = &cli.report {
        let f = std::fs::File::create(path)
            .with_context(|| format!("creating report file {}", path.display()))?;
        reports = reports.with_sink(std::io::BufWriter::new(f), cli.format.into());
    }
    session.subscribe(reports);
    if cli.stop_on_extinction {
        session.subscribe(|w: &World, t: &TickSummary| {
            if w.creatures().is_empty() {
                log::warn!("everything died out at tick {}", t.tick);
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
    }

    let cadence = if cli.fps == 0 {
        Duration::ZERO
    } else {
        Duration::from_secs_f64(1. / cli.fps as f64)
    };

    session.start();
    let ran = session.run(cadence, Some(cli.ticks));
    log::info!("done after {} ticks", ran);
    println!("{}", Report::gather(session.world()));
    Ok(())
}
