use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use aquasens::banner::{
    BannerInfo, print_banner, print_evaluation, print_session_summary, thresholds_text,
};
use aquasens::commands::{self, CommandResult, SessionInfo};
use aquasens::config::Config;
use aquasens::consts::DEFAULT_READING;
use aquasens::engine::{AssessmentEngine, Evaluation, Reading, ReferenceThresholds};
use aquasens::oneshot::{AssessOptions, run_assess};

#[derive(Parser)]
#[command(
    name = "aquasens",
    version,
    about = "Check a water sample against WHO limits for pH, turbidity, and arsenic."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Config file (default: ~/.aquasens/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory for text reports (overrides the config file)
    #[arg(long, global = true)]
    report_dir: Option<PathBuf>,

    /// Sample label written into reports
    #[arg(short, long, global = true)]
    label: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate one sample and exit
    Assess {
        /// pH (0-14)
        #[arg(long, default_value_t = DEFAULT_READING.ph, allow_negative_numbers = true)]
        ph: f64,

        /// Turbidity in NTU
        #[arg(long, default_value_t = DEFAULT_READING.turbidity, allow_negative_numbers = true)]
        turbidity: f64,

        /// Arsenic in µg/L
        #[arg(long, default_value_t = DEFAULT_READING.arsenic, allow_negative_numbers = true)]
        arsenic: f64,

        /// Print the evaluation as JSON
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Also write the text report
        #[arg(long, default_value_t = false)]
        report: bool,
    },
    /// Show reference thresholds and index weights
    Thresholds,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("aquasens=warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };
    let config_label = match &cli.config {
        Some(path) => path.display().to_string(),
        None => "default".to_string(),
    };
    let report_dir = cli
        .report_dir
        .clone()
        .unwrap_or_else(|| config.report_dir.clone());

    let engine = AssessmentEngine::new(ReferenceThresholds::WHO, config.weights);

    if let Some(command) = cli.command {
        match command {
            Command::Assess {
                ph,
                turbidity,
                arsenic,
                json,
                report,
            } => {
                let reading = Reading {
                    ph,
                    turbidity,
                    arsenic,
                };
                let options = AssessOptions {
                    json,
                    report_dir: report.then_some(report_dir.as_path()),
                    label: cli.label.as_deref(),
                };
                let outcome = run_assess(&engine, reading, &options, &mut io::stdout())?;
                if let Some(path) = outcome.report_path {
                    // stderr keeps stdout clean for JSON consumers
                    eprintln!("report saved to {}", path.display());
                }
                return Ok(());
            }
            Command::Thresholds => {
                print!("{}", thresholds_text(engine.thresholds(), engine.weights()));
                return Ok(());
            }
        }
    }

    print_banner(&BannerInfo {
        config: &config_label,
        report_dir: &report_dir,
        weights: engine.weights(),
    });

    let mut last: Option<Evaluation> = None;
    let mut samples = 0usize;

    // REPL — async stdin so Ctrl+C is caught at the prompt too
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("\naquasens> ");
        io::stdout().flush()?;

        let line = tokio::select! {
            result = lines.next_line() => {
                match result {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        // Ctrl+D (EOF)
                        println!();
                        break;
                    }
                    Err(e) => {
                        eprintln!("input error: {}", e);
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let info = SessionInfo {
            engine: &engine,
            last: last.as_ref(),
            report_dir: &report_dir,
            label: cli.label.as_deref(),
        };
        match commands::dispatch(input, &info).await {
            Ok(CommandResult::Sample(reading)) => {
                let evaluation = engine.evaluate(reading);
                print_evaluation(&evaluation);
                last = Some(evaluation);
                samples += 1;
            }
            Ok(CommandResult::Handled) => {}
            Ok(CommandResult::Reset) => last = None,
            Ok(CommandResult::Quit) => break,
            Err(e) => eprintln!("error: {e:#}"),
        }
    }

    print_session_summary(samples);
    Ok(())
}
