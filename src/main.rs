use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;

mod batch;
mod capture;
mod cli;
mod config;
mod discover;
mod error;
mod fragments;
mod output;
mod render;
mod templates;

use batch::{run_batch, BatchJob, BatchReport};
use capture::ToolHelpSource;
use cli::RootArgs;
use config::FileConfig;

const EXIT_APPLET_FAILED: u8 = 1;
const EXIT_FATAL: u8 = 2;

fn main() -> ExitCode {
    let args = RootArgs::parse();
    setup_logging(args.verbose);

    match run(&args) {
        Ok(report) if report.is_success() => ExitCode::SUCCESS,
        Ok(report) => {
            let failed = report
                .failures()
                .map(|outcome| format!("{} ({})", outcome.applet, outcome.output.display()))
                .collect::<Vec<_>>();
            eprintln!(
                "mkman: {} of {} applets failed: {}",
                failed.len(),
                report.outcomes.len(),
                failed.join(", ")
            );
            ExitCode::from(EXIT_APPLET_FAILED)
        }
        Err(err) => {
            eprintln!("mkman: {err:#}");
            ExitCode::from(EXIT_FATAL)
        }
    }
}

fn run(args: &RootArgs) -> Result<BatchReport> {
    let file_config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => FileConfig::default(),
    };
    config::validate_config(&file_config)?;
    let settings = config::resolve_settings(args, file_config)?;

    let applets = if args.applets.is_empty() {
        discover::discover_applets(&settings.discovery_command)?
    } else {
        discover::normalize_applets(&args.applets)
    };
    tracing::debug!(?applets, "applet list resolved");

    let source = ToolHelpSource::new(config::resolve_tool(&settings.tool)?);
    let job = BatchJob {
        applets: &applets,
        include_dir: &settings.include_dir,
        out_dir: &settings.out_dir,
        date: &settings.date,
        jobs: settings.jobs,
    };
    run_batch(&job, &source)
}

fn setup_logging(verbose: u8) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}
