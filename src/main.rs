use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use pduwatch::{check_cycle, CycleReport, DataSource, FileSource, Settings, State};
use pduwatch_adapters::DeviceVariant;

#[derive(Parser, Debug)]
#[command(name = "pduwatch")]
#[command(about = "Per-phase health checks for Gude power distribution units")]
struct Args {
    /// Path to the row table written by the poller
    #[arg(short, long, default_value = "rows.json")]
    file: PathBuf,

    /// Settings file with threshold levels (TOML, YAML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Device model for tables without a sysObjectID (8301, 8310, 8801)
    #[arg(short, long)]
    device: Option<String>,

    /// Only report this phase (e.g. "1")
    #[arg(short, long)]
    item: Option<String>,

    /// Keep running and re-check whenever the file changes
    #[arg(short, long, conflicts_with = "export")]
    watch: bool,

    /// Export the cycle report to a JSON file
    #[arg(short, long)]
    export: Option<PathBuf>,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let args = Args::parse();

    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(name) = &args.device {
        let variant =
            DeviceVariant::from_name(name).ok_or_else(|| anyhow!("unknown device: {name}"))?;
        settings.device = Some(variant);
    }

    if args.watch {
        return run_watch(&args.file, args.item.as_deref(), &settings);
    }

    let state = run_once(&args, &settings)?;
    std::process::exit(state.code());
}

/// Check the current table once; the returned state becomes the exit code.
fn run_once(args: &Args, settings: &Settings) -> Result<State> {
    let mut source = FileSource::new(&args.file);

    let Some(table) = source.poll() else {
        let reason = source.error().unwrap_or("no data");
        error!(source = source.description(), "{reason}");
        println!("UNKNOWN - {reason}");
        return Ok(State::Unknown);
    };

    let report = match check_cycle(&table, settings) {
        Ok(report) => report,
        Err(e) => {
            error!(source = source.description(), "check failed: {e:#}");
            println!("UNKNOWN - {e:#}");
            return Ok(State::Unknown);
        }
    };

    if let Some(export_path) = &args.export {
        export_to_file(&report, export_path)?;
    }

    Ok(print_report(&report, args.item.as_deref()))
}

/// Re-check on every refresh tick until interrupted.
fn run_watch(path: &Path, item: Option<&str>, settings: &Settings) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;

    rt.block_on(async {
        let mut source = FileSource::new(path);
        let mut ticker = tokio::time::interval(settings.refresh);
        info!(
            source = source.description(),
            refresh = ?settings.refresh,
            "watching row table"
        );

        let sig = tokio::signal::ctrl_c();
        tokio::pin!(sig);
        loop {
            tokio::select! {
                biased;
                _ = &mut sig => {
                    info!("shutdown requested");
                    break;
                }
                _ = ticker.tick() => {
                    let Some(table) = source.poll() else {
                        if let Some(e) = source.error() {
                            warn!(source = source.description(), "{e}");
                        }
                        continue;
                    };
                    match check_cycle(&table, settings) {
                        Ok(report) => {
                            let state = print_report(&report, item);
                            info!(device = %report.device, phases = report.services.len(), %state, "cycle checked");
                        }
                        Err(e) => warn!("check failed: {e:#}"),
                    }
                }
            }
        }

        Ok(())
    })
}

/// Print plugin output and return the worst state shown.
fn print_report(report: &CycleReport, item: Option<&str>) -> State {
    match item {
        Some(item) => match report.service(item) {
            Some(service) => {
                println!("{}", service.render());
                service.state
            }
            None => {
                println!("Phase {item}: UNKNOWN - item not found in monitoring data");
                State::Unknown
            }
        },
        None => {
            println!("{}", report.render());
            report.state()
        }
    }
}

/// Export the cycle report to a JSON file
fn export_to_file(report: &CycleReport, export_path: &Path) -> Result<()> {
    let json = report.to_json()?;
    std::fs::write(export_path, json)
        .with_context(|| format!("failed to write {}", export_path.display()))?;

    info!("exported cycle report to: {}", export_path.display());
    Ok(())
}
