//! 诊所仿真命令行
//!
//! Runs one clinic simulation from flags or a JSON config document.

use clap::Parser;
use clinic_sim::clinic::Priority;
use clinic_sim::random::ServiceDistribution;
use clinic_sim::{ClinicConfig, ConfigError, Simulation};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "clinic-sim", about = "Discrete-event simulation of patient flow in a clinic")]
struct Args {
    /// JSON config document; cannot be combined with the model flags below
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the full results structure as JSON
    #[arg(long)]
    results_json: Option<PathBuf>,

    #[arg(long, conflicts_with = "config", default_value_t = 3)]
    doctors: usize,
    /// Patients per minute
    #[arg(long, conflicts_with = "config", default_value_t = 10.0 / 60.0)]
    arrival_rate: f64,
    #[arg(long, conflicts_with = "config", default_value_t = 15.0)]
    mean_service_min: f64,
    /// Simulated minutes
    #[arg(long, conflicts_with = "config", default_value_t = 480.0)]
    horizon_min: f64,
    /// exponential, normal or uniform; anything else means a constant mean
    #[arg(long, conflicts_with = "config", default_value = "exponential")]
    distribution: String,
    #[arg(long, conflicts_with = "config")]
    triage: bool,
    /// Reneging threshold (minutes)
    #[arg(long, conflicts_with = "config", default_value_t = 120.0)]
    max_wait_min: f64,
    #[arg(long, conflicts_with = "config")]
    shifts: bool,
    #[arg(long, conflicts_with = "config", default_value_t = 240.0)]
    shift_min: f64,
    #[arg(long, conflicts_with = "config")]
    breaks: bool,
    #[arg(long, conflicts_with = "config", default_value_t = 30.0)]
    break_min: f64,
    #[arg(long, conflicts_with = "config", default_value_t = 180.0)]
    break_interval_min: f64,
    /// Time-of-day modulated arrival rate
    #[arg(long, conflicts_with = "config")]
    non_homogeneous: bool,
    #[arg(long, conflicts_with = "config")]
    seed: Option<u64>,
}

impl Args {
    fn to_config(&self) -> ClinicConfig {
        ClinicConfig {
            num_doctors: self.doctors,
            arrival_rate: self.arrival_rate,
            mean_service_minutes: self.mean_service_min,
            horizon_minutes: self.horizon_min,
            service_distribution: ServiceDistribution::from(self.distribution.as_str()),
            use_real_people: false,
            people: Vec::new(),
            use_triage: self.triage,
            max_wait_minutes: self.max_wait_min,
            use_shifts: self.shifts,
            shift_duration_minutes: self.shift_min,
            use_breaks: self.breaks,
            break_duration_minutes: self.break_min,
            break_interval_minutes: self.break_interval_min,
            non_homogeneous_arrivals: self.non_homogeneous,
            seed: self.seed,
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error("read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
}

fn load_config(args: &Args) -> Result<ClinicConfig, CliError> {
    let Some(path) = &args.config else {
        return Ok(args.to_config());
    };
    let raw = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.clone(),
        source,
    })?;
    Ok(serde_json::from_str(&raw)?)
}

fn run(args: &Args) -> Result<(), CliError> {
    let cfg = load_config(args)?;
    let triage = cfg.use_triage;
    let sim = Simulation::from_config(cfg)?;

    let mut last = 0u8;
    let mut report = |pct: u8| {
        if pct != last {
            info!(percent = pct, "progress");
            last = pct;
        }
    };
    let results = sim.run(Some(&mut report));

    if let Some(path) = &args.results_json {
        let json = serde_json::to_string_pretty(&results)?;
        fs::write(path, json).map_err(|source| CliError::Write {
            path: path.clone(),
            source,
        })?;
    }

    println!(
        "done: arrivals={} served={} abandoned={} left_waiting={} \
         mean_wait={:.2} abandonment_rate={:.2} mean_queue_len={:.2} mean_occupancy={:.2}",
        results.total_arrivals,
        results.served,
        results.abandoned,
        results.left_waiting,
        results.mean_wait,
        results.abandonment_rate,
        results.mean_queue_len,
        results.mean_occupancy,
    );

    if triage {
        for p in Priority::ALL {
            info!(
                tier = %p,
                name = p.label(),
                served = results.served_for(p),
                abandoned = results.abandoned_for(p),
                mean_wait = results.mean_wait_for(p),
                "🚑 triage tier"
            );
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    // 初始化 tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
