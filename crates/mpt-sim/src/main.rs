use std::error::Error;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Args as ClapArgs, Parser, Subcommand};
use mpt_core::errors::{ErrorInfo, MptError};
use mpt_phase::{
    evaluate, simulate, MeasurementParams, RunManifest, SimulationResult, SweepConfig,
};

#[derive(Parser, Debug)]
#[command(name = "mpt-sim", about = "Møller phase-space sweep CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Execute a sweep from a configuration file and write run artefacts.
    Sweep(SweepArgs),
    /// Recount detector hits for an existing result under new measurement
    /// parameters.
    Count(CountArgs),
}

#[derive(ClapArgs, Debug)]
struct SweepArgs {
    /// YAML configuration describing the sweep.
    #[arg(long)]
    config: PathBuf,
    /// Output directory for run artefacts.
    #[arg(long)]
    out: PathBuf,
}

#[derive(ClapArgs, Debug)]
struct CountArgs {
    /// result.json produced by `mpt-sim sweep`.
    #[arg(long = "in")]
    input: PathBuf,
    /// Optional YAML file with measurement parameters; defaults apply
    /// otherwise.
    #[arg(long)]
    measurement: Option<PathBuf>,
    /// Output directory for the recount artefact.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    match cli.command {
        Command::Sweep(args) => run_sweep(args),
        Command::Count(args) => run_count(args),
    }
}

fn run_sweep(args: SweepArgs) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(&args.out)?;
    let config = load_config(&args.config)?;
    config.physics.validate()?;

    let result = simulate(&config.physics, config.seed_policy.master_seed)?;
    let counts = evaluate(&result, &config.measurement);

    write_json(args.out.join("result.json"), &result)?;
    write_json(args.out.join("hit_counts.json"), &counts)?;
    write_points_csv(&args.out.join("moller_points.csv"), &result)?;

    let manifest = RunManifest::new(
        config,
        vec![
            PathBuf::from("result.json"),
            PathBuf::from("hit_counts.json"),
            PathBuf::from("moller_points.csv"),
        ],
    )?;
    manifest.write(&args.out.join("manifest.json"))?;

    Ok(())
}

fn run_count(args: CountArgs) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(&args.out)?;
    let result: SimulationResult = serde_json::from_str(&fs::read_to_string(&args.input)?)?;
    let measurement = match &args.measurement {
        Some(path) => load_measurement(path)?,
        None => MeasurementParams::default(),
    };

    let counts = evaluate(&result, &measurement);
    write_json(args.out.join("hit_counts.json"), &counts)?;
    Ok(())
}

fn load_config(path: &Path) -> Result<SweepConfig, Box<dyn Error>> {
    let contents = fs::read_to_string(path)?;
    let config: SweepConfig = serde_yaml::from_str(&contents).map_err(|err| {
        MptError::Config(
            ErrorInfo::new("config-parse", err.to_string())
                .with_context("path", path.display().to_string())
                .with_hint("recognized sections: physics, measurement, seed_policy"),
        )
    })?;
    Ok(config)
}

fn load_measurement(path: &Path) -> Result<MeasurementParams, Box<dyn Error>> {
    let contents = fs::read_to_string(path)?;
    let measurement: MeasurementParams = serde_yaml::from_str(&contents).map_err(|err| {
        MptError::Config(
            ErrorInfo::new("measurement-parse", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })?;
    Ok(measurement)
}

fn write_json<P: AsRef<Path>, T: serde::Serialize>(path: P, value: &T) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

fn write_points_csv(path: &Path, result: &SimulationResult) -> Result<(), Box<dyn Error>> {
    let mut file = fs::File::create(path)?;
    writeln!(file, "source_energy,x,y")?;
    for (point, energy) in result.moller_points.iter().zip(result.source_energies.iter()) {
        writeln!(file, "{:.6},{:.9},{:.9}", energy, point.x, point.y)?;
    }
    Ok(())
}
