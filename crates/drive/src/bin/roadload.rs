//! Drives the roadload vehicle model through a scenario and writes a table.

use std::{
    fs::{self, File},
    io::{self, BufWriter},
    path::PathBuf,
};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::info;
use roadload_drive::{
    scenario::{ProfileScenario, RAMP_DURATION},
    simulate,
    table::{self, Column},
};
use roadload_vehicle::{VehicleConfig, VehicleModel};

/// Longitudinal vehicle simulation.
#[derive(Parser, Debug)]
#[command(name = "roadload", version, about)]
struct Cli {
    /// Vehicle configuration (TOML); unspecified fields take their defaults
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the table here instead of stdout
    #[arg(short, long, global = true, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Quantity written in the second column
    #[arg(long, global = true, value_enum, default_value_t = Column::Position)]
    column: Column,

    /// Show position, velocity, and throttle in a window after the run
    #[cfg(feature = "plot")]
    #[arg(long, global = true)]
    plot: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Hold throttle and grade constant
    Constant {
        /// Throttle fraction in [0, 1]
        #[arg(long, default_value_t = 0.2)]
        throttle: f64,

        /// Grade angle in radians
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        grade: f64,

        /// Simulated duration in seconds
        #[arg(long, default_value_t = 100.0)]
        duration: f64,
    },

    /// Throttle ramp over a two-stage hill
    Ramp,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            toml::from_str::<VehicleConfig>(&text)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => VehicleConfig::default(),
    };
    let mut vehicle = VehicleModel::new(config).context("invalid vehicle configuration")?;

    let (scenario, duration) = match cli.command {
        Command::Constant {
            throttle,
            grade,
            duration,
        } => (
            ProfileScenario::constant(throttle, grade).context("invalid controls")?,
            duration,
        ),
        Command::Ramp => (ProfileScenario::ramp()?, RAMP_DURATION),
    };

    let steps = step_count(duration, vehicle.time_step())?;

    #[cfg(feature = "plot")]
    let mut plot = roadload_drive::PlotObserver::new();
    #[cfg(feature = "plot")]
    let solution = if cli.plot {
        simulate::run(&mut vehicle, &scenario, steps, &mut plot)?
    } else {
        simulate::run_unobserved(&mut vehicle, &scenario, steps)?
    };
    #[cfg(not(feature = "plot"))]
    let solution = simulate::run_unobserved(&mut vehicle, &scenario, steps)?;

    let rows = table::rows(&solution.history, cli.column);
    match &cli.output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            table::write_table(BufWriter::new(file), rows)?;
            info!("wrote {} rows to {}", solution.history.len(), path.display());
        }
        None => table::write_table(io::stdout().lock(), rows)?,
    }

    #[cfg(feature = "plot")]
    if cli.plot {
        plot.show("roadload")
            .map_err(|e| anyhow::anyhow!("failed to show plot: {e}"))?;
    }

    Ok(())
}

/// Converts a duration into a whole number of time steps.
fn step_count(duration: f64, time_step: f64) -> Result<usize> {
    if !duration.is_finite() || duration < 0.0 {
        bail!("duration must be a non-negative number of seconds, got {duration}");
    }

    let steps = (duration / time_step).round();
    #[allow(clippy::cast_precision_loss)]
    let limit = usize::MAX as f64;
    if steps >= limit {
        bail!("duration {duration} s is too long for a time step of {time_step} s");
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let steps = steps as usize;
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_duration_to_whole_steps() {
        assert_eq!(step_count(100.0, 0.01).unwrap(), 10_000);
        assert_eq!(step_count(20.0, 0.01).unwrap(), 2_000);
        assert_eq!(step_count(0.0, 0.01).unwrap(), 0);
    }

    #[test]
    fn rejects_negative_or_non_finite_durations() {
        assert!(step_count(-1.0, 0.01).is_err());
        assert!(step_count(f64::NAN, 0.01).is_err());
        assert!(step_count(f64::INFINITY, 0.01).is_err());
    }

    #[test]
    fn rejects_step_counts_that_do_not_fit() {
        let error = step_count(1e300, 0.01).unwrap_err();
        assert!(error.to_string().contains("too long"));
    }
}
