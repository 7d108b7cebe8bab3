use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracker_core::*;

#[derive(Parser)]
#[command(name = "tracker")]
#[command(about = "Step and training activity reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Read the profile from this config file instead of the default path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Report distance and calories for a `steps,duration` day record
    Day {
        /// Day record, e.g. "6000,1h"
        #[arg(allow_hyphen_values = true)]
        record: String,

        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Report a `steps,activity,duration` training record
    Training {
        /// Training record, e.g. "3456,Ходьба,3h00m00s"
        #[arg(allow_hyphen_values = true)]
        record: String,

        #[command(flatten)]
        profile: ProfileArgs,

        /// Print the computed metrics as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Biometric overrides; omitted values come from the config profile
#[derive(Args)]
struct ProfileArgs {
    /// Body weight in kilograms
    #[arg(long, allow_negative_numbers = true)]
    weight: Option<f64>,

    /// Height in centimeters
    #[arg(long, allow_negative_numbers = true)]
    height: Option<f64>,
}

impl ProfileArgs {
    fn resolve(&self, config: &Config) -> BiometricProfile {
        let defaults = config.profile.biometrics();
        let profile = BiometricProfile {
            weight_kg: self.weight.unwrap_or(defaults.weight_kg),
            height_cm: self.height.unwrap_or(defaults.height_cm),
        };
        tracing::debug!(
            "Using profile {:?} (weight from {}, height from {})",
            profile,
            if self.weight.is_some() { "flag" } else { "config" },
            if self.height.is_some() { "flag" } else { "config" },
        );
        profile
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracker_core::logging::init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Day { record, profile } => cmd_day(&record, profile.resolve(&config)),
        Commands::Training {
            record,
            profile,
            json,
        } => cmd_training(&record, profile.resolve(&config), json),
    }
}

fn cmd_day(record: &str, profile: BiometricProfile) -> Result<()> {
    let report = day_report(record, profile.weight_kg, profile.height_cm);
    if report.is_empty() {
        return Err(Error::Other(format!("No report for day record {:?}", record)));
    }
    print!("{}", report);
    Ok(())
}

fn cmd_training(record: &str, profile: BiometricProfile, json: bool) -> Result<()> {
    if json {
        let info = training_info(record, profile.weight_kg, profile.height_cm)?;
        let out = serde_json::to_string_pretty(&info)
            .map_err(|e| Error::Other(format!("Failed to serialize report: {}", e)))?;
        println!("{}", out);
    } else {
        let report = training_report(record, profile.weight_kg, profile.height_cm)?;
        print!("{}", report);
    }
    Ok(())
}
