use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use crate::core::{estimate_bedtime, LinearSleepModel, WakeTime};

#[derive(Parser)]
#[command(name = "bedrest")]
#[command(about = "Suggest a bedtime from wake time, sleep goal and coffee intake")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate tonight's ideal bedtime
    Estimate {
        /// Wake-up time as HH:MM (default from config, initially 07:00)
        #[arg(short, long)]
        wake: Option<WakeTime>,
        /// Desired amount of sleep in hours (4.0 to 12.0)
        #[arg(short, long)]
        sleep_goal: Option<f64>,
        /// Daily coffee intake in cups (0 to 10)
        #[arg(short, long)]
        coffee: Option<u8>,
        /// Override the config directory
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
    /// Show the resolved configuration and model coefficients
    Config {
        /// Override the config directory
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
}

/// Input-range validation lives here, not in the estimator: the core treats
/// the ranges as preconditions the caller owns.
pub fn handle_estimate(
    wake: Option<WakeTime>,
    sleep_goal: Option<f64>,
    coffee: Option<u8>,
    data_dir: Option<PathBuf>,
) -> Result<()> {
    let config = Config::new(data_dir)?;

    let wake = wake.unwrap_or(config.defaults.wake);
    let sleep_goal = sleep_goal.unwrap_or(config.defaults.sleep_goal_hours);
    let coffee = coffee.unwrap_or(config.defaults.coffee_cups);

    if !(4.0..=12.0).contains(&sleep_goal) {
        bail!("Sleep goal must be between 4 and 12 hours (got {})", sleep_goal);
    }
    if coffee > 10 {
        bail!("Coffee intake must be between 0 and 10 cups (got {})", coffee);
    }

    let model = LinearSleepModel::new(config.model.clone());

    match estimate_bedtime(wake, sleep_goal, coffee, &model) {
        Ok(bedtime) => {
            println!("🌙 Your ideal bedtime is {}", bedtime);
            println!(
                "   (wake {}, sleep goal {} h, coffee {} cups)",
                wake, sleep_goal, coffee
            );
        }
        Err(e) => {
            eprintln!("❌ {}", e);
        }
    }

    Ok(())
}

pub fn handle_config(data_dir: Option<PathBuf>) -> Result<()> {
    let config = Config::new(data_dir)?;

    println!("📄 Config file: {}", config.config_file().display());
    println!("\nDefault inputs:");
    println!("  Wake time: {}", config.defaults.wake);
    println!("  Sleep goal: {} hours", config.defaults.sleep_goal_hours);
    println!("  Coffee: {} cups", config.defaults.coffee_cups);
    println!("\nModel coefficients (seconds of sleep need):");
    println!("  intercept: {}", config.model.intercept);
    println!("  wake: {}", config.model.wake);
    println!("  sleep_goal: {}", config.model.sleep_goal);
    println!("  coffee: {}", config.model.coffee);

    Ok(())
}
