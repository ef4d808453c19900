// main.rs
mod cli;
mod config;
mod core;

use clap::Parser;
use cli::{Args, Commands};

fn main() {
    let args = Args::parse();

    let result = match args.command {
        Commands::Estimate {
            wake,
            sleep_goal,
            coffee,
            data_dir,
        } => cli::handle_estimate(wake, sleep_goal, coffee, data_dir),
        Commands::Config { data_dir } => cli::handle_config(data_dir),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}
