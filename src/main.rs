// SPDX-License-Identifier: GPL-3.0-only

use camera_control::{Platform, Rig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "camera-control")]
#[command(about = "Camera capture controller driven against a virtual camera")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate a virtual rig and show the selector layout
    List {
        /// Lens layout to simulate
        #[arg(short, long, default_value = "dual")]
        rig: Rig,
    },

    /// Drive a controller with a script of timed intents
    Run {
        /// Lens layout to simulate
        #[arg(short, long, default_value = "dual")]
        rig: Rig,

        /// JSON script file (default: take one photo)
        #[arg(short, long)]
        script: Option<PathBuf>,

        /// Platform profile (overrides the config file)
        #[arg(short, long)]
        platform: Option<Platform>,

        /// Config file (default: user config dir)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=camera_control=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List { rig } => cli::list_cameras(rig),
        Commands::Run {
            rig,
            script,
            platform,
            config,
        } => cli::run_script(rig, script, platform, config),
    }
}
