use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Textured-earth sphere and fly camera, driven headless.
#[derive(Parser, Debug)]
#[command(name = "marble", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. `debug`, `marble=trace`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Run the frame loop without a window, replaying scripted input.
    Run {
        /// Number of frames to simulate.
        #[arg(long, default_value_t = 60)]
        frames: u32,

        /// Seconds per simulated frame.
        #[arg(long, default_value_t = 1.0 / 60.0)]
        dt: f64,

        /// JSON file of `{ "frame": n, "event": {...} }` entries.
        #[arg(long)]
        script: Option<PathBuf>,
    },

    /// Generate the sphere mesh and optionally write it as JSON.
    Mesh {
        /// Samples per axis; defaults to `[sphere] resolution`.
        #[arg(long)]
        resolution: Option<u32>,

        /// Output file for the vertex and triangle buffers.
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Print the transform walkthrough.
    Transforms,

    /// Print the effective configuration as JSON.
    Config,
}

impl Default for Command {
    fn default() -> Self {
        Command::Run {
            frames: 60,
            dt: 1.0 / 60.0,
            script: None,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
