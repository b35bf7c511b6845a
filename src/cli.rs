use clap::Parser;
use std::path::PathBuf;

use crate::entities::CubeDims;

// Build version with target info
const VERSION_INFO: &str = const_format::concatcp!(
    env!("CARGO_PKG_VERSION"), "\n",
    "UI:     eframe 0.33 / egui_dock 0.18\n",
    "Target: ", std::env::consts::ARCH, "-", std::env::consts::OS
);

/// LED cube animation editor
#[derive(Parser, Debug)]
#[command(author, version = VERSION_INFO, about, long_about = None)]
pub struct Args {
    /// Cube configuration to start with, as XxYxZ (e.g. 5x5x5)
    #[arg(long = "cube", value_name = "XxYxZ", value_parser = parse_cube)]
    pub cube: Option<CubeDims>,

    /// Number of frames to create
    #[arg(short = 'n', long = "frames", value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    pub frames: Option<u16>,

    /// Animation name (up to 32 characters)
    #[arg(long = "name", value_name = "NAME")]
    pub name: Option<String>,

    /// Start with the preview showing only the active layer
    #[arg(long = "layer-mode")]
    pub layer_mode: bool,

    /// Enable debug logging to file (default: ledcube.log in the data directory)
    #[arg(short = 'l', long = "log", value_name = "LOG_FILE")]
    pub log_file: Option<Option<PathBuf>>,

    /// Increase logging verbosity (default: warn, -v: info, -vv: debug, -vvv+: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Custom configuration directory (overrides default platform paths)
    #[arg(short = 'c', long = "config-dir", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

fn parse_cube(s: &str) -> Result<CubeDims, String> {
    s.parse::<CubeDims>().map_err(|e| e.to_string())
}

impl Args {
    /// Log level from the -v count
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbosity {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
