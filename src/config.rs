use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Conway's Game of Life in the terminal, with pattern recording.
#[derive(Parser, Debug, Clone)]
#[command(name = "life_recorder")]
#[command(about = "Run Conway's Game of Life and record your own starting patterns", long_about = None)]
pub struct Args {
    /// Built-in seed to start with (glider, oscillator); empty starts nothing
    #[arg(short, long, default_value = "glider")]
    pub pattern: String,

    /// Milliseconds between generations
    #[arg(short, long = "tick-ms", default_value = "500", value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// Terminal cells per grid cell along each axis
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u16).range(1..))]
    pub pitch: u16,

    /// File receiving log output
    #[arg(long, default_value = "life_recorder.log")]
    pub log_file: PathBuf,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn pitch(&self) -> usize {
        self.pitch as usize
    }
}
