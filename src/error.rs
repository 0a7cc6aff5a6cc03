//! Errors raised while bringing up or driving the terminal front end.
//!
//! The simulation core itself never fails.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Raw mode, alternate screen, event polling or drawing failed
    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),

    /// The log file could not be opened
    #[error("Cannot open log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The canvas cannot fit a single grid cell
    #[error("Terminal too small: canvas is {width}x{height}, need at least one cell")]
    SurfaceTooSmall { width: u16, height: u16 },
}

impl AppError {
    pub fn log_file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::LogFile {
            path: path.into(),
            source,
        }
    }
}
