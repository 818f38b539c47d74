use std::path::PathBuf;

use rhdl::prelude::RHDLError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_yml::Error),

    #[error("simulation failed: {0}")]
    Simulation(#[from] RHDLError),

    #[error("file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("frame is empty")]
    EmptyFrame,

    #[error("row {row} has {found} samples, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("pixel {value} at row {row}, column {col} exceeds 4095")]
    PixelOutOfRange { row: usize, col: usize, value: u32 },

    #[error("row width must be at least 1")]
    ZeroRowWidth,

    #[error("at least one reset cycle is required")]
    NoResetCycles,

    #[error("bubble period must be at least 1")]
    ZeroBubblePeriod,

    #[error("{mismatches} of {total} outputs differ from the reference model")]
    ReferenceMismatch { mismatches: usize, total: usize },
}
