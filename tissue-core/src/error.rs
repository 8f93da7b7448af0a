//! Error types for force application and configuration.

use crate::types::CellId;
use thiserror::Error;

/// Failure of a single force-application pass.
///
/// A pass that fails has written no force contributions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForceError {
    /// An intermediate angle or the resulting force is not a finite real value.
    #[error("degenerate geometry at cell {cell}: {detail}")]
    GeometryDegenerate { cell: CellId, detail: String },
    /// The membrane has no nodes, so there is no reference centre.
    #[error("membrane has no nodes; cannot compute the tissue centre")]
    EmptyMembrane,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cell radius must be finite and positive, got {0}")]
    InvalidRadius(f64),
    #[error("pressure must be finite, got {0}")]
    NonFinitePressure(f64),
    #[error("time step must be finite and positive, got {0}")]
    InvalidTimeStep(f64),
    #[error("damping must be finite and positive, got {0}")]
    InvalidDamping(f64),
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}
