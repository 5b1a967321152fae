/// Errors signaled by the geometry engine.
/// All of them are deterministic input-validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    #[error("too few control points: {required} required, got {actual}")]
    InvalidControlInput { required: usize, actual: usize },

    #[error("ragged control grid: row {row} has {actual} points, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("parameter out of range: {0}")]
    ParameterOutOfRange(String),

    #[error("degree {degree} exceeds the supported maximum {max}")]
    DegreeTooHigh { degree: usize, max: usize },

    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

pub type Result<T, E = GeometryError> = std::result::Result<T, E>;
