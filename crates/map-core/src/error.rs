use thiserror::Error;

/// Rejected configuration, reported by [`crate::PaperConfig::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("pieces.amount must be at least 1")]
    NoPieces,
    #[error("pieces.amount must be at most {max} (got {amount})")]
    TooManyPieces { amount: usize, max: usize },
    #[error("pieces.{field} must not exceed {max}px (got {value})")]
    TooLarge {
        field: &'static str,
        value: f64,
        max: f64,
    },
    #[error("pieces.{field} must be a finite number greater than 0 (got {value})")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must be a finite number (got {value})")]
    NotFinite { field: &'static str, value: f64 },
    #[error("map.foldAngle must lie strictly between -90 and 90 degrees (got {0})")]
    FoldAngleOutOfRange(f64),
    #[error("pieces.aspect.{field} is not a usable color: '{value}'")]
    BadColor { field: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("missing axis in {0} function")]
    MissingAxis(&'static str),
    #[error("unknown axis '{0}', expected x, y or z")]
    UnknownAxis(String),
}
