//! Error types shared by the dataset, split and tree modules.

use thiserror::Error;

/// Errors produced while validating inputs or growing a tree.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("Proportion {0} is outside of [0, 1]")]
    InvalidProportion(f64),

    #[error("Degenerate split: left has {left} examples, right has {right}")]
    DegenerateSplit { left: usize, right: usize },

    #[error("Node has no examples")]
    EmptyNode,

    #[error("Dataset has {rows} rows but {labels} labels")]
    LengthMismatch { rows: usize, labels: usize },

    #[error("Expected {expected} feature columns, got {got}")]
    FeatureCountMismatch { expected: usize, got: usize },

    #[error("Got {predictions} predictions for {labels} labels")]
    PredictionLengthMismatch { labels: usize, predictions: usize },

    #[error("Feature index {index} out of range for {features} features")]
    FeatureOutOfRange { index: usize, features: usize },

    #[error("Example index {index} out of range for {rows} examples")]
    IndexOutOfRange { index: usize, rows: usize },

    #[error("Non-binary value {value} at row {row}, column {column}")]
    NonBinaryValue {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Row {row} has {len} features, expected {expected}")]
    RaggedRow { row: usize, len: usize, expected: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Got {names} feature names for {features} features")]
    FeatureNamesMismatch { names: usize, features: usize },

    #[error("Tree wasn't built yet")]
    NotFitted,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type for tree operations
pub type Result<T> = std::result::Result<T, TreeError>;
