use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum KMeansError {
    #[error("Cannot cluster an empty dataset")]
    EmptyInput,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Requested {requested} distinct means but only {available} distinct points exist")]
    InsufficientDistinctPoints { requested: usize, available: usize },
}
