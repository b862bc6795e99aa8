use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClassifierError>;

/// Precondition failures of the scoring engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifierError {
    /// Scoring needs at least one ingested training post.
    #[error("classifier was trained on zero posts")]
    EmptyTrainingSet,

    /// A score was requested for a label that never appeared in training.
    #[error("unknown label: {0}")]
    UnknownLabel(String),
}
