use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures of the collaborators around the scorer. Scoring itself is total.
#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("report source failed: {0}")]
    Source(#[source] BoxError),

    #[error("presentation sink failed: {0}")]
    Sink(#[source] BoxError),
}
