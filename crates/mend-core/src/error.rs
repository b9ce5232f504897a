use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown pain scale: {0}")]
    UnknownPainScale(String),

    #[error("unknown risk level: {0}")]
    UnknownRiskLevel(String),
}
