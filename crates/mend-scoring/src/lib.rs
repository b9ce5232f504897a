//! mend-scoring
//!
//! The risk scorer: a pure mapping from a daily self-report to a risk score,
//! level and recommendation. No I/O and no clock unless the caller asks for
//! one through [`assess_now`]. Validation and the review pipeline sit next to
//! the scorer but never inside it.

pub mod error;
pub mod review;
pub mod scorer;
pub mod validation;

pub use scorer::{SubScores, Weights, assess, assess_now, score};
