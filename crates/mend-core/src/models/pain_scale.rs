use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The pain scale patients report against.
///
/// Only validation looks at this; the scorer always divides by ten.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PainScale {
    /// 0–10 inclusive, the patient form slider.
    #[default]
    ZeroToTen,
    /// 1–10 inclusive.
    OneToTen,
}

impl PainScale {
    pub fn min(&self) -> f64 {
        match self {
            PainScale::ZeroToTen => 0.0,
            PainScale::OneToTen => 1.0,
        }
    }

    pub fn max(&self) -> f64 {
        10.0
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min() && value <= self.max()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PainScale::ZeroToTen => "zero_to_ten",
            PainScale::OneToTen => "one_to_ten",
        }
    }
}

impl fmt::Display for PainScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PainScale {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "zero_to_ten" | "0_10" => Ok(PainScale::ZeroToTen),
            "one_to_ten" | "1_10" => Ok(PainScale::OneToTen),
            other => Err(CoreError::UnknownPainScale(other.to_string())),
        }
    }
}
