use serde::{Deserialize, Serialize};

use mend_core::models::assessment::RiskLevel;

/// Dashboard styling: one background color per risk level plus card geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStyles {
    pub low_color: String,
    pub moderate_color: String,
    pub high_color: String,

    /// Card padding in pixels.
    pub padding_px: u32,

    /// Card corner radius in pixels.
    pub radius_px: u32,
}

impl DashboardStyles {
    pub fn color_for(&self, level: RiskLevel) -> &str {
        match level {
            RiskLevel::Low => &self.low_color,
            RiskLevel::Moderate => &self.moderate_color,
            RiskLevel::High => &self.high_color,
        }
    }
}

impl Default for DashboardStyles {
    fn default() -> Self {
        Self {
            low_color: "#90EE90".to_string(),
            moderate_color: "#FFA500".to_string(),
            high_color: "#FF6347".to_string(),
            padding_px: 15,
            radius_px: 10,
        }
    }
}
