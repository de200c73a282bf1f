use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Conjunction risk tier, ordered by severity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Distance thresholds for the rule-based classifier, in kilometers.
///
/// Both bounds are exclusive upper bounds on the tier below them: a distance
/// of exactly `high_km` classifies as Medium, exactly `medium_km` as Low.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RiskThresholds {
    #[serde(default = "default_high_km")]
    pub high_km: f64,
    #[serde(default = "default_medium_km")]
    pub medium_km: f64,
}

fn default_high_km() -> f64 {
    50.0
}

fn default_medium_km() -> f64 {
    200.0
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            high_km: default_high_km(),
            medium_km: default_medium_km(),
        }
    }
}

impl RiskThresholds {
    pub fn classify(&self, distance_km: f64) -> RiskLevel {
        if distance_km < self.high_km {
            RiskLevel::High
        } else if distance_km < self.medium_km {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}
