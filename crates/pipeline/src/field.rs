//! Field tools: sample purity estimate and harvest planning.
//!
//! Both are fixed rules over a moisture / HMF reading and a hive strength
//! note. Nothing here touches the network or the corpus.

use honeyscope_core::{AppError, AppResult};
use serde::Serialize;
use std::str::FromStr;

/// Moisture assumed when a sample has no reading (%).
pub const DEFAULT_MOISTURE: f64 = 20.0;

/// HMF assumed when a sample has no reading (mg/kg).
pub const DEFAULT_HMF: f64 = 10.0;

/// Moisture above which purity starts to drop (%).
pub const MOISTURE_PENALTY_START: f64 = 17.0;

/// Moisture above which harvest is postponed (%).
pub const HARVEST_MOISTURE_LIMIT: f64 = 19.0;

/// Moisture at or below which the short harvest window applies (%).
pub const SHORT_WINDOW_MOISTURE: f64 = 18.0;

const MOISTURE_PENALTY: f64 = 3.0;
const HMF_PENALTY: f64 = 0.5;
const MAX_CONFIDENCE: f64 = 0.99;

const SAFETY_CHECKLIST: [&str; 3] = [
    "Wear protective gear",
    "Smoke bees gently",
    "Check for brood frames before extraction",
];

/// A honey sample reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleFeatures {
    /// Water content, percent
    pub moisture: f64,
    /// Hydroxymethylfurfural, mg/kg
    pub hmf: f64,
}

impl Default for SampleFeatures {
    fn default() -> Self {
        Self {
            moisture: DEFAULT_MOISTURE,
            hmf: DEFAULT_HMF,
        }
    }
}

impl SampleFeatures {
    /// Build a reading; missing values take the defaults.
    pub fn new(moisture: Option<f64>, hmf: Option<f64>) -> AppResult<Self> {
        let sample = Self {
            moisture: moisture.unwrap_or(DEFAULT_MOISTURE),
            hmf: hmf.unwrap_or(DEFAULT_HMF),
        };
        for (name, value) in [("moisture", sample.moisture), ("hmf", sample.hmf)] {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::Config(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(sample)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PurityLabel {
    High,
    Medium,
    Low,
}

impl PurityLabel {
    fn for_score(score: f64) -> Self {
        if score >= 80.0 {
            PurityLabel::High
        } else if score >= 60.0 {
            PurityLabel::Medium
        } else {
            PurityLabel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PurityLabel::High => "High",
            PurityLabel::Medium => "Medium",
            PurityLabel::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurityEstimate {
    /// In `[0, 100]`, one decimal
    pub purity_percent: f64,
    pub label: PurityLabel,
    /// In `[0, 0.99]`, two decimals
    pub confidence: f64,
}

/// Rule-based purity estimate.
///
/// Starts at 100, loses 3 points per moisture percent above 17 and half a
/// point per mg/kg of HMF, clamped to `[0, 100]`.
pub fn estimate_purity(sample: &SampleFeatures) -> PurityEstimate {
    let mut score = 100.0;
    score -= ((sample.moisture - MOISTURE_PENALTY_START) * MOISTURE_PENALTY).max(0.0);
    score -= sample.hmf * HMF_PENALTY;
    let score = score.clamp(0.0, 100.0);

    PurityEstimate {
        purity_percent: round_to(score, 1),
        label: PurityLabel::for_score(score),
        confidence: round_to((score / 100.0).min(MAX_CONFIDENCE), 2),
    }
}

/// Colony strength as noted at inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HiveStrength {
    Strong,
    Moderate,
    Weak,
    #[default]
    Unknown,
}

impl FromStr for HiveStrength {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "strong" => Ok(HiveStrength::Strong),
            "moderate" | "medium" => Ok(HiveStrength::Moderate),
            "weak" => Ok(HiveStrength::Weak),
            "unknown" | "" => Ok(HiveStrength::Unknown),
            other => Err(AppError::Config(format!(
                "Unknown hive strength {:?} (expected strong, moderate, weak or unknown)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HarvestPlan {
    pub advice: &'static str,
    pub recommended_window_days: u32,
    pub safety_checklist: Vec<&'static str>,
}

/// Harvest advice for a hive and its latest sample.
///
/// High moisture outranks a weak colony.
pub fn plan_harvest(strength: HiveStrength, sample: &SampleFeatures) -> HarvestPlan {
    let advice = if sample.moisture > HARVEST_MOISTURE_LIMIT {
        "Moisture high: delay harvest and dry frames."
    } else if strength == HiveStrength::Weak {
        "Consider supplemental feeding and wait 2-3 weeks."
    } else {
        "Safe to harvest within next 3-7 days."
    };

    let plan = HarvestPlan {
        advice,
        recommended_window_days: if sample.moisture <= SHORT_WINDOW_MOISTURE { 3 } else { 7 },
        safety_checklist: SAFETY_CHECKLIST.to_vec(),
    };
    tracing::info!(
        moisture = sample.moisture,
        strength = ?strength,
        window_days = plan.recommended_window_days,
        "Harvest plan ready"
    );
    plan
}

/// Purity estimate and harvest plan for one inspection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldReport {
    pub sample: SampleFeatures,
    pub strength: HiveStrength,
    pub purity: PurityEstimate,
    pub harvest: HarvestPlan,
}

pub fn assess(strength: HiveStrength, sample: SampleFeatures) -> FieldReport {
    FieldReport {
        purity: estimate_purity(&sample),
        harvest: plan_harvest(strength, &sample),
        sample,
        strength,
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
