//! Per-parameter threshold checks and the weighted index.
//!
//! Messages carry the reading unrounded: a value just past a limit must not
//! read as the limit itself.

use super::{ParameterAssessment, ReferenceThresholds, Scores, Status, Weights};
use crate::consts::format_value;

pub fn assess_ph(thresholds: &ReferenceThresholds, value: f64) -> ParameterAssessment {
    if thresholds.ph.contains(value) {
        return ParameterAssessment::new(Status::Ok, 100, "pH within recommended range.");
    }
    ParameterAssessment::new(
        Status::OutOfRange,
        50,
        format!("pH out of range ({}).", format_value(value, "")),
    )
}

/// First match wins: good, then acceptable, then out of range.
pub fn assess_turbidity(thresholds: &ReferenceThresholds, value: f64) -> ParameterAssessment {
    let limits = thresholds.turbidity;
    if value <= limits.good {
        ParameterAssessment::new(
            Status::Ok,
            100,
            format!("Ideal turbidity (≤ {}).", format_value(limits.good, "NTU")),
        )
    } else if value <= limits.acceptable {
        ParameterAssessment::new(
            Status::Caution,
            70,
            format!("Moderate turbidity ({}).", format_value(value, "NTU")),
        )
    } else {
        ParameterAssessment::new(
            Status::OutOfRange,
            30,
            format!("High turbidity ({}).", format_value(value, "NTU")),
        )
    }
}

/// A failing arsenic reading scores 0 so it drags the index down on its own.
pub fn assess_arsenic(thresholds: &ReferenceThresholds, value: f64) -> ParameterAssessment {
    if value <= thresholds.arsenic {
        return ParameterAssessment::new(Status::Ok, 100, "Arsenic below guideline limit.");
    }
    ParameterAssessment::new(
        Status::OutOfRange,
        0,
        format!("High arsenic: {}.", format_value(value, "µg/L")),
    )
}

/// Weighted sum of the three scores. Weight sum is not checked here.
pub fn compute_index(scores: &Scores, weights: &Weights) -> f64 {
    f64::from(scores.ph) * weights.ph
        + f64::from(scores.turbidity) * weights.turbidity
        + f64::from(scores.arsenic) * weights.arsenic
}
