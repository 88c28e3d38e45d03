//! Water quality assessment engine.
//!
//! Pure and stateless: three readings go in, per-parameter assessments, a
//! composite index, and an admissibility verdict come out. Nothing here does
//! I/O and nothing can fail. Inputs are assumed to be well-formed numbers;
//! validation belongs to [`form`](crate::form).

pub mod assess;
pub mod decide;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use assess::{assess_arsenic, assess_ph, assess_turbidity, compute_index};
pub use decide::decide;

/// One water sample, as entered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// pH, expected in [0, 14].
    pub ph: f64,
    /// Turbidity in NTU.
    pub turbidity: f64,
    /// Arsenic in µg/L.
    pub arsenic: f64,
}

/// The three measured parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    Ph,
    Turbidity,
    Arsenic,
}

impl Parameter {
    pub const ALL: [Parameter; 3] = [Parameter::Ph, Parameter::Turbidity, Parameter::Arsenic];

    pub fn label(self) -> &'static str {
        match self {
            Parameter::Ph => "pH",
            Parameter::Turbidity => "Turbidity",
            Parameter::Arsenic => "Arsenic",
        }
    }

    /// Display unit, empty for pH.
    pub fn unit(self) -> &'static str {
        match self {
            Parameter::Ph => "",
            Parameter::Turbidity => "NTU",
            Parameter::Arsenic => "µg/L",
        }
    }
}

/// Outcome of checking one parameter against its thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Ok,
    Caution,
    OutOfRange,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Ok => "OK",
            Status::Caution => "CAUTION",
            Status::OutOfRange => "OUT_OF_RANGE",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterAssessment {
    pub status: Status,
    /// 0..=100.
    pub score: u8,
    pub message: String,
}

impl ParameterAssessment {
    fn new(status: Status, score: u8, message: impl Into<String>) -> Self {
        Self {
            status,
            score,
            message: message.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}

/// Assessments for all three parameters of one reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessments {
    pub ph: ParameterAssessment,
    pub turbidity: ParameterAssessment,
    pub arsenic: ParameterAssessment,
}

impl Assessments {
    pub fn get(&self, parameter: Parameter) -> &ParameterAssessment {
        match parameter {
            Parameter::Ph => &self.ph,
            Parameter::Turbidity => &self.turbidity,
            Parameter::Arsenic => &self.arsenic,
        }
    }

    /// Assessments in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Parameter, &ParameterAssessment)> {
        Parameter::ALL.into_iter().map(|p| (p, self.get(p)))
    }

    pub fn all_ok(&self) -> bool {
        self.iter().all(|(_, a)| a.is_ok())
    }

    pub fn scores(&self) -> Scores {
        Scores {
            ph: self.ph.score,
            turbidity: self.turbidity.score,
            arsenic: self.arsenic.score,
        }
    }
}

/// Per-parameter scores fed into [`compute_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scores {
    pub ph: u8,
    pub turbidity: u8,
    pub arsenic: u8,
}

/// Index weights. Must sum to 1.0 for the index to stay within [0, 100];
/// [`Config`](crate::config::Config) enforces this when loading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub ph: f64,
    pub turbidity: f64,
    pub arsenic: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.ph + self.turbidity + self.arsenic
    }
}

impl Default for Weights {
    /// Arsenic counts double: it is the most severe health risk of the three.
    fn default() -> Self {
        Self {
            ph: 0.25,
            turbidity: 0.25,
            arsenic: 0.50,
        }
    }
}

/// Closed interval, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TurbidityLimits {
    /// Ideal at or below this, in NTU.
    pub good: f64,
    /// Tolerable at or below this, in NTU.
    pub acceptable: f64,
}

/// Fixed reference limits, built once at startup and owned by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceThresholds {
    pub ph: Range,
    pub turbidity: TurbidityLimits,
    /// Arsenic guideline value in µg/L.
    pub arsenic: f64,
}

impl ReferenceThresholds {
    /// WHO drinking-water guideline values.
    pub const WHO: ReferenceThresholds = ReferenceThresholds {
        ph: Range { min: 6.5, max: 8.5 },
        turbidity: TurbidityLimits {
            good: 1.0,
            acceptable: 5.0,
        },
        arsenic: 10.0,
    };
}

impl Default for ReferenceThresholds {
    fn default() -> Self {
        Self::WHO
    }
}

/// Final admissibility of the sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    Apta,
    AptaConPrecaucion,
    NoApta,
}

impl Decision {
    pub fn label(self) -> &'static str {
        match self {
            Decision::Apta => "APTA",
            Decision::AptaConPrecaucion => "APTA CON PRECAUCIÓN",
            Decision::NoApta => "NO APTA",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Decision::Apta => "✔",
            Decision::AptaConPrecaucion => "⚠",
            Decision::NoApta => "✗",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A decision plus the sentence explaining it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub decision: Decision,
    pub text: &'static str,
}

/// Everything produced by one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub reading: Reading,
    pub assessments: Assessments,
    /// Composite index in [0, 100]. Display rounded to one decimal.
    pub index: f64,
    pub decision: Decision,
    pub decision_text: &'static str,
}

/// Owns the thresholds and weights; evaluates readings against them.
#[derive(Debug, Clone, Default)]
pub struct AssessmentEngine {
    thresholds: ReferenceThresholds,
    weights: Weights,
}

impl AssessmentEngine {
    pub fn new(thresholds: ReferenceThresholds, weights: Weights) -> Self {
        Self {
            thresholds,
            weights,
        }
    }

    pub fn thresholds(&self) -> &ReferenceThresholds {
        &self.thresholds
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn assess(&self, reading: &Reading) -> Assessments {
        Assessments {
            ph: assess_ph(&self.thresholds, reading.ph),
            turbidity: assess_turbidity(&self.thresholds, reading.turbidity),
            arsenic: assess_arsenic(&self.thresholds, reading.arsenic),
        }
    }

    pub fn evaluate(&self, reading: Reading) -> Evaluation {
        let assessments = self.assess(&reading);
        let index = compute_index(&assessments.scores(), &self.weights);
        let verdict = decide(&assessments, index);

        tracing::debug!(
            ph = reading.ph,
            turbidity = reading.turbidity,
            arsenic = reading.arsenic,
            index,
            decision = %verdict.decision,
            "sample evaluated"
        );

        Evaluation {
            reading,
            assessments,
            index,
            decision: verdict.decision,
            decision_text: verdict.text,
        }
    }
}
