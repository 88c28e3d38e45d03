//! Admissibility verdict.

use super::{Assessments, Decision, Status, Verdict};

/// Minimum index for full approval (all parameters must also be OK).
pub const APTA_MIN_INDEX: f64 = 85.0;

/// Minimum index for approval with additional treatment.
pub const PRECAUTION_MIN_INDEX: f64 = 60.0;

/// Ordered guard clauses, first match wins. Arsenic out of range vetoes
/// everything, independent of the index.
pub fn decide(assessments: &Assessments, index: f64) -> Verdict {
    if assessments.arsenic.status == Status::OutOfRange {
        return Verdict {
            decision: Decision::NoApta,
            text: "Water is not fit for human consumption due to elevated arsenic.",
        };
    }

    if index >= APTA_MIN_INDEX && assessments.all_ok() {
        return Verdict {
            decision: Decision::Apta,
            text: "Water is fit for human consumption.",
        };
    }

    if index >= PRECAUTION_MIN_INDEX {
        return Verdict {
            decision: Decision::AptaConPrecaucion,
            text: "Water can be consumed with additional treatment.",
        };
    }

    Verdict {
        decision: Decision::NoApta,
        text: "Water is not fit for consumption without additional treatment.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ParameterAssessment;

    fn a(status: Status, score: u8) -> ParameterAssessment {
        ParameterAssessment::new(status, score, "")
    }

    fn all_ok() -> Assessments {
        Assessments {
            ph: a(Status::Ok, 100),
            turbidity: a(Status::Ok, 100),
            arsenic: a(Status::Ok, 100),
        }
    }

    #[test]
    fn arsenic_vetoes_even_a_perfect_index() {
        let assessments = Assessments {
            arsenic: a(Status::OutOfRange, 0),
            ..all_ok()
        };
        let v = decide(&assessments, 100.0);
        assert_eq!(v.decision, Decision::NoApta);
        assert!(v.text.contains("arsenic"));
    }

    #[test]
    fn all_ok_and_high_index_is_apta() {
        let v = decide(&all_ok(), 85.0);
        assert_eq!(v.decision, Decision::Apta);
    }

    #[test]
    fn high_index_with_caution_is_precaution() {
        let assessments = Assessments {
            turbidity: a(Status::Caution, 70),
            ..all_ok()
        };
        assert_eq!(
            decide(&assessments, 92.5).decision,
            Decision::AptaConPrecaucion
        );
    }

    #[test]
    fn all_ok_but_low_index_is_not_apta() {
        // Only reachable with non-default weights.
        assert_eq!(decide(&all_ok(), 84.9).decision, Decision::AptaConPrecaucion);
        assert_eq!(decide(&all_ok(), 59.9).decision, Decision::NoApta);
    }

    #[test]
    fn precaution_boundary_is_inclusive() {
        let assessments = Assessments {
            ph: a(Status::OutOfRange, 50),
            ..all_ok()
        };
        assert_eq!(
            decide(&assessments, 60.0).decision,
            Decision::AptaConPrecaucion
        );
    }

    #[test]
    fn low_index_without_arsenic_uses_treatment_text() {
        let assessments = Assessments {
            ph: a(Status::OutOfRange, 50),
            turbidity: a(Status::OutOfRange, 30),
            ..all_ok()
        };
        let v = decide(&assessments, 40.0);
        assert_eq!(v.decision, Decision::NoApta);
        assert!(v.text.contains("without additional treatment"));
    }
}
