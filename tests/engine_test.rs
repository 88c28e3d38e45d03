use aquasens::engine::{
    AssessmentEngine, Decision, Evaluation, Reading, ReferenceThresholds, Scores, Status, Weights,
    assess_arsenic, assess_ph, assess_turbidity, compute_index,
};
use rand::RngExt;

const WHO: ReferenceThresholds = ReferenceThresholds::WHO;

fn evaluate(ph: f64, turbidity: f64, arsenic: f64) -> Evaluation {
    AssessmentEngine::default().evaluate(Reading {
        ph,
        turbidity,
        arsenic,
    })
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// ── Per-parameter properties ──────────────────────────────────────

#[test]
fn ph_inside_closed_interval_is_ok() {
    let mut rng = rand::rng();
    for _ in 0..500 {
        let v = rng.random_range(6.5..=8.5);
        let a = assess_ph(&WHO, v);
        assert_eq!((a.status, a.score), (Status::Ok, 100), "pH {v}");
    }
}

#[test]
fn ph_outside_interval_scores_50() {
    let mut rng = rand::rng();
    for _ in 0..500 {
        let below = rng.random_range(0.0..6.5);
        let above = rng.random_range(8.500001..=14.0);
        for v in [below, above] {
            let a = assess_ph(&WHO, v);
            assert_eq!((a.status, a.score), (Status::OutOfRange, 50), "pH {v}");
        }
    }
}

#[test]
fn turbidity_tiers_over_sampled_values() {
    let mut rng = rand::rng();
    for _ in 0..500 {
        let good = rng.random_range(0.0..=1.0);
        let moderate = rng.random_range(1.000001..=5.0);
        let high = rng.random_range(5.000001..1000.0);

        let a = assess_turbidity(&WHO, good);
        assert_eq!((a.status, a.score), (Status::Ok, 100), "turbidity {good}");
        let a = assess_turbidity(&WHO, moderate);
        assert_eq!((a.status, a.score), (Status::Caution, 70), "turbidity {moderate}");
        let a = assess_turbidity(&WHO, high);
        assert_eq!((a.status, a.score), (Status::OutOfRange, 30), "turbidity {high}");
    }
}

#[test]
fn turbidity_exact_boundaries() {
    assert_eq!(assess_turbidity(&WHO, 1.0).status, Status::Ok);
    assert_eq!(assess_turbidity(&WHO, 5.0).status, Status::Caution);
}

#[test]
fn arsenic_guideline_split() {
    let mut rng = rand::rng();
    for _ in 0..500 {
        let safe = rng.random_range(0.0..=10.0);
        let unsafe_ = rng.random_range(10.000001..500.0);

        let a = assess_arsenic(&WHO, safe);
        assert_eq!((a.status, a.score), (Status::Ok, 100), "arsenic {safe}");
        let a = assess_arsenic(&WHO, unsafe_);
        assert_eq!((a.status, a.score), (Status::OutOfRange, 0), "arsenic {unsafe_}");
    }
}

#[test]
fn index_with_default_weights_all_ok_is_100() {
    let scores = Scores {
        ph: 100,
        turbidity: 100,
        arsenic: 100,
    };
    assert_close(compute_index(&scores, &Weights::default()), 100.0);
}

#[test]
fn index_stays_in_range_for_any_reading() {
    let mut rng = rand::rng();
    let engine = AssessmentEngine::default();
    for _ in 0..1000 {
        let out = engine.evaluate(Reading {
            ph: rng.random_range(0.0..=14.0),
            turbidity: rng.random_range(0.0..20.0),
            arsenic: rng.random_range(0.0..30.0),
        });
        assert!((0.0..=100.0).contains(&out.index), "index {}", out.index);
    }
}

// ── Scenarios ─────────────────────────────────────────────────────

#[test]
fn full_pass() {
    let out = evaluate(7.0, 0.5, 5.0);
    assert!(out.assessments.all_ok());
    assert_close(out.index, 100.0);
    assert_eq!(out.decision, Decision::Apta);
}

#[test]
fn arsenic_veto() {
    let out = evaluate(7.0, 0.1, 15.0);
    assert_eq!(out.assessments.arsenic.status, Status::OutOfRange);
    assert_close(out.index, 50.0);
    assert_eq!(out.decision, Decision::NoApta);
    assert!(out.decision_text.contains("arsenic"));
}

#[test]
fn readings_just_past_limits_show_their_own_value() {
    let out = evaluate(8.501, 5.004, 10.004);
    assert_eq!(out.decision, Decision::NoApta);

    let messages: Vec<&str> = out
        .assessments
        .iter()
        .map(|(_, a)| a.message.as_str())
        .collect();
    assert!(messages[0].contains("8.501"), "{}", messages[0]);
    assert!(messages[1].contains("5.004 NTU"), "{}", messages[1]);
    assert!(messages[2].contains("10.004 µg/L"), "{}", messages[2]);
    assert!(messages.iter().all(|m| !m.contains("10.00 ")));
}

#[test]
fn arsenic_veto_holds_for_any_other_values() {
    let mut rng = rand::rng();
    let engine = AssessmentEngine::default();
    for _ in 0..500 {
        let out = engine.evaluate(Reading {
            ph: rng.random_range(0.0..=14.0),
            turbidity: rng.random_range(0.0..20.0),
            arsenic: rng.random_range(10.000001..100.0),
        });
        assert_eq!(out.decision, Decision::NoApta);
    }
}

#[test]
fn arsenic_veto_overrides_high_index_under_custom_weights() {
    // With arsenic nearly unweighted the index stays high; the veto must still apply.
    let engine = AssessmentEngine::new(
        WHO,
        Weights {
            ph: 0.495,
            turbidity: 0.495,
            arsenic: 0.01,
        },
    );
    let out = engine.evaluate(Reading {
        ph: 7.0,
        turbidity: 0.5,
        arsenic: 11.0,
    });
    assert!(out.index > 85.0);
    assert_eq!(out.decision, Decision::NoApta);
}

#[test]
fn caution_turbidity_blocks_full_approval() {
    let out = evaluate(7.0, 3.0, 5.0);
    assert_eq!(out.assessments.turbidity.status, Status::Caution);
    assert_eq!(out.assessments.turbidity.score, 70);
    assert_close(out.index, 92.5);
    assert_eq!(out.decision, Decision::AptaConPrecaucion);
}

#[test]
fn low_index_scenario() {
    let out = evaluate(9.0, 8.0, 5.0);
    assert_eq!(out.assessments.ph.score, 50);
    assert_eq!(out.assessments.turbidity.score, 30);
    assert_close(out.index, 70.0);
    assert_eq!(out.decision, Decision::AptaConPrecaucion);
}

#[test]
fn repeated_evaluation_is_identical() {
    let engine = AssessmentEngine::default();
    let reading = Reading {
        ph: 6.9,
        turbidity: 4.2,
        arsenic: 9.9,
    };
    let first = engine.evaluate(reading);
    for _ in 0..10 {
        assert_eq!(engine.evaluate(reading), first);
    }
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = std::sync::Arc::new(AssessmentEngine::default());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = engine.clone();
            std::thread::spawn(move || engine.evaluate(Reading {
                ph: 7.0,
                turbidity: 3.0,
                arsenic: 5.0,
            }))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().decision, Decision::AptaConPrecaucion);
    }
}

#[test]
fn evaluation_serializes_to_json() {
    let json = serde_json::to_value(evaluate(7.0, 3.0, 5.0)).unwrap();
    assert_eq!(json["decision"], "APTA_CON_PRECAUCION");
    assert_eq!(json["assessments"]["turbidity"]["status"], "CAUTION");
    assert_eq!(json["assessments"]["turbidity"]["score"], 70);
    assert_eq!(json["index"], 92.5);
    assert_eq!(json["reading"]["ph"], 7.0);
}
