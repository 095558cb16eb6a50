use periop_core::config::BatchConfig;
use periop_core::models::{ModelProvenance, Outcome, Record};
use periop_inference::calibration::{calibrate, to_probability};
use periop_inference::{BatchRunner, FeatureSchema, ModelArtifact, ModelHandle};
use proptest::prelude::*;

fn feature_names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("x{i}")).collect()
}

fn arb_handle() -> impl Strategy<Value = ModelHandle> {
    (1usize..8).prop_flat_map(|n| {
        (
            prop::collection::vec(-5.0f64..5.0, n),
            -5.0f64..5.0,
            prop::collection::vec(-100.0f64..100.0, n),
            prop::collection::vec(0.01f64..50.0, n),
        )
            .prop_map(move |(weights, intercept, center, scale)| {
                let artifact = ModelArtifact {
                    feature_order: feature_names(n),
                    weights,
                    intercept,
                    center,
                    scale,
                    model_id: None,
                    model_version: None,
                };
                ModelHandle::from_artifact(
                    artifact,
                    ModelProvenance::Source {
                        origin: "<proptest>".into(),
                    },
                )
                .unwrap()
            })
    })
}

fn arb_record(schema: &FeatureSchema) -> impl Strategy<Value = Record> {
    let names = schema.names().to_vec();
    prop::collection::vec(prop::option::of(-1_000.0f64..1_000.0), names.len()).prop_map(
        move |values| {
            names
                .iter()
                .zip(values)
                .filter_map(|(name, value)| value.map(|v| (name.clone(), v)))
                .collect()
        },
    )
}

// ── Calibration ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn sigmoid_is_symmetric(score in -700.0f64..700.0) {
        let sum = to_probability(score) + to_probability(-score);
        prop_assert!((sum - 1.0).abs() < 1e-12, "p(s) + p(-s) = {}", sum);
    }

    #[test]
    fn probability_stays_in_unit_interval(score in proptest::num::f64::NORMAL) {
        let p = to_probability(score);
        prop_assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn outcome_follows_score_sign(score in -50.0f64..50.0) {
        let result = calibrate(score);
        let expected = if score > 0.0 { Outcome::Positive } else { Outcome::Negative };
        prop_assert_eq!(result.outcome, expected);
        prop_assert!(result.confidence >= 0.5);
        prop_assert!(result.confidence <= 1.0);
    }
}

// ── Pipeline ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prediction_is_deterministic(
        (handle, record) in arb_handle().prop_flat_map(|h| {
            let records = arb_record(h.schema());
            (Just(h), records)
        })
    ) {
        let first = handle.predict(&record).unwrap();
        let second = handle.predict(&record).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn default_model_probability_is_bounded_or_rejected(
        values in prop::collection::vec(proptest::num::f64::NORMAL, 17)
    ) {
        let handle = ModelHandle::builtin().unwrap();
        let record: Record = handle
            .schema()
            .iter()
            .zip(values)
            .map(|(name, value)| (name.to_string(), value))
            .collect();
        if let Ok(result) = handle.predict(&record) {
            prop_assert!(result.score.is_finite());
            prop_assert!((0.0..=1.0).contains(&result.positive_probability));
            prop_assert!((0.5..=1.0).contains(&result.confidence));
        }
    }

    #[test]
    fn absent_field_equals_explicit_zero(handle in arb_handle(), seed in 0usize..8) {
        let missing_index = seed % handle.schema().len();
        let mut explicit = Record::new();
        let mut partial = Record::new();
        for (i, name) in handle.schema().iter().enumerate() {
            explicit.insert(name, if i == missing_index { 0.0 } else { 1.5 });
            if i != missing_index {
                partial.insert(name, 1.5);
            }
        }
        prop_assert_eq!(handle.predict(&explicit).unwrap(), handle.predict(&partial).unwrap());
    }

    #[test]
    fn batch_reports_every_row(handle in arb_handle(), rows in 1usize..40, bad_every in 2usize..6) {
        let schema = handle.schema().clone();
        let records: Vec<Record> = (0..rows)
            .map(|r| {
                schema
                    .iter()
                    .map(|name| {
                        if r % bad_every == 0 {
                            (name.to_string(), "not-a-number".to_string())
                        } else {
                            (name.to_string(), r.to_string())
                        }
                    })
                    .collect()
            })
            .collect();

        let entries = BatchRunner::new(handle, BatchConfig::default()).run(&records).unwrap();
        prop_assert_eq!(entries.len(), rows);
        for (index, entry) in entries.iter().enumerate() {
            prop_assert_eq!(entry.row(), index + 1);
            prop_assert_eq!(entry.is_success(), index % bad_every != 0);
        }
    }
}
