use periop_core::models::*;
use serde_json::json;

#[test]
fn raw_value_coercion_rules() {
    assert_eq!(RawValue::Missing.coerce("f", None).unwrap(), 0.0);
    assert_eq!(RawValue::Text("".into()).coerce("f", None).unwrap(), 0.0);
    assert_eq!(RawValue::Text("  \t".into()).coerce("f", None).unwrap(), 0.0);
    assert_eq!(RawValue::Text(" 12.5 ".into()).coerce("f", None).unwrap(), 12.5);
    assert_eq!(RawValue::Numeric(-3.0).coerce("f", None).unwrap(), -3.0);

    let err = RawValue::Text("12,5".into()).coerce("BMI", Some(4)).unwrap_err();
    assert_eq!(err.feature, "BMI");
    assert_eq!(err.row, Some(4));
    assert_eq!(err.value, "12,5");

    assert!(RawValue::Numeric(f64::INFINITY).coerce("f", None).is_err());
    assert!(RawValue::Text("NaN".into()).coerce("f", None).is_err());
}

#[test]
fn json_values_map_to_raw_values() {
    assert_eq!(RawValue::from(json!(null)), RawValue::Missing);
    assert_eq!(RawValue::from(json!(true)), RawValue::Numeric(1.0));
    assert_eq!(RawValue::from(json!(false)), RawValue::Numeric(0.0));
    assert_eq!(RawValue::from(json!(42)), RawValue::Numeric(42.0));
    assert_eq!(RawValue::from(json!("7")), RawValue::Text("7".into()));
    assert!(matches!(RawValue::from(json!([1, 2])), RawValue::Text(_)));
    assert!(RawValue::from(json!({"a": 1})).coerce("f", None).is_err());
}

#[test]
fn record_deserializes_from_json_object() {
    let record: Record = serde_json::from_value(json!({
        "年龄": 65,
        "BMI": "24.5",
        "高血压": null
    }))
    .unwrap();

    assert_eq!(record.len(), 3);
    assert_eq!(record.get("年龄"), Some(&RawValue::Numeric(65.0)));
    assert_eq!(record.get("BMI"), Some(&RawValue::Text("24.5".into())));
    assert!(record.get("高血压").unwrap().is_empty());
    assert!(!record.contains("手术时间"));
}

#[test]
fn record_from_row_pairs_header_with_cells() {
    let columns = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    let record = Record::from_row(&columns, &["1", "2"]);

    assert_eq!(record.len(), 2);
    assert_eq!(record.get("b"), Some(&RawValue::Text("2".into())));
    assert!(!record.contains("c"));
}

#[test]
fn outcome_tie_goes_negative() {
    assert_eq!(Outcome::from_score(0.0), Outcome::Negative);
    assert_eq!(Outcome::from_score(-0.0), Outcome::Negative);
    assert_eq!(Outcome::from_score(1e-300), Outcome::Positive);
    assert_eq!(Outcome::Positive.as_int(), 1);
    assert_eq!(Outcome::Negative.label(), "Negative");
}

#[test]
fn prediction_result_derives_class_and_confidence() {
    let result = PredictionResult::new(-1.0, 0.25);
    assert_eq!(result.outcome, Outcome::Negative);
    assert_eq!(result.predicted_class(), 0);
    assert_eq!(result.negative_probability(), 0.75);
    assert_eq!(result.confidence, 0.75);
}

#[test]
fn batch_summary_counts_entries() {
    let entries = vec![
        BatchEntry::Success {
            row: 1,
            result: PredictionResult::new(1.0, 0.7),
        },
        BatchEntry::Failure {
            row: 2,
            error: "bad".into(),
        },
        BatchEntry::Success {
            row: 3,
            result: PredictionResult::new(-1.0, 0.3),
        },
    ];
    let summary = BatchSummary::from_entries(&entries);
    assert_eq!(
        summary,
        BatchSummary {
            total: 3,
            succeeded: 2,
            failed: 1
        }
    );
    assert_eq!(entries[1].error(), Some("bad"));
    assert!(entries[1].result().is_none());
}

#[test]
fn failure_entry_serializes_as_row_and_error() {
    let entry = BatchEntry::Failure {
        row: 9,
        error: "row 9: feature 'BMI' has non-numeric value 'x'".into(),
    };
    assert_eq!(
        serde_json::to_value(&entry).unwrap(),
        json!({"row": 9, "error": "row 9: feature 'BMI' has non-numeric value 'x'"})
    );
}

#[test]
fn feature_catalog_splits_categorical_and_numerical() {
    let catalog = FeatureCatalog::default();
    assert_eq!(catalog.categorical_features.len(), 6);
    assert_eq!(catalog.numerical_features.len(), 23);
    assert!(catalog.is_categorical("ASA"));
    assert!(!catalog.is_categorical("NLR"));
    assert_eq!(catalog.all_features()[0], "性别");
}

#[test]
fn provenance_serializes_with_kind_tag() {
    let degraded = ModelProvenance::Defaults {
        reason: "missing".into(),
    };
    assert!(degraded.is_degraded());
    assert_eq!(
        serde_json::to_value(&degraded).unwrap(),
        json!({"kind": "defaults", "reason": "missing"})
    );
    assert!(!ModelProvenance::Builtin.is_degraded());
}

#[test]
fn template_example_record_has_every_column() {
    let template = TemplateRow {
        columns: vec!["年龄".into(), "BMI".into()],
        example: vec![65.0, 24.0],
    };
    let record = template.example_record();
    assert_eq!(record.get("BMI"), Some(&RawValue::Numeric(24.0)));
    assert_eq!(record.len(), 2);
}

#[test]
fn whitespace_only_json_text_matches_blank_table_cell() {
    let from_json: Record = serde_json::from_value(json!({"BMI": "   "})).unwrap();
    let from_row = Record::from_row(&["BMI".to_string()], &["   "]);

    let json_value = from_json.get("BMI").unwrap().coerce("BMI", None).unwrap();
    let cell_value = from_row.get("BMI").unwrap().coerce("BMI", Some(1)).unwrap();
    assert_eq!(json_value, 0.0);
    assert_eq!(json_value, cell_value);
}
