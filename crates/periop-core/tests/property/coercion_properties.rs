use periop_core::models::{Outcome, RawValue, Record};
use proptest::prelude::*;

proptest! {
    #[test]
    fn finite_numbers_coerce_to_themselves(value in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
        prop_assert_eq!(RawValue::Numeric(value).coerce("f", None).unwrap(), value);
    }

    #[test]
    fn padded_number_text_parses_exactly(value in -1e9f64..1e9, left in 0usize..4, right in 0usize..4) {
        let text = format!("{}{}{}", " ".repeat(left), value, "\t".repeat(right));
        prop_assert_eq!(RawValue::Text(text).coerce("f", None).unwrap(), value);
    }

    #[test]
    fn whitespace_text_is_zero(spaces in "[ \t]{0,8}") {
        prop_assert_eq!(RawValue::Text(spaces).coerce("f", Some(1)).unwrap(), 0.0);
    }

    #[test]
    fn alphabetic_text_is_rejected_with_context(word in "[g-z]{1,12}", row in 1usize..10_000) {
        let err = RawValue::Text(word.clone()).coerce("前肌酐", Some(row)).unwrap_err();
        prop_assert_eq!(err.row, Some(row));
        prop_assert_eq!(err.value, word);
    }

    #[test]
    fn outcome_is_positive_only_above_zero(score in -1e6f64..1e6) {
        prop_assert_eq!(Outcome::from_score(score) == Outcome::Positive, score > 0.0);
    }

    #[test]
    fn record_json_round_trips(values in prop::collection::hash_map("[a-z]{1,6}", -1e6f64..1e6, 0..12)) {
        let record: Record = values.iter().map(|(k, v)| (k.clone(), *v)).collect();
        let json = serde_json::to_string(&record).unwrap();
        let parsed: Record = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, record);
    }
}
