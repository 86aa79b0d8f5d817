//! Property tests: determinism, score bounds, validity/error
//! correspondence, and the required-field score arithmetic.

use anthro_core::Record;
use anthro_validation::ConsistencyChecker;
use proptest::prelude::*;

fn arb_sex() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("homme".to_string()),
        Just("Femme".to_string()),
        Just("male".to_string()),
        Just("FEMALE".to_string()),
        Just("autre".to_string()),
    ]
}

fn arb_record() -> impl Strategy<Value = Record> {
    (
        proptest::option::of(-5i64..140),
        proptest::option::of(arb_sex()),
        proptest::option::of(0.0f64..350.0),
        proptest::option::of(0.0f64..550.0),
        proptest::option::of(0.0f64..250.0),
        proptest::option::of(0.0f64..250.0),
        proptest::option::of(0.0f64..160.0),
    )
        .prop_map(
            |(age, sex, height, weight, waist, span, leg)| Record {
                age,
                sex,
                height,
                weight,
                waist_circumference: waist,
                arm_span: span,
                leg_length: leg,
                ..Default::default()
            },
        )
}

proptest! {
    #[test]
    fn validation_is_deterministic(record in arb_record()) {
        let checker = ConsistencyChecker::new();
        prop_assert_eq!(checker.validate(&record), checker.validate(&record));
    }

    #[test]
    fn score_stays_within_bounds(record in arb_record()) {
        let result = ConsistencyChecker::new().validate(&record);
        prop_assert!((0.0..=100.0).contains(&result.coherence_score));
    }

    #[test]
    fn validity_matches_error_list(record in arb_record()) {
        let result = ConsistencyChecker::new().validate(&record);
        prop_assert_eq!(result.is_valid, result.errors.is_empty());
    }

    #[test]
    fn missing_fields_short_circuit_arithmetic(
        age in proptest::option::of(0i64..120),
        sex in proptest::option::of(Just("homme".to_string())),
        height in proptest::option::of(50.0f64..220.0),
        weight in proptest::option::of(3.0f64..200.0),
    ) {
        let missing = [
            age.is_none(),
            sex.is_none(),
            height.is_none(),
            weight.is_none(),
        ]
        .iter()
        .filter(|m| **m)
        .count();
        prop_assume!(missing > 0);

        let record = Record {
            age,
            sex,
            height,
            weight,
            ..Default::default()
        };
        let result = ConsistencyChecker::new().validate(&record);
        prop_assert_eq!(result.errors.len(), missing);
        prop_assert!(result.warnings.is_empty());
        prop_assert_eq!(
            result.coherence_score,
            (100.0 - 25.0 * missing as f64).max(0.0)
        );
    }
}
