use apathymeter::scoring::{classify, default_bands, total, BandSet, Classification};
use apathymeter::{Answer, QuestionBank};
use proptest::prelude::*;

mod common;

#[test]
fn test_scenario_low_total_is_weakest_band() {
    let scores = [0, 1, 2, 0, 1, 2, 0, 1, 2, 0, 1, 2, 0, 1, 2, 0, 1, 2, 0, 1];
    let answers: Vec<Answer> = scores
        .iter()
        .map(|&score| Answer {
            question: "q".into(),
            answer: "a".into(),
            score,
        })
        .collect();
    let sum = total(&answers);
    assert_eq!(sum, 16);

    let bands = default_bands();
    let band = classify(sum, &bands).band().unwrap();
    assert_eq!(
        band.name,
        "Missing/Very weak connection, High activity & motivation"
    );
    assert_eq!((band.low, band.high), (0, 32));
}

#[test]
fn test_scenario_adjacent_boundaries() {
    let bands = default_bands();
    assert!(classify(46, &bands).name().starts_with("Moderate connection"));
    assert!(classify(45, &bands).name().starts_with("Weak connection"));
    assert!(classify(58, &bands).name().starts_with("Moderate connection"));
    assert!(classify(59, &bands).name().starts_with("Pronounced connection"));
}

#[test]
fn test_scenario_out_of_range_total_is_unknown() {
    let bands = default_bands();
    assert_eq!(classify(101, &bands), Classification::Unknown);
    assert_eq!(classify(101, &bands).to_string(), "Unknown");
}

#[test]
fn test_every_scale_total_matches_exactly_one_band() {
    let bands = default_bands();
    for t in 0..=100 {
        let matching = bands.iter().filter(|b| b.contains(t)).count();
        assert_eq!(matching, 1, "total {t} matched {matching} bands");
    }
    assert!(BandSet::default().validate_partition(0, 100).is_ok());
}

proptest! {
    #[test]
    fn prop_classification_is_defined_on_scale(t in 0i64..=100) {
        let bands = default_bands();
        prop_assert!(!classify(t, &bands).is_unknown());
    }

    #[test]
    fn prop_classification_is_unknown_off_scale(t in prop_oneof![-1000i64..0, 101i64..1000]) {
        let bands = default_bands();
        prop_assert!(classify(t, &bands).is_unknown());
    }

    #[test]
    fn prop_legal_default_answers_stay_on_scale(
        choices in proptest::collection::vec(1usize..=5, 20)
    ) {
        let answers = common::answers_for_choices(&choices);
        let expected: i64 = answers.iter().map(|a| a.score).sum();
        let sum = total(&answers);
        prop_assert_eq!(sum, expected);
        prop_assert!((0..=100).contains(&sum));
        prop_assert_eq!(answers.len(), QuestionBank::default().len());
    }
}
