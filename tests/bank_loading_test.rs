use apathymeter::bank::{validate, LoadWarning, QuestionBank};
use apathymeter::{AnswerOption, Error};
use indoc::indoc;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

mod common;

#[test]
fn test_mixed_option_encodings_normalize_to_pairs() {
    let mut items = common::question_list(9);
    items.push(json!({
        "text": "Keyed options",
        "options": [
            {"text": "Never", "score": 0},
            {"answer": "Rarely", "value": 1},
            {"text": "Sometimes"},
            {"score": 3},
            {"label": "Always", "score": 4}
        ]
    }));
    items.push(json!({
        "question": "Bare options",
        "answers": ["Never", "Rarely", "Sometimes", "Often", "Always"]
    }));

    let loaded = QuestionBank::load_from(&Value::Array(items)).unwrap();
    assert_eq!(loaded.bank.len(), 11);
    assert!(validate(&loaded.bank));

    let keyed = &loaded.bank.questions()[9];
    assert_eq!(keyed.prompt, "Keyed options");
    assert_eq!(
        keyed.options,
        vec![
            AnswerOption::new("Never", 0),
            AnswerOption::new("Rarely", 1),
            AnswerOption::new("Sometimes", 0),
            AnswerOption::new("???", 3),
            AnswerOption::new("Always", 4),
        ]
    );

    let bare = &loaded.bank.questions()[10];
    assert_eq!(bare.prompt, "Bare options");
    assert!(bare.options.iter().all(|o| o.score == 0));
    assert_eq!(bare.options[3].label, "Often");
}

#[test]
fn test_object_document_from_file_text() {
    let text = indoc! {r#"
        {
          "questions": [
            {"q": "1", "opts": [["a", 0], ["b", 1], ["c", 2], ["d", 3], ["e", 4]]},
            {"q": "2", "opts": [["a", 0], ["b", 1], ["c", 2], ["d", 3], ["e", 4]]},
            {"q": "3", "opts": [["a", 0], ["b", 1], ["c", 2], ["d", 3], ["e", 4]]},
            {"q": "4", "opts": [["a", 0], ["b", 1], ["c", 2], ["d", 3], ["e", 4]]},
            {"q": "5", "opts": [["a", 0], ["b", 1], ["c", 2], ["d", 3], ["e", 4]]},
            {"q": "6", "opts": [["a", 0], ["b", 1], ["c", 2], ["d", 3], ["e", 4]]},
            {"q": "7", "opts": [["a", 0], ["b", 1], ["c", 2], ["d", 3], ["e", 4]]},
            {"q": "8", "opts": [["a", 0], ["b", 1], ["c", 2], ["d", 3], ["e", 4]]},
            {"q": "9", "opts": [["a", 0], ["b", 1], ["c", 2], ["d", 3], ["e", 4]]},
            {"q": "10", "opts": [["a", 1], ["b", 2], ["c", 3], ["d", 4], ["e", 5]]}
          ],
          "psychological_states": [["Low", [0, 20]], ["Mid", [21, 40]], ["High", [41, 100]]]
        }
    "#};
    let value: Value = serde_json::from_str(text).unwrap();

    let loaded = QuestionBank::load_from(&value).unwrap();
    assert_eq!(loaded.bank.len(), 10);
    assert_eq!(loaded.bank.questions()[9].options[4], AnswerOption::new("e", 5));
    let bands = loaded.bands.expect("bands decoded");
    assert_eq!(bands.classify(21).name(), "Mid");
}

#[test]
fn test_too_few_questions_yields_no_bank() {
    let result = QuestionBank::load_from(&Value::Array(common::question_list(9)));
    assert!(matches!(
        result,
        Err(Error::InsufficientQuestions {
            found: 9,
            required: 10
        })
    ));
}

#[test]
fn test_wrong_shapes_are_format_errors() {
    for value in [json!(42), json!("text"), json!(null), json!(true)] {
        assert!(
            matches!(QuestionBank::load_from(&value), Err(Error::Format(_))),
            "{value} should be a format error"
        );
    }
}

#[test]
fn test_four_and_six_option_questions_are_dropped() {
    let mut items = common::question_list(12);
    items[2] = json!({"q": "Four", "opts": [["a", 0], ["b", 1], ["c", 2], ["d", 3]]});
    items[7] = json!({"q": "Six", "opts": ["a", "b", "c", "d", "e", "f"]});

    let loaded = QuestionBank::load_from(&Value::Array(items)).unwrap();
    assert_eq!(loaded.bank.len(), 10);
    assert!(loaded
        .bank
        .questions()
        .iter()
        .all(|q| q.prompt != "Four" && q.prompt != "Six"));
    assert_eq!(
        loaded.warnings,
        vec![
            LoadWarning::MalformedQuestion {
                index: 2,
                prompt: "Four".into(),
                option_count: 4
            },
            LoadWarning::MalformedQuestion {
                index: 7,
                prompt: "Six".into(),
                option_count: 6
            },
        ]
    );
}

#[test]
fn test_question_order_is_preserved() {
    let loaded = QuestionBank::load_from(&Value::Array(common::question_list(15))).unwrap();
    let prompts: Vec<_> = loaded.bank.questions().iter().map(|q| q.prompt.clone()).collect();
    let expected: Vec<_> = (0..15).map(|n| format!("Question {n}")).collect();
    assert_eq!(prompts, expected);
}
