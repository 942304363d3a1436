// Test utility module for apathymeter integration tests
#![allow(dead_code)]

use apathymeter::{Answer, QuestionBank, ResultRecord};
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::{json, Value};

/// A five-option question object in the exported bank shape
pub fn question_json(n: usize) -> Value {
    json!({
        "q": format!("Question {n}"),
        "opts": [["Never", 0], ["Rarely", 1], ["Sometimes", 2], ["Often", 3], ["Always", 4]]
    })
}

pub fn question_list(count: usize) -> Vec<Value> {
    (0..count).map(question_json).collect()
}

pub fn fixed_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 14)
        .unwrap()
        .and_hms_micro_opt(9, 26, 53, 58979)
        .unwrap()
}

/// Answers picking the given 1-based choice for each default question
pub fn answers_for_choices(choices: &[usize]) -> Vec<Answer> {
    let bank = QuestionBank::default();
    bank.questions()
        .iter()
        .zip(choices)
        .map(|(q, choice)| Answer::from_selection(q, q.option_for_choice(*choice).unwrap()))
        .collect()
}

pub fn sample_record() -> ResultRecord {
    ResultRecord {
        given_name: "Ada".to_string(),
        surname: "Lovelace".to_string(),
        dob: "1990-12-10".to_string(),
        student_id: "12345".to_string(),
        total_score: 5,
        result: "Missing/Very weak connection, High activity & motivation".to_string(),
        answers: vec![
            Answer {
                question: "I've lost interest in my old hobbies or pursuits.".to_string(),
                answer: "Neutral".to_string(),
                score: 2,
            },
            Answer {
                question: "Feeds, \"likes\" and more".to_string(),
                answer: "Often".to_string(),
                score: 3,
            },
        ],
        survey_date: fixed_time(),
        version: 2.0,
    }
}
