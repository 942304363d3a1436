use apathymeter::io::{result_filename, save_result};
use apathymeter::{create_writer, OutputFormat, ResultRecord};
use indoc::indoc;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

mod common;

fn render(format: OutputFormat, record: &ResultRecord) -> String {
    let mut buf = Vec::new();
    {
        let mut writer = create_writer(format, &mut buf);
        writer.write_record(record).unwrap();
    }
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_json_output_is_nested_with_two_space_indent() {
    let expected = indoc! {r#"
        {
          "given_name": "Ada",
          "surname": "Lovelace",
          "dob": "1990-12-10",
          "student_id": "12345",
          "total_score": 5,
          "result": "Missing/Very weak connection, High activity & motivation",
          "answers": [
            {
              "question": "I've lost interest in my old hobbies or pursuits.",
              "answer": "Neutral",
              "score": 2
            },
            {
              "question": "Feeds, \"likes\" and more",
              "answer": "Often",
              "score": 3
            }
          ],
          "survey_date": "2025-03-14T09:26:53.058979",
          "version": 2.0
        }"#};
    assert_eq!(render(OutputFormat::Json, &common::sample_record()), expected);
}

#[test]
fn test_json_output_keeps_non_ascii() {
    let mut record = common::sample_record();
    record.result = "Weak connection – does not interfere with real life".to_string();
    let json = render(OutputFormat::Json, &record);
    assert!(json.contains("Weak connection – does not"));
}

#[test]
fn test_json_output_reads_back() {
    let record = common::sample_record();
    let back: ResultRecord = serde_json::from_str(&render(OutputFormat::Json, &record)).unwrap();
    assert_eq!(back, record);
}

#[test]
fn test_csv_output_expands_answers_in_place() {
    let expected = [
        "Field,Value",
        "given_name,Ada",
        "surname,Lovelace",
        "dob,1990-12-10",
        "student_id,12345",
        "total_score,5",
        "result,\"Missing/Very weak connection, High activity & motivation\"",
        "Question,I've lost interest in my old hobbies or pursuits.",
        "Answer,Neutral",
        "Score,2",
        "Question,\"Feeds, \"\"likes\"\" and more\"",
        "Answer,Often",
        "Score,3",
        "survey_date,2025-03-14T09:26:53.058979",
        "version,2.0",
    ]
    .iter()
    .map(|line| format!("{line}\r\n"))
    .collect::<String>();

    assert_eq!(render(OutputFormat::Csv, &common::sample_record()), expected);
}

#[test]
fn test_text_output_lists_answers_last() {
    let expected = indoc! {r#"
        given_name: Ada
        surname: Lovelace
        dob: 1990-12-10
        student_id: 12345
        total_score: 5
        result: Missing/Very weak connection, High activity & motivation
        survey_date: 2025-03-14T09:26:53.058979
        version: 2.0
        Answers:
          1. I've lost interest in my old hobbies or pursuits. -> Neutral (2)
          2. Feeds, "likes" and more -> Often (3)
    "#};
    assert_eq!(render(OutputFormat::Txt, &common::sample_record()), expected);
}

#[test]
fn test_save_result_uses_conventional_name() {
    let dir = TempDir::new().unwrap();
    let record = common::sample_record();
    let at = common::fixed_time();

    for format in [OutputFormat::Json, OutputFormat::Csv, OutputFormat::Txt] {
        let path = save_result(&record, format, dir.path(), at).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            result_filename("12345", at, format)
        );
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render(format, &record));
    }
    assert_eq!(
        result_filename("12345", at, OutputFormat::Json),
        "result_12345_20250314_092653.json"
    );
}

#[test]
fn test_save_result_creates_missing_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("results").join("2025");
    let path = save_result(
        &common::sample_record(),
        OutputFormat::Txt,
        &nested,
        common::fixed_time(),
    )
    .unwrap();
    assert!(path.starts_with(&nested));
    assert!(path.exists());
}
