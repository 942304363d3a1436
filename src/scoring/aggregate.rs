use crate::core::Answer;

/// Sum the scores of a sequence of answers.
///
/// No clamping to the band scale: custom banks may produce totals outside
/// 0..=100. The sum saturates at the `i64` limits instead of overflowing.
pub fn total(answers: &[Answer]) -> i64 {
    answers
        .iter()
        .fold(0i64, |sum, answer| sum.saturating_add(answer.score))
}
