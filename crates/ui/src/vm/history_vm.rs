use quiz_core::model::AttemptRecord;

use super::time_fmt::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryRowVm {
    pub question_id: String,
    pub outcome_label: &'static str,
    pub outcome_class: &'static str,
    pub answered_at_str: String,
}

#[must_use]
pub fn map_history_rows(attempts: &[AttemptRecord]) -> Vec<HistoryRowVm> {
    attempts
        .iter()
        .map(|attempt| {
            let (outcome_label, outcome_class) = if attempt.correct {
                ("Correct", "outcome outcome--correct")
            } else {
                ("Incorrect", "outcome outcome--incorrect")
            };
            HistoryRowVm {
                question_id: attempt.question_id.to_string(),
                outcome_label,
                outcome_class,
                answered_at_str: format_datetime(attempt.answered_at),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::QuestionId;
    use quiz_core::time::fixed_now;

    #[test]
    fn maps_outcome_and_time() {
        let attempts = vec![
            AttemptRecord::new(QuestionId::new("q2").unwrap(), false, fixed_now()),
            AttemptRecord::new(QuestionId::new("q1").unwrap(), true, fixed_now()),
        ];
        let rows = map_history_rows(&attempts);
        assert_eq!(rows[0].question_id, "q2");
        assert_eq!(rows[0].outcome_label, "Incorrect");
        assert_eq!(rows[1].outcome_label, "Correct");
        assert_eq!(rows[1].answered_at_str, "2023-11-14 22:13 UTC");
    }
}
