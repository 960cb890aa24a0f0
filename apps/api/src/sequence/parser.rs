//! Sequence parser — strict structural validation of upstream completion text.
//!
//! The model is asked for a bare JSON array of `{subject, body, delay}`
//! records. Anything that does not deserialize into exactly that shape is a
//! `MalformedPayload`; there is no best-effort field extraction from free
//! text. A successfully parsed sequence is returned in upstream order,
//! untouched.

use crate::errors::AppError;
use crate::sequence::models::{DelayFormat, SequenceStep};

/// Parses a non-empty completion payload into an ordered sequence.
///
/// Validation, in order:
/// 1. strip markdown code fences the model sometimes wraps JSON in
/// 2. deserialize as a JSON array of step records (missing field, wrong
///    field type, or non-list input all fail here)
/// 3. reject an empty list
/// 4. per step: non-blank `subject` and `body`, `delay` in the endpoint's
///    promised representation
pub fn parse_sequence(payload: &str, format: DelayFormat) -> Result<Vec<SequenceStep>, AppError> {
    let text = strip_json_fences(payload);

    let steps: Vec<SequenceStep> = serde_json::from_str(text)
        .map_err(|e| AppError::MalformedPayload(format!("not a valid step list: {e}")))?;

    if steps.is_empty() {
        return Err(AppError::MalformedPayload(
            "sequence contains no steps".to_string(),
        ));
    }

    for (i, step) in steps.iter().enumerate() {
        if step.subject.trim().is_empty() {
            return Err(AppError::MalformedPayload(format!(
                "step {i}: subject is empty"
            )));
        }
        if step.body.trim().is_empty() {
            return Err(AppError::MalformedPayload(format!("step {i}: body is empty")));
        }
        if !step.delay.matches(format) {
            return Err(AppError::MalformedPayload(format!(
                "step {i}: delay must be {}",
                format.describe()
            )));
        }
    }

    Ok(steps)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::models::Delay;

    const THREE_STEP_PAYLOAD: &str = r#"[
        {"subject": "Quick question", "body": "First touch.", "delay": "0 days"},
        {"subject": "Following up", "body": "Second touch.", "delay": "3 days"},
        {"subject": "Last note", "body": "Third touch.", "delay": "5 days"}
    ]"#;

    #[test]
    fn test_three_step_payload_round_trips_in_order() {
        let steps = parse_sequence(THREE_STEP_PAYLOAD, DelayFormat::Text).unwrap();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].subject, "Quick question");
        assert_eq!(steps[1].subject, "Following up");
        assert_eq!(steps[2].subject, "Last note");
        assert_eq!(steps[0].delay, Delay::Text("0 days".to_string()));
        assert_eq!(steps[2].delay, Delay::Text("5 days".to_string()));
    }

    #[test]
    fn test_plain_sentence_is_malformed() {
        let err = parse_sequence("not json", DelayFormat::Text).unwrap_err();
        assert!(matches!(err, AppError::MalformedPayload(_)));
    }

    #[test]
    fn test_json_object_is_malformed_not_partially_parsed() {
        let payload = r#"{"subject": "Hi", "body": "Hello", "delay": "0 days"}"#;
        let err = parse_sequence(payload, DelayFormat::Text).unwrap_err();
        assert!(matches!(err, AppError::MalformedPayload(_)));
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let payload = r#"[{"subject": "Hi", "delay": "0 days"}]"#;
        let err = parse_sequence(payload, DelayFormat::Text).unwrap_err();
        assert!(matches!(err, AppError::MalformedPayload(_)));
    }

    #[test]
    fn test_wrong_field_type_is_malformed() {
        let payload = r#"[{"subject": 42, "body": "Hello", "delay": "0 days"}]"#;
        let err = parse_sequence(payload, DelayFormat::Text).unwrap_err();
        assert!(matches!(err, AppError::MalformedPayload(_)));
    }

    #[test]
    fn test_empty_list_is_malformed() {
        let err = parse_sequence("[]", DelayFormat::Text).unwrap_err();
        assert!(matches!(err, AppError::MalformedPayload(_)));
    }

    #[test]
    fn test_blank_subject_is_malformed() {
        let payload = r#"[{"subject": "  ", "body": "Hello", "delay": "0 days"}]"#;
        let err = parse_sequence(payload, DelayFormat::Text).unwrap_err();
        let AppError::MalformedPayload(msg) = err else {
            panic!("expected MalformedPayload");
        };
        assert!(msg.contains("subject"));
    }

    #[test]
    fn test_integer_delay_rejected_on_text_endpoint() {
        let payload = r#"[{"subject": "Hi", "body": "Hello", "delay": 3}]"#;
        let err = parse_sequence(payload, DelayFormat::Text).unwrap_err();
        assert!(matches!(err, AppError::MalformedPayload(_)));
    }

    #[test]
    fn test_text_delay_rejected_on_day_endpoint() {
        let payload = r#"[{"subject": "Hi", "body": "Hello", "delay": "3 days"}]"#;
        let err = parse_sequence(payload, DelayFormat::Days).unwrap_err();
        assert!(matches!(err, AppError::MalformedPayload(_)));
    }

    #[test]
    fn test_integer_delays_parse_on_day_endpoint() {
        let payload = r#"[
            {"subject": "Hi", "body": "Hello", "delay": 0},
            {"subject": "Again", "body": "Hello again", "delay": 4}
        ]"#;
        let steps = parse_sequence(payload, DelayFormat::Days).unwrap();
        assert_eq!(steps[0].delay, Delay::Days(0));
        assert_eq!(steps[1].delay, Delay::Days(4));
    }

    #[test]
    fn test_fenced_payload_parses() {
        let payload = "```json\n[{\"subject\": \"Hi\", \"body\": \"Hello\", \"delay\": \"0 days\"}]\n```";
        let steps = parse_sequence(payload, DelayFormat::Text).unwrap();
        assert_eq!(steps.len(), 1);
    }

    #[test]
    fn test_fenced_payload_without_language_tag_parses() {
        let payload = "```\n[{\"subject\": \"Hi\", \"body\": \"Hello\", \"delay\": \"0 days\"}]\n```";
        let steps = parse_sequence(payload, DelayFormat::Text).unwrap();
        assert_eq!(steps.len(), 1);
    }

    #[test]
    fn test_counts_other_than_three_are_accepted() {
        let one = r#"[{"subject": "Hi", "body": "Hello there", "delay": "0 days"}]"#;
        assert_eq!(parse_sequence(one, DelayFormat::Text).unwrap().len(), 1);

        let five: Vec<serde_json::Value> = (0..5)
            .map(|i| {
                serde_json::json!({
                    "subject": format!("Step {i}"),
                    "body": "Hello",
                    "delay": format!("{i} days")
                })
            })
            .collect();
        let payload = serde_json::to_string(&five).unwrap();
        assert_eq!(parse_sequence(&payload, DelayFormat::Text).unwrap().len(), 5);
    }

    #[test]
    fn test_extra_fields_are_tolerated() {
        let payload =
            r#"[{"subject": "Hi", "body": "Hello", "delay": "0 days", "cta": "Book a call"}]"#;
        let steps = parse_sequence(payload, DelayFormat::Text).unwrap();
        assert_eq!(steps[0].subject, "Hi");
    }
}
