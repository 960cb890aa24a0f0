//! Data models for the email-sequence contract.

use serde::{Deserialize, Serialize};

/// Which `delay` representation an endpoint validates.
///
/// The source contracts disagree: some promise textual durations ("0 days"),
/// one promises integer day offsets. Each endpoint pins exactly one; a step
/// carrying the other representation fails validation rather than being
/// coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayFormat {
    /// Textual duration, e.g. `"0 days"`.
    Text,
    /// Integer day offset, e.g. `3`.
    Days,
}

impl DelayFormat {
    pub fn describe(&self) -> &'static str {
        match self {
            DelayFormat::Text => "a duration string such as \"0 days\"",
            DelayFormat::Days => "an integer day offset",
        }
    }
}

/// A send delay in either wire representation.
///
/// Untagged: a JSON number deserializes as `Days`, a JSON string as `Text`.
/// Anything else (bool, object, negative or fractional number) is a
/// deserialization error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Delay {
    Days(u32),
    Text(String),
}

impl Delay {
    /// True when this delay uses the representation the endpoint promised.
    /// A `Text` delay must also be non-blank.
    pub fn matches(&self, format: DelayFormat) -> bool {
        match (self, format) {
            (Delay::Days(_), DelayFormat::Days) => true,
            (Delay::Text(t), DelayFormat::Text) => !t.trim().is_empty(),
            _ => false,
        }
    }
}

/// One step of a drip sequence. Order in the containing list encodes send
/// order, not priority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceStep {
    pub subject: String,
    pub body: String,
    pub delay: Delay,
}

/// Response body for sequence-producing endpoints.
#[derive(Debug, Serialize)]
pub struct SequenceResponse {
    pub sequence: Vec<SequenceStep>,
}

/// Response body for single-message endpoints.
#[derive(Debug, Serialize)]
pub struct EmailResponse {
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_deserializes_number_as_days() {
        let delay: Delay = serde_json::from_str("3").unwrap();
        assert_eq!(delay, Delay::Days(3));
    }

    #[test]
    fn test_delay_deserializes_string_as_text() {
        let delay: Delay = serde_json::from_str(r#""0 days""#).unwrap();
        assert_eq!(delay, Delay::Text("0 days".to_string()));
    }

    #[test]
    fn test_delay_rejects_bool_and_object() {
        assert!(serde_json::from_str::<Delay>("true").is_err());
        assert!(serde_json::from_str::<Delay>(r#"{"days": 3}"#).is_err());
    }

    #[test]
    fn test_delay_rejects_negative_and_fractional_days() {
        assert!(serde_json::from_str::<Delay>("-1").is_err());
        assert!(serde_json::from_str::<Delay>("1.5").is_err());
    }

    #[test]
    fn test_delay_matches_enforces_representation() {
        assert!(Delay::Text("0 days".to_string()).matches(DelayFormat::Text));
        assert!(Delay::Days(0).matches(DelayFormat::Days));
        assert!(!Delay::Days(3).matches(DelayFormat::Text));
        assert!(!Delay::Text("3 days".to_string()).matches(DelayFormat::Days));
    }

    #[test]
    fn test_blank_text_delay_does_not_match() {
        assert!(!Delay::Text("   ".to_string()).matches(DelayFormat::Text));
    }

    #[test]
    fn test_step_serializes_delay_in_wire_shape() {
        let text_step = SequenceStep {
            subject: "Hi".to_string(),
            body: "Hello there".to_string(),
            delay: Delay::Text("0 days".to_string()),
        };
        let value = serde_json::to_value(&text_step).unwrap();
        assert_eq!(value["delay"], "0 days");

        let day_step = SequenceStep {
            subject: "Hi".to_string(),
            body: "Hello there".to_string(),
            delay: Delay::Days(3),
        };
        let value = serde_json::to_value(&day_step).unwrap();
        assert_eq!(value["delay"], 3);
    }

    #[test]
    fn test_step_rejects_missing_fields() {
        let json = r#"{"subject": "Hi", "delay": "0 days"}"#;
        assert!(serde_json::from_str::<SequenceStep>(json).is_err());
    }
}
