use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::review::ReviewRecord;

/// Stable identifier of an entry within a session.
pub type EntryUid = String;

/// Prompts shown when an entry does not carry its own.
pub const DEFAULT_QUESTIONS: [&str; 3] = [
    "Question 1: Provided above is a suggested edit for the Wikipedia article. Please identify any errors with the suggested edit (select all that apply)",
    "Question 2: Would you (1) accept, (2) accept w/ revision, and (3) reject the suggested edit above?",
    "Question 3: Was the human edit placed in the correct section of the Wikipedia page?",
];

/// One reviewable unit: an original section and the suggested rewrite.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Entry {
    /// Assigned at load time when the input does not carry one.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub uid: EntryUid,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub entity_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub section_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub original_section: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub agent_updated_section: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<String>>,
    /// Input fields this tool does not interpret; written back untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<ReviewRecord>,
}

/// Text fields may be `null` in exported datasets; read them as empty.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Entry {
    /// Selector label: `<entity_id>: <section_name> (<uid prefix>)`.
    pub fn label(&self) -> String {
        let short: String = self.uid.chars().take(8).collect();
        format!("{}: {} ({})", self.entity_id, self.section_name, short)
    }

    pub fn wikipedia_url(&self) -> String {
        format!(
            "https://en.wikipedia.org/wiki/{}",
            self.entity_id.replace(' ', "_")
        )
    }

    /// First entity link, if any.
    pub fn primary_link(&self) -> Option<&str> {
        self.url.as_ref()?.first().map(String::as_str)
    }

    /// The three question prompts, falling back to the defaults when the
    /// entry carries fewer than three.
    pub fn question_texts(&self) -> [&str; 3] {
        match self.questions.as_deref() {
            Some([q1, q2, q3, ..]) => [q1.as_str(), q2.as_str(), q3.as_str()],
            _ => DEFAULT_QUESTIONS,
        }
    }

    /// Copy of this entry with `record` attached, as it is persisted.
    pub fn with_review(&self, record: ReviewRecord) -> Entry {
        Entry {
            review: Some(record),
            ..self.clone()
        }
    }

    pub fn is_reviewed(&self) -> bool {
        self.review.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Decision, Placement};

    fn entry() -> Entry {
        Entry {
            uid: "0123456789".into(),
            entity_id: "Golden Retriever".into(),
            section_name: "History".into(),
            ..Default::default()
        }
    }

    #[test]
    fn label_uses_uid_prefix() {
        assert_eq!(entry().label(), "Golden Retriever: History (01234567)");
    }

    #[test]
    fn wikipedia_url_replaces_spaces() {
        assert_eq!(
            entry().wikipedia_url(),
            "https://en.wikipedia.org/wiki/Golden_Retriever"
        );
    }

    #[test]
    fn question_texts_fall_back_when_short() {
        let mut e = entry();
        assert_eq!(e.question_texts(), DEFAULT_QUESTIONS);

        e.questions = Some(vec!["a".into(), "b".into()]);
        assert_eq!(e.question_texts(), DEFAULT_QUESTIONS);

        e.questions = Some(vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(e.question_texts(), ["a", "b", "c"]);
    }

    #[test]
    fn unknown_fields_survive_round_trip() {
        let raw = r#"{"entity_id":"Dog","claims":["x"],"score":3}"#;
        let e: Entry = serde_json::from_str(raw).unwrap();
        assert_eq!(e.extra.get("score"), Some(&Value::from(3)));

        let back = serde_json::to_value(&e).unwrap();
        assert_eq!(back["claims"], serde_json::json!(["x"]));
        assert!(back.get("review").is_none());
    }

    #[test]
    fn with_review_leaves_original_untouched() {
        let e = entry();
        let reviewed = e.with_review(ReviewRecord {
            q1: vec!["x".into()],
            q2: Decision::Reject,
            q3: Placement::Yes,
            q3_section: None,
        });
        assert!(reviewed.is_reviewed());
        assert!(!e.is_reviewed());
    }
}
