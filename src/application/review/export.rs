use crate::domain::Entry;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

pub const CONTENT_TYPE: &str = "application/json";

/// Object path for a submitted review: `<prefix>/<uid>.json`.
pub fn review_object_path(prefix: &str, uid: &str) -> String {
    let prefix = prefix.trim_matches('/');
    if prefix.is_empty() {
        format!("{uid}.json")
    } else {
        format!("{prefix}/{uid}.json")
    }
}

pub struct ReviewExporter;

impl ReviewExporter {
    /// Serialize the full entry (with its review) as UTF-8 JSON indented by
    /// four spaces.
    pub fn to_json_bytes(entry: &Entry) -> serde_json::Result<Vec<u8>> {
        let mut out = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = Serializer::with_formatter(&mut out, formatter);
        entry.serialize(&mut ser)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Decision, IssueKind, Placement, ReviewRecord};

    fn reviewed_entry() -> Entry {
        let entry: Entry = serde_json::from_str(
            r#"{
                "entity_id": "Dog",
                "section_name": "History",
                "original_section": "The dog is loyal",
                "agent_updated_section": "The dog is very loyal",
                "url": ["https://example.org/dog"],
                "source_rank": 2
            }"#,
        )
        .unwrap();
        Entry {
            uid: "7".into(),
            ..entry
        }
        .with_review(ReviewRecord {
            q1: vec![IssueKind::Style.label().to_string()],
            q2: Decision::Accept,
            q3: Placement::Yes,
            q3_section: None,
        })
    }

    #[test]
    fn path_is_prefixed_by_folder() {
        assert_eq!(review_object_path("test", "abc"), "test/abc.json");
        assert_eq!(review_object_path("/test/", "abc"), "test/abc.json");
        assert_eq!(review_object_path("", "abc"), "abc.json");
    }

    #[test]
    fn json_uses_four_space_indent_and_stable_order() {
        let bytes = ReviewExporter::to_json_bytes(&reviewed_entry()).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.starts_with("{\n    \"uid\": \"7\""));
        assert!(text.contains("\n    \"review\": {\n        \"q1\": ["));

        let order = ["\"uid\"", "\"entity_id\"", "\"url\"", "\"source_rank\"", "\"review\""];
        let positions: Vec<usize> = order.iter().map(|k| text.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{text}");
    }

    #[test]
    fn review_survives_round_trip() {
        let entry = reviewed_entry();
        let bytes = ReviewExporter::to_json_bytes(&entry).unwrap();
        let parsed: Entry = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed.review, entry.review);
        assert_eq!(parsed, entry);
    }

    #[test]
    fn non_ascii_is_written_as_utf8() {
        let entry = Entry {
            uid: "1".into(),
            entity_id: "Zürich".into(),
            ..Default::default()
        };
        let bytes = ReviewExporter::to_json_bytes(&entry).unwrap();
        assert!(String::from_utf8(bytes).unwrap().contains("Zürich"));
    }
}
