use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Issue categories offered by the first question, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IssueKind {
    Style,
    MinorFix,
    Formatting,
    Citation,
    Subjective,
    Duplicate,
    Insignificant,
    Irrelevant,
    Policy,
    /// Free-text issue; only counts once its text is non-blank.
    Other,
}

impl IssueKind {
    pub const ALL: [IssueKind; 10] = [
        IssueKind::Style,
        IssueKind::MinorFix,
        IssueKind::Formatting,
        IssueKind::Citation,
        IssueKind::Subjective,
        IssueKind::Duplicate,
        IssueKind::Insignificant,
        IssueKind::Irrelevant,
        IssueKind::Policy,
        IssueKind::Other,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Style => "style",
            Self::MinorFix => "minor_fix",
            Self::Formatting => "formatting",
            Self::Citation => "citation",
            Self::Subjective => "subjective",
            Self::Duplicate => "duplicate",
            Self::Insignificant => "insignificant",
            Self::Irrelevant => "irrelevant",
            Self::Policy => "policy",
            Self::Other => "other",
        }
    }

    /// Checkbox label. For predefined issues this is also the stored value.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Style => "Stylistic/clarity: Phrasing redundant or tone is too informal",
            Self::MinorFix => "Minor factual fix: Small date/number correction needed",
            Self::Formatting => {
                "Wikipedia Formatting: Text in the human edit is not formatted properly"
            }
            Self::Citation => {
                "Missing citation(s): One or more facts in the edit lack a reference"
            }
            Self::Subjective => {
                "Subjective: Opinion or superlative without attribution (\u{201c}most unexpected\u{201d})"
            }
            Self::Duplicate => "Duplicate: Overlaps substantially with another accepted fact.",
            Self::Insignificant => {
                "Insignificant: Majority of the edit is not worthy of being included in Wikipedia"
            }
            Self::Irrelevant => {
                "Irrelevant: The facts presented in the edit are not relevant for the entity"
            }
            Self::Policy => "Policy violation: Conflict with WP:OR, WP:NPOV, etc.",
            Self::Other => "Other:",
        }
    }
}

/// Stored label for a free-text issue.
pub fn other_issue_label(text: &str) -> String {
    format!("Other (Please specify reason below): {}", text.trim())
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for IssueKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == needle)
            .ok_or_else(|| format!("unknown issue: {s}"))
    }
}

/// Answer to the second question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    #[serde(rename = "Accept")]
    Accept,
    #[serde(rename = "Accept w/ Revision", alias = "Accept with Revision")]
    AcceptWithRevision,
    #[serde(rename = "Reject")]
    Reject,
}

impl Decision {
    pub const ALL: [Decision; 3] = [Self::Accept, Self::AcceptWithRevision, Self::Reject];
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accept => write!(f, "Accept"),
            Self::AcceptWithRevision => write!(f, "Accept w/ Revision"),
            Self::Reject => write!(f, "Reject"),
        }
    }
}

impl FromStr for Decision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ACCEPT" | "1" => Ok(Self::Accept),
            "REVISE" | "ACCEPT W/ REVISION" | "ACCEPT WITH REVISION" | "2" => {
                Ok(Self::AcceptWithRevision)
            }
            "REJECT" | "3" => Ok(Self::Reject),
            _ => Err(format!("unknown decision: {s}")),
        }
    }
}

/// Answer to the third question: was the edit placed in the right section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    #[serde(rename = "Yes")]
    Yes,
    #[serde(rename = "No", alias = "If No, which section:")]
    No,
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yes => write!(f, "Yes"),
            Self::No => write!(f, "No"),
        }
    }
}

impl FromStr for Placement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "YES" | "Y" => Ok(Self::Yes),
            "NO" | "N" => Ok(Self::No),
            _ => Err(format!("unknown placement: {s}")),
        }
    }
}

/// The finalized answers for one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Selected issue labels, never empty.
    pub q1: Vec<String>,
    pub q2: Decision,
    pub q3: Placement,
    /// Target section, present only when `q3` is `No`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q3_section: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_kind_parses_keys() {
        assert_eq!(IssueKind::from_str("minor-fix").unwrap(), IssueKind::MinorFix);
        assert_eq!(IssueKind::from_str("OTHER").unwrap(), IssueKind::Other);
        assert!(IssueKind::from_str("typo").is_err());
    }

    #[test]
    fn decision_display_parse() {
        assert_eq!(Decision::AcceptWithRevision.to_string(), "Accept w/ Revision");
        assert_eq!(
            Decision::from_str("revise").unwrap(),
            Decision::AcceptWithRevision
        );
        assert_eq!(Decision::from_str("Reject").unwrap(), Decision::Reject);
        assert!(Decision::from_str("maybe").is_err());
    }

    #[test]
    fn legacy_placement_label_reads_as_no() {
        let record: ReviewRecord = serde_json::from_str(
            r#"{"q1":["x"],"q2":"Accept","q3":"If No, which section:","q3_section":null}"#,
        )
        .unwrap();
        assert_eq!(record.q3, Placement::No);
        assert_eq!(record.q3_section, None);
    }

    #[test]
    fn q3_section_is_omitted_when_absent() {
        let record = ReviewRecord {
            q1: vec![IssueKind::Style.label().to_string()],
            q2: Decision::Accept,
            q3: Placement::Yes,
            q3_section: None,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("q3_section"));
        assert!(json.contains(r#""q2":"Accept""#));
    }

    #[test]
    fn other_label_trims_text() {
        assert_eq!(
            other_issue_label("  needs a source "),
            "Other (Please specify reason below): needs a source"
        );
    }
}
