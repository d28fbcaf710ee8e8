//! Integration tests for the review workflow
//! Dataset load through submission and navigation, against an in-memory store.

use std::sync::Arc;

use async_trait::async_trait;
use edit_review::application::review::{FormStage, highlight, opcodes};
use edit_review::domain::{Decision, Entry, IssueKind, Placement, ReviewRecord};
use edit_review::infra::sink::{ObjectStoreSink, ReviewSink, SinkError};
use edit_review::ui::app::{
    Action, DatasetAction, NavigationAction, NoticeLevel, ReviewAction, ReviewApp,
};
use object_store::ObjectStore;
use object_store::memory::InMemory;
use object_store::path::Path as ObjectPath;
use similar::DiffTag;

const DATASET: &str = r#"[
    {
        "entity_id": "Dog",
        "section_name": "History",
        "original_section": "The dog is loyal",
        "agent_updated_section": "The dog is very loyal and friendly",
        "url": ["https://example.org/dog"],
        "claims": [{"text": "Dogs are loyal", "score": 0.9}]
    },
    {
        "entity_id": "Cat",
        "section_name": "Diet",
        "original_section": "Cats eat fish",
        "agent_updated_section": "Cats eat meat",
        "questions": ["Q1?", "Q2?", "Q3?"]
    }
]"#;

fn load(app: &mut ReviewApp) {
    app.dispatch(Action::Dataset(DatasetAction::Upload {
        source: "dataset.json".into(),
        bytes: DATASET.as_bytes().to_vec(),
    }));
}

fn act(app: &mut ReviewApp, action: ReviewAction) {
    app.dispatch(Action::Review(action));
}

fn read(memory: &Arc<InMemory>, path: &str) -> Option<Vec<u8>> {
    edit_review::block_on(async {
        let result = memory.get(&ObjectPath::from(path)).await.ok()?;
        Some(result.bytes().await.ok()?.to_vec())
    })
}

fn answer_and_submit(app: &mut ReviewApp, uid: &str, decision: Decision) {
    act(
        app,
        ReviewAction::SetIssue {
            uid: uid.into(),
            issue: IssueKind::Style,
            checked: true,
        },
    );
    act(
        app,
        ReviewAction::ChooseDecision {
            uid: uid.into(),
            decision,
        },
    );
    act(
        app,
        ReviewAction::ChoosePlacement {
            uid: uid.into(),
            placement: Placement::Yes,
        },
    );
    act(app, ReviewAction::Submit { uid: uid.into() });
}

#[test]
fn test_dog_entry_diff() {
    let (before, after) = highlight("The dog is loyal", "The dog is very loyal and friendly");
    assert_eq!(before, "The dog is loyal");
    assert_eq!(after, "The dog is <ins>very</ins> loyal <ins>and friendly</ins>");

    let a: Vec<&str> = "The dog is loyal".split_whitespace().collect();
    let b: Vec<&str> = "The dog is very loyal and friendly"
        .split_whitespace()
        .collect();
    let tags: Vec<_> = opcodes(&a, &b)
        .iter()
        .map(|op| op.as_tag_tuple())
        .collect();
    assert_eq!(
        tags,
        vec![
            (DiffTag::Equal, 0..3, 0..3),
            (DiffTag::Insert, 3..3, 3..4),
            (DiffTag::Equal, 3..4, 4..5),
            (DiffTag::Insert, 4..4, 5..7),
        ]
    );
}

#[test]
fn test_full_review_round_trip() {
    let (mut app, memory) = ReviewApp::new_for_test();
    load(&mut app);
    assert_eq!(app.current_uid(), Some("0"));

    answer_and_submit(&mut app, "0", Decision::Accept);
    assert_eq!(app.state.form().unwrap().stage(), FormStage::Submitted);

    let bytes = read(&memory, "test/0.json").expect("review uploaded");
    let stored: Entry = serde_json::from_slice(&bytes).unwrap();
    let expected = ReviewRecord {
        q1: vec![
            "Stylistic/clarity: Phrasing redundant or tone is too informal".to_string(),
        ],
        q2: Decision::Accept,
        q3: Placement::Yes,
        q3_section: None,
    };
    assert_eq!(stored.review.as_ref(), Some(&expected));
    assert_eq!(app.current_entry().unwrap().review.as_ref(), Some(&expected));

    // Fields the tool does not know about survive the round trip.
    let raw: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(raw["claims"][0]["text"], "Dogs are loyal");
    assert_eq!(raw["review"]["q2"], "Accept");
    assert!(raw["review"].get("q3_section").is_none());
}

#[test]
fn test_advance_wraps_to_first_entry() {
    let (mut app, memory) = ReviewApp::new_for_test();
    load(&mut app);

    answer_and_submit(&mut app, "0", Decision::Accept);
    app.dispatch(Action::Navigation(NavigationAction::AdvanceToNext));
    assert_eq!(app.current_uid(), Some("1"));
    assert_eq!(app.state.form().unwrap().stage(), FormStage::Unanswered);

    answer_and_submit(&mut app, "1", Decision::Reject);
    app.dispatch(Action::Navigation(NavigationAction::AdvanceToNext));
    assert_eq!(app.current_uid(), Some("0"));

    assert!(read(&memory, "test/1.json").is_some());
    assert_eq!(app.state.session.entries.reviewed_count(), 2);
}

#[test]
fn test_resubmission_overwrites() {
    let (mut app, memory) = ReviewApp::new_for_test();
    load(&mut app);

    answer_and_submit(&mut app, "0", Decision::Accept);
    app.dispatch(Action::Navigation(NavigationAction::StayOnEntry));
    act(
        &mut app,
        ReviewAction::ChooseDecision {
            uid: "0".into(),
            decision: Decision::AcceptWithRevision,
        },
    );
    act(&mut app, ReviewAction::Submit { uid: "0".into() });

    let stored: Entry = serde_json::from_slice(&read(&memory, "test/0.json").unwrap()).unwrap();
    assert_eq!(stored.review.unwrap().q2, Decision::AcceptWithRevision);
}

struct OfflineSink;

#[async_trait]
impl ReviewSink for OfflineSink {
    async fn upload(&self, _path: &str, _bytes: Vec<u8>) -> Result<(), SinkError> {
        Err(std::io::Error::other("network unreachable").into())
    }

    fn describe(&self) -> String {
        "offline".into()
    }
}

#[test]
fn test_failed_upload_then_retry() {
    let (sink, memory) = ObjectStoreSink::in_memory();
    let mut app = ReviewApp::new(Arc::new(OfflineSink), "test");
    load(&mut app);

    answer_and_submit(&mut app, "0", Decision::Reject);
    assert_eq!(app.state.form().unwrap().stage(), FormStage::Q3Answered);
    assert_eq!(
        app.state.ui.notice.as_ref().unwrap().level,
        NoticeLevel::Error
    );

    // Cannot move on until the review is saved.
    app.dispatch(Action::Navigation(NavigationAction::AdvanceToNext));
    assert_eq!(app.current_uid(), Some("0"));

    app.sink = Arc::new(sink);
    act(&mut app, ReviewAction::Submit { uid: "0".into() });
    assert_eq!(app.state.form().unwrap().stage(), FormStage::Submitted);
    assert!(read(&memory, "test/0.json").is_some());
}

#[test]
fn test_entry_questions_override_defaults() {
    let (mut app, _) = ReviewApp::new_for_test();
    load(&mut app);
    app.dispatch(Action::Navigation(NavigationAction::SelectEntry {
        uid: "1".into(),
    }));
    assert_eq!(
        app.current_entry().unwrap().question_texts(),
        ["Q1?", "Q2?", "Q3?"]
    );
}
