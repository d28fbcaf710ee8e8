//! Plain-text rendering of the review page.

use std::fmt::Write;

use crate::application::review::{ReviewForm, highlight};
use crate::domain::{Decision, Entry, IssueKind, Placement};
use crate::ui::app::{AppState, Notice, NoticeLevel};

pub fn render_notice(notice: &Notice) -> String {
    let tag = match notice.level {
        NoticeLevel::Info => "info",
        NoticeLevel::Success => "ok",
        NoticeLevel::Error => "error",
    };
    format!("[{tag}] {}", notice.message)
}

/// Before/after block for one entry.
pub fn render_diff(entry: &Entry) -> String {
    let (before, after) = highlight(&entry.original_section, &entry.agent_updated_section);
    format!("Before:\n  {before}\n\nAfter:\n  {after}\n")
}

pub fn render_entry_list(state: &AppState) -> String {
    let session = &state.session;
    if !session.has_dataset() {
        return "No dataset loaded.\n".to_string();
    }

    let mut out = String::new();
    for entry in session.entries.iter() {
        let cursor = if session.current_uid.as_deref() == Some(entry.uid.as_str()) {
            '>'
        } else {
            ' '
        };
        let reviewed = if entry.is_reviewed() { " (reviewed)" } else { "" };
        let _ = writeln!(out, "{cursor} {:<10} {}{reviewed}", entry.uid, entry.label());
    }
    out
}

/// The whole page: notice, entry header, diff and the reachable questions.
pub fn render_page(state: &AppState) -> String {
    let mut out = String::new();
    if let Some(notice) = &state.ui.notice {
        let _ = writeln!(out, "{}\n", render_notice(notice));
    }

    let (Some(entry), Some(form)) = (state.current_entry(), state.form()) else {
        out.push_str("Please upload a JSON file to begin. Type 'load <path>'.\n");
        return out;
    };

    let position = state.session.current_index().map_or(0, |i| i + 1);
    let _ = writeln!(
        out,
        "Entry {position} of {}: {}",
        state.session.entries.len(),
        entry.label()
    );
    let _ = writeln!(out, "Entity: {}", entry.entity_id);
    let _ = writeln!(out, "Section: {}", entry.section_name);
    if let Some(source) = &state.session.dataset_source {
        let _ = writeln!(out, "Source: {source}");
    }
    let _ = writeln!(out, "Wikipedia: {}", entry.wikipedia_url());
    if let Some(link) = entry.primary_link() {
        let _ = writeln!(out, "Entity link: {link}");
    }
    out.push('\n');
    out.push_str(&render_diff(entry));
    out.push('\n');
    render_questions(&mut out, entry, form);

    if form.is_uploading() {
        out.push_str("\nUploading review...\n");
    } else if form.is_submitted() {
        match state.next_entry() {
            Some(next) => {
                let _ = writeln!(out, "\nReady to move to next entry: {}", next.label());
            }
            None => out.push_str("\nReview saved.\n"),
        }
        out.push_str("Type 'next' to continue or 'stay' to revise this review.\n");
    } else if form.can_submit() {
        out.push_str("\nType 'submit' to save your review.\n");
    }
    out
}

fn render_questions(out: &mut String, entry: &Entry, form: &ReviewForm) {
    let [q1, q2, q3] = entry.question_texts();

    let _ = writeln!(out, "{q1}");
    for kind in IssueKind::ALL {
        let mark = if form.is_checked(kind) { 'x' } else { ' ' };
        if kind == IssueKind::Other {
            let _ = writeln!(
                out,
                "  [{mark}] {:<14} {} {}",
                kind.key(),
                kind.label(),
                form.other_text()
            );
        } else {
            let _ = writeln!(out, "  [{mark}] {:<14} {}", kind.key(), kind.label());
        }
    }

    // Later questions stay hidden until their prerequisites are answered.
    if !form.decision_available() {
        return;
    }
    let _ = writeln!(out, "\n{q2}");
    for (key, decision) in ["accept", "revise", "reject"].into_iter().zip(Decision::ALL) {
        let mark = radio(form.decision() == Some(decision));
        let _ = writeln!(out, "  ({mark}) {key:<14} {decision}");
    }

    if !form.placement_available() {
        return;
    }
    let _ = writeln!(out, "\n{q3}");
    for placement in [Placement::Yes, Placement::No] {
        let mark = radio(form.placement() == Some(placement));
        let key = placement.to_string().to_lowercase();
        let _ = writeln!(out, "  ({mark}) {key:<14} {placement}");
    }
    if let Some(section) = form.target_section() {
        let _ = writeln!(out, "  If No, which section: {section}");
    }
}

fn radio(selected: bool) -> char {
    if selected { '*' } else { ' ' }
}

pub fn help_text() -> &'static str {
    "Commands:
  load <path>            load a JSON dataset
  list                   list entries
  select <uid>           review another entry (discards unsaved answers)
  toggle <issue>         check or uncheck an issue by key
  other <text>           describe an issue not in the list
  decide accept|revise|reject
  place yes | place no [section]
  section <text>         target section when placement is no
  submit                 save the review
  next                   move to the next entry after submitting
  stay                   revise the submitted review
  show                   redraw the page
  help                   this text
  quit                   leave
"
}
