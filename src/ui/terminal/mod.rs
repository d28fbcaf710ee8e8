//! Line-oriented front end. Reads commands, dispatches actions and redraws.

pub mod input;
pub mod render;

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::ui::app::{Notice, ReviewApp};
use input::{Input, parse_line};

const PROMPT: &str = "review> ";

/// Drive `app` from `reader` until `quit` or end of input.
pub fn run_session<R: BufRead, W: Write>(
    app: &mut ReviewApp,
    reader: R,
    mut writer: W,
) -> Result<()> {
    writeln!(writer, "{}", render::render_page(&app.state))?;
    write!(writer, "{PROMPT}")?;
    writer.flush()?;

    for line in reader.lines() {
        let line = line?;
        match parse_line(&line, &app.state) {
            Ok(Input::Quit) => break,
            Ok(Input::Nothing) => {}
            Ok(Input::Help) => write!(writer, "{}", render::help_text())?,
            Ok(Input::List) => write!(writer, "{}", render::render_entry_list(&app.state))?,
            Ok(Input::Show) => writeln!(writer, "{}", render::render_page(&app.state))?,
            Ok(Input::Dispatch(actions)) => {
                for action in actions {
                    app.dispatch(action);
                }
                writeln!(writer, "{}", render::render_page(&app.state))?;
            }
            Err(err) => {
                let notice = Notice::error(err.to_string());
                writeln!(writer, "{}", render::render_notice(&notice))?;
            }
        }
        write!(writer, "{PROMPT}")?;
        writer.flush()?;
    }

    log::info!(
        "[{}] Session ended, {} of {} entries reviewed",
        app.state.session.session_id,
        app.state.session.entries.reviewed_count(),
        app.state.session.entries.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use object_store::ObjectStore;
    use object_store::path::Path as ObjectPath;
    use tempfile::NamedTempFile;

    #[test]
    fn scripted_session_submits_and_advances() {
        let mut dataset = NamedTempFile::new().unwrap();
        dataset
            .write_all(
                br#"{"a":{"entity_id":"Dog","section_name":"History","original_section":"The dog is loyal","agent_updated_section":"The dog is very loyal"},
                    "b":{"entity_id":"Cat","section_name":"Diet","original_section":"x","agent_updated_section":"y"}}"#,
            )
            .unwrap();

        let script = format!(
            "load {}\ndecide accept\nother  Tone shift \ndecide accept\nplace no Temperament\nsubmit\nnext\nquit\nshow\n",
            dataset.path().display()
        );
        let (mut app, memory) = ReviewApp::new_for_test();
        let mut out = Vec::new();
        run_session(&mut app, Cursor::new(script), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("File loaded successfully! 2 entries."));
        assert!(out.contains("[error] Select at least one issue first"));
        assert!(out.contains("Ready to move to next entry: Cat: Diet (1)"));
        assert_eq!(app.current_uid(), Some("1"));

        let stored = crate::block_on(async {
            memory
                .get(&ObjectPath::from("test/0.json"))
                .await
                .unwrap()
                .bytes()
                .await
                .unwrap()
        });
        let stored: serde_json::Value = serde_json::from_slice(&stored).unwrap();
        assert_eq!(
            stored["review"]["q1"][0],
            "Other (Please specify reason below): Tone shift"
        );
        assert_eq!(stored["review"]["q3_section"], "Temperament");
    }

    #[test]
    fn bad_command_keeps_session_running() {
        let (mut app, _) = ReviewApp::new_for_test();
        let mut out = Vec::new();
        run_session(&mut app, Cursor::new("bogus\nhelp\n"), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("[error] Unknown command 'bogus'"));
        assert!(out.contains("Commands:"));
    }
}
