use std::io::Write;

use super::Flow;
use crate::app::App;
use crate::errors::StudioError;
use crate::notify::{Notification, NotificationLevel};
use crate::services::{copy_to_clipboard, write_export};
use crate::widgets::editor::{EditorCommand, EditorEffect, ExportRequest};

pub(crate) fn handle<W: Write>(
    app: &mut App,
    command: EditorCommand,
    out: &mut W,
) -> Result<Flow, StudioError> {
    let effects = app.widgets.editor.reduce(command);

    let mut flow = Flow::Continue;
    for effect in effects {
        if handle_effect(app, effect, out)? == Flow::Quit {
            flow = Flow::Quit;
        }
    }
    Ok(flow)
}

fn handle_effect<W: Write>(
    app: &App,
    effect: EditorEffect,
    out: &mut W,
) -> Result<Flow, StudioError> {
    match effect {
        EditorEffect::Redraw => {
            writeln!(out, "{}", app.widgets.editor.view(app.color()))?;
        },
        EditorEffect::Print(text) => writeln!(out, "{text}")?,
        EditorEffect::Notify(notice) => report(out, &notice)?,
        EditorEffect::Export(request) => export(out, request)?,
        EditorEffect::Copy(text) => copy(out, &text)?,
        EditorEffect::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn export<W: Write>(
    out: &mut W,
    request: ExportRequest,
) -> Result<(), StudioError> {
    let notice =
        match write_export(&request.dir, &request.file_name, &request.contents)
        {
            Ok(path) => Notification::success(format!(
                "{} file written to {}",
                request.label,
                path.display()
            )),
            Err(err) => {
                log::debug!("{} export failed: {err}", request.label);
                Notification::error(format!(
                    "{} export failed: {err}",
                    request.label
                ))
            },
        };
    report(out, &notice)
}

fn copy<W: Write>(out: &mut W, text: &str) -> Result<(), StudioError> {
    let notice = match copy_to_clipboard(text) {
        Ok(()) => Notification::success("CSS copied to clipboard!"),
        Err(err) => {
            log::debug!("clipboard copy failed: {err}");
            Notification::error(format!("Copy failed: {err}"))
        },
    };
    report(out, &notice)
}

pub(crate) fn report<W: Write>(
    out: &mut W,
    notice: &Notification,
) -> Result<(), StudioError> {
    if notice.level() == NotificationLevel::Error {
        log::debug!("notified error: {}", notice.message());
    }
    writeln!(out, "{notice}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use gradia_core::{ExportFormat, GradientSession};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::widgets::editor::EditorWidget;
    use crate::widgets::editor::state::EditorState;

    fn app(export_dir: PathBuf) -> App {
        let state = EditorState::new(
            GradientSession::default(),
            StdRng::seed_from_u64(11),
            export_dir,
            false,
        );
        App::new(EditorWidget::new(state), false)
    }

    fn run(app: &mut App, command: EditorCommand) -> (Flow, String) {
        let mut out = Vec::new();
        let flow = handle(app, command, &mut out).expect("command handled");
        (flow, String::from_utf8(out).expect("utf-8 output"))
    }

    #[test]
    fn given_redraw_when_handled_then_view_is_printed() {
        let mut app = app(PathBuf::from("."));

        let (flow, output) = run(&mut app, EditorCommand::Show);

        assert_eq!(flow, Flow::Continue);
        assert!(output.ends_with(
            "  linear-gradient(to right, #667eea 0%, #764ba2 100%)\n"
        ));
    }

    #[test]
    fn given_quit_when_handled_then_flow_stops() {
        let mut app = app(PathBuf::from("."));

        let (flow, output) = run(&mut app, EditorCommand::Quit);

        assert_eq!(flow, Flow::Quit);
        assert!(output.is_empty());
    }

    #[test]
    fn given_export_when_handled_then_file_is_written_and_reported() {
        let dir = test_temp_dir("export");
        let mut app = app(dir.clone());

        let (_, output) = run(&mut app, EditorCommand::Export {
            format: ExportFormat::Css,
            dir: None,
        });

        let path = dir.join("gradient-bg.css");
        assert_eq!(
            output,
            format!("[ok] CSS file written to {}\n", path.display())
        );
        let contents = fs::read_to_string(&path).expect("export readable");
        assert!(contents.ends_with(
            ".gradient-bg {\n  background: linear-gradient(to right, \
             #667eea 0%, #764ba2 100%);\n}\n"
        ));

        fs::remove_dir_all(&dir)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_refused_removal_when_handled_then_error_is_printed() {
        let mut app = app(PathBuf::from("."));

        let (_, output) =
            run(&mut app, EditorCommand::RemoveStop("0".parse().expect("id")));

        assert_eq!(output, "[error] Minimum 2 color stops required\n");
    }

    #[test]
    fn given_copy_when_handled_then_single_notice_is_printed() {
        let mut app = app(PathBuf::from("."));

        let (flow, output) = run(&mut app, EditorCommand::CopyCss);

        assert_eq!(flow, Flow::Continue);
        assert_eq!(output.lines().count(), 1);
        assert!(
            output == "[ok] CSS copied to clipboard!\n"
                || output.starts_with("[error] Copy failed: "),
            "unexpected output {output:?}"
        );
    }

    fn test_temp_dir(test_name: &str) -> PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "gradia-events-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir)
            .expect("temporary directory should be created");
        dir
    }
}
