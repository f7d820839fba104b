use std::io::{BufRead, Write};

use crate::app::App;
use crate::errors::StudioError;
use crate::events::{self, AppEvent, Flow};
use crate::notify::Notification;
use crate::widgets::editor::input::parse_command;

const PROMPT: &str = "gradia> ";

/// Read editor commands line by line until `quit` or end of input.
pub(crate) fn run<R: BufRead, W: Write>(
    app: &mut App,
    input: R,
    out: &mut W,
    prompt: bool,
) -> Result<(), StudioError> {
    writeln!(out, "{}", app.widgets.editor.view(app.color()))?;
    show_prompt(out, prompt)?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(None) => {},
            Ok(Some(command)) => {
                let flow = events::handle(app, AppEvent::Editor(command), out)?;
                if flow == Flow::Quit {
                    return Ok(());
                }
            },
            Err(err) => {
                log::debug!("rejected input {line:?}: {err}");
                let notice = Notification::error(err.to_string());
                events::editor::report(out, &notice)?;
            },
        }
        show_prompt(out, prompt)?;
    }

    Ok(())
}

fn show_prompt<W: Write>(out: &mut W, prompt: bool) -> Result<(), StudioError> {
    if prompt {
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::path::PathBuf;

    use gradia_core::GradientSession;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::widgets::editor::EditorWidget;
    use crate::widgets::editor::state::EditorState;

    fn run_script(script: &str) -> (App, String) {
        let state = EditorState::new(
            GradientSession::default(),
            StdRng::seed_from_u64(5),
            PathBuf::from("."),
            false,
        );
        let mut app = App::new(EditorWidget::new(state), false);
        let mut out = Vec::new();

        run(&mut app, Cursor::new(script), &mut out, false)
            .expect("script should run");
        (app, String::from_utf8(out).expect("utf-8 output"))
    }

    #[test]
    fn given_edit_script_when_run_then_session_reflects_commands() {
        let (app, _) = run_script(
            "color 0 #000000\n\
             pos 1 50\n\
             kind radial\n\
             shape ellipse\n\
             at top\n",
        );

        assert_eq!(
            app.widgets.editor.session().gradient(),
            "radial-gradient(ellipse at top, #000000 0%, #764ba2 50%)"
        );
    }

    #[test]
    fn given_quit_when_run_then_later_lines_are_ignored() {
        let (app, _) = run_script("quit\nadd\n");

        assert_eq!(app.widgets.editor.session().stop_list().len(), 2);
    }

    #[test]
    fn given_unknown_command_when_run_then_error_is_printed_and_loop_continues()
    {
        let (app, output) = run_script("wobble\nadd\n");

        assert!(output.contains("[error] unknown command \"wobble\""));
        assert_eq!(app.widgets.editor.session().stop_list().len(), 3);
    }

    #[test]
    fn given_preset_and_css_when_run_then_block_is_printed() {
        let (_, output) = run_script("preset fire\nprefixes on\ncss\n");

        assert!(output.contains("[ok] Applied \"Fire\" preset\n"));
        assert!(output.contains(
            ".gradient-bg {\n  background: -webkit-linear-gradient(to right, \
             #f12711 0%, #f5af19 100%);\n"
        ));
    }
}
