use std::io::Write;

use crate::app::App;
use crate::errors::StudioError;
use crate::widgets::editor::EditorCommand;

pub(crate) mod editor;

/// Events that drive the shell loop.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AppEvent {
    // Editor widget
    Editor(EditorCommand),
}

/// Whether the shell keeps reading input after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

pub(crate) fn handle<W: Write>(
    app: &mut App,
    event: AppEvent,
    out: &mut W,
) -> Result<Flow, StudioError> {
    match event {
        AppEvent::Editor(command) => editor::handle(app, command, out),
    }
}
