pub(crate) mod command;
pub(crate) mod event;
pub(crate) mod input;
pub(crate) mod reducer;
pub(crate) mod state;
pub(crate) mod view;

pub(crate) use command::EditorCommand;
pub(crate) use event::{EditorEffect, ExportRequest};
#[cfg(test)]
use gradia_core::GradientSession;
use state::EditorState;

/// Gradient editor widget: stop table, mode parameters, presets and
/// stylesheet export.
pub(crate) struct EditorWidget {
    state: EditorState,
}

impl EditorWidget {
    pub(crate) fn new(state: EditorState) -> Self {
        Self { state }
    }

    /// Reduce a command into state updates and effects.
    pub(crate) fn reduce(
        &mut self,
        command: EditorCommand,
    ) -> Vec<EditorEffect> {
        reducer::reduce(&mut self.state, command)
    }

    /// Render the stop table and gradient preview.
    pub(crate) fn view(&self, color: bool) -> String {
        view::editor_view(self.state.session(), color)
    }

    /// Return read-only access to the session for tests.
    #[cfg(test)]
    pub(crate) fn session(&self) -> &GradientSession {
        self.state.session()
    }
}
