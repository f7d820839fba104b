use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use gradia_core::{GradientSession, StopId};
use rand::rngs::StdRng;

/// Editor state: the live gradient session plus shell-side export settings.
#[derive(Debug)]
pub(crate) struct EditorState {
    session: GradientSession,
    rng: StdRng,
    export_dir: PathBuf,
    timestamp_exports: bool,
}

impl EditorState {
    pub(crate) fn new(
        session: GradientSession,
        rng: StdRng,
        export_dir: PathBuf,
        timestamp_exports: bool,
    ) -> Self {
        Self {
            session,
            rng,
            export_dir,
            timestamp_exports,
        }
    }

    pub(crate) fn session(&self) -> &GradientSession {
        &self.session
    }

    pub(crate) fn session_mut(&mut self) -> &mut GradientSession {
        &mut self.session
    }

    /// Append a random stop using the editor's random source.
    pub(crate) fn add_stop(&mut self) -> StopId {
        self.session.add_stop(&mut self.rng)
    }

    /// Directory exports go to when no other is given.
    pub(crate) fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    /// Timestamp for a new export document, if exports carry one.
    pub(crate) fn export_timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp_exports.then(Utc::now)
    }
}
