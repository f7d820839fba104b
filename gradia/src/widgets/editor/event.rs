use std::path::PathBuf;

use crate::notify::Notification;

/// File the shell should write on behalf of the reducer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ExportRequest {
    pub(crate) dir: PathBuf,
    pub(crate) file_name: String,
    pub(crate) contents: String,
    pub(crate) label: &'static str,
}

/// Effects produced by the editor reducer, carried out by the shell.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum EditorEffect {
    /// Model changed; redraw stops and preview.
    Redraw,
    /// Print a block of text.
    Print(String),
    /// Show a transient notice.
    Notify(Notification),
    /// Write an export document.
    Export(ExportRequest),
    /// Place text on the system clipboard.
    Copy(String),
    /// Stop reading commands.
    Quit,
}
