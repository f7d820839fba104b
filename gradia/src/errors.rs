use thiserror::Error;

/// Errors surfaced by the terminal shell.
#[derive(Debug, Error)]
pub(crate) enum StudioError {
    /// Filesystem operation failed.
    #[error("file IO failed: {0}")]
    Io(#[from] std::io::Error),
    /// The gradient model rejected an operation.
    #[error(transparent)]
    Gradient(#[from] gradia_core::GradientError),
    /// The system clipboard could not be opened or written.
    #[error("clipboard unavailable: {0}")]
    Clipboard(#[from] arboard::Error),
    /// Editor input could not be understood.
    #[error("{message}")]
    Command { message: String },
}

impl StudioError {
    pub(crate) fn command(message: impl Into<String>) -> Self {
        StudioError::Command {
            message: message.into(),
        }
    }
}
