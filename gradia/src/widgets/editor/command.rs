use std::path::PathBuf;

use gradia_core::{
    ExportFormat, GradientKind, GradientPosition, LinearDirection, PresetRef,
    RadialShape, StopId,
};

/// Commands dispatched to the editor reducer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum EditorCommand {
    /// Append a random stop after the last one.
    AddStop,
    /// Remove a stop, keeping at least two.
    RemoveStop(StopId),
    /// A stop color input changed.
    SetColor { id: StopId, color: String },
    /// A stop position input changed; `raw` is the unparsed text.
    SetStopPosition { id: StopId, raw: String },
    /// Gradient function family changed.
    SetKind(GradientKind),
    /// Linear direction changed.
    SetDirection(LinearDirection),
    /// Custom angle slider moved.
    SetAngle(i64),
    /// Radial shape changed.
    SetShape(RadialShape),
    /// Radial/conic center changed.
    SetCenter(GradientPosition),
    /// Repeating checkbox toggled.
    SetRepeating(bool),
    /// A catalog preset was picked.
    ApplyPreset(PresetRef),
    /// Show the preset catalog.
    ListPresets,
    /// Class name input changed.
    SetClassName(String),
    /// Vendor prefix checkbox toggled.
    SetVendorPrefixes(bool),
    /// Show the CSS panel.
    ShowCss,
    /// Show the SCSS module.
    ShowScss,
    /// Copy the CSS block to the system clipboard.
    CopyCss,
    /// Write an export document, optionally into another directory.
    Export {
        format: ExportFormat,
        dir: Option<PathBuf>,
    },
    /// Re-render the editor.
    Show,
    /// Print command help.
    Help,
    /// Leave the editor.
    Quit,
}
