use std::fmt::{self, Write as _};
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::GradientError;
use crate::stop::{ColorStop, sorted_view};

/// Class name used when the configured one is empty.
pub const DEFAULT_CLASS_NAME: &str = "gradient-bg";

const VENDOR_PREFIXES: [&str; 3] = ["-webkit-", "-moz-", "-o-"];
const GENERATOR_BANNER: &str = "Generated by CSS Gradient Generator";

/// Options for stylesheet blocks built around a gradient.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExportOptions {
    pub class_name: String,
    pub include_vendor_prefixes: bool,
}

impl ExportOptions {
    pub fn new(
        class_name: impl Into<String>,
        include_vendor_prefixes: bool,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            include_vendor_prefixes,
        }
    }

    /// Class name used in the output; empty input falls back to
    /// [`DEFAULT_CLASS_NAME`].
    pub fn effective_class_name(&self) -> &str {
        if self.class_name.is_empty() {
            DEFAULT_CLASS_NAME
        } else {
            &self.class_name
        }
    }
}

/// Stylesheet flavour of an exported document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Css,
    Scss,
}

impl ExportFormat {
    /// File name the document is saved under.
    pub fn file_name(&self, options: &ExportOptions) -> String {
        let class_name = options.effective_class_name();
        match self {
            ExportFormat::Css => format!("{class_name}.css"),
            ExportFormat::Scss => format!("_{class_name}.scss"),
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Css => "text/css",
            ExportFormat::Scss => "text/x-scss",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ExportFormat::Css => "css",
            ExportFormat::Scss => "scss",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExportFormat {
    type Err = GradientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "css" => Ok(ExportFormat::Css),
            "scss" => Ok(ExportFormat::Scss),
            _ => Err(GradientError::InvalidKeyword {
                field: "format",
                value: s.to_string(),
            }),
        }
    }
}

fn push_background_lines(out: &mut String, gradient: &str, prefixed: bool) {
    if prefixed {
        for prefix in VENDOR_PREFIXES {
            let _ = writeln!(out, "  background: {prefix}{gradient};");
        }
    }
    let _ = writeln!(out, "  background: {gradient};");
}

/// Build a CSS rule applying `gradient` to the configured class.
///
/// With vendor prefixes the `-webkit-`, `-moz-` and `-o-` lines come first,
/// each gluing the prefix onto the unchanged gradient function. The block
/// has no trailing newline.
pub fn build_css_block(gradient: &str, options: &ExportOptions) -> String {
    let class_name = options.effective_class_name();
    let mut css = format!(".{class_name} {{\n");
    push_background_lines(&mut css, gradient, options.include_vendor_prefixes);
    css.push('}');
    css
}

/// Build an SCSS module: one `$gradient-color-<n>` variable per stop in
/// position order, a mixin named after the class, and a usage rule.
pub fn build_scss_block(
    stops: &[ColorStop],
    gradient: &str,
    options: &ExportOptions,
) -> String {
    let class_name = options.effective_class_name();
    let mut scss = String::from("// Color Variables\n");

    for (index, stop) in sorted_view(stops).iter().enumerate() {
        let _ =
            writeln!(scss, "$gradient-color-{}: {};", index + 1, stop.color);
    }

    scss.push_str("\n// Gradient Mixin\n");
    let _ = writeln!(scss, "@mixin {class_name}() {{");
    push_background_lines(&mut scss, gradient, options.include_vendor_prefixes);
    scss.push_str("}\n\n");

    scss.push_str("// Usage\n");
    let _ = writeln!(scss, ".{class_name} {{");
    let _ = writeln!(scss, "  @include {class_name}();");
    scss.push_str("}\n");
    scss
}

/// Format an export timestamp as ISO-8601 UTC with milliseconds.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Build the full text of an exported stylesheet file.
///
/// The document starts with a banner comment, then the generation time when
/// `generated_at` is given, then a blank line and the block.
pub fn export_document(
    format: ExportFormat,
    stops: &[ColorStop],
    gradient: &str,
    options: &ExportOptions,
    generated_at: Option<DateTime<Utc>>,
) -> String {
    let mut doc = String::new();
    let timestamp = generated_at.map(format_timestamp);

    match format {
        ExportFormat::Css => {
            let _ = writeln!(doc, "/* {GENERATOR_BANNER} */");
            if let Some(timestamp) = timestamp {
                let _ = writeln!(doc, "/* {timestamp} */");
            }
            doc.push('\n');
            doc.push_str(&build_css_block(gradient, options));
            doc.push('\n');
        },
        ExportFormat::Scss => {
            let _ = writeln!(doc, "// {GENERATOR_BANNER}");
            if let Some(timestamp) = timestamp {
                let _ = writeln!(doc, "// {timestamp}");
            }
            doc.push('\n');
            doc.push_str(&build_scss_block(stops, gradient, options));
        },
    }

    doc
}
