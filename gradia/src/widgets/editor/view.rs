use std::fmt::Write as _;

use gradia_core::{
    GradientKind, GradientSession, is_valid_hex_color, list_presets,
};

/// Render the stop table, mode line and gradient preview.
///
/// With `color` set, each hex stop gets a true-color swatch.
pub(crate) fn editor_view(session: &GradientSession, color: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", mode_line(session));
    let _ = writeln!(out, "  id  color     pos");

    for (id, stop) in session.stop_list().iter() {
        let swatch = if color {
            swatch_cell(&stop.color)
        } else {
            String::new()
        };
        let _ = writeln!(
            out,
            "{id:>4}  {:<8} {:>3}%{swatch}",
            stop.color, stop.position
        );
    }

    let _ = write!(out, "  {}", session.gradient());
    out
}

fn mode_line(session: &GradientSession) -> String {
    let config = session.config();
    let mut line = format!("  {}", config.kind());

    match config.kind() {
        GradientKind::Linear if config.uses_angle() => {
            let _ = write!(line, " · {}deg", config.angle_degrees());
        },
        GradientKind::Linear => {
            let _ = write!(line, " · {}", config.direction());
        },
        GradientKind::Radial => {
            let _ =
                write!(line, " · {} at {}", config.shape(), config.position());
        },
        GradientKind::Conic => {
            let _ = write!(line, " · from 0deg at {}", config.position());
        },
    }
    if config.is_repeating() {
        line.push_str(" · repeating");
    }

    let options = session.export_options();
    let _ = write!(line, " · .{}", options.effective_class_name());
    if options.include_vendor_prefixes {
        line.push_str(" +prefixes");
    }
    line
}

/// Two blank cells painted with the stop color.
fn swatch_cell(color: &str) -> String {
    if !is_valid_hex_color(color) {
        return String::new();
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&color[range], 16).unwrap_or(0)
    };
    format!(
        "  \x1b[48;2;{};{};{}m  \x1b[0m",
        channel(1..3),
        channel(3..5),
        channel(5..7)
    )
}

/// Render the preset catalog, marking the active entry.
pub(crate) fn presets_view(active: Option<usize>) -> String {
    let mut out = String::new();
    for (index, preset) in list_presets().iter().enumerate() {
        let marker = if active == Some(index) { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "{marker}{index:>3}  {:<8} {}",
            preset.name,
            preset.preview()
        );
    }
    out.pop();
    out
}

pub(crate) fn help_view() -> &'static str {
    "  add                      add a random stop
  rm <id>                  remove a stop
  color <id> <#rrggbb>     set a stop color
  pos <id> <0-100>         set a stop position
  kind <linear|radial|conic>
  dir <to right|...|custom>
  angle <0-360>            custom linear angle
  shape <circle|ellipse>
  at <center|top left|...> radial/conic center
  repeat <on|off>
  preset <name|index>      replace stops with a preset
  presets                  list presets
  class <name>             class name for CSS/SCSS
  prefixes <on|off>        vendor-prefixed declarations
  css | scss               print stylesheet text
  copy                     copy the CSS block to the clipboard
  export <css|scss> [dir]  write a stylesheet file
  show | help | quit"
}
