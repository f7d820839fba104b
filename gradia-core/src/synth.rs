use crate::config::{GradientConfig, GradientKind, LinearDirection};
use crate::stop::{ColorStop, sorted_view};

const REPEATING_PREFIX: &str = "repeating-";

/// Render stops as a CSS stop list: `"<color> <position>%"` joined by `", "`.
///
/// Stops are rendered in the order given.
pub fn stop_list_css(stops: &[ColorStop]) -> String {
    stops
        .iter()
        .map(|stop| format!("{} {}%", stop.color, stop.position))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build the CSS gradient function for `stops` under `config`.
///
/// Stops are sorted by position first, so the backing order never affects
/// the output. The result carries no property name and no trailing
/// semicolon.
pub fn synthesize(stops: &[ColorStop], config: &GradientConfig) -> String {
    let stop_list = stop_list_css(&sorted_view(stops));
    let prefix = if config.is_repeating() {
        REPEATING_PREFIX
    } else {
        ""
    };

    match config.kind() {
        GradientKind::Linear => {
            let direction = match config.direction() {
                LinearDirection::Custom => {
                    format!("{}deg", config.angle_degrees())
                },
                keyword => keyword.as_css().to_string(),
            };
            format!("{prefix}linear-gradient({direction}, {stop_list})")
        },
        GradientKind::Radial => format!(
            "{prefix}radial-gradient({} at {}, {stop_list})",
            config.shape().as_css(),
            config.position().as_css(),
        ),
        GradientKind::Conic => format!(
            "{prefix}conic-gradient(from 0deg at {}, {stop_list})",
            config.position().as_css(),
        ),
    }
}

/// Wrap a gradient function as a `background` declaration.
pub fn background_declaration(gradient: &str) -> String {
    format!("background: {gradient};")
}

/// Swatch string for a stop list: a left-to-right linear gradient over the
/// stops in the order given.
pub fn swatch(stops: &[ColorStop]) -> String {
    format!("linear-gradient(to right, {})", stop_list_css(stops))
}
