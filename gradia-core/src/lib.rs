//! Color stop model and CSS gradient synthesis.
//!
//! The crate turns an edited list of color stops plus a handful of mode
//! parameters into CSS gradient functions, and wraps those into stylesheet
//! text:
//! - [`StopList`] keeps the live stops, hands out stable [`StopId`]s and
//!   enforces the two-stop minimum,
//! - [`synthesize`] renders `linear-`, `radial-` and `conic-gradient(...)`
//!   strings from a position-sorted view of the stops,
//! - [`build_css_block`] / [`build_scss_block`] produce the text a user
//!   copies or exports,
//! - [`list_presets`] / [`apply_preset`] expose the built-in catalog.
//!
//! Front-ends usually hold one [`GradientSession`], feed user commands into
//! its mutators, and re-render [`GradientSession::gradient`] after each one.
//!
//! ```
//! use gradia_core::{GradientSession, LinearDirection};
//!
//! let mut session = GradientSession::default();
//! session.config_mut().set_direction(LinearDirection::ToBottom);
//! assert_eq!(
//!     session.gradient(),
//!     "linear-gradient(to bottom, #667eea 0%, #764ba2 100%)"
//! );
//! ```

mod color;
mod config;
mod errors;
mod export;
mod preset;
mod session;
mod stop;
mod synth;

pub use color::{is_valid_hex_color, random_hex_color};
pub use config::{
    DEFAULT_ANGLE_DEGREES, GradientConfig, GradientKind, GradientPosition,
    LinearDirection, MAX_ANGLE_DEGREES, RadialShape, clamp_angle,
};
pub use errors::{GradientError, Result};
pub use export::{
    DEFAULT_CLASS_NAME, ExportFormat, ExportOptions, build_css_block,
    build_scss_block, export_document, format_timestamp,
};
pub use preset::{
    Preset, PresetRef, PresetStop, apply_preset, find_preset, list_presets,
};
pub use session::{GradientSession, default_stops};
pub use stop::{
    ColorStop, MAX_POSITION, MIN_STOPS, StopId, StopList, clamp_position,
    parse_position, parse_position_strict, sorted_view,
};
pub use synth::{background_declaration, stop_list_css, swatch, synthesize};
