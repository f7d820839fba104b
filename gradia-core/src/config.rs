use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GradientError;

/// Largest accepted custom angle, in degrees.
pub const MAX_ANGLE_DEGREES: u16 = 360;
/// Angle used when the direction is switched to custom.
pub const DEFAULT_ANGLE_DEGREES: u16 = 90;

/// CSS gradient function family.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    #[default]
    Linear,
    Radial,
    Conic,
}

impl GradientKind {
    pub const ALL: [GradientKind; 3] =
        [GradientKind::Linear, GradientKind::Radial, GradientKind::Conic];

    pub fn as_css(&self) -> &'static str {
        match self {
            GradientKind::Linear => "linear",
            GradientKind::Radial => "radial",
            GradientKind::Conic => "conic",
        }
    }
}

/// Direction of a linear gradient.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
pub enum LinearDirection {
    #[default]
    #[serde(rename = "to right")]
    ToRight,
    #[serde(rename = "to left")]
    ToLeft,
    #[serde(rename = "to bottom")]
    ToBottom,
    #[serde(rename = "to top")]
    ToTop,
    #[serde(rename = "to bottom right")]
    ToBottomRight,
    #[serde(rename = "to bottom left")]
    ToBottomLeft,
    #[serde(rename = "to top right")]
    ToTopRight,
    #[serde(rename = "to top left")]
    ToTopLeft,
    /// Use [`GradientConfig::angle_degrees`] instead of a keyword.
    #[serde(rename = "custom")]
    Custom,
}

impl LinearDirection {
    pub const ALL: [LinearDirection; 9] = [
        LinearDirection::ToRight,
        LinearDirection::ToLeft,
        LinearDirection::ToBottom,
        LinearDirection::ToTop,
        LinearDirection::ToBottomRight,
        LinearDirection::ToBottomLeft,
        LinearDirection::ToTopRight,
        LinearDirection::ToTopLeft,
        LinearDirection::Custom,
    ];

    pub fn as_css(&self) -> &'static str {
        match self {
            LinearDirection::ToRight => "to right",
            LinearDirection::ToLeft => "to left",
            LinearDirection::ToBottom => "to bottom",
            LinearDirection::ToTop => "to top",
            LinearDirection::ToBottomRight => "to bottom right",
            LinearDirection::ToBottomLeft => "to bottom left",
            LinearDirection::ToTopRight => "to top right",
            LinearDirection::ToTopLeft => "to top left",
            LinearDirection::Custom => "custom",
        }
    }
}

/// Ending shape of a radial gradient.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RadialShape {
    #[default]
    Circle,
    Ellipse,
}

impl RadialShape {
    pub const ALL: [RadialShape; 2] = [RadialShape::Circle, RadialShape::Ellipse];

    pub fn as_css(&self) -> &'static str {
        match self {
            RadialShape::Circle => "circle",
            RadialShape::Ellipse => "ellipse",
        }
    }
}

/// Center keyword shared by radial and conic gradients.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
pub enum GradientPosition {
    #[default]
    #[serde(rename = "center")]
    Center,
    #[serde(rename = "top")]
    Top,
    #[serde(rename = "bottom")]
    Bottom,
    #[serde(rename = "left")]
    Left,
    #[serde(rename = "right")]
    Right,
    #[serde(rename = "top left")]
    TopLeft,
    #[serde(rename = "top right")]
    TopRight,
    #[serde(rename = "bottom left")]
    BottomLeft,
    #[serde(rename = "bottom right")]
    BottomRight,
}

impl GradientPosition {
    pub const ALL: [GradientPosition; 9] = [
        GradientPosition::Center,
        GradientPosition::Top,
        GradientPosition::Bottom,
        GradientPosition::Left,
        GradientPosition::Right,
        GradientPosition::TopLeft,
        GradientPosition::TopRight,
        GradientPosition::BottomLeft,
        GradientPosition::BottomRight,
    ];

    pub fn as_css(&self) -> &'static str {
        match self {
            GradientPosition::Center => "center",
            GradientPosition::Top => "top",
            GradientPosition::Bottom => "bottom",
            GradientPosition::Left => "left",
            GradientPosition::Right => "right",
            GradientPosition::TopLeft => "top left",
            GradientPosition::TopRight => "top right",
            GradientPosition::BottomLeft => "bottom left",
            GradientPosition::BottomRight => "bottom right",
        }
    }
}

macro_rules! keyword_parsing {
    ($ty:ident, $field:literal) => {
        impl FromStr for $ty {
            type Err = GradientError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = normalize_keyword(s);
                $ty::ALL
                    .into_iter()
                    .find(|candidate| candidate.as_css() == wanted)
                    .ok_or_else(|| GradientError::InvalidKeyword {
                        field: $field,
                        value: s.to_string(),
                    })
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_css())
            }
        }
    };
}

keyword_parsing!(GradientKind, "kind");
keyword_parsing!(LinearDirection, "direction");
keyword_parsing!(RadialShape, "shape");
keyword_parsing!(GradientPosition, "position");

/// Collapse case, dashes and repeated whitespace so that `To-Right` and
/// `to  right` read as `to right`.
fn normalize_keyword(raw: &str) -> String {
    raw.split(|ch: char| ch.is_whitespace() || ch == '-' || ch == '_')
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Clamp a custom angle into `0..=360`.
pub fn clamp_angle(value: i64) -> u16 {
    // The clamp guarantees the cast is lossless.
    value.clamp(0, i64::from(MAX_ANGLE_DEGREES)) as u16
}

/// Mode parameters of the gradient being edited.
///
/// Fields that do not apply to the current [`GradientKind`] are kept so
/// switching kinds back and forth restores earlier choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "GradientConfigFields")]
pub struct GradientConfig {
    kind: GradientKind,
    repeating: bool,
    direction: LinearDirection,
    angle_degrees: u16,
    shape: RadialShape,
    position: GradientPosition,
}

/// Serialized shape of [`GradientConfig`]; the angle is clamped on the way
/// in.
#[derive(Deserialize)]
struct GradientConfigFields {
    kind: GradientKind,
    repeating: bool,
    direction: LinearDirection,
    angle_degrees: i64,
    shape: RadialShape,
    position: GradientPosition,
}

impl From<GradientConfigFields> for GradientConfig {
    fn from(fields: GradientConfigFields) -> Self {
        Self {
            kind: fields.kind,
            repeating: fields.repeating,
            direction: fields.direction,
            angle_degrees: clamp_angle(fields.angle_degrees),
            shape: fields.shape,
            position: fields.position,
        }
    }
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            kind: GradientKind::Linear,
            repeating: false,
            direction: LinearDirection::ToRight,
            angle_degrees: DEFAULT_ANGLE_DEGREES,
            shape: RadialShape::Circle,
            position: GradientPosition::Center,
        }
    }
}

impl GradientConfig {
    pub fn linear(direction: LinearDirection) -> Self {
        Self {
            direction,
            ..Self::default()
        }
    }

    pub fn linear_angle(angle_degrees: i64) -> Self {
        Self {
            direction: LinearDirection::Custom,
            angle_degrees: clamp_angle(angle_degrees),
            ..Self::default()
        }
    }

    pub fn radial(shape: RadialShape, position: GradientPosition) -> Self {
        Self {
            kind: GradientKind::Radial,
            shape,
            position,
            ..Self::default()
        }
    }

    pub fn conic(position: GradientPosition) -> Self {
        Self {
            kind: GradientKind::Conic,
            position,
            ..Self::default()
        }
    }

    /// Builder-style toggle for repeating gradients.
    pub fn repeating(mut self, repeating: bool) -> Self {
        self.repeating = repeating;
        self
    }

    pub fn kind(&self) -> GradientKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: GradientKind) {
        self.kind = kind;
    }

    pub fn is_repeating(&self) -> bool {
        self.repeating
    }

    pub fn set_repeating(&mut self, repeating: bool) {
        self.repeating = repeating;
    }

    pub fn direction(&self) -> LinearDirection {
        self.direction
    }

    pub fn set_direction(&mut self, direction: LinearDirection) {
        self.direction = direction;
    }

    pub fn angle_degrees(&self) -> u16 {
        self.angle_degrees
    }

    /// Store a custom angle, clamped into `0..=360`, and return it.
    pub fn set_angle_degrees(&mut self, value: i64) -> u16 {
        self.angle_degrees = clamp_angle(value);
        self.angle_degrees
    }

    pub fn shape(&self) -> RadialShape {
        self.shape
    }

    pub fn set_shape(&mut self, shape: RadialShape) {
        self.shape = shape;
    }

    pub fn position(&self) -> GradientPosition {
        self.position
    }

    pub fn set_position(&mut self, position: GradientPosition) {
        self.position = position;
    }

    /// Return whether the custom angle is in effect for the current kind.
    pub fn uses_angle(&self) -> bool {
        self.kind == GradientKind::Linear
            && self.direction == LinearDirection::Custom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_keyword_variants_when_parsed_then_normalized_match_is_found() {
        assert_eq!("to right".parse(), Ok(LinearDirection::ToRight));
        assert_eq!("To-Bottom-Left".parse(), Ok(LinearDirection::ToBottomLeft));
        assert_eq!(" top   right ".parse(), Ok(GradientPosition::TopRight));
        assert_eq!("RADIAL".parse(), Ok(GradientKind::Radial));
        assert_eq!("ellipse".parse(), Ok(RadialShape::Ellipse));
    }

    #[test]
    fn given_unknown_keyword_when_parsed_then_reports_field() {
        let err = "diagonal".parse::<LinearDirection>().unwrap_err();

        assert_eq!(
            err,
            GradientError::InvalidKeyword {
                field: "direction",
                value: String::from("diagonal"),
            }
        );
    }

    #[test]
    fn given_every_keyword_when_displayed_then_parses_back() {
        for direction in LinearDirection::ALL {
            assert_eq!(direction.to_string().parse(), Ok(direction));
        }
        for position in GradientPosition::ALL {
            assert_eq!(position.to_string().parse(), Ok(position));
        }
    }

    #[test]
    fn given_out_of_range_angle_when_set_then_value_is_clamped() {
        let mut config = GradientConfig::default();

        assert_eq!(config.set_angle_degrees(-10), 0);
        assert_eq!(config.set_angle_degrees(720), 360);
        assert_eq!(config.set_angle_degrees(45), 45);
        assert_eq!(config.angle_degrees(), 45);
    }

    #[test]
    fn given_default_config_when_inspected_then_matches_session_start() {
        let config = GradientConfig::default();

        assert_eq!(config.kind(), GradientKind::Linear);
        assert_eq!(config.direction(), LinearDirection::ToRight);
        assert_eq!(config.angle_degrees(), 90);
        assert_eq!(config.shape(), RadialShape::Circle);
        assert_eq!(config.position(), GradientPosition::Center);
        assert!(!config.is_repeating());
        assert!(!config.uses_angle());
    }

    #[test]
    fn given_config_when_serialized_then_css_keywords_are_used() {
        let config =
            GradientConfig::radial(RadialShape::Ellipse, GradientPosition::TopLeft)
                .repeating(true);

        let value = serde_json::to_value(&config).expect("config serializes");

        assert_eq!(value["kind"], "radial");
        assert_eq!(value["position"], "top left");
        assert_eq!(value["direction"], "to right");
        assert_eq!(value["repeating"], true);
    }

    #[test]
    fn given_out_of_range_angle_when_deserialized_then_angle_is_clamped() {
        let value = serde_json::json!({
            "kind": "linear",
            "repeating": false,
            "direction": "custom",
            "angle_degrees": 720,
            "shape": "circle",
            "position": "center"
        });

        let config: GradientConfig =
            serde_json::from_value(value).expect("config deserializes");

        assert_eq!(config.angle_degrees(), MAX_ANGLE_DEGREES);
        assert!(config.uses_angle());
    }

    #[test]
    fn given_serialized_config_when_read_back_then_values_are_kept() {
        let config = GradientConfig::linear_angle(-30).repeating(true);

        let value = serde_json::to_value(&config).expect("config serializes");
        let restored: GradientConfig =
            serde_json::from_value(value).expect("config deserializes");

        assert_eq!(restored, config);
        assert_eq!(restored.angle_degrees(), 0);
    }
}
