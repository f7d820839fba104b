use std::fmt;

use crate::errors::{GradientError, Result};
use crate::stop::ColorStop;
use crate::synth::swatch;

/// A stop as stored in the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetStop {
    pub color: &'static str,
    pub position: u8,
}

/// Named, immutable list of color stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub stops: &'static [PresetStop],
}

impl Preset {
    /// Owned copy of the preset's stops, ready to become a live model.
    pub fn color_stops(&self) -> Vec<ColorStop> {
        self.stops
            .iter()
            .map(|stop| ColorStop::new(stop.color, i64::from(stop.position)))
            .collect()
    }

    /// Left-to-right swatch used to show the preset in a picker.
    pub fn preview(&self) -> String {
        swatch(&self.color_stops())
    }
}

/// Reference to a catalog entry by position or by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetRef {
    Index(usize),
    Name(String),
}

impl PresetRef {
    /// Read shell input: all-digit text is an index, anything else a name.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<usize>() {
            Ok(index) => PresetRef::Index(index),
            Err(_) => PresetRef::Name(trimmed.to_string()),
        }
    }
}

impl fmt::Display for PresetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresetRef::Index(index) => write!(f, "#{index}"),
            PresetRef::Name(name) => write!(f, "{name:?}"),
        }
    }
}

const fn stop(color: &'static str, position: u8) -> PresetStop {
    PresetStop { color, position }
}

static CATALOG: [Preset; 12] = [
    Preset {
        name: "Sunset",
        stops: &[stop("#f093fb", 0), stop("#f5576c", 100)],
    },
    Preset {
        name: "Ocean",
        stops: &[stop("#4facfe", 0), stop("#00f2fe", 100)],
    },
    Preset {
        name: "Forest",
        stops: &[stop("#11998e", 0), stop("#38ef7d", 100)],
    },
    Preset {
        name: "Purple",
        stops: &[stop("#667eea", 0), stop("#764ba2", 100)],
    },
    Preset {
        name: "Fire",
        stops: &[stop("#f12711", 0), stop("#f5af19", 100)],
    },
    Preset {
        name: "Night",
        stops: &[
            stop("#0f0c29", 0),
            stop("#302b63", 50),
            stop("#24243e", 100),
        ],
    },
    Preset {
        name: "Peach",
        stops: &[stop("#ffecd2", 0), stop("#fcb69f", 100)],
    },
    Preset {
        name: "Cool",
        stops: &[stop("#a1c4fd", 0), stop("#c2e9fb", 100)],
    },
    Preset {
        name: "Warm",
        stops: &[stop("#fa709a", 0), stop("#fee140", 100)],
    },
    Preset {
        name: "Mint",
        stops: &[stop("#84fab0", 0), stop("#8fd3f4", 100)],
    },
    Preset {
        name: "Berry",
        stops: &[stop("#a18cd1", 0), stop("#fbc2eb", 100)],
    },
    Preset {
        name: "Cosmic",
        stops: &[stop("#ff0844", 0), stop("#ffb199", 100)],
    },
];

/// Every preset in catalog order.
pub fn list_presets() -> &'static [Preset] {
    &CATALOG
}

/// Resolve a reference to its catalog index.
///
/// Names match ASCII case-insensitively.
///
/// # Errors
/// [`GradientError::InvalidPresetReference`] when nothing matches.
pub fn find_preset(reference: &PresetRef) -> Result<(usize, &'static Preset)> {
    let found = match reference {
        PresetRef::Index(index) => CATALOG.get(*index).map(|p| (*index, p)),
        PresetRef::Name(name) => CATALOG
            .iter()
            .enumerate()
            .find(|(_, preset)| preset.name.eq_ignore_ascii_case(name)),
    };

    found.ok_or_else(|| GradientError::InvalidPresetReference {
        reference: reference.to_string(),
    })
}

/// Return a fresh copy of the referenced preset's stops.
///
/// # Errors
/// [`GradientError::InvalidPresetReference`] when nothing matches.
pub fn apply_preset(reference: &PresetRef) -> Result<Vec<ColorStop>> {
    find_preset(reference).map(|(_, preset)| preset.color_stops())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_catalog_when_listed_then_every_preset_is_usable() {
        let presets = list_presets();

        assert_eq!(presets.len(), 12);
        assert_eq!(presets[0].name, "Sunset");
        for preset in presets {
            assert!(preset.stops.len() >= 2, "{} too short", preset.name);
        }
    }

    #[test]
    fn given_name_when_applied_then_stops_equal_catalog_values() {
        let stops = apply_preset(&PresetRef::Name(String::from("night")))
            .expect("night exists");

        assert_eq!(
            stops,
            vec![
                ColorStop::new("#0f0c29", 0),
                ColorStop::new("#302b63", 50),
                ColorStop::new("#24243e", 100),
            ]
        );
    }

    #[test]
    fn given_applied_copy_when_mutated_then_catalog_is_untouched() {
        let mut stops =
            apply_preset(&PresetRef::Index(1)).expect("index 1 exists");

        stops[0].color = String::from("#000000");
        stops[0].position = 42;

        assert_eq!(list_presets()[1].stops[0], stop("#4facfe", 0));
        assert_eq!(
            apply_preset(&PresetRef::Index(1)).expect("index 1 exists")[0],
            ColorStop::new("#4facfe", 0)
        );
    }

    #[test]
    fn given_unknown_reference_when_applied_then_reports_invalid_reference() {
        assert_eq!(
            apply_preset(&PresetRef::Index(12)),
            Err(GradientError::InvalidPresetReference {
                reference: String::from("#12"),
            })
        );
        assert!(matches!(
            apply_preset(&PresetRef::Name(String::from("Aurora"))),
            Err(GradientError::InvalidPresetReference { .. })
        ));
    }

    #[test]
    fn given_shell_text_when_parsed_then_digits_become_index() {
        assert_eq!(PresetRef::parse(" 3 "), PresetRef::Index(3));
        assert_eq!(
            PresetRef::parse("Ocean"),
            PresetRef::Name(String::from("Ocean"))
        );
    }

    #[test]
    fn given_preset_when_previewed_then_uses_left_to_right_swatch() {
        let (_, preset) = find_preset(&PresetRef::Name(String::from("Fire")))
            .expect("fire exists");

        assert_eq!(
            preset.preview(),
            "linear-gradient(to right, #f12711 0%, #f5af19 100%)"
        );
    }
}
