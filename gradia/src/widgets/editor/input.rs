use std::path::PathBuf;

use gradia_core::{PresetRef, StopId, is_valid_hex_color};

use super::command::EditorCommand;
use crate::config::is_css_identifier;
use crate::errors::StudioError;

/// Parse one line of editor input.
///
/// Blank lines and `#` comments yield `Ok(None)`.
pub(crate) fn parse_command(
    line: &str,
) -> Result<Option<EditorCommand>, StudioError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "add" => EditorCommand::AddStop,
        "rm" | "remove" => EditorCommand::RemoveStop(parse_id(rest)?),
        "color" => {
            let (id, color) = split_id(rest)?;
            if !is_valid_hex_color(color) {
                return Err(StudioError::command(format!(
                    "expected a #rrggbb color, got {color:?}"
                )));
            }
            EditorCommand::SetColor {
                id,
                color: color.to_string(),
            }
        },
        "pos" | "position" => {
            let (id, raw) = split_id(rest)?;
            EditorCommand::SetStopPosition {
                id,
                raw: raw.to_string(),
            }
        },
        "kind" | "type" => EditorCommand::SetKind(rest.parse()?),
        "dir" | "direction" => EditorCommand::SetDirection(rest.parse()?),
        "angle" => {
            let angle = gradia_core::parse_position_strict(rest)?;
            EditorCommand::SetAngle(angle)
        },
        "shape" => EditorCommand::SetShape(rest.parse()?),
        "at" | "center" => EditorCommand::SetCenter(rest.parse()?),
        "repeat" | "repeating" => {
            EditorCommand::SetRepeating(parse_switch(rest)?)
        },
        "preset" => {
            require_argument(verb, rest)?;
            EditorCommand::ApplyPreset(PresetRef::parse(rest))
        },
        "presets" => EditorCommand::ListPresets,
        "class" => {
            if !rest.is_empty() && !is_css_identifier(rest) {
                return Err(StudioError::command(format!(
                    "invalid class name {rest:?}"
                )));
            }
            EditorCommand::SetClassName(rest.to_string())
        },
        "prefixes" => EditorCommand::SetVendorPrefixes(parse_switch(rest)?),
        "css" => EditorCommand::ShowCss,
        "scss" => EditorCommand::ShowScss,
        "copy" => EditorCommand::CopyCss,
        "export" => {
            let (format, dir) = match rest.split_once(char::is_whitespace) {
                Some((format, dir)) => {
                    (format, Some(PathBuf::from(dir.trim())))
                },
                None => (rest, None),
            };
            EditorCommand::Export {
                format: format.parse()?,
                dir,
            }
        },
        "show" | "ls" => EditorCommand::Show,
        "help" | "?" => EditorCommand::Help,
        "quit" | "exit" | "q" => EditorCommand::Quit,
        other => {
            return Err(StudioError::command(format!(
                "unknown command {other:?}, try `help`"
            )));
        },
    };

    Ok(Some(command))
}

fn require_argument(verb: &str, rest: &str) -> Result<(), StudioError> {
    if rest.is_empty() {
        return Err(StudioError::command(format!("`{verb}` needs an argument")));
    }
    Ok(())
}

fn parse_id(raw: &str) -> Result<StopId, StudioError> {
    raw.parse()
        .map_err(|_| StudioError::command(format!("invalid stop id {raw:?}")))
}

fn split_id(rest: &str) -> Result<(StopId, &str), StudioError> {
    let Some((id, value)) = rest.split_once(char::is_whitespace) else {
        return Err(StudioError::command("expected `<id> <value>`"));
    };
    Ok((parse_id(id)?, value.trim()))
}

fn parse_switch(raw: &str) -> Result<bool, StudioError> {
    match raw.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(StudioError::command(format!("expected on/off, got {raw:?}"))),
    }
}
