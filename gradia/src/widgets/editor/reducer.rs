use gradia_core::{ExportFormat, GradientError, MIN_STOPS};

use super::command::EditorCommand;
use super::event::{EditorEffect, ExportRequest};
use super::state::EditorState;
use super::view::{help_view, presets_view};
use crate::notify::Notification;

/// Reduce an editor command into state updates and shell effects.
pub(crate) fn reduce(
    state: &mut EditorState,
    command: EditorCommand,
) -> Vec<EditorEffect> {
    match command {
        EditorCommand::AddStop => {
            let id = state.add_stop();
            log::debug!("added stop {id}");
            vec![EditorEffect::Redraw]
        },
        EditorCommand::RemoveStop(id) => {
            match state.session_mut().remove_stop(id) {
                Ok(_) => vec![EditorEffect::Redraw],
                Err(GradientError::InvalidRemoval { .. }) => {
                    log::debug!("refused to remove stop {id}");
                    vec![notify_error(format!(
                        "Minimum {MIN_STOPS} color stops required"
                    ))]
                },
                Err(err) => rejected(err),
            }
        },
        EditorCommand::SetColor { id, color } => {
            match state.session_mut().set_color(id, color) {
                Ok(()) => vec![EditorEffect::Redraw],
                Err(err) => rejected(err),
            }
        },
        EditorCommand::SetStopPosition { id, raw } => {
            match state.session_mut().set_position(id, &raw) {
                Ok(_) => vec![EditorEffect::Redraw],
                Err(err) => rejected(err),
            }
        },
        EditorCommand::SetKind(kind) => {
            state.session_mut().config_mut().set_kind(kind);
            vec![EditorEffect::Redraw]
        },
        EditorCommand::SetDirection(direction) => {
            state.session_mut().config_mut().set_direction(direction);
            vec![EditorEffect::Redraw]
        },
        EditorCommand::SetAngle(value) => {
            let config = state.session_mut().config_mut();
            let applied = config.set_angle_degrees(value);
            if i64::from(applied) != value {
                log::debug!("angle {value} clamped to {applied}");
            }
            vec![EditorEffect::Redraw]
        },
        EditorCommand::SetShape(shape) => {
            state.session_mut().config_mut().set_shape(shape);
            vec![EditorEffect::Redraw]
        },
        EditorCommand::SetCenter(position) => {
            state.session_mut().config_mut().set_position(position);
            vec![EditorEffect::Redraw]
        },
        EditorCommand::SetRepeating(repeating) => {
            state.session_mut().config_mut().set_repeating(repeating);
            vec![EditorEffect::Redraw]
        },
        EditorCommand::ApplyPreset(reference) => {
            match state.session_mut().apply_preset(&reference) {
                Ok(name) => vec![
                    EditorEffect::Redraw,
                    EditorEffect::Notify(Notification::success(format!(
                        "Applied \"{name}\" preset"
                    ))),
                ],
                Err(err) => rejected(err),
            }
        },
        EditorCommand::ListPresets => vec![EditorEffect::Print(presets_view(
            state.session().active_preset(),
        ))],
        EditorCommand::SetClassName(class_name) => {
            state.session_mut().export_options_mut().class_name = class_name;
            vec![EditorEffect::Redraw]
        },
        EditorCommand::SetVendorPrefixes(enabled) => {
            state
                .session_mut()
                .export_options_mut()
                .include_vendor_prefixes = enabled;
            vec![EditorEffect::Redraw]
        },
        EditorCommand::ShowCss => {
            vec![EditorEffect::Print(state.session().css_block())]
        },
        EditorCommand::ShowScss => {
            vec![EditorEffect::Print(state.session().scss_block())]
        },
        EditorCommand::CopyCss => {
            vec![EditorEffect::Copy(state.session().css_block())]
        },
        EditorCommand::Export { format, dir } => {
            let (file_name, contents) = state
                .session()
                .export_document(format, state.export_timestamp());
            let dir = dir.unwrap_or_else(|| state.export_dir().to_path_buf());
            vec![EditorEffect::Export(ExportRequest {
                dir,
                file_name,
                contents,
                label: export_label(format),
            })]
        },
        EditorCommand::Show => vec![EditorEffect::Redraw],
        EditorCommand::Help => {
            vec![EditorEffect::Print(help_view().to_string())]
        },
        EditorCommand::Quit => vec![EditorEffect::Quit],
    }
}

fn export_label(format: ExportFormat) -> &'static str {
    match format {
        ExportFormat::Css => "CSS",
        ExportFormat::Scss => "SCSS",
    }
}

fn notify_error(message: String) -> EditorEffect {
    EditorEffect::Notify(Notification::error(message))
}

fn rejected(err: GradientError) -> Vec<EditorEffect> {
    log::debug!("editor command rejected: {err}");
    vec![notify_error(err.to_string())]
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use gradia_core::{
        GradientKind, GradientSession, LinearDirection, PresetRef, StopId,
    };
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::notify::NotificationLevel;

    fn state() -> EditorState {
        EditorState::new(
            GradientSession::default(),
            StdRng::seed_from_u64(3),
            PathBuf::from("out"),
            false,
        )
    }

    fn id(raw: &str) -> StopId {
        raw.parse().expect("valid id")
    }

    fn notification(effects: &[EditorEffect]) -> &Notification {
        effects
            .iter()
            .find_map(|effect| match effect {
                EditorEffect::Notify(notice) => Some(notice),
                _ => None,
            })
            .expect("a notification effect")
    }

    #[test]
    fn given_two_stops_when_removing_then_error_notice_and_stops_kept() {
        let mut state = state();

        let effects = reduce(&mut state, EditorCommand::RemoveStop(id("0")));

        let notice = notification(&effects);
        assert_eq!(notice.level(), NotificationLevel::Error);
        assert_eq!(notice.message(), "Minimum 2 color stops required");
        assert_eq!(state.session().stop_list().len(), 2);
    }

    #[test]
    fn given_added_stop_when_removed_then_redraws() {
        let mut state = state();
        assert_eq!(reduce(&mut state, EditorCommand::AddStop), vec![
            EditorEffect::Redraw
        ]);
        assert_eq!(state.session().stop_list().len(), 3);

        let effects = reduce(&mut state, EditorCommand::RemoveStop(id("2")));

        assert_eq!(effects, vec![EditorEffect::Redraw]);
        assert_eq!(state.session().stop_list().len(), 2);
    }

    #[test]
    fn given_unknown_stop_when_recoloring_then_error_is_reported() {
        let mut state = state();

        let effects = reduce(&mut state, EditorCommand::SetColor {
            id: id("9"),
            color: String::from("#000000"),
        });

        assert_eq!(notification(&effects).level(), NotificationLevel::Error);
    }

    #[test]
    fn given_garbage_position_when_set_then_stop_moves_to_zero() {
        let mut state = state();

        reduce(&mut state, EditorCommand::SetStopPosition {
            id: id("1"),
            raw: String::from("abc"),
        });

        let stop = state.session().stop_list().get(id("1")).expect("stop");
        assert_eq!(stop.position, 0);
    }

    #[test]
    fn given_preset_name_when_applied_then_success_notice_names_it() {
        let mut state = state();

        let effects = reduce(
            &mut state,
            EditorCommand::ApplyPreset(PresetRef::parse("sunset")),
        );

        assert_eq!(effects[0], EditorEffect::Redraw);
        assert_eq!(
            notification(&effects).message(),
            "Applied \"Sunset\" preset"
        );
        assert_eq!(state.session().active_preset(), Some(0));
    }

    #[test]
    fn given_unknown_preset_when_applied_then_stops_unchanged() {
        let mut state = state();
        let before = state.session().stops();

        let effects = reduce(
            &mut state,
            EditorCommand::ApplyPreset(PresetRef::Index(12)),
        );

        assert_eq!(notification(&effects).level(), NotificationLevel::Error);
        assert_eq!(state.session().stops(), before);
    }

    #[test]
    fn given_mode_commands_when_reduced_then_gradient_follows() {
        let mut state = state();

        reduce(&mut state, EditorCommand::SetDirection(LinearDirection::Custom));
        reduce(&mut state, EditorCommand::SetAngle(720));
        assert_eq!(
            state.session().gradient(),
            "linear-gradient(360deg, #667eea 0%, #764ba2 100%)"
        );

        reduce(&mut state, EditorCommand::SetKind(GradientKind::Conic));
        reduce(&mut state, EditorCommand::SetRepeating(true));
        assert_eq!(
            state.session().gradient(),
            "repeating-conic-gradient(from 0deg at center, #667eea 0%, \
             #764ba2 100%)"
        );
    }

    #[test]
    fn given_export_without_dir_when_reduced_then_uses_state_directory() {
        let mut state = state();
        reduce(&mut state, EditorCommand::SetClassName(String::from("hero")));

        let effects = reduce(&mut state, EditorCommand::Export {
            format: ExportFormat::Scss,
            dir: None,
        });

        let [EditorEffect::Export(request)] = effects.as_slice() else {
            panic!("expected a single export effect, got {effects:?}");
        };
        assert_eq!(request.dir, PathBuf::from("out"));
        assert_eq!(request.file_name, "_hero.scss");
        assert_eq!(request.label, "SCSS");
        assert!(request.contents.contains(".hero {"));
        assert!(
            request
                .contents
                .starts_with("// Generated by CSS Gradient Generator\n\n")
        );
    }

    #[test]
    fn given_copy_when_reduced_then_css_block_goes_to_clipboard() {
        let mut state = state();
        reduce(&mut state, EditorCommand::SetVendorPrefixes(true));

        let effects = reduce(&mut state, EditorCommand::CopyCss);

        assert_eq!(effects, vec![EditorEffect::Copy(
            state.session().css_block()
        )]);
        let [EditorEffect::Copy(text)] = effects.as_slice() else {
            panic!("expected a copy effect, got {effects:?}");
        };
        assert!(text.starts_with(".gradient-bg {\n  background: -webkit-"));
    }

    #[test]
    fn given_show_css_when_reduced_then_prints_block() {
        let mut state = state();

        let effects = reduce(&mut state, EditorCommand::ShowCss);

        assert_eq!(effects, vec![EditorEffect::Print(
            state.session().css_block()
        )]);
        assert_eq!(reduce(&mut state, EditorCommand::Quit), vec![
            EditorEffect::Quit
        ]);
    }
}
