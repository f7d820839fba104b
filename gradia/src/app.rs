use std::io::{self, IsTerminal, Write};

use gradia_core::{
    ExportOptions, GradientConfig, GradientSession, LinearDirection, MIN_STOPS,
    PresetRef, default_stops,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cli::{Cli, CliCommand, GradientArgs};
use crate::config::{
    ConfigLoadStatus, StudioConfig, is_css_identifier, load_config,
};
use crate::errors::StudioError;
use crate::widgets::editor::EditorWidget;
use crate::widgets::editor::state::EditorState;
use crate::widgets::editor::view::presets_view;
use crate::{repl, services};

/// Widgets owned by the shell.
pub(crate) struct Widgets {
    pub(crate) editor: EditorWidget,
}

/// Root shell state.
pub(crate) struct App {
    pub(crate) widgets: Widgets,
    color: bool,
}

impl App {
    pub(crate) fn new(editor: EditorWidget, color: bool) -> Self {
        Self {
            widgets: Widgets { editor },
            color,
        }
    }

    /// Whether views may use ANSI colors.
    pub(crate) fn color(&self) -> bool {
        self.color
    }
}

/// Run the command selected on the command line.
pub(crate) fn run(cli: Cli) -> Result<(), StudioError> {
    let (config, status) = load_config(cli.config.as_deref())?.into_parts();
    match &status {
        ConfigLoadStatus::Loaded => log::debug!("config loaded"),
        ConfigLoadStatus::Missing => log::debug!("no config file"),
        ConfigLoadStatus::Invalid(message) => {
            log::warn!("config ignored: {message}");
        },
    }

    let command = cli.command.unwrap_or(CliCommand::Edit);
    let session = build_session(&cli.gradient, &config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        CliCommand::Render => writeln!(out, "{}", session.gradient())?,
        CliCommand::Css => writeln!(out, "{}", session.css_block())?,
        CliCommand::Scss => write!(out, "{}", session.scss_block())?,
        CliCommand::Presets => writeln!(out, "{}", presets_view(None))?,
        CliCommand::Export {
            format,
            out_dir,
            no_timestamp,
        } => {
            let generated_at = (config.timestamp() && !no_timestamp)
                .then(chrono::Utc::now);
            let (file_name, contents) =
                session.export_document(format, generated_at);
            let dir =
                out_dir.unwrap_or_else(|| config.export_dir().to_path_buf());
            let path = services::write_export(&dir, &file_name, &contents)?;
            writeln!(out, "{}", path.display())?;
        },
        CliCommand::Edit => {
            let rng = match cli.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let state = EditorState::new(
                session,
                rng,
                config.export_dir().to_path_buf(),
                config.timestamp(),
            );
            let color = io::stdout().is_terminal();
            let mut app = App::new(EditorWidget::new(state), color);

            let stdin = io::stdin();
            let prompt = stdin.is_terminal();
            repl::run(&mut app, stdin.lock(), &mut out, prompt)?;
        },
    }

    out.flush()?;
    Ok(())
}

/// Build the initial session from command-line options layered over the
/// config file.
pub(crate) fn build_session(
    args: &GradientArgs,
    config: &StudioConfig,
) -> Result<GradientSession, StudioError> {
    if !args.stops.is_empty() && args.stops.len() < MIN_STOPS {
        return Err(StudioError::command(format!(
            "at least {MIN_STOPS} --stop values are required"
        )));
    }

    let stops = if args.stops.is_empty() {
        default_stops()
    } else {
        args.stops.clone()
    };

    let mut gradient = GradientConfig::default();
    if let Some(kind) = args.kind {
        gradient.set_kind(kind);
    }
    if let Some(direction) = args.direction {
        gradient.set_direction(direction);
    }
    if let Some(angle) = args.angle {
        if args.direction.is_none() {
            gradient.set_direction(LinearDirection::Custom);
        }
        gradient.set_angle_degrees(angle);
    }
    if let Some(shape) = args.shape {
        gradient.set_shape(shape);
    }
    if let Some(position) = args.position {
        gradient.set_position(position);
    }
    gradient.set_repeating(args.repeating);

    let mut session = GradientSession::new(stops, gradient);
    if let Some(preset) = &args.preset {
        session.apply_preset(&PresetRef::parse(preset))?;
    }

    let class_name = match args.class_name.as_deref().map(str::trim) {
        Some("") => String::new(),
        Some(name) if !is_css_identifier(name) => {
            return Err(StudioError::command(format!(
                "invalid class name {name:?}"
            )));
        },
        Some(name) => name.to_string(),
        None => config.class_name().to_string(),
    };
    let prefixes = if args.no_prefixes {
        false
    } else {
        args.prefixes || config.vendor_prefixes()
    };
    *session.export_options_mut() = ExportOptions::new(class_name, prefixes);

    Ok(session)
}
