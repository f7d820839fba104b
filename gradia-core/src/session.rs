use chrono::{DateTime, Utc};
use rand::Rng;

use crate::config::GradientConfig;
use crate::errors::Result;
use crate::export::{
    ExportFormat, ExportOptions, build_css_block, build_scss_block,
    export_document,
};
use crate::preset::{PresetRef, find_preset};
use crate::stop::{ColorStop, StopId, StopList};
use crate::synth::synthesize;

/// Stops every new session starts with.
pub fn default_stops() -> Vec<ColorStop> {
    vec![ColorStop::new("#667eea", 0), ColorStop::new("#764ba2", 100)]
}

/// Editing context owning the live stops, mode parameters and export
/// options of one editor.
#[derive(Debug, Clone)]
pub struct GradientSession {
    stops: StopList,
    config: GradientConfig,
    export: ExportOptions,
    active_preset: Option<usize>,
}

impl Default for GradientSession {
    fn default() -> Self {
        Self::new(default_stops(), GradientConfig::default())
    }
}

impl GradientSession {
    pub fn new(stops: Vec<ColorStop>, config: GradientConfig) -> Self {
        Self {
            stops: StopList::from_stops(stops),
            config,
            export: ExportOptions::default(),
            active_preset: None,
        }
    }

    pub fn stop_list(&self) -> &StopList {
        &self.stops
    }

    /// Owned copy of the stops in backing order.
    pub fn stops(&self) -> Vec<ColorStop> {
        self.stops.stops()
    }

    pub fn config(&self) -> &GradientConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut GradientConfig {
        &mut self.config
    }

    pub fn export_options(&self) -> &ExportOptions {
        &self.export
    }

    pub fn export_options_mut(&mut self) -> &mut ExportOptions {
        &mut self.export
    }

    /// Catalog index of the preset the stops were last replaced with, until
    /// the stops are edited.
    pub fn active_preset(&self) -> Option<usize> {
        self.active_preset
    }

    pub fn add_stop<R: Rng + ?Sized>(&mut self, rng: &mut R) -> StopId {
        self.active_preset = None;
        self.stops.add_stop(rng)
    }

    /// # Errors
    /// See [`StopList::remove_stop`].
    pub fn remove_stop(&mut self, id: StopId) -> Result<ColorStop> {
        let removed = self.stops.remove_stop(id)?;
        self.active_preset = None;
        Ok(removed)
    }

    /// # Errors
    /// See [`StopList::set_color`].
    pub fn set_color(
        &mut self,
        id: StopId,
        color: impl Into<String>,
    ) -> Result<()> {
        self.stops.set_color(id, color)?;
        self.active_preset = None;
        Ok(())
    }

    /// # Errors
    /// See [`StopList::set_position`].
    pub fn set_position(&mut self, id: StopId, raw: &str) -> Result<u8> {
        let position = self.stops.set_position(id, raw)?;
        self.active_preset = None;
        Ok(position)
    }

    /// Replace the stops with a copy of a catalog preset.
    ///
    /// # Errors
    /// [`crate::GradientError::InvalidPresetReference`]; the session is
    /// unchanged.
    pub fn apply_preset(&mut self, reference: &PresetRef) -> Result<&'static str> {
        let (index, preset) = find_preset(reference)?;
        self.stops.replace(preset.color_stops());
        self.active_preset = Some(index);
        log::debug!("applied preset {}", preset.name);
        Ok(preset.name)
    }

    /// Current gradient function string.
    pub fn gradient(&self) -> String {
        synthesize(&self.stops.stops(), &self.config)
    }

    pub fn css_block(&self) -> String {
        build_css_block(&self.gradient(), &self.export)
    }

    pub fn scss_block(&self) -> String {
        build_scss_block(&self.stops.stops(), &self.gradient(), &self.export)
    }

    /// Full export file text together with its file name.
    pub fn export_document(
        &self,
        format: ExportFormat,
        generated_at: Option<DateTime<Utc>>,
    ) -> (String, String) {
        let contents = export_document(
            format,
            &self.stops.stops(),
            &self.gradient(),
            &self.export,
            generated_at,
        );
        (format.file_name(&self.export), contents)
    }
}
