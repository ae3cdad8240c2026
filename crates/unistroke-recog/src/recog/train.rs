//! Template library construction
//!
//! This module provides functionality for building the template library
//! from raw strokes.

use std::path::Path;
use unistroke_core::Stroke;
use unistroke_transform::normalize;

use crate::error::{RecogError, RecogResult};

use super::types::{RecognizerOptions, Template};
use super::Recognizer;

impl Recognizer {
    /// Creates an empty recognizer
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::InvalidParameter`] (or a wrapped transform
    /// error) if `options` fail validation.
    pub fn new(options: RecognizerOptions) -> RecogResult<Self> {
        options.validate()?;
        Ok(Self {
            options,
            templates: Vec::new(),
        })
    }

    /// Creates a recognizer populated from the gesture files in `dir`
    ///
    /// A missing directory yields an empty recognizer; unreadable or
    /// degenerate files are skipped. Both are logged.
    pub fn with_template_dir(options: RecognizerOptions, dir: impl AsRef<Path>) -> RecogResult<Self> {
        let mut recog = Self::new(options)?;
        recog.import_templates(dir)?;
        Ok(recog)
    }

    /// Normalizes `stroke` and appends it as a template named `name`
    ///
    /// No deduplication: adding the same name twice keeps both templates.
    ///
    /// # Errors
    ///
    /// - [`RecogError::InvalidParameter`] if `name` is empty or contains a
    ///   path separator (it becomes part of an exported file name)
    /// - a degenerate-input error (see [`RecogError::is_degenerate_input`])
    ///   if the stroke cannot be normalized
    pub fn add_template(&mut self, name: impl Into<String>, stroke: &Stroke) -> RecogResult<()> {
        let name = name.into();
        validate_name(&name)?;

        let points = normalize(stroke, &self.options.normalize)?;
        tracing::debug!(name = %name, index = self.templates.len(), "added template");
        self.templates.push(Template {
            name,
            points,
            source: stroke.clone(),
        });
        Ok(())
    }

    /// Options in use
    pub fn options(&self) -> &RecognizerOptions {
        &self.options
    }

    /// Number of points every normalized stroke has
    pub fn num_points(&self) -> usize {
        self.options.normalize.num_points
    }

    /// Whether `stroke` passes the minimum-point gate applied before
    /// recognition (at least [`num_points`](Self::num_points) samples).
    ///
    /// The recognizer itself does not enforce this.
    pub fn has_enough_points(&self, stroke: &Stroke) -> bool {
        stroke.len() >= self.num_points()
    }

    /// Number of templates
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the library is empty
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// All templates in insertion order
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Distinct template names in order of first appearance
    pub fn template_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for t in &self.templates {
            if !names.contains(&t.name.as_str()) {
                names.push(&t.name);
            }
        }
        names
    }
}

fn validate_name(name: &str) -> RecogResult<()> {
    if name.is_empty() {
        return Err(RecogError::InvalidParameter(
            "template name cannot be empty".to_string(),
        ));
    }
    if name.contains(['/', '\\', '\0']) {
        return Err(RecogError::InvalidParameter(format!(
            "template name '{name}' contains a path separator"
        )));
    }
    Ok(())
}
