//! Editing session
//!
//! An [`Editor`] holds the untouched original, the working image and the
//! undo history for one loaded photo. Color adjustments are always
//! re-derived from the original; filters, transforms and crops replace the
//! working image. Nothing is recorded in the history until [`Editor::commit`].

use crate::{EditorConfig, EditorError, EditorResult};
use pixedit_color::{ColorAdjustments, apply_adjustments};
use pixedit_core::PixelBuffer;
use pixedit_filter::{FILTERS, FilterDescriptor, FilterKind};
use pixedit_history::{HistoryManager, HistoryResult};
use pixedit_io::{ExportFormat, ImageSource};
use pixedit_transform::{CropArea, TransformState};
use std::fmt;
use tracing::{debug, info, instrument};

/// What the session last did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No image loaded
    #[default]
    Empty,
    /// Image loaded or reset to the original
    Loaded,
    /// Color adjustments applied
    Adjusting,
    /// A filter applied
    Filtered,
    /// A view transform applied
    Transformed,
    /// Cropped
    Cropped,
    /// The working image matches a history entry
    Committed,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Empty => "empty",
            Self::Loaded => "loaded",
            Self::Adjusting => "adjusting",
            Self::Filtered => "filtered",
            Self::Transformed => "transformed",
            Self::Cropped => "cropped",
            Self::Committed => "committed",
        };
        f.write_str(s)
    }
}

/// A single-image editing session
#[derive(Debug)]
pub struct Editor {
    original: Option<PixelBuffer>,
    current: Option<PixelBuffer>,
    history: HistoryManager,
    config: EditorConfig,
    state: SessionState,
}

impl Default for Editor {
    fn default() -> Self {
        Self {
            original: None,
            current: None,
            history: HistoryManager::default(),
            config: EditorConfig::default(),
            state: SessionState::Empty,
        }
    }
}

impl Editor {
    /// Create an empty session.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::History`] if the history capacity is 0.
    pub fn new(config: EditorConfig) -> EditorResult<Self> {
        Ok(Self {
            history: HistoryManager::new(config.history_capacity)?,
            config,
            ..Self::default()
        })
    }

    /// Create an empty session configured from the environment.
    pub fn from_env() -> EditorResult<Self> {
        Self::new(EditorConfig::from_env())
    }

    fn working(&self) -> EditorResult<&PixelBuffer> {
        self.current.as_ref().ok_or(EditorError::NoImage)
    }

    fn replace_current(&mut self, pix: PixelBuffer, state: SessionState) {
        debug!(%state, width = pix.width(), height = pix.height(), "working image updated");
        self.current = Some(pix);
        self.state = state;
    }

    /// Load a new image, replacing any previous one.
    ///
    /// The loaded image becomes both the original and the working image and
    /// is recorded as the first history entry. On failure the session is
    /// left exactly as it was.
    #[instrument(skip(self), err)]
    pub fn load(&mut self, source: &ImageSource) -> EditorResult<(u32, u32)> {
        let pix = pixedit_io::load_image(source)?;

        let mut history = HistoryManager::new(self.config.history_capacity)?;
        history.commit(&pix)?;

        let dims = pix.dimensions();
        info!(width = dims.0, height = dims.1, "image loaded");
        self.history = history;
        self.original = Some(pix.clone());
        self.current = Some(pix);
        self.state = SessionState::Loaded;
        Ok(dims)
    }

    /// Discard every uncommitted edit and return to the loaded image.
    ///
    /// The history is left untouched.
    #[instrument(skip(self), err)]
    pub fn reset_to_original(&mut self) -> EditorResult<()> {
        let original = self.original.clone().ok_or(EditorError::NoImage)?;
        self.replace_current(original, SessionState::Loaded);
        Ok(())
    }

    /// Recompute the working image as `adj` applied to the original.
    ///
    /// Earlier filters, transforms and crops on the working image are
    /// replaced by the result.
    #[instrument(skip(self), err)]
    pub fn adjust(&mut self, adj: &ColorAdjustments) -> EditorResult<()> {
        let original = self.original.as_ref().ok_or(EditorError::NoImage)?;
        let pix = apply_adjustments(original, adj)?;
        self.replace_current(pix, SessionState::Adjusting);
        Ok(())
    }

    /// Apply a filter to the working image.
    #[instrument(skip(self), err)]
    pub fn apply_filter(&mut self, kind: FilterKind) -> EditorResult<()> {
        let pix = pixedit_filter::apply_filter(self.working()?, kind)?;
        self.replace_current(pix, SessionState::Filtered);
        Ok(())
    }

    /// Apply a filter looked up by its registry name.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Filter`] for an unknown name.
    pub fn apply_named_filter(&mut self, name: &str, intensity: Option<f32>) -> EditorResult<()> {
        self.working()?;
        let kind = FilterKind::from_name(name, intensity)?;
        self.apply_filter(kind)
    }

    /// Apply a pan / zoom / rotate / flip to the working image.
    ///
    /// Uses the configured interpolation and keeps the canvas size.
    #[instrument(skip(self), err)]
    pub fn transform(&mut self, state: &TransformState) -> EditorResult<()> {
        let pix =
            pixedit_transform::transform_with(self.working()?, state, self.config.interpolation)?;
        self.replace_current(pix, SessionState::Transformed);
        Ok(())
    }

    /// Crop the working image.
    #[instrument(skip(self), err)]
    pub fn crop(&mut self, area: &CropArea) -> EditorResult<()> {
        let pix = pixedit_transform::crop(self.working()?, area)?;
        self.replace_current(pix, SessionState::Cropped);
        Ok(())
    }

    /// Record the working image in the history and return its index.
    #[instrument(skip(self), err)]
    pub fn commit(&mut self) -> EditorResult<usize> {
        let pix = self.working()?.clone();
        let index = self.history.commit(&pix)?;
        self.state = SessionState::Committed;
        Ok(index)
    }

    fn restore(
        &mut self,
        step: impl FnOnce(&mut HistoryManager) -> HistoryResult<Option<PixelBuffer>>,
    ) -> EditorResult<bool> {
        self.working()?;
        match step(&mut self.history)? {
            Some(pix) => {
                self.replace_current(pix, SessionState::Committed);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Restore the previous history entry.
    ///
    /// Returns `false` and changes nothing when there is nothing to undo.
    #[instrument(skip(self), err)]
    pub fn undo(&mut self) -> EditorResult<bool> {
        self.restore(HistoryManager::undo)
    }

    /// Restore the next history entry.
    ///
    /// Returns `false` and changes nothing when there is nothing to redo.
    #[instrument(skip(self), err)]
    pub fn redo(&mut self) -> EditorResult<bool> {
        self.restore(HistoryManager::redo)
    }

    /// Encode the working image.
    ///
    /// `quality` is in [0, 1] and only affects JPEG.
    #[instrument(skip(self), err)]
    pub fn export(&self, format: ExportFormat, quality: f32) -> EditorResult<Vec<u8>> {
        Ok(pixedit_io::export_image(self.working()?, format, quality)?)
    }

    /// Size of the working image
    pub fn dimensions(&self) -> EditorResult<(u32, u32)> {
        Ok(self.working()?.dimensions())
    }

    /// The working image, if an image is loaded
    pub fn current(&self) -> Option<&PixelBuffer> {
        self.current.as_ref()
    }

    /// The image as loaded, if any
    pub fn original(&self) -> Option<&PixelBuffer> {
        self.original.as_ref()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The available filters, in canonical order
    pub fn filters(&self) -> &'static [FilterDescriptor] {
        &FILTERS
    }
}
