//! Session configuration

use pixedit_history::DEFAULT_HISTORY_CAPACITY;
use pixedit_transform::Interpolation;
use tracing::warn;

/// Environment variable overriding [`EditorConfig::history_capacity`]
pub const ENV_HISTORY_CAPACITY: &str = "PIXEDIT_HISTORY_CAPACITY";
/// Environment variable overriding [`EditorConfig::interpolation`]
/// (`bilinear` or `nearest`)
pub const ENV_INTERPOLATION: &str = "PIXEDIT_INTERPOLATION";

/// Options for an editing session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorConfig {
    /// Maximum number of undo snapshots, at least 1
    pub history_capacity: usize,
    /// Resampling used by [`crate::Editor::transform`]
    pub interpolation: Interpolation,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            interpolation: Interpolation::default(),
        }
    }
}

impl EditorConfig {
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Build a configuration from the process environment.
    ///
    /// Unset variables keep their defaults; invalid values are logged and
    /// ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_HISTORY_CAPACITY) {
            match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => config.history_capacity = n,
                _ => warn!(
                    key = ENV_HISTORY_CAPACITY,
                    value = %raw,
                    "ignoring invalid history capacity"
                ),
            }
        }

        if let Some(raw) = lookup(ENV_INTERPOLATION) {
            match Interpolation::from_name(&raw) {
                Some(interp) => config.interpolation = interp,
                None => warn!(
                    key = ENV_INTERPOLATION,
                    value = %raw,
                    "ignoring unknown interpolation"
                ),
            }
        }

        config
    }
}
