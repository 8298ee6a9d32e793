//! Named filter registry
//!
//! The set of filters is fixed, so it is an enum rather than a table of
//! callbacks. [`FILTERS`] lists the canonical names in display order; those
//! names are stable lookup keys for persisted filter selections.

use crate::{
    FilterError, FilterResult, emboss, gaussian_blur, grayscale, invert, sepia, sharpen,
    sobel_edge,
};
use pixedit_core::PixelBuffer;
use std::fmt;
use tracing::debug;

/// Intensity used by `sharpen` when none is given
pub const DEFAULT_SHARPEN_INTENSITY: f32 = 1.0;
/// Radius used by `blur` when none is given
pub const DEFAULT_BLUR_RADIUS: f32 = 2.0;

/// A filter together with its parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterKind {
    Grayscale,
    Sepia,
    Invert,
    /// Gaussian blur with the given radius in pixels
    Blur(f32),
    /// Sharpen with the given intensity
    Sharpen(f32),
    /// Sobel edge magnitude
    Edge,
    Emboss,
}

/// Registry entry describing one filter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterDescriptor {
    /// Canonical name
    pub name: &'static str,
    /// Intensity used when the caller gives none; `None` if the filter
    /// takes no parameter
    pub default_intensity: Option<f32>,
}

/// All filters, in canonical order
pub const FILTERS: [FilterDescriptor; 7] = [
    FilterDescriptor {
        name: "grayscale",
        default_intensity: None,
    },
    FilterDescriptor {
        name: "sepia",
        default_intensity: None,
    },
    FilterDescriptor {
        name: "invert",
        default_intensity: None,
    },
    FilterDescriptor {
        name: "blur",
        default_intensity: Some(DEFAULT_BLUR_RADIUS),
    },
    FilterDescriptor {
        name: "sharpen",
        default_intensity: Some(DEFAULT_SHARPEN_INTENSITY),
    },
    FilterDescriptor {
        name: "edge",
        default_intensity: None,
    },
    FilterDescriptor {
        name: "emboss",
        default_intensity: None,
    },
];

impl FilterKind {
    /// Canonical registry name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Grayscale => "grayscale",
            Self::Sepia => "sepia",
            Self::Invert => "invert",
            Self::Blur(_) => "blur",
            Self::Sharpen(_) => "sharpen",
            Self::Edge => "edge",
            Self::Emboss => "emboss",
        }
    }

    /// Parameter of the filter, if it takes one.
    pub fn intensity(&self) -> Option<f32> {
        match self {
            Self::Blur(r) => Some(*r),
            Self::Sharpen(i) => Some(*i),
            _ => None,
        }
    }

    /// Look up a filter by canonical name.
    ///
    /// `intensity` is used by `blur` and `sharpen`, which fall back to
    /// their defaults when it is `None`; other filters ignore it.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::UnknownFilter`] if no filter has this name.
    pub fn from_name(name: &str, intensity: Option<f32>) -> FilterResult<Self> {
        Ok(match name {
            "grayscale" => Self::Grayscale,
            "sepia" => Self::Sepia,
            "invert" => Self::Invert,
            "blur" => Self::Blur(intensity.unwrap_or(DEFAULT_BLUR_RADIUS)),
            "sharpen" => Self::Sharpen(intensity.unwrap_or(DEFAULT_SHARPEN_INTENSITY)),
            "edge" => Self::Edge,
            "emboss" => Self::Emboss,
            other => return Err(FilterError::UnknownFilter(other.to_string())),
        })
    }

    /// Registry entry for this filter.
    pub fn descriptor(&self) -> &'static FilterDescriptor {
        let idx = match self {
            Self::Grayscale => 0,
            Self::Sepia => 1,
            Self::Invert => 2,
            Self::Blur(_) => 3,
            Self::Sharpen(_) => 4,
            Self::Edge => 5,
            Self::Emboss => 6,
        };
        &FILTERS[idx]
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.intensity() {
            Some(i) => write!(f, "{}({})", self.name(), i),
            None => f.write_str(self.name()),
        }
    }
}

/// Apply a filter, returning a new buffer.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] for a negative or non-finite
/// blur radius or sharpen intensity.
pub fn apply_filter(pix: &PixelBuffer, kind: FilterKind) -> FilterResult<PixelBuffer> {
    debug!(filter = %kind, width = pix.width(), height = pix.height(), "apply filter");
    match kind {
        FilterKind::Grayscale => Ok(grayscale(pix)),
        FilterKind::Sepia => Ok(sepia(pix)),
        FilterKind::Invert => Ok(invert(pix)),
        FilterKind::Blur(radius) => gaussian_blur(pix, radius),
        FilterKind::Sharpen(intensity) => sharpen(pix, intensity),
        FilterKind::Edge => sobel_edge(pix),
        FilterKind::Emboss => emboss(pix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for desc in &FILTERS {
            let kind = FilterKind::from_name(desc.name, None).unwrap();
            assert_eq!(kind.name(), desc.name);
            assert_eq!(kind.descriptor(), desc);
            assert_eq!(kind.intensity(), desc.default_intensity);
        }
    }

    #[test]
    fn test_intensity_override() {
        assert_eq!(
            FilterKind::from_name("blur", Some(4.0)).unwrap(),
            FilterKind::Blur(4.0)
        );
        assert_eq!(
            FilterKind::from_name("invert", Some(4.0)).unwrap(),
            FilterKind::Invert
        );
    }

    #[test]
    fn test_unknown_name() {
        assert!(matches!(
            FilterKind::from_name("vignette", None),
            Err(FilterError::UnknownFilter(name)) if name == "vignette"
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(FilterKind::Sharpen(1.5).to_string(), "sharpen(1.5)");
        assert_eq!(FilterKind::Edge.to_string(), "edge");
    }
}
