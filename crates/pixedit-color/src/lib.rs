//! pixedit Color - Non-destructive color adjustments
//!
//! Every adjustment is re-derived from the untouched original image, so
//! moving a slider back to its neutral value restores the original pixels
//! exactly:
//!
//! - **Gamma** correction
//! - **Brightness** and **contrast**
//! - **Saturation** and **hue** rotation in HSV space
//!
//! See [`apply_adjustments`].

pub mod adjust;
pub mod error;

pub use pixedit_core;

pub use adjust::{
    BRIGHTNESS_RANGE, CONTRAST_RANGE, ColorAdjustments, GAMMA_RANGE, HUE_RANGE,
    SATURATION_RANGE, apply_adjustments,
};
pub use error::{ColorError, ColorResult};
