//! pixedit-test - Regression test framework for pixedit
//!
//! This crate provides a small regression test harness with two modes:
//!
//! - **Compare** (default): check values and images, and verify that every
//!   written image reads back identically
//! - **Display**: run tests and write result images under `tests/regout`
//!   for visual inspection without the read-back check
//!
//! It also provides deterministic synthetic fixtures, since no binary test
//! images are shipped with the workspace.
//!
//! # Usage
//!
//! ```ignore
//! use pixedit_test::{RegParams, fixtures};
//!
//! let mut rp = RegParams::new("grayscale");
//! let pix = fixtures::make_uniform(4, 4, [255, 0, 0, 255]);
//! rp.compare_values(4.0, pix.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: `compare` (default) or `display`

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Route `tracing` output to the test writer.
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .try_init();
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // pixedit-test is at crates/pixedit-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
