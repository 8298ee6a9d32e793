//! Check bookkeeping for `*_reg` tests
//!
//! A [`RegParams`] numbers every check it runs. A failing check is recorded
//! instead of panicking, so one run reports every mismatch, and the test
//! asserts on [`RegParams::cleanup`] at the end.

use crate::error::{TestError, TestResult};
use crate::regout_dir;
use pixedit_core::PixelBuffer;
use pixedit_io::ExportFormat;
use std::fs;
use std::path::PathBuf;

/// How written images are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Written images must decode back to the same pixels
    #[default]
    Compare,
    /// Written images are left in `tests/regout` for inspection only
    Display,
}

impl RegTestMode {
    /// Read `REGTEST_MODE`; anything but `display` means compare.
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE") {
            Ok(v) if v.eq_ignore_ascii_case("display") => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Running state of one regression test
#[derive(Debug)]
pub struct RegParams {
    pub test_name: String,
    pub mode: RegTestMode,
    index: usize,
    failures: Vec<String>,
}

impl RegParams {
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();
        if let Err(e) = fs::create_dir_all(regout_dir()) {
            eprintln!("{test_name}_reg: cannot create {}: {e}", regout_dir());
        }
        eprintln!("==== {test_name}_reg ({mode:?}) ====");

        Self {
            test_name: test_name.to_string(),
            mode,
            index: 0,
            failures: Vec::new(),
        }
    }

    /// Number of checks run so far
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    /// Advance the check counter and record `failure` if there is one.
    fn check(&mut self, failure: Option<String>) -> bool {
        self.index += 1;
        match failure {
            None => true,
            Some(what) => {
                let msg = format!("{}_reg check {}: {what}", self.test_name, self.index);
                eprintln!("{msg}");
                self.failures.push(msg);
                false
            }
        }
    }

    /// Pass when `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        let diff = (expected - actual).abs();
        self.check(
            (diff > delta).then(|| format!("expected {expected}, got {actual} (delta {delta})")),
        )
    }

    pub fn compare_pix(&mut self, pix1: &PixelBuffer, pix2: &PixelBuffer) -> bool {
        self.compare_pix_within(pix1, pix2, 0)
    }

    /// Pass when both images have the same size and no channel differs by
    /// more than `tolerance`.
    pub fn compare_pix_within(
        &mut self,
        pix1: &PixelBuffer,
        pix2: &PixelBuffer,
        tolerance: u8,
    ) -> bool {
        let failure = match pix1.count_pixel_diffs(pix2) {
            Err(_) => Some(format!(
                "size {:?} vs {:?}",
                pix1.dimensions(),
                pix2.dimensions()
            )),
            Ok(d) if d.max_diff > tolerance => Some(format!(
                "{} pixels differ, max channel diff {} (tolerance {tolerance})",
                d.n_diff, d.max_diff
            )),
            Ok(_) => None,
        };
        self.check(failure)
    }

    /// Pass when the two byte strings are identical.
    pub fn compare_strings(&mut self, data1: &[u8], data2: &[u8]) -> bool {
        let failure = (data1 != data2).then(|| {
            let first = data1.iter().zip(data2).position(|(a, b)| a != b);
            format!(
                "bytes differ (len {} vs {}, first mismatch at {first:?})",
                data1.len(),
                data2.len()
            )
        });
        self.check(failure)
    }

    /// Save `pix` as `tests/regout/<name>.<index>.png`.
    ///
    /// In compare mode the file is decoded again and must equal `pix`.
    pub fn write_pix_and_check(&mut self, pix: &PixelBuffer) -> TestResult<()> {
        let format = ExportFormat::Png;
        let path = PathBuf::from(regout_dir()).join(format!(
            "{}.{:02}.{}",
            self.test_name,
            self.index + 1,
            format.extension()
        ));
        let shown = path.display().to_string();

        let bytes =
            pixedit_io::export_image(pix, format, 1.0).map_err(|e| TestError::ImageWrite {
                path: shown.clone(),
                message: e.to_string(),
            })?;
        fs::write(&path, &bytes)?;

        if self.display() {
            self.index += 1;
            return Ok(());
        }
        let back = pixedit_io::decode_image(&fs::read(&path)?).map_err(|e| {
            TestError::ImageRead {
                path: shown.clone(),
                message: e.to_string(),
            }
        })?;
        self.check((&back != pix).then(|| format!("{shown} did not read back unchanged")));
        Ok(())
    }

    /// Print the summary and return whether every check passed.
    pub fn cleanup(self) -> bool {
        if self.failures.is_empty() {
            eprintln!("{}_reg: {} checks passed", self.test_name, self.index);
            return true;
        }
        eprintln!(
            "{}_reg: {} of {} checks failed",
            self.test_name,
            self.failures.len(),
            self.index
        );
        for failure in &self.failures {
            eprintln!("  {failure}");
        }
        false
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
