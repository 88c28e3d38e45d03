//! Project-wide constants.

use std::path::PathBuf;

use crate::engine::Reading;

pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
pub const HOMEPAGE: &str = env!("CARGO_PKG_HOMEPAGE");
pub const REPO: &str = env!("CARGO_PKG_REPOSITORY");

/// File name used for written reports.
pub const REPORT_FILE_NAME: &str = "water_quality_report.txt";

/// Values pre-filled in the form when a reading is not given.
pub const DEFAULT_READING: Reading = Reading {
    ph: 7.0,
    turbidity: 0.5,
    arsenic: 5.0,
};

/// Default config path: `~/.aquasens/config.json`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".aquasens").join("config.json"))
}

/// Format a reading for display with an optional unit suffix. The value is
/// printed unrounded (shortest round-trip form, always with a decimal point),
/// so a reading just past a limit never shows as the limit itself.
pub fn format_value(value: f64, unit: &str) -> String {
    if unit.is_empty() {
        format!("{value:?}")
    } else {
        format!("{value:?} {unit}")
    }
}

/// Index rounded to one decimal for display.
pub fn format_index(index: f64) -> String {
    format!("{index:.1}")
}
