use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::test_definition::TestFormat;

/// How per-blank questions contribute to the score summary.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BlankScoring {
    /// Every blank is one scoring unit (a 40-number test has 40 marks).
    PerBlank,
    /// One unit per authored question; correct only when every blank is.
    AllOrNothing,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackScheme {
    Auto,
    Manual,
    None,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScoringOptions {
    #[serde(default = "default_blank_scoring")]
    pub blank_scoring: BlankScoring,

    #[serde(default = "default_feedback_scheme")]
    pub feedback_scheme: FeedbackScheme,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            blank_scoring: default_blank_scoring(),
            feedback_scheme: default_feedback_scheme(),
        }
    }
}

/// One threshold row of a band conversion table: raw scores of at least
/// `min_raw` (and below the next row up) convert to `band`.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
pub struct BandRow {
    pub min_raw: u32,
    pub band: f64,
}

/// Raw-score → band lookup. Rows must be strictly descending by threshold
/// and non-increasing in band; [`BandTable::validate`] enforces both.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct BandTable {
    pub rows: Vec<BandRow>,
}

impl BandTable {
    /// Band for a raw correct count: the first row whose threshold the raw
    /// score meets. An empty table (or a score below every row) yields 0.0.
    pub fn band_for(&self, raw: u32) -> f64 {
        self.rows
            .iter()
            .find(|row| raw >= row.min_raw)
            .map(|row| row.band)
            .unwrap_or(0.0)
    }

    pub fn validate(&self) -> Result<(), String> {
        for pair in self.rows.windows(2) {
            if pair[1].min_raw >= pair[0].min_raw {
                return Err(format!(
                    "band thresholds must be strictly descending ({} followed by {})",
                    pair[0].min_raw, pair[1].min_raw
                ));
            }
            if pair[1].band > pair[0].band {
                return Err(format!(
                    "band values must not increase as thresholds fall ({} followed by {})",
                    pair[0].band, pair[1].band
                ));
            }
        }
        Ok(())
    }
}

/// Commonly published IELTS Academic Reading conversion (raw out of 40).
pub fn reading_band_table() -> BandTable {
    BandTable {
        rows: vec![
            BandRow { min_raw: 39, band: 9.0 },
            BandRow { min_raw: 37, band: 8.5 },
            BandRow { min_raw: 35, band: 8.0 },
            BandRow { min_raw: 33, band: 7.5 },
            BandRow { min_raw: 30, band: 7.0 },
            BandRow { min_raw: 27, band: 6.5 },
            BandRow { min_raw: 23, band: 6.0 },
            BandRow { min_raw: 19, band: 5.5 },
            BandRow { min_raw: 15, band: 5.0 },
            BandRow { min_raw: 13, band: 4.5 },
            BandRow { min_raw: 10, band: 4.0 },
            BandRow { min_raw: 8, band: 3.5 },
            BandRow { min_raw: 6, band: 3.0 },
            BandRow { min_raw: 4, band: 2.5 },
            BandRow { min_raw: 3, band: 2.0 },
            BandRow { min_raw: 2, band: 1.5 },
            BandRow { min_raw: 1, band: 1.0 },
            BandRow { min_raw: 0, band: 0.0 },
        ],
    }
}

/// Commonly published IELTS Listening conversion (raw out of 40).
pub fn listening_band_table() -> BandTable {
    BandTable {
        rows: vec![
            BandRow { min_raw: 39, band: 9.0 },
            BandRow { min_raw: 37, band: 8.5 },
            BandRow { min_raw: 35, band: 8.0 },
            BandRow { min_raw: 32, band: 7.5 },
            BandRow { min_raw: 30, band: 7.0 },
            BandRow { min_raw: 26, band: 6.5 },
            BandRow { min_raw: 23, band: 6.0 },
            BandRow { min_raw: 18, band: 5.5 },
            BandRow { min_raw: 16, band: 5.0 },
            BandRow { min_raw: 13, band: 4.5 },
            BandRow { min_raw: 10, band: 4.0 },
            BandRow { min_raw: 8, band: 3.5 },
            BandRow { min_raw: 6, band: 3.0 },
            BandRow { min_raw: 4, band: 2.5 },
            BandRow { min_raw: 3, band: 2.0 },
            BandRow { min_raw: 2, band: 1.5 },
            BandRow { min_raw: 1, band: 1.0 },
            BandRow { min_raw: 0, band: 0.0 },
        ],
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct BandOptions {
    /// Explicit conversion table. When unset, Reading and Listening fall
    /// back to the built-in tables and Cambridge tests report no band.
    #[serde(default)]
    pub table: Option<BandTable>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct GradingConfig {
    #[serde(default)]
    pub scoring: ScoringOptions,

    #[serde(default)]
    pub bands: BandOptions,
}

impl GradingConfig {
    pub fn default_config() -> Self {
        Self::default()
    }

    /// The band table in effect for a test format: the configured override
    /// if any, otherwise the built-in default for band-scored formats.
    pub fn band_table_for(&self, format: TestFormat) -> Option<BandTable> {
        if let Some(table) = &self.bands.table {
            return Some(table.clone());
        }
        match format {
            TestFormat::Reading => Some(reading_band_table()),
            TestFormat::Listening => Some(listening_band_table()),
            TestFormat::Cambridge => None,
        }
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        let s = fs::read_to_string(path)
            .map_err(|_| format!("Failed to read grading config at {path:?}"))?;
        let cfg: GradingConfig =
            serde_json::from_str(&s).map_err(|_| "Invalid grading config JSON".to_string())?;
        if let Some(table) = &cfg.bands.table {
            table.validate()?;
        }
        Ok(cfg)
    }

    pub fn save(&self, path: &Path) -> Result<(), String> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| format!("Failed to create config directory: {e:?}"))?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config to JSON: {e}"))?;
        fs::write(path, json).map_err(|e| format!("Failed to write config file to disk: {e:?}"))
    }
}

// Default Functions

fn default_blank_scoring() -> BlankScoring {
    BlankScoring::PerBlank
}

fn default_feedback_scheme() -> FeedbackScheme {
    FeedbackScheme::Auto
}
