// ABOUTME: Immutable scoring configuration holding the BMI, FMI and per-gender risk cutoff tables
// ABOUTME: Parses the JSON document, validates every table and fails fast on any defect

use helena_core::models::Gender;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::ConfigError;
use crate::algorithms::classes::{BmiClass, FmiClass};
use crate::cutoff::{CutoffTable, OrderedEntries};

/// Table names as they appear in the configuration document
const BMI_TABLE: &str = "bmi_cutoffs";
const FMI_TABLE: &str = "fmi_cutoffs";
const RISK_MALE_TABLE: &str = "risk_cutoffs.male";
const RISK_FEMALE_TABLE: &str = "risk_cutoffs.female";

/// Per-gender risk classification tables
#[derive(Debug, Clone, PartialEq)]
pub struct RiskCutoffs {
    /// Table consulted for male children
    pub male: CutoffTable<String>,
    /// Table consulted for female children
    pub female: CutoffTable<String>,
}

impl RiskCutoffs {
    /// Table for the given gender
    #[must_use]
    pub const fn for_gender(&self, gender: Gender) -> &CutoffTable<String> {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }
}

/// Validated cutoff tables used by the scorer and classifier
///
/// Built once before the first scoring call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    /// BMI classification table (male branch)
    pub bmi_cutoffs: CutoffTable<BmiClass>,
    /// FMI classification table (female branch)
    pub fmi_cutoffs: CutoffTable<FmiClass>,
    /// Risk-score classification tables
    pub risk_cutoffs: RiskCutoffs,
}

#[derive(Deserialize)]
struct RawRiskCutoffs {
    male: OrderedEntries<String>,
    female: OrderedEntries<String>,
}

#[derive(Deserialize)]
struct RawScoringConfig {
    bmi_cutoffs: OrderedEntries<BmiClass>,
    fmi_cutoffs: OrderedEntries<FmiClass>,
    risk_cutoffs: RawRiskCutoffs,
}

impl ScoringConfig {
    /// Load and validate the configuration file at `path`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise any
    /// error of [`ScoringConfig::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Parse and validate a configuration document
    ///
    /// The document must hold `bmi_cutoffs`, `fmi_cutoffs`,
    /// `risk_cutoffs.male` and `risk_cutoffs.female`, each an object mapping
    /// labels to upper bounds in ascending order. BMI and FMI labels must
    /// belong to their closed label sets.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON, missing tables or
    /// unknown labels, and a table-specific variant when a table breaks its
    /// ordering invariants.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let raw: RawScoringConfig = serde_json::from_str(json)?;

        let risk_cutoffs = RiskCutoffs {
            male: risk_table(RISK_MALE_TABLE, raw.risk_cutoffs.male)?,
            female: risk_table(RISK_FEMALE_TABLE, raw.risk_cutoffs.female)?,
        };

        Ok(Self {
            bmi_cutoffs: CutoffTable::new(BMI_TABLE, raw.bmi_cutoffs.0)?,
            fmi_cutoffs: CutoffTable::new(FMI_TABLE, raw.fmi_cutoffs.0)?,
            risk_cutoffs,
        })
    }
}

fn risk_table(
    name: &str,
    entries: OrderedEntries<String>,
) -> Result<CutoffTable<String>, ConfigError> {
    if entries.0.iter().any(|(label, _)| label.trim().is_empty()) {
        return Err(ConfigError::BlankLabel(name.to_owned()));
    }
    CutoffTable::new(name, entries.0)
}

#[cfg(test)]
pub(crate) const TEST_CONFIG_JSON: &str = r#"{
    "bmi_cutoffs": { "healthy": 25, "overweight": 30, "obese": 100 },
    "fmi_cutoffs": { "underfat": 3.5, "normal": 6.5, "overweight": 11, "obese": 100 },
    "risk_cutoffs": {
        "male": { "very low": 6, "low": 12, "medium": 18, "high": 24, "very high": 30 },
        "female": { "very low": 11, "low": 22, "medium": 30, "high": 38, "very high": 44 }
    }
}"#;
