// ABOUTME: Gender enumeration used by the risk scorer and classifier
// ABOUTME: Provides parsing and display implementations matching the wire format

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Gender of the screened child
///
/// Selects the mandatory body-composition metric (BMI for male, FMI plus TV
/// hours for female) and the risk cutoff sub-table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
}

impl Gender {
    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown gender '{other}', expected 'male' or 'female'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_round_trips_through_wire_format() {
        for gender in [Gender::Male, Gender::Female] {
            assert_eq!(gender.as_str().parse::<Gender>().unwrap(), gender);
        }
        assert_eq!(
            serde_json::to_string(&Gender::Female).unwrap(),
            "\"female\""
        );
    }

    #[test]
    fn test_unknown_gender_rejected() {
        assert!("NA".parse::<Gender>().is_err());
        assert!(serde_json::from_str::<Gender>("\"Male\"").is_err());
    }
}
