// ABOUTME: Closed classification label sets per risk factor and their point values
// ABOUTME: BMI and FMI labels come from configuration; fitness and screen-time use fixed thresholds

use helena_core::models::Gender;
use serde::{Deserialize, Serialize};

/// VO2max at or above this value is classified as low fitness (ml/kg/min)
pub const VO2MAX_LOW_FITNESS_THRESHOLD: f64 = 37.0;

/// Daily TV hours at or above this value score screen-time points
pub const TV_HOURS_THRESHOLD: f64 = 1.0;

/// BMI classification labels accepted in `bmi_cutoffs`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiClass {
    /// Healthy weight
    Healthy,
    /// Overweight
    Overweight,
    /// Obese
    Obese,
}

impl BmiClass {
    /// Risk points awarded for this class
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::Healthy => 0,
            Self::Overweight => 12,
            Self::Obese => 19,
        }
    }

    /// Label as written in configuration
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Overweight => "overweight",
            Self::Obese => "obese",
        }
    }
}

/// FMI classification labels accepted in `fmi_cutoffs`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FmiClass {
    /// Below normal fat mass
    Underfat,
    /// Normal fat mass
    Normal,
    /// Overweight
    Overweight,
    /// Obese
    Obese,
}

impl FmiClass {
    /// Risk points awarded for this class
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::Underfat | Self::Normal | Self::Overweight => 0,
            Self::Obese => 18,
        }
    }

    /// Label as written in configuration
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Underfat => "underfat",
            Self::Normal => "normal",
            Self::Overweight => "overweight",
            Self::Obese => "obese",
        }
    }
}

/// Aerobic fitness class derived from VO2max
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessClass {
    /// VO2max below the threshold
    Healthy,
    /// VO2max at or above the threshold
    LowFitness,
}

impl FitnessClass {
    /// Classify a VO2max value
    #[must_use]
    pub fn from_vo2max(vo2max: f64) -> Self {
        if vo2max < VO2MAX_LOW_FITNESS_THRESHOLD {
            Self::Healthy
        } else {
            Self::LowFitness
        }
    }

    /// Risk points awarded for this class; low fitness weighs more for girls
    #[must_use]
    pub const fn points(self, gender: Gender) -> u32 {
        match (self, gender) {
            (Self::Healthy, _) => 0,
            (Self::LowFitness, Gender::Male) => 10,
            (Self::LowFitness, Gender::Female) => 15,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::LowFitness => "low fitness",
        }
    }
}

/// Screen-time class derived from daily TV hours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenTimeClass {
    /// Less than one hour per day
    Low,
    /// One hour or more per day
    High,
}

impl ScreenTimeClass {
    /// Classify daily TV hours
    #[must_use]
    pub fn from_tv_hours(tv_hours: f64) -> Self {
        if tv_hours < TV_HOURS_THRESHOLD {
            Self::Low
        } else {
            Self::High
        }
    }

    /// Risk points awarded for this class
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::Low => 0,
            Self::High => 10,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::High => "high",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_tables() {
        assert_eq!(BmiClass::Healthy.points(), 0);
        assert_eq!(BmiClass::Overweight.points(), 12);
        assert_eq!(BmiClass::Obese.points(), 19);
        assert_eq!(FmiClass::Overweight.points(), 0);
        assert_eq!(FmiClass::Obese.points(), 18);
        assert_eq!(FitnessClass::LowFitness.points(Gender::Male), 10);
        assert_eq!(FitnessClass::LowFitness.points(Gender::Female), 15);
        assert_eq!(ScreenTimeClass::High.points(), 10);
    }

    #[test]
    fn test_thresholds_are_strict() {
        assert_eq!(FitnessClass::from_vo2max(36.99), FitnessClass::Healthy);
        assert_eq!(FitnessClass::from_vo2max(37.0), FitnessClass::LowFitness);
        assert_eq!(ScreenTimeClass::from_tv_hours(0.5), ScreenTimeClass::Low);
        assert_eq!(ScreenTimeClass::from_tv_hours(1.0), ScreenTimeClass::High);
    }

    #[test]
    fn test_labels_match_configuration_spelling() {
        for class in [BmiClass::Healthy, BmiClass::Overweight, BmiClass::Obese] {
            let json = format!("\"{}\"", class.as_str());
            assert_eq!(serde_json::from_str::<BmiClass>(&json).unwrap(), class);
        }
        for class in [
            FmiClass::Underfat,
            FmiClass::Normal,
            FmiClass::Overweight,
            FmiClass::Obese,
        ] {
            let json = format!("\"{}\"", class.as_str());
            assert_eq!(serde_json::from_str::<FmiClass>(&json).unwrap(), class);
        }
    }
}
