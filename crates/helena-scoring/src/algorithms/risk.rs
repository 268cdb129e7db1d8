// ABOUTME: Insulin-resistance risk scorer and classifier
// ABOUTME: Awards independent points per factor through the cutoff tables and labels the sum per gender

use helena_core::models::Gender;
use serde::Serialize;

use super::classes::{BmiClass, FitnessClass, FmiClass, ScreenTimeClass};
use crate::config::ScoringConfig;
use crate::errors::{ScoringError, ScoringResult};

const MALE_BMI_REQUIRED: &str = "For male children, BMI is required to calculate risk score.";
const FEMALE_FMI_REQUIRED: &str = "For female children, FMI is required to calculate risk score.";
const FEMALE_TV_HOURS_REQUIRED: &str =
    "For female children, hours of TV viewed per day is required to calculate risk score.";
const RISK_SCORE_NOT_COVERED: &str =
    "The risk score you provided is not valid. Check the config file for the specified cut-offs.";

/// Measured factors for one child
///
/// Which optional fields are mandatory depends on `gender`: BMI for boys,
/// FMI and TV hours for girls. Fields not used by a branch are ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskFactors {
    /// Selects the scoring branch
    pub gender: Gender,
    /// VO2max in ml/kg/min
    pub vo2max: f64,
    /// Body mass index, boys only
    pub bmi: Option<f64>,
    /// Fat mass index, girls only
    pub fmi: Option<f64>,
    /// Daily TV hours, girls only
    pub tv_hours: Option<f64>,
}

impl RiskFactors {
    /// Factors for a boy
    #[must_use]
    pub const fn male(vo2max: f64, bmi: f64) -> Self {
        Self {
            gender: Gender::Male,
            vo2max,
            bmi: Some(bmi),
            fmi: None,
            tv_hours: None,
        }
    }

    /// Factors for a girl
    #[must_use]
    pub const fn female(vo2max: f64, fmi: f64, tv_hours: f64) -> Self {
        Self {
            gender: Gender::Female,
            vo2max,
            bmi: None,
            fmi: Some(fmi),
            tv_hours: Some(tv_hours),
        }
    }
}

/// Classification and points of one factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FactorPoints {
    /// Class label of the factor
    pub classification: &'static str,
    /// Points awarded for the class
    pub points: u32,
}

/// Points per factor; factors outside the gender's branch are `None`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskScoreBreakdown {
    /// Aerobic fitness, always scored
    pub fitness: FactorPoints,
    /// BMI class, boys only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi: Option<FactorPoints>,
    /// FMI class, girls only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fmi: Option<FactorPoints>,
    /// TV viewing class, girls only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_time: Option<FactorPoints>,
}

impl RiskScoreBreakdown {
    /// Sum of all awarded points
    #[must_use]
    pub fn total(&self) -> u32 {
        [self.bmi, self.fmi, self.screen_time]
            .into_iter()
            .flatten()
            .fold(self.fitness.points, |sum, factor| sum + factor.points)
    }
}

/// Score together with its risk classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskAssessment {
    /// Sum of the breakdown
    pub score: u32,
    /// Risk label from the gender's risk table
    pub classification: String,
    /// Points per factor
    pub breakdown: RiskScoreBreakdown,
}

/// Computes risk scores against a loaded [`ScoringConfig`]
#[derive(Debug, Clone, Copy)]
pub struct RiskScorer<'a> {
    config: &'a ScoringConfig,
}

impl<'a> RiskScorer<'a> {
    /// Scorer borrowing the given tables
    #[must_use]
    pub const fn new(config: &'a ScoringConfig) -> Self {
        Self { config }
    }

    /// Award points per factor for the gender's branch
    ///
    /// # Errors
    ///
    /// [`ScoringError::InsufficientData`] when a mandatory factor is missing,
    /// [`ScoringError::InvalidInput`] when BMI or FMI lies outside its table.
    pub fn score(&self, factors: &RiskFactors) -> ScoringResult<RiskScoreBreakdown> {
        let fitness_class = FitnessClass::from_vo2max(factors.vo2max);
        let fitness = FactorPoints {
            classification: fitness_class.as_str(),
            points: fitness_class.points(factors.gender),
        };

        match factors.gender {
            Gender::Male => {
                let bmi = factors
                    .bmi
                    .ok_or_else(|| ScoringError::InsufficientData(MALE_BMI_REQUIRED.to_owned()))?;
                let class = self.classify_bmi(bmi)?;
                Ok(RiskScoreBreakdown {
                    fitness,
                    bmi: Some(FactorPoints {
                        classification: class.as_str(),
                        points: class.points(),
                    }),
                    fmi: None,
                    screen_time: None,
                })
            }
            Gender::Female => {
                let fmi = factors.fmi.ok_or_else(|| {
                    ScoringError::InsufficientData(FEMALE_FMI_REQUIRED.to_owned())
                })?;
                let tv_hours = factors.tv_hours.ok_or_else(|| {
                    ScoringError::InsufficientData(FEMALE_TV_HOURS_REQUIRED.to_owned())
                })?;
                let class = self.classify_fmi(fmi)?;
                let screen_time = ScreenTimeClass::from_tv_hours(tv_hours);
                Ok(RiskScoreBreakdown {
                    fitness,
                    bmi: None,
                    fmi: Some(FactorPoints {
                        classification: class.as_str(),
                        points: class.points(),
                    }),
                    screen_time: Some(FactorPoints {
                        classification: screen_time.as_str(),
                        points: screen_time.points(),
                    }),
                })
            }
        }
    }

    /// Score and classify in one call
    ///
    /// # Errors
    ///
    /// Any error of [`RiskScorer::score`] or [`RiskClassifier::classify`].
    pub fn assess(&self, factors: &RiskFactors) -> ScoringResult<RiskAssessment> {
        let breakdown = self.score(factors)?;
        let score = breakdown.total();
        let classification =
            RiskClassifier::new(self.config).classify(score, factors.gender)?;
        Ok(RiskAssessment {
            score,
            classification,
            breakdown,
        })
    }

    fn classify_bmi(&self, bmi: f64) -> ScoringResult<BmiClass> {
        self.config
            .bmi_cutoffs
            .classify(bmi)
            .copied()
            .ok_or_else(|| {
                ScoringError::InvalidInput(format!(
                    "The BMI value {bmi} is not covered by the configured BMI cut-offs."
                ))
            })
    }

    fn classify_fmi(&self, fmi: f64) -> ScoringResult<FmiClass> {
        self.config
            .fmi_cutoffs
            .classify(fmi)
            .copied()
            .ok_or_else(|| {
                ScoringError::InvalidInput(format!(
                    "The FMI value {fmi} is not covered by the configured FMI cut-offs."
                ))
            })
    }
}

/// Labels risk scores using the per-gender risk tables
#[derive(Debug, Clone, Copy)]
pub struct RiskClassifier<'a> {
    config: &'a ScoringConfig,
}

impl<'a> RiskClassifier<'a> {
    /// Classifier borrowing the given tables
    #[must_use]
    pub const fn new(config: &'a ScoringConfig) -> Self {
        Self { config }
    }

    /// Label of the first bucket whose bound exceeds `score`
    ///
    /// # Errors
    ///
    /// [`ScoringError::InvalidInput`] when the score is at or above every bound.
    pub fn classify(&self, score: u32, gender: Gender) -> ScoringResult<String> {
        self.config
            .risk_cutoffs
            .for_gender(gender)
            .classify(f64::from(score))
            .cloned()
            .ok_or_else(|| ScoringError::InvalidInput(RISK_SCORE_NOT_COVERED.to_owned()))
    }
}

/// Total risk score for the given factors
///
/// # Errors
///
/// See [`RiskScorer::score`].
pub fn calculate_risk_score(
    config: &ScoringConfig,
    gender: Gender,
    vo2max: f64,
    bmi: Option<f64>,
    fmi: Option<f64>,
    tv_hours: Option<f64>,
) -> ScoringResult<u32> {
    let factors = RiskFactors {
        gender,
        vo2max,
        bmi,
        fmi,
        tv_hours,
    };
    RiskScorer::new(config)
        .score(&factors)
        .map(|breakdown| breakdown.total())
}

/// Risk classification label for a score
///
/// # Errors
///
/// See [`RiskClassifier::classify`].
pub fn classify_risk_score(
    config: &ScoringConfig,
    risk_score: u32,
    gender: Gender,
) -> ScoringResult<String> {
    RiskClassifier::new(config).classify(risk_score, gender)
}
