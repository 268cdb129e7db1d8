// ABOUTME: Body-composition and aerobic-fitness metric calculators
// ABOUTME: BMI and FMI from anthropometrics, VO2max from the shuttle-run speed/age regression

use crate::errors::{ScoringError, ScoringResult};

/// Intercept of the VO2max regression (ml/kg/min)
const VO2MAX_INTERCEPT: f64 = 31.025;
/// Speed coefficient (per km/h)
const VO2MAX_SPEED_COEFFICIENT: f64 = 3.238;
/// Age coefficient (per year)
const VO2MAX_AGE_COEFFICIENT: f64 = 3.248;
/// Age x speed interaction coefficient
const VO2MAX_INTERACTION_COEFFICIENT: f64 = 0.1536;

const FMI_INSUFFICIENT_DATA: &str = "Insufficient data provided. Please provide the height and fat mass or the height, weight, and bodyfat percentage";

/// Round to two decimal places
///
/// Rounds the exact binary value, so `28.125` becomes `28.12` (ties to even)
/// while a product that lands just below a tie rounds down.
fn round_to_hundredths(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Mass divided by squared height in metres
fn mass_index(mass_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    mass_kg / (height_m * height_m)
}

/// Body Mass Index (kg/m²), rounded to two decimals
///
/// Height is taken in centimetres to avoid decimal-separator confusion on
/// the client side. Inputs are assumed range-checked by the caller.
#[must_use]
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> f64 {
    round_to_hundredths(mass_index(weight_kg, height_cm))
}

/// Fat Mass Index (kg/m²), rounded to two decimals
///
/// Fat mass is taken directly when supplied; otherwise it is derived from
/// `body_fat_percentage` and `weight_kg`. A supplied `fat_mass_kg` always
/// wins and is not cross-checked against the other two.
///
/// # Errors
///
/// Returns [`ScoringError::InsufficientData`] when neither fat mass nor
/// both weight and body-fat percentage are supplied.
pub fn calculate_fmi(
    height_cm: f64,
    weight_kg: Option<f64>,
    fat_mass_kg: Option<f64>,
    body_fat_percentage: Option<f64>,
) -> ScoringResult<f64> {
    let fat_mass_kg = match (fat_mass_kg, weight_kg, body_fat_percentage) {
        (Some(fat_mass), _, _) => fat_mass,
        (None, Some(weight), Some(percentage)) => percentage / 100.0 * weight,
        _ => {
            return Err(ScoringError::InsufficientData(
                FMI_INSUFFICIENT_DATA.to_owned(),
            ))
        }
    };

    Ok(round_to_hundredths(mass_index(fat_mass_kg, height_cm)))
}

/// Estimated VO2max (ml/kg/min) from final shuttle-run speed and age, rounded to two decimals
///
/// `VO2max = 31.025 + 3.238·speed − 3.248·age + 0.1536·age·speed`
///
/// Terms are summed left to right with separately rounded products; fused
/// multiply-add changes the last bit and with it some rounded results.
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn calculate_vo2max(speed_km_per_h: f64, age_yr: u32) -> f64 {
    let age = f64::from(age_yr);
    round_to_hundredths(
        VO2MAX_INTERCEPT + VO2MAX_SPEED_COEFFICIENT * speed_km_per_h
            - VO2MAX_AGE_COEFFICIENT * age
            + VO2MAX_INTERACTION_COEFFICIENT * age * speed_km_per_h,
    )
}
