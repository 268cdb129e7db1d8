// ABOUTME: Screening algorithms: metric calculators, factor classes and risk scoring
// ABOUTME: Groups the pure computations consumed by the HTTP layer

/// Factor classifications and their point values
pub mod classes;

/// BMI, FMI and VO2max calculators
pub mod metrics;

/// Risk scorer and risk classifier
pub mod risk;
