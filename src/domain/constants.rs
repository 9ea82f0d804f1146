/// Year the age multiplier is measured against.
pub const REFERENCE_YEAR: i32 = 2024;

pub const MIN_YEAR: i32 = 1970;
pub const MAX_YEAR: i32 = 2024;

pub const CAR_BASE_RISK: f64 = 0.8;
pub const COMMERCIAL_MULTIPLIER: f64 = 1.5;
pub const AGE_FACTOR_PER_YEAR: f64 = 0.05;
pub const ACCIDENT_FACTOR: f64 = 0.15;

/// Lowest score classified as MEDIUM.
pub const MEDIUM_THRESHOLD: f64 = 1.2;
/// Lowest score classified as HIGH.
pub const HIGH_THRESHOLD: f64 = 1.8;
