use crate::domain::constants::{HIGH_THRESHOLD, MEDIUM_THRESHOLD};
use crate::domain::models::RiskLevel;

/// Maps a risk score to its tier. Intervals are closed on the left.
pub fn categorize(score: f64) -> RiskLevel {
    if score < MEDIUM_THRESHOLD {
        RiskLevel::Low
    } else if score < HIGH_THRESHOLD {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}
