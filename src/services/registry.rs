use crate::domain::models::{RiskEntry, RiskLevel, Vehicle};
use crate::services::classify::categorize;
use crate::services::risk::calculate_total_risk;
use std::collections::BTreeMap;

/// Risk tiers assessed during this session, keyed by vehicle label.
///
/// Iteration is in label order. Assessing a label twice keeps only the
/// latest tier.
#[derive(Debug, Default)]
pub struct RiskRegistry {
    entries: BTreeMap<String, RiskLevel>,
}

impl RiskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, label: impl Into<String>, level: RiskLevel) {
        let label = label.into();
        if let Some(previous) = self.entries.insert(label.clone(), level) {
            tracing::debug!(%label, %previous, %level, "overwrote risk entry");
        }
    }

    /// Scores, classifies and records a vehicle under its label.
    pub fn assess(&mut self, vehicle: &Vehicle) -> RiskLevel {
        let level = categorize(calculate_total_risk(vehicle));
        self.record(vehicle.label(), level);
        level
    }

    #[cfg(test)]
    pub fn get(&self, label: &str) -> Option<RiskLevel> {
        self.entries.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn render_all(&self) -> Vec<RiskEntry> {
        self.entries
            .iter()
            .map(|(label, level)| RiskEntry {
                vehicle: label.clone(),
                risk_level: *level,
            })
            .collect()
    }
}
