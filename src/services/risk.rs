//! Risk score formulas, one per vehicle type.
//!
//! Every type currently prices with the car formula; see `formula_for`.

use crate::domain::constants::{
    ACCIDENT_FACTOR, AGE_FACTOR_PER_YEAR, CAR_BASE_RISK, COMMERCIAL_MULTIPLIER, REFERENCE_YEAR,
};
use crate::domain::models::{Vehicle, VehicleType};

pub type RiskFormula = fn(&Vehicle) -> f64;

/// Selects the formula for a vehicle type.
///
/// Trucks and motorcycles have no calibrated model of their own and are
/// priced as cars, which keeps scores identical to earlier releases.
pub fn formula_for(vehicle_type: VehicleType) -> RiskFormula {
    match vehicle_type {
        VehicleType::Car => car_risk,
        VehicleType::Truck => car_risk,
        VehicleType::Motorcycle => car_risk,
    }
}

pub fn calculate_total_risk(vehicle: &Vehicle) -> f64 {
    let score = formula_for(vehicle.vehicle_type)(vehicle);
    tracing::debug!(
        label = %vehicle.label(),
        vehicle_type = ?vehicle.vehicle_type,
        score,
        "calculated risk score"
    );
    score
}

pub fn car_risk(vehicle: &Vehicle) -> f64 {
    apply_modifiers(vehicle, car_base_risk(vehicle))
}

fn car_base_risk(vehicle: &Vehicle) -> f64 {
    let usage = if vehicle.is_commercial {
        COMMERCIAL_MULTIPLIER
    } else {
        1.0
    };
    CAR_BASE_RISK * usage
}

fn apply_modifiers(vehicle: &Vehicle, risk: f64) -> f64 {
    let age = 1.0 + f64::from(REFERENCE_YEAR - vehicle.year) * AGE_FACTOR_PER_YEAR;
    let accidents = 1.0 + f64::from(vehicle.accident_count) * ACCIDENT_FACTOR;
    risk * age * accidents
}
