use serde::Serialize;
use std::fmt;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VehicleType {
    Car,
    Truck,
    Motorcycle,
}

impl VehicleType {
    /// Maps a menu selection (1-3) to a vehicle type.
    pub fn from_menu_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(VehicleType::Car),
            2 => Some(VehicleType::Truck),
            3 => Some(VehicleType::Motorcycle),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub vehicle_type: VehicleType,
    pub accident_count: u32,
    pub is_commercial: bool,
}

impl Vehicle {
    /// A vehicle with no recorded accidents and private use.
    pub fn new(make: &str, model: &str, year: i32, vehicle_type: VehicleType) -> Self {
        Self {
            make: make.to_string(),
            model: model.to_string(),
            year,
            vehicle_type,
            accident_count: 0,
            is_commercial: false,
        }
    }

    pub fn with_accidents(mut self, accident_count: u32) -> Self {
        self.accident_count = accident_count;
        self
    }

    pub fn commercial(mut self, is_commercial: bool) -> Self {
        self.is_commercial = is_commercial;
        self
    }

    /// Registry key. Make and model are the only identity a vehicle has.
    pub fn label(&self) -> String {
        format!("{} {}", self.make, self.model)
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct RiskEntry {
    pub vehicle: String,
    pub risk_level: RiskLevel,
}
