//! Service layer containing scoring logic and console helpers.
//!
//! ## Service map
//! - `risk.rs` — per-vehicle-type risk score formulas.
//! - `classify.rs` — score to LOW/MEDIUM/HIGH tier.
//! - `registry.rs` — session registry of assessed vehicles.
//! - `prompt.rs` — field prompts with validation and retry.
//! - `output.rs` — text/JSON rendering of the registry.
//! - `trace.rs` — diagnostic logging setup.
//!
//! ## Conventions
//! - Scoring and classification are pure.
//! - Console I/O goes through generic readers/writers so it can be tested.

pub mod classify;
pub mod output;
pub mod prompt;
pub mod registry;
pub mod risk;
pub mod trace;
