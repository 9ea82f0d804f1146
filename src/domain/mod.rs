//! Shared data model layer (types/constants only).
//!
//! ## Purpose
//! - Keep vehicle, tier and report structs in one place.
//! - Avoid duplicated type definitions between services and commands.
//! - Make `--json` output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — vehicle record, enums, registry rows, JSON envelope.
//! - `constants.rs` — risk formula factors, tier thresholds, year bounds.
//! - `errors.rs` — fatal session errors.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no console side effects.

pub mod constants;
pub mod errors;
pub mod models;
