//! Command handler layer.
//!
//! ## Files
//! - `session.rs` — the interactive assessment session.
//!
//! ## Principles
//! - Wire CLI options to the session here.
//! - Delegate scoring and prompting to `services/*`.
//! - Keep prompt text and output format stable.

pub mod session;

pub use session::handle_session;
