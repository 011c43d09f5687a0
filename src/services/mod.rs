//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `sequence.rs` — Collatz trajectory generation with step/overflow guards.
//! - `stats.rs` — flight time, altitude flight time, max altitude.
//! - `chart.rs` — chart title, SVG rendering and viewer hand-off.
//! - `config.rs` — `~/.config/syracuse/config.toml` loading.
//! - `logging.rs` — tracing subscriber setup.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod chart;
pub mod config;
pub mod logging;
pub mod output;
pub mod sequence;
pub mod stats;
