//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep trajectory/report/config structs in one place.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — trajectory, flight report, config and output structs.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem or display side effects.
//!
//! ## Compatibility note
//! Changes in these structs can affect `--json` outputs.
//! Keep schema-impacting changes synchronized with `docs/contracts/*`.

pub mod models;
