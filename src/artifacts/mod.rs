//! Durable evidence artifacts
//!
//! Pure formatters over the engine's result type plus thin write wrappers.
//! Nothing here feeds back into evaluation; artifacts are write-only from
//! the engine's point of view.

pub mod decision_record;
pub mod snapshot;

pub use decision_record::{render_decision_record, write_decision_record};
pub use snapshot::{write_snapshot, Snapshot};

use chrono::{SecondsFormat, Utc};

/// Capture timestamp for artifacts: UTC, RFC 3339, second precision
pub fn now_utc_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
