//! Report types for submission scores.
//!
//! [`ResultReport`] serializes to the JSON shape the hosting platform
//! expects:
//!
//! ```json
//! {
//!   "result": [
//!     {"ex1_public":  {"PSNR": 28.1, "SSIM": 0.97, "Total": 27.3}},
//!     {"ex1_private": {"PSNR": 26.4, "SSIM": 0.95, "Total": 25.1}}
//!   ],
//!   "submission_result": {"PSNR": 28.1, "SSIM": 0.97, "Total": 27.3}
//! }
//! ```
//!
//! `submission_result` always mirrors the public-subset record; the
//! platform uses it for the summary view. Note that serde_json renders
//! non-finite values (infinite PSNR from a pixel-perfect submission) as
//! `null`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Scores for one (subset, phase) pair, keyed by metric name.
///
/// Backed by a `BTreeMap` so serialized key order is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreRecord(BTreeMap<String, f64>);

impl ScoreRecord {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a metric value, builder-style.
    #[must_use]
    pub fn with(mut self, metric: &str, value: f64) -> Self {
        self.0.insert(metric.to_string(), value);
        self
    }

    /// Look up a metric value by name.
    #[must_use]
    pub fn get(&self, metric: &str) -> Option<f64> {
        self.0.get(metric).copied()
    }

    /// Number of metrics in the record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the record holds no metrics.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over (metric name, value) pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Full score report for one evaluated submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultReport {
    /// One single-entry map per subset, tagged `"<phase>_public"` then
    /// `"<phase>_private"`.
    pub result: Vec<BTreeMap<String, ScoreRecord>>,

    /// Denormalized copy of the public-subset record for the platform's
    /// summary display.
    pub submission_result: ScoreRecord,
}

impl ResultReport {
    /// Assemble a report from the two subset records of a phase.
    #[must_use]
    pub fn from_subsets(phase: &str, public: ScoreRecord, private: ScoreRecord) -> Self {
        let tag = |subset: &str, record: ScoreRecord| {
            BTreeMap::from([(format!("{phase}_{subset}"), record)])
        };
        Self {
            submission_result: public.clone(),
            result: vec![tag("public", public), tag("private", private)],
        }
    }

    /// Serialize the report to a JSON value for the platform.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
