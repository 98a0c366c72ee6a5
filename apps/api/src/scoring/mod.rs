//! Gap scoring and prioritization.
//!
//! Two priority policies live here side by side. The interactive surface
//! thresholds on `gap × importance`; the batch report thresholds on the raw
//! gap with an importance override. They evolved as independent reports and
//! are intentionally NOT unified — see the doc comments on each policy.

pub mod batch;
pub mod interactive;
pub mod recommend;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Priority tier assigned to a scored skill gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::High => "High Priority",
            Priority::Medium => "Medium Priority",
            Priority::Low => "Low Priority",
        };
        f.write_str(label)
    }
}
