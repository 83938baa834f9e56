//! Running size totals across a walk.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::size::format_size;

/// Accumulated byte total across a walk, with its human-readable rendering.
///
/// The only update operation is [`record`](Self::record); it keeps `human`
/// consistent with `total` at all times, so the totals can be displayed at
/// any point during or after a walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeTotals {
    total: u64,
    human: CompactString,
}

impl SizeTotals {
    /// Create empty totals.
    pub fn new() -> Self {
        Self {
            total: 0,
            human: format_size(0).into(),
        }
    }

    /// Add one file's size and refresh the rendering.
    pub fn record(&mut self, size: u64) {
        self.total += size;
        self.human = format_size(self.total).into();
    }

    /// Total byte count recorded so far.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Human-readable rendering of the current total.
    pub fn human(&self) -> &str {
        &self.human
    }
}

impl Default for SizeTotals {
    fn default() -> Self {
        Self::new()
    }
}
