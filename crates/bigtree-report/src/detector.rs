//! Threshold-triggered size detection.

use std::path::Path;

use bigtree_core::{SizeTotals, WalkError};
use bigtree_walk::{Filesystem, Walker};

use crate::reporter::Reporter;
use crate::sizing::SizeAggregator;

/// Walks a tree, sums its file sizes, and reports when the total
/// strictly exceeds a threshold.
pub struct BigTreeDetector<F, R> {
    walker: Walker<F>,
    reporter: R,
    threshold: u64,
}

impl<F: Filesystem, R: Reporter> BigTreeDetector<F, R> {
    /// Create a detector over `fs` that reports through `reporter`
    /// whenever a walked tree totals more than `threshold` bytes.
    pub fn new(fs: F, reporter: R, threshold: u64) -> Self {
        Self {
            walker: Walker::new(fs),
            reporter,
            threshold,
        }
    }

    /// Threshold in bytes.
    pub fn threshold(&self) -> u64 {
        self.threshold
    }

    /// Consume the detector, returning its reporter.
    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Walk `path` and report if its total file size exceeds the
    /// threshold.
    ///
    /// Each invocation aggregates into fresh totals. Returns the totals
    /// when the threshold was exceeded (strictly: a total equal to the
    /// threshold does not trigger), `None` otherwise. On a walk failure
    /// the partial totals are discarded and the reporter never fires.
    pub async fn detect(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<Option<SizeTotals>, WalkError> {
        let path = path.as_ref();
        let mut aggregator = SizeAggregator::new();
        self.walker.walk(path, &mut aggregator).await?;

        let totals = aggregator.into_totals();
        if totals.total() > self.threshold {
            self.reporter.big_tree(path, &totals);
            Ok(Some(totals))
        } else {
            Ok(None)
        }
    }
}
