//! Size aggregation and reporting for bigtree.
//!
//! This crate composes the walker with size accumulation and display:
//!
//! - **[`SizeAggregator`]** - visitor summing file sizes into a
//!   [`SizeTotals`]
//! - **[`BigTreeDetector`]** - walks a tree and fires a reporter when the
//!   total strictly exceeds a threshold
//! - **[`TreeDumper`]** - walks a tree and reports the full nested
//!   listing unconditionally
//! - **[`Reporter`]** - the display capability, with console
//!   ([`ConsoleReporter`]) and remote debug-tool ([`DebugToolReporter`])
//!   adapters
//!
//! # Example
//!
//! ```rust,no_run
//! use bigtree_report::{BigTreeDetector, ConsoleReporter};
//! use bigtree_walk::LocalFs;
//!
//! # async fn run() -> Result<(), bigtree_report::WalkError> {
//! let mut detector = BigTreeDetector::new(LocalFs::new(), ConsoleReporter::new(), 1_000_000);
//! if let Some(totals) = detector.detect("/var/log").await? {
//!     eprintln!("logs are taking up {}", totals.human());
//! }
//! # Ok(())
//! # }
//! ```

mod detector;
mod dump;
mod reporter;
mod sizing;

pub use detector::BigTreeDetector;
pub use dump::TreeDumper;
pub use reporter::{ConsoleReporter, DebugToolReporter, DisplayRecord, Reporter};
pub use sizing::SizeAggregator;

// Re-export core types for convenience
pub use bigtree_core::{SizeTotals, WalkError};
