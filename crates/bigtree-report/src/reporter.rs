//! Display collaborators for detector and dumper output.

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::json;

use bigtree_core::SizeTotals;
use bigtree_walk::TreeMap;

/// Display capability consumed by the detector and the dumper.
///
/// Reporters are fire-and-forget: the walk outcome never depends on
/// whether a report could be delivered.
pub trait Reporter {
    /// A walked tree exceeded the size threshold.
    fn big_tree(&mut self, path: &Path, totals: &SizeTotals);

    /// A full tree listing was materialized.
    fn tree_listing(&mut self, path: &Path, tree: &TreeMap);
}

/// Console-style reporter logging through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Create a console reporter.
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleReporter {
    fn big_tree(&mut self, path: &Path, totals: &SizeTotals) {
        tracing::warn!(
            path = %path.display(),
            total = totals.total(),
            "path too big ({})",
            totals.human()
        );
    }

    fn tree_listing(&mut self, path: &Path, tree: &TreeMap) {
        match serde_json::to_string(tree) {
            Ok(rendered) => {
                tracing::info!(path = %path.display(), "listing: {rendered}");
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), "unrenderable listing: {err}");
            }
        }
    }
}

/// One structured record for a remote debugging tool.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayRecord {
    /// Record type tag (`BIGTREE`, `DUMPTREE`).
    pub name: &'static str,
    /// Whether the tool should highlight the record.
    pub important: bool,
    /// Structured payload.
    pub value: serde_json::Value,
    /// Short human-readable summary.
    pub preview: String,
}

/// Remote-tool style reporter writing one JSON [`DisplayRecord`] per
/// line.
///
/// The display channel has no way to report back, so serialization and
/// write failures are logged at warn level and the record is dropped.
#[derive(Debug)]
pub struct DebugToolReporter<W> {
    out: W,
}

impl<W: Write> DebugToolReporter<W> {
    /// Create a reporter writing records to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the reporter, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, record: &DisplayRecord) {
        let mut line = match serde_json::to_vec(record) {
            Ok(line) => line,
            Err(err) => {
                tracing::warn!("dropping {} record: {err}", record.name);
                return;
            }
        };
        line.push(b'\n');
        if let Err(err) = self.out.write_all(&line) {
            tracing::warn!("dropping {} record: {err}", record.name);
        }
    }
}

impl<W: Write> Reporter for DebugToolReporter<W> {
    fn big_tree(&mut self, path: &Path, totals: &SizeTotals) {
        self.emit(&DisplayRecord {
            name: "BIGTREE",
            important: true,
            value: json!({
                "path": path.display().to_string(),
                "size": totals,
            }),
            preview: format!("Path too big ({})", totals.human()),
        });
    }

    fn tree_listing(&mut self, path: &Path, tree: &TreeMap) {
        self.emit(&DisplayRecord {
            name: "DUMPTREE",
            important: false,
            value: json!(tree),
            preview: format!("Listing: {}", path.display()),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_big_tree_record_shape() {
        let mut totals = SizeTotals::new();
        totals.record(1100);

        let mut reporter = DebugToolReporter::new(Vec::new());
        reporter.big_tree(Path::new("/a"), &totals);

        let out = reporter.into_inner();
        let record: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(record["name"], "BIGTREE");
        assert_eq!(record["important"], true);
        assert_eq!(record["value"]["path"], "/a");
        assert_eq!(record["value"]["size"]["total"], 1100);
        assert_eq!(
            record["preview"],
            format!("Path too big ({})", totals.human())
        );
    }

    #[test]
    fn test_dump_record_carries_tree() {
        let mut tree = TreeMap::new();
        tree.insert("f1".into(), bigtree_walk::TreeEntry::File("500 B".into()));

        let mut reporter = DebugToolReporter::new(Vec::new());
        reporter.tree_listing(Path::new("/a"), &tree);

        let out = reporter.into_inner();
        let record: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(record["name"], "DUMPTREE");
        assert_eq!(record["important"], false);
        assert_eq!(record["value"], json!({"f1": "500 B"}));
        assert_eq!(record["preview"], "Listing: /a");
    }
}
