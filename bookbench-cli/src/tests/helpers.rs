//! Test helpers for writing sample datasets to disk.

use bookbench_core::QueryMeta;
use bookbench_core::test_support::Snapshot;
use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

fn write_json<T: Serialize + ?Sized>(path: &Utf8Path, value: &T) {
    let payload = serde_json::to_vec_pretty(value).expect("serialize dataset file");
    write_utf8(path, &payload);
}

/// The reference dataset written to a temporary directory.
pub(super) struct SampleDataset {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl SampleDataset {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root =
            Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let snapshot = Snapshot::sample();
        let queries: Vec<QueryMeta> = snapshot.queries.iter().cloned().collect();
        write_json(&root.join("apps.json"), &snapshot.apps);
        write_json(&root.join("golden.json"), &snapshot.golden_sets);
        write_json(&root.join("results.json"), &snapshot.result_sets);
        write_json(&root.join("queries.json"), &queries);
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }
}
