//! Temporary data directories populated with snapshot JSON.

use cafelocate_core::test_support::{KATHMANDU_CENTRE, ward_around};
use cafelocate_core::{FEATURE_NAMES, Ward};
use cafelocate_predictor::{ForestArtifact, NodeArtifact, TreeArtifact};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;
use std::fs;
use tempfile::TempDir;

use crate::analyze::{MODEL_FILE, WARDS_FILE};

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent directories");
    }
    fs::write(path, contents).expect("write file");
}

/// A scratch directory standing in for `--data-dir`.
pub(super) struct DataDir {
    _tmp: TempDir,
    root: Utf8PathBuf,
}

impl DataDir {
    pub(super) fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        Self { _tmp: tmp, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn write_json<T: Serialize + ?Sized>(&self, file_name: &str, value: &T) {
        let payload = serde_json::to_string_pretty(value).expect("serialise fixture");
        write_utf8(&self.root.join(file_name), payload.as_bytes());
    }

    /// A single ward of 20 000 people per km² covering the city centre.
    pub(super) fn write_dense_ward(&self) {
        let wards: Vec<Ward> = vec![ward_around(12, 30_000, 1.5, KATHMANDU_CENTRE, 0.01)];
        self.write_json(WARDS_FILE, &wards);
    }

    /// A one-leaf forest that always predicts a bakery.
    pub(super) fn write_bakery_forest(&self) {
        let artifact = ForestArtifact {
            feature_names: FEATURE_NAMES.iter().map(|name| (*name).to_owned()).collect(),
            classes: vec!["coffee_shop".to_owned(), "bakery".to_owned()],
            trees: vec![TreeArtifact {
                nodes: vec![NodeArtifact::Leaf {
                    distribution: vec![1.0, 3.0],
                }],
            }],
        };
        self.write_json(MODEL_FILE, &artifact);
    }
}
