//! Error types raised while loading classifiers or reading their output.

use cafelocate_core::{CafeType, UnknownCafeType};
#[cfg(feature = "forest")]
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while loading a classifier artefact.
///
/// The [`ClassifierHandle`](crate::ClassifierHandle) logs these and falls
/// back to the rule table; they never reach an analysis caller.
#[derive(Debug, Error)]
pub enum ClassifierLoadError {
    /// Reading the artefact file failed.
    #[cfg(feature = "forest")]
    #[error("failed to read classifier artefact at {path}")]
    ReadArtifact {
        /// Artefact path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The artefact was not valid JSON for a forest.
    #[cfg(feature = "forest")]
    #[error("failed to decode classifier artefact at {path}")]
    DecodeArtifact {
        /// Artefact path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The artefact was trained on different features.
    #[error("classifier expects features {found:?}")]
    FeatureNames {
        /// Feature names recorded in the artefact.
        found: Vec<String>,
    },
    /// A class label named no known café type.
    #[error("classifier label is not a cafe type")]
    UnknownLabel(#[from] UnknownCafeType),
    /// A class label appeared twice.
    #[error("classifier label '{0}' appears more than once")]
    DuplicateLabel(CafeType),
    /// The label encoder held no classes.
    #[error("classifier has no class labels")]
    NoLabels,
    /// The forest held no trees.
    #[error("forest has no trees")]
    NoTrees,
    /// A tree node failed validation.
    #[error("tree {tree} node {node} is malformed: {reason}")]
    MalformedNode {
        /// Index of the tree within the forest.
        tree: usize,
        /// Index of the node within the tree.
        node: usize,
        /// What was wrong with the node.
        reason: &'static str,
    },
}

/// Errors raised when a loaded classifier returns unusable output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    /// The probability vector did not match the label encoder.
    #[error("classifier returned {actual} probabilities for {expected} classes")]
    WidthMismatch {
        /// Number of classes known to the encoder.
        expected: usize,
        /// Number of probabilities returned.
        actual: usize,
    },
    /// The predicted class index had no label.
    #[error("class index {index} is outside the {classes} known classes")]
    UnknownClassIndex {
        /// Index returned by the classifier.
        index: usize,
        /// Number of classes known to the encoder.
        classes: usize,
    },
    /// A probability was outside `0.0..=1.0` or not finite.
    #[error("probability {value} for class {index} is invalid")]
    InvalidProbability {
        /// Class position.
        index: usize,
        /// Offending value.
        value: f64,
    },
    /// The probabilities did not sum to one.
    #[error("class probabilities sum to {total}, not 1")]
    UnnormalisedDistribution {
        /// Sum of the returned probabilities.
        total: f64,
    },
}
