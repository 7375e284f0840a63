//! A decision forest loaded from a JSON artefact.
//!
//! The artefact records the feature names it was trained on, its class
//! labels in class-index order, and a list of trees. Each tree is a flat
//! node list rooted at index 0:
//!
//! ```json
//! {
//!   "feature_names": ["competitor_count", "avg_competitor_rating",
//!                     "road_length_m", "population_density"],
//!   "classes": ["coffee_shop", "restaurant"],
//!   "trees": [
//!     {"nodes": [
//!       {"kind": "split", "feature": 3, "threshold": 12000.0, "left": 1, "right": 2},
//!       {"kind": "leaf", "distribution": [1.0, 3.0]},
//!       {"kind": "leaf", "distribution": [4.0, 0.0]}
//!     ]}
//!   ]
//! }
//! ```
//!
//! A split sends a sample left when its feature is `<=` the threshold.
//! Children must come after their parent, so every walk terminates. Leaf
//! distributions are normalised when the forest is built and the forest
//! output is the mean over trees.

use cafelocate_core::FEATURE_NAMES;
use cafelocate_fs::{file_is_file, read_to_string};
use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{
    ClassScores, Classifier, ClassifierLoadError, ClassifierLoader, LabelEncoder, TrainedModel,
};

/// Serialised forest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestArtifact {
    /// Feature names in training order.
    pub feature_names: Vec<String>,
    /// Class labels in class-index order.
    pub classes: Vec<String>,
    /// Trees of the forest.
    pub trees: Vec<TreeArtifact>,
}

/// Serialised tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeArtifact {
    /// Nodes, root first.
    pub nodes: Vec<NodeArtifact>,
}

/// Serialised tree node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeArtifact {
    /// Threshold test on one feature.
    Split {
        /// Feature position.
        feature: usize,
        /// Samples with `feature <= threshold` go left.
        threshold: f64,
        /// Node index for the left branch.
        left: usize,
        /// Node index for the right branch.
        right: usize,
    },
    /// Terminal class weights.
    Leaf {
        /// Weight per class; normalised on load.
        distribution: Vec<f64>,
    },
}

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf(Vec<f64>),
}

#[derive(Debug, Clone, PartialEq)]
struct DecisionTree {
    nodes: Vec<Node>,
}

impl DecisionTree {
    fn leaf_for(&self, features: &[f64; 4]) -> &[f64] {
        let mut index = 0;
        loop {
            match self.nodes.get(index) {
                Some(Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let value = features.get(*feature).copied().unwrap_or(f64::NAN);
                    index = if value <= *threshold { *left } else { *right };
                }
                Some(Node::Leaf(distribution)) => return distribution,
                None => return &[],
            }
        }
    }
}

/// A validated decision forest.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomForest {
    trees: Vec<DecisionTree>,
    class_count: usize,
}

impl RandomForest {
    /// Number of trees.
    #[must_use]
    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }
}

impl ForestArtifact {
    /// Validate the artefact and build a model from it.
    ///
    /// # Errors
    /// Returns [`ClassifierLoadError`] when the feature names differ from
    /// [`FEATURE_NAMES`], a label is unknown or repeated, the forest is
    /// empty, or a node is malformed.
    pub fn into_model(self) -> Result<TrainedModel, ClassifierLoadError> {
        if !self.feature_names.iter().eq(FEATURE_NAMES.iter()) {
            return Err(ClassifierLoadError::FeatureNames {
                found: self.feature_names,
            });
        }
        let encoder = LabelEncoder::from_labels(&self.classes)?;
        if self.trees.is_empty() {
            return Err(ClassifierLoadError::NoTrees);
        }
        let class_count = encoder.len();
        let trees = self
            .trees
            .into_iter()
            .enumerate()
            .map(|(tree, artifact)| build_tree(tree, artifact, class_count))
            .collect::<Result<Vec<_>, _>>()?;
        let forest = RandomForest { trees, class_count };
        Ok(TrainedModel::new(forest, encoder))
    }
}

fn build_tree(
    tree: usize,
    artifact: TreeArtifact,
    class_count: usize,
) -> Result<DecisionTree, ClassifierLoadError> {
    let node_count = artifact.nodes.len();
    if node_count == 0 {
        return Err(ClassifierLoadError::MalformedNode {
            tree,
            node: 0,
            reason: "tree has no nodes",
        });
    }
    let malformed = |node, reason| ClassifierLoadError::MalformedNode { tree, node, reason };
    let nodes = artifact
        .nodes
        .into_iter()
        .enumerate()
        .map(|(index, node)| match node {
            NodeArtifact::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                if feature >= FEATURE_NAMES.len() {
                    return Err(malformed(index, "split feature out of range"));
                }
                if !threshold.is_finite() {
                    return Err(malformed(index, "split threshold is not finite"));
                }
                let child_ok = |child: usize| child > index && child < node_count;
                if !child_ok(left) || !child_ok(right) {
                    return Err(malformed(index, "child must follow its parent"));
                }
                Ok(Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                })
            }
            NodeArtifact::Leaf { distribution } => {
                normalise_leaf(distribution, class_count)
                    .map(Node::Leaf)
                    .ok_or_else(|| malformed(index, "leaf distribution is unusable"))
            }
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(DecisionTree { nodes })
}

#[expect(clippy::float_arithmetic, reason = "normalising leaf weights")]
fn normalise_leaf(distribution: Vec<f64>, class_count: usize) -> Option<Vec<f64>> {
    if distribution.len() != class_count
        || distribution
            .iter()
            .any(|weight| !weight.is_finite() || *weight < 0.0)
    {
        return None;
    }
    let total: f64 = distribution.iter().sum();
    (total > 0.0).then(|| distribution.into_iter().map(|weight| weight / total).collect())
}

impl Classifier for RandomForest {
    #[expect(clippy::float_arithmetic, reason = "averaging tree outputs")]
    #[expect(
        clippy::cast_precision_loss,
        reason = "tree counts are far below 2^52"
    )]
    fn predict(&self, features: [f64; 4]) -> ClassScores {
        let mut probabilities = vec![0.0; self.class_count];
        for tree in &self.trees {
            for (sum, weight) in probabilities.iter_mut().zip(tree.leaf_for(&features)) {
                *sum += weight;
            }
        }
        let tree_count = self.trees.len() as f64;
        for probability in &mut probabilities {
            *probability /= tree_count;
        }
        let class_index = probabilities
            .iter()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |best, (index, &value)| {
                if value > best.1 { (index, value) } else { best }
            })
            .0;
        ClassScores {
            class_index,
            probabilities,
        }
    }
}

/// Loads a [`ForestArtifact`] from a JSON file.
///
/// A missing file means there is no model. A file that exists but cannot be
/// read or decoded is an error, which the handle logs before falling back to
/// the rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForestLoader {
    path: Utf8PathBuf,
}

impl ForestLoader {
    /// Load from `path` on first use.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Artefact location.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn read_error(&self, source: std::io::Error) -> ClassifierLoadError {
        ClassifierLoadError::ReadArtifact {
            path: self.path.clone(),
            source,
        }
    }
}

impl ClassifierLoader for ForestLoader {
    fn load(&self) -> Result<Option<TrainedModel>, ClassifierLoadError> {
        match file_is_file(&self.path) {
            Ok(true) => {}
            Ok(false) => {
                debug!("no forest artefact at {}", self.path);
                return Ok(None);
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("no forest artefact at {}", self.path);
                return Ok(None);
            }
            Err(err) => return Err(self.read_error(err)),
        }
        let text = read_to_string(&self.path).map_err(|err| self.read_error(err))?;
        let artifact: ForestArtifact =
            serde_json::from_str(&text).map_err(|source| ClassifierLoadError::DecodeArtifact {
                path: self.path.clone(),
                source,
            })?;
        let tree_count = artifact.trees.len();
        let model = artifact.into_model()?;
        info!(
            "loaded forest classifier from {} ({tree_count} trees, {} classes)",
            self.path,
            model.encoder().len()
        );
        Ok(Some(model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cafelocate_core::CafeType;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn artifact() -> ForestArtifact {
        serde_json::from_value(json!({
            "feature_names": FEATURE_NAMES,
            "classes": ["coffee_shop", "restaurant"],
            "trees": [
                {"nodes": [
                    {"kind": "split", "feature": 3, "threshold": 12000.0, "left": 1, "right": 2},
                    {"kind": "leaf", "distribution": [1.0, 3.0]},
                    {"kind": "leaf", "distribution": [4.0, 0.0]}
                ]},
                {"nodes": [
                    {"kind": "leaf", "distribution": [1.0, 1.0]}
                ]}
            ]
        }))
        .expect("valid artefact JSON")
    }

    #[rstest]
    fn averages_tree_outputs(artifact: ForestArtifact) {
        let model = artifact.into_model().expect("valid forest");
        let dense = model.classifier().predict([0.0, 0.0, 0.0, 20_000.0]);
        assert_eq!(dense.class_index, 0);
        assert_eq!(dense.probabilities, vec![0.75, 0.25]);
        let sparse = model.classifier().predict([0.0, 0.0, 0.0, 12_000.0]);
        assert_eq!(sparse.class_index, 1);
        assert_eq!(sparse.probabilities, vec![0.375, 0.625]);
        assert_eq!(model.encoder().decode(1), Some(CafeType::Restaurant));
    }

    #[rstest]
    fn ties_resolve_to_the_first_class(mut artifact: ForestArtifact) {
        artifact.trees.truncate(0);
        artifact.trees.push(TreeArtifact {
            nodes: vec![NodeArtifact::Leaf {
                distribution: vec![2.0, 2.0],
            }],
        });
        let model = artifact.into_model().expect("valid forest");
        assert_eq!(model.classifier().predict([0.0; 4]).class_index, 0);
    }

    #[rstest]
    fn rejects_foreign_feature_names(mut artifact: ForestArtifact) {
        artifact.feature_names.reverse();
        assert!(matches!(
            artifact.into_model(),
            Err(ClassifierLoadError::FeatureNames { .. })
        ));
    }

    #[rstest]
    fn rejects_empty_forests(mut artifact: ForestArtifact) {
        artifact.trees.clear();
        assert!(matches!(
            artifact.into_model(),
            Err(ClassifierLoadError::NoTrees)
        ));
    }

    #[rstest]
    #[case(NodeArtifact::Split { feature: 0, threshold: 1.0, left: 0, right: 2 }, "child must follow its parent")]
    #[case(NodeArtifact::Split { feature: 9, threshold: 1.0, left: 1, right: 2 }, "split feature out of range")]
    #[case(NodeArtifact::Split { feature: 0, threshold: f64::NAN, left: 1, right: 2 }, "split threshold is not finite")]
    #[case(NodeArtifact::Leaf { distribution: vec![1.0] }, "leaf distribution is unusable")]
    #[case(NodeArtifact::Leaf { distribution: vec![0.0, 0.0] }, "leaf distribution is unusable")]
    fn rejects_malformed_roots(
        mut artifact: ForestArtifact,
        #[case] root: NodeArtifact,
        #[case] expected: &str,
    ) {
        if let Some(tree) = artifact.trees.first_mut() {
            tree.nodes[0] = root;
        }
        match artifact.into_model() {
            Err(ClassifierLoadError::MalformedNode { tree: 0, node: 0, reason }) => {
                assert_eq!(reason, expected);
            }
            other => panic!("expected malformed root, got {other:?}"),
        }
    }
}
