//! The classifier seam and its lazily loaded handle.

use std::fmt;
use std::sync::OnceLock;

use log::{debug, warn};

use crate::{ClassifierLoadError, LabelEncoder};

/// Raw classifier output for one feature vector.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassScores {
    /// Index of the predicted class.
    pub class_index: usize,
    /// Probability per class, in class-index order.
    pub probabilities: Vec<f64>,
}

/// A trained café-type classifier.
///
/// Implementations receive features in
/// [`FEATURE_NAMES`](cafelocate_core::FEATURE_NAMES) order.
pub trait Classifier: Send + Sync {
    /// Score one feature vector.
    fn predict(&self, features: [f64; 4]) -> ClassScores;
}

/// A classifier paired with the encoder that names its classes.
pub struct TrainedModel {
    classifier: Box<dyn Classifier>,
    encoder: LabelEncoder,
}

impl TrainedModel {
    /// Pair a classifier with its label encoder.
    #[must_use]
    pub fn new(classifier: impl Classifier + 'static, encoder: LabelEncoder) -> Self {
        Self {
            classifier: Box::new(classifier),
            encoder,
        }
    }

    /// The classifier.
    #[must_use]
    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }

    /// The label encoder.
    #[must_use]
    pub const fn encoder(&self) -> &LabelEncoder {
        &self.encoder
    }
}

impl fmt::Debug for TrainedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrainedModel")
            .field("classes", &self.encoder.classes())
            .finish_non_exhaustive()
    }
}

/// Produces a [`TrainedModel`] on first use.
///
/// `Ok(None)` means no artefact exists; the handle then stays on the rule
/// table for its lifetime.
pub trait ClassifierLoader: Send + Sync {
    /// Load the model, if one is available.
    ///
    /// # Errors
    /// Returns [`ClassifierLoadError`] when an artefact exists but cannot be
    /// used.
    fn load(&self) -> Result<Option<TrainedModel>, ClassifierLoadError>;
}

impl<F> ClassifierLoader for F
where
    F: Fn() -> Result<Option<TrainedModel>, ClassifierLoadError> + Send + Sync,
{
    fn load(&self) -> Result<Option<TrainedModel>, ClassifierLoadError> {
        self()
    }
}

/// Whether a handle resolved to a trained model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelState {
    /// Predictions come from the rule table.
    NoModelLoaded,
    /// Predictions come from the trained model.
    ModelLoaded,
}

/// Owns an optional classifier and loads it at most once.
///
/// The first call to [`ClassifierHandle::model`] runs the loader; concurrent
/// first callers block until it finishes and later calls read the stored
/// result without locking. A failed or empty load is permanent.
///
/// # Examples
/// ```
/// use cafelocate_predictor::{ClassifierHandle, ModelState};
///
/// let handle = ClassifierHandle::absent();
/// assert_eq!(handle.state(), ModelState::NoModelLoaded);
/// ```
pub struct ClassifierHandle {
    loader: Option<Box<dyn ClassifierLoader>>,
    model: OnceLock<Option<TrainedModel>>,
}

impl ClassifierHandle {
    /// A handle that loads lazily through `loader`.
    #[must_use]
    pub fn new(loader: impl ClassifierLoader + 'static) -> Self {
        Self {
            loader: Some(Box::new(loader)),
            model: OnceLock::new(),
        }
    }

    /// A handle that never has a model.
    #[must_use]
    pub fn absent() -> Self {
        Self {
            loader: None,
            model: OnceLock::from(None),
        }
    }

    /// A handle holding an already constructed model.
    #[must_use]
    pub fn with_model(model: TrainedModel) -> Self {
        Self {
            loader: None,
            model: OnceLock::from(Some(model)),
        }
    }

    /// Return the model, running the loader on first use.
    pub fn model(&self) -> Option<&TrainedModel> {
        self.model.get_or_init(|| self.resolve()).as_ref()
    }

    /// Resolve the handle and report its state.
    pub fn state(&self) -> ModelState {
        if self.model().is_some() {
            ModelState::ModelLoaded
        } else {
            ModelState::NoModelLoaded
        }
    }

    fn resolve(&self) -> Option<TrainedModel> {
        let loader = self.loader.as_ref()?;
        match loader.load() {
            Ok(Some(model)) => Some(model),
            Ok(None) => {
                debug!("no classifier artefact available; using rule fallback");
                None
            }
            Err(err) => {
                warn!("ignoring unusable classifier artefact: {err}");
                None
            }
        }
    }
}

impl fmt::Debug for ClassifierHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassifierHandle")
            .field("has_loader", &self.loader.is_some())
            .field("model", &self.model.get())
            .finish()
    }
}
