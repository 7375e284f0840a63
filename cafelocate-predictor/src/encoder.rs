//! Mapping between classifier class indices and café types.

use std::str::FromStr;

use cafelocate_core::CafeType;

use crate::ClassifierLoadError;

/// Decodes class indices into café types.
///
/// # Examples
/// ```
/// use cafelocate_core::CafeType;
/// use cafelocate_predictor::LabelEncoder;
///
/// let encoder = LabelEncoder::from_labels(&["bakery", "coffee_shop"]).expect("known labels");
/// assert_eq!(encoder.decode(1), Some(CafeType::CoffeeShop));
/// assert_eq!(encoder.decode(2), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelEncoder {
    classes: Vec<CafeType>,
}

impl LabelEncoder {
    /// Build an encoder from café types in class-index order.
    ///
    /// # Errors
    /// Returns [`ClassifierLoadError::NoLabels`] for an empty list and
    /// [`ClassifierLoadError::DuplicateLabel`] when a type repeats.
    pub fn new(classes: Vec<CafeType>) -> Result<Self, ClassifierLoadError> {
        if classes.is_empty() {
            return Err(ClassifierLoadError::NoLabels);
        }
        for (position, class) in classes.iter().enumerate() {
            if classes.iter().skip(position + 1).any(|other| other == class) {
                return Err(ClassifierLoadError::DuplicateLabel(*class));
            }
        }
        Ok(Self { classes })
    }

    /// Build an encoder from snake-case labels in class-index order.
    ///
    /// # Errors
    /// Returns [`ClassifierLoadError::UnknownLabel`] for labels that name no
    /// café type, plus the errors of [`LabelEncoder::new`].
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Result<Self, ClassifierLoadError> {
        let classes = labels
            .iter()
            .map(|label| CafeType::from_str(label.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(classes)
    }

    /// Return the café type for a class index.
    #[must_use]
    pub fn decode(&self, index: usize) -> Option<CafeType> {
        self.classes.get(index).copied()
    }

    /// Café types in class-index order.
    #[must_use]
    pub fn classes(&self) -> &[CafeType] {
        &self.classes
    }

    /// Number of classes; never zero.
    #[expect(
        clippy::len_without_is_empty,
        reason = "encoders always hold at least one class"
    )]
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }
}
