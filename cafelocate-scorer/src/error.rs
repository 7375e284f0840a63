//! Errors raised while analysing a site.

use cafelocate_predictor::PredictionError;
use thiserror::Error;

/// Errors raised by [`SiteAnalyzer`](crate::SiteAnalyzer).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// The loaded classifier returned output that could not be decoded.
    #[error("classifier output could not be decoded")]
    Prediction(#[from] PredictionError),
}
