use ndarray::{ArrayView, Dimension};

use super::{FocalLoss, TverskyLoss};
use crate::Result;
use LossKind::*;

/// A scalar loss over a pair of equally sized prediction/target tensors.
///
/// Implementations take raw logits, apply their own activation, and reduce
/// to a single `f32`. Views of any dimensionality are accepted; only the
/// flattened element counts have to match.
pub trait Loss {
    /// Evaluates the loss for `predictions` against `targets`.
    ///
    /// # Errors
    /// Returns `LossError::ShapeMismatch` when the flattened element counts
    /// of the two views differ.
    fn evaluate<D1, D2>(
        &self,
        predictions: ArrayView<f32, D1>,
        targets: ArrayView<f32, D2>,
    ) -> Result<f32>
    where
        D1: Dimension,
        D2: Dimension;
}

/// The loss functions available to a training loop, as one dispatchable value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LossKind {
    Focal(FocalLoss),
    Tversky(TverskyLoss),
}

impl LossKind {
    pub fn focal(alpha: f32, gamma: f32, smooth: f32) -> Self {
        Focal(FocalLoss::new(alpha, gamma, smooth))
    }

    pub fn tversky(alpha: f32, beta: f32, smooth: f32) -> Self {
        Tversky(TverskyLoss::new(alpha, beta, smooth))
    }

    pub fn evaluate<D1, D2>(
        &self,
        predictions: ArrayView<f32, D1>,
        targets: ArrayView<f32, D2>,
    ) -> Result<f32>
    where
        D1: Dimension,
        D2: Dimension,
    {
        match self {
            Focal(l) => l.evaluate(predictions, targets),
            Tversky(l) => l.evaluate(predictions, targets),
        }
    }
}
