use log::warn;
use ndarray::{ArrayView, Dimension};

use super::{check_len, Loss};
use crate::activation::sigmoid;
use crate::Result;

/// Tversky loss for binary segmentation.
///
/// One minus the Tversky index over soft overlap counts, with `alpha`
/// weighting false positives and `beta` weighting false negatives.
/// `alpha = beta = 0.5` reduces it to the Dice loss. Takes raw logits and
/// applies the sigmoid internally.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TverskyLoss {
    /// False-positive weight.
    pub alpha: f32,
    /// False-negative weight.
    pub beta: f32,
    /// Additive constant keeping the index defined when all counts are zero.
    pub smooth: f32,
}

impl TverskyLoss {
    /// Returns a new `TverskyLoss` with the given hyperparameters.
    pub fn new(alpha: f32, beta: f32, smooth: f32) -> Self {
        Self {
            alpha,
            beta,
            smooth,
        }
    }
}

impl Default for TverskyLoss {
    fn default() -> Self {
        Self::new(0.5, 0.5, 1.0)
    }
}

impl Loss for TverskyLoss {
    fn evaluate<D1, D2>(
        &self,
        predictions: ArrayView<f32, D1>,
        targets: ArrayView<f32, D2>,
    ) -> Result<f32>
    where
        D1: Dimension,
        D2: Dimension,
    {
        check_len(predictions.len(), targets.len())?;

        let mut true_pos = 0.;
        let mut false_pos = 0.;
        let mut false_neg = 0.;
        for (&z, &t) in predictions.iter().zip(targets.iter()) {
            let p = sigmoid(z);

            true_pos += p * t;
            false_pos += (1. - t) * p;
            false_neg += t * (1. - p);
        }

        let denominator = true_pos + self.alpha * false_pos + self.beta * false_neg + self.smooth;
        if denominator == 0. {
            // Only reachable with smooth = 0 and no overlap mass at all; an
            // empty prediction of an empty target counts as perfect.
            warn!("tversky loss: zero denominator with smooth = {}", self.smooth);
            return Ok(0.);
        }

        Ok(1. - (true_pos + self.smooth) / denominator)
    }
}

/// One-shot Tversky loss with explicit hyperparameters.
///
/// The reference defaults are `alpha = beta = 0.5`, `smooth = 1.0`
/// (available through `TverskyLoss::default`).
pub fn tversky_loss<D1, D2>(
    predictions: ArrayView<f32, D1>,
    targets: ArrayView<f32, D2>,
    alpha: f32,
    beta: f32,
    smooth: f32,
) -> Result<f32>
where
    D1: Dimension,
    D2: Dimension,
{
    TverskyLoss::new(alpha, beta, smooth).evaluate(predictions, targets)
}
