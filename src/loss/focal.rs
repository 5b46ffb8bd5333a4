use log::warn;
use ndarray::{ArrayView, Dimension};

use super::{check_len, Loss};
use crate::activation::sigmoid;
use crate::Result;

/// Smallest probability admitted into the cross-entropy logs.
///
/// Sigmoid outputs that saturate outside `[EPS, 1 - EPS]` are clamped back
/// into it so the logs stay finite; each affected call reports the clamp
/// through `log::warn!`.
pub(crate) const EPS: f32 = 1e-7;

/// Focal loss for binary segmentation.
///
/// Takes raw logits, applies the sigmoid internally, and modulates the
/// *mean* binary cross-entropy: `alpha * (1 - e^{-bce})^gamma * bce`. The
/// modulation is applied to the already reduced scalar, not per element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocalLoss {
    /// Scale applied to the modulated cross-entropy.
    pub alpha: f32,
    /// Focusing exponent; higher values down-weight easy batches.
    pub gamma: f32,
    /// Accepted for interface parity with the ratio losses; the focal
    /// formula itself does not use it.
    pub smooth: f32,
}

impl FocalLoss {
    /// Returns a new `FocalLoss` with the given hyperparameters.
    pub fn new(alpha: f32, gamma: f32, smooth: f32) -> Self {
        Self {
            alpha,
            gamma,
            smooth,
        }
    }
}

impl Default for FocalLoss {
    fn default() -> Self {
        Self::new(0.8, 2.0, 1.0)
    }
}

impl Loss for FocalLoss {
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

        let n = predictions.len();
        if n == 0 {
            return Ok(0.);
        }

        let mut saturated = 0;
        let mut log_likelihood = 0.;
        for (&z, &t) in predictions.iter().zip(targets.iter()) {
            let mut p = sigmoid(z);
            if !(EPS..=1. - EPS).contains(&p) {
                saturated += 1;
                p = p.clamp(EPS, 1. - EPS);
            }

            log_likelihood += t * p.ln() + (1. - t) * (1. - p).ln();
        }

        if saturated > 0 {
            warn!("focal loss: clamped {saturated} of {n} saturated probabilities");
        }

        let bce = -log_likelihood / n as f32;
        let bce_exp = (-bce).exp();

        Ok(self.alpha * (1. - bce_exp).powf(self.gamma) * bce)
    }
}

/// One-shot focal loss with explicit hyperparameters.
///
/// The reference defaults are `alpha = 0.8`, `gamma = 2.0`, `smooth = 1.0`
/// (available through `FocalLoss::default`).
pub fn focal_loss<D1, D2>(
    predictions: ArrayView<f32, D1>,
    targets: ArrayView<f32, D2>,
    alpha: f32,
    gamma: f32,
    smooth: f32,
) -> Result<f32>
where
    D1: Dimension,
    D2: Dimension,
{
    FocalLoss::new(alpha, gamma, smooth).evaluate(predictions, targets)
}

#[cfg(test)]
mod tests {
    use ndarray::Array1;

    use super::*;
    use crate::LossError;

    #[test]
    fn default_matches_reference_hyperparameters() {
        let loss = FocalLoss::default();

        assert_eq!(loss.alpha, 0.8);
        assert_eq!(loss.gamma, 2.0);
        assert_eq!(loss.smooth, 1.0);
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let predictions = Array1::<f32>::zeros(10);
        let targets = Array1::<f32>::zeros(8);

        let err = FocalLoss::default()
            .evaluate(predictions.view(), targets.view())
            .unwrap_err();

        assert_eq!(
            err,
            LossError::ShapeMismatch {
                predictions: 10,
                targets: 8,
            }
        );
    }

    #[test]
    fn empty_inputs_evaluate_to_zero() {
        let empty = Array1::<f32>::zeros(0);

        let loss = FocalLoss::default()
            .evaluate(empty.view(), empty.view())
            .unwrap();

        assert_eq!(loss, 0.);
    }

    #[test]
    fn saturated_logits_stay_finite() {
        let predictions = Array1::from_vec(vec![60., -60.]);
        let targets = Array1::from_vec(vec![0., 1.]);

        let loss = FocalLoss::default()
            .evaluate(predictions.view(), targets.view())
            .unwrap();

        assert!(loss.is_finite());
        assert!(loss > 0.);
    }

    #[test]
    fn confident_wrong_batch_is_penalized_hard() {
        let predictions = Array1::from_vec(vec![10.; 4]);
        let targets = Array1::<f32>::zeros(4);

        let loss = focal_loss(predictions.view(), targets.view(), 0.8, 2.0, 1.0).unwrap();

        // BCE is about 10 nats here, so the modulated loss stays close to
        // alpha * BCE.
        assert!(loss > 5.);
    }
}
