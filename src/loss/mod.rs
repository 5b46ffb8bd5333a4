mod focal;
mod loss_fn;
mod tversky;

pub use focal::{focal_loss, FocalLoss};
pub use loss_fn::{Loss, LossKind};
pub use tversky::{tversky_loss, TverskyLoss};

use crate::error::{LossError, Result};

/// Checks that both flattened tensors hold the same number of elements.
pub(crate) fn check_len(predictions: usize, targets: usize) -> Result<()> {
    if predictions != targets {
        return Err(LossError::ShapeMismatch {
            predictions,
            targets,
        });
    }

    Ok(())
}
