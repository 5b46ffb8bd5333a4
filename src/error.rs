use std::fmt;

/// The result type used in the entire loss module.
pub type Result<T> = std::result::Result<T, LossError>;

/// Errors produced when loss inputs are invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossError {
    /// The flattened element counts of the two input tensors differ.
    ShapeMismatch {
        /// Flattened element count of the prediction tensor.
        predictions: usize,
        /// Flattened element count of the target tensor.
        targets: usize,
    },
}

impl fmt::Display for LossError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LossError::ShapeMismatch {
                predictions,
                targets,
            } => {
                write!(
                    f,
                    "shape mismatch: predictions flatten to {predictions} elements, targets to {targets}"
                )
            }
        }
    }
}

impl std::error::Error for LossError {}
