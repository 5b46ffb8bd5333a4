pub mod activation;
pub mod error;
pub mod loss;

pub use error::{LossError, Result};
pub use loss::{focal_loss, tversky_loss, FocalLoss, Loss, LossKind, TverskyLoss};
