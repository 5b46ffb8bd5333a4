/// Logistic sigmoid, maps any real logit into (0, 1).
pub fn sigmoid(z: f32) -> f32 {
    1. / (1. + (-z).exp())
}
