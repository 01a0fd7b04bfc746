/// Element-wise nonlinearities applied after each linear layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Sigmoid,
    Tanh,
}

impl Activation {
    /// Returns activation function at x
    pub fn call(&self, x: f32) -> f32 {
        match self {
            Activation::Sigmoid => {
                let ex = x.exp();
                ex / (ex + 1.0)
            }
            Activation::Tanh => x.tanh(),
        }
    }

    /// Returns derivative of activation function with respect to the function at x.
    /// For example, if our activation is sigmoid, then we would express the
    /// derivative as `a_x * (1 - a_x)` instead of `sigmoid(x)(1 - sigmoid(x))`.
    /// Callers must only pass in values that already went through `call`.
    pub fn derivative(&self, a_x: f32) -> f32 {
        match self {
            Activation::Sigmoid => a_x * (1.0 - a_x),
            Activation::Tanh => 1.0 - a_x * a_x,
        }
    }
}
