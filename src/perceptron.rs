use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A single neuron trained by the perceptron learning rule. The simplest
/// possible classifier: a weighted sum pushed through `sign`, no bias
/// term, no matrices involved.
#[derive(Debug, Clone, PartialEq)]
pub struct Perceptron {
    weights: Vec<f32>,
    learning_rate: f32,
}

impl Perceptron {
    /// Creates a perceptron with `count` weights, each a random value
    /// in [-1, 1].
    pub fn new(count: usize) -> Self {
        Self::new_with_rng(count, &mut rand::thread_rng())
    }

    /// Deterministic variant of [`Perceptron::new`] for reproducible runs.
    pub fn new_with_seed(count: usize, seed: u64) -> Self {
        Self::new_with_rng(count, &mut StdRng::seed_from_u64(seed))
    }

    pub fn new_with_rng(count: usize, rng: &mut impl Rng) -> Self {
        let die = Uniform::from(-1.0f32..=1.0);

        Self {
            weights: (0..count).map(|_| die.sample(rng)).collect(),
            learning_rate: 0.1,
        }
    }

    /// Classifies the inputs as -1 or +1 by the sign of their weighted sum.
    pub fn guess(&self, inputs: &[f32]) -> i32 {
        let sum: f32 = inputs.iter().zip(&self.weights).map(|(i, w)| i * w).sum();
        sign(sum)
    }

    /// One learning step: nudges every weight by the guessing error,
    /// scaled by the matching input and the learning rate.
    pub fn teach(&mut self, inputs: &[f32], goal: i32) {
        let error = (goal - self.guess(inputs)) as f32;

        for (w, i) in self.weights.iter_mut().zip(inputs) {
            *w += error * i * self.learning_rate;
        }
    }
}

/// -1 for negative values, +1 for everything else, zero included.
fn sign(n: f32) -> i32 {
    if n < 0.0 {
        -1
    } else {
        1
    }
}
