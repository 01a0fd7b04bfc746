pub mod activations;
pub mod persist;
pub mod trainer;

use crate::matrix::Matrix;
use crate::prelude::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use self::activations::Activation;

/// A feed-forward network of dense sigmoid (or tanh) layers, trained one
/// example at a time by backpropagation.
#[derive(Debug, Clone, PartialEq)]
pub struct NeuralNetwork {
    input_nodes: usize,
    output_nodes: usize,
    hidden_nodes: Vec<usize>,

    // how the weight changes are scaled
    learning_rate: f32,
    activation: Activation,

    // one weight matrix and one bias column per layer, input to output
    weights: Vec<Matrix>,
    biases: Vec<Matrix>,
}

impl NeuralNetwork {
    /// Creates a network with the given number of input nodes, hidden
    /// layer sizes (input to output order), and output nodes. Every weight
    /// and bias starts as a random value in [-1, 1].
    pub fn new(inputs: usize, hidden: &[usize], outputs: usize) -> Self {
        Self::new_with_rng(inputs, hidden, outputs, &mut rand::thread_rng())
    }

    /// Deterministic variant of [`NeuralNetwork::new`] for reproducible runs.
    pub fn new_with_seed(inputs: usize, hidden: &[usize], outputs: usize, seed: u64) -> Self {
        Self::new_with_rng(inputs, hidden, outputs, &mut StdRng::seed_from_u64(seed))
    }

    pub fn new_with_rng(
        inputs: usize,
        hidden: &[usize],
        outputs: usize,
        rng: &mut impl Rng,
    ) -> Self {
        // hidden layers + 1 for the output layer
        let matrix_count = hidden.len() + 1;

        let mut weights = Vec::with_capacity(matrix_count);
        let mut biases = Vec::with_capacity(matrix_count);

        // each layer's weight matrix maps the previous layer's node count
        // to its own
        let mut last_nodes = inputs;
        for &nodes in hidden.iter().chain(std::iter::once(&outputs)) {
            let mut w = Matrix::new(nodes, last_nodes);
            let mut b = Matrix::new(nodes, 1);
            w.randomize(rng);
            b.randomize(rng);
            weights.push(w);
            biases.push(b);
            last_nodes = nodes;
        }

        Self {
            input_nodes: inputs,
            output_nodes: outputs,
            hidden_nodes: hidden.to_vec(),
            learning_rate: 0.1,
            activation: Activation::Sigmoid,
            weights,
            biases,
        }
    }

    /// Swaps the activation function applied after every layer.
    /// Saved model files don't record this; a loaded network is sigmoid.
    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = activation;
        self
    }

    pub fn learning_rate(&self) -> f32 {
        self.learning_rate
    }

    pub fn set_learning_rate(&mut self, rate: f32) {
        self.learning_rate = rate;
    }

    pub fn input_nodes(&self) -> usize {
        self.input_nodes
    }

    pub fn output_nodes(&self) -> usize {
        self.output_nodes
    }

    pub fn hidden_nodes(&self) -> &[usize] {
        &self.hidden_nodes
    }

    pub fn weights(&self) -> &[Matrix] {
        &self.weights
    }

    pub fn biases(&self) -> &[Matrix] {
        &self.biases
    }

    /// Runs the inputs through every layer and returns the outputs.
    /// Pure given fixed weights; calling it never changes the network.
    pub fn guess(&self, input: &[f32]) -> Result<Vec<f32>> {
        if input.len() != self.input_nodes {
            return Err(Error::DimensionErr);
        }

        let mut layer = Matrix::from_col(input.to_vec());
        for (weights, biases) in self.weights.iter().zip(&self.biases) {
            // weigh the previous layer's outputs, shift by the bias,
            // then squash
            let mut next = weights.product(&layer);
            next += biases;
            next.map(|x| self.activation.call(x));
            layer = next;
        }

        Ok(layer.clone_col_to_vec(0))
    }

    /// One online backpropagation step: runs `input` forward, then walks
    /// the layers backward nudging every bias and weight toward `target`,
    /// scaled by the learning rate.
    pub fn propagate(&mut self, input: &[f32], target: &[f32]) -> Result<()> {
        if input.len() != self.input_nodes || target.len() != self.output_nodes {
            return Err(Error::DimensionErr);
        }

        let input = Matrix::from_col(input.to_vec());
        let target = Matrix::from_col(target.to_vec());

        // feedforward like `guess`, but keep every activated layer output
        let mut layers: Vec<Matrix> = Vec::with_capacity(self.weights.len());
        for i in 0..self.weights.len() {
            let prev = if i == 0 { &input } else { &layers[i - 1] };
            let mut layer = self.weights[i].product(prev);
            layer += &self.biases[i];
            layer.map(|x| self.activation.call(x));
            layers.push(layer);
        }

        let mut error = &target - &layers[self.weights.len() - 1];
        for i in (0..self.weights.len()).rev() {
            // the gradient is the activation derivative of this layer's
            // output, scaled by the error and the learning rate
            let mut gradient = layers[i].clone();
            gradient.map(|x| self.activation.derivative(x));
            gradient *= &error;
            gradient *= self.learning_rate;

            // adjust the bias with this value before building the weight delta
            self.biases[i] += &gradient;

            let prev = if i == 0 { &input } else { &layers[i - 1] };
            let delta = gradient.product(&prev.transposed());
            self.weights[i] += &delta;

            // the layer below's error comes back through this layer's
            // weights, updated ones included
            error = self.weights[i].transposed().product(&error);
        }

        Ok(())
    }

    /// Mean-squared error over a dataset of input/target pairs.
    pub fn mean_squared_error(&self, inputs: &[Vec<f32>], targets: &[Vec<f32>]) -> Result<f32> {
        if inputs.len() != targets.len() {
            return Err(Error::DimensionErr);
        }

        let mut sum = 0.0;
        for (input, target) in inputs.iter().zip(targets) {
            if target.len() != self.output_nodes {
                return Err(Error::DimensionErr);
            }

            let out = self.guess(input)?;
            for (o, t) in out.iter().zip(target) {
                let diff = o - t;
                sum += diff * diff;
            }
        }
        Ok(sum / (inputs.len() * self.output_nodes) as f32)
    }
}
