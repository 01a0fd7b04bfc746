use super::NeuralNetwork;
use crate::prelude::*;

/// Drives repeated online training passes over a dataset.
pub struct Trainer {
    iterations: usize,
    iterations_per_log: Option<usize>,
}

impl Trainer {
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations,
            iterations_per_log: None,
        }
    }

    /// Prints the current error every `iterations_per_log` iterations.
    pub fn with_log(mut self, iterations_per_log: Option<usize>) -> Self {
        self.iterations_per_log = iterations_per_log;
        self
    }

    pub fn set_iterations(&mut self, iterations: usize) {
        self.iterations = iterations;
    }

    /// Runs every input/target pair through `net.propagate` once per
    /// iteration, in dataset order, one example at a time.
    pub fn train(
        &self,
        net: &mut NeuralNetwork,
        inputs: &[Vec<f32>],
        targets: &[Vec<f32>],
    ) -> Result<()> {
        if inputs.len() != targets.len() {
            return Err(Error::DimensionErr);
        }

        for i in 0..self.iterations {
            for (input, target) in inputs.iter().zip(targets) {
                net.propagate(input, target)?;
            }

            if self.iterations_per_log.is_some_and(|ipl| i % ipl == 0) {
                let mse = net.mean_squared_error(inputs, targets)?;
                println!("Iteration {i} error: {mse}");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn training_reduces_error() {
        let mut net = NeuralNetwork::new_with_seed(2, &[3], 1, 2);
        net.set_learning_rate(0.5);

        // OR truth table
        let inputs: Vec<Vec<f32>> = vec![
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 0.0],
            vec![1.0, 1.0],
        ];
        let targets: Vec<Vec<f32>> = vec![vec![0.0], vec![1.0], vec![1.0], vec![1.0]];

        let before = net.mean_squared_error(&inputs, &targets).unwrap();

        let trainer = Trainer::new(2_000);
        assert_eq!(Ok(()), trainer.train(&mut net, &inputs, &targets));

        let after = net.mean_squared_error(&inputs, &targets).unwrap();
        println!("error {before} -> {after}");
        assert!(after < before);
        assert!(after < 0.05);
    }

    #[test]
    fn mismatched_dataset_lengths_are_rejected() {
        let mut net = NeuralNetwork::new_with_seed(2, &[2], 1, 0);
        let inputs = vec![vec![0.0, 0.0], vec![1.0, 1.0]];
        let targets = vec![vec![0.0]];

        let trainer = Trainer::new(1);
        assert_eq!(
            trainer.train(&mut net, &inputs, &targets),
            Err(Error::DimensionErr)
        );
    }
}
