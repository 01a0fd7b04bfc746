pub mod matrix;
pub mod neural;
pub mod perceptron;
pub mod prelude;
