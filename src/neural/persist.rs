//! Saving and loading trained networks.
//!
//! # Model file layout
//! ```text
//! bytes 0-7:  b"badmlpnn"  (magic identifier)
//! i32:        input node count
//! i32:        output node count
//! f32:        learning rate
//! i32:        hidden layer count H
//! H * i32:    hidden layer sizes, input to output order
//! i32:        matrix count M = H + 1
//! M matrices: weights, each row-major f32, shapes derived from the topology
//! M matrices: biases, each row-major f32, shape (layer size, 1)
//! ```
//!
//! All scalars are 4 bytes in native byte order with no padding. There is
//! no version field, so the layout can never change without breaking every
//! file already on disk. Matrix shapes are never stored; the reader
//! recomputes them from the topology counts.

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use super::activations::Activation;
use super::NeuralNetwork;
use crate::matrix::Matrix;
use crate::prelude::*;

/// First eight bytes of every saved model file.
pub const FILE_MAGIC: [u8; 8] = *b"badmlpnn";

impl NeuralNetwork {
    /// Writes the topology, learning rate, and every weight and bias to
    /// `path`. Fails if the file can't be created or written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut w = BufWriter::new(file);

        w.write_all(&FILE_MAGIC)?;
        write_i32(&mut w, self.input_nodes as i32)?;
        write_i32(&mut w, self.output_nodes as i32)?;
        write_f32(&mut w, self.learning_rate)?;
        write_i32(&mut w, self.hidden_nodes.len() as i32)?;
        for &nodes in &self.hidden_nodes {
            write_i32(&mut w, nodes as i32)?;
        }

        write_i32(&mut w, self.weights.len() as i32)?;
        for m in &self.weights {
            write_matrix(&mut w, m)?;
        }
        for m in &self.biases {
            write_matrix(&mut w, m)?;
        }

        w.flush()?;
        Ok(())
    }

    /// Reads a network back from a file written by [`NeuralNetwork::save`].
    /// Fails without constructing anything if the file can't be opened or
    /// its first eight bytes aren't the model magic. The activation isn't
    /// part of the format, so the loaded network uses the sigmoid default.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<NeuralNetwork> {
        let file = File::open(path)?;
        let mut r = BufReader::new(file);

        let mut magic = [0u8; 8];
        r.read_exact(&mut magic)?;
        if magic != FILE_MAGIC {
            return Err(Error::BadMagic);
        }

        let input_nodes = read_count(&mut r)?;
        let output_nodes = read_count(&mut r)?;
        let learning_rate = read_f32(&mut r)?;

        let hidden_layers = read_count(&mut r)?;
        let mut hidden_nodes = Vec::with_capacity(hidden_layers);
        for _ in 0..hidden_layers {
            hidden_nodes.push(read_count(&mut r)?);
        }

        let matrix_count = read_count(&mut r)?;
        if matrix_count != hidden_layers + 1 {
            return Err(Error::IoErr(ErrorKind::InvalidData));
        }

        // every matrix shape follows from the topology
        let mut shapes = Vec::with_capacity(matrix_count);
        let mut last_nodes = input_nodes;
        for &nodes in hidden_nodes.iter().chain(std::iter::once(&output_nodes)) {
            shapes.push((nodes, last_nodes));
            last_nodes = nodes;
        }

        let mut weights = Vec::with_capacity(matrix_count);
        for &(rows, cols) in &shapes {
            weights.push(read_matrix(&mut r, rows, cols)?);
        }
        let mut biases = Vec::with_capacity(matrix_count);
        for &(rows, _) in &shapes {
            biases.push(read_matrix(&mut r, rows, 1)?);
        }

        Ok(NeuralNetwork {
            input_nodes,
            output_nodes,
            hidden_nodes,
            learning_rate,
            activation: Activation::Sigmoid,
            weights,
            biases,
        })
    }
}

fn write_i32<W: Write>(w: &mut W, v: i32) -> Result<()> {
    w.write_all(&v.to_ne_bytes())?;
    Ok(())
}

fn write_f32<W: Write>(w: &mut W, v: f32) -> Result<()> {
    w.write_all(&v.to_ne_bytes())?;
    Ok(())
}

fn write_matrix<W: Write>(w: &mut W, m: &Matrix) -> Result<()> {
    for row in 0..m.rows() {
        for col in 0..m.cols() {
            write_f32(w, m[row][col])?;
        }
    }
    Ok(())
}

fn read_i32<R: Read>(r: &mut R) -> Result<i32> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(i32::from_ne_bytes(buf))
}

fn read_f32<R: Read>(r: &mut R) -> Result<f32> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(f32::from_ne_bytes(buf))
}

/// Reads an i32 count field, rejecting negatives.
fn read_count<R: Read>(r: &mut R) -> Result<usize> {
    usize::try_from(read_i32(r)?).map_err(|_| Error::IoErr(ErrorKind::InvalidData))
}

fn read_matrix<R: Read>(r: &mut R, rows: usize, cols: usize) -> Result<Matrix> {
    let mut m = Matrix::new(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            m[row][col] = read_f32(r)?;
        }
    }
    Ok(m)
}
