#[cfg(test)]
#[path = "../../tests/unit/models/matrix_test.rs"]
mod matrix_test;

use crate::models::common::Cost;

/// A square matrix of travel costs in row major layout.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CostMatrix {
    size: usize,
    data: Vec<Cost>,
}

impl CostMatrix {
    /// Creates a zero filled square matrix of given dimension.
    pub fn new(size: usize) -> Self {
        Self { size, data: vec![0; size * size] }
    }

    /// Returns matrix dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Sets the cost of travel from `from` to `to`.
    pub fn set(&mut self, from: usize, to: usize, cost: Cost) {
        self.data[from * self.size + to] = cost;
    }

    /// Returns the cost of travel from `from` to `to`.
    pub fn get(&self, from: usize, to: usize) -> Cost {
        self.data[from * self.size + to]
    }
}

impl std::ops::Index<usize> for CostMatrix {
    type Output = [Cost];

    fn index(&self, row: usize) -> &Self::Output {
        &self.data[row * self.size..(row + 1) * self.size]
    }
}
