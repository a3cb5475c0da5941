//! Square 2D grid storage.
//!
//! Cells are addressed by `(ku, kv)` and stored row-major in a single
//! vector, so the flat index of `(ku, kv)` is `ku * n + kv`.

use std::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An `n × n` grid of values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid2D<T> {
    dimension: usize,
    data: Vec<T>,
}

impl<T: Clone> Grid2D<T> {
    /// Create a grid with every cell set to `value`.
    #[must_use]
    pub fn new(dimension: usize, value: T) -> Self {
        Self {
            dimension,
            data: vec![value; dimension * dimension],
        }
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }
}

impl<T> Grid2D<T> {
    /// Create a grid from a function of the cell coordinates.
    pub fn from_fn(dimension: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(dimension * dimension);
        for ku in 0..dimension {
            for kv in 0..dimension {
                data.push(f(ku, kv));
            }
        }
        Self { dimension, data }
    }

    /// Samples per edge.
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the grid has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Flat index of `(ku, kv)`, if inside the grid.
    #[must_use]
    pub const fn index_of(&self, ku: usize, kv: usize) -> Option<usize> {
        if ku < self.dimension && kv < self.dimension {
            Some(ku * self.dimension + kv)
        } else {
            None
        }
    }

    /// Grid coordinates of a flat index.
    #[must_use]
    pub const fn coords_of(&self, index: usize) -> (usize, usize) {
        (index / self.dimension, index % self.dimension)
    }

    /// Coordinates of `(ku + du, kv + dv)`, if inside the grid.
    #[must_use]
    pub fn offset(&self, ku: usize, kv: usize, du: isize, dv: isize) -> Option<(usize, usize)> {
        let u = ku.checked_add_signed(du)?;
        let v = kv.checked_add_signed(dv)?;
        self.index_of(u, v).map(|_| (u, v))
    }

    /// Get a cell, if inside the grid.
    #[must_use]
    pub fn get(&self, ku: usize, kv: usize) -> Option<&T> {
        self.index_of(ku, kv).map(|k| &self.data[k])
    }

    /// Get a cell mutably, if inside the grid.
    pub fn get_mut(&mut self, ku: usize, kv: usize) -> Option<&mut T> {
        self.index_of(ku, kv).map(|k| &mut self.data[k])
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// All cells in row-major order, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterate over cells in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> Index<(usize, usize)> for Grid2D<T> {
    type Output = T;

    fn index(&self, (ku, kv): (usize, usize)) -> &T {
        &self.data[ku * self.dimension + kv]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid2D<T> {
    fn index_mut(&mut self, (ku, kv): (usize, usize)) -> &mut T {
        &mut self.data[ku * self.dimension + kv]
    }
}
