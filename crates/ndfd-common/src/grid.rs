//! Two-dimensional grids for decoded forecast fields.

use serde::{Deserialize, Serialize};

use crate::{NdfdError, NdfdResult};

/// A row-major `nx * ny` grid of values.
///
/// Used for forecast values (°F) as well as the latitude and longitude
/// grids that accompany them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid2D {
    nx: usize,
    ny: usize,
    data: Vec<f32>,
}

impl Grid2D {
    /// Create a grid from a row-major buffer.
    pub fn new(nx: usize, ny: usize, data: Vec<f32>) -> NdfdResult<Self> {
        if nx.checked_mul(ny) != Some(data.len()) {
            return Err(NdfdError::BufferLength {
                nx,
                ny,
                len: data.len(),
            });
        }
        Ok(Self { nx, ny, data })
    }

    /// Create a grid with every point set to `value`.
    pub fn filled(nx: usize, ny: usize, value: f32) -> Self {
        Self {
            nx,
            ny,
            data: vec![value; nx * ny],
        }
    }

    /// Build a grid by evaluating `f(i, j)` at every point.
    pub fn from_fn(nx: usize, ny: usize, mut f: impl FnMut(usize, usize) -> f32) -> Self {
        let mut data = Vec::with_capacity(nx * ny);
        for j in 0..ny {
            for i in 0..nx {
                data.push(f(i, j));
            }
        }
        Self { nx, ny, data }
    }

    pub fn nx(&self) -> usize {
        self.nx
    }

    pub fn ny(&self) -> usize {
        self.ny
    }

    /// (nx, ny)
    pub fn shape(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }

    pub fn values(&self) -> &[f32] {
        &self.data
    }

    /// Value at column `i`, row `j`.
    pub fn get(&self, i: usize, j: usize) -> Option<f32> {
        if i >= self.nx || j >= self.ny {
            return None;
        }
        self.data.get(j * self.nx + i).copied()
    }

    /// Total number of grid points.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Fail unless `other` has the same shape as this grid.
    pub fn ensure_same_shape(&self, other: &Grid2D) -> NdfdResult<()> {
        if self.shape() != other.shape() {
            return Err(NdfdError::ShapeMismatch {
                expected_nx: self.nx,
                expected_ny: self.ny,
                nx: other.nx,
                ny: other.ny,
            });
        }
        Ok(())
    }

}
