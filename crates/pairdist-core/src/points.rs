use rand::Rng;

use crate::boxspec::BoxSpec;
use crate::error::{DistError, DistResult};

/// An ordered set of N points with D coordinates each, stored flat in
/// row-major order. Immutable once built; operations that need wrapped
/// coordinates work on their own copy.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    data: Vec<f64>,
    n_points: usize,
    dim: usize,
}

impl PointSet {
    pub fn empty(dim: usize) -> DistResult<Self> {
        if dim == 0 {
            return Err(DistError::Invalid("point dimension must be >= 1".into()));
        }
        Ok(Self {
            data: Vec::new(),
            n_points: 0,
            dim,
        })
    }

    pub fn from_rows(rows: &[Vec<f64>]) -> DistResult<Self> {
        let Some(first) = rows.first() else {
            return Self::empty(1);
        };
        let dim = first.len();
        if dim == 0 {
            return Err(DistError::Invalid("point 0 has zero coordinates".into()));
        }
        let mut data = Vec::with_capacity(rows.len() * dim);
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != dim {
                return Err(DistError::Mismatch(format!(
                    "point {idx} has {} coordinates, expected {dim}",
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            n_points: rows.len(),
            dim,
        })
    }

    pub fn from_flat(data: Vec<f64>, dim: usize) -> DistResult<Self> {
        if dim == 0 {
            return Err(DistError::Invalid("point dimension must be >= 1".into()));
        }
        if data.len() % dim != 0 {
            return Err(DistError::Mismatch(format!(
                "flat buffer of {} values is not a multiple of dim {dim}",
                data.len()
            )));
        }
        let n_points = data.len() / dim;
        Ok(Self {
            data,
            n_points,
            dim,
        })
    }

    /// Uniform random positions in `[-L_d/2, L_d/2)` per dimension.
    pub fn random_in_box<R: Rng + ?Sized>(rng: &mut R, n: usize, box_: &BoxSpec) -> Self {
        let dim = box_.dim();
        let mut data = Vec::with_capacity(n * dim);
        for _ in 0..n {
            for &l in box_.lengths() {
                let u: f64 = rng.gen();
                data.push((u - 0.5) * l);
            }
        }
        Self {
            data,
            n_points: n,
            dim,
        }
    }

    pub fn n_points(&self) -> usize {
        self.n_points
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.n_points == 0
    }

    pub fn point(&self, i: usize) -> &[f64] {
        let start = i * self.dim;
        &self.data[start..start + self.dim]
    }

    pub fn coords(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn coords_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn iter_points(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.dim)
    }
}
