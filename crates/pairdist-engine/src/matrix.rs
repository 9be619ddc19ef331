use nalgebra::DMatrix;

use pairdist_core::{n_pairs, pairs, DistError, DistResult, PointSet};

use crate::compute::compute_open;

/// Expands a condensed distance buffer (upper-triangular order) into the
/// symmetric N x N matrix with zero diagonal.
pub fn squareform(condensed: &[f64], n: usize) -> DistResult<DMatrix<f64>> {
    if condensed.len() != n_pairs(n) {
        return Err(DistError::Mismatch(format!(
            "condensed buffer has {} entries, {n} points need {}",
            condensed.len(),
            n_pairs(n)
        )));
    }
    let mut m = DMatrix::zeros(n, n);
    for (k, (i, j)) in pairs(n).enumerate() {
        m[(i, j)] = condensed[k];
        m[(j, i)] = condensed[k];
    }
    Ok(m)
}

/// Full open-boundary distance matrix of a point set.
pub fn distance_matrix(points: &PointSet) -> DistResult<DMatrix<f64>> {
    let condensed = compute_open(points)?;
    squareform(&condensed, points.n_points())
}
