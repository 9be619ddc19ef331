use pairdist_core::{BoxSpec, DistResult, PointSet};

use crate::kernels::{run, Fold, Strategy};

/// Treatment of particle positions under periodic boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryMode {
    /// Remap positions into the primary cell first (single-pass wrap, valid
    /// for excursions of at most one box length), then apply the branch-form
    /// minimum-image correction to each difference.
    Wrapped,
    /// Leave positions as given and apply the round-form correction directly
    /// to raw differences. Robust for any displacement magnitude; the
    /// recommended default.
    Unwrapped,
}

/// Distances between all unordered point pairs under open boundaries, in
/// upper-triangular order. Zero or one point yields an empty result.
pub fn compute_open(points: &PointSet) -> DistResult<Vec<f64>> {
    compute_open_with(points, Strategy::Batched)
}

pub fn compute_open_with(points: &PointSet, strategy: Strategy) -> DistResult<Vec<f64>> {
    Ok(run(points, Fold::Open, strategy))
}

/// Minimum-image distances between all unordered point pairs. Wrapping, when
/// requested, happens on an internal copy; caller data is never mutated.
pub fn compute_periodic(
    points: &PointSet,
    box_: &BoxSpec,
    mode: BoundaryMode,
) -> DistResult<Vec<f64>> {
    compute_periodic_with(points, box_, mode, Strategy::Batched)
}

pub fn compute_periodic_with(
    points: &PointSet,
    box_: &BoxSpec,
    mode: BoundaryMode,
    strategy: Strategy,
) -> DistResult<Vec<f64>> {
    box_.check_dim(points)?;
    match mode {
        BoundaryMode::Wrapped => {
            let wrapped = box_.wrap_points(points)?;
            Ok(run(&wrapped, Fold::Branch(box_), strategy))
        }
        BoundaryMode::Unwrapped => Ok(run(points, Fold::Round(box_), strategy)),
    }
}
