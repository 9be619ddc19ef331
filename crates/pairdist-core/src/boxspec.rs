use crate::error::{DistError, DistResult};
use crate::min_image::{min_image_branch, min_image_round, wrap_coord};
use crate::points::PointSet;

/// Orthorhombic periodic cell, one length per dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSpec {
    lengths: Vec<f64>,
}

impl BoxSpec {
    pub fn from_lengths(lengths: &[f64]) -> DistResult<Self> {
        if lengths.is_empty() {
            return Err(DistError::Invalid("box must have at least one length".into()));
        }
        for (d, &l) in lengths.iter().enumerate() {
            if !l.is_finite() || l <= 0.0 {
                return Err(DistError::Invalid(format!(
                    "box length {l} in dimension {d} must be finite and positive"
                )));
            }
        }
        Ok(Self {
            lengths: lengths.to_vec(),
        })
    }

    pub fn dim(&self) -> usize {
        self.lengths.len()
    }

    pub fn lengths(&self) -> &[f64] {
        &self.lengths
    }

    pub fn check_dim(&self, points: &PointSet) -> DistResult<()> {
        if points.dim() != self.dim() {
            return Err(DistError::Mismatch(format!(
                "points have dimension {}, box has dimension {}",
                points.dim(),
                self.dim()
            )));
        }
        Ok(())
    }

    /// Round-form minimum-image correction applied per axis.
    pub fn fold_round(&self, delta: &mut [f64]) {
        for (d, l) in delta.iter_mut().zip(&self.lengths) {
            *d = min_image_round(*d, *l);
        }
    }

    /// Branch-form minimum-image correction applied per axis. Only valid for
    /// displacements within one box length of the half-box boundary.
    pub fn fold_branch(&self, delta: &mut [f64]) {
        for (d, l) in delta.iter_mut().zip(&self.lengths) {
            *d = min_image_branch(*d, *l);
        }
    }

    /// Returns a copy of `points` with every coordinate remapped into the
    /// primary cell `[-L_d/2, L_d/2)`. Single-pass wrap: positions more than
    /// one box length outside the cell are not fully remapped.
    pub fn wrap_points(&self, points: &PointSet) -> DistResult<PointSet> {
        self.check_dim(points)?;
        let dim = self.dim();
        let mut wrapped = points.clone();
        for (idx, x) in wrapped.coords_mut().iter_mut().enumerate() {
            *x = wrap_coord(*x, self.lengths[idx % dim]);
        }
        Ok(wrapped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rejects_bad_lengths() {
        assert!(BoxSpec::from_lengths(&[]).is_err());
        assert!(BoxSpec::from_lengths(&[10.0, 0.0]).is_err());
        assert!(BoxSpec::from_lengths(&[-1.0]).is_err());
        assert!(BoxSpec::from_lengths(&[f64::NAN]).is_err());
        assert!(BoxSpec::from_lengths(&[f64::INFINITY]).is_err());
    }

    #[test]
    fn bad_length_error_names_dimension() {
        let err = BoxSpec::from_lengths(&[10.0, -3.0]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("dimension 1"), "unexpected message: {msg}");
    }

    #[test]
    fn fold_round_bounds_each_axis() {
        let box_ = BoxSpec::from_lengths(&[100.0, 10.0]).unwrap();
        let mut delta = [99.0, -7.5];
        box_.fold_round(&mut delta);
        assert_relative_eq!(delta[0], -1.0);
        assert_relative_eq!(delta[1], 2.5);
    }

    #[test]
    fn wrap_points_leaves_caller_data_untouched() {
        let box_ = BoxSpec::from_lengths(&[100.0, 100.0]).unwrap();
        let ps = PointSet::from_rows(&[vec![99.0, 0.0]]).unwrap();
        let wrapped = box_.wrap_points(&ps).unwrap();
        assert_relative_eq!(wrapped.point(0)[0], -1.0);
        assert_relative_eq!(ps.point(0)[0], 99.0);
    }

    #[test]
    fn wrap_points_checks_dimension() {
        let box_ = BoxSpec::from_lengths(&[100.0]).unwrap();
        let ps = PointSet::from_rows(&[vec![1.0, 2.0]]).unwrap();
        assert!(box_.wrap_points(&ps).is_err());
    }
}
