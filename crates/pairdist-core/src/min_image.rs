//! Scalar minimum-image and wrapping primitives.
//!
//! Two equivalent formulations of the minimum-image correction are kept:
//! the round form works for displacements of any magnitude, the branch form
//! applies a single correction and is only valid when the displacement is
//! within one box length. Tests pin their agreement on that shared range.

/// `dx - l * round(dx / l)`. Robust for arbitrarily large displacements.
pub fn min_image_round(dx: f64, l: f64) -> f64 {
    dx - (dx / l).round() * l
}

/// Single-pass correction by comparison against `l/2`. Valid only when
/// `|dx| <= 3*l/2`, i.e. the raw displacement is at most one box length
/// past the half-box boundary.
pub fn min_image_branch(dx: f64, l: f64) -> f64 {
    let half = 0.5 * l;
    if dx > half {
        dx - l
    } else if dx <= -half {
        dx + l
    } else {
        dx
    }
}

/// Remaps a coordinate into `[-l/2, l/2)` with a single correction. Not a
/// general modulo: positions more than one box length outside the primary
/// cell are not fully wrapped.
pub fn wrap_coord(x: f64, l: f64) -> f64 {
    let half = 0.5 * l;
    if x < -half {
        x + l
    } else if x >= half {
        x - l
    } else {
        x
    }
}
