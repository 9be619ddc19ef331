#![forbid(unsafe_code)]

pub mod compute;
pub mod kernels;
pub mod matrix;

pub use compute::{
    compute_open, compute_open_with, compute_periodic, compute_periodic_with, BoundaryMode,
};
pub use kernels::Strategy;
pub use matrix::{distance_matrix, squareform};
