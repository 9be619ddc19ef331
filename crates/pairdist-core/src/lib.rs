#![forbid(unsafe_code)]

pub mod boxspec;
pub mod error;
pub mod min_image;
pub mod pairs;
pub mod points;

pub use boxspec::BoxSpec;
pub use error::{DistError, DistResult};
pub use min_image::{min_image_branch, min_image_round, wrap_coord};
pub use pairs::{condensed_index, n_pairs, pairs, PairIter};
pub use points::PointSet;
