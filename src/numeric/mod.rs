//! Arbitrary-precision scalar, dense linear algebra, random draws, SVD and
//! dominant-eigenpair extraction — the leaf layer every other module in this
//! crate is built on.

pub mod eigen;
pub mod linalg;
pub mod rng;
pub mod scalar;
pub mod svd;

pub use linalg::{Matrix, Vector};
pub use scalar::Scalar;
