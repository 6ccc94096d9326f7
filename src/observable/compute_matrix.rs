//! Shared product-Jacobian accumulator for [`super::EscapeWithMatrix`] and
//! [`super::Lyapunov`], mirroring `ComputeMatrix` in `observable.h`.
//!
//! Per the Design Note this crate carries over from SPEC_FULL.md §4.2,
//! `observe()` always fully reinitialises and finalises within one call —
//! there is no externally observable "observed but not finalised" state,
//! which resolves the original's staleness concern about reusing an
//! observable across `observe()` calls without an intervening `finalise()`.

use crate::numeric::eigen;
use crate::numeric::{Matrix, Scalar, Vector};

/// Number of power-iteration steps used to extract the dominant eigenpair
/// of the accumulated product Jacobian on finalisation.
const EIGEN_ITERATIONS: usize = 60;

#[derive(Clone, Debug)]
pub(crate) struct ComputeMatrix {
    product: Matrix,
    eigenvalue: Scalar,
    eigenvector: Vector,
}

impl ComputeMatrix {
    pub(crate) fn new(dim: usize) -> Self {
        Self {
            product: Matrix::identity(dim),
            eigenvalue: crate::numeric::scalar::zero(),
            eigenvector: Vector::zeros(dim),
        }
    }

    /// Resets the accumulator to identity, as `ComputeMatrix::initialize`
    /// does on every `observe()`.
    pub(crate) fn initialize(&mut self, dim: usize) {
        self.product = Matrix::identity(dim);
    }

    /// Accumulates `product <- product * jacobian`, as
    /// `ComputeMatrix::evolve` does.
    pub(crate) fn accumulate(&mut self, jacobian: &Matrix) {
        self.product.mul_assign(jacobian);
    }

    /// Runs the dominant-eigenpair extraction, as `ComputeMatrix::finalise`
    /// does.
    pub(crate) fn finalise(&mut self) {
        let (value, vector) = eigen::dominant_eigenpair(&self.product, EIGEN_ITERATIONS);
        self.eigenvalue = value;
        self.eigenvector = vector;
    }

    pub(crate) fn product(&self) -> &Matrix {
        &self.product
    }

    pub(crate) fn stretch(&self) -> Scalar {
        self.eigenvalue.clone()
    }

    pub(crate) fn eigenvector(&self) -> &Vector {
        &self.eigenvector
    }
}
