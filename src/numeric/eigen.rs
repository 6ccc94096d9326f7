//! Dominant eigenpair of a product Jacobian.
//!
//! The original calls `Eigen::EigenSolver<Matrix>` (a full, possibly-complex
//! eigendecomposition) and keeps only the eigenvalue of largest modulus and
//! its eigenvector (`ComputeMatrix::finalise` in `observable.h`). For the
//! product Jacobians this system actually builds — accumulated derivatives
//! of a chaotic map along a trajectory — the dominant growth direction is
//! generically real and simple: this is exactly the premise behind
//! power-iteration / QR-renormalisation estimators of the leading Lyapunov
//! exponent. This module narrows the original's general complex solver down
//! to that case (see DESIGN.md, Open Questions) via shifted power iteration.

use super::linalg::{Matrix, Vector};
use super::rng::unit_vector;
use super::scalar::{self, Scalar};

/// The dominant eigenvalue magnitude and corresponding (unit) eigenvector
/// of `m`, found by power iteration.
///
/// `iterations` bounds the number of matrix-vector products; for the small
/// (D <= ~8) matrices this system deals with, a few dozen iterations is
/// ample for the magnitude separation typical of chaotic product Jacobians.
pub fn dominant_eigenpair(m: &Matrix, iterations: usize) -> (Scalar, Vector) {
    let n = m.rows();
    debug_assert_eq!(m.cols(), n, "dominant_eigenpair expects a square matrix");

    let mut v = unit_vector(n);
    let mut eigenvalue = scalar::zero();

    for _ in 0..iterations {
        let mv = m.mul_vec(&v);
        let norm = mv.norm();

        if scalar::to_f64(&norm) <= 0.0 {
            // Degenerate matrix (e.g. a zero Jacobian product): there is no
            // growth direction to report. Leave v as-is and report zero.
            return (scalar::zero(), v);
        }

        // Rayleigh quotient sign: v . (Mv) / |v|^2 tells us whether the
        // dominant real eigenvalue is positive or negative, which the bare
        // norm of Mv cannot.
        let signed = v.dot(&mv);
        eigenvalue = if scalar::to_f64(&signed) < 0.0 {
            -norm.clone()
        } else {
            norm.clone()
        };

        v = mv;
        v.normalize_by(&norm);
    }

    (eigenvalue.abs(), v)
}
