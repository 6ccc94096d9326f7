//! One-sided Jacobi singular value decomposition.
//!
//! The anisotropic proposal (`proposal::Anisotropic`) only ever reads the
//! full right singular vector matrix `V` and the singular values, mirroring
//! `Eigen::JacobiSVD<Matrix> svd(jacobian, Eigen::ComputeFullV)` in the
//! original. This module implements exactly that slice of SVD, via the
//! classical one-sided Jacobi method (Hestenes' algorithm): repeatedly
//! Givens-rotate pairs of columns of a working copy of the matrix toward
//! orthogonality, accumulating the rotations into `V`.

use super::linalg::Matrix;
use super::scalar::{self, Scalar};

/// Singular values (descending is not guaranteed; callers that need the
/// original's index order should not assume sorting) and the full `V`
/// matrix of a square `D x D` matrix.
pub struct Svd {
    pub singular_values: Vec<Scalar>,
    pub v: Matrix,
}

/// Computes the SVD of a square matrix via one-sided Jacobi rotations.
///
/// `sweeps` bounds the number of full sweeps over all column pairs; 30
/// sweeps is generous for the small (D <= ~8) matrices this system deals
/// with and matches typical Jacobi-SVD convergence behaviour.
pub fn jacobi_svd(m: &Matrix) -> Svd {
    let n = m.rows();
    debug_assert_eq!(m.cols(), n, "jacobi_svd expects a square matrix");

    let mut work = m.clone();
    let mut v = Matrix::identity(n);

    const SWEEPS: usize = 30;
    let tol = 1e-14;

    for _ in 0..SWEEPS {
        let mut off_diagonal = 0.0f64;

        for p in 0..n {
            for q in (p + 1)..n {
                let col_p = work.column(p);
                let col_q = work.column(q);

                let alpha = col_p.dot(&col_p);
                let beta = col_q.dot(&col_q);
                let gamma = col_p.dot(&col_q);

                let gamma_f = scalar::to_f64(&gamma);
                let alpha_f = scalar::to_f64(&alpha);
                let beta_f = scalar::to_f64(&beta);
                off_diagonal += gamma_f * gamma_f;

                if gamma_f.abs() <= tol * (alpha_f * beta_f).sqrt().max(1e-300) {
                    continue;
                }

                // Classic Jacobi rotation angle for symmetrising the 2x2
                // Gram sub-block [[alpha, gamma], [gamma, beta]].
                let zeta = (beta_f - alpha_f) / (2.0 * gamma_f);
                let t = zeta.signum() / (zeta.abs() + (1.0 + zeta * zeta).sqrt());
                let t = if zeta == 0.0 { 1.0 } else { t };
                let c = 1.0 / (1.0 + t * t).sqrt();
                let s = c * t;

                let c_s = scalar::new(c);
                let s_s = scalar::new(s);

                rotate_columns(&mut work, p, q, &c_s, &s_s);
                rotate_columns(&mut v, p, q, &c_s, &s_s);
            }
        }

        if off_diagonal.sqrt() < tol {
            break;
        }
    }

    // After convergence `work`'s columns are mutually orthogonal; their
    // norms are the singular values. `U` itself is never needed by any
    // caller in this system, so it is not assembled.
    let singular_values: Vec<Scalar> = (0..n).map(|j| work.column(j).norm()).collect();

    Svd { singular_values, v }
}

/// Applies a Givens rotation to columns `p` and `q` of `m` in place:
/// `[col_p, col_q] <- [col_p, col_q] * [[c, -s], [s, c]]`.
fn rotate_columns(m: &mut Matrix, p: usize, q: usize, c: &Scalar, s: &Scalar) {
    for i in 0..m.rows() {
        let a = m[(i, p)].clone();
        let b = m[(i, q)].clone();
        m[(i, p)] = c.clone() * &a + s.clone() * &b;
        m[(i, q)] = (-s.clone()) * &a + c.clone() * &b;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::scalar::new;

    #[test]
    fn svd_of_identity_is_identity() {
        let id = Matrix::identity(3);
        let svd = jacobi_svd(&id);
        for sv in &svd.singular_values {
            assert!((scalar::to_f64(sv) - 1.0).abs() < 1e-10);
        }
    }

    #[test]
    fn svd_of_diagonal_recovers_singular_values() {
        let mut m = Matrix::zeros(2, 2);
        m[(0, 0)] = new(3.0);
        m[(1, 1)] = new(5.0);
        let svd = jacobi_svd(&m);
        let mut values: Vec<f64> = svd.singular_values.iter().map(scalar::to_f64).collect();
        values.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert!((values[0] - 3.0).abs() < 1e-8);
        assert!((values[1] - 5.0).abs() < 1e-8);
    }
}
