//! `Lyapunov`: the finite-time Lyapunov exponent over a fixed observation
//! window `t_obs`, with no escape check.

use super::compute_matrix::ComputeMatrix;
use super::{HasEigenvector, HasJacobianProduct, HasLyapunov, HasStretch, Observe};
use crate::map::Map;
use crate::numeric::{scalar, Matrix, Scalar, Vector};

/// Runs exactly `t_obs` steps (no escape), accumulating the product
/// Jacobian `M` exactly as [`super::EscapeWithMatrix`] does.
/// `observable() = log(stretch) / t_obs`.
#[derive(Clone, Debug)]
pub struct Lyapunov {
    state: Vector,
    t_obs: u64,
    matrix: ComputeMatrix,
}

impl Lyapunov {
    pub fn new(dim: usize, t_obs: u64) -> Self {
        Self {
            state: Vector::zeros(0),
            t_obs,
            matrix: ComputeMatrix::new(dim),
        }
    }

    pub fn t_obs(&self) -> u64 {
        self.t_obs
    }
}

impl Observe for Lyapunov {
    type Value = f64;

    fn observe<M: Map>(&mut self, map: &mut M, state: Vector) {
        self.state = state.clone();
        self.matrix.initialize(map.dim());

        let mut point = state;
        for _ in 0..self.t_obs {
            let jacobian: Matrix = map.jacobian(&point).clone();
            self.matrix.accumulate(&jacobian);
            map.advance(&mut point);
        }
        self.matrix.finalise();
    }

    fn state(&self) -> &Vector {
        &self.state
    }

    fn observable(&self) -> f64 {
        scalar::to_f64(&self.stretch().ln()) / self.t_obs as f64
    }
}

impl HasStretch for Lyapunov {
    fn stretch(&self) -> Scalar {
        self.matrix.stretch()
    }
}

impl HasJacobianProduct for Lyapunov {
    fn jacobian_product(&self) -> &Matrix {
        self.matrix.product()
    }
}

impl HasEigenvector for Lyapunov {
    fn eigenvector(&self) -> &Vector {
        self.matrix.eigenvector()
    }
}

impl HasLyapunov for Lyapunov {
    fn lyapunov(&self) -> f64 {
        self.observable()
    }
}
