//! `EscapeWithMatrix`: escape time plus the accumulated product Jacobian
//! along the trajectory, finalised into a dominant eigenpair.

use super::compute_matrix::ComputeMatrix;
use super::{
    drive_escape, HasEigenvector, HasEscapeTime, HasJacobianProduct, HasLyapunov, HasStretch, Observe,
};
use crate::map::Map;
use crate::numeric::{scalar, Matrix, Scalar, Vector};

/// Accumulates `M <- J(x_t) * M` with `M_0 = I_D` (`chaospp` accumulates
/// `M *= J(x_t)`, i.e. the same product in forward time order — see
/// `ComputeMatrix` in SPEC_FULL.md §4.2). Same stopping rule as
/// [`super::EscapeTime`]. On finalisation, `stretch = |lambda_max|` and
/// `eigenvector` is its corresponding eigenvector.
#[derive(Clone, Debug)]
pub struct EscapeWithMatrix {
    state: Vector,
    escape_time: u64,
    max_time: u64,
    matrix: ComputeMatrix,
}

impl EscapeWithMatrix {
    pub fn new(dim: usize, max_time: u64) -> Self {
        Self {
            state: Vector::zeros(0),
            escape_time: 0,
            max_time,
            matrix: ComputeMatrix::new(dim),
        }
    }

    /// `log(stretch) / t_e`, as an `f64` for reporting.
    pub fn lyapunov(&self) -> f64 {
        scalar::to_f64(&self.stretch().ln()) / self.escape_time as f64
    }
}

impl Observe for EscapeWithMatrix {
    type Value = u64;

    fn observe<M: Map>(&mut self, map: &mut M, state: Vector) {
        self.state = state.clone();
        self.escape_time = 0;
        self.matrix.initialize(map.dim());

        let mut point = state;
        let matrix = &mut self.matrix;
        self.escape_time = drive_escape(map, &mut point, self.max_time, |map, point| {
            let jacobian: Matrix = map.jacobian(point).clone();
            matrix.accumulate(&jacobian);
            map.advance(point);
        });
        self.matrix.finalise();
    }

    fn state(&self) -> &Vector {
        &self.state
    }

    fn observable(&self) -> u64 {
        self.escape_time
    }
}

impl HasEscapeTime for EscapeWithMatrix {
    fn escape_time(&self) -> u64 {
        self.escape_time
    }

    fn max_time(&self) -> u64 {
        self.max_time
    }
}

impl HasStretch for EscapeWithMatrix {
    fn stretch(&self) -> Scalar {
        self.matrix.stretch()
    }
}

impl HasJacobianProduct for EscapeWithMatrix {
    fn jacobian_product(&self) -> &Matrix {
        self.matrix.product()
    }
}

impl HasEigenvector for EscapeWithMatrix {
    fn eigenvector(&self) -> &Vector {
        self.matrix.eigenvector()
    }
}

impl HasLyapunov for EscapeWithMatrix {
    fn lyapunov(&self) -> f64 {
        EscapeWithMatrix::lyapunov(self)
    }
}
