//! `EscapeWithVector`: escape time plus a tangent vector evolved under the
//! map's Jacobian, giving the finite-time Lyapunov exponent along the way.

use super::{drive_escape, HasEscapeTime, HasLyapunov, HasStretch, Observe};
use crate::map::Map;
use crate::numeric::{rng, scalar, Scalar, Vector};

/// Before iteration, `v` is a fresh unit vector drawn uniformly from the
/// sphere `S^{D-1}` (or an explicitly supplied initial tangent). On each
/// step, `v <- J(x_t) v` then `x_{t+1} <- T(x_t)`. `stretch = |v|` after
/// `t_e` iterations (not normalised); `FTLE = log(stretch) / t_e`.
#[derive(Clone, Debug)]
pub struct EscapeWithVector {
    state: Vector,
    escape_time: u64,
    max_time: u64,
    tangent: Vector,
    initial_tangent: Option<Vector>,
}

impl EscapeWithVector {
    pub fn new(max_time: u64) -> Self {
        Self {
            state: Vector::zeros(0),
            escape_time: 0,
            max_time,
            tangent: Vector::zeros(0),
            initial_tangent: None,
        }
    }

    /// Uses an explicitly supplied initial tangent vector instead of a
    /// freshly drawn random unit vector on every `observe()`.
    pub fn with_initial_tangent(max_time: u64, tangent: Vector) -> Self {
        Self {
            state: Vector::zeros(0),
            escape_time: 0,
            max_time,
            tangent: Vector::zeros(0),
            initial_tangent: Some(tangent),
        }
    }

    /// The tangent vector after `escape_time` iterations, not normalised.
    pub fn tangent(&self) -> &Vector {
        &self.tangent
    }

    /// `log(stretch) / t_e`, as an `f64` for reporting.
    pub fn lyapunov(&self) -> f64 {
        scalar::to_f64(&self.stretch().ln()) / self.escape_time as f64
    }
}

impl Observe for EscapeWithVector {
    type Value = u64;

    fn observe<M: Map>(&mut self, map: &mut M, state: Vector) {
        self.state = state.clone();
        self.escape_time = 0;
        self.tangent = match &self.initial_tangent {
            Some(v) => v.clone(),
            None => rng::unit_vector(map.dim()),
        };

        let mut point = state;
        let tangent = &mut self.tangent;
        self.escape_time = drive_escape(map, &mut point, self.max_time, |map, point| {
            *tangent = map.jacobian(point).mul_vec(tangent);
            map.advance(point);
        });
    }

    fn state(&self) -> &Vector {
        &self.state
    }

    fn observable(&self) -> u64 {
        self.escape_time
    }
}

impl HasEscapeTime for EscapeWithVector {
    fn escape_time(&self) -> u64 {
        self.escape_time
    }

    fn max_time(&self) -> u64 {
        self.max_time
    }
}

impl HasStretch for EscapeWithVector {
    fn stretch(&self) -> Scalar {
        self.tangent.norm()
    }
}

impl HasLyapunov for EscapeWithVector {
    fn lyapunov(&self) -> f64 {
        EscapeWithVector::lyapunov(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{uniform_box, DomainBox};
    use crate::numeric::Matrix;

    /// A 1D map `T(x) = a*x` on an always-expanding branch, with constant
    /// Jacobian `a`, so the FTLE is exactly `log(a)` regardless of the
    /// number of steps taken.
    struct LinearExpand {
        boundary: DomainBox,
        jac: Matrix,
        a: f64,
    }

    impl Map for LinearExpand {
        fn dim(&self) -> usize {
            1
        }
        fn name(&self) -> &str {
            "linear-expand"
        }
        fn boundary(&self) -> &DomainBox {
            &self.boundary
        }
        fn advance(&self, point: &mut Vector) {
            point[0] *= scalar::new(self.a);
        }
        fn jacobian(&mut self, _point: &Vector) -> &Matrix {
            &self.jac
        }
        fn has_exited(&self, _point: &Vector) -> bool {
            false
        }
    }

    #[test]
    fn ftle_of_constant_jacobian_map_is_log_a() {
        rng::seed(3);
        let mut map = LinearExpand {
            boundary: uniform_box(1, -10.0, 10.0),
            jac: {
                let mut m = Matrix::zeros(1, 1);
                m[(0, 0)] = scalar::new(3.0);
                m
            },
            a: 3.0,
        };
        let mut obs = EscapeWithVector::new(10);
        obs.observe(&mut map, Vector::from_vec(vec![scalar::new(1e-10)]));
        assert_eq!(obs.observable(), 10);
        assert!((obs.lyapunov() - 3.0f64.ln()).abs() < 1e-8);
    }
}
