//! The "adaptive proposal" (Guerra & Wilson-Aggarwal-style self-tuning
//! step size, PRL 110, 220601): a fixed-magnitude isotropic step whose
//! scale grows when a move does not shorten the escape time, and shrinks
//! when it does, chasing the step size that best explores long escape
//! times.

use super::isotropic::{isotropic_log_acceptance, isotropic_propose, Isotropic};
use super::Proposal;
use crate::domain::DomainBox;
use crate::numeric::{scalar, Scalar, Vector};
use crate::observable::{HasEscapeTime, Observe};

/// `sigma` is a single scalar state, not state-dependent; it is nudged by
/// `factor` after every step depending on whether the escape time
/// improved.
pub struct Adaptive {
    boundary: DomainBox,
    sigma: Scalar,
    factor: Scalar,
    max_sigma: Scalar,
    delta: Scalar,
}

impl Adaptive {
    /// `factor` defaults to `1.1`, matching the original's default
    /// template argument; `sigma` starts at `1` and is capped at `10`.
    pub fn new(boundary: DomainBox, factor: Scalar) -> Self {
        Self {
            boundary,
            sigma: scalar::new(1.0),
            factor,
            max_sigma: scalar::new(10.0),
            delta: scalar::zero(),
        }
    }

    pub fn with_default_factor(boundary: DomainBox) -> Self {
        Self::new(boundary, scalar::new(1.1))
    }

    pub fn sigma_value(&self) -> &Scalar {
        &self.sigma
    }
}

impl<O: Observe + HasEscapeTime> Isotropic<O> for Adaptive {
    fn sigma(&self, _result: &O) -> Scalar {
        self.sigma.clone()
    }

    fn boundary(&self) -> &DomainBox {
        &self.boundary
    }

    fn delta_mut(&mut self) -> &mut Scalar {
        &mut self.delta
    }
}

impl<O: Observe + HasEscapeTime> Proposal<O> for Adaptive {
    fn boundary(&self) -> &DomainBox {
        &self.boundary
    }

    fn propose(&mut self, result: &O) -> Vector {
        isotropic_propose(self, result)
    }

    fn log_acceptance(&self, result: &O, result_prime: &O) -> f64 {
        isotropic_log_acceptance(self, &self.delta, result, result_prime)
    }

    fn update(&mut self, result: &O, result_prime: &O) {
        if result_prime.escape_time() >= result.escape_time() {
            let grown = self.sigma.clone() * &self.factor;
            self.sigma = if grown > self.max_sigma {
                self.max_sigma.clone()
            } else {
                grown
            };
        } else {
            self.sigma = self.sigma.clone() / &self.factor;
        }
    }

    fn delta(&self) -> &Scalar {
        &self.delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::uniform_box;
    use crate::map::Map;

    #[derive(Clone)]
    struct Fixture {
        state: Vector,
        escape_time: u64,
    }

    impl Observe for Fixture {
        type Value = u64;
        fn observe<M: Map>(&mut self, _map: &mut M, state: Vector) {
            self.state = state;
        }
        fn state(&self) -> &Vector {
            &self.state
        }
        fn observable(&self) -> u64 {
            self.escape_time
        }
    }

    impl HasEscapeTime for Fixture {
        fn escape_time(&self) -> u64 {
            self.escape_time
        }
        fn max_time(&self) -> u64 {
            u64::MAX
        }
    }

    #[test]
    fn sigma_grows_when_escape_time_does_not_improve() {
        let mut kernel = Adaptive::with_default_factor(uniform_box(1, -10.0, 10.0));
        let before = Fixture {
            state: Vector::zeros(1),
            escape_time: 5,
        };
        let after = Fixture {
            state: Vector::zeros(1),
            escape_time: 7,
        };
        let initial = scalar::to_f64(kernel.sigma_value());
        kernel.update(&before, &after);
        assert!(scalar::to_f64(kernel.sigma_value()) > initial);
    }

    #[test]
    fn sigma_shrinks_when_escape_time_drops() {
        let mut kernel = Adaptive::with_default_factor(uniform_box(1, -10.0, 10.0));
        let before = Fixture {
            state: Vector::zeros(1),
            escape_time: 7,
        };
        let after = Fixture {
            state: Vector::zeros(1),
            escape_time: 5,
        };
        let initial = scalar::to_f64(kernel.sigma_value());
        kernel.update(&before, &after);
        assert!(scalar::to_f64(kernel.sigma_value()) < initial);
    }

    #[test]
    fn sigma_is_capped_at_max_sigma() {
        let mut kernel = Adaptive::with_default_factor(uniform_box(1, -10.0, 10.0));
        let flat = Fixture {
            state: Vector::zeros(1),
            escape_time: 5,
        };
        for _ in 0..200 {
            kernel.update(&flat, &flat);
        }
        assert!((scalar::to_f64(kernel.sigma_value()) - 10.0).abs() < 1e-9);
    }
}
