//! The power-law isotropic proposal ("exponential stagger distribution",
//! Sharma & Mehta, PRL 86, 2261): an isotropic step whose size is drawn
//! from a log-uniform (power-law) distribution between two scales,
//! favouring small steps but occasionally proposing a large one.

use super::{propose_isotropic, Proposal};
use crate::domain::DomainBox;
use crate::numeric::{rng, scalar, Scalar, Vector};
use crate::observable::Observe;

/// `delta = exp(-min_s + (-max_s + min_s) * u)`, `u ~ Uniform(0,1)`: the
/// constructor negates `min_s`/`max_s` so callers pass the (positive)
/// decade range `[min_s, max_s]` of the step size directly, matching the
/// convention of the original PRL proposal.
pub struct PowerLawIsotropic {
    boundary: DomainBox,
    min_s: Scalar,
    max_s: Scalar,
    delta: Scalar,
}

impl PowerLawIsotropic {
    pub fn new(boundary: DomainBox, min_s: Scalar, max_s: Scalar) -> Self {
        Self {
            boundary,
            min_s: -min_s,
            max_s: -max_s,
            delta: scalar::zero(),
        }
    }
}

impl<O: Observe> Proposal<O> for PowerLawIsotropic {
    fn boundary(&self) -> &DomainBox {
        &self.boundary
    }

    fn propose(&mut self, result: &O) -> Vector {
        let span = self.max_s.clone() - &self.min_s;
        self.delta = (self.min_s.clone() + span * rng::uniform()).exp();
        let direction = rng::unit_vector(self.boundary.dim());
        propose_isotropic(result.state(), &direction, &self.delta, &self.boundary)
    }

    fn log_acceptance(&self, _result: &O, _result_prime: &O) -> f64 {
        0.0
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
    }

    impl Observe for Fixture {
        type Value = ();
        fn observe<M: Map>(&mut self, _map: &mut M, state: Vector) {
            self.state = state;
        }
        fn state(&self) -> &Vector {
            &self.state
        }
        fn observable(&self) {}
    }

    #[test]
    fn proposed_points_stay_inside_boundary() {
        rng::seed(7);
        let mut proposal =
            PowerLawIsotropic::new(uniform_box(1, -50.0, 50.0), scalar::new(4.0), scalar::new(-1.0));
        let result = Fixture {
            state: Vector::from_vec(vec![scalar::new(0.0)]),
        };
        for _ in 0..200 {
            let p = proposal.propose(&result);
            let x = scalar::to_f64(&p[0]);
            assert!((-50.0..50.0).contains(&x));
        }
    }
}
