//! An independence sampler: every proposal is drawn uniformly from the
//! boundary box, ignoring the current state entirely.

use super::Proposal;
use crate::domain::DomainBox;
use crate::numeric::{scalar, Scalar, Vector};
use crate::observable::Observe;

/// `x' ~ Uniform(boundary)`. Since the proposal density does not depend on
/// the current state, `q(x|x') = q(x'|x)` and the Metropolis-Hastings
/// correction is exactly zero.
pub struct Uniform {
    boundary: DomainBox,
    delta: Scalar,
}

impl Uniform {
    pub fn new(boundary: DomainBox) -> Self {
        Self {
            boundary,
            delta: scalar::zero(),
        }
    }
}

impl<O: Observe> Proposal<O> for Uniform {
    fn boundary(&self) -> &DomainBox {
        &self.boundary
    }

    fn propose(&mut self, result: &O) -> Vector {
        let next = self.propose_uniform();
        let mut displacement = next.clone();
        displacement.add_scaled(&scalar::new(-1.0), result.state());
        self.delta = displacement.norm();
        next
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
    use crate::numeric::rng;

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
        rng::seed(11);
        let mut proposal = Uniform::new(uniform_box(2, -1.0, 1.0));
        let result = Fixture {
            state: Vector::zeros(2),
        };
        for _ in 0..50 {
            let p = proposal.propose(&result);
            for i in 0..p.len() {
                let x = scalar::to_f64(&p[i]);
                assert!((-1.0..1.0).contains(&x));
            }
        }
    }
}
