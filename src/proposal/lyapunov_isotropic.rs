//! The "Lyapunov proposal" (Leitao & Lopes, PRE 90, 052916): an isotropic
//! step whose scale shrinks with the observable's stretch, so trajectories
//! that have already diverged strongly are perturbed more gently.

use super::isotropic::{isotropic_log_acceptance, isotropic_propose, Isotropic};
use super::Proposal;
use crate::domain::DomainBox;
use crate::numeric::{scalar, Scalar, Vector};
use crate::observable::{HasStretch, Observe};

/// `sigma(result) = sigma0 / stretch(result)`.
pub struct LyapunovIsotropic {
    boundary: DomainBox,
    sigma0: Scalar,
    delta: Scalar,
}

impl LyapunovIsotropic {
    /// `sigma0` defaults to `10`, matching the original's default template
    /// argument.
    pub fn new(boundary: DomainBox, sigma0: Scalar) -> Self {
        Self {
            boundary,
            sigma0,
            delta: scalar::zero(),
        }
    }

    pub fn with_default_sigma0(boundary: DomainBox) -> Self {
        Self::new(boundary, scalar::new(10.0))
    }
}

impl<O: Observe + HasStretch> Isotropic<O> for LyapunovIsotropic {
    fn sigma(&self, result: &O) -> Scalar {
        self.sigma0.clone() / result.stretch()
    }

    fn boundary(&self) -> &DomainBox {
        &self.boundary
    }

    fn delta_mut(&mut self) -> &mut Scalar {
        &mut self.delta
    }
}

impl<O: Observe + HasStretch> Proposal<O> for LyapunovIsotropic {
    fn boundary(&self) -> &DomainBox {
        &self.boundary
    }

    fn propose(&mut self, result: &O) -> Vector {
        isotropic_propose(self, result)
    }

    fn log_acceptance(&self, result: &O, result_prime: &O) -> f64 {
        isotropic_log_acceptance(self, &self.delta, result, result_prime)
    }

    fn delta(&self) -> &Scalar {
        &self.delta
    }
}
