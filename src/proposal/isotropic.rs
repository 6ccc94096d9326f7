//! The half-normal isotropic proposal family: a step of random direction
//! and a state-dependent magnitude `sigma(result)`, with the matching
//! Metropolis-Hastings correction for the asymmetry the state-dependent
//! scale introduces.
//!
//! Concrete kernels ([`super::LyapunovIsotropic`], [`super::Adaptive`])
//! implement [`Isotropic`] to supply `sigma`, and call
//! [`isotropic_propose`] / [`isotropic_log_acceptance`] from their
//! [`super::Proposal`] impl.

use super::{log_acceptance_isotropic, propose_isotropic};
use crate::numeric::{rng, scalar, Scalar, Vector};
use crate::observable::Observe;
use std::f64::consts::PI;

fn half_normal_constant() -> Scalar {
    scalar::new((PI / 2.0).sqrt())
}

/// A half-normal isotropic proposal kernel: `sigma(result)` gives the
/// scale of the step at the current observable.
pub trait Isotropic<O: Observe> {
    fn sigma(&self, result: &O) -> Scalar;
    fn boundary(&self) -> &crate::domain::DomainBox;
    fn delta_mut(&mut self) -> &mut Scalar;
}

/// `delta = sigma(result) * sqrt(pi/2) * |normal()|`; the `sqrt(pi/2)`
/// rescaling here is undone in [`isotropic_log_acceptance`].
pub(crate) fn isotropic_propose<O: Observe, K: Isotropic<O>>(kernel: &mut K, result: &O) -> Vector {
    let constant = half_normal_constant();
    let magnitude = kernel.sigma(result) * constant * rng::standard_normal().abs();
    let direction = rng::unit_vector(kernel.boundary().dim());
    *kernel.delta_mut() = magnitude.clone();
    propose_isotropic(result.state(), &direction, &magnitude, kernel.boundary())
}

pub(crate) fn isotropic_log_acceptance<O: Observe, K: Isotropic<O>>(
    kernel: &K,
    delta: &Scalar,
    result: &O,
    result_prime: &O,
) -> f64 {
    let constant = half_normal_constant();
    let rescaled = delta.clone() / constant;
    log_acceptance_isotropic(&kernel.sigma(result), &kernel.sigma(result_prime), &rescaled)
}
