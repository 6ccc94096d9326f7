//! Proposal kernels for the Metropolis-Hastings / Wang-Landau engine: given
//! the current observable, draw a candidate next state and report the
//! Metropolis-Hastings correction term for the proposal density's
//! asymmetry.
//!
//! Every concrete proposal below pairs a candidate-generation rule with a
//! `log_acceptance` correction so that, composed with an observable's own
//! un-normalised weight, the resulting chain satisfies detailed balance.
//! `Uniform` and `PowerLawIsotropic` are symmetric (an independence sampler
//! and a location-symmetric step respectively), so their correction is
//! identically zero; `Isotropic`-derived kernels have a non-trivial
//! correction because their step size depends on the current observable.

mod adaptive;
mod anisotropic;
mod isotropic;
mod lyapunov_isotropic;
mod power_law;
mod tstar;
mod uniform;

pub use adaptive::Adaptive;
pub use anisotropic::Anisotropic;
pub use isotropic::Isotropic;
pub use lyapunov_isotropic::LyapunovIsotropic;
pub use power_law::PowerLawIsotropic;
pub use tstar::TstarProposal;
pub use uniform::Uniform;

use crate::domain::DomainBox;
use crate::numeric::{Scalar, Vector};
use crate::observable::Observe;

/// A Markov-chain proposal kernel over observable `O`.
pub trait Proposal<O: Observe> {
    /// The bounding box candidate states are folded back into.
    fn boundary(&self) -> &DomainBox;

    /// Draws a candidate next state given the current observable.
    fn propose(&mut self, result: &O) -> Vector;

    /// The Metropolis-Hastings correction `log(q(x|x') / q(x'|x))` for the
    /// last call to [`Proposal::propose`].
    fn log_acceptance(&self, result: &O, result_prime: &O) -> f64;

    /// Lets an adaptive kernel react to whether the last step was accepted.
    /// A no-op for non-adaptive kernels.
    fn update(&mut self, _result: &O, _result_prime: &O) {}

    /// The step magnitude used by the last [`Proposal::propose`] call, for
    /// diagnostics.
    fn delta(&self) -> &Scalar;

    /// Draws a fresh initial condition uniformly over the boundary box,
    /// independent of any chain state. Used to seed a Markov chain.
    fn propose_uniform(&self) -> Vector {
        self.boundary().sample_uniform()
    }
}

/// `x' = x + sigma * direction`, folded back into `boundary`.
pub(crate) fn propose_isotropic(
    point: &Vector,
    direction: &Vector,
    sigma: &Scalar,
    boundary: &DomainBox,
) -> Vector {
    let mut next = point.clone();
    next.add_scaled(sigma, direction);
    boundary.apply_boundary_conditions(&mut next);
    next
}

/// The Metropolis-Hastings correction for a half-normal isotropic step of
/// scale `sigma` (current state) vs. `sigma_prime` (candidate state), given
/// the step magnitude `delta` actually drawn (before the `sqrt(pi/2)`
/// rescaling applied by [`Isotropic`]).
pub(crate) fn log_acceptance_isotropic(sigma: &Scalar, sigma_prime: &Scalar, delta: &Scalar) -> f64 {
    use crate::numeric::scalar;
    let ratio = scalar::to_f64(delta) / scalar::to_f64(sigma);
    let ratio_sigma = scalar::to_f64(sigma) / scalar::to_f64(sigma_prime);
    ratio_sigma.ln() - 0.5 * ratio * ratio * (ratio_sigma * ratio_sigma - 1.0)
}
