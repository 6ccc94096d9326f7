//! The observable family: forward-iteration drivers that compute escape
//! time, stretch factor, tangent-vector growth and finite-time Lyapunov
//! exponent.
//!
//! All four variants share one contract (`Observe`): reset on `observe`,
//! iterate the map, finalise, and expose a sampled scalar via
//! `observable()`. They are cheaply-copyable (`Clone`) so the sampling
//! engine can keep the previous state around as a rollback target for a
//! rejected proposal, matching the original's copy-assignment contract.

mod compute_matrix;
mod escape_time;
mod escape_with_matrix;
mod escape_with_vector;
mod lyapunov;

pub use escape_time::EscapeTime;
pub use escape_with_matrix::EscapeWithMatrix;
pub use escape_with_vector::EscapeWithVector;
pub use lyapunov::Lyapunov;

use crate::map::Map;
use crate::numeric::{Matrix, Scalar, Vector};

/// The contract shared by every observable variant.
///
/// `observe` resets all accumulators, sets `state` to the given initial
/// condition, iterates the map until the variant's stopping rule fires, and
/// finalises any derived quantities (eigendecomposition, etc). Per the
/// invariant in SPEC_FULL.md, `state()` after `observe(map, x0)` always
/// equals `x0`.
pub trait Observe: Clone {
    /// The sampled scalar this observable produces: `u64` for escape-time
    /// variants, `f64` for the Lyapunov exponent.
    type Value;

    /// Resets accumulators, then iterates `map` from `state` until this
    /// variant's stopping rule fires.
    fn observe<M: Map>(&mut self, map: &mut M, state: Vector);

    /// The initial state passed to the most recent `observe` call.
    fn state(&self) -> &Vector;

    /// The sampled scalar.
    fn observable(&self) -> Self::Value;
}

/// Capability: this observable tracked an escape time (all escape-family
/// variants, not `Lyapunov` which runs a fixed number of steps instead).
pub trait HasEscapeTime {
    fn escape_time(&self) -> u64;
    fn max_time(&self) -> u64;
}

/// Capability: this observable can report a stretch factor (the
/// exponentially growing quantity whose log, divided by time, is the FTLE).
pub trait HasStretch {
    fn stretch(&self) -> Scalar;
}

/// Capability: this observable accumulated a product Jacobian and can hand
/// out a reference to it (used by the anisotropic proposal).
pub trait HasJacobianProduct {
    fn jacobian_product(&self) -> &Matrix;
}

/// Capability: this observable can report the eigenvector associated with
/// its dominant eigenvalue.
pub trait HasEigenvector {
    fn eigenvector(&self) -> &Vector;
}

/// Capability: this observable can report a finite-time Lyapunov exponent
/// (all three stretch-tracking variants: `EscapeWithVector`,
/// `EscapeWithMatrix`, `Lyapunov`). Used by [`crate::proposal::TstarProposal`].
pub trait HasLyapunov {
    fn lyapunov(&self) -> f64;
}

/// Runs the shared "evolve once, then check the stopping rule" escape loop
/// every escape-time-flavoured observable uses (`EscapeTime`,
/// `EscapeWithVector`, `EscapeWithMatrix`): `chaospp`'s `observe()` always
/// calls `evolve` unconditionally once before testing `has_exited`.
///
/// `step` performs one map iteration (and whatever per-step accumulation
/// the variant needs) on `point`; it must leave `point` advanced by exactly
/// one time step when it returns.
pub(crate) fn drive_escape<M: Map>(
    map: &mut M,
    point: &mut Vector,
    max_time: u64,
    mut step: impl FnMut(&mut M, &mut Vector),
) -> u64 {
    let mut t: u64 = 0;
    loop {
        step(map, point);
        t += 1;
        if map.has_exited(point) || t >= max_time {
            break;
        }
    }
    t
}
