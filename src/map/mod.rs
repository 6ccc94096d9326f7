//! The [`Map`] trait: the contract every iterated map `T: Omega -> Omega`
//! must satisfy to be driven by this crate's observables, proposals and
//! sampling engine.
//!
//! Concrete maps (tent, logistic, Manneville, standard, coupled standard,
//! N-coupled Hénon) are collaborators, not part of this crate's public
//! surface — per the scope boundary in SPEC_FULL.md §1, they live in the
//! test suite (`tests/support/maps.rs`) as fixtures exercising this trait.

use crate::domain::DomainBox;
use crate::numeric::{Matrix, Vector};

/// A discrete-time dynamical system `T: Omega -> Omega` on a bounded state
/// space, together with the data needed to drive escape-time and Lyapunov
/// observables over it.
pub trait Map {
    /// The dimension `D` of the state space.
    fn dim(&self) -> usize;

    /// A display name for the map (used in file-name templating by
    /// drivers), e.g. `"tent3.0"`.
    fn name(&self) -> &str;

    /// The sampling support: `D` half-open intervals bounding the box that
    /// initial conditions are drawn from and folded back into.
    fn boundary(&self) -> &DomainBox;

    /// Advances `point` one time step in place: `point <- T(point)`.
    fn advance(&self, point: &mut Vector);

    /// Returns the Jacobian of `T` at `point`.
    ///
    /// The returned reference aliases an internal scratch matrix owned by
    /// this map and is only valid until the next call to `jacobian` on the
    /// same map instance — exactly the original's `_jacobian` member
    /// returned by `Matrix const&`. Callers needing a stable copy must
    /// clone it before calling `jacobian` or `advance` again. This crate
    /// guarantees single-threaded, non-reentrant use (SPEC_FULL.md §5), so
    /// no synchronisation is needed to protect the scratch matrix.
    fn jacobian(&mut self, point: &Vector) -> &Matrix;

    /// Absorbing-set membership: `true` iff `point` has left the
    /// restraining region. The default `true` effectively disables
    /// escape-time iteration for maps that do not define an open system.
    fn has_exited(&self, _point: &Vector) -> bool {
        true
    }

    /// Folds `point` back into this map's boundary by the modular wrap
    /// described in [`DomainBox::apply_boundary_conditions`].
    fn apply_boundary_conditions(&self, point: &mut Vector) {
        self.boundary().apply_boundary_conditions(point);
    }
}
