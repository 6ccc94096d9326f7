//! # Chaos Sampling
//!
//! `chaos_sampling` is a model-agnostic Metropolis-Hastings / Wang-Landau
//! sampling core for rare-event observables of iterated maps: escape
//! time through an absorbing region, and the finite-time Lyapunov
//! exponent of the tangent or product-Jacobian flow along the way.
//!
//! ## Overview
//!
//! A map `T: R^D -> R^D` with an absorbing set and a bounding box defines
//! a family of trajectories that eventually "escape". The escape time and
//! the rate at which nearby trajectories diverge (the Lyapunov exponent)
//! are both rare-event observables: the overwhelming majority of draws
//! from the natural measure escape quickly and expand slowly, while the
//! scientifically interesting tail — trajectories that linger, or stretch
//! unusually fast — is exponentially suppressed. This crate drives a
//! Markov chain over initial conditions whose stationary distribution is
//! biased to make that tail visible, either by a fixed importance
//! sampling weight (plain Metropolis-Hastings) or by a weight learned
//! on-line so that the resulting histogram is asymptotically flat
//! (Wang-Landau).
//!
//! ## Features
//!
//! - Generic over any map implementing [`map::Map`], any of four
//!   observable variants, and five proposal kernels
//! - Arbitrary-precision trajectory arithmetic ([`numeric::Scalar`],
//!   backed by `rug`/MPFR), so long escape times do not lose precision to
//!   `f64` underflow
//! - A Wang-Landau engine alongside plain Metropolis-Hastings, sharing
//!   the same histogram and proposal abstractions
//! - Deterministic seeding via a process-global RNG, for reproducible runs
//!
//! ## Example
//!
//! ```no_run
//! use chaos_sampling::prelude::*;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! // Define your map.
//! #[derive(Clone)]
//! struct MyMap {
//!     boundary: DomainBox,
//!     jacobian: Matrix,
//! }
//!
//! impl Map for MyMap {
//!     fn dim(&self) -> usize { 1 }
//!     fn name(&self) -> &str { "my-map" }
//!     fn boundary(&self) -> &DomainBox { &self.boundary }
//!     fn advance(&self, point: &mut Vector) {
//!         point[0] = point[0].clone() * scalar::new(2.0);
//!     }
//!     fn jacobian(&mut self, _point: &Vector) -> &Matrix {
//!         &self.jacobian
//!     }
//! }
//!
//! let map = MyMap {
//!     boundary: uniform_box(1, 0.0, 1.0),
//!     jacobian: Matrix::identity(1),
//! };
//!
//! let histogram = Rc::new(RefCell::new(SamplingHistogram::new(0u64, 1 << 20, 64)));
//! let proposal = Uniform::new(map.boundary().clone());
//! let mut engine = MetropolisHastings::new(EscapeTime::new(1 << 20), proposal, histogram, map);
//!
//! let result = engine.sample(10_000, 1_000);
//! println!("escape time: {}", result.observable());
//! ```

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod histogram;
pub mod io;
pub mod map;
pub mod numeric;
pub mod observable;
pub mod optimizer;
pub mod proposal;

/// Commonly used items, exported for convenience.
pub mod prelude {
    pub use crate::domain::{uniform_box, DomainBox, Interval};
    pub use crate::engine::{MetropolisHastings, WangLandau};
    pub use crate::error::ConfigError;
    pub use crate::histogram::{
        Histogram, HistogramValue, Identity, Log2, SamplingHistogram, Transform,
    };
    pub use crate::map::Map;
    pub use crate::numeric::{eigen, rng, scalar, Matrix, Scalar, Vector};
    pub use crate::observable::{
        EscapeTime, EscapeWithMatrix, EscapeWithVector, HasEigenvector, HasEscapeTime,
        HasJacobianProduct, HasLyapunov, HasStretch, Lyapunov, Observe,
    };
    pub use crate::optimizer::{
        adaptive_escape_time, anisotropic_escape_with_matrix, isotropic_escape_with_vector,
        power_law_escape_time, Optimizer, Profiler,
    };
    pub use crate::proposal::{
        Adaptive, Anisotropic, Isotropic, LyapunovIsotropic, PowerLawIsotropic, Proposal,
        TstarProposal, Uniform,
    };
}
