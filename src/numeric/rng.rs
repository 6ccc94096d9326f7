//! Process-global random source for the sampling engine.
//!
//! `chaospp`'s `aux::urandom()`/`aux::nrandom()` are free functions backed by
//! a single MPFR random state; reproducibility comes from seeding that state
//! once at startup. This module keeps the teacher crate's PCG64 generator
//! and `seeded`-style API but promotes it to the process-wide singleton §5
//! of the spec calls for, since every observable/proposal in this crate
//! draws from the same source rather than owning one.

use std::sync::{Mutex, OnceLock};

use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use super::linalg::Vector;
use super::scalar::{self, Scalar};

/// Default random number generator used by the sampling engine. PCG64 is
/// fast and has good statistical properties, same choice as the driver this
/// crate descends from.
pub type Rng64 = rand_pcg::Pcg64;

fn global() -> &'static Mutex<Rng64> {
    static RNG: OnceLock<Mutex<Rng64>> = OnceLock::new();
    RNG.get_or_init(|| Mutex::new(Rng64::seed_from_u64(0)))
}

/// Seeds the process-global random source. Call this once at startup,
/// before any sampling call, for reproducible runs.
pub fn seed(seed: u64) {
    *global().lock().expect("rng mutex poisoned") = Rng64::seed_from_u64(seed);
}

/// Draws a scalar uniformly from `[0, 1)`.
///
/// Draws originate as an `f64` from the PCG64 source and are then promoted
/// to the current default precision; this crate does not source raw mantissa
/// bits for precisions beyond `f64`, which is a deliberate simplification
/// over `mpfr::mpreal`'s native arbitrary-precision random generation.
pub fn uniform() -> Scalar {
    scalar::new(uniform_f64())
}

/// Draws an `f64` uniformly from `[0, 1)` directly, for callers (Markov
/// chain accept/reject draws, the Wang-Landau acceptance test) that only
/// ever compare against an `f64` acceptance probability and would
/// otherwise pay for a pointless round-trip through [`Scalar`].
pub fn uniform_f64() -> f64 {
    global().lock().expect("rng mutex poisoned").random()
}

/// Draws a scalar from the standard normal distribution, mirroring
/// `mpfr::mpreal`'s `grandom()` (MPFR has no native Gaussian sampler wired
/// up through `rug`, so this crate draws an `f64` normal deviate and
/// promotes it to the current default precision).
pub fn standard_normal() -> Scalar {
    let x: f64 = global()
        .lock()
        .expect("rng mutex poisoned")
        .sample(StandardNormal);
    scalar::new(x)
}

/// Draws a unit vector in `R^d`, uniform on the sphere `S^{d-1}`.
///
/// Built from `d` independent standard-normal draws, normalised — the same
/// construction as `aux::unitaryVector` in the original.
pub fn unit_vector(d: usize) -> Vector {
    let mut v = Vector::zeros(d);
    for i in 0..d {
        v[i] = standard_normal();
    }
    v.normalize();
    v
}
