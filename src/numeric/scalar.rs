//! Arbitrary-precision scalar used throughout the sampling engine.
//!
//! The original `chaospp` core is built on `mpfr::mpreal`, configured once
//! at process startup via `mpfr::mpreal::set_default_prec(bits)`. This module
//! reproduces that contract on top of [`rug::Float`]: a process-wide default
//! precision, set once, read by every scalar constructor thereafter.

use std::sync::atomic::{AtomicU32, Ordering};

use rug::Float;

/// An arbitrary-precision real number. All arithmetic in the numeric kernel,
/// observables, proposals and histograms is expressed over this type.
pub type Scalar = Float;

const DEFAULT_PRECISION_BITS: u32 = 64;

static PRECISION_BITS: AtomicU32 = AtomicU32::new(DEFAULT_PRECISION_BITS);

/// Sets the process-wide default mantissa precision, in bits.
///
/// This must be called once at startup, before any [`Scalar`] is
/// constructed, exactly like `mpfr::mpreal::set_default_prec` in the
/// original implementation. Calling it after scalars already exist does not
/// retroactively change their precision — only scalars constructed from
/// then on are affected. Recognised values in the shipped test fixtures are
/// 64, 128, 256 and 512, but any value MPFR accepts is valid.
pub fn set_default_precision(bits: u32) {
    PRECISION_BITS.store(bits, Ordering::SeqCst);
}

/// Returns the current process-wide default precision, in bits.
pub fn default_precision() -> u32 {
    PRECISION_BITS.load(Ordering::SeqCst)
}

/// Builds a [`Scalar`] from an `f64` at the current default precision.
pub fn new(value: f64) -> Scalar {
    Float::with_val(default_precision(), value)
}

/// Builds a [`Scalar`] from an integer at the current default precision.
pub fn from_i64(value: i64) -> Scalar {
    Float::with_val(default_precision(), value)
}

/// Returns a fresh zero-valued [`Scalar`] at the current default precision.
pub fn zero() -> Scalar {
    new(0.0)
}

/// Narrows a [`Scalar`] to `f64`, e.g. for reporting or export.
pub fn to_f64(value: &Scalar) -> f64 {
    value.to_f64()
}
