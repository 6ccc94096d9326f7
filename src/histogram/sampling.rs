//! [`SamplingHistogram`]: a [`Histogram`] paired with the engine's running
//! estimate of the log density of states / log sampling weight at each bin.

use super::{Histogram, HistogramValue, Identity, Transform};
use std::ops::Deref;

/// A histogram of visits alongside `log_pi`, the sampler's current
/// estimate of the log un-normalised weight at each bin (Wang-Landau's
/// `ln g`, or a Metropolis-Hastings importance weight). Optionally carries
/// an externally supplied *exact* entropy, used in place of the visit-count
/// estimate wherever it would otherwise disagree (e.g. the known analytic
/// density of states for a test fixture).
#[derive(Clone, Debug)]
pub struct SamplingHistogram<T, Tr = Identity> {
    inner: Histogram<T, Tr>,
    log_pi: Vec<f64>,
    exact_entropy: Option<Vec<f64>>,
}

impl<T: HistogramValue, Tr: Transform> SamplingHistogram<T, Tr> {
    pub fn new(lower: T, upper: T, bins: usize) -> Self {
        let inner = Histogram::new(lower, upper, bins);
        let n = inner.bins() + 1;
        Self {
            inner,
            log_pi: vec![0.0; n],
            exact_entropy: None,
        }
    }

    /// The sampler's running estimate of `log pi(b)` at bin `b`.
    pub fn log_pi(&self, bin: usize) -> f64 {
        self.log_pi[bin]
    }

    /// Adds `delta` to `log_pi(bin)`, the Wang-Landau modification-factor
    /// step (`log_pi -= ln_f` on every visit).
    pub fn add_log_pi(&mut self, bin: usize, delta: f64) {
        self.log_pi[bin] += delta;
    }

    pub fn reset_log_pi(&mut self) {
        self.log_pi.iter_mut().for_each(|p| *p = 0.0);
    }

    /// Supplies an exact entropy curve (one value per bin, including the
    /// overflow bin), overriding the visit-count estimate in
    /// [`SamplingHistogram::entropy`].
    pub fn set_entropy(&mut self, entropy: Vec<f64>) {
        assert_eq!(
            entropy.len(),
            self.log_pi.len(),
            "exact entropy must have one value per bin, including the overflow bin"
        );
        self.exact_entropy = Some(entropy);
    }

    /// `log(count(b)) - log_pi(b)`, the estimated entropy at bin `b` (or
    /// the exact value from [`SamplingHistogram::set_entropy`] if set).
    pub fn entropy(&self, bin: usize) -> f64 {
        if let Some(exact) = &self.exact_entropy {
            exact[bin]
        } else {
            (self.inner.get(bin) as f64).ln() - self.log_pi[bin]
        }
    }

    /// Records a visit to the bin containing `value` — the sampler's
    /// "measure" step before any Wang-Landau-specific bookkeeping.
    pub fn measure(&mut self, value: T) {
        self.inner.add(value);
    }

    /// Resets visit counts only; `log_pi` (and any exact entropy) survive,
    /// matching the Wang-Landau per-stage restart.
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// `(value(b), entropy(b) - log(Z))` for every bin, normalised by a
    /// log-sum-exp so that `sum_b exp(entropy(b) - log Z) = 1`.
    pub fn export_entropy_rows(&self) -> Vec<(f64, f64)> {
        let entropies: Vec<f64> = (0..=self.inner.bins()).map(|b| self.entropy(b)).collect();
        let a_max = entropies.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let sum: f64 = entropies.iter().map(|&a| (a - a_max).exp()).sum();
        let log_z = a_max + sum.ln();
        (0..=self.inner.bins())
            .map(|b| (self.inner.value(b), entropies[b] - log_z))
            .collect()
    }
}

impl<T, Tr> Deref for SamplingHistogram<T, Tr> {
    type Target = Histogram<T, Tr>;

    fn deref(&self) -> &Histogram<T, Tr> {
        &self.inner
    }
}
