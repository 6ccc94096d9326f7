//! `TstarProposal`: the step-size schedule derived in the thesis this
//! system is distilled from — a half-normal isotropic proposal whose scale
//! decays exponentially over a "remaining time" `t*` estimated from how
//! sharply the sampled entropy falls off around the current bin.

use super::isotropic::{isotropic_log_acceptance, isotropic_propose, Isotropic};
use super::Proposal;
use crate::domain::DomainBox;
use crate::histogram::{HistogramValue, Identity, SamplingHistogram};
use crate::numeric::{scalar, Scalar, Vector};
use crate::observable::{HasLyapunov, Observe};
use std::cell::RefCell;
use std::rc::Rc;

/// `finite_difference`: a central difference at interior points, one-sided
/// at either end of `values`.
fn finite_difference(values: &[f64], index: usize) -> f64 {
    if index == values.len() - 1 {
        values[index] - values[index - 1]
    } else if index == 0 {
        values[index + 1] - values[index]
    } else {
        (values[index + 1] - values[index - 1]) / 2.0
    }
}

/// Shares the engine's running histogram via `Rc<RefCell<_>>`: the engine
/// writes to it on every accepted measurement, this proposal only ever
/// reads it.
pub struct TstarProposal<O: Observe> {
    boundary: DomainBox,
    delta0: Scalar,
    tobs: u64,
    histogram: Rc<RefCell<SamplingHistogram<O::Value, Identity>>>,
    delta: Scalar,
}

impl<O: Observe> TstarProposal<O>
where
    O::Value: HistogramValue,
{
    pub fn new(
        boundary: DomainBox,
        delta0: Scalar,
        tobs: u64,
        histogram: Rc<RefCell<SamplingHistogram<O::Value, Identity>>>,
    ) -> Self {
        Self {
            boundary,
            delta0,
            tobs,
            histogram,
            delta: scalar::zero(),
        }
    }

    /// The estimated remaining observation time, clamped at zero, from
    /// §9.3 of the thesis this is grounded on: how far `t_obs` can shrink
    /// before the bin's entropy gradient and the distance from the most
    /// likely Lyapunov exponent would make the remaining time negative.
    fn t_star(&self, result: &O) -> f64
    where
        O: HasLyapunov,
    {
        let histogram = self.histogram.borrow();
        let lambda = result.lyapunov();
        let bin = histogram.bin(result.observable());

        let mut bin_max = 0;
        let mut max = f64::NEG_INFINITY;
        for b in 0..=histogram.bins() {
            let e = histogram.entropy(b);
            if e > max {
                max = e;
                bin_max = b;
            }
        }
        let lambda_l = histogram.value(bin_max);

        let log_pi: Vec<f64> = (0..=histogram.bins()).map(|b| histogram.log_pi(b)).collect();
        let mut d_log_pi = finite_difference(&log_pi, bin);
        d_log_pi /= histogram.h();

        let mut delta_t = 1.0 / (d_log_pi * (lambda - lambda_l)).abs();
        if d_log_pi.is_nan() || d_log_pi.is_infinite() {
            delta_t = self.tobs as f64;
        }

        (self.tobs as f64 - delta_t).max(0.0)
    }
}

impl<O: Observe + HasLyapunov> Isotropic<O> for TstarProposal<O>
where
    O::Value: HistogramValue,
{
    fn sigma(&self, result: &O) -> Scalar {
        let lambda = result.lyapunov();
        let t_star = self.t_star(result);
        self.delta0.clone() * scalar::new((-lambda * t_star).exp())
    }

    fn boundary(&self) -> &DomainBox {
        &self.boundary
    }

    fn delta_mut(&mut self) -> &mut Scalar {
        &mut self.delta
    }
}

impl<O: Observe + HasLyapunov> Proposal<O> for TstarProposal<O>
where
    O::Value: HistogramValue,
{
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
