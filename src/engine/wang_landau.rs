//! Wang-Landau sampling: Metropolis-Hastings with an on-line estimate of
//! `log_pi`, refined across geometrically shrinking stages.

use super::MetropolisHastings;
use crate::histogram::{HistogramValue, Identity, SamplingHistogram, Transform};
use crate::map::Map;
use crate::numeric::rng;
use crate::observable::Observe;
use crate::proposal::Proposal;
use std::cell::RefCell;
use std::rc::Rc;

/// Wraps [`MetropolisHastings`], decrementing `log_pi` at the visited bin
/// by the current modification factor `f` on every measured step, and
/// halving `f` at the end of each stage.
pub struct WangLandau<O, P, M, Tr = Identity>
where
    O: Observe,
    O::Value: HistogramValue,
    Tr: Transform,
{
    inner: MetropolisHastings<O, P, M, Tr>,
    f: f64,
}

impl<O, P, M, Tr> WangLandau<O, P, M, Tr>
where
    O: Observe,
    O::Value: HistogramValue,
    P: Proposal<O>,
    M: Map,
    Tr: Transform,
{
    pub fn new(
        prototype: O,
        proposal: P,
        histogram: Rc<RefCell<SamplingHistogram<O::Value, Tr>>>,
        map: M,
    ) -> Self {
        Self {
            inner: MetropolisHastings::new(prototype, proposal, histogram, map),
            f: 1.0,
        }
    }

    /// The current modification factor, halved at the end of every stage.
    pub fn ln_f(&self) -> f64 {
        self.f
    }

    pub fn histogram(&self) -> &Rc<RefCell<SamplingHistogram<O::Value, Tr>>> {
        self.inner.histogram()
    }

    fn measure(&mut self, result: &O, result_prime: &O) {
        self.inner.measure(result, result_prime, 0.0);
        let bin = self.inner.histogram().borrow().bin(result.observable());
        self.inner.histogram().borrow_mut().add_log_pi(bin, -self.f);
    }

    pub fn markov_step(&mut self, result: &mut O, measure: bool) {
        let result_prime = self.inner.propose(result);
        let log_acceptance = self.inner.log_acceptance(result, &result_prime);
        let acceptance = log_acceptance.exp().min(1.0);

        if measure {
            self.measure(result, &result_prime);
        }

        if rng::uniform_f64() < acceptance {
            *result = result_prime;
        }
    }

    pub fn round_trip(&mut self, result: &mut O, min_bin: usize, max_bin: Option<usize>) {
        let max_bin = max_bin.unwrap_or_else(|| self.inner.histogram().borrow().bins() - 1);
        let mut going_up = false;
        loop {
            self.markov_step(result, true);
            let bin = self.inner.histogram().borrow().bin(result.observable());
            if !going_up && bin == max_bin {
                going_up = true;
            }
            if going_up && bin == min_bin {
                break;
            }
        }
    }

    /// Runs `stages` rounds, each resetting the visit histogram and
    /// running `samples_per_stage` measured Markov steps, halving `f`
    /// between stages. Returns the final observable.
    pub fn sample(&mut self, stages: u32, samples_per_stage: u64) -> O {
        let mut result = self.seed();
        for stage in 0..stages {
            self.inner.histogram().borrow_mut().reset();
            for _ in 0..samples_per_stage {
                self.markov_step(&mut result, true);
            }
            self.f /= 2.0;
            log::debug!("wang-landau stage {} complete, ln_f -> {}", stage, self.f);
        }
        result
    }

    /// Runs `stages` rounds of `round_trips` round trips each instead of a
    /// fixed sample count, for estimating `log_pi` by tunnelling-time
    /// statistics rather than raw visit counts.
    pub fn approximate_entropy(&mut self, stages: u32, round_trips: u32) -> O {
        let mut result = self.seed();
        for stage in 0..stages {
            self.inner.histogram().borrow_mut().reset();
            for _ in 0..round_trips {
                self.round_trip(&mut result, 1, None);
            }
            self.f /= 2.0;
            log::debug!("wang-landau stage {} complete, ln_f -> {}", stage, self.f);
        }
        result
    }

    fn seed(&mut self) -> O {
        let mut result = self.inner.prototype_ref().clone();
        let x0 = self.inner.propose_uniform_for_seed();
        result.observe(self.inner.map_mut(), x0);
        result
    }
}
