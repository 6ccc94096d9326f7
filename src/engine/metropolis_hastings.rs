//! Plain Metropolis-Hastings over an observable, a proposal kernel and a
//! discretising histogram that doubles as the target log-density.

use crate::histogram::{HistogramValue, Identity, SamplingHistogram, Transform};
use crate::map::Map;
use crate::numeric::rng;
use crate::observable::Observe;
use crate::proposal::Proposal;
use std::cell::RefCell;
use std::rc::Rc;

/// Drives a Markov chain over observable `O`, using proposal kernel `P`
/// and map `M`, with acceptance weighted by `histogram.log_pi`.
///
/// `histogram` is shared via `Rc<RefCell<_>>` rather than owned outright:
/// some proposal kernels (`proposal::TstarProposal`) need their own
/// read-only handle onto the same histogram the engine is concurrently
/// updating, which plain borrowing cannot express across two sibling
/// fields of an engine/proposal pair.
pub struct MetropolisHastings<O, P, M, Tr = Identity>
where
    O: Observe,
    O::Value: HistogramValue,
    Tr: Transform,
{
    prototype: O,
    proposal: P,
    histogram: Rc<RefCell<SamplingHistogram<O::Value, Tr>>>,
    map: M,
}

impl<O, P, M, Tr> MetropolisHastings<O, P, M, Tr>
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
            prototype,
            proposal,
            histogram,
            map,
        }
    }

    pub fn histogram(&self) -> &Rc<RefCell<SamplingHistogram<O::Value, Tr>>> {
        &self.histogram
    }

    pub(crate) fn prototype_ref(&self) -> &O {
        &self.prototype
    }

    pub(crate) fn map_mut(&mut self) -> &mut M {
        &mut self.map
    }

    pub(crate) fn propose_uniform_for_seed(&self) -> crate::numeric::Vector {
        self.proposal.propose_uniform()
    }

    /// `log(pi'/pi) + proposal.log_acceptance(result, result')`.
    pub(crate) fn log_acceptance(&self, result: &O, result_prime: &O) -> f64 {
        let histogram = self.histogram.borrow();
        let bin = histogram.bin(result.observable());
        let bin_prime = histogram.bin(result_prime.observable());
        let delta = histogram.log_pi(bin_prime) - histogram.log_pi(bin);
        delta + self.proposal.log_acceptance(result, result_prime)
    }

    /// Records `result`'s observable into the histogram. `result_prime`
    /// and `acceptance` are unused by the base measurement (kept as
    /// parameters so [`super::WangLandau`] can override with access to
    /// the same signature).
    pub(crate) fn measure(&mut self, result: &O, _result_prime: &O, _acceptance: f64) {
        self.histogram.borrow_mut().measure(result.observable());
    }

    /// Draws a candidate next state, redrawing on an invalid (out-of-
    /// range) observable. `proposal.update` is called exactly once, after
    /// the first draw, even if subsequent redraws are needed — this
    /// mirrors the original's behaviour (adaptive kernels only see the
    /// first candidate of a markov step, never a redraw caused by falling
    /// outside the histogram's range).
    pub(crate) fn propose(&mut self, result: &O) -> O {
        let mut result_prime = result.clone();
        let candidate = self.proposal.propose(result);
        result_prime.observe(&mut self.map, candidate);

        self.proposal.update(result, &result_prime);

        while self.histogram.borrow().invalid_value(result_prime.observable()) {
            let candidate = self.proposal.propose(result);
            result_prime.observe(&mut self.map, candidate);
        }
        result_prime
    }

    /// One Markov-chain step: propose, weigh, optionally measure, accept
    /// or reject.
    pub fn markov_step(&mut self, result: &mut O, measure: bool) {
        let result_prime = self.propose(result);
        let log_acceptance = self.log_acceptance(result, &result_prime);
        let acceptance = log_acceptance.exp().min(1.0);

        if measure {
            self.measure(result, &result_prime, acceptance);
        }

        if rng::uniform_f64() < acceptance {
            *result = result_prime;
        }
    }

    /// Runs the chain from `min_bin` to `max_bin` and back down to
    /// `min_bin`, a single "round trip" used to estimate tunnelling times.
    /// `max_bin` defaults to `histogram.bins() - 1` when `None`.
    pub fn round_trip(&mut self, result: &mut O, min_bin: usize, max_bin: Option<usize>) {
        let max_bin = max_bin.unwrap_or_else(|| self.histogram.borrow().bins() - 1);
        let mut going_up = false;
        loop {
            self.markov_step(result, true);
            let bin = self.histogram.borrow().bin(result.observable());
            if !going_up && bin == max_bin {
                going_up = true;
            }
            if going_up && bin == min_bin {
                break;
            }
        }
    }

    /// Seeds the chain from a uniformly drawn initial condition, burns in
    /// for `convergence_samples` unmeasured steps, then runs
    /// `total_samples` measured steps. Returns the final observable.
    pub fn sample(&mut self, total_samples: u64, convergence_samples: u64) -> O {
        let mut result = self.prototype.clone();
        let x0 = self.proposal.propose_uniform();
        result.observe(&mut self.map, x0);

        for _ in 0..convergence_samples {
            self.markov_step(&mut result, false);
        }
        for _ in 0..total_samples {
            self.markov_step(&mut result, true);
        }
        result
    }
}
