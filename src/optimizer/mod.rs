//! Escape-time optimisation: hill-climbing search for long-escaping
//! initial conditions, independent of the Metropolis-Hastings/Wang-Landau
//! sampling engines (there is no detailed-balance requirement here — only
//! "propose, measure, keep if not worse").

mod flavors;
mod profiler;

pub use flavors::{adaptive_escape_time, anisotropic_escape_with_matrix, isotropic_escape_with_vector, power_law_escape_time};
pub use profiler::Profiler;

use crate::map::Map;
use crate::numeric::Scalar;
use crate::observable::{HasEscapeTime, Observe};
use crate::proposal::Proposal;

/// A hill-climbing search over observable `O` using proposal kernel `P`
/// and map `M`: repeatedly perturbs the current point, keeping the
/// perturbation whenever it does not shorten the escape time, until
/// either the target `max_time` is reached or `max_trials` consecutive
/// non-improving trials have been exhausted.
pub struct Optimizer<O, P, M> {
    max_time: u64,
    proposal: P,
    observable: O,
    map: M,
    profilers: Vec<Box<dyn Profiler<O>>>,
}

impl<O, P, M> Optimizer<O, P, M>
where
    O: Observe + HasEscapeTime,
    P: Proposal<O>,
    M: Map,
{
    pub fn new(observable: O, proposal: P, map: M, max_time: u64) -> Self {
        Self {
            max_time,
            proposal,
            observable,
            map,
            profilers: Vec::new(),
        }
    }

    /// Registers a profiler; its `measure` is called on every trial of
    /// every subsequent [`Optimizer::get_point`] call.
    pub fn add_profiler(&mut self, profiler: Box<dyn Profiler<O>>) {
        self.profilers.push(profiler);
    }

    fn start_profilers(&mut self, result: &O) {
        for profiler in &mut self.profilers {
            profiler.start(result);
        }
    }

    fn measure_profilers(&mut self, result: &O, result_prime: &O, delta: &Scalar) {
        for profiler in &mut self.profilers {
            profiler.measure(result, result_prime, delta, 1.0);
        }
    }

    /// Searches for a long-escaping initial condition. `max_trials == 0`
    /// means "no cap": keep trying until `max_time` itself is reached.
    pub fn get_point(&mut self, max_trials: u64) -> O {
        let mut result = self.observable.clone();
        let x0 = self.proposal.propose_uniform();
        result.observe(&mut self.map, x0);
        self.start_profilers(&result);

        let mut trial: u64 = 0;
        while result.escape_time() < self.max_time && (max_trials == 0 || trial < max_trials) {
            trial += 1;
            let mut result_prime = self.observable.clone();
            let candidate = self.proposal.propose(&result);
            result_prime.observe(&mut self.map, candidate);

            let delta = self.proposal.delta().clone();
            self.measure_profilers(&result, &result_prime, &delta);
            self.proposal.update(&result, &result_prime);

            if result_prime.escape_time() > result.escape_time() {
                log::debug!(
                    "optimizer improved escape time: {} -> {}",
                    result.escape_time(),
                    result_prime.escape_time()
                );
                trial = 0;
            }
            if result_prime.escape_time() >= result.escape_time() {
                result = result_prime;
            }
        }
        result
    }
}
