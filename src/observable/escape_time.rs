//! `EscapeTime`: the escape time of the trajectory from a given initial
//! condition through the map's absorbing set.

use super::{drive_escape, HasEscapeTime, Observe};
use crate::map::Map;
use crate::numeric::Vector;

/// Stopping rule: `has_exited(x_t) or t >= max_time`. `observable()` is the
/// resulting escape time `t_e`, capped at `max_time`.
#[derive(Clone, Debug)]
pub struct EscapeTime {
    state: Vector,
    escape_time: u64,
    max_time: u64,
}

impl EscapeTime {
    /// Builds an `EscapeTime` observable capped at `max_time` iterations.
    /// Use `u64::MAX` for the "effectively infinite" default from
    /// SPEC_FULL.md §4.2.
    pub fn new(max_time: u64) -> Self {
        Self {
            state: Vector::zeros(0),
            escape_time: 0,
            max_time,
        }
    }
}

impl Observe for EscapeTime {
    type Value = u64;

    fn observe<M: Map>(&mut self, map: &mut M, state: Vector) {
        self.state = state.clone();
        self.escape_time = 0;

        let mut point = state;
        self.escape_time = drive_escape(map, &mut point, self.max_time, |map, point| {
            map.advance(point);
        });
    }

    fn state(&self) -> &Vector {
        &self.state
    }

    fn observable(&self) -> u64 {
        self.escape_time
    }
}

impl HasEscapeTime for EscapeTime {
    fn escape_time(&self) -> u64 {
        self.escape_time
    }

    fn max_time(&self) -> u64 {
        self.max_time
    }
}
