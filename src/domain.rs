//! The domain box: an ordered sequence of half-open intervals bounding a
//! map's state space, and the modular-wrap boundary fold applied to it.

use crate::numeric::{scalar, Scalar, Vector};

/// A half-open interval `[lo, hi)`.
#[derive(Clone, Debug)]
pub struct Interval {
    pub lo: Scalar,
    pub hi: Scalar,
}

impl Interval {
    pub fn new(lo: Scalar, hi: Scalar) -> Self {
        debug_assert!(lo < hi, "interval lower bound must be below upper bound");
        Self { lo, hi }
    }

    pub fn width(&self) -> Scalar {
        self.hi.clone() - &self.lo
    }
}

/// An ordered sequence of `D` half-open intervals, the sampling support and
/// the absorbing-region-independent bounding box for a [`crate::map::Map`].
#[derive(Clone, Debug)]
pub struct DomainBox {
    intervals: Vec<Interval>,
}

impl DomainBox {
    pub fn new(intervals: Vec<Interval>) -> Self {
        Self { intervals }
    }

    pub fn dim(&self) -> usize {
        self.intervals.len()
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Folds every coordinate of `point` into this box by repeated additive
    /// wrap: `while x > hi { x -= hi - lo } while x < lo { x += hi - lo }`.
    ///
    /// This is `Map::apply_boundary_conditions` in the original, a `while`
    /// loop rather than a single modulus — preserved verbatim (see
    /// SPEC_FULL.md, §4.1) since it is the documented invariant under test,
    /// not an implementation detail to "clean up".
    pub fn apply_boundary_conditions(&self, point: &mut Vector) {
        debug_assert_eq!(point.len(), self.intervals.len());
        for (i, interval) in self.intervals.iter().enumerate() {
            let width = interval.width();
            while point[i] > interval.hi {
                point[i] -= width.clone();
            }
            while point[i] < interval.lo {
                point[i] += width.clone();
            }
        }
    }

    /// Draws a point uniformly from the box.
    pub fn sample_uniform(&self) -> Vector {
        let mut out = Vector::zeros(self.intervals.len());
        for (i, interval) in self.intervals.iter().enumerate() {
            let u = crate::numeric::rng::uniform();
            out[i] = interval.lo.clone() + interval.width() * u;
        }
        out
    }
}

/// Convenience constructor for a box where every coordinate shares the same
/// interval, e.g. `[0, 1)^D`.
pub fn uniform_box(dim: usize, lo: f64, hi: f64) -> DomainBox {
    DomainBox::new(
        (0..dim)
            .map(|_| Interval::new(scalar::new(lo), scalar::new(hi)))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_lands_inside_box() {
        let boxed = uniform_box(1, 0.0, 1.0);
        let mut p = Vector::from_vec(vec![scalar::new(3.7)]);
        boxed.apply_boundary_conditions(&mut p);
        let x = scalar::to_f64(&p[0]);
        assert!((0.0..1.0).contains(&x));
    }

    #[test]
    fn fold_handles_negative_overshoot() {
        let boxed = uniform_box(1, 0.0, 1.0);
        let mut p = Vector::from_vec(vec![scalar::new(-2.3)]);
        boxed.apply_boundary_conditions(&mut p);
        let x = scalar::to_f64(&p[0]);
        assert!((0.0..1.0).contains(&x));
    }
}
