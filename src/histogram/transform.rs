//! Bijections applied to a value before it is binned.

/// `v` maps a raw value into the space a [`super::Histogram`] bins in;
/// `iv` is its inverse, used to report bin edges back in the original
/// units.
pub trait Transform {
    fn v(x: f64) -> f64;
    fn iv(y: f64) -> f64;
}

/// No transform: bins are linear in the observable itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl Transform for Identity {
    fn v(x: f64) -> f64 {
        x
    }
    fn iv(y: f64) -> f64 {
        y
    }
}

/// Bins are linear in `log2` of the observable, for escape times spanning
/// several orders of magnitude.
#[derive(Clone, Copy, Debug, Default)]
pub struct Log2;

impl Transform for Log2 {
    fn v(x: f64) -> f64 {
        x.log2()
    }
    fn iv(y: f64) -> f64 {
        y.exp2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log2_is_inverse_of_exp2() {
        for x in [1.0, 2.0, 5.5, 1024.0] {
            assert!((Log2::iv(Log2::v(x)) - x).abs() < 1e-9);
        }
    }
}
