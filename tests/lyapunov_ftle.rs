mod support;

use chaos_sampling::prelude::*;
use support::maps::Tent;

#[test]
fn ftle_of_tent_three_equals_log_three() {
    let mut map = Tent::new(3.0);
    let mut observable = Lyapunov::new(1, 10);
    observable.observe(&mut map, Vector::from_vec(vec![scalar::new(1e-10)]));

    let ftle = observable.observable();
    let expected = 3.0f64.ln();
    assert!(
        (ftle - expected).abs() < 1e-9,
        "ftle {ftle} vs expected {expected}"
    );
}
