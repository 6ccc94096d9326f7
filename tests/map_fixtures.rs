mod support;

use chaos_sampling::prelude::*;
use support::maps::{Manneville, NCoupledHenon, Tent};

#[test]
fn tent_a3_iteration_matches_closed_form() {
    let mut map = Tent::new(3.0);
    let point = Vector::from_vec(vec![scalar::new(0.5)]);
    let jac = scalar::to_f64(&map.jacobian(&point)[(0, 0)]);
    assert!((jac - (-1.5)).abs() < 1e-12);

    let mut point = point;
    map.advance(&mut point);
    assert!((scalar::to_f64(&point[0]) - 0.75).abs() < 1e-12);
}

#[test]
fn manneville_z2_iteration_matches_closed_form() {
    let mut map = Manneville::new(2.0);
    let point = Vector::from_vec(vec![scalar::new(0.5)]);

    let jacobian = map.jacobian(&point).clone();
    let tangent = Vector::from_vec(vec![scalar::new(1.0)]);
    let evolved_tangent = jacobian.mul_vec(&tangent);
    assert!((scalar::to_f64(&evolved_tangent[0]) - 2.0).abs() < 1e-12);

    let mut point = point;
    map.advance(&mut point);
    assert!((scalar::to_f64(&point[0]) - 0.75).abs() < 1e-12);
}

#[test]
fn n_coupled_henon_d6_iteration_matches_reference_values() {
    let mut map = NCoupledHenon::new(6, 3.0, 5.0, 0.3, 0.4);
    let mut point = Vector::from_vec(vec![scalar::new(0.11); 6]);
    map.advance(&mut point);

    let expected = [3.0209, 4.0209, 5.0209, 0.11, 0.11, 0.11];
    for (i, &e) in expected.iter().enumerate() {
        let got = scalar::to_f64(&point[i]);
        assert!((got - e).abs() < 1e-9, "component {i}: {got} vs {e}");
    }
}
