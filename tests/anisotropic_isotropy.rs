mod support;

use chaos_sampling::prelude::*;
use support::maps::NCoupledHenon;

/// Manually drives `map` from `state`, recording every visited point and
/// accumulating the product Jacobian in the same order `ComputeMatrix`
/// does (`product <- product * jacobian`, reinitialised to identity).
/// Mirrors the escape-with-trajectory fixture the anisotropic proposal's
/// own reference test drives, rebuilt here against only the public `Map`
/// surface since the library's internal escape/accumulation helpers are
/// not reachable from outside the crate.
fn drive<M: Map>(map: &mut M, state: Vector, max_time: u64) -> (u64, Matrix, Vec<Vector>) {
    let dim = state.len();
    let mut matrix = Matrix::identity(dim);
    let mut trajectory = Vec::new();
    let mut point = state;
    let mut t = 0u64;
    loop {
        let jacobian = map.jacobian(&point).clone();
        matrix.mul_assign(&jacobian);
        map.advance(&mut point);
        trajectory.push(point.clone());
        t += 1;
        if map.has_exited(&point) || t >= max_time {
            break;
        }
    }
    (t, matrix, trajectory)
}

#[derive(Clone)]
struct Snapshot {
    state: Vector,
    matrix: Matrix,
}

impl Observe for Snapshot {
    type Value = ();
    fn observe<M: Map>(&mut self, _map: &mut M, state: Vector) {
        self.state = state;
    }
    fn state(&self) -> &Vector {
        &self.state
    }
    fn observable(&self) {}
}

impl HasJacobianProduct for Snapshot {
    fn jacobian_product(&self) -> &Matrix {
        &self.matrix
    }
}

/// The anisotropic proposal builds its step from the singular vectors of
/// the trajectory's accumulated Jacobian; it should be roughly isotropic
/// once re-expressed in the coordinates the dynamics itself stretches, so
/// a proposed trajectory's late-time displacement shouldn't be
/// systematically larger along one axis than another.
#[test]
fn anisotropic_proposal_is_approximately_isotropic_at_trajectory_end() {
    rng::seed(99);
    scalar::set_default_precision(512);

    let mut map = NCoupledHenon::new(4, 3.0, 5.0, 0.3, 0.4);
    let x0 = Vector::from_vec(vec![
        scalar::new(2.247351146173699),
        scalar::new(-1.141970787318847),
        scalar::new(3.803983448890944),
        scalar::new(1.083416859646563),
    ]);

    let (escape_time, matrix, trajectory) = drive(&mut map, x0.clone(), 1_000);
    assert!(
        escape_time >= 2,
        "trajectory too short to have a penultimate iterate: {escape_time}"
    );

    let result = Snapshot { state: x0, matrix };
    let mut proposal = Anisotropic::with_default_sigma0(map.boundary().clone());

    let mut total = 0.0;
    let mut samples = 0u32;
    for _ in 0..100 {
        let candidate = proposal.propose(&result);
        let (escape_time_prime, _, trajectory_prime) = drive(&mut map, candidate, 1_000);
        if escape_time_prime < 2 {
            continue;
        }

        let end = &trajectory[trajectory.len() - 2];
        let end_prime = &trajectory_prime[trajectory_prime.len() - 2];

        let d0 = scalar::to_f64(&end_prime[0]) - scalar::to_f64(&end[0]);
        let d1 = scalar::to_f64(&end_prime[1]) - scalar::to_f64(&end[1]);
        if d0 != 0.0 && d1 != 0.0 {
            total += (d0 / d1).abs().log10();
            samples += 1;
        }
    }

    assert!(samples > 50, "too few usable samples: {samples}");
    let avg = total / samples as f64;
    assert!(
        avg.abs() < 1.0,
        "anisotropic proposal not approximately isotropic: avg log10|delta0/delta1| = {avg}"
    );

    scalar::set_default_precision(64);
}
