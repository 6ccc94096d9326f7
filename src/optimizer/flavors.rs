//! The four named optimiser flavours from the original, each pairing one
//! observable variant with the proposal kernel its search is named after.

use super::Optimizer;
use crate::map::Map;
use crate::numeric::Scalar;
use crate::observable::{EscapeTime, EscapeWithMatrix, EscapeWithVector};
use crate::proposal::{Adaptive, Anisotropic, LyapunovIsotropic, PowerLawIsotropic};

/// Search using the power-law isotropic proposal over plain escape time.
pub fn power_law_escape_time<M: Map>(
    map: M,
    max_time: u64,
    min_s: Scalar,
    max_s: Scalar,
) -> Optimizer<EscapeTime, PowerLawIsotropic, M> {
    let boundary = map.boundary().clone();
    Optimizer::new(
        EscapeTime::new(max_time),
        PowerLawIsotropic::new(boundary, min_s, max_s),
        map,
        max_time,
    )
}

/// Search using the self-tuning adaptive proposal over plain escape time.
pub fn adaptive_escape_time<M: Map>(map: M, max_time: u64) -> Optimizer<EscapeTime, Adaptive, M> {
    let boundary = map.boundary().clone();
    Optimizer::new(
        EscapeTime::new(max_time),
        Adaptive::with_default_factor(boundary),
        map,
        max_time,
    )
}

/// Search using the Lyapunov-scaled isotropic proposal over the
/// tangent-vector observable.
pub fn isotropic_escape_with_vector<M: Map>(
    map: M,
    max_time: u64,
) -> Optimizer<EscapeWithVector, LyapunovIsotropic, M> {
    let boundary = map.boundary().clone();
    Optimizer::new(
        EscapeWithVector::new(max_time),
        LyapunovIsotropic::with_default_sigma0(boundary),
        map,
        max_time,
    )
}

/// Search using the anisotropic (Jacobian-SVD) proposal over the
/// product-Jacobian observable.
pub fn anisotropic_escape_with_matrix<M: Map>(
    map: M,
    dim: usize,
    max_time: u64,
) -> Optimizer<EscapeWithMatrix, Anisotropic, M> {
    let boundary = map.boundary().clone();
    Optimizer::new(
        EscapeWithMatrix::new(dim, max_time),
        Anisotropic::with_default_sigma0(boundary),
        map,
        max_time,
    )
}
