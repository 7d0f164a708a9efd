//! Uniform point sampling against the unit quarter-circle.

use pimc_core::{ErrorInfo, PimcError, RngHandle};
use rand::Rng;

/// Draws `n` points uniformly from the unit square and counts how many land
/// inside the unit quarter-circle (x^2 + y^2 <= 1).
///
/// Points are consumed from `rng` in (x, y) order and never retained, so
/// memory use is constant in `n`. The coordinates are 53-bit uniforms in
/// [0, 1).
pub fn sample_quarter_circle(rng: &mut RngHandle, n: u64) -> Result<u64, PimcError> {
    if n == 0 {
        return Err(PimcError::Sampling(
            ErrorInfo::new("sample-size-zero", "sample size must be positive")
                .with_context("n", "0")
                .with_hint("every study requests at least one point"),
        ));
    }
    let mut inside = 0_u64;
    for _ in 0..n {
        let x: f64 = rng.gen();
        let y: f64 = rng.gen();
        if x * x + y * y <= 1.0 {
            inside += 1;
        }
    }
    Ok(inside)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_points_is_rejected() {
        let mut rng = RngHandle::from_seed(1);
        let err = sample_quarter_circle(&mut rng, 0).unwrap_err();
        assert_eq!(err.info().code, "sample-size-zero");
    }

    #[test]
    fn count_never_exceeds_sample_size() {
        let mut rng = RngHandle::from_seed(7);
        for n in [1_u64, 2, 10, 1000] {
            let inside = sample_quarter_circle(&mut rng, n).unwrap();
            assert!(inside <= n);
        }
    }

    #[test]
    fn hit_rate_approaches_quarter_pi() {
        let mut rng = RngHandle::from_seed(42);
        let n = 200_000_u64;
        let inside = sample_quarter_circle(&mut rng, n).unwrap();
        let rate = inside as f64 / n as f64;
        // pi/4 with a generous band; sigma here is about 0.001.
        assert!((rate - std::f64::consts::FRAC_PI_4).abs() < 0.01);
    }
}
