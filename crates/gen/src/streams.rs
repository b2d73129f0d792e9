//! Stock generators built on [`Generator`].

use tessera_common::{MinMaxFloat, MinMaxInt, Result, SeqError};

use crate::generator::Generator;
use crate::random::RandomSource;

/// Yields `value` forever.
pub fn constant<'a, T: Clone + 'a>(value: T) -> Generator<'a, T> {
    Generator::infinite(move || value.clone())
}

/// Uniform floats in `[0, 1)`, forever.
pub fn uniform_floats<'a, R: RandomSource + 'a>(mut rng: R) -> Generator<'a, f32> {
    Generator::infinite(move || rng.uniform_float())
}

/// Uniform floats spread over `range`, forever.
///
/// Fails with `InvalidArgument` when `range.min > range.max`.
pub fn uniform_floats_in<'a, R: RandomSource + 'a>(
    mut rng: R,
    range: MinMaxFloat,
) -> Result<Generator<'a, f32>> {
    let range = range.validated()?;
    tracing::trace!(min = range.min, max = range.max, "uniform float stream");
    Ok(Generator::infinite(move || {
        range.clamp(range.lerp(rng.uniform_float()))
    }))
}

/// Standard normal floats (mean 0, variance 1), forever.
pub fn gaussian_floats<'a, R: RandomSource + 'a>(mut rng: R) -> Generator<'a, f32> {
    Generator::infinite(move || rng.gaussian())
}

/// Uniform integers in the inclusive range `[min, max]`, forever.
///
/// Fails with `InvalidArgument` when `min > max`.
pub fn bounded_ints<'a, R: RandomSource + 'a>(
    mut rng: R,
    min: i32,
    max: i32,
) -> Result<Generator<'a, i32>> {
    if min > max {
        return Err(SeqError::invalid(format!(
            "bounded_ints: min {min} is greater than max {max}"
        )));
    }
    tracing::trace!(min, max, "bounded int stream");
    Ok(Generator::infinite(move || rng.uniform_int(min, max)))
}

/// [`bounded_ints`] over a [`MinMaxInt`].
pub fn bounded_ints_in<'a, R: RandomSource + 'a>(
    rng: R,
    range: MinMaxInt,
) -> Result<Generator<'a, i32>> {
    bounded_ints(rng, range.min, range.max)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::random::{SharedRng, SplitMix64};

    #[test]
    fn constant_repeats_value() {
        let values: Vec<&str> = constant("x").take(5).collect();
        assert_eq!(values, vec!["x"; 5]);
    }

    #[test]
    fn constant_never_exhausts() {
        let mut g = constant(1u8);
        for _ in 0..10_000 {
            assert_eq!(g.next(), Some(1));
        }
        assert!(!g.is_exhausted());
    }

    #[test]
    fn uniform_floats_stay_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(11);
        assert!(uniform_floats(&mut rng).take(10_000).all(|v| (0.0..1.0).contains(&v)));
    }

    #[test]
    fn uniform_floats_reproducible_for_seed() {
        let a: Vec<f32> = uniform_floats(SplitMix64::new(99)).take(32).collect();
        let b: Vec<f32> = uniform_floats(SplitMix64::new(99)).take(32).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn uniform_floats_in_range() {
        let range = MinMaxFloat::new(-3.0, 5.0);
        let g = uniform_floats_in(SplitMix64::new(4), range).unwrap();
        assert!(g.take(5_000).all(|v| range.contains(v)));
    }

    #[test]
    fn uniform_floats_in_covers_full_float_range() {
        let range = MinMaxFloat::new(-f32::MAX, f32::MAX);
        let samples: Vec<f32> = uniform_floats_in(SplitMix64::new(1), range)
            .unwrap()
            .take(1_000)
            .collect();
        assert!(samples.iter().all(|v| v.is_finite()));
        let interior = samples
            .iter()
            .filter(|v| **v > -f32::MAX && **v < f32::MAX)
            .count();
        assert!(interior > 990, "only {interior} interior samples");
        assert!(samples.iter().any(|v| *v < 0.0));
        assert!(samples.iter().any(|v| *v > 0.0));
    }

    #[test]
    fn uniform_floats_in_rejects_inverted_range() {
        let err = uniform_floats_in(SplitMix64::new(4), MinMaxFloat::new(1.0, 0.0)).unwrap_err();
        assert!(matches!(err, SeqError::InvalidArgument(_)));
    }

    #[test]
    fn degenerate_bounds_always_yield_bound() {
        let g = bounded_ints(SplitMix64::new(0), 3, 3).unwrap();
        assert!(g.take(1_000).all(|v| v == 3));
    }

    #[test]
    fn bounded_ints_cover_inclusive_range() {
        let draws: Vec<i32> = bounded_ints(StdRng::seed_from_u64(21), 1, 6)
            .unwrap()
            .take(3_000)
            .collect();
        for face in 1..=6 {
            assert!(draws.contains(&face), "face {face} never drawn");
        }
        assert!(draws.iter().all(|v| (1..=6).contains(v)));
    }

    #[test]
    fn bounded_ints_reject_inverted_bounds() {
        let err = bounded_ints(SplitMix64::new(0), 5, 4).unwrap_err();
        assert!(matches!(err, SeqError::InvalidArgument(_)));
        assert!(bounded_ints_in(SplitMix64::new(0), MinMaxInt::new(2, 1)).is_err());
    }

    #[test]
    fn bounded_ints_full_i32_range() {
        let g = bounded_ints(SplitMix64::new(8), i32::MIN, i32::MAX).unwrap();
        assert_eq!(g.take(100).count(), 100);
    }

    #[test]
    fn gaussian_moments_with_fixed_seed() {
        const N: usize = 100_000;
        let samples: Vec<f64> = gaussian_floats(SplitMix64::new(0x5eed))
            .take(N)
            .map(f64::from)
            .collect();
        let mean = samples.iter().sum::<f64>() / N as f64;
        let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / N as f64;
        assert!(mean.abs() < 0.05, "mean {mean}");
        assert!((variance - 1.0).abs() < 0.1, "variance {variance}");
    }

    #[test]
    fn gaussian_moments_with_std_rng() {
        const N: usize = 100_000;
        let mut rng = StdRng::seed_from_u64(2024);
        let samples: Vec<f64> = gaussian_floats(&mut rng).take(N).map(f64::from).collect();
        let mean = samples.iter().sum::<f64>() / N as f64;
        let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / N as f64;
        assert!(mean.abs() < 0.05, "mean {mean}");
        assert!((variance - 1.0).abs() < 0.1, "variance {variance}");
    }

    #[test]
    fn streams_can_share_one_source() {
        let shared = SharedRng::new(SplitMix64::new(17));
        let mut ints = bounded_ints(shared.clone(), 0, 100).unwrap();
        let mut floats = uniform_floats(shared);

        let a = ints.next().unwrap();
        let b = floats.next().unwrap();

        let mut reference = SplitMix64::new(17);
        assert_eq!(a, reference.uniform_int(0, 100));
        assert_eq!(b, reference.uniform_float());
    }

    #[test]
    fn borrowed_source_advances_caller_rng() {
        let mut rng = SplitMix64::new(1);
        let first: Vec<f32> = uniform_floats(&mut rng).take(3).collect();
        let next: Vec<f32> = uniform_floats(&mut rng).take(3).collect();
        assert_ne!(first, next);
    }
}
