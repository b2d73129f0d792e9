//! Random sources handed to the stream generators.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

/// The primitives a random stream needs from its source.
///
/// Every [`rand::Rng`] is a `RandomSource`, so `StdRng`, [`SplitMix64`],
/// `&mut R` and [`SharedRng`] all plug in directly.
pub trait RandomSource {
    /// Uniform float in `[0, 1)`.
    fn uniform_float(&mut self) -> f32;

    /// Uniform integer in the inclusive range `[min, max]`.
    ///
    /// Callers must pass `min <= max`; the stream constructors check this
    /// before any draw happens.
    fn uniform_int(&mut self, min: i32, max: i32) -> i32;

    /// Standard normal draw (mean 0, variance 1).
    fn gaussian(&mut self) -> f32 {
        let u1 = 1.0 - f64::from(self.uniform_float());
        let u2 = f64::from(self.uniform_float());
        box_muller(u1, u2) as f32
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn uniform_float(&mut self) -> f32 {
        self.r#gen::<f32>()
    }

    fn uniform_int(&mut self, min: i32, max: i32) -> i32 {
        self.gen_range(min..=max)
    }

    fn gaussian(&mut self) -> f32 {
        // 1 - [0, 1) keeps the log argument away from zero.
        let u1 = 1.0 - self.r#gen::<f64>();
        let u2 = self.r#gen::<f64>();
        box_muller(u1, u2) as f32
    }
}

/// Box–Muller transform. `u1` must lie in `(0, 1]`.
fn box_muller(u1: f64, u2: f64) -> f64 {
    (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
}

/// Splitmix64: small, fast, fully deterministic generator.
///
/// Useful when a reproducible stream is needed without pulling in a
/// cryptographic-strength generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl RngCore for SplitMix64 {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for SplitMix64 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}

/// A random source shared by several generators.
///
/// Clones draw from the same underlying state, interleaved in pull order.
/// Single-threaded only.
#[derive(Debug)]
pub struct SharedRng<R>(Rc<RefCell<R>>);

impl<R> SharedRng<R> {
    pub fn new(rng: R) -> Self {
        Self(Rc::new(RefCell::new(rng)))
    }
}

impl<R> Clone for SharedRng<R> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<R: RngCore> RngCore for SharedRng<R> {
    fn next_u32(&mut self) -> u32 {
        self.0.borrow_mut().next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.borrow_mut().next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.borrow_mut().fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.borrow_mut().try_fill_bytes(dest)
    }
}

/// How to seed the random source for a run.
///
/// `seed: None` seeds from OS entropy, so streams differ from run to run.
/// `seed: Some(_)` makes every stream built from the source reproducible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngConfig {
    pub seed: Option<u64>,
}

impl RngConfig {
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    pub fn is_reproducible(&self) -> bool {
        self.seed.is_some()
    }

    pub fn build(&self) -> StdRng {
        match self.seed {
            Some(seed) => {
                tracing::debug!(seed, "seeding random source");
                StdRng::seed_from_u64(seed)
            }
            None => {
                tracing::debug!("seeding random source from entropy");
                StdRng::from_entropy()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splitmix_reference_output() {
        let mut rng = SplitMix64::new(0);
        assert_eq!(rng.next_u64(), 0xe220_a839_7b1d_cdaf);
    }

    #[test]
    fn splitmix_is_reproducible() {
        let a: Vec<u64> = {
            let mut r = SplitMix64::seed_from_u64(42);
            (0..16).map(|_| r.next_u64()).collect()
        };
        let b: Vec<u64> = {
            let mut r = SplitMix64::from_seed(42u64.to_le_bytes());
            (0..16).map(|_| r.next_u64()).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn fill_bytes_handles_partial_chunks() {
        let mut a = SplitMix64::new(9);
        let mut b = SplitMix64::new(9);
        let mut buf = [0u8; 11];
        a.fill_bytes(&mut buf);
        let first = b.next_u64().to_le_bytes();
        let second = b.next_u64().to_le_bytes();
        assert_eq!(&buf[..8], &first);
        assert_eq!(&buf[8..], &second[..3]);
    }

    #[test]
    fn uniform_float_in_unit_interval() {
        let mut rng = SplitMix64::new(1);
        for _ in 0..10_000 {
            let v = rng.uniform_float();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn uniform_int_hits_both_bounds() {
        let mut rng = StdRng::seed_from_u64(5);
        let draws: Vec<i32> = (0..2_000).map(|_| rng.uniform_int(-2, 2)).collect();
        assert!(draws.iter().all(|v| (-2..=2).contains(v)));
        assert!(draws.contains(&-2));
        assert!(draws.contains(&2));
    }

    #[test]
    fn default_gaussian_uses_uniform_primitive() {
        struct Fixed(Vec<f32>);
        impl RandomSource for Fixed {
            fn uniform_float(&mut self) -> f32 {
                self.0.remove(0)
            }
            fn uniform_int(&mut self, min: i32, _max: i32) -> i32 {
                min
            }
        }
        // u1 = 1 - 0 = 1 gives a zero radius.
        let mut src = Fixed(vec![0.0, 0.25]);
        assert_eq!(src.gaussian(), 0.0);
    }

    #[test]
    fn box_muller_known_points() {
        let r = (-2.0 * 0.5f64.ln()).sqrt();
        assert!((box_muller(0.5, 0.0) - r).abs() < 1e-12);
        assert!((box_muller(0.5, 0.5) + r).abs() < 1e-12);
    }

    #[test]
    fn shared_rng_interleaves_draws() {
        let shared = SharedRng::new(SplitMix64::new(3));
        let mut a = shared.clone();
        let mut b = shared;
        let drawn = [a.next_u64(), b.next_u64(), a.next_u64()];

        let mut reference = SplitMix64::new(3);
        let expected = [
            reference.next_u64(),
            reference.next_u64(),
            reference.next_u64(),
        ];
        assert_eq!(drawn, expected);
    }

    #[test]
    fn rng_config_seeded_is_reproducible() {
        let config = RngConfig::seeded(7);
        assert!(config.is_reproducible());
        let a: Vec<u32> = (0..8).map(|_| config.build().next_u32()).collect();
        let mut rng = config.build();
        let first = rng.next_u32();
        assert!(a.iter().all(|v| *v == first));
    }

    #[test]
    fn rng_config_default_is_entropy() {
        let config = RngConfig::default();
        assert!(!config.is_reproducible());
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"seed":null}"#);
        let parsed: RngConfig = serde_json::from_str(r#"{"seed":12}"#).unwrap();
        assert_eq!(parsed, RngConfig::seeded(12));
    }
}
