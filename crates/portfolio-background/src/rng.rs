//! Randomness seam for the rain engine
//!
//! The engine draws uniform numbers in [0,1) for glyph selection and for the
//! per-column restart trials. Going through a trait keeps ticks deterministic
//! in tests; the browser build uses `Math.random` like the host page would.

/// Source of uniform random numbers in [0,1)
pub trait RandomSource {
    /// Next uniform value in [0,1)
    fn next_f64(&mut self) -> f64;
}

/// Small seedable generator for native use and deterministic tests
///
/// SplitMix64 state transition; the top 53 bits of each output become the
/// mantissa of a uniform value in [0,1).
#[derive(Clone, Debug)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Create a generator from a seed
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

impl RandomSource for SplitMix64 {
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// `Math.random`-backed source for the browser build
#[cfg(feature = "wasm")]
#[derive(Clone, Copy, Debug, Default)]
pub struct JsRandom;

#[cfg(feature = "wasm")]
impl RandomSource for JsRandom {
    fn next_f64(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splitmix_in_unit_interval() {
        let mut rng = SplitMix64::new(0xDEADBEEF);
        for _ in 0..10_000 {
            let value = rng.next_f64();
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn test_splitmix_deterministic() {
        let mut a = SplitMix64::new(42);
        let mut b = SplitMix64::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
        }
    }

    #[test]
    fn test_splitmix_seeds_diverge() {
        let mut a = SplitMix64::new(1);
        let mut b = SplitMix64::new(2);
        let same = (0..100).filter(|_| a.next_f64() == b.next_f64()).count();
        assert!(same < 100);
    }
}
