//! Source of uniformly random catalog positions.

use rand::Rng;

/// Produces catalog indices for the simulator.
///
/// Any `rand::Rng` is a draw source. Tests can supply fixed index
/// sequences instead.
pub trait DrawSource {
    /// Return an index in `0..len`. `len` is never zero.
    fn draw_index(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> DrawSource for R {
    fn draw_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_rng_draws_stay_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        for len in 1..50 {
            for _ in 0..100 {
                assert!(rng.draw_index(len) < len);
            }
        }
    }

    #[test]
    fn test_single_slot_always_zero() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert!((0..100).all(|_| rng.draw_index(1) == 0));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        let seq_a: Vec<usize> = (0..32).map(|_| a.draw_index(1000)).collect();
        let seq_b: Vec<usize> = (0..32).map(|_| b.draw_index(1000)).collect();
        assert_eq!(seq_a, seq_b);
    }
}
