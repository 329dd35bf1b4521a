//! Decorative star field for the game over screen
//!
//! Stars are plain data here; the web layer turns each one into a `.star` div
//! whose twinkle is driven by CSS.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// One twinkling star, positioned in percent of the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// Horizontal position, 0-100 %
    pub left: f32,
    /// Vertical position, 0-100 %
    pub top: f32,
    /// Twinkle animation period in seconds (1-4)
    pub duration: f32,
}

impl Star {
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            left: rng.random_range(0.0..100.0),
            top: rng.random_range(0.0..100.0),
            duration: rng.random_range(1.0..4.0),
        }
    }
}

/// Generate `count` stars from a seed (same seed, same sky)
pub fn generate(count: usize, seed: u64) -> Vec<Star> {
    let mut rng = Pcg32::seed_from_u64(seed);
    (0..count).map(|_| Star::random(&mut rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_and_ranges() {
        let stars = generate(100, 42);
        assert_eq!(stars.len(), 100);
        for s in &stars {
            assert!((0.0..100.0).contains(&s.left));
            assert!((0.0..100.0).contains(&s.top));
            assert!((1.0..4.0).contains(&s.duration));
        }
    }

    #[test]
    fn test_deterministic_per_seed() {
        assert_eq!(generate(20, 7), generate(20, 7));
        assert_ne!(generate(20, 7), generate(20, 8));
    }

    #[test]
    fn test_zero_stars() {
        assert!(generate(0, 1).is_empty());
    }
}
