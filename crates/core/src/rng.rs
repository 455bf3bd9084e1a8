//! RNG module - seeded shape selection
//!
//! Piece selection is uniform over the seven kinds, driven by a simple
//! LCG so that a given seed always deals the same sequence (useful for
//! tests and replays).

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Current internal state (for restarting with the same sequence).
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Deals the next spawn shape, uniformly random among the 7 kinds.
#[derive(Debug, Clone)]
pub struct ShapeDealer {
    rng: SimpleRng,
}

impl ShapeDealer {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Deal the next shape.
    pub fn deal(&mut self) -> PieceKind {
        PieceKind::from_index(self.rng.next_range(7) as usize)
    }

    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for ShapeDealer {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_dealer_deterministic() {
        let mut a = ShapeDealer::new(7);
        let mut b = ShapeDealer::new(7);
        for _ in 0..50 {
            assert_eq!(a.deal(), b.deal());
        }
    }

    #[test]
    fn test_dealer_covers_all_kinds() {
        let mut dealer = ShapeDealer::new(1);
        let mut seen = [false; 7];
        // A few hundred draws are more than enough to hit all 7 kinds.
        for _ in 0..500 {
            seen[dealer.deal().index()] = true;
        }
        assert!(seen.iter().all(|&s| s), "draws missed a kind: {:?}", seen);
    }
}
