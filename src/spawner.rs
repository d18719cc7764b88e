//! Randomised tree placement.

use crate::config::{
    MAX_GAP,
    MIN_GAP,
    Position,
};

/// Used when the caller hands us a zero seed; xorshift never leaves zero.
const FALLBACK_SEED: u32 = 0xDEAD_BEEF;

/// xorshift32. Seeded once, never reseeded.
#[derive(Clone, Debug)]
pub struct Rng(u32);

impl Rng {
    pub const fn new(seed: u32) -> Self {
        Self(if seed == 0 { FALLBACK_SEED } else { seed })
    }

    pub fn next(&mut self) -> u32 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 17;
        self.0 ^= self.0 << 5;
        self.0
    }

    /// Value in `[min, max)`. `max` must be greater than `min`.
    pub fn range(&mut self, min: u32, max: u32) -> u32 {
        min + self.next() % (max - min)
    }
}

/// Picks where a respawned tree goes, relative to the tree ahead of it.
#[derive(Clone, Debug)]
pub struct Spawner {
    rng: Rng,
}

impl Spawner {
    pub const fn new(seed: u32) -> Self {
        Self { rng: Rng::new(seed) }
    }

    /// `previous` plus a gap drawn from `[MIN_GAP, MAX_GAP)`.
    pub fn spawn(&mut self, previous: Position) -> Position {
        let gap = self.rng.range(MIN_GAP as u32, MAX_GAP as u32) as Position;
        previous.saturating_add(gap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_layout() {
        let mut a = Spawner::new(12345);
        let mut b = Spawner::new(12345);
        for prev in 0..50 {
            assert_eq!(a.spawn(prev), b.spawn(prev));
        }
    }

    #[test]
    fn zero_seed_still_produces_numbers() {
        let mut rng = Rng::new(0);
        assert_ne!(rng.next(), 0);
    }

    #[test]
    fn gaps_stay_in_range_and_cover_it() {
        let mut spawner = Spawner::new(7);
        let mut seen = [false; MAX_GAP as usize];
        for _ in 0..2000 {
            let gap = spawner.spawn(15) - 15;
            assert!((MIN_GAP..MAX_GAP).contains(&gap), "gap {gap}");
            seen[gap as usize] = true;
        }
        assert!(seen[MIN_GAP as usize..].iter().all(|&s| s));
    }

    #[test]
    fn spawn_is_always_past_min_gap() {
        let mut spawner = Spawner::new(99);
        for prev in [0, 1, 2, 15, 40] {
            assert!(spawner.spawn(prev) > prev + MIN_GAP - 1);
        }
    }
}
