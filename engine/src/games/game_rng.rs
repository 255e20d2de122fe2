use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::snake::{Direction, Position};

pub struct GameRng {
    rng: StdRng,
    seed: u64,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform position in `[0, width) x [0, height)`. Bounds must be positive.
    pub fn random_position(&mut self, width: i32, height: i32) -> Position {
        Position::new(
            self.rng.random_range(0..width),
            self.rng.random_range(0..height),
        )
    }

    pub fn random_direction(&mut self) -> Direction {
        Direction::ALL[self.rng.random_range(0..Direction::ALL.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = GameRng::new(7);
        let mut b = GameRng::new(7);
        assert_eq!(a.seed(), 7);
        for _ in 0..20 {
            assert_eq!(a.random_position(600, 300), b.random_position(600, 300));
            assert_eq!(a.random_direction(), b.random_direction());
        }
    }

    #[test]
    fn test_random_position_within_bounds() {
        let mut rng = GameRng::new(42);
        for _ in 0..1000 {
            let pos = rng.random_position(5, 3);
            assert!((0..5).contains(&pos.x));
            assert!((0..3).contains(&pos.y));
        }
    }

    #[test]
    fn test_random_direction_covers_all() {
        let mut rng = GameRng::new(1);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let direction = rng.random_direction();
            let index = Direction::ALL.iter().position(|d| *d == direction).unwrap();
            seen[index] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
