use rand::distr::StandardUniform;
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::core::Direction;

impl Distribution<Direction> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        Direction::ALL[rng.random_range(0..Direction::ALL.len())]
    }
}

/// A reproducible move list: the same `seed` always yields the same moves.
pub fn random_moves(count: usize, seed: u64) -> Vec<Direction> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.random()).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn same_seed_same_moves() {
        assert_eq!(random_moves(64, 7), random_moves(64, 7));
        assert_eq!(random_moves(10, 1).len(), 10);
    }

    #[test]
    fn every_direction_appears() {
        let moves = random_moves(200, 3);
        for direction in Direction::ALL {
            assert!(moves.contains(&direction), "{:?} never drawn", direction);
        }
    }
}
