use super::Opponent;
use crate::Move;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// CPU opponent that throws uniformly at random.
/// Seeded instances replay the same sequence of throws.
#[derive(Debug, Clone)]
pub struct Fish(SmallRng);

impl Fish {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Fish {
    fn default() -> Self {
        Self(SmallRng::from_rng(&mut rand::rng()))
    }
}

impl From<Option<u64>> for Fish {
    fn from(seed: Option<u64>) -> Self {
        seed.map(Self::seeded).unwrap_or_default()
    }
}

impl Opponent for Fish {
    fn throw(&mut self) -> Move {
        let ref mut rng = self.0;
        Move::sample(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Probability = f32;

    #[test]
    fn uniform_over_ten_thousand_draws() {
        const DRAWS: usize = 10_000;
        const TOLERANCE: Probability = 0.03;
        let mut fish = Fish::seeded(0xF15);
        let mut counts = [0usize; 3];
        for _ in 0..DRAWS {
            counts[fish.throw() as usize] += 1;
        }
        for count in counts {
            let freq = count as Probability / DRAWS as Probability;
            assert!((freq - 1. / 3.).abs() < TOLERANCE, "frequency {}", freq);
        }
    }

    #[test]
    fn same_seed_same_throws() {
        let mut a = Fish::seeded(7);
        let mut b = Fish::seeded(7);
        for _ in 0..100 {
            assert_eq!(a.throw(), b.throw());
        }
    }

    #[test]
    fn unseeded_fish_still_throws_all_moves() {
        let mut fish = Fish::from(None::<u64>);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..512 {
            seen.insert(fish.throw());
        }
        assert_eq!(seen.len(), 3);
    }
}
