use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform picks for the bots. `SessionRng` is the production
/// implementation; tests script the sequence instead.
pub trait MoveRandom {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
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

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }
}

impl MoveRandom for SessionRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Replays a fixed list of picks, wrapping each into `0..len`.
#[cfg(test)]
pub(crate) struct ScriptedRng {
    picks: Vec<usize>,
    next: usize,
}

#[cfg(test)]
impl ScriptedRng {
    pub(crate) fn new(picks: Vec<usize>) -> Self {
        Self { picks, next: 0 }
    }
}

#[cfg(test)]
impl MoveRandom for ScriptedRng {
    fn pick_index(&mut self, len: usize) -> usize {
        let pick = self.picks[self.next % self.picks.len()];
        self.next += 1;
        pick % len
    }
}
