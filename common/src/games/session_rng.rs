use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of randomness for spawning food and obstacles.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform value in `[0, upper)`. `upper` must be positive.
    fn next_index(&mut self, upper: i32) -> i32;
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
}

impl RandomSource for SessionRng {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn next_index(&mut self, upper: i32) -> i32 {
        self.rng.random_range(0..upper)
    }
}

/// Replays a fixed list of unit values, cycling when exhausted.
#[cfg(test)]
pub(crate) struct ScriptedRng {
    values: Vec<f64>,
    cursor: usize,
}

#[cfg(test)]
impl ScriptedRng {
    pub(crate) fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty());
        Self { values, cursor: 0 }
    }

    pub(crate) fn consumed(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRng {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }

    fn next_index(&mut self, upper: i32) -> i32 {
        let index = (self.next_unit() * upper as f64).floor() as i32;
        index.clamp(0, upper - 1)
    }
}
