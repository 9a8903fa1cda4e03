use crate::domain::ports::seed_shuffler::SeedShuffler;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::Mutex;

/// Fresh thread-local randomness on every call.
pub struct ThreadRngShuffler;

impl SeedShuffler for ThreadRngShuffler {
    fn shuffle(&self, titles: &mut [String]) {
        titles.shuffle(&mut rand::rng());
    }
}

/// Reproducible shuffling from a fixed seed.
pub struct SeededShuffler {
    rng: Mutex<StdRng>,
}

impl SeededShuffler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl SeedShuffler for SeededShuffler {
    fn shuffle(&self, titles: &mut [String]) {
        match self.rng.lock() {
            Ok(mut rng) => titles.shuffle(&mut *rng),
            Err(poisoned) => titles.shuffle(&mut *poisoned.into_inner()),
        }
    }
}

/// Leaves the order untouched.
pub struct KeepOrder;

impl SeedShuffler for KeepOrder {
    fn shuffle(&self, _titles: &mut [String]) {}
}
