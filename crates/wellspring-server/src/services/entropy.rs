//! Entropy Sources
//!
//! Concrete implementations of the `EntropySource` port. `ThreadEntropy`
//! is the production wiring; `SeededEntropy` pins every draw for tests and
//! reproducible runs.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use wellspring::ports::EntropySource;

/// Thread-local RNG, one fresh handle per draw
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadEntropy;

impl EntropySource for ThreadEntropy {
    fn uniform(&self, lo: f64, hi: f64) -> f64 {
        rand::thread_rng().gen_range(lo..hi)
    }

    fn pick(&self, lo: i64, hi: i64) -> i64 {
        rand::thread_rng().gen_range(lo..hi)
    }
}

/// Deterministic source seeded once; draws come from a single `StdRng`
/// behind a mutex so the source can be shared across requests
#[derive(Debug)]
pub struct SeededEntropy {
    rng: Mutex<StdRng>,
}

impl SeededEntropy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl EntropySource for SeededEntropy {
    fn uniform(&self, lo: f64, hi: f64) -> f64 {
        self.rng.lock().expect("entropy rng poisoned").gen_range(lo..hi)
    }

    fn pick(&self, lo: i64, hi: i64) -> i64 {
        self.rng.lock().expect("entropy rng poisoned").gen_range(lo..hi)
    }
}

/// Test double that replays scripted draws in order. Exhausted scripts
/// fall back to the lower bound of the requested range.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedEntropy {
    ints: Mutex<std::collections::VecDeque<i64>>,
    floats: Mutex<std::collections::VecDeque<f64>>,
}

#[cfg(test)]
impl ScriptedEntropy {
    pub fn new(ints: &[i64], floats: &[f64]) -> Self {
        Self {
            ints: Mutex::new(ints.iter().copied().collect()),
            floats: Mutex::new(floats.iter().copied().collect()),
        }
    }
}

#[cfg(test)]
impl EntropySource for ScriptedEntropy {
    fn uniform(&self, lo: f64, _hi: f64) -> f64 {
        self.floats.lock().unwrap().pop_front().unwrap_or(lo)
    }

    fn pick(&self, lo: i64, _hi: i64) -> i64 {
        self.ints.lock().unwrap().pop_front().unwrap_or(lo)
    }
}
