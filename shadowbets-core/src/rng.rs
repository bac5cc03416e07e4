//! Random draws used by the games.
//!
//! Every bit of non-determinism in a round comes through [`RandomSource`], so tests
//! can swap in [`SeededRandom`] or [`ScriptedRandom`] and force exact outcomes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

pub trait RandomSource: Send {
    /// Uniform integer in `low..=high`.
    fn uniform_int(&mut self, low: i64, high: i64) -> i64;

    fn uniform_bool(&mut self) -> bool;
}

impl dyn RandomSource + '_ {
    /// Uniform pick from `items`, `None` when the set is empty.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let last = items.len() as i64 - 1;
        let index = self.uniform_int(0, last).clamp(0, last) as usize;
        items.get(index)
    }
}

/// Backed by the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn uniform_int(&mut self, low: i64, high: i64) -> i64 {
        if high <= low {
            return low;
        }
        rand::thread_rng().gen_range(low..=high)
    }

    fn uniform_bool(&mut self) -> bool {
        rand::thread_rng().gen_bool(0.5)
    }
}

/// Reproducible draws from a fixed seed.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn uniform_int(&mut self, low: i64, high: i64) -> i64 {
        if high <= low {
            return low;
        }
        self.rng.gen_range(low..=high)
    }

    fn uniform_bool(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

/// Replays a queue of forced draws.
///
/// Each draw consumes one value, clamped into the requested range. Once the queue
/// is empty every integer draw returns `low` and every boolean draw returns `false`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: VecDeque<i64>,
}

impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = i64>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    pub fn push(&mut self, value: i64) {
        self.values.push_back(value);
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform_int(&mut self, low: i64, high: i64) -> i64 {
        match self.values.pop_front() {
            Some(value) if high > low => value.clamp(low, high),
            _ => low,
        }
    }

    fn uniform_bool(&mut self) -> bool {
        self.values.pop_front().map_or(false, |value| value != 0)
    }
}
