//! Dice - the gameplay face of the injected randomness port.

use std::sync::Arc;

use crate::infrastructure::ports::RandomPort;

/// Uniform rolls over an injected `RandomPort`.
#[derive(Clone)]
pub struct Dice {
    random: Arc<dyn RandomPort>,
}

impl Dice {
    pub fn new(random: Arc<dyn RandomPort>) -> Self {
        Self { random }
    }

    /// Uniform integer in `1..=sides`. A die with fewer than one side rolls 1.
    pub fn roll(&self, sides: i32) -> i32 {
        if sides <= 1 {
            return 1;
        }
        self.random.gen_range(1, sides)
    }

    pub fn d20(&self) -> i32 {
        self.roll(20)
    }

    /// `true` with `chance`% probability.
    pub fn percent(&self, chance: i32) -> bool {
        self.roll(100) <= chance
    }

    /// Uniform index into a collection of `len` items.
    pub fn pick_index(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let sides = i32::try_from(len).unwrap_or(i32::MAX);
        usize::try_from(self.roll(sides) - 1).ok()
    }

    pub fn random(&self) -> &Arc<dyn RandomPort> {
        &self.random
    }
}
