//! Sources of index choices for the simulation.
//!
//! [`RandomPicker`] is used by the binary; [`ScriptedPicker`] replays fixed
//! choices so tests can pin the client and dish that get picked.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Picks an index in `0..len`. Callers never pass `len == 0`.
pub trait Picker {
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform picks from any [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RandomPicker<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPicker<StdRng> {
    /// Reproducible picks for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Picker for RandomPicker<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// A picker that replays a fixed script.
///
/// # Example
/// ```ignore
/// let mut picker = ScriptedPicker::new([1, 0]);
/// // first pick chooses the second client, second pick the first dish
/// picker.verify(); // Ensures the whole script was consumed
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedPicker {
    script: VecDeque<usize>,
    requested: Vec<usize>,
}

impl ScriptedPicker {
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
            requested: Vec::new(),
        }
    }

    /// The `len` of every pick so far, in call order.
    pub fn requested(&self) -> &[usize] {
        &self.requested
    }

    /// Panics if scripted picks are left over.
    pub fn verify(&self) {
        assert!(
            self.script.is_empty(),
            "unused scripted picks: {:?}",
            self.script
        );
    }
}

impl Picker for ScriptedPicker {
    /// Returns the next scripted index, panicking when the script is exhausted
    /// or the index is out of range.
    fn pick(&mut self, len: usize) -> usize {
        self.requested.push(len);
        let index = self
            .script
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted pick left for len {}", len));
        assert!(index < len, "scripted pick {} out of range 0..{}", index, len);
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_picker_is_reproducible_and_in_range() {
        let mut a = RandomPicker::seeded(7);
        let mut b = RandomPicker::seeded(7);
        let picks_a: Vec<_> = (0..50).map(|_| a.pick(3)).collect();
        let picks_b: Vec<_> = (0..50).map(|_| b.pick(3)).collect();

        assert_eq!(picks_a, picks_b);
        assert!(picks_a.iter().all(|&i| i < 3));
    }

    #[test]
    fn test_scripted_picker_replays_script() {
        let mut picker = ScriptedPicker::new([2, 0]);
        assert_eq!(picker.pick(3), 2);
        assert_eq!(picker.pick(5), 0);
        assert_eq!(picker.requested(), [3, 5]);
        picker.verify();
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_scripted_pick_out_of_range_panics() {
        ScriptedPicker::new([4]).pick(2);
    }
}
