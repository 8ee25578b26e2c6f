//! Injectable randomness for battle and encounter resolution.
//!
//! Every chance-based decision (damage rolls, capture rolls, encounter
//! checks) draws from a `GameRng` handed in by the caller, so tests can
//! script exact outcomes while production code pre-generates real ones.

/// A pre-generated sequence of random outcomes in `1..=100`.
///
/// Consumption is labelled with a reason string so a failing test prints
/// which decision ate which value.
pub struct GameRng {
    outcomes: Vec<u8>,
    index: usize,
}

impl GameRng {
    pub fn new_for_test(outcomes: Vec<u8>) -> Self {
        Self { outcomes, index: 0 }
    }

    pub fn new_random() -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        // More than enough values for one action or one map step.
        let outcomes: Vec<u8> = (0..100).map(|_| rng.random_range(1..=100)).collect();
        Self { outcomes, index: 0 }
    }

    /// Returns the next outcome in `1..=100`.
    ///
    /// Panics when the sequence is exhausted; a scripted test that runs dry
    /// is a test bug, and production sequences are sized far beyond what a
    /// single call chain can consume.
    pub fn next_outcome(&mut self, reason: &str) -> u8 {
        if self.index >= self.outcomes.len() {
            panic!(
                "GameRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                reason
            );
        }
        let outcome = self.outcomes[self.index];

        #[cfg(test)]
        println!("[RNG] Consumed {} for: {}", outcome, reason);

        self.index += 1;
        outcome
    }

    /// Maps the next outcome onto an inclusive range.
    pub fn next_in_range(&mut self, min: u16, max: u16, reason: &str) -> u16 {
        debug_assert!(min <= max);
        let span = max - min + 1;
        min + (u16::from(self.next_outcome(reason)) - 1) % span
    }
}
