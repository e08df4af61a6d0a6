//! Park–Miller minimal standard random number generator.

/// Modulus of the minimal standard generator, `2^31 - 1`.
pub const MODULUS: i64 = 2_147_483_647;

/// Multiplier of the minimal standard generator.
pub const MULTIPLIER: i64 = 16_807;

/// Park–Miller minimal standard linear congruential generator.
///
/// The state always lies in `1..MODULUS`, so every produced value falls in the
/// open interval `(0, 1)`. The generator yields the same stream for a given
/// seed on every platform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParkMiller {
    state: i64,
}

impl ParkMiller {
    /// Creates a generator from an arbitrary integer seed.
    ///
    /// The seed is reduced with a truncating remainder; non-positive results
    /// are shifted up by `MODULUS - 1`, so a seed of zero starts from
    /// `2_147_483_646`.
    #[must_use]
    pub fn new(seed: i64) -> Self {
        let mut state = seed % MODULUS;
        if state <= 0 {
            state += MODULUS - 1;
        }
        if state <= 0 {
            // Only a seed congruent to -(MODULUS - 1) lands here.
            state = MODULUS - 1;
        }
        Self { state }
    }

    /// Current internal state.
    #[must_use]
    pub const fn state(&self) -> i64 {
        self.state
    }

    /// Advances the generator and returns the new integer state.
    pub fn next_state(&mut self) -> i64 {
        self.state = self.state * MULTIPLIER % MODULUS;
        self.state
    }

    /// Advances the generator and returns a float in `(0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        self.next_state() as f64 / MODULUS as f64
    }
}

impl Iterator for ParkMiller {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_unit())
    }
}
