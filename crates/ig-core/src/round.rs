//! Random round generation.
//!
//! Intercepts are drawn independently and uniformly from `-EXTENT..=EXTENT`
//! excluding zero. The two values may coincide; nothing else constrains them.

use crate::model::{Axis, EXTENT, Round};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Upper bound on rejection-sampling draws for one intercept.
pub const MAX_DRAW_ATTEMPTS: usize = 64;

/// Produces fresh rounds from a seeded RNG.
pub struct RoundGenerator<R = Pcg32> {
    rng: R,
}

impl RoundGenerator<Pcg32> {
    /// Deterministic generator: the same seed yields the same rounds.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> RoundGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw a new round. The target is the x-intercept with probability ½.
    pub fn generate(&mut self) -> Round {
        let a = self.draw_nonzero();
        let b = self.draw_nonzero();
        let target_axis = if self.rng.random_bool(0.5) {
            Axis::X
        } else {
            Axis::Y
        };
        let round = Round::from_parts(a, b, target_axis);
        log::debug!(
            "new round: x-intercept {}, y-intercept {}, target {:?}",
            round.x_intercept(),
            round.y_intercept(),
            target_axis
        );
        round
    }

    fn draw_nonzero(&mut self) -> i32 {
        for _ in 0..MAX_DRAW_ATTEMPTS {
            let v = self.rng.random_range(-EXTENT..=EXTENT);
            if v != 0 {
                return v;
            }
        }
        log::warn!("drew zero {MAX_DRAW_ATTEMPTS} times in a row; sampling sign and magnitude");
        let magnitude = self.rng.random_range(1..=EXTENT);
        if self.rng.random_bool(0.5) {
            magnitude
        } else {
            -magnitude
        }
    }
}
