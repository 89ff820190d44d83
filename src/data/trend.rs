use chrono::{DateTime, TimeDelta, Utc};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::utils::round_to;

/// Seed for the hour containing `now - offset_hours`, written as `YYYYMMDDHH`.
/// An offset outside chrono's range seeds from `now`.
#[must_use]
pub fn hourly_seed(now: DateTime<Utc>, offset_hours: i64) -> u64 {
    let shifted = TimeDelta::try_hours(offset_hours)
        .and_then(|offset| now.checked_sub_signed(offset))
        .unwrap_or(now);
    shifted
        .format("%Y%m%d%H")
        .to_string()
        .parse()
        .unwrap_or_default()
}

/// Seeded source of bounded drift around base values.
pub struct Trend {
    rng: StdRng,
}

impl Trend {
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// `base * (1 + U)` with `U` uniform in `[-variance, variance]`, rounded to `digits`.
    pub fn next(&mut self, base: f64, variance: f64, digits: u32) -> f64 {
        let delta = if variance > 0.0 {
            1.0 + self.rng.random_range(-variance..=variance)
        } else {
            1.0
        };
        round_to(base * delta, digits)
    }

    /// Whole-number variant for counters.
    pub fn count(&mut self, base: f64, variance: f64) -> u32 {
        whole(self.next(base, variance, 0))
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole(value: f64) -> u32 {
    value.max(0.0).min(f64::from(u32::MAX)) as u32
}
