//! Itinerant Draws
//! Copyright (c) 2026 Mamy Ratsimbazafy
//! Licensed and distributed under either of
//!   * MIT license (license terms at the root of the package or at http://opensource.org/licenses/MIT).
//!   * Apache v2 license (license terms at the root of the package or at http://www.apache.org/licenses/LICENSE-2.0).
//! at your option. This file may not be copied, modified, or distributed except according to those terms.

//! itinerant-internals/draws
//! Bounded random draws for synthetic inventory: grid-aligned times,
//! fixed-precision amounts, tokens and picks without repetition.
//!
//! Every draw goes through a caller-supplied [`rand::Rng`], so a generator
//! built on these helpers is reproducible when handed a seeded RNG.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const TOKEN_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Minutes between two consecutive time slots.
pub const QUARTER_HOUR_MINUTES: i64 = 15;

/// Build the RNG for a single call.
///
/// With a seed the sequence is reproducible; without one it is seeded
/// from OS entropy. The returned generator is owned by the caller and
/// never shared between calls.
pub fn rng_for_call(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Bounded draws available on every [`Rng`].
pub trait Draws: Rng {
    /// Pick one element uniformly.
    ///
    /// # Panics
    ///
    /// Panics if `items` is empty.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        assert!(!items.is_empty(), "cannot pick from an empty slice");
        &items[self.gen_range(0..items.len())]
    }

    /// Pick `count` distinct elements, in random order.
    /// `count` is clamped to `items.len()`.
    fn pick_distinct<T: Clone>(&mut self, items: &[T], count: usize) -> Vec<T> {
        items
            .choose_multiple(self, count.min(items.len()))
            .cloned()
            .collect()
    }

    /// Uniform value on the 0.1 grid of `[lo, hi]`.
    fn one_decimal(&mut self, lo: f64, hi: f64) -> f64 {
        let (lo, hi) = grid_bounds(lo, hi, 10.0);
        self.gen_range(lo..=hi) as f64 / 10.0
    }

    /// Uniform amount on the 0.01 grid of `[lo, hi]`.
    fn cents(&mut self, lo: f64, hi: f64) -> f64 {
        let (lo, hi) = grid_bounds(lo, hi, 100.0);
        self.gen_range(lo..=hi) as f64 / 100.0
    }

    /// Date-time on `date` aligned to the quarter hour, between
    /// `first_hour:00` and `last_hour:00` inclusive.
    fn quarter_hour(&mut self, date: NaiveDate, first_hour: u32, last_hour: u32) -> NaiveDateTime {
        let slots_per_hour = 60 / QUARTER_HOUR_MINUTES;
        let last_slot = i64::from(last_hour.saturating_sub(first_hour)) * slots_per_hour;
        let slot = self.gen_range(0..=last_slot);
        let start = NaiveTime::from_hms_opt(first_hour.min(23), 0, 0).unwrap_or(NaiveTime::MIN);
        date.and_time(start) + Duration::minutes(slot * QUARTER_HOUR_MINUTES)
    }

    /// Uppercase alphanumeric token of `len` characters.
    fn token(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| char::from(*self.pick(TOKEN_ALPHABET)))
            .collect()
    }
}

impl<R: Rng + ?Sized> Draws for R {}

fn grid_bounds(lo: f64, hi: f64, scale: f64) -> (i64, i64) {
    let lo = (lo * scale).ceil() as i64;
    let hi = (hi * scale).floor() as i64;
    (lo, hi.max(lo))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = rng_for_call(Some(42));
        let mut b = rng_for_call(Some(42));
        assert_eq!(a.token(16), b.token(16));
        assert_eq!(a.cents(1.0, 100.0), b.cents(1.0, 100.0));
    }

    #[test]
    fn test_one_decimal_stays_on_grid() {
        let mut rng = rng_for_call(Some(7));
        for _ in 0..500 {
            let v = rng.one_decimal(3.0, 5.0);
            assert!((3.0..=5.0).contains(&v), "out of range: {}", v);
            let scaled = v * 10.0;
            assert!((scaled - scaled.round()).abs() < 1e-9, "not one decimal: {}", v);
        }
    }

    #[test]
    fn test_cents_within_bounds() {
        let mut rng = rng_for_call(Some(11));
        for _ in 0..500 {
            let v = rng.cents(99.0, 999.0);
            assert!((99.0..=999.0).contains(&v), "out of range: {}", v);
        }
    }

    #[test]
    fn test_quarter_hour_window() {
        let mut rng = rng_for_call(Some(3));
        let mut saw_last = false;
        for _ in 0..5000 {
            let t = rng.quarter_hour(date(), 6, 22);
            assert_eq!(t.date(), date());
            assert!(t.minute() % 15 == 0, "not on the grid: {}", t);
            assert!(t.hour() >= 6, "too early: {}", t);
            assert!(t.hour() < 22 || (t.hour() == 22 && t.minute() == 0), "too late: {}", t);
            saw_last |= t.hour() == 22;
        }
        assert!(saw_last, "22:00 should be reachable");
    }

    #[test]
    fn test_pick_distinct_has_no_repeats() {
        let mut rng = rng_for_call(Some(5));
        let items: Vec<u32> = (0..10).collect();
        let picked = rng.pick_distinct(&items, 6);
        assert_eq!(picked.len(), 6);
        let mut sorted = picked.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 6, "duplicates in {:?}", picked);

        let clamped = rng.pick_distinct(&items[..2], 5);
        assert_eq!(clamped.len(), 2);
    }

    #[test]
    fn test_token_alphabet() {
        let mut rng = rng_for_call(None);
        let token = rng.token(8);
        assert_eq!(token.len(), 8);
        assert!(token.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    #[should_panic(expected = "empty slice")]
    fn test_pick_empty_panics() {
        let mut rng = rng_for_call(Some(1));
        let empty: [u8; 0] = [];
        rng.pick(&empty);
    }
}
