//! Decorative animation state for the landing and profile screens.
//!
//! Everything here takes an injected [`Rng`] so it can be driven
//! deterministically in tests.

use std::collections::VecDeque;

use rand::Rng;

/// Glyphs used by the falling rain.
pub const RAIN_GLYPHS: &[char] = &[
    '0', '1', 'ア', 'イ', 'ウ', 'エ', 'オ', 'カ', 'キ', 'ク', 'ケ', 'コ', 'サ', 'シ', 'ス', 'セ',
    'ソ', 'タ', 'チ', 'ツ', 'テ', 'ト',
];

fn random_glyph<R: Rng + ?Sized>(rng: &mut R) -> char {
    RAIN_GLYPHS[rng.gen_range(0..RAIN_GLYPHS.len())]
}

// =============================================================================
// Glyph rain
// =============================================================================

/// Columns of glyphs; every tick drops the oldest glyph of each column and
/// appends a fresh one.
#[derive(Clone, Debug, PartialEq)]
pub struct MatrixRain {
    columns: Vec<VecDeque<char>>,
}

impl MatrixRain {
    /// `columns` columns, each with a random trail of up to `max_trail` glyphs.
    pub fn new<R: Rng + ?Sized>(columns: usize, max_trail: usize, rng: &mut R) -> Self {
        let columns = (0..columns)
            .map(|_| {
                let len = rng.gen_range(0..=max_trail);
                (0..len).map(|_| random_glyph(rng)).collect()
            })
            .collect();
        Self { columns }
    }

    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for column in &mut self.columns {
            if column.pop_front().is_some() {
                column.push_back(random_glyph(rng));
            }
        }
    }

    /// Each column rendered as a string, top to bottom.
    pub fn columns(&self) -> impl Iterator<Item = String> + '_ {
        self.columns.iter().map(|c| c.iter().collect())
    }
}

// =============================================================================
// Name glitch
// =============================================================================

/// Replace each non-space character with a random printable ASCII character
/// with probability `probability`.
pub fn glitch<R: Rng + ?Sized>(text: &str, probability: f64, rng: &mut R) -> String {
    let probability = probability.clamp(0.0, 1.0);
    text.chars()
        .map(|c| {
            if !c.is_whitespace() && rng.gen_bool(probability) {
                char::from(rng.gen_range(33u8..=126))
            } else {
                c
            }
        })
        .collect()
}

// =============================================================================
// Status rotation
// =============================================================================

pub const STATUSES: [&str; 4] = ["ONLINE", "CODING", "BUILDING", "SHIPPING"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusCycle(usize);

impl StatusCycle {
    pub fn current(self) -> &'static str {
        STATUSES[self.0 % STATUSES.len()]
    }

    pub fn advance(self) -> Self {
        Self((self.0 + 1) % STATUSES.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_rain_is_deterministic_for_seed() {
        let a = MatrixRain::new(8, 20, &mut StdRng::seed_from_u64(7));
        let b = MatrixRain::new(8, 20, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert_eq!(a.columns().count(), 8);
    }

    #[test]
    fn test_rain_tick_shifts_columns() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut rain = MatrixRain::new(16, 20, &mut rng);
        let before: Vec<String> = rain.columns().collect();
        rain.tick(&mut rng);
        let after: Vec<String> = rain.columns().collect();

        for (old, new) in before.iter().zip(&after) {
            assert_eq!(old.chars().count(), new.chars().count());
            // Everything but the first glyph moved up by one.
            let shifted: String = old.chars().skip(1).collect();
            assert!(new.starts_with(&shifted));
        }
    }

    #[test]
    fn test_glitch_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(glitch("TECHNOCRAT", 0.0, &mut rng), "TECHNOCRAT");

        let out = glitch("TECH NOCRAT", 1.0, &mut rng);
        assert_eq!(out.chars().count(), 11);
        assert_eq!(out.chars().nth(4), Some(' '));
        assert!(out.chars().all(|c| c == ' ' || (33..=126).contains(&(c as u32))));
    }

    #[test]
    fn test_status_cycle_wraps() {
        let mut status = StatusCycle::default();
        let mut seen = vec![];
        for _ in 0..5 {
            seen.push(status.current());
            status = status.advance();
        }
        assert_eq!(
            seen,
            vec!["ONLINE", "CODING", "BUILDING", "SHIPPING", "ONLINE"]
        );
    }
}
