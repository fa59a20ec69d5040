use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use super::glyphs::GlyphAlphabet;
use super::rng::RainRng;

static NEXT_COLUMN_ID: AtomicU64 = AtomicU64::new(1);

/// Process-wide unique identity of a generated column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnId(u64);

impl ColumnId {
    fn next() -> Self {
        Self(NEXT_COLUMN_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// Inclusive `min..=max` pair as it appears in the config file.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds<T> {
    pub min: T,
    pub max: T,
}

impl<T: Copy + PartialOrd> Bounds<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    pub fn range(&self) -> RangeInclusive<T> {
        self.min..=self.max
    }

    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }

    pub fn contains(&self, v: T) -> bool {
        self.min <= v && v <= self.max
    }
}

/// Ranges new columns are drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnRanges {
    pub char_count: Bounds<usize>,
    pub font_size: Bounds<u8>,
    /// Fall speed in canvas pixels per second.
    pub speed: Bounds<f64>,
}

impl Default for ColumnRanges {
    fn default() -> Self {
        Self {
            char_count: Bounds::new(10, 30),
            font_size: Bounds::new(15, 22),
            speed: Bounds::new(30.0, 90.0),
        }
    }
}

/// One vertical strip of characters. Immutable once generated.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnModel {
    id: ColumnId,
    characters: Vec<char>,
    font_size: u8,
    x: f64,
    speed: f64,
}

impl ColumnModel {
    pub fn random(
        x: f64,
        ranges: &ColumnRanges,
        alphabet: &GlyphAlphabet,
        rng: &mut RainRng,
    ) -> Self {
        let count = rng.in_range(ranges.char_count.range());
        let characters = std::iter::repeat_with(|| alphabet.random(rng))
            .take(count)
            .collect();
        let font_size = rng.in_range(ranges.font_size.range());
        let speed = rng.in_range(ranges.speed.range());
        Self {
            id: ColumnId::next(),
            characters,
            font_size,
            x,
            speed,
        }
    }

    pub fn id(&self) -> ColumnId {
        self.id
    }

    pub fn characters(&self) -> &[char] {
        &self.characters
    }

    pub fn font_size(&self) -> u8 {
        self.font_size
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rain/column.rs"]
mod tests;
