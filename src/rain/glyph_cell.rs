//! A single displayed character that occasionally shimmers.

use super::glyphs::GlyphAlphabet;
use super::rng::RainRng;
use super::timer::IntervalTimer;

/// Substitution parameters shared by every cell of a canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shimmer {
    /// Minimum seconds between two decisions of the same cell.
    pub interval: f64,
    /// Chance out of 100 that a tick shows a random glyph.
    pub percent: u32,
}

impl Default for Shimmer {
    fn default() -> Self {
        Self {
            interval: 0.5,
            percent: 2,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GlyphState {
    #[default]
    Original,
    Substituted,
}

#[derive(Clone, Debug)]
pub struct GlyphCell {
    assigned: char,
    displayed: char,
    state: GlyphState,
    timer: IntervalTimer,
}

impl GlyphCell {
    pub fn new(assigned: char, interval: f64) -> Self {
        Self {
            assigned,
            displayed: assigned,
            state: GlyphState::Original,
            timer: IntervalTimer::new(interval),
        }
    }

    pub fn assigned(&self) -> char {
        self.assigned
    }

    pub fn displayed(&self) -> char {
        self.displayed
    }

    pub fn state(&self) -> GlyphState {
        self.state
    }

    /// One independent decision; no memory of earlier ticks.
    pub fn evaluate(
        &self,
        shimmer: &Shimmer,
        alphabet: &GlyphAlphabet,
        rng: &mut RainRng,
    ) -> (char, GlyphState) {
        if rng.below(100) < shimmer.percent {
            (alphabet.random(rng), GlyphState::Substituted)
        } else {
            (self.assigned, GlyphState::Original)
        }
    }

    /// Re-decides the displayed glyph when the cell's timer is due.
    pub fn tick(
        &mut self,
        now: f64,
        shimmer: &Shimmer,
        alphabet: &GlyphAlphabet,
        rng: &mut RainRng,
    ) -> bool {
        if !self.timer.poll(now) {
            return false;
        }
        let (displayed, state) = self.evaluate(shimmer, alphabet, rng);
        self.displayed = displayed;
        self.state = state;
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rain/glyph_cell.rs"]
mod tests;
