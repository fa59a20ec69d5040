use std::sync::Arc;

use super::rng::RainRng;

pub const DEFAULT_GLYPHS: [char; 2] = ['0', '1'];

/// Fixed, ordered set of characters a column may display.
///
/// Cloning is cheap; every column and cell shares the same backing slice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphAlphabet {
    glyphs: Arc<[char]>,
}

impl GlyphAlphabet {
    /// Returns `None` for an empty set.
    pub fn new(glyphs: impl IntoIterator<Item = char>) -> Option<Self> {
        let glyphs: Arc<[char]> = glyphs.into_iter().collect();
        if glyphs.is_empty() {
            return None;
        }
        Some(Self { glyphs })
    }

    pub fn from_str_chars(s: &str) -> Option<Self> {
        Self::new(s.chars().filter(|c| !c.is_control()))
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.glyphs.contains(&ch)
    }

    pub fn random(&self, rng: &mut RainRng) -> char {
        let idx = rng.below(self.glyphs.len() as u32) as usize;
        self.glyphs[idx]
    }
}

impl Default for GlyphAlphabet {
    fn default() -> Self {
        Self {
            glyphs: Arc::from(DEFAULT_GLYPHS.as_slice()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rain/glyphs.rs"]
mod tests;
