/// Measured extent of a laid-out region, in canvas pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Reports a region's measured size to a callback whenever it changes.
///
/// The first report always counts as a change.
#[derive(Debug, Default, Clone)]
pub struct SizeProbe {
    last: Option<Size>,
}

impl SizeProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<Size> {
        self.last
    }

    pub fn report(&mut self, size: Size, on_change: impl FnOnce(Size)) -> bool {
        if self.last == Some(size) {
            return false;
        }
        self.last = Some(size);
        on_change(size);
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rain/probe.rs"]
mod tests;
