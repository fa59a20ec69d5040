/// Periodic timer polled from the frame loop.
///
/// Fires on the first poll, then at most once per `period` seconds. The timer
/// lives exactly as long as its owner; dropping the owner deregisters it.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalTimer {
    period: f64,
    last_fired: Option<f64>,
}

impl IntervalTimer {
    pub fn new(period: f64) -> Self {
        Self {
            period: period.max(0.0),
            last_fired: None,
        }
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    pub fn last_fired(&self) -> Option<f64> {
        self.last_fired
    }

    pub fn poll(&mut self, now: f64) -> bool {
        // A clock stepping backwards re-arms the timer instead of stalling it.
        if let Some(last) = self.last_fired {
            if now >= last && now - last < self.period {
                return false;
            }
        }
        self.last_fired = Some(now);
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rain/timer.rs"]
mod tests;
