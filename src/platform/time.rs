//! Frame timing

use crate::consts::MAX_FRAME_DT;

/// Converts host frame timestamps (milliseconds) into tick deltas
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous frame, clamped to [`MAX_FRAME_DT`] so a
    /// stalled tab doesn't produce one huge step. The first frame yields 0.
    pub fn delta(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0).max(0.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        dt.min(MAX_FRAME_DT)
    }

    /// Forget the previous timestamp (after a pause or tab switch)
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.delta(1000.0), 0.0);
    }

    #[test]
    fn test_delta_and_clamp() {
        let mut clock = FrameClock::new();
        clock.delta(0.0);
        assert!((clock.delta(16.0) - 0.016).abs() < 1e-6);
        assert_eq!(clock.delta(5016.0), MAX_FRAME_DT);
        // Clock going backwards never yields a negative step
        assert_eq!(clock.delta(4000.0), 0.0);
    }

    #[test]
    fn test_reset() {
        let mut clock = FrameClock::new();
        clock.delta(0.0);
        clock.reset();
        assert_eq!(clock.delta(10_000.0), 0.0);
    }
}
