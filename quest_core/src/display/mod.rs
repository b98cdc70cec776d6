//! Display helpers: the counting animation and step gauges.
//!
//! Nothing here affects game outcome. A front end can skip every frame and
//! still show the correct final value.

use quest_rules::{AnimationConfig, LOW_STEPS_THRESHOLD};
use serde::{Deserialize, Serialize};

/// Number of segments in the kilo indicator.
pub const INDICATOR_SEGMENTS: usize = 10;

/// Frames of a counter moving from one value to another at a fixed tick rate.
///
/// Each frame moves by `ceil(|from - to| / (duration / tick))`, and the last
/// frame lands exactly on the target.
#[derive(Debug, Clone)]
pub struct StepCounter {
    current: i32,
    target: i32,
    per_frame: i32,
    done: bool,
}

impl StepCounter {
    /// Plan an animation from `from` to `to`.
    pub fn new(from: i32, to: i32, timing: &AnimationConfig) -> Self {
        let distance = (i64::from(from) - i64::from(to)).unsigned_abs();
        let per_frame = if timing.duration_ms == 0 {
            distance
        } else {
            distance
                .saturating_mul(timing.tick_ms)
                .div_ceil(timing.duration_ms)
        };

        Self {
            current: from,
            target: to,
            per_frame: per_frame.clamp(1, i32::MAX as u64) as i32,
            done: from == to,
        }
    }

    /// Value currently on screen.
    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn target(&self) -> i32 {
        self.target
    }

    /// Amount each frame moves the counter.
    pub fn per_frame(&self) -> i32 {
        self.per_frame
    }
}

impl Iterator for StepCounter {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if self.done {
            return None;
        }

        let next = if self.target > self.current {
            self.current.saturating_add(self.per_frame).min(self.target)
        } else {
            self.current.saturating_sub(self.per_frame).max(self.target)
        };

        self.current = next;
        self.done = next == self.target;
        Some(next)
    }
}

/// Color band of the step progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressBand {
    /// Above half.
    Healthy,
    /// Above a quarter.
    Warning,
    Critical,
}

/// Gauge readings for a step pool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepGauge {
    pub steps: i32,
    pub max_steps: i32,
}

impl StepGauge {
    pub fn new(steps: i32, max_steps: i32) -> Self {
        Self { steps, max_steps }
    }

    /// Remaining share of the pool, floored at 0.
    pub fn percent(&self) -> f64 {
        if self.max_steps <= 0 {
            return 0.0;
        }
        (self.steps as f64 / self.max_steps as f64 * 100.0).max(0.0)
    }

    pub fn band(&self) -> ProgressBand {
        let percent = self.percent();
        if percent > 50.0 {
            ProgressBand::Healthy
        } else if percent > 25.0 {
            ProgressBand::Warning
        } else {
            ProgressBand::Critical
        }
    }

    /// Lit segments of the kilo indicator.
    pub fn segments(&self) -> [bool; INDICATOR_SEGMENTS] {
        let rounded = if self.max_steps <= 0 {
            0
        } else {
            (self.steps as f64 / self.max_steps as f64 * 100.0).round() as i64
        };
        let mut lit = [false; INDICATOR_SEGMENTS];
        for (i, segment) in lit.iter_mut().enumerate() {
            *segment = (i as i64) * 10 < rounded;
        }
        lit
    }

    pub fn is_low(&self) -> bool {
        self.steps <= LOW_STEPS_THRESHOLD
    }

    /// Text rendering of the indicator, e.g. `[######----]`.
    pub fn render_segments(&self) -> String {
        let body: String = self
            .segments()
            .iter()
            .map(|lit| if *lit { '#' } else { '-' })
            .collect();
        format!("[{}]", body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing() -> AnimationConfig {
        AnimationConfig::default()
    }

    #[test]
    fn test_counter_lands_on_target() {
        let frames: Vec<_> = StepCounter::new(1000, 900, &timing()).collect();

        // ceil(100 / 31.25) = 4 per frame
        assert_eq!(frames[0], 996);
        assert_eq!(*frames.last().unwrap(), 900);
        assert_eq!(frames.len(), 25);
        assert!(frames.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_counter_counts_up() {
        let frames: Vec<_> = StepCounter::new(0, 50, &timing()).collect();
        assert_eq!(*frames.last().unwrap(), 50);
        assert!(frames.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_counter_crosses_zero() {
        let frames: Vec<_> = StepCounter::new(100, -400, &timing()).collect();
        assert_eq!(*frames.last().unwrap(), -400);
        assert!(frames.len() <= 32);
    }

    #[test]
    fn test_counter_without_change_is_empty() {
        assert_eq!(StepCounter::new(500, 500, &timing()).count(), 0);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let timing = AnimationConfig {
            duration_ms: 0,
            tick_ms: 16,
        };
        let frames: Vec<_> = StepCounter::new(1000, 500, &timing).collect();
        assert_eq!(frames, vec![500]);
    }

    #[test]
    fn test_huge_tick_saturates() {
        let timing = AnimationConfig {
            duration_ms: 1,
            tick_ms: u64::MAX,
        };
        let counter = StepCounter::new(1000, 0, &timing);
        assert_eq!(counter.per_frame(), i32::MAX);
        assert_eq!(counter.collect::<Vec<_>>(), vec![0]);

        let frames: Vec<_> = StepCounter::new(i32::MAX, i32::MIN, &timing).collect();
        assert_eq!(frames.last(), Some(&i32::MIN));
    }

    #[test]
    fn test_gauge_bands() {
        assert_eq!(StepGauge::new(1000, 1000).band(), ProgressBand::Healthy);
        assert_eq!(StepGauge::new(500, 1000).band(), ProgressBand::Warning);
        assert_eq!(StepGauge::new(250, 1000).band(), ProgressBand::Critical);
        assert_eq!(StepGauge::new(-250, 1000).percent(), 0.0);
    }

    #[test]
    fn test_gauge_segments() {
        assert!(StepGauge::new(1000, 1000).segments().iter().all(|s| *s));
        assert!(StepGauge::new(0, 1000).segments().iter().all(|s| !*s));

        let gauge = StepGauge::new(650, 1000);
        assert_eq!(gauge.segments().iter().filter(|s| **s).count(), 7);
        assert_eq!(gauge.render_segments(), "[#######---]");
    }

    #[test]
    fn test_low_steps() {
        assert!(!StepGauge::new(101, 1000).is_low());
        assert!(StepGauge::new(100, 1000).is_low());
    }
}
