//! Sample points for the diagnostic tables.

use std::iter::FusedIterator;

/// Heights for a wind profile table: fine near the ground, coarser aloft.
///
/// Starts at 0 m and steps by 0.5 m below 10 m, 1 m below 20 m, 5 m below
/// 100 m and 10 m from there on, stopping once the top height is passed.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightSchedule {
    next: f64,
    top: f64,
}

impl HeightSchedule {
    /// Heights from 0 up to and including `top` (m)
    pub fn new(top: f64) -> Self {
        Self { next: 0.0, top }
    }

    /// Step taken after height `z`
    pub fn step_after(z: f64) -> f64 {
        if z < 10.0 {
            0.5
        } else if z < 20.0 {
            1.0
        } else if z < 100.0 {
            5.0
        } else {
            10.0
        }
    }
}

impl Iterator for HeightSchedule {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if !self.top.is_finite() || self.next > self.top {
            return None;
        }
        let z = self.next;
        self.next = z + Self::step_after(z);
        Some(z)
    }
}

impl FusedIterator for HeightSchedule {}

/// Evenly spaced sample times over a horizon, both ends included.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSchedule {
    increment: f64,
    index: usize,
    steps: usize,
}

impl TimeSchedule {
    /// Default diagnostic horizon (s)
    pub const DEFAULT_HORIZON: f64 = 900.0;

    /// Default number of steps over the horizon
    pub const DEFAULT_STEPS: usize = 15;

    /// `steps + 1` times from 0 to `horizon`
    pub fn new(horizon: f64, steps: usize) -> Self {
        let increment = if steps == 0 {
            0.0
        } else {
            horizon / steps as f64
        };
        Self {
            increment,
            index: 0,
            steps,
        }
    }

    /// Time between samples (s)
    pub fn increment(&self) -> f64 {
        self.increment
    }
}

impl Default for TimeSchedule {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HORIZON, Self::DEFAULT_STEPS)
    }
}

impl Iterator for TimeSchedule {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.index > self.steps {
            return None;
        }
        let t = self.index as f64 * self.increment;
        self.index += 1;
        Some(t)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.steps + 1).saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TimeSchedule {}

impl FusedIterator for TimeSchedule {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_steps() {
        let heights: Vec<f64> = HeightSchedule::new(400.0).collect();

        assert_eq!(&heights[..4], &[0.0, 0.5, 1.0, 1.5]);
        assert!(heights.contains(&9.5));
        assert!(heights.contains(&10.0));
        assert!(heights.contains(&11.0));
        assert!(!heights.contains(&10.5));
        assert!(heights.contains(&20.0));
        assert!(heights.contains(&25.0));
        assert!(heights.contains(&95.0));
        assert!(heights.contains(&100.0));
        assert!(heights.contains(&110.0));
        assert_eq!(heights.last(), Some(&400.0));

        // 20 + 10 + 16 + 31 samples in the four bands
        assert_eq!(heights.len(), 77);
    }

    #[test]
    fn test_height_schedule_is_restartable() {
        let schedule = HeightSchedule::new(50.0);
        let first: Vec<f64> = schedule.clone().collect();
        let second: Vec<f64> = schedule.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_height_top_not_on_grid() {
        let heights: Vec<f64> = HeightSchedule::new(104.0).collect();
        assert_eq!(heights.last(), Some(&100.0));
        assert_eq!(HeightSchedule::new(-1.0).count(), 0);
        assert_eq!(HeightSchedule::new(f64::NAN).count(), 0);
        assert_eq!(HeightSchedule::new(f64::INFINITY).count(), 0);
    }

    #[test]
    fn test_default_time_schedule() {
        let times: Vec<f64> = TimeSchedule::default().collect();
        assert_eq!(times.len(), 16);
        assert_eq!(times[0], 0.0);
        assert_eq!(times[1], 60.0);
        assert_eq!(times[15], 900.0);
    }

    #[test]
    fn test_time_schedule_exact_size() {
        let mut schedule = TimeSchedule::new(100.0, 4);
        assert_eq!(schedule.len(), 5);
        schedule.next();
        assert_eq!(schedule.len(), 4);
        assert_eq!(schedule.collect::<Vec<_>>(), vec![25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn test_zero_steps_yields_origin() {
        let times: Vec<f64> = TimeSchedule::new(900.0, 0).collect();
        assert_eq!(times, vec![0.0]);
    }
}
