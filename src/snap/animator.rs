use super::easing;

/// One in-flight scroll animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationRun {
    pub start_offset: f64,
    pub target_offset: f64,
    pub start_time: f64,
    pub duration: f64,
}

/// Result of sampling a run on a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub offset: f64,
    pub finished: bool,
}

impl AnimationRun {
    pub fn new(start_offset: f64, target_offset: f64, start_time: f64, duration: f64) -> Self {
        Self {
            start_offset,
            target_offset,
            start_time,
            duration: duration.max(1.0),
        }
    }

    /// No visible movement is needed to reach the target.
    pub fn is_stationary(&self) -> bool {
        (self.target_offset - self.start_offset).abs() < 0.5
    }

    pub fn progress(&self, now: f64) -> f64 {
        ((now - self.start_time) / self.duration).clamp(0.0, 1.0)
    }

    pub fn sample(&self, now: f64) -> Frame {
        if self.is_stationary() {
            return Frame {
                offset: self.target_offset,
                finished: true,
            };
        }
        let t = self.progress(now);
        if t >= 1.0 {
            return Frame {
                offset: self.target_offset,
                finished: true,
            };
        }
        Frame {
            offset: easing::interpolate(self.start_offset, self.target_offset, t),
            finished: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lands_exactly_on_target_when_done() {
        let run = AnimationRun::new(0.0, 1800.0, 100.0, 1200.0);
        assert_eq!(
            run.sample(1300.0),
            Frame {
                offset: 1800.0,
                finished: true
            }
        );
        assert!(run.sample(5000.0).finished);
    }

    #[test]
    fn midpoint_is_halfway() {
        let run = AnimationRun::new(0.0, 1800.0, 0.0, 1200.0);
        let frame = run.sample(600.0);
        assert!(!frame.finished);
        assert!((frame.offset - 900.0).abs() < 1e-9);
    }

    #[test]
    fn frames_before_start_hold_the_start_offset() {
        let run = AnimationRun::new(300.0, 900.0, 1000.0, 1200.0);
        let frame = run.sample(990.0);
        assert_eq!(frame.offset, 300.0);
        assert!(!frame.finished);
    }

    #[test]
    fn stationary_run_finishes_on_first_frame() {
        let run = AnimationRun::new(900.0, 900.0, 0.0, 1200.0);
        assert!(run.is_stationary());
        assert!(run.sample(0.0).finished);
    }

    #[test]
    fn zero_duration_does_not_divide_by_zero() {
        let run = AnimationRun::new(0.0, 100.0, 0.0, 0.0);
        assert!(run.sample(1.0).finished);
    }
}
