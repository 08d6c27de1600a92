use crate::config::SnapConfig;

/// A navigation request derived from raw input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Next,
    Previous,
    GoTo(usize),
    Ignore,
}

impl Intent {
    pub fn is_ignore(&self) -> bool {
        matches!(self, Intent::Ignore)
    }
}

/// Raw input, timestamped in milliseconds on the page clock.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    Wheel { delta_y: f64, at: f64 },
    TouchStart { y: f64 },
    TouchEnd { y: f64, at: f64 },
    Key { key: String, at: f64 },
    Jump { index: usize, at: f64 },
}

impl InputEvent {
    pub fn at(&self) -> Option<f64> {
        match self {
            InputEvent::Wheel { at, .. }
            | InputEvent::TouchEnd { at, .. }
            | InputEvent::Key { at, .. }
            | InputEvent::Jump { at, .. } => Some(*at),
            InputEvent::TouchStart { .. } => None,
        }
    }
}

/// Turns wheel, touch and key input into [`Intent`]s.
///
/// Holds the little bit of memory the gestures need: when the last wheel
/// event was accepted and where the current touch began.
#[derive(Clone, Debug)]
pub struct InputNormalizer {
    wheel_interval_ms: f64,
    touch_threshold_px: f64,
    last_wheel_at: Option<f64>,
    touch_start_y: Option<f64>,
}

impl InputNormalizer {
    pub fn new(config: &SnapConfig) -> Self {
        Self {
            wheel_interval_ms: config.wheel_interval_ms,
            touch_threshold_px: config.touch_threshold_px,
            last_wheel_at: None,
            touch_start_y: None,
        }
    }

    pub fn wheel(&mut self, delta_y: f64, at: f64) -> Intent {
        if let Some(last) = self.last_wheel_at {
            if at - last < self.wheel_interval_ms {
                return Intent::Ignore;
            }
        }
        self.last_wheel_at = Some(at);

        if delta_y > 0.0 {
            Intent::Next
        } else if delta_y < 0.0 {
            Intent::Previous
        } else {
            Intent::Ignore
        }
    }

    pub fn touch_start(&mut self, y: f64) {
        self.touch_start_y = Some(y);
    }

    pub fn touch_end(&mut self, y: f64) -> Intent {
        let Some(start) = self.touch_start_y.take() else {
            return Intent::Ignore;
        };
        let diff = start - y;
        if diff.abs() <= self.touch_threshold_px {
            Intent::Ignore
        } else if diff > 0.0 {
            Intent::Next
        } else {
            Intent::Previous
        }
    }

    /// Maps a `KeyboardEvent.key` value. Everything is ignored while `busy`.
    pub fn key(&self, key: &str, len: usize, busy: bool) -> Intent {
        if busy {
            return Intent::Ignore;
        }
        match key {
            "ArrowDown" | "PageDown" | " " | "Spacebar" => Intent::Next,
            "ArrowUp" | "PageUp" => Intent::Previous,
            "Home" => Intent::GoTo(0),
            "End" => Intent::GoTo(len.saturating_sub(1)),
            _ => Intent::Ignore,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> InputNormalizer {
        InputNormalizer::new(&SnapConfig::default())
    }

    #[test]
    fn wheel_sign_picks_direction() {
        let mut n = normalizer();
        assert_eq!(n.wheel(120.0, 0.0), Intent::Next);
        assert_eq!(n.wheel(-120.0, 500.0), Intent::Previous);
    }

    #[test]
    fn wheel_events_inside_interval_are_suppressed() {
        let mut n = normalizer();
        assert_eq!(n.wheel(120.0, 1000.0), Intent::Next);
        assert_eq!(n.wheel(120.0, 1050.0), Intent::Ignore);
        assert_eq!(n.wheel(120.0, 1199.0), Intent::Ignore);
        // Suppressed events do not extend the window.
        assert_eq!(n.wheel(120.0, 1200.0), Intent::Next);
    }

    #[test]
    fn short_swipe_is_ignored() {
        let mut n = normalizer();
        n.touch_start(400.0);
        assert_eq!(n.touch_end(360.0), Intent::Ignore);
        n.touch_start(400.0);
        assert_eq!(n.touch_end(320.0), Intent::Ignore);
    }

    #[test]
    fn long_swipe_follows_finger_direction() {
        let mut n = normalizer();
        n.touch_start(400.0);
        assert_eq!(n.touch_end(250.0), Intent::Next);
        n.touch_start(250.0);
        assert_eq!(n.touch_end(400.0), Intent::Previous);
    }

    #[test]
    fn touch_end_without_start_is_ignored() {
        let mut n = normalizer();
        assert_eq!(n.touch_end(10.0), Intent::Ignore);
    }

    #[test]
    fn key_mapping() {
        let n = normalizer();
        assert_eq!(n.key("ArrowDown", 5, false), Intent::Next);
        assert_eq!(n.key("PageDown", 5, false), Intent::Next);
        assert_eq!(n.key(" ", 5, false), Intent::Next);
        assert_eq!(n.key("ArrowUp", 5, false), Intent::Previous);
        assert_eq!(n.key("PageUp", 5, false), Intent::Previous);
        assert_eq!(n.key("Home", 5, false), Intent::GoTo(0));
        assert_eq!(n.key("End", 5, false), Intent::GoTo(4));
        assert_eq!(n.key("Enter", 5, false), Intent::Ignore);
    }

    #[test]
    fn keys_are_ignored_while_busy() {
        let n = normalizer();
        assert_eq!(n.key("ArrowDown", 5, true), Intent::Ignore);
        assert_eq!(n.key("End", 5, true), Intent::Ignore);
    }
}
