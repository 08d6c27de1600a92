use log::Level;

/// Shared window for wheel suppression and the post-animation settle delay.
pub const GUARD_WINDOW_MS: f64 = 200.0;
pub const SCROLL_DURATION_MS: f64 = 1200.0;
pub const TOUCH_THRESHOLD_PX: f64 = 80.0;

pub const TOAST_LIFETIME_MS: u32 = 5000;
pub const CAROUSEL_INTERVAL_MS: u32 = 6000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapConfig {
    pub duration_ms: f64,
    pub touch_threshold_px: f64,
    pub wheel_interval_ms: f64,
    pub settle_ms: f64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            duration_ms: SCROLL_DURATION_MS,
            touch_threshold_px: TOUCH_THRESHOLD_PX,
            wheel_interval_ms: GUARD_WINDOW_MS,
            settle_ms: GUARD_WINDOW_MS,
        }
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose controller tracing while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
