use std::collections::VecDeque;

use log::{debug, warn};

use super::animator::AnimationRun;
use super::intent::{InputEvent, InputNormalizer, Intent};
use super::surface::ScrollSurface;
use crate::config::SnapConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    Idle,
    Animating(AnimationRun),
    /// Animation finished; input stays disarmed until `until`.
    Settling { until: f64 },
}

/// What handling one event or frame did to the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Input produced no intent.
    Ignored,
    /// A transition is in flight or settling; the intent was dropped.
    Dropped,
    /// The intent resolved to the section already shown.
    Unchanged,
    /// The target section is missing from the container.
    Skipped { index: usize },
    Started { from: usize, to: usize },
    /// A frame moved the container but the run is not finished.
    InFlight,
    Completed { index: usize },
    Rearmed,
}

/// Section-progression state machine.
///
/// Input arrives as [`InputEvent`]s, is normalized into [`Intent`]s and
/// accepted only while [`Phase::Idle`]. Accepted intents start an
/// [`AnimationRun`] that frames advance until it lands on the target.
pub struct SnapController {
    config: SnapConfig,
    labels: Vec<String>,
    current: usize,
    phase: Phase,
    normalizer: InputNormalizer,
    queue: VecDeque<InputEvent>,
}

impl SnapController {
    pub fn new(labels: Vec<String>, config: SnapConfig) -> Self {
        let labels = if labels.is_empty() {
            vec!["content".to_string()]
        } else {
            labels
        };
        Self {
            normalizer: InputNormalizer::new(&config),
            config,
            labels,
            current: 0,
            phase: Phase::Idle,
            queue: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Animating(_))
    }

    /// True from the start of a transition until input is re-armed.
    pub fn is_transitioning(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Whether `key` would produce an intent right now, i.e. the page should
    /// not apply its own default for it.
    pub fn claims_key(&self, key: &str) -> bool {
        !self
            .normalizer
            .key(key, self.len(), self.is_animating())
            .is_ignore()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.queue.push_back(event);
    }

    /// Handles queued events in arrival order.
    pub fn drain(&mut self, surface: &mut impl ScrollSurface) -> Vec<Outcome> {
        let mut outcomes = Vec::with_capacity(self.queue.len());
        while let Some(event) = self.queue.pop_front() {
            outcomes.push(self.handle(event, surface));
        }
        outcomes
    }

    pub fn handle(&mut self, event: InputEvent, surface: &mut impl ScrollSurface) -> Outcome {
        if let Some(at) = event.at() {
            self.rearm(at);
        }
        let (intent, at) = match event {
            InputEvent::Wheel { delta_y, at } => (self.normalizer.wheel(delta_y, at), at),
            InputEvent::TouchStart { y } => {
                self.normalizer.touch_start(y);
                return Outcome::Ignored;
            }
            InputEvent::TouchEnd { y, at } => (self.normalizer.touch_end(y), at),
            InputEvent::Key { key, at } => {
                let busy = self.is_animating();
                (self.normalizer.key(&key, self.len(), busy), at)
            }
            InputEvent::Jump { index, at } => (Intent::GoTo(index), at),
        };
        self.apply(intent, at, surface)
    }

    /// Jump requested by the navigation UI. A no-op unless idle.
    pub fn go_to(&mut self, index: usize, at: f64, surface: &mut impl ScrollSurface) -> Outcome {
        self.handle(InputEvent::Jump { index, at }, surface)
    }

    pub fn apply(&mut self, intent: Intent, at: f64, surface: &mut impl ScrollSurface) -> Outcome {
        if intent.is_ignore() {
            return Outcome::Ignored;
        }
        if self.is_transitioning() {
            return Outcome::Dropped;
        }
        let Some(to) = self.target_for(intent) else {
            return Outcome::Ignored;
        };
        if to == self.current {
            return Outcome::Unchanged;
        }
        let Some(target_offset) = surface.section_offset(to) else {
            warn!("Section {} not found, skipping transition", to);
            return Outcome::Skipped { index: to };
        };

        let from = self.current;
        let run = AnimationRun::new(surface.scroll_top(), target_offset, at, self.config.duration_ms);
        self.phase = Phase::Animating(run);
        self.current = to;
        debug!(
            "Snapping from section {} to {} ({} -> {})",
            from, to, run.start_offset, run.target_offset
        );
        Outcome::Started { from, to }
    }

    /// Advances the in-flight run by one display frame.
    pub fn frame(&mut self, now: f64, surface: &mut impl ScrollSurface) -> Outcome {
        match self.phase {
            Phase::Animating(run) => {
                let frame = run.sample(now);
                surface.set_scroll_top(frame.offset);
                if frame.finished {
                    self.phase = Phase::Settling {
                        until: now + self.config.settle_ms,
                    };
                    debug!("Landed on section {}", self.current);
                    Outcome::Completed {
                        index: self.current,
                    }
                } else {
                    Outcome::InFlight
                }
            }
            Phase::Settling { .. } => {
                if self.rearm(now) {
                    Outcome::Rearmed
                } else {
                    Outcome::Ignored
                }
            }
            Phase::Idle => Outcome::Ignored,
        }
    }

    /// Returns to idle once the settle window has passed.
    pub fn rearm(&mut self, now: f64) -> bool {
        match self.phase {
            Phase::Settling { until } if now >= until => {
                self.phase = Phase::Idle;
                true
            }
            _ => false,
        }
    }

    fn target_for(&self, intent: Intent) -> Option<usize> {
        let last = self.len() - 1;
        match intent {
            Intent::Next => Some((self.current + 1).min(last)),
            Intent::Previous => Some(self.current.saturating_sub(1)),
            Intent::GoTo(index) => Some(index.min(last)),
            Intent::Ignore => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snap::surface::FakeSurface;

    const VIEWPORT: f64 = 900.0;

    fn controller(count: usize) -> (SnapController, FakeSurface) {
        let labels = (0..count).map(|i| format!("Section {}", i + 1)).collect();
        (
            SnapController::new(labels, SnapConfig::default()),
            FakeSurface::stacked(count, VIEWPORT),
        )
    }

    /// Runs frames at 60fps from `start` until the controller is idle again.
    fn settle(ctl: &mut SnapController, surface: &mut FakeSurface, start: f64) -> f64 {
        let mut now = start;
        while ctl.is_transitioning() {
            now += 16.0;
            ctl.frame(now, surface);
            assert!(now - start < 10_000.0, "controller never settled");
        }
        now
    }

    #[test]
    fn starts_idle_at_first_section() {
        let (ctl, _) = controller(5);
        assert_eq!(ctl.current(), 0);
        assert_eq!(ctl.phase, Phase::Idle);
        assert!(!ctl.is_animating());
    }

    #[test]
    fn empty_registry_falls_back_to_single_section() {
        let ctl = SnapController::new(Vec::new(), SnapConfig::default());
        assert_eq!(ctl.len(), 1);
    }

    #[test]
    fn rapid_wheel_events_trigger_a_single_transition() {
        let (mut ctl, mut surface) = controller(5);
        ctl.push(InputEvent::Wheel { delta_y: 120.0, at: 1000.0 });
        ctl.push(InputEvent::Wheel { delta_y: 120.0, at: 1050.0 });

        let outcomes = ctl.drain(&mut surface);
        assert_eq!(
            outcomes,
            vec![Outcome::Started { from: 0, to: 1 }, Outcome::Ignored]
        );
        settle(&mut ctl, &mut surface, 1050.0);
        assert_eq!(ctl.current(), 1);
        assert_eq!(surface.offset, VIEWPORT);
    }

    #[test]
    fn end_key_jumps_to_last_section_then_is_a_no_op() {
        let (mut ctl, mut surface) = controller(5);
        ctl.go_to(2, 0.0, &mut surface);
        let now = settle(&mut ctl, &mut surface, 0.0);
        assert_eq!(ctl.current(), 2);

        let outcome = ctl.handle(InputEvent::Key { key: "End".into(), at: now }, &mut surface);
        assert_eq!(outcome, Outcome::Started { from: 2, to: 4 });
        let now = settle(&mut ctl, &mut surface, now);
        assert_eq!(ctl.current(), 4);
        assert_eq!(surface.offset, 4.0 * VIEWPORT);

        let outcome = ctl.handle(InputEvent::Key { key: "End".into(), at: now }, &mut surface);
        assert_eq!(outcome, Outcome::Unchanged);
        assert!(!ctl.is_transitioning());
    }

    #[test]
    fn swipe_must_exceed_threshold() {
        let (mut ctl, mut surface) = controller(5);
        ctl.push(InputEvent::TouchStart { y: 500.0 });
        ctl.push(InputEvent::TouchEnd { y: 460.0, at: 0.0 });
        assert_eq!(ctl.drain(&mut surface), vec![Outcome::Ignored, Outcome::Ignored]);
        assert_eq!(ctl.current(), 0);

        ctl.push(InputEvent::TouchStart { y: 500.0 });
        ctl.push(InputEvent::TouchEnd { y: 350.0, at: 10.0 });
        assert_eq!(
            ctl.drain(&mut surface),
            vec![Outcome::Ignored, Outcome::Started { from: 0, to: 1 }]
        );
    }

    #[test]
    fn intents_while_animating_leave_state_untouched() {
        let (mut ctl, mut surface) = controller(5);
        ctl.go_to(3, 0.0, &mut surface);
        ctl.frame(300.0, &mut surface);
        let phase = ctl.phase;

        for event in [
            InputEvent::Wheel { delta_y: -120.0, at: 400.0 },
            InputEvent::Key { key: "Home".into(), at: 410.0 },
            InputEvent::Jump { index: 1, at: 420.0 },
        ] {
            assert!(matches!(
                ctl.handle(event, &mut surface),
                Outcome::Dropped | Outcome::Ignored
            ));
            assert_eq!(ctl.current(), 3);
            assert_eq!(ctl.phase, phase);
        }
    }

    #[test]
    fn settle_delay_blocks_input_until_it_elapses() {
        let (mut ctl, mut surface) = controller(5);
        ctl.go_to(1, 0.0, &mut surface);
        assert_eq!(ctl.frame(1200.0, &mut surface), Outcome::Completed { index: 1 });
        assert!(!ctl.is_animating());
        assert!(ctl.is_transitioning());

        assert_eq!(ctl.go_to(2, 1300.0, &mut surface), Outcome::Dropped);
        assert_eq!(ctl.go_to(2, 1400.0, &mut surface), Outcome::Started { from: 1, to: 2 });
    }

    #[test]
    fn frame_after_settle_window_rearms() {
        let (mut ctl, mut surface) = controller(3);
        ctl.go_to(1, 0.0, &mut surface);
        ctl.frame(1200.0, &mut surface);
        assert_eq!(ctl.frame(1300.0, &mut surface), Outcome::Ignored);
        assert_eq!(ctl.frame(1400.0, &mut surface), Outcome::Rearmed);
        assert_eq!(ctl.phase, Phase::Idle);
    }

    #[test]
    fn completion_is_reported_exactly_once() {
        let (mut ctl, mut surface) = controller(5);
        ctl.go_to(4, 0.0, &mut surface);
        let mut completions = 0;
        let mut now = 0.0;
        while now < 3000.0 {
            now += 16.0;
            if let Outcome::Completed { .. } = ctl.frame(now, &mut surface) {
                completions += 1;
            }
        }
        assert_eq!(completions, 1);
    }

    #[test]
    fn idle_controller_claims_mapped_keys_only() {
        let (ctl, _) = controller(5);
        for key in ["ArrowDown", "ArrowUp", "PageDown", "PageUp", " ", "Home", "End"] {
            assert!(ctl.claims_key(key), "{key:?} should be claimed");
        }
        assert!(!ctl.claims_key("Enter"));
        assert!(!ctl.claims_key("Tab"));
    }

    #[test]
    fn no_key_is_claimed_while_animating() {
        let (mut ctl, mut surface) = controller(5);
        ctl.go_to(2, 0.0, &mut surface);
        assert!(ctl.is_animating());
        for key in ["ArrowDown", " ", "End"] {
            assert!(!ctl.claims_key(key));
        }
    }

    #[test]
    fn keys_are_claimed_again_while_settling() {
        let (mut ctl, mut surface) = controller(5);
        ctl.go_to(2, 0.0, &mut surface);
        ctl.frame(1200.0, &mut surface);
        assert!(matches!(ctl.phase, Phase::Settling { .. }));
        assert!(ctl.claims_key("ArrowDown"));
        assert!(!ctl.claims_key("Enter"));
    }

    #[test]
    fn out_of_range_jump_clamps_to_last_section() {
        let (mut ctl, mut surface) = controller(5);
        assert_eq!(ctl.go_to(42, 0.0, &mut surface), Outcome::Started { from: 0, to: 4 });
    }

    #[test]
    fn go_to_first_and_last_from_anywhere() {
        for start in 0..5 {
            let (mut ctl, mut surface) = controller(5);
            ctl.go_to(start, 0.0, &mut surface);
            let now = settle(&mut ctl, &mut surface, 0.0);

            ctl.go_to(0, now, &mut surface);
            let now = settle(&mut ctl, &mut surface, now);
            assert_eq!(ctl.current(), 0);

            ctl.go_to(4, now, &mut surface);
            settle(&mut ctl, &mut surface, now);
            assert_eq!(ctl.current(), 4);
        }
    }

    #[test]
    fn missing_section_skips_without_changing_state() {
        let (mut ctl, mut surface) = controller(5);
        surface.sections.truncate(2);
        assert_eq!(ctl.go_to(3, 0.0, &mut surface), Outcome::Skipped { index: 3 });
        assert_eq!(ctl.current(), 0);
        assert_eq!(ctl.phase, Phase::Idle);
    }

    #[test]
    fn stationary_transition_completes_on_first_frame_and_still_settles() {
        let (mut ctl, mut surface) = controller(3);
        surface.sections = vec![0.0, 0.0, 0.0];
        assert_eq!(ctl.go_to(1, 0.0, &mut surface), Outcome::Started { from: 0, to: 1 });
        assert_eq!(ctl.frame(16.0, &mut surface), Outcome::Completed { index: 1 });
        assert_eq!(surface.writes, vec![0.0]);
        assert!(matches!(ctl.phase, Phase::Settling { .. }));
    }

    #[test]
    fn scroll_writes_move_monotonically_toward_target() {
        let (mut ctl, mut surface) = controller(5);
        ctl.go_to(3, 0.0, &mut surface);
        settle(&mut ctl, &mut surface, 0.0);

        let target = 3.0 * VIEWPORT;
        let mut previous = f64::INFINITY;
        for offset in &surface.writes {
            let distance = (target - offset).abs();
            assert!(distance <= previous);
            previous = distance;
        }
        assert_eq!(surface.writes.last(), Some(&target));
    }

    #[test]
    fn random_navigation_stays_in_bounds() {
        let (mut ctl, mut surface) = controller(5);
        let keys = ["ArrowDown", "ArrowUp", "PageDown", "PageUp", " ", "Home", "End"];
        let mut seed: u64 = 0x2545_F491_4F6C_DD1D;
        let mut now = 0.0;
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            now += (seed % 400) as f64;
            let event = match seed % 4 {
                0 => InputEvent::Wheel {
                    delta_y: if seed & 8 == 0 { 120.0 } else { -120.0 },
                    at: now,
                },
                1 => InputEvent::Key {
                    key: keys[(seed as usize >> 3) % keys.len()].to_string(),
                    at: now,
                },
                2 => InputEvent::Jump {
                    index: (seed >> 5) as usize % 9,
                    at: now,
                },
                _ => {
                    ctl.frame(now, &mut surface);
                    continue;
                }
            };
            ctl.handle(event, &mut surface);
            assert!(ctl.current() < ctl.len());
        }
        settle(&mut ctl, &mut surface, now);
        assert!(ctl.current() < ctl.len());
        assert_eq!(surface.offset, ctl.current() as f64 * VIEWPORT);
    }
}
