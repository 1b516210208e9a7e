//! Animated building blocks of the landing page
//!
//! Each component owns its animated values and timers, starts them after
//! its configured delay, and is advanced by the host with frame time. A
//! component that is dropped takes its timers with it.

use crate::animation::{AnimatedValue, Transition};
use crate::timer::{Interval, Timeout};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, trace};

pub const REVEAL_OFFSET: f32 = 30.0;
pub const REVEAL_FADE_MS: u64 = 800;
pub const REVEAL_DAMPING: f32 = 15.0;

pub const FLOAT_AMPLITUDE: f32 = 15.0;

pub const POP_START_SCALE: f32 = 0.8;
pub const POP_DAMPING: f32 = 10.0;

pub const BUTTON_FADE_MS: u64 = 600;
pub const PULSE_SCALE: f32 = 1.05;
pub const PULSE_HALF_MS: u64 = 1000;
pub const PRESS_SCALE: f32 = 0.95;
pub const PRESS_HALF_MS: u64 = 100;
/// Delay between activation and the action callback
pub const PRESS_ACTION_DELAY_MS: u64 = 100;

pub const TALLY_PERIOD_MS: u64 = 16;
pub const TALLY_STEPS: u32 = 60;
pub const TALLY_FADE_MS: u64 = 600;
pub const TALLY_START_SCALE: f32 = 0.5;
pub const TALLY_DAMPING: f32 = 8.0;

/// Whether decorative looping motion runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Motion {
    #[default]
    Full,
    /// Floats and pulses hold still; entrances still play
    Reduced,
}

impl Motion {
    pub fn from_reduce_flag(reduce_motion: bool) -> Self {
        if reduce_motion {
            Self::Reduced
        } else {
            Self::Full
        }
    }
}

/// Staggered entrance: fade in and spring up into place after a delay
#[derive(Debug, Clone)]
pub struct Reveal {
    delay: Duration,
    start: Timeout,
    opacity: AnimatedValue,
    offset: AnimatedValue,
}

impl Reveal {
    pub fn new(delay_ms: u64) -> Self {
        let delay = Duration::from_millis(delay_ms);
        Self {
            delay,
            start: Timeout::after(delay),
            opacity: AnimatedValue::new(0.0),
            offset: AnimatedValue::new(REVEAL_OFFSET),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn opacity(&self) -> f32 {
        self.opacity.value()
    }

    /// Vertical offset from the resting position, in px
    pub fn offset(&self) -> f32 {
        self.offset.value()
    }

    pub fn has_started(&self) -> bool {
        self.start.has_fired()
    }

    pub fn is_settled(&self) -> bool {
        self.has_started() && !self.opacity.is_animating() && !self.offset.is_animating()
    }

    pub fn advance(&mut self, dt: Duration) {
        let dt = match self.start.tick(dt) {
            Some(left) => {
                debug!(delay_ms = self.delay.as_millis() as u64, "reveal started");
                self.opacity.animate(Transition::timing(1.0, REVEAL_FADE_MS));
                self.offset.animate(Transition::spring(0.0, REVEAL_DAMPING));
                left
            }
            None => dt,
        };
        self.opacity.advance(dt);
        self.offset.advance(dt);
    }
}

fn float_loop(period: Duration) -> Transition {
    let half = period / 2;
    Transition::repeat(
        Transition::sequence(vec![
            Transition::Timed {
                to: -FLOAT_AMPLITUDE,
                duration: half,
                easing: Default::default(),
            },
            Transition::Timed {
                to: 0.0,
                duration: half,
                easing: Default::default(),
            },
        ]),
        None,
        true,
    )
}

/// Endless gentle bob, starting on mount
#[derive(Debug, Clone)]
pub struct Float {
    period: Duration,
    offset: AnimatedValue,
}

impl Float {
    pub fn new(period_ms: u64, motion: Motion) -> Self {
        let period = Duration::from_millis(period_ms);
        let mut offset = AnimatedValue::new(0.0);
        if motion == Motion::Full {
            offset.animate(float_loop(period));
        }
        Self { period, offset }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Between `-FLOAT_AMPLITUDE` and zero
    pub fn offset(&self) -> f32 {
        self.offset.value()
    }

    pub fn advance(&mut self, dt: Duration) {
        self.offset.advance(dt);
    }
}

/// Card scale-up after a delay
#[derive(Debug, Clone)]
pub struct PopIn {
    start: Timeout,
    scale: AnimatedValue,
}

impl PopIn {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            start: Timeout::after_ms(delay_ms),
            scale: AnimatedValue::new(POP_START_SCALE),
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    pub fn is_settled(&self) -> bool {
        self.start.has_fired() && !self.scale.is_animating()
    }

    pub fn advance(&mut self, dt: Duration) {
        let dt = match self.start.tick(dt) {
            Some(left) => {
                self.scale.animate(Transition::spring(1.0, POP_DAMPING));
                left
            }
            None => dt,
        };
        self.scale.advance(dt);
    }
}

fn pulse_loop() -> Transition {
    Transition::repeat(
        Transition::sequence(vec![
            Transition::timing(PULSE_SCALE, PULSE_HALF_MS),
            Transition::timing(1.0, PULSE_HALF_MS),
        ]),
        None,
        true,
    )
}

/// Call-to-action button that fades in, breathes, and reports its action
/// shortly after being pressed
#[derive(Debug, Clone)]
pub struct Pulse<A> {
    action: A,
    motion: Motion,
    start: Timeout,
    opacity: AnimatedValue,
    scale: AnimatedValue,
    pending: Option<Timeout>,
}

impl<A: Copy + std::fmt::Debug> Pulse<A> {
    pub fn new(action: A, delay_ms: u64, motion: Motion) -> Self {
        Self {
            action,
            motion,
            start: Timeout::after_ms(delay_ms),
            opacity: AnimatedValue::new(0.0),
            scale: AnimatedValue::new(1.0),
            pending: None,
        }
    }

    pub fn action(&self) -> A {
        self.action
    }

    pub fn opacity(&self) -> f32 {
        self.opacity.value()
    }

    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    pub fn has_started(&self) -> bool {
        self.start.has_fired()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_settled(&self) -> bool {
        self.has_started() && !self.opacity.is_animating()
    }

    /// Play the press feedback and schedule the action. Ignored while a
    /// previous press is still pending.
    pub fn press(&mut self) -> bool {
        if self.pending.is_some() {
            trace!(action = ?self.action, "press ignored, action already pending");
            return false;
        }
        let mut steps = vec![
            Transition::timing(PRESS_SCALE, PRESS_HALF_MS),
            Transition::timing(1.0, PRESS_HALF_MS),
        ];
        if self.motion == Motion::Full && self.has_started() {
            steps.push(pulse_loop());
        }
        self.scale.animate(Transition::sequence(steps));
        self.pending = Some(Timeout::after_ms(PRESS_ACTION_DELAY_MS));
        debug!(action = ?self.action, "button pressed");
        true
    }

    /// Returns the action when its post-press delay elapses
    pub fn advance(&mut self, dt: Duration) -> Option<A> {
        let mut opacity_dt = dt;
        let mut scale_dt = dt;
        if let Some(left) = self.start.tick(dt) {
            self.opacity.animate(Transition::timing(1.0, BUTTON_FADE_MS));
            opacity_dt = left;
            // an earlier press keeps its feedback; pulsing waits for it
            if self.motion == Motion::Full && !self.scale.is_animating() {
                self.scale.animate(pulse_loop());
                scale_dt = left;
            }
        }
        self.opacity.advance(opacity_dt);
        self.scale.advance(scale_dt);
        if self.motion == Motion::Full && self.has_started() && !self.scale.is_animating() {
            self.scale.animate(pulse_loop());
        }

        let fired = self.pending.as_mut()?.tick(dt).is_some();
        if fired {
            self.pending = None;
            Some(self.action)
        } else {
            None
        }
    }
}

/// Group digits in threes: `12345` becomes `12,345`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Counter that ticks up to its target in sixty steps
#[derive(Debug)]
pub struct Tally {
    target: u64,
    start: Timeout,
    opacity: AnimatedValue,
    scale: AnimatedValue,
    accumulator: f64,
    displayed: u64,
    interval: Option<Interval>,
    mounted: bool,
}

impl Tally {
    pub fn new(target: u64, delay_ms: u64) -> Self {
        Self {
            target,
            start: Timeout::after_ms(delay_ms),
            opacity: AnimatedValue::new(0.0),
            scale: AnimatedValue::new(TALLY_START_SCALE),
            accumulator: 0.0,
            displayed: 0,
            interval: None,
            mounted: true,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn displayed(&self) -> u64 {
        self.displayed
    }

    /// `1,000+`
    pub fn formatted(&self) -> String {
        format!("{}+", group_thousands(self.displayed))
    }

    pub fn opacity(&self) -> f32 {
        self.opacity.value()
    }

    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    pub fn has_started(&self) -> bool {
        self.start.has_fired()
    }

    pub fn is_counting(&self) -> bool {
        self.interval.as_ref().is_some_and(Interval::is_active)
    }

    pub fn is_settled(&self) -> bool {
        self.has_started()
            && !self.is_counting()
            && !self.opacity.is_animating()
            && !self.scale.is_animating()
    }

    pub fn advance(&mut self, dt: Duration) {
        if !self.mounted {
            return;
        }
        let dt = match self.start.tick(dt) {
            Some(left) => {
                self.opacity.animate(Transition::timing(1.0, TALLY_FADE_MS));
                self.scale.animate(Transition::spring(1.0, TALLY_DAMPING));
                self.accumulator = 0.0;
                self.interval = Some(Interval::every(Duration::from_millis(TALLY_PERIOD_MS)));
                left
            }
            None => dt,
        };
        self.opacity.advance(dt);
        self.scale.advance(dt);

        let fires = match self.interval.as_mut() {
            Some(interval) => interval.tick(dt),
            None => 0,
        };
        for _ in 0..fires {
            if !self.step() {
                break;
            }
        }
    }

    /// One interval tick; false once the target is reached
    fn step(&mut self) -> bool {
        let target = self.target as f64;
        self.accumulator += target / TALLY_STEPS as f64;
        if self.accumulator >= target {
            self.displayed = self.target;
            if let Some(interval) = self.interval.as_mut() {
                interval.cancel();
            }
            debug!(target = self.target, "tally reached target");
            false
        } else {
            self.displayed = self.accumulator.floor() as u64;
            true
        }
    }

    /// Release the counting interval and stop a pending start. Runs on
    /// drop as well.
    pub fn unmount(&mut self) {
        self.mounted = false;
        if let Some(mut interval) = self.interval.take() {
            if interval.is_active() {
                interval.cancel();
                trace!(
                    target = self.target,
                    displayed = self.displayed,
                    "tally interval released before reaching target"
                );
            }
        }
    }
}

impl Drop for Tally {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_reveal_stays_hidden_until_delay() {
        let mut reveal = Reveal::new(600);
        for _ in 0..37 {
            reveal.advance(FRAME);
            assert_eq!(reveal.opacity(), 0.0);
            assert_eq!(reveal.offset(), REVEAL_OFFSET);
        }
        assert!(!reveal.has_started());
        reveal.advance(FRAME);
        assert!(reveal.has_started());
        assert!(reveal.opacity() > 0.0);
    }

    #[test]
    fn test_reveal_settles_fully_visible_and_stays() {
        let mut reveal = Reveal::new(300);
        reveal.advance(ms(300 + REVEAL_FADE_MS));
        assert_eq!(reveal.opacity(), 1.0);
        for _ in 0..200 {
            reveal.advance(FRAME);
        }
        assert!(reveal.is_settled());
        assert_eq!(reveal.offset(), 0.0);
        for _ in 0..100 {
            reveal.advance(FRAME);
            assert_eq!(reveal.opacity(), 1.0);
            assert_eq!(reveal.offset(), 0.0);
        }
    }

    #[test]
    fn test_float_round_trip_each_period() {
        let mut float = Float::new(4000, Motion::Full);
        for _ in 0..3 {
            for _ in 0..250 {
                float.advance(FRAME);
                assert!(float.offset() <= 0.0 && float.offset() >= -FLOAT_AMPLITUDE);
            }
            assert_eq!(float.offset(), 0.0);
        }
    }

    #[test]
    fn test_float_reduced_motion_holds_still() {
        let mut float = Float::new(5000, Motion::Reduced);
        float.advance(ms(1234));
        assert_eq!(float.offset(), 0.0);
    }

    #[test]
    fn test_pop_in_springs_to_full_size() {
        let mut pop = PopIn::new(200);
        pop.advance(ms(100));
        assert_eq!(pop.scale(), POP_START_SCALE);
        for _ in 0..200 {
            pop.advance(FRAME);
        }
        assert!(pop.is_settled());
        assert_eq!(pop.scale(), 1.0);
    }

    #[test]
    fn test_pop_in_bounces_past_full_size() {
        let mut pop = PopIn::new(0);
        let mut peak = 0.0f32;
        let mut frames = 0;
        while !pop.is_settled() {
            pop.advance(FRAME);
            peak = peak.max(pop.scale());
            frames += 1;
            assert!(frames < 200);
        }
        assert!(peak > 1.02, "peak {peak}");
        assert!(frames > 30, "settled after {frames} frames");
    }

    #[test]
    fn test_pulse_round_trip_each_cycle() {
        let mut pulse = Pulse::new((), 1200, Motion::Full);
        pulse.advance(ms(1200));
        assert!(pulse.has_started());
        assert_eq!(pulse.scale(), 1.0);
        for _ in 0..4 {
            let mut peak = 0.0f32;
            for _ in 0..125 {
                pulse.advance(FRAME);
                peak = peak.max(pulse.scale());
            }
            assert_eq!(pulse.scale(), 1.0);
            assert!((peak - PULSE_SCALE).abs() < 1e-3);
        }
        assert_eq!(pulse.opacity(), 1.0);
    }

    #[test]
    fn test_pulse_press_delivers_action_after_delay() {
        let mut pulse = Pulse::new("get-started", 0, Motion::Full);
        pulse.advance(ms(700));
        assert!(pulse.press());
        assert!(!pulse.press(), "second press while pending is ignored");

        assert_eq!(pulse.advance(ms(50)), None);
        assert!(pulse.scale() < 1.0);
        assert_eq!(pulse.advance(ms(50)), Some("get-started"));
        assert_eq!(pulse.scale(), PRESS_SCALE);
        assert!(!pulse.is_pending());

        pulse.advance(ms(100));
        assert_eq!(pulse.scale(), 1.0);
        // pulsing resumes after the press feedback
        pulse.advance(ms(500));
        assert!(pulse.scale() > 1.0);
        assert_eq!(pulse.advance(ms(5000)), None);
    }

    #[test]
    fn test_pulse_press_before_reveal_still_fires() {
        let mut pulse = Pulse::new(7u8, 4000, Motion::Reduced);
        pulse.press();
        assert_eq!(pulse.advance(ms(100)), Some(7));
        assert_eq!(pulse.opacity(), 0.0);
        pulse.advance(ms(4000 + BUTTON_FADE_MS));
        assert_eq!(pulse.opacity(), 1.0);
        assert_eq!(pulse.scale(), 1.0);
    }

    #[test]
    fn test_press_before_start_keeps_press_feedback() {
        let mut pulse = Pulse::new((), 150, Motion::Full);
        assert!(pulse.press());
        assert_eq!(pulse.advance(ms(100)), Some(()));
        assert_eq!(pulse.scale(), PRESS_SCALE);

        pulse.advance(ms(50));
        assert!(pulse.has_started());
        assert!(pulse.scale() < 1.0);
        pulse.advance(ms(50));
        assert_eq!(pulse.scale(), 1.0, "press feedback finishes before pulsing");

        pulse.advance(ms(500));
        assert!(pulse.scale() > 1.0);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_tally_counts_to_exact_target() {
        let mut tally = Tally::new(1000, 500);
        tally.advance(ms(499));
        assert!(!tally.has_started());
        assert_eq!(tally.displayed(), 0);
        assert_eq!(tally.formatted(), "0+");

        tally.advance(ms(1));
        assert!(tally.is_counting());

        let mut previous = 0;
        let mut ticks = 0;
        while tally.is_counting() {
            tally.advance(FRAME);
            ticks += 1;
            let shown = tally.displayed();
            assert!(shown > previous, "strictly increasing on every tick");
            assert!(shown - previous <= 17, "step of about 16.7");
            assert!(shown <= 1000);
            previous = shown;
            assert!(ticks <= 61);
        }
        assert!(ticks >= 60);
        assert_eq!(tally.displayed(), 1000);
        assert_eq!(tally.formatted(), "1,000+");

        for _ in 0..100 {
            tally.advance(FRAME);
            assert_eq!(tally.displayed(), 1000);
        }
        assert!(tally.is_settled());
        assert_eq!(tally.opacity(), 1.0);
        assert_eq!(tally.scale(), 1.0);
    }

    #[test]
    fn test_tally_never_exceeds_odd_targets() {
        for target in [1, 7, 59, 61, 150, 25, 12345] {
            let mut tally = Tally::new(target, 0);
            let mut previous = 0;
            for _ in 0..200 {
                tally.advance(ms(7));
                assert!(tally.displayed() >= previous);
                assert!(tally.displayed() <= target);
                previous = tally.displayed();
            }
            assert_eq!(tally.displayed(), target, "target {target}");
            assert!(!tally.is_counting());
        }
    }

    #[test]
    fn test_tally_zero_target() {
        let mut tally = Tally::new(0, 0);
        tally.advance(FRAME);
        assert_eq!(tally.displayed(), 0);
        assert!(!tally.is_counting());
    }

    #[test]
    fn test_tally_unmount_releases_interval() {
        let mut tally = Tally::new(1000, 0);
        tally.advance(ms(160));
        assert!(tally.is_counting());
        let frozen = tally.displayed();
        assert!(frozen > 0 && frozen < 1000);

        tally.unmount();
        assert!(!tally.is_counting());
        tally.advance(ms(2000));
        assert_eq!(tally.displayed(), frozen);
        tally.unmount();
    }

    #[test]
    fn test_tally_unmounted_before_delay_never_starts() {
        let mut tally = Tally::new(150, 1700);
        tally.advance(ms(1000));
        tally.unmount();
        tally.advance(ms(5000));
        assert!(!tally.has_started());
        assert!(!tally.is_counting());
        assert_eq!(tally.displayed(), 0);
        assert_eq!(tally.opacity(), 0.0);
    }
}
