//! Animation values
//!
//! An [`AnimatedValue`] is a plain number plus an optional running
//! [`Transition`]. Time only moves when the host calls
//! [`AnimatedValue::advance`], so the same code drives the terminal at
//! 60 fps and the tests with hand-picked frame steps.
//!
//! Transitions compose: a [`Transition::Sequence`] plays its steps back to
//! back and a [`Transition::Repeat`] loops a body, optionally reversing
//! every other pass.

use std::time::Duration;
use strum::Display;

/// Upper bound for one spring integration step, in milliseconds
const SPRING_SUBSTEP_MS: f32 = 1.0;
/// Rest thresholds shrink with the travel distance down to this fraction
const MIN_REST_SCALE: f32 = 0.01;

fn millis(dt: Duration) -> f32 {
    dt.as_micros() as f32 / 1000.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    QuadInOut,
    CubicOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::CubicOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Damped spring parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub damping: f32,
    pub stiffness: f32,
    pub mass: f32,
    /// Settled once closer than this to the target...
    pub rest_displacement: f32,
    /// ...and slower than this, in units per second. Both thresholds apply
    /// to a travel of one unit or more and shrink with shorter travels.
    pub rest_speed: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: 10.0,
            stiffness: 100.0,
            mass: 1.0,
            rest_displacement: 0.01,
            rest_speed: 2.0,
        }
    }
}

impl SpringConfig {
    pub fn with_damping(damping: f32) -> Self {
        Self {
            damping,
            ..Self::default()
        }
    }

    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TransitionKind {
    Timed,
    Spring,
    Sequence,
    Repeat,
}

/// Declarative description of how a value moves
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Timed {
        to: f32,
        duration: Duration,
        easing: Easing,
    },
    Spring {
        to: f32,
        config: SpringConfig,
    },
    Sequence(Vec<Transition>),
    Repeat {
        body: Box<Transition>,
        /// `None` repeats forever
        iterations: Option<u32>,
        reverse: bool,
    },
}

impl Transition {
    /// Timed transition with the default easing
    pub fn timing(to: f32, duration_ms: u64) -> Self {
        Self::Timed {
            to,
            duration: Duration::from_millis(duration_ms),
            easing: Easing::default(),
        }
    }

    pub fn spring(to: f32, damping: f32) -> Self {
        Self::Spring {
            to,
            config: SpringConfig::with_damping(damping),
        }
    }

    pub fn sequence(steps: Vec<Transition>) -> Self {
        Self::Sequence(steps)
    }

    pub fn repeat(body: Transition, iterations: Option<u32>, reverse: bool) -> Self {
        Self::Repeat {
            body: Box::new(body),
            iterations,
            reverse,
        }
    }

    pub fn kind(&self) -> TransitionKind {
        match self {
            Self::Timed { .. } => TransitionKind::Timed,
            Self::Spring { .. } => TransitionKind::Spring,
            Self::Sequence(_) => TransitionKind::Sequence,
            Self::Repeat { .. } => TransitionKind::Repeat,
        }
    }

    /// Where the value rests once this transition, started at `start`,
    /// completes. `None` for transitions that never complete.
    pub fn final_value(&self, start: f32) -> Option<f32> {
        match self {
            Self::Timed { to, .. } | Self::Spring { to, .. } => Some(*to),
            Self::Sequence(steps) => steps
                .iter()
                .try_fold(start, |value, step| step.final_value(value)),
            Self::Repeat {
                body,
                iterations,
                reverse,
            } => {
                let n = (*iterations)?;
                if n == 0 {
                    Some(start)
                } else if *reverse && n % 2 == 0 {
                    Some(start)
                } else {
                    body.final_value(start)
                }
            }
        }
    }

    /// The same motion played backwards, for a value that started at `start`
    pub fn reversed(&self, start: f32) -> Transition {
        match self {
            Self::Timed {
                duration, easing, ..
            } => Self::Timed {
                to: start,
                duration: *duration,
                easing: *easing,
            },
            Self::Spring { config, .. } => Self::Spring {
                to: start,
                config: *config,
            },
            Self::Sequence(steps) => {
                let mut origins = Vec::with_capacity(steps.len());
                let mut value = start;
                for step in steps {
                    origins.push(value);
                    value = step.final_value(value).unwrap_or(value);
                }
                Self::Sequence(
                    steps
                        .iter()
                        .zip(origins)
                        .rev()
                        .map(|(step, origin)| step.reversed(origin))
                        .collect(),
                )
            }
            Self::Repeat { .. } => self.clone(),
        }
    }
}

#[derive(Debug, Clone)]
enum Run {
    Timed {
        from: f32,
        to: f32,
        duration: f32,
        elapsed: f32,
        easing: Easing,
    },
    Spring {
        to: f32,
        config: SpringConfig,
        /// Rest threshold multiplier from the distance at start
        rest_scale: f32,
    },
    Sequence {
        steps: Vec<Transition>,
        index: usize,
        current: Option<Box<Run>>,
    },
    Repeat {
        body: Transition,
        origin: f32,
        completed: u32,
        iterations: Option<u32>,
        reverse: bool,
        cycle_elapsed: f32,
        current: Box<Run>,
    },
}

impl Run {
    fn start(transition: &Transition, value: f32) -> Run {
        match transition {
            Transition::Timed {
                to,
                duration,
                easing,
            } => Run::Timed {
                from: value,
                to: *to,
                duration: millis(*duration),
                elapsed: 0.0,
                easing: *easing,
            },
            Transition::Spring { to, config } => Run::Spring {
                to: *to,
                config: *config,
                rest_scale: (to - value).abs().clamp(MIN_REST_SCALE, 1.0),
            },
            Transition::Sequence(steps) => Run::Sequence {
                steps: steps.clone(),
                index: 0,
                current: steps.first().map(|step| Box::new(Run::start(step, value))),
            },
            Transition::Repeat {
                body,
                iterations,
                reverse,
            } => Run::Repeat {
                body: (**body).clone(),
                origin: value,
                completed: 0,
                iterations: *iterations,
                reverse: *reverse,
                cycle_elapsed: 0.0,
                current: Box::new(Run::start(body, value)),
            },
        }
    }

    /// Advance by `dt` milliseconds. Returns the unused part of `dt` once
    /// the run has finished.
    fn step(&mut self, value: &mut f32, velocity: &mut f32, dt: f32) -> Option<f32> {
        match self {
            Run::Timed {
                from,
                to,
                duration,
                elapsed,
                easing,
            } => {
                *elapsed += dt;
                *velocity = 0.0;
                if *duration <= 0.0 || *elapsed >= *duration {
                    *value = *to;
                    Some((*elapsed - duration.max(0.0)).max(0.0))
                } else {
                    *value = *from + (*to - *from) * easing.apply(*elapsed / *duration);
                    None
                }
            }
            Run::Spring {
                to,
                config,
                rest_scale,
            } => step_spring(*to, config, *rest_scale, value, velocity, dt),
            Run::Sequence {
                steps,
                index,
                current,
            } => {
                let mut dt = dt;
                loop {
                    let Some(run) = current.as_mut() else {
                        return Some(dt);
                    };
                    dt = run.step(value, velocity, dt)?;
                    *index += 1;
                    *current = steps
                        .get(*index)
                        .map(|step| Box::new(Run::start(step, *value)));
                }
            }
            Run::Repeat {
                body,
                origin,
                completed,
                iterations,
                reverse,
                cycle_elapsed,
                current,
            } => {
                let mut dt = dt;
                loop {
                    let Some(left) = current.step(value, velocity, dt) else {
                        *cycle_elapsed += dt;
                        return None;
                    };
                    *cycle_elapsed += dt - left;
                    *completed += 1;
                    if iterations.is_some_and(|n| *completed >= n) {
                        return Some(left);
                    }

                    let stalled = *cycle_elapsed <= 0.0;
                    *cycle_elapsed = 0.0;
                    let forward = !*reverse || *completed % 2 == 0;
                    let next = if forward {
                        body.clone()
                    } else {
                        body.reversed(*origin)
                    };
                    **current = Run::start(&next, *value);

                    // a zero-length body restarts at most once per frame
                    if stalled {
                        return None;
                    }
                    dt = left;
                }
            }
        }
    }
}

fn step_spring(
    to: f32,
    config: &SpringConfig,
    rest_scale: f32,
    value: &mut f32,
    velocity: &mut f32,
    dt: f32,
) -> Option<f32> {
    let acceleration =
        |x: f32, v: f32| (-config.stiffness * (x - to) - config.damping * v) / config.mass;
    let at_rest = |x: f32, v: f32| {
        (x - to).abs() < config.rest_displacement * rest_scale
            && v.abs() < config.rest_speed * rest_scale
    };

    let mut remaining = dt;
    loop {
        if at_rest(*value, *velocity) {
            *value = to;
            *velocity = 0.0;
            return Some(remaining);
        }
        if remaining <= 0.0 {
            return None;
        }

        let step_ms = remaining.min(SPRING_SUBSTEP_MS);
        let h = step_ms / 1000.0;
        let (x, v) = (*value, *velocity);

        let k1_v = acceleration(x, v);
        let k1_x = v;
        let k2_v = acceleration(x + k1_x * h * 0.5, v + k1_v * h * 0.5);
        let k2_x = v + k1_v * h * 0.5;
        let k3_v = acceleration(x + k2_x * h * 0.5, v + k2_v * h * 0.5);
        let k3_x = v + k2_v * h * 0.5;
        let k4_v = acceleration(x + k3_x * h, v + k3_v * h);
        let k4_x = v + k3_v * h;

        *velocity = v + (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v) * h / 6.0;
        *value = x + (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x) * h / 6.0;
        remaining -= step_ms;
    }
}

/// A number driven by transitions
#[derive(Debug, Clone)]
pub struct AnimatedValue {
    value: f32,
    velocity: f32,
    transition: Option<Transition>,
    target: Option<f32>,
    run: Option<Run>,
}

impl AnimatedValue {
    pub fn new(initial: f32) -> Self {
        Self {
            value: initial,
            velocity: 0.0,
            transition: None,
            target: Some(initial),
            run: None,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Resting value once the running transition ends; `None` while an
    /// endless repeat is running
    pub fn target(&self) -> Option<f32> {
        self.target
    }

    /// Kind of the running transition, if any
    pub fn kind(&self) -> Option<TransitionKind> {
        self.run
            .as_ref()
            .and(self.transition.as_ref())
            .map(Transition::kind)
    }

    pub fn is_animating(&self) -> bool {
        self.run.is_some()
    }

    /// Replace whatever is running; the new transition starts from the
    /// current value
    pub fn animate(&mut self, transition: Transition) {
        self.target = transition.final_value(self.value);
        self.run = Some(Run::start(&transition, self.value));
        self.transition = Some(transition);
    }

    /// Jump to `value` and stop
    pub fn set(&mut self, value: f32) {
        self.value = value;
        self.velocity = 0.0;
        self.stop();
    }

    /// Freeze at the current value
    pub fn stop(&mut self) {
        self.run = None;
        self.transition = None;
        self.target = Some(self.value);
    }

    /// Move time forward. Returns the part of `dt` left over if the
    /// transition finished during this step.
    pub fn advance(&mut self, dt: Duration) -> Option<Duration> {
        let run = self.run.as_mut()?;
        let left = run.step(&mut self.value, &mut self.velocity, millis(dt))?;
        self.stop();
        Some(Duration::from_micros((left * 1000.0).round() as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn run_for(value: &mut AnimatedValue, total_ms: u64, step_ms: u64) {
        let mut t = 0;
        while t < total_ms {
            let step = step_ms.min(total_ms - t);
            value.advance(Duration::from_millis(step));
            t += step;
        }
    }

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::QuadInOut, Easing::CubicOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
        assert_eq!(Easing::QuadInOut.apply(0.5), 0.5);
        assert_eq!(Easing::QuadInOut.apply(0.25), 0.125);
    }

    #[test]
    fn test_timed_reaches_target_exactly() {
        let mut opacity = AnimatedValue::new(0.0);
        opacity.animate(Transition::timing(1.0, 800));
        assert_eq!(opacity.kind(), Some(TransitionKind::Timed));
        assert_eq!(opacity.target(), Some(1.0));

        run_for(&mut opacity, 400, 16);
        assert!((opacity.value() - 0.5).abs() < 1e-4);
        assert!(opacity.is_animating());

        run_for(&mut opacity, 400, 16);
        assert_eq!(opacity.value(), 1.0);
        assert!(!opacity.is_animating());
        assert_eq!(opacity.kind(), None);
    }

    #[test]
    fn test_timed_reports_leftover() {
        let mut v = AnimatedValue::new(0.0);
        v.animate(Transition::timing(10.0, 100));
        assert_eq!(v.advance(Duration::from_millis(60)), None);
        assert_eq!(v.advance(Duration::from_millis(60)), Some(Duration::from_millis(20)));
        assert_eq!(v.value(), 10.0);
    }

    #[test]
    fn test_zero_duration_is_immediate() {
        let mut v = AnimatedValue::new(3.0);
        v.animate(Transition::timing(7.0, 0));
        assert_eq!(v.advance(Duration::ZERO), Some(Duration::ZERO));
        assert_eq!(v.value(), 7.0);
    }

    #[test]
    fn test_spring_overshoots_then_settles_on_target() {
        let mut scale = AnimatedValue::new(0.8);
        scale.animate(Transition::spring(1.0, 10.0));
        assert_eq!(scale.kind(), Some(TransitionKind::Spring));

        let mut peak = 0.0f32;
        for _ in 0..300 {
            scale.advance(FRAME);
            peak = peak.max(scale.value());
        }
        assert!(peak > 1.0, "underdamped spring should overshoot");
        assert_eq!(scale.value(), 1.0);
        assert!(!scale.is_animating());
        assert_eq!(scale.velocity(), 0.0);
    }

    #[test]
    fn test_heavily_damped_spring_does_not_overshoot() {
        let mut offset = AnimatedValue::new(30.0);
        offset.animate(Transition::spring(0.0, 40.0));
        for _ in 0..500 {
            offset.advance(FRAME);
            assert!(offset.value() >= 0.0);
        }
        assert_eq!(offset.value(), 0.0);
    }

    #[test]
    fn test_spring_config_damping_regimes() {
        assert!(SpringConfig::with_damping(15.0).is_underdamped());
        assert!(!SpringConfig::with_damping(20.0).is_underdamped());
        assert_eq!(SpringConfig::default().critical_damping(), 20.0);
    }

    #[test]
    fn test_sequence_carries_leftover_time() {
        let mut v = AnimatedValue::new(0.0);
        v.animate(Transition::sequence(vec![
            Transition::Timed {
                to: 1.0,
                duration: Duration::from_millis(100),
                easing: Easing::Linear,
            },
            Transition::Timed {
                to: 0.0,
                duration: Duration::from_millis(100),
                easing: Easing::Linear,
            },
        ]));
        assert_eq!(v.target(), Some(0.0));
        v.advance(Duration::from_millis(150));
        assert!((v.value() - 0.5).abs() < 1e-4);
        v.advance(Duration::from_millis(50));
        assert_eq!(v.value(), 0.0);
        assert!(!v.is_animating());
    }

    #[test]
    fn test_empty_sequence_finishes_immediately() {
        let mut v = AnimatedValue::new(2.0);
        v.animate(Transition::sequence(Vec::new()));
        assert_eq!(v.advance(FRAME), Some(FRAME));
        assert_eq!(v.value(), 2.0);
    }

    #[test]
    fn test_endless_repeat_returns_to_origin_every_cycle() {
        let mut y = AnimatedValue::new(0.0);
        y.animate(Transition::repeat(
            Transition::sequence(vec![
                Transition::timing(-15.0, 2000),
                Transition::timing(0.0, 2000),
            ]),
            None,
            true,
        ));
        assert_eq!(y.target(), None);
        assert_eq!(y.kind(), Some(TransitionKind::Repeat));

        for cycle in 1..=5 {
            let mut lowest = 0.0f32;
            for _ in 0..250 {
                y.advance(FRAME);
                lowest = lowest.min(y.value());
                assert!(y.value() <= 0.0 && y.value() >= -15.0);
            }
            assert_eq!(y.value(), 0.0, "cycle {cycle}");
            assert_eq!(lowest, -15.0);
            assert!(y.is_animating());
        }
    }

    #[test]
    fn test_finite_repeat_with_reverse() {
        let mut v = AnimatedValue::new(0.0);
        let body = Transition::timing(1.0, 100);
        v.animate(Transition::repeat(body.clone(), Some(3), true));
        assert_eq!(v.target(), Some(1.0));
        v.advance(Duration::from_millis(200));
        assert_eq!(v.value(), 0.0);
        v.advance(Duration::from_millis(100));
        assert_eq!(v.value(), 1.0);
        assert!(!v.is_animating());

        v.animate(Transition::repeat(body, Some(2), true));
        assert_eq!(v.target(), Some(1.0));
    }

    #[test]
    fn test_zero_length_repeat_does_not_spin() {
        let mut v = AnimatedValue::new(0.0);
        v.animate(Transition::repeat(Transition::timing(1.0, 0), None, true));
        assert_eq!(v.advance(FRAME), None);
        assert!(v.is_animating());
    }

    #[test]
    fn test_reversed_sequence_retraces_waypoints() {
        let seq = Transition::sequence(vec![Transition::timing(1.05, 1000), Transition::timing(1.2, 500)]);
        let reversed = seq.reversed(1.0);
        assert_eq!(
            reversed,
            Transition::sequence(vec![Transition::timing(1.05, 500), Transition::timing(1.0, 1000)])
        );
    }

    #[test]
    fn test_animate_restarts_from_current_value() {
        let mut scale = AnimatedValue::new(1.0);
        scale.animate(Transition::timing(2.0, 100));
        scale.advance(Duration::from_millis(50));
        let mid = scale.value();
        scale.animate(Transition::timing(0.0, 100));
        assert_eq!(scale.value(), mid);
        scale.advance(Duration::from_millis(100));
        assert_eq!(scale.value(), 0.0);
    }

    #[test]
    fn test_set_and_stop() {
        let mut v = AnimatedValue::new(0.0);
        v.animate(Transition::spring(5.0, 10.0));
        v.advance(FRAME);
        v.stop();
        let frozen = v.value();
        v.advance(FRAME);
        assert_eq!(v.value(), frozen);
        assert_eq!(v.target(), Some(frozen));

        v.set(9.0);
        assert_eq!(v.value(), 9.0);
        assert!(!v.is_animating());
    }
}
