/// Animated reveal groups
///
/// A `RevealGroup` is a set of sibling elements that share one entrance:
/// same initial state, same trigger, a per-index delay. Every section on
/// every page is built from one of these rather than hand-rolling its own
/// set/trigger/teardown.
use std::time::{Duration, Instant};

use tracing::debug;

use super::easing::Ease;
use super::scope::{AnimationScope, GroupId, Target};
use super::trigger::{ScrollTrigger, TriggerBand};
use super::tween::{TweenTiming, VisualState};

/// What starts the entrance
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// Plays as soon as the page mounts (above-the-fold content)
    Mount,
    /// Plays once, when the container enters the band
    Scroll(TriggerBand),
}

/// One step of a fixed entrance schedule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cue {
    pub delay: Duration,
    pub duration: Duration,
    pub from: VisualState,
}

/// How delays are assigned to the elements of a group
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Schedule {
    /// `delay + index * each`, every element with the group's duration and initial state
    Stagger { delay: Duration, each: Duration },
    /// One cue per element; elements past the end reuse the last cue's
    /// spacing from the previous element
    Sequence(&'static [Cue]),
}

/// Full description of a group's entrance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealSpec {
    pub from: VisualState,
    pub duration: Duration,
    pub ease: Ease,
    pub schedule: Schedule,
    pub trigger: Trigger,
}

impl RevealSpec {
    /// Scroll-gated, staggered entrance
    pub const fn scroll(
        band: TriggerBand,
        from: VisualState,
        duration_ms: u64,
        ease: Ease,
        stagger_ms: u64,
    ) -> Self {
        RevealSpec {
            from,
            duration: Duration::from_millis(duration_ms),
            ease,
            schedule: Schedule::Stagger {
                delay: Duration::ZERO,
                each: Duration::from_millis(stagger_ms),
            },
            trigger: Trigger::Scroll(band),
        }
    }

    /// Mount-time, staggered entrance
    pub const fn mount(from: VisualState, duration_ms: u64, ease: Ease, stagger_ms: u64) -> Self {
        RevealSpec {
            from,
            duration: Duration::from_millis(duration_ms),
            ease,
            schedule: Schedule::Stagger {
                delay: Duration::ZERO,
                each: Duration::from_millis(stagger_ms),
            },
            trigger: Trigger::Mount,
        }
    }

    /// Mount-time entrance on a fixed schedule
    pub const fn sequence(cues: &'static [Cue], ease: Ease) -> Self {
        let (from, duration) = match cues.first() {
            Some(cue) => (cue.from, cue.duration),
            None => (VisualState::IDENTITY, Duration::ZERO),
        };
        RevealSpec {
            from,
            duration,
            ease,
            schedule: Schedule::Sequence(cues),
            trigger: Trigger::Mount,
        }
    }

    /// Initial state and timing for the element at `index`
    pub fn cue(&self, index: usize) -> (VisualState, TweenTiming) {
        match self.schedule {
            Schedule::Stagger { delay, each } => (
                self.from,
                TweenTiming::new(self.duration, self.ease).delayed(delay + each * index as u32),
            ),
            Schedule::Sequence(cues) => match cues.get(index) {
                Some(cue) => (cue.from, TweenTiming::new(cue.duration, self.ease).delayed(cue.delay)),
                None => {
                    let Some(last) = cues.last() else {
                        return (self.from, TweenTiming::new(self.duration, self.ease));
                    };
                    let spacing = match cues.len() {
                        0 | 1 => Duration::ZERO,
                        n => last.delay.saturating_sub(cues[n - 2].delay),
                    };
                    let extra = (index + 1 - cues.len()) as u32;
                    (
                        last.from,
                        TweenTiming::new(last.duration, self.ease).delayed(last.delay + spacing * extra),
                    )
                }
            },
        }
    }
}

/// A group of sibling elements sharing one entrance
#[derive(Debug, Clone)]
pub struct RevealGroup {
    id: GroupId,
    spec: RevealSpec,
    len: usize,
    gate: Option<ScrollTrigger>,
    played: bool,
}

impl RevealGroup {
    /// Register `len` elements in `scope` and put them in their initial
    /// (hidden) state. A group with no elements registers nothing and every
    /// later call on it is a no-op.
    pub fn new(scope: &mut AnimationScope, spec: RevealSpec, len: usize) -> Self {
        let id = scope.allocate_group();
        for index in 0..len {
            let (from, _) = spec.cue(index);
            scope.set(Target::new(id, index), from);
        }
        let gate = match spec.trigger {
            Trigger::Mount => None,
            Trigger::Scroll(band) => Some(ScrollTrigger::new(band)),
        };
        Self {
            id,
            spec,
            len,
            gate,
            played: false,
        }
    }

    /// Page mounted: mount-triggered groups start now
    pub fn mount(&mut self, scope: &mut AnimationScope, now: Instant) {
        if self.gate.is_none() && !self.played {
            self.play(scope, now);
        }
    }

    /// Feed a scroll observation of this group's container. Returns whether
    /// the entrance started on this observation.
    pub fn observe(
        &mut self,
        scope: &mut AnimationScope,
        container_top: Option<f32>,
        viewport_height: f32,
        now: Instant,
    ) -> bool {
        let Some(gate) = self.gate.as_mut() else {
            return false;
        };
        if !gate.observe(container_top, viewport_height) {
            return false;
        }
        debug!(scope = scope.label(), elements = self.len, "scroll trigger fired");
        self.play(scope, now);
        true
    }

    fn play(&mut self, scope: &mut AnimationScope, now: Instant) {
        self.played = true;
        for index in 0..self.len {
            let (_, timing) = self.spec.cue(index);
            scope.to(Target::new(self.id, index), VisualState::IDENTITY, timing, now);
        }
    }

    /// Restart a short entrance for a new set of `len` elements, overwriting
    /// whatever is in flight on them. Consumes the scroll gate: the elements
    /// are visible now and must not be hidden again by a late trigger.
    pub fn replay(
        &mut self,
        scope: &mut AnimationScope,
        len: usize,
        from: VisualState,
        timing: TweenTiming,
        stagger: Duration,
        now: Instant,
    ) {
        // Elements beyond the new length no longer exist
        for index in len..self.len {
            scope.set(Target::new(self.id, index), VisualState::IDENTITY);
        }
        self.len = len;
        if let Some(gate) = self.gate.as_mut() {
            gate.consume();
        }
        self.played = true;
        for index in 0..len {
            let timing = timing.delayed(timing.delay + stagger * index as u32);
            scope.from_to(Target::new(self.id, index), from, VisualState::IDENTITY, timing, now);
        }
    }

    /// State of the element at `index`. Elements the group never registered
    /// render untransformed.
    pub fn visual(&self, scope: &AnimationScope, index: usize, now: Instant) -> VisualState {
        scope
            .sample(Target::new(self.id, index), now)
            .unwrap_or(VisualState::IDENTITY)
    }

    #[cfg(test)]
    pub fn has_played(&self) -> bool {
        self.played
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::scope::LiveTweens;

    const STATS: RevealSpec = RevealSpec::scroll(
        TriggerBand::TOP_90,
        VisualState::hidden_scaled(40.0, 0.95),
        600,
        Ease::Power2Out,
        50,
    );

    const HERO_CUES: &[Cue] = &[
        Cue {
            delay: Duration::ZERO,
            duration: Duration::from_millis(800),
            from: VisualState::hidden(30.0),
        },
        Cue {
            delay: Duration::from_millis(300),
            duration: Duration::from_millis(1200),
            from: VisualState::hidden(80.0),
        },
        Cue {
            delay: Duration::from_millis(600),
            duration: Duration::from_millis(1000),
            from: VisualState::hidden(50.0),
        },
    ];

    #[test]
    fn test_initial_state_is_set_before_first_frame() {
        let mut scope = AnimationScope::new("test", LiveTweens::new());
        let group = RevealGroup::new(&mut scope, STATS, 4);
        let now = Instant::now();
        for index in 0..4 {
            assert_eq!(group.visual(&scope, index, now), VisualState::hidden_scaled(40.0, 0.95));
        }
        assert_eq!(scope.active_tweens(), 0);
    }

    #[test]
    fn test_stagger_is_proportional_to_index() {
        let (_, first) = STATS.cue(0);
        let (_, fourth) = STATS.cue(3);
        assert_eq!(first.delay, Duration::ZERO);
        assert_eq!(fourth.delay, Duration::from_millis(150));
        assert_eq!(fourth.duration, Duration::from_millis(600));
    }

    #[test]
    fn test_scroll_group_plays_once() {
        let live = LiveTweens::new();
        let mut scope = AnimationScope::new("test", live.clone());
        let mut group = RevealGroup::new(&mut scope, STATS, 3);
        let start = Instant::now();

        assert!(!group.observe(&mut scope, Some(1200.0), 1000.0, start));
        assert!(group.observe(&mut scope, Some(850.0), 1000.0, start));
        assert_eq!(live.count(), 3);

        let done = start + Duration::from_secs(2);
        scope.tick(done);
        assert_eq!(live.count(), 0);

        // Scroll back up and down again: nothing restarts
        assert!(!group.observe(&mut scope, Some(1500.0), 1000.0, done));
        assert!(!group.observe(&mut scope, Some(100.0), 1000.0, done));
        assert_eq!(live.count(), 0);
        assert_eq!(group.visual(&scope, 2, done), VisualState::IDENTITY);
    }

    #[test]
    fn test_mount_group_ignores_scroll() {
        let mut scope = AnimationScope::new("test", LiveTweens::new());
        let spec = RevealSpec::sequence(HERO_CUES, Ease::Power3Out);
        let mut group = RevealGroup::new(&mut scope, spec, 3);
        let start = Instant::now();

        assert!(!group.observe(&mut scope, Some(0.0), 1000.0, start));
        group.mount(&mut scope, start);
        assert!(group.has_played());

        // Heading is still waiting for its 300ms cue while the badge moves
        let at = start + Duration::from_millis(200);
        assert!(group.visual(&scope, 0, at).opacity > 0.0);
        assert_eq!(group.visual(&scope, 1, at), VisualState::hidden(80.0));
    }

    #[test]
    fn test_sequence_extends_past_last_cue() {
        let spec = RevealSpec::sequence(HERO_CUES, Ease::Power3Out);
        let (from, timing) = spec.cue(4);
        assert_eq!(from, VisualState::hidden(50.0));
        assert_eq!(timing.delay, Duration::from_millis(1200));
    }

    #[test]
    fn test_empty_group_is_a_no_op() {
        let live = LiveTweens::new();
        let mut scope = AnimationScope::new("test", live.clone());
        let mut group = RevealGroup::new(&mut scope, STATS, 0);
        let now = Instant::now();
        assert!(group.observe(&mut scope, Some(0.0), 1000.0, now));
        assert_eq!(live.count(), 0);
        assert_eq!(group.visual(&scope, 0, now), VisualState::IDENTITY);
    }

    #[test]
    fn test_replay_supersedes_and_consumes_gate() {
        let live = LiveTweens::new();
        let mut scope = AnimationScope::new("test", live.clone());
        let mut group = RevealGroup::new(&mut scope, STATS, 6);
        let start = Instant::now();

        group.replay(
            &mut scope,
            3,
            VisualState::hidden_scaled(20.0, 0.95),
            TweenTiming::new(Duration::from_millis(400), Ease::Power2Out),
            Duration::from_millis(30),
            start,
        );
        assert_eq!(group.len(), 3);
        assert_eq!(live.count(), 3);
        assert!(!group.observe(&mut scope, Some(0.0), 1000.0, start));

        // Replay again mid-flight: still one tween per visible element
        let again = start + Duration::from_millis(100);
        group.replay(
            &mut scope,
            2,
            VisualState::hidden_scaled(20.0, 0.95),
            TweenTiming::new(Duration::from_millis(400), Ease::Power2Out),
            Duration::from_millis(30),
            again,
        );
        assert_eq!(live.count(), 2);
        assert_eq!(group.visual(&scope, 0, again), VisualState::hidden_scaled(20.0, 0.95));
    }
}
