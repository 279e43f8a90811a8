/// Scoped ownership of every tween a page starts
///
/// A page owns exactly one `AnimationScope`. Everything the page animates is
/// registered here, so dropping the page (navigating away) releases all of it
/// at once. The shared `LiveTweens` counter is how the shell decides whether
/// it still needs frame ticks.
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use super::tween::{Tween, TweenTiming, VisualState};

/// Count of tweens currently in flight across every scope sharing it
#[derive(Debug, Clone, Default)]
pub struct LiveTweens(Arc<AtomicUsize>);

impl LiveTweens {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn acquire(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    fn release(&self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Identifies one group of sibling elements inside a scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(u32);

/// One animated element: its group and its index among its siblings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Target {
    pub group: GroupId,
    pub index: usize,
}

impl Target {
    pub fn new(group: GroupId, index: usize) -> Self {
        Self { group, index }
    }
}

#[derive(Debug, Clone)]
struct Slot {
    /// State when no tween is running
    rest: VisualState,
    tween: Option<Tween>,
}

/// Owner of a page's animation handles
pub struct AnimationScope {
    label: &'static str,
    next_group: u32,
    slots: HashMap<Target, Slot>,
    live: LiveTweens,
}

impl AnimationScope {
    pub fn new(label: &'static str, live: LiveTweens) -> Self {
        Self {
            label,
            next_group: 0,
            slots: HashMap::new(),
            live,
        }
    }

    /// Reserve an id for a new group of elements
    pub fn allocate_group(&mut self) -> GroupId {
        let id = GroupId(self.next_group);
        self.next_group += 1;
        id
    }

    /// Set a state immediately, killing any tween on the target
    pub fn set(&mut self, target: Target, state: VisualState) {
        let slot = self.slots.entry(target).or_insert(Slot {
            rest: state,
            tween: None,
        });
        slot.rest = state;
        if slot.tween.take().is_some() {
            self.live.release();
        }
    }

    /// Animate from the target's current state to `to`
    pub fn to(&mut self, target: Target, to: VisualState, timing: TweenTiming, now: Instant) {
        let from = self.sample(target, now).unwrap_or(VisualState::IDENTITY);
        self.from_to(target, from, to, timing, now);
    }

    /// Animate from `from` to `to`, overwriting whatever was running on the target
    pub fn from_to(
        &mut self,
        target: Target,
        from: VisualState,
        to: VisualState,
        timing: TweenTiming,
        now: Instant,
    ) {
        let slot = self.slots.entry(target).or_insert(Slot {
            rest: from,
            tween: None,
        });
        slot.rest = from;
        let previous = slot.tween.replace(Tween::new(from, to, timing, now));
        if previous.is_none() {
            self.live.acquire();
        }
    }

    /// Current state of a target, `None` if nothing was ever registered for it
    pub fn sample(&self, target: Target, now: Instant) -> Option<VisualState> {
        self.slots.get(&target).map(|slot| match &slot.tween {
            Some(tween) => tween.sample(now),
            None => slot.rest,
        })
    }

    /// Retire finished tweens. Returns whether anything is still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut running = false;
        for slot in self.slots.values_mut() {
            let finished = match &slot.tween {
                Some(tween) => tween.is_finished(now),
                None => continue,
            };
            if finished {
                if let Some(tween) = slot.tween.take() {
                    slot.rest = tween.target();
                    self.live.release();
                }
            } else {
                running = true;
            }
        }
        running
    }

    /// Number of tweens this scope holds
    pub fn active_tweens(&self) -> usize {
        self.slots.values().filter(|slot| slot.tween.is_some()).count()
    }

    /// Release every handle and forget every registered state
    pub fn revert(&mut self) {
        let released = self.active_tweens();
        for _ in 0..released {
            self.live.release();
        }
        self.slots.clear();
        if released > 0 {
            debug!(scope = self.label, released, "animation scope reverted mid-flight");
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl Drop for AnimationScope {
    fn drop(&mut self) {
        self.revert();
    }
}

impl std::fmt::Debug for AnimationScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationScope")
            .field("label", &self.label)
            .field("targets", &self.slots.len())
            .field("active_tweens", &self.active_tweens())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::easing::Ease;
    use std::time::Duration;

    fn timing() -> TweenTiming {
        TweenTiming::new(Duration::from_millis(600), Ease::Power2Out)
    }

    #[test]
    fn test_unknown_target_samples_none() {
        let mut scope = AnimationScope::new("test", LiveTweens::new());
        let group = scope.allocate_group();
        assert_eq!(scope.sample(Target::new(group, 3), Instant::now()), None);
    }

    #[test]
    fn test_set_then_to_reaches_identity() {
        let live = LiveTweens::new();
        let mut scope = AnimationScope::new("test", live.clone());
        let target = Target::new(scope.allocate_group(), 0);
        let start = Instant::now();

        scope.set(target, VisualState::hidden(60.0));
        assert_eq!(scope.sample(target, start), Some(VisualState::hidden(60.0)));

        scope.to(target, VisualState::IDENTITY, timing(), start);
        assert_eq!(live.count(), 1);

        let end = start + Duration::from_millis(700);
        assert!(!scope.tick(end));
        assert_eq!(live.count(), 0);
        assert_eq!(scope.sample(target, end), Some(VisualState::IDENTITY));
    }

    #[test]
    fn test_new_tween_overwrites_running_one() {
        let live = LiveTweens::new();
        let mut scope = AnimationScope::new("test", live.clone());
        let target = Target::new(scope.allocate_group(), 0);
        let start = Instant::now();

        scope.from_to(target, VisualState::hidden(60.0), VisualState::IDENTITY, timing(), start);
        let restart = start + Duration::from_millis(100);
        scope.from_to(
            target,
            VisualState::hidden_scaled(20.0, 0.95),
            VisualState::IDENTITY,
            timing(),
            restart,
        );

        // Only one handle for the target, and it starts from the new state
        assert_eq!(live.count(), 1);
        assert_eq!(scope.active_tweens(), 1);
        assert_eq!(
            scope.sample(target, restart),
            Some(VisualState::hidden_scaled(20.0, 0.95))
        );
    }

    #[test]
    fn test_drop_releases_in_flight_tweens() {
        let live = LiveTweens::new();
        {
            let mut scope = AnimationScope::new("page", live.clone());
            let group = scope.allocate_group();
            let now = Instant::now();
            for index in 0..5 {
                scope.from_to(
                    Target::new(group, index),
                    VisualState::hidden(40.0),
                    VisualState::IDENTITY,
                    timing(),
                    now,
                );
            }
            assert_eq!(live.count(), 5);
        }
        assert_eq!(live.count(), 0);
    }

    #[test]
    fn test_shared_counter_spans_scopes() {
        let live = LiveTweens::new();
        let mut first = AnimationScope::new("first", live.clone());
        let mut second = AnimationScope::new("second", live.clone());
        let now = Instant::now();

        let a = Target::new(first.allocate_group(), 0);
        let b = Target::new(second.allocate_group(), 0);
        first.from_to(a, VisualState::hidden(10.0), VisualState::IDENTITY, timing(), now);
        second.from_to(b, VisualState::hidden(10.0), VisualState::IDENTITY, timing(), now);
        assert_eq!(live.count(), 2);

        first.revert();
        assert_eq!(live.count(), 1);
        assert_eq!(first.sample(a, now), None);
    }
}
