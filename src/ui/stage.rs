/// A page as a vertical stack of fixed-height sections
///
/// Each section owns one or more reveal groups. Because section heights are fixed for
/// a given window width, a section's top edge in the viewport is simply its
/// offset in the page minus the scroll position, which is all the scroll
/// triggers need.
use std::time::{Duration, Instant};

use crate::motion::reveal::RevealGroup;
use crate::motion::{AnimationScope, LiveTweens, RevealSpec, TweenTiming, VisualState};

/// Grid columns for a window width: 1 below 640 px, 2 below 1024 px, else 3
pub fn columns(width: f32) -> usize {
    if width < 640.0 {
        1
    } else if width < 1024.0 {
        2
    } else {
        3
    }
}

/// Rows needed to lay out `items` in `columns`
pub fn rows(items: usize, columns: usize) -> usize {
    items.div_ceil(columns.max(1))
}

/// Height of `items` cells of `cell` px laid out in `columns`
pub fn grid_height(items: usize, columns: usize, cell: f32, spacing: f32) -> f32 {
    match rows(items, columns) {
        0 => 0.0,
        n => n as f32 * cell + (n - 1) as f32 * spacing,
    }
}

/// Viewport-relative top edge of every section
pub fn section_tops(heights: &[f32], scroll_y: f32) -> Vec<f32> {
    heights
        .iter()
        .scan(-scroll_y, |top, height| {
            let current = *top;
            *top += height;
            Some(current)
        })
        .collect()
}

/// A reveal group and the layout slot whose top edge triggers it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    slot: usize,
    group: usize,
}

/// Animation scope plus the reveal groups of every section
#[derive(Debug)]
pub struct Stage {
    scope: AnimationScope,
    groups: Vec<(usize, RevealGroup)>,
    slots: usize,
}

impl Stage {
    pub fn new(label: &'static str, live: LiveTweens) -> Self {
        Self {
            scope: AnimationScope::new(label, live),
            groups: Vec::new(),
            slots: 0,
        }
    }

    /// Append a section of `len` animated elements, hidden until its entrance plays
    pub fn section(&mut self, spec: RevealSpec, len: usize) -> Section {
        self.slots += 1;
        self.push(self.slots - 1, spec, len)
    }

    /// Another group inside an existing section, with its own entrance
    /// (a heading above a grid of cards, say)
    pub fn layer(&mut self, of: Section, spec: RevealSpec, len: usize) -> Section {
        self.push(of.slot, spec, len)
    }

    fn push(&mut self, slot: usize, spec: RevealSpec, len: usize) -> Section {
        let group = RevealGroup::new(&mut self.scope, spec, len);
        self.groups.push((slot, group));
        Section {
            slot,
            group: self.groups.len() - 1,
        }
    }

    /// Number of layout slots: `observe` expects one height per slot
    #[cfg(test)]
    pub fn sections(&self) -> usize {
        self.slots
    }

    /// Start every mount-triggered entrance
    pub fn mount(&mut self, now: Instant) {
        for (_, group) in &mut self.groups {
            group.mount(&mut self.scope, now);
        }
    }

    /// Feed the scroll position to every section's trigger. `heights` runs
    /// top to bottom, one per section; sections without a height are not
    /// laid out and never fire.
    pub fn observe(&mut self, heights: &[f32], scroll_y: f32, viewport_height: f32, now: Instant) {
        let tops = section_tops(heights, scroll_y);
        for (slot, group) in &mut self.groups {
            group.observe(&mut self.scope, tops.get(*slot).copied(), viewport_height, now);
        }
    }

    /// Restart a short entrance on a section with a new element count
    pub fn replay(
        &mut self,
        section: Section,
        len: usize,
        from: VisualState,
        timing: TweenTiming,
        stagger: Duration,
        now: Instant,
    ) {
        if let Some((_, group)) = self.groups.get_mut(section.group) {
            group.replay(&mut self.scope, len, from, timing, stagger, now);
        }
    }

    /// Retire finished tweens. Returns whether anything is still moving.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.scope.tick(now)
    }

    #[cfg(test)]
    pub fn is_animating(&self) -> bool {
        self.scope.active_tweens() > 0
    }

    /// Current state of element `index` in `section`
    pub fn visual(&self, section: Section, index: usize, now: Instant) -> VisualState {
        self.groups
            .get(section.group)
            .map(|(_, group)| group.visual(&self.scope, index, now))
            .unwrap_or(VisualState::IDENTITY)
    }

    #[cfg(test)]
    pub fn has_played(&self, section: Section) -> bool {
        self.groups
            .get(section.group)
            .is_some_and(|(_, group)| group.has_played())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{Ease, TriggerBand};

    const FADE_UP: RevealSpec = RevealSpec::scroll(TriggerBand::TOP_85, VisualState::hidden(50.0), 800, Ease::Power2Out, 100);

    #[test]
    fn test_columns_follow_breakpoints() {
        assert_eq!(columns(375.0), 1);
        assert_eq!(columns(640.0), 2);
        assert_eq!(columns(1023.0), 2);
        assert_eq!(columns(1440.0), 3);
        assert_eq!(rows(12, 3), 4);
        assert_eq!(rows(7, 2), 4);
        assert_eq!(rows(0, 3), 0);
    }

    #[test]
    fn test_grid_height_includes_gutters() {
        assert_eq!(grid_height(6, 3, 300.0, 24.0), 624.0);
        assert_eq!(grid_height(6, 1, 300.0, 24.0), 6.0 * 300.0 + 5.0 * 24.0);
        assert_eq!(grid_height(0, 3, 300.0, 24.0), 0.0);
    }

    #[test]
    fn test_section_tops_subtract_scroll() {
        assert_eq!(section_tops(&[600.0, 400.0, 300.0], 0.0), vec![0.0, 600.0, 1000.0]);
        assert_eq!(section_tops(&[600.0, 400.0, 300.0], 250.0), vec![-250.0, 350.0, 750.0]);
    }

    #[test]
    fn test_sections_fire_as_they_scroll_in() {
        let live = LiveTweens::new();
        let mut stage = Stage::new("test", live.clone());
        let hero = stage.section(FADE_UP, 2);
        let below = stage.section(FADE_UP, 3);
        let now = Instant::now();

        // 800 px viewport: first section top at 0 is inside the band, second at 900 is not
        stage.observe(&[900.0, 500.0], 0.0, 800.0, now);
        assert!(stage.has_played(hero));
        assert!(!stage.has_played(below));
        assert_eq!(live.count(), 2);

        stage.observe(&[900.0, 500.0], 300.0, 800.0, now);
        assert!(stage.has_played(below));
        assert_eq!(live.count(), 5);
    }

    #[test]
    fn test_layers_share_their_section_trigger() {
        let live = LiveTweens::new();
        let mut stage = Stage::new("test", live.clone());
        let hero = stage.section(FADE_UP, 1);
        let title = stage.section(FADE_UP, 1);
        let cards = stage.layer(title, FADE_UP, 4);
        assert_eq!(stage.sections(), 2);

        let now = Instant::now();
        stage.observe(&[900.0, 600.0], 0.0, 800.0, now);
        assert!(stage.has_played(hero));
        assert!(!stage.has_played(cards));

        stage.observe(&[900.0, 600.0], 400.0, 800.0, now);
        assert!(stage.has_played(title));
        assert!(stage.has_played(cards));
        assert_eq!(live.count(), 6);
    }

    #[test]
    fn test_missing_heights_never_fire() {
        let mut stage = Stage::new("test", LiveTweens::new());
        let orphan = stage.section(FADE_UP, 2);
        stage.observe(&[], 0.0, 800.0, Instant::now());
        assert!(!stage.has_played(orphan));
    }

    #[test]
    fn test_dropping_stage_releases_tweens() {
        let live = LiveTweens::new();
        {
            let mut stage = Stage::new("test", live.clone());
            stage.section(FADE_UP, 4);
            stage.observe(&[500.0], 0.0, 800.0, Instant::now());
            assert_eq!(live.count(), 4);
        }
        assert_eq!(live.count(), 0);
    }
}
