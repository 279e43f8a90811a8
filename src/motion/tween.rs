/// Time-bounded interpolation between two visual states
use std::time::{Duration, Instant};

use super::easing::Ease;

/// The animatable properties of one element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    /// Vertical offset in logical pixels (positive = pushed down)
    pub offset_y: f32,
    /// 0.0 (invisible) to 1.0 (opaque)
    pub opacity: f32,
    /// 1.0 = natural size
    pub scale: f32,
}

impl VisualState {
    /// Fully revealed, untransformed
    pub const IDENTITY: VisualState = VisualState {
        offset_y: 0.0,
        opacity: 1.0,
        scale: 1.0,
    };

    /// Hidden and pushed down by `offset_y`
    pub const fn hidden(offset_y: f32) -> Self {
        VisualState {
            offset_y,
            opacity: 0.0,
            scale: 1.0,
        }
    }

    /// Hidden, pushed down and slightly shrunk
    pub const fn hidden_scaled(offset_y: f32, scale: f32) -> Self {
        VisualState {
            offset_y,
            opacity: 0.0,
            scale,
        }
    }

    /// Linear interpolation between two states
    pub fn lerp(self, to: VisualState, t: f32) -> VisualState {
        VisualState {
            offset_y: self.offset_y + (to.offset_y - self.offset_y) * t,
            opacity: self.opacity + (to.opacity - self.opacity) * t,
            scale: self.scale + (to.scale - self.scale) * t,
        }
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Duration, delay and curve of a single tween
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenTiming {
    pub delay: Duration,
    pub duration: Duration,
    pub ease: Ease,
}

impl TweenTiming {
    pub const fn new(duration: Duration, ease: Ease) -> Self {
        Self {
            delay: Duration::ZERO,
            duration,
            ease,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// A running interpolation from one state to another
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    from: VisualState,
    to: VisualState,
    timing: TweenTiming,
    started_at: Instant,
}

impl Tween {
    pub fn new(from: VisualState, to: VisualState, timing: TweenTiming, started_at: Instant) -> Self {
        Self {
            from,
            to,
            timing,
            started_at,
        }
    }

    /// Linear progress at `now`, 0.0 during the delay, 1.0 once finished
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed <= self.timing.delay {
            return 0.0;
        }
        let running = elapsed - self.timing.delay;
        if self.timing.duration.is_zero() || running >= self.timing.duration {
            return 1.0;
        }
        running.as_secs_f32() / self.timing.duration.as_secs_f32()
    }

    /// The interpolated state at `now`
    pub fn sample(&self, now: Instant) -> VisualState {
        let eased = self.timing.ease.apply(self.progress(now));
        self.from.lerp(self.to, eased)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.timing.delay + self.timing.duration
    }

    /// Where this tween ends up
    pub fn target(&self) -> VisualState {
        self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing(ms: u64) -> TweenTiming {
        TweenTiming::new(Duration::from_millis(ms), Ease::Linear)
    }

    #[test]
    fn test_lerp_midpoint() {
        let mid = VisualState::hidden_scaled(60.0, 0.98).lerp(VisualState::IDENTITY, 0.5);
        assert!((mid.offset_y - 30.0).abs() < 1e-4);
        assert!((mid.opacity - 0.5).abs() < 1e-4);
        assert!((mid.scale - 0.99).abs() < 1e-4);
    }

    #[test]
    fn test_delay_holds_initial_state() {
        let start = Instant::now();
        let tween = Tween::new(
            VisualState::hidden(40.0),
            VisualState::IDENTITY,
            timing(600).delayed(Duration::from_millis(300)),
            start,
        );

        assert_eq!(tween.sample(start + Duration::from_millis(200)), VisualState::hidden(40.0));
        assert!(!tween.is_finished(start + Duration::from_millis(800)));
        assert!(tween.is_finished(start + Duration::from_millis(900)));
        assert_eq!(tween.sample(start + Duration::from_millis(900)), VisualState::IDENTITY);
    }

    #[test]
    fn test_progress_is_linear_before_easing() {
        let start = Instant::now();
        let tween = Tween::new(VisualState::hidden(10.0), VisualState::IDENTITY, timing(1000), start);
        let p = tween.progress(start + Duration::from_millis(250));
        assert!((p - 0.25).abs() < 1e-3);
    }

    #[test]
    fn test_zero_duration_jumps_to_target() {
        let start = Instant::now();
        let tween = Tween::new(VisualState::hidden(10.0), VisualState::IDENTITY, timing(0), start);
        assert_eq!(tween.sample(start), VisualState::IDENTITY);
        assert!(tween.is_finished(start));
    }
}
