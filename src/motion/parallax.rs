/// Scroll-scrubbed background scale
///
/// Unlike a reveal, this never "fires": scroll progress across the section
/// maps continuously onto a bounded scale, and the displayed scale chases
/// that target with a lag so fast scrolling stays smooth.
use std::time::Duration;

use super::Ease;

/// Parallax state for one background layer
#[derive(Debug, Clone, PartialEq)]
pub struct Parallax {
    max_scale: f32,
    /// Scroll progress to scale; scrubbed layers track the scrollbar 1:1
    curve: Ease,
    lag: Duration,
    target: f32,
    current: f32,
}

impl Parallax {
    /// Scale runs from 1.0 (section top at viewport top) to `max_scale`
    /// (section bottom at viewport top)
    pub fn new(max_scale: f32, lag: Duration) -> Self {
        Self {
            max_scale,
            curve: Ease::Linear,
            lag,
            target: 1.0,
            current: 1.0,
        }
    }

    /// Hero default: up to 110%, 1.5 s scrub
    pub fn hero() -> Self {
        Self::new(1.1, Duration::from_millis(1500))
    }

    /// Progress of the section through the "top top" to "bottom top" range
    pub fn progress(scroll_y: f32, section_top: f32, section_height: f32) -> f32 {
        if section_height <= 0.0 {
            return 0.0;
        }
        ((scroll_y - section_top) / section_height).clamp(0.0, 1.0)
    }

    /// Record a new scroll position
    pub fn scroll_to(&mut self, scroll_y: f32, section_top: f32, section_height: f32) {
        let progress = self.curve.apply(Self::progress(scroll_y, section_top, section_height));
        self.target = 1.0 + (self.max_scale - 1.0) * progress;
    }

    /// Advance the scrub by `elapsed`. Returns whether it is still settling.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if self.lag.is_zero() {
            self.current = self.target;
            return false;
        }
        // Exponential catch-up: about 98% of the distance is covered within `lag`
        let step = 1.0 - (-4.0 * elapsed.as_secs_f32() / self.lag.as_secs_f32()).exp();
        self.current += (self.target - self.current) * step;
        if (self.target - self.current).abs() < 5e-4 {
            self.current = self.target;
        }
        self.is_settling()
    }

    pub fn is_settling(&self) -> bool {
        self.current != self.target
    }

    /// Scale to draw with
    pub fn scale(&self) -> f32 {
        self.current
    }

    #[cfg(test)]
    pub fn target_scale(&self) -> f32 {
        self.target
    }
}

/// Pointer-follow offset of the hero background, ±7.5 px at the window edges
pub fn pointer_offset(normalized_x: f32, normalized_y: f32) -> (f32, f32) {
    const RANGE: f32 = 15.0;
    (
        (normalized_x.clamp(0.0, 1.0) - 0.5) * RANGE,
        (normalized_y.clamp(0.0, 1.0) - 0.5) * RANGE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_is_bounded() {
        assert_eq!(Parallax::progress(-100.0, 0.0, 800.0), 0.0);
        assert_eq!(Parallax::progress(400.0, 0.0, 800.0), 0.5);
        assert_eq!(Parallax::progress(5000.0, 0.0, 800.0), 1.0);
        assert_eq!(Parallax::progress(10.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_target_scale_maps_linearly() {
        let mut parallax = Parallax::hero();
        parallax.scroll_to(400.0, 0.0, 800.0);
        assert!((parallax.target_scale() - 1.05).abs() < 1e-5);
        parallax.scroll_to(10_000.0, 0.0, 800.0);
        assert!((parallax.target_scale() - 1.1).abs() < 1e-5);
    }

    #[test]
    fn test_scrub_converges_without_overshoot() {
        let mut parallax = Parallax::hero();
        parallax.scroll_to(800.0, 0.0, 800.0);

        let mut frames = 0;
        while parallax.advance(Duration::from_millis(16)) {
            assert!(parallax.scale() <= 1.1 + 1e-6);
            frames += 1;
            assert!(frames < 10_000, "scrub never settled");
        }
        assert_eq!(parallax.scale(), parallax.target_scale());
        // Settles within a couple of lag periods at 60 fps
        assert!(frames < 250);
    }

    #[test]
    fn test_zero_lag_snaps() {
        let mut parallax = Parallax::new(1.2, Duration::ZERO);
        parallax.scroll_to(100.0, 0.0, 100.0);
        assert!(!parallax.advance(Duration::from_millis(1)));
        assert!((parallax.scale() - 1.2).abs() < 1e-6);
    }

    #[test]
    fn test_pointer_offset_range() {
        assert_eq!(pointer_offset(0.5, 0.5), (0.0, 0.0));
        assert_eq!(pointer_offset(0.0, 1.0), (-7.5, 7.5));
        assert_eq!(pointer_offset(-3.0, 9.0), (-7.5, 7.5));
    }
}
