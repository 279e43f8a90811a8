/// One-shot scroll triggers
///
/// A trigger watches one container. It fires the first time the container's
/// top edge reaches the configured band of the viewport and is consumed
/// afterwards: scrolling back up and down again never re-fires it.

/// "top N%": fire when the container top reaches N% of the viewport height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerBand {
    /// Fraction of the viewport height measured from its top edge
    pub start_fraction: f32,
}

impl TriggerBand {
    /// `top 90%`
    pub const TOP_90: TriggerBand = TriggerBand { start_fraction: 0.90 };
    /// `top 85%`
    pub const TOP_85: TriggerBand = TriggerBand { start_fraction: 0.85 };
    /// `top 80%`
    pub const TOP_80: TriggerBand = TriggerBand { start_fraction: 0.80 };

    /// Whether a container whose top sits at `container_top` (relative to the
    /// viewport's top edge) is inside the band
    pub fn contains(&self, container_top: f32, viewport_height: f32) -> bool {
        container_top <= viewport_height * self.start_fraction
    }
}

/// A scroll observer with a consumed flag
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTrigger {
    band: TriggerBand,
    fired: bool,
}

impl ScrollTrigger {
    pub fn new(band: TriggerBand) -> Self {
        Self { band, fired: false }
    }

    /// Feed a scroll observation. Returns `true` exactly once, on the
    /// observation that first puts the container inside the band.
    ///
    /// `container_top` is `None` while the container is not laid out; that
    /// observation is ignored.
    pub fn observe(&mut self, container_top: Option<f32>, viewport_height: f32) -> bool {
        if self.fired {
            return false;
        }
        let Some(top) = container_top else {
            return false;
        };
        if viewport_height <= 0.0 || !self.band.contains(top, viewport_height) {
            return false;
        }
        self.fired = true;
        true
    }

    /// Mark as fired without an observation (the targets were revealed some
    /// other way)
    pub fn consume(&mut self) {
        self.fired = true;
    }

    #[cfg(test)]
    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_when_top_crosses_band() {
        let mut trigger = ScrollTrigger::new(TriggerBand::TOP_85);
        // viewport 1000px: band edge at 850px
        assert!(!trigger.observe(Some(900.0), 1000.0));
        assert!(trigger.observe(Some(849.0), 1000.0));
        assert!(trigger.has_fired());
    }

    #[test]
    fn test_fires_at_most_once_in_either_direction() {
        let mut trigger = ScrollTrigger::new(TriggerBand::TOP_80);
        let tops = [1200.0, 700.0, 1500.0, 300.0, 2000.0, -400.0, 500.0];
        let fired: usize = tops
            .iter()
            .filter(|&&top| trigger.observe(Some(top), 1000.0))
            .count();
        assert_eq!(fired, 1);
    }

    #[test]
    fn test_absent_container_is_a_no_op() {
        let mut trigger = ScrollTrigger::new(TriggerBand::TOP_90);
        assert!(!trigger.observe(None, 1000.0));
        assert!(!trigger.has_fired());
        assert!(trigger.observe(Some(0.0), 1000.0));
    }

    #[test]
    fn test_consumed_trigger_never_fires() {
        let mut trigger = ScrollTrigger::new(TriggerBand::TOP_90);
        trigger.consume();
        assert!(!trigger.observe(Some(0.0), 1000.0));
    }

    #[test]
    fn test_container_already_above_viewport_fires() {
        // Landing on a page scrolled past a section still reveals it
        let mut trigger = ScrollTrigger::new(TriggerBand::TOP_85);
        assert!(trigger.observe(Some(-2500.0), 800.0));
    }
}
