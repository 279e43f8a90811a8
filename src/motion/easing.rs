/// Easing curves used by the reveal animations
///
/// Naming follows the "power" family: `Power2Out` is a cubic
/// deceleration, `Power3Out` a quartic one.

/// An easing curve mapping linear progress (0.0 to 1.0) to eased progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    /// No easing (used for scrubbed parallax)
    Linear,
    /// 1 - (1 - t)^3
    #[default]
    Power2Out,
    /// 1 - (1 - t)^4
    Power3Out,
}

impl Ease {
    /// Apply the curve. Input is clamped to [0, 1].
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_fixed() {
        for ease in [Ease::Linear, Ease::Power2Out, Ease::Power3Out] {
            assert_eq!(ease.apply(0.0), 0.0);
            assert_eq!(ease.apply(1.0), 1.0);
        }
    }

    #[test]
    fn test_out_curves_decelerate() {
        // Ease-out curves run ahead of linear at the midpoint
        assert!(Ease::Power2Out.apply(0.5) > 0.5);
        assert!(Ease::Power3Out.apply(0.5) > Ease::Power2Out.apply(0.5));
        assert!((Ease::Power2Out.apply(0.5) - 0.875).abs() < 1e-6);
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(Ease::Power3Out.apply(-2.0), 0.0);
        assert_eq!(Ease::Power3Out.apply(7.0), 1.0);
    }
}
