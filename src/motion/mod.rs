/// Reveal animation system
///
/// This module handles every animated entrance on the site:
/// - Easing curves (easing.rs)
/// - Tweens between visual states (tween.rs)
/// - One-shot scroll triggers (trigger.rs)
/// - Per-page ownership and teardown of tweens (scope.rs)
/// - Reusable reveal groups with stagger and fixed schedules (reveal.rs)
/// - Scroll-scrubbed background parallax (parallax.rs)

pub mod easing;
pub mod parallax;
pub mod reveal;
pub mod scope;
pub mod trigger;
pub mod tween;

pub use easing::Ease;
pub use parallax::Parallax;
pub use reveal::{Cue, RevealSpec};
pub use scope::{AnimationScope, LiveTweens};
pub use trigger::TriggerBand;
pub use tween::{TweenTiming, VisualState};
