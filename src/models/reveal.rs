//! Reveal targets: elements that latch into a visible state once seen.

use crate::config::reveal;

/// Which family of reveal element this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealKind {
    /// `.fade-in` blocks, staggered by position among siblings.
    Fade,
    /// `.skill-item` bars, staggered by position in the page, revealed once.
    SkillBar,
}

/// Intersection observer settings for a reveal kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    pub root_margin: &'static str,
    /// Minimum visible fraction before an entry counts as intersecting.
    pub threshold: f64,
}

impl RevealKind {
    pub fn observer_options(self) -> ObserverOptions {
        match self {
            Self::Fade => ObserverOptions {
                root_margin: reveal::FADE_ROOT_MARGIN,
                threshold: reveal::FADE_THRESHOLD,
            },
            Self::SkillBar => ObserverOptions {
                root_margin: reveal::SKILL_ROOT_MARGIN,
                threshold: reveal::SKILL_THRESHOLD,
            },
        }
    }

    /// Stagger added per ordinal position, in milliseconds.
    pub fn stagger_step_ms(self) -> u32 {
        match self {
            Self::Fade => reveal::FADE_STAGGER_MS,
            Self::SkillBar => reveal::SKILL_STAGGER_MS,
        }
    }

    /// Skill bars stop being observed after their first reveal.
    pub fn is_one_shot(self) -> bool {
        matches!(self, Self::SkillBar)
    }

    /// Stagger delay for the element at `ordinal`.
    pub fn stagger_for(self, ordinal: usize) -> u32 {
        let ordinal = u32::try_from(ordinal).unwrap_or(u32::MAX);
        ordinal.saturating_mul(self.stagger_step_ms())
    }
}

/// A reveal element tracked by the reveal board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealElement {
    pub kind: RevealKind,
    pub stagger_ms: u32,
    visible: bool,
    observed: bool,
}

impl RevealElement {
    pub fn new(kind: RevealKind, stagger_ms: u32) -> Self {
        Self {
            kind,
            stagger_ms,
            visible: false,
            observed: true,
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub fn is_observed(&self) -> bool {
        self.observed
    }

    /// Latches the element visible. Returns `true` only on the first call.
    pub fn latch_visible(&mut self) -> bool {
        !std::mem::replace(&mut self.visible, true)
    }

    pub fn stop_observing(&mut self) {
        self.observed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger() {
        assert_eq!(RevealKind::Fade.stagger_for(0), 0);
        assert_eq!(RevealKind::Fade.stagger_for(3), 300);
        assert_eq!(RevealKind::SkillBar.stagger_for(4), 200);
    }

    #[test]
    fn test_observer_options() {
        let fade = RevealKind::Fade.observer_options();
        assert_eq!(fade.root_margin, "0px 0px -50px 0px");
        assert_eq!(fade.threshold, 0.1);
        let skill = RevealKind::SkillBar.observer_options();
        assert_eq!(skill.root_margin, "0px");
        assert_eq!(skill.threshold, 0.2);
    }

    #[test]
    fn test_latch_fires_once() {
        let mut el = RevealElement::new(RevealKind::Fade, 0);
        assert!(!el.is_visible());
        assert!(el.latch_visible());
        assert!(!el.latch_visible());
        assert!(el.is_visible());
    }
}
