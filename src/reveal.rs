/// Visibility of an observed section. `Revealed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Pending,
    Revealed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    /// Fraction of the element that must be visible, `0.0..=1.0`.
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { threshold: 0.2 }
    }
}

/// Side the element slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealFrom {
    #[default]
    Below,
    Left,
    Right,
    /// Fade only
    Still,
}

impl RevealFrom {
    pub fn hidden_class(&self) -> &'static str {
        match self {
            Self::Below => "opacity-0 translate-y-5",
            Self::Left => "opacity-0 -translate-x-12",
            Self::Right => "opacity-0 translate-x-12",
            Self::Still => "opacity-0",
        }
    }
}

/// Browsers report the threshold crossing from rounded rects, so a ratio a
/// hair under the threshold still counts.
const RATIO_SLACK: f64 = 1e-3;

/// One-shot reveal trigger for a single element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Reveal {
    state: RevealState,
    config: RevealConfig,
    detached: bool,
}

impl Reveal {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            state: RevealState::Pending,
            config,
            detached: false,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    /// Drops the element from observation. A pending element stays pending and
    /// later observations are ignored.
    pub fn detach(&mut self) {
        self.detached = true;
    }

    /// Feeds the latest visible fraction. Returns `true` only on the single
    /// `Pending -> Revealed` transition.
    pub fn observe(&mut self, visible_ratio: f64) -> bool {
        if self.detached {
            return false;
        }
        match self.state {
            RevealState::Revealed => false,
            RevealState::Pending if visible_ratio + RATIO_SLACK >= self.config.threshold => {
                self.state = RevealState::Revealed;
                true
            }
            RevealState::Pending => false,
        }
    }

    pub fn class(&self, from: RevealFrom) -> &'static str {
        match self.state {
            RevealState::Pending => from.hidden_class(),
            RevealState::Revealed => "opacity-100 translate-x-0 translate-y-0",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_at_threshold() {
        let mut reveal = Reveal::default();
        assert_eq!(reveal.state(), RevealState::Pending);
        assert!(!reveal.observe(0.0));
        assert!(!reveal.observe(0.19));
        assert!(reveal.observe(0.2));
        assert!(reveal.is_revealed());
    }

    #[test]
    fn test_rounded_ratio_at_threshold_reveals() {
        let mut reveal = Reveal::default();
        assert!(reveal.observe(0.19999999));
        assert!(reveal.is_revealed());

        let mut reveal = Reveal::new(RevealConfig { threshold: 0.5 });
        assert!(!reveal.observe(0.49));
        assert!(reveal.observe(0.4999));
    }

    #[test]
    fn test_detached_before_threshold_is_discarded() {
        let mut reveal = Reveal::default();
        assert!(!reveal.observe(0.1));
        reveal.detach();
        assert!(!reveal.observe(1.0));
        assert_eq!(reveal.state(), RevealState::Pending);
    }

    #[test]
    fn test_detach_keeps_revealed() {
        let mut reveal = Reveal::default();
        assert!(reveal.observe(0.5));
        reveal.detach();
        assert!(!reveal.observe(1.0));
        assert!(reveal.is_revealed());
    }

    #[test]
    fn test_never_reverts() {
        let mut reveal = Reveal::new(RevealConfig { threshold: 0.5 });
        assert!(reveal.observe(0.75));
        assert!(!reveal.observe(0.0));
        assert!(!reveal.observe(1.0));
        assert_eq!(reveal.state(), RevealState::Revealed);
    }

    #[test]
    fn test_elements_are_independent() {
        let mut top = Reveal::default();
        let mut bottom = Reveal::default();
        assert!(top.observe(1.0));
        assert!(!bottom.observe(0.1));
        assert!(top.is_revealed());
        assert!(!bottom.is_revealed());
    }

    #[test]
    fn test_classes_follow_state() {
        let mut reveal = Reveal::default();
        assert_eq!(reveal.class(RevealFrom::Left), "opacity-0 -translate-x-12");
        reveal.observe(1.0);
        assert!(reveal.class(RevealFrom::Left).starts_with("opacity-100"));
    }
}
