use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypewriterError {
    #[error("typewriter needs at least one string")]
    NoStrings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterConfig {
    /// Delay after each typed character
    pub typing_speed: Duration,
    /// Delay after each deleted character
    pub deleting_speed: Duration,
    /// Hold time once a string is fully typed or fully deleted
    pub pause_between: Duration,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            typing_speed: Duration::from_millis(100),
            deleting_speed: Duration::from_millis(50),
            pause_between: Duration::from_millis(1500),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    PausedFull,
    Deleting,
    PausedEmpty,
}

/// Timed typing/deleting loop over a fixed list of strings.
///
/// The owner calls [`Typewriter::tick`] once per timer expiry and schedules the
/// next tick after [`Typewriter::delay`]. Every tick changes the shown text by at
/// most one character. The list cycles forever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    strings: Vec<String>,
    index: usize,
    shown: usize,
    phase: Phase,
    delay: Duration,
    config: TypewriterConfig,
    halted: bool,
}

impl Typewriter {
    pub fn new(strings: Vec<String>, config: TypewriterConfig) -> Result<Self, TypewriterError> {
        if strings.is_empty() {
            return Err(TypewriterError::NoStrings);
        }
        Ok(Self {
            strings,
            index: 0,
            shown: 0,
            phase: Phase::Typing,
            delay: config.typing_speed,
            config,
            halted: false,
        })
    }

    /// Text currently on screen.
    pub fn text(&self) -> &str {
        let current = self.current();
        let end = current
            .char_indices()
            .nth(self.shown)
            .map_or(current.len(), |(i, _)| i);
        &current[..end]
    }

    /// String being typed or deleted.
    pub fn current(&self) -> &str {
        &self.strings[self.index]
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Time to wait before the next tick.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Stops the loop for good. A tick that was already scheduled becomes a no-op.
    pub fn halt(&mut self) {
        self.halted = true;
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Advances one step and returns the delay until the next one.
    pub fn tick(&mut self) -> Duration {
        if self.halted {
            return self.delay;
        }
        self.delay = match self.phase {
            Phase::Typing => self.type_char(),
            Phase::PausedFull => {
                self.phase = Phase::Deleting;
                self.config.deleting_speed
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.phase = Phase::PausedEmpty;
                    self.config.pause_between
                } else {
                    self.config.deleting_speed
                }
            }
            Phase::PausedEmpty => {
                self.index = (self.index + 1) % self.strings.len();
                self.phase = Phase::Typing;
                self.type_char()
            }
        };
        self.delay
    }

    fn type_char(&mut self) -> Duration {
        let full = self.current().chars().count();
        if self.shown < full {
            self.shown += 1;
        }
        if self.shown >= full {
            self.phase = Phase::PausedFull;
            self.config.pause_between
        } else {
            self.config.typing_speed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writer(strings: &[&str]) -> Typewriter {
        Typewriter::new(
            strings.iter().map(|s| s.to_string()).collect(),
            TypewriterConfig::default(),
        )
        .unwrap()
    }

    fn frames(tw: &mut Typewriter, ticks: usize) -> Vec<String> {
        let mut out = vec![tw.text().to_string()];
        for _ in 0..ticks {
            tw.tick();
            out.push(tw.text().to_string());
        }
        out
    }

    #[test]
    fn test_empty_list_rejected() {
        let res = Typewriter::new(vec![], TypewriterConfig::default());
        assert_eq!(res, Err(TypewriterError::NoStrings));
    }

    #[test]
    fn test_single_char_cycle() {
        let mut tw = writer(&["A", "B"]);
        assert_eq!(
            frames(&mut tw, 10),
            vec!["", "A", "A", "", "B", "B", "", "A", "A", "", "B"]
        );
    }

    #[test]
    fn test_phases_and_delays() {
        let config = TypewriterConfig::default();
        let mut tw = writer(&["Hi"]);
        assert_eq!(tw.phase(), Phase::Typing);
        assert_eq!(tw.delay(), config.typing_speed);

        assert_eq!(tw.tick(), config.typing_speed);
        assert_eq!(tw.text(), "H");
        assert_eq!(tw.tick(), config.pause_between);
        assert_eq!(tw.phase(), Phase::PausedFull);
        assert_eq!(tw.text(), "Hi");

        assert_eq!(tw.tick(), config.deleting_speed);
        assert_eq!(tw.phase(), Phase::Deleting);
        assert_eq!(tw.tick(), config.deleting_speed);
        assert_eq!(tw.text(), "H");
        assert_eq!(tw.tick(), config.pause_between);
        assert_eq!(tw.phase(), Phase::PausedEmpty);
        assert_eq!(tw.text(), "");

        // single string wraps onto itself
        tw.tick();
        assert_eq!(tw.text(), "H");
        assert_eq!(tw.current(), "Hi");
    }

    #[test]
    fn test_each_tick_changes_at_most_one_char() {
        let mut tw = writer(&["Backend Engineer", "Reverse Engineer"]);
        let mut prev = tw.text().chars().count();
        for _ in 0..200 {
            tw.tick();
            let now = tw.text().chars().count();
            assert!(now.abs_diff(prev) <= 1);
            prev = now;
        }
    }

    #[test]
    fn test_multibyte_text_slices_on_char_boundaries() {
        let mut tw = writer(&["héllo"]);
        let seen = frames(&mut tw, 5);
        assert_eq!(seen, vec!["", "h", "hé", "hél", "héll", "héllo"]);
    }

    #[test]
    fn test_empty_string_in_list_keeps_cycling() {
        let mut tw = writer(&["", "A"]);
        let seen = frames(&mut tw, 6);
        assert_eq!(seen, vec!["", "", "", "", "A", "A", ""]);
    }

    #[test]
    fn test_halted_writer_ignores_pending_ticks() {
        let mut tw = writer(&["Hi"]);
        tw.tick();
        assert_eq!(tw.text(), "H");
        tw.halt();
        assert!(tw.is_halted());

        let before = tw.clone();
        for _ in 0..10 {
            assert_eq!(tw.tick(), before.delay());
        }
        assert_eq!(tw, before);
        assert_eq!(tw.text(), "H");
        assert_eq!(tw.phase(), Phase::Typing);
    }
}
