//! Typewriter state machine.
//!
//! The state is fully described by `(is_deleting, char_index, char_index == len)`;
//! there are no separate pause states. A pause is just a longer delay on the
//! frame that completes (or empties) a phrase.

use std::time::Duration;

use crate::config::typing;
use crate::core::error::TypingError;

/// Per-phase delays of the typing animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingSpeeds {
    /// Delay after revealing one character.
    pub type_ms: u32,
    /// Delay after hiding one character.
    pub delete_ms: u32,
    /// Dwell once the full phrase is shown.
    pub dwell_full_ms: u32,
    /// Pause after the phrase is fully deleted, before the next one.
    pub dwell_empty_ms: u32,
}

impl Default for TypingSpeeds {
    fn default() -> Self {
        Self {
            type_ms: typing::TYPE_MS,
            delete_ms: typing::DELETE_MS,
            dwell_full_ms: typing::DWELL_FULL_MS,
            dwell_empty_ms: typing::DWELL_EMPTY_MS,
        }
    }
}

/// One rendered step of the animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Text to show in the sink.
    pub text: String,
    /// Time until the next tick.
    pub delay: Duration,
}

impl Frame {
    pub fn delay_ms(&self) -> u128 {
        self.delay.as_millis()
    }
}

/// Mutable state carried across typewriter ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingState {
    texts: Vec<String>,
    text_index: usize,
    char_index: usize,
    is_deleting: bool,
    delay: Duration,
    speeds: TypingSpeeds,
}

impl TypingState {
    /// Creates the state positioned before the first character of the first phrase.
    pub fn new(texts: Vec<String>) -> Result<Self, TypingError> {
        Self::with_speeds(texts, TypingSpeeds::default())
    }

    pub fn with_speeds(texts: Vec<String>, speeds: TypingSpeeds) -> Result<Self, TypingError> {
        if texts.is_empty() {
            return Err(TypingError::EmptyTexts);
        }
        Ok(Self {
            texts,
            text_index: 0,
            char_index: 0,
            is_deleting: false,
            delay: Duration::from_millis(u64::from(speeds.type_ms)),
            speeds,
        })
    }

    #[inline]
    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    #[inline]
    pub fn text_index(&self) -> usize {
        self.text_index
    }

    #[inline]
    pub fn char_index(&self) -> usize {
        self.char_index
    }

    #[inline]
    pub fn is_deleting(&self) -> bool {
        self.is_deleting
    }

    /// Delay computed by the most recent tick.
    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// The phrase currently being typed or deleted.
    pub fn current_text(&self) -> &str {
        &self.texts[self.text_index]
    }

    /// Length of the current phrase in characters.
    pub fn current_len(&self) -> usize {
        self.current_text().chars().count()
    }

    /// The currently visible prefix of the current phrase.
    pub fn visible_text(&self) -> &str {
        let text = self.current_text();
        match text.char_indices().nth(self.char_index) {
            Some((byte, _)) => &text[..byte],
            None => text,
        }
    }

    /// Advances the animation by one step and returns the frame to render.
    pub fn tick(&mut self) -> Frame {
        let len = self.current_len();

        let mut delay_ms = if self.is_deleting {
            self.char_index = self.char_index.saturating_sub(1);
            self.speeds.delete_ms
        } else {
            self.char_index = (self.char_index + 1).min(len);
            self.speeds.type_ms
        };

        let text = self.visible_text().to_string();

        if !self.is_deleting && self.char_index == len {
            self.is_deleting = true;
            delay_ms = self.speeds.dwell_full_ms;
        } else if self.is_deleting && self.char_index == 0 {
            self.is_deleting = false;
            self.text_index = (self.text_index + 1) % self.texts.len();
            delay_ms = self.speeds.dwell_empty_ms;
        }

        self.delay = Duration::from_millis(u64::from(delay_ms));
        Frame {
            text,
            delay: self.delay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(texts: &[&str]) -> TypingState {
        TypingState::new(texts.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    #[test]
    fn test_rejects_empty_list() {
        assert_eq!(TypingState::new(vec![]), Err(TypingError::EmptyTexts));
    }

    #[test]
    fn test_two_char_cycle() {
        let mut s = state(&["ab"]);

        let f = s.tick();
        assert_eq!((f.text.as_str(), f.delay_ms()), ("a", 50));
        assert!(!s.is_deleting());

        let f = s.tick();
        assert_eq!((f.text.as_str(), f.delay_ms()), ("ab", 1500));
        assert!(s.is_deleting());

        let f = s.tick();
        assert_eq!((f.text.as_str(), f.delay_ms()), ("a", 30));

        let f = s.tick();
        assert_eq!((f.text.as_str(), f.delay_ms()), ("", 500));
        assert!(!s.is_deleting());
        assert_eq!(s.text_index(), 0);
    }

    #[test]
    fn test_advances_to_next_phrase() {
        let mut s = state(&["a", "xyz"]);
        assert_eq!(s.tick().text, "a");
        assert_eq!(s.tick().text, "");
        assert_eq!(s.text_index(), 1);
        assert_eq!(s.tick().text, "x");
        assert_eq!(s.tick().text, "xy");
        assert_eq!(s.current_text(), "xyz");
    }

    #[test]
    fn test_length_monotonic_per_phase() {
        let mut s = state(&["hello", "hi", "portfolio"]);
        let mut prev_len = 0;
        let mut prev_deleting = false;
        let mut prev_index = 0;

        for _ in 0..500 {
            let deleting_before = s.is_deleting();
            let index_before = s.text_index();
            let frame = s.tick();
            let len = frame.text.chars().count();
            assert!(len <= s.texts()[index_before].chars().count());

            if index_before == prev_index && deleting_before == prev_deleting {
                if deleting_before {
                    assert!(len <= prev_len);
                } else {
                    assert!(len >= prev_len);
                }
            }
            prev_len = len;
            prev_deleting = deleting_before;
            prev_index = index_before;
        }
    }

    #[test]
    fn test_index_is_cyclic() {
        let texts = ["ab", "cde", "f"];
        let mut s = state(&texts);
        let mut completed = 0;
        while completed < texts.len() {
            let before = s.text_index();
            s.tick();
            assert!(s.text_index() < texts.len());
            if s.text_index() != before {
                completed += 1;
            }
        }
        assert_eq!(s.text_index(), 0);
    }

    #[test]
    fn test_multibyte_prefix() {
        let mut s = state(&["héllo"]);
        s.tick();
        assert_eq!(s.tick().text, "hé");
    }

    #[test]
    fn test_empty_phrase_flips_without_special_case() {
        let mut s = state(&[""]);
        let f = s.tick();
        assert_eq!((f.text.as_str(), f.delay_ms()), ("", 1500));
        assert!(s.is_deleting());
        let f = s.tick();
        assert_eq!((f.text.as_str(), f.delay_ms()), ("", 500));
        assert!(!s.is_deleting());
    }

    #[test]
    fn test_custom_speeds() {
        let speeds = TypingSpeeds {
            type_ms: 1,
            delete_ms: 2,
            dwell_full_ms: 3,
            dwell_empty_ms: 4,
        };
        let mut s = TypingState::with_speeds(vec!["ab".into()], speeds).unwrap();
        let delays: Vec<u128> = (0..4).map(|_| s.tick().delay_ms()).collect();
        assert_eq!(delays, vec![1, 3, 2, 4]);
    }
}
