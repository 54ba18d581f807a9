//! Draft Metrics
//!
//! Word, character and reading-time figures derived from a draft body,
//! plus progress toward the daily word goal.
//!
//! Everything here is a pure function of the body text. Nothing is cached:
//! callers recompute on every read, which is linear in the body length.

use serde::Serialize;

use super::error::{EditorError, EditorResult};

/// Daily word target used for goal progress
pub const DAILY_WORD_GOAL: u32 = 500;

/// Average reading speed used for the reading-time estimate
pub const WORDS_PER_MINUTE: u32 = 200;

/// Targets used when deriving reading time and goal progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WritingGoals {
    daily_word_goal: u32,
    words_per_minute: u32,
}

impl Default for WritingGoals {
    fn default() -> Self {
        Self {
            daily_word_goal: DAILY_WORD_GOAL,
            words_per_minute: WORDS_PER_MINUTE,
        }
    }
}

impl WritingGoals {
    /// Create goals, rejecting zero targets
    pub fn new(daily_word_goal: u32, words_per_minute: u32) -> EditorResult<Self> {
        if daily_word_goal == 0 {
            return Err(EditorError::InvalidGoal(
                "daily word goal must be greater than zero".to_string(),
            ));
        }
        if words_per_minute == 0 {
            return Err(EditorError::InvalidGoal(
                "words per minute must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            daily_word_goal,
            words_per_minute,
        })
    }

    pub fn daily_word_goal(&self) -> u32 {
        self.daily_word_goal
    }

    pub fn words_per_minute(&self) -> u32 {
        self.words_per_minute
    }
}

/// Count maximal runs of non-whitespace characters.
///
/// Tokens are split on Unicode whitespace only, so `well-known`, `end.` and
/// `42` each count as one word.
pub fn word_count(body: &str) -> usize {
    body.split_whitespace().count()
}

/// Count characters (Unicode scalar values), whitespace included.
///
/// This is not the UTF-16 length a browser reports for the same text:
/// anything outside the Basic Multilingual Plane (most emoji) counts once
/// here but twice in `String.length`.
pub fn character_count(body: &str) -> usize {
    body.chars().count()
}

/// Minutes needed to read `words` at `words_per_minute`, rounded up
pub fn reading_time_minutes(words: usize, words_per_minute: u32) -> usize {
    words.div_ceil(words_per_minute.max(1) as usize)
}

/// Figures derived from the draft body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DerivedMetrics {
    pub word_count: usize,
    pub character_count: usize,
    pub reading_time_minutes: usize,
}

impl DerivedMetrics {
    /// Compute all metrics for `body`
    pub fn compute(body: &str, goals: &WritingGoals) -> Self {
        let words = word_count(body);

        Self {
            word_count: words,
            character_count: character_count(body),
            reading_time_minutes: reading_time_minutes(words, goals.words_per_minute),
        }
    }
}

/// Progress toward the daily word goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalProgress {
    pub target_words: u32,
    /// Percentage in `0.0..=100.0`
    pub percent: f64,
}

impl GoalProgress {
    pub fn compute(words: usize, goals: &WritingGoals) -> Self {
        let target = goals.daily_word_goal.max(1);
        let percent = (words as f64 / target as f64 * 100.0).min(100.0);

        Self {
            target_words: target,
            percent,
        }
    }

    /// Percentage rounded down to a whole number for display
    pub fn whole_percent(&self) -> u32 {
        self.percent.floor() as u32
    }

    pub fn is_met(&self) -> bool {
        self.percent >= 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_word_count_empty_and_blank() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \n\t  "), 0);
    }

    #[test]
    fn test_word_count_ignores_extra_whitespace() {
        assert_eq!(word_count("hello world"), 2);
        assert_eq!(word_count("  hello   world  "), 2);
        assert_eq!(word_count("line one\nline\ttwo"), 4);
    }

    #[test]
    fn test_word_count_is_plain_tokenization() {
        assert_eq!(word_count("well-known facts, 42 times."), 4);
        assert_eq!(word_count("a\u{00A0}b\u{2003}c"), 3);
    }

    #[test]
    fn test_character_count_includes_whitespace() {
        assert_eq!(character_count("a b"), 3);
        assert_eq!(character_count(""), 0);
        assert_eq!(character_count(" \n"), 2);
        assert_eq!(character_count("héllo"), 5);
    }

    #[test]
    fn test_character_count_uses_scalar_values() {
        let text = "😀 a";
        assert_eq!(character_count(text), 3);
        assert_eq!(text.encode_utf16().count(), 4);
        assert_eq!(text.len(), 6);
    }

    #[test]
    fn test_reading_time_rounds_up() {
        assert_eq!(reading_time_minutes(0, WORDS_PER_MINUTE), 0);
        assert_eq!(reading_time_minutes(1, WORDS_PER_MINUTE), 1);
        assert_eq!(reading_time_minutes(200, WORDS_PER_MINUTE), 1);
        assert_eq!(reading_time_minutes(201, WORDS_PER_MINUTE), 2);
    }

    #[test]
    fn test_derived_metrics() {
        let goals = WritingGoals::default();
        let metrics = DerivedMetrics::compute(&words(201), &goals);
        assert_eq!(metrics.word_count, 201);
        assert_eq!(metrics.reading_time_minutes, 2);
        assert_eq!(metrics.character_count, 201 * 4 + 200);
    }

    #[test]
    fn test_goal_progress_is_clamped() {
        let goals = WritingGoals::default();
        assert_eq!(GoalProgress::compute(0, &goals).percent, 0.0);
        assert_eq!(GoalProgress::compute(250, &goals).percent, 50.0);
        assert_eq!(GoalProgress::compute(500, &goals).percent, 100.0);
        assert_eq!(GoalProgress::compute(1000, &goals).percent, 100.0);
        assert_eq!(GoalProgress::compute(250, &goals).target_words, 500);
    }

    #[test]
    fn test_goal_progress_display_helpers() {
        let goals = WritingGoals::default();
        let progress = GoalProgress::compute(333, &goals);
        assert_eq!(progress.whole_percent(), 66);
        assert!(!progress.is_met());
        assert!(GoalProgress::compute(500, &goals).is_met());
    }

    #[test]
    fn test_writing_goals_reject_zero() {
        assert!(WritingGoals::new(0, 200).is_err());
        assert!(WritingGoals::new(500, 0).is_err());

        let goals = WritingGoals::new(1000, 250).unwrap();
        assert_eq!(goals.daily_word_goal(), 1000);
        assert_eq!(goals.words_per_minute(), 250);
    }
}
