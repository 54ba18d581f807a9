//! Editor core
//!
//! Draft state, input-mode flags and derived writing metrics for the
//! Write page.

pub mod error;
pub mod events;
pub mod metrics;
pub mod session;

pub use error::{EditorError, EditorResult};
pub use events::{ActionOutcome, EditorEvent, QuickAction};
pub use metrics::{
    character_count, reading_time_minutes, word_count, DerivedMetrics, GoalProgress,
    WritingGoals, DAILY_WORD_GOAL, WORDS_PER_MINUTE,
};
pub use session::{Draft, EditorSession, EditorSnapshot, InputModeFlags, SessionContext};
