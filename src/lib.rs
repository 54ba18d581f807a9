//! # Penwise
//!
//! Writing session core for the Penwise editor: the in-memory draft behind
//! the Write page, its voice/gesture input flags, and the writing metrics
//! derived from it.
//!
//! ## Modules
//!
//! - [`editor`]: Draft state, input events and derived metrics
//! - [`config`]: TOML configuration with environment overrides (`cli` feature)
//! - [`logging`]: `tracing` subscriber bootstrap (`cli` feature)
//!
//! ## Quick Start
//!
//! ```rust
//! use penwise::editor::{EditorSession, SessionContext};
//!
//! let mut session = EditorSession::new(SessionContext::default());
//! session.set_title("Morning pages");
//! session.set_body("The quick brown fox jumps over the lazy dog");
//! session.toggle_voice();
//!
//! let metrics = session.compute_metrics();
//! assert_eq!(metrics.word_count, 9);
//! assert_eq!(metrics.reading_time_minutes, 1);
//! assert!(session.goal_progress().percent < 2.0);
//! ```

#[cfg(feature = "cli")]
pub mod config;
pub mod editor;
#[cfg(feature = "cli")]
pub mod logging;

// Re-export top-level types for convenience
pub use editor::{
    ActionOutcome, DerivedMetrics, Draft, EditorError, EditorEvent, EditorResult, EditorSession,
    EditorSnapshot, GoalProgress, InputModeFlags, QuickAction, SessionContext, WritingGoals,
};

#[cfg(feature = "cli")]
pub use config::{Config, ConfigError, LoggingConfig};
