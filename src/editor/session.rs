//! Editor Session
//!
//! In-memory state behind the Write page: the draft, the two input-mode
//! flags and the shared preferences the host handed over at construction.
//!
//! # Invariants
//!
//! - Title and body are only ever replaced wholesale.
//! - Voice and gesture flags are independent; toggling one never touches
//!   the other or the draft.
//! - Metrics and goal progress are derived on every read, never stored.
//! - The session never mutates its [`SessionContext`]; only the host may
//!   replace it.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::events::{ActionOutcome, EditorEvent, QuickAction};
use super::metrics::{DerivedMetrics, GoalProgress, WritingGoals};

/// Shared preferences consumed read-only by a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SessionContext {
    /// Session-wide theme flag owned by the auth/preferences layer
    pub dark_mode: bool,
    pub goals: WritingGoals,
}

impl SessionContext {
    pub fn new(dark_mode: bool, goals: WritingGoals) -> Self {
        Self { dark_mode, goals }
    }
}

/// The title/body pair being edited
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Draft {
    pub title: String,
    pub body: String,
}

/// Intended input modalities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct InputModeFlags {
    pub voice_active: bool,
    pub gesture_active: bool,
}

/// Editor session state for a single mounted editor
#[derive(Debug, Clone)]
pub struct EditorSession {
    draft: Draft,
    flags: InputModeFlags,
    context: SessionContext,
    opened_at: DateTime<Utc>,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(SessionContext::default())
    }
}

impl EditorSession {
    /// Open a session with an empty draft and both flags off
    pub fn new(context: SessionContext) -> Self {
        Self {
            draft: Draft::default(),
            flags: InputModeFlags::default(),
            context,
            opened_at: Utc::now(),
        }
    }

    pub fn title(&self) -> &str {
        &self.draft.title
    }

    pub fn body(&self) -> &str {
        &self.draft.body
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn flags(&self) -> InputModeFlags {
        self.flags
    }

    pub fn voice_active(&self) -> bool {
        self.flags.voice_active
    }

    pub fn gesture_active(&self) -> bool {
        self.flags.gesture_active
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn dark_mode(&self) -> bool {
        self.context.dark_mode
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Replace the title
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    /// Replace the body
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.draft.body = body.into();
    }

    /// Flip the voice flag. No audio is captured.
    pub fn toggle_voice(&mut self) {
        self.flags.voice_active = !self.flags.voice_active;
        tracing::trace!(voice_active = self.flags.voice_active, "voice input toggled");
    }

    /// Flip the gesture flag. No gesture tracking is started.
    pub fn toggle_gesture(&mut self) {
        self.flags.gesture_active = !self.flags.gesture_active;
        tracing::trace!(
            gesture_active = self.flags.gesture_active,
            "gesture input toggled"
        );
    }

    /// Derive word, character and reading-time figures from the body
    pub fn compute_metrics(&self) -> DerivedMetrics {
        DerivedMetrics::compute(&self.draft.body, &self.context.goals)
    }

    /// Progress toward the daily word goal
    pub fn goal_progress(&self) -> GoalProgress {
        GoalProgress::compute(self.compute_metrics().word_count, &self.context.goals)
    }

    /// Handle a quick-action click.
    ///
    /// Save, read-aloud and AI suggestions have no backing service, so this
    /// only records the click and leaves the session untouched.
    pub fn trigger(&self, action: QuickAction) -> ActionOutcome {
        tracing::debug!(action = ?action, "quick action has no handler");
        ActionOutcome::Unavailable
    }

    /// Apply a decoded input event. Returns the outcome for quick actions.
    pub fn apply(&mut self, event: EditorEvent) -> Option<ActionOutcome> {
        match event {
            EditorEvent::TitleChanged { value } => self.set_title(value),
            EditorEvent::BodyChanged { value } => self.set_body(value),
            EditorEvent::ToggleVoice => self.toggle_voice(),
            EditorEvent::ToggleGesture => self.toggle_gesture(),
            EditorEvent::QuickAction { action } => return Some(self.trigger(action)),
        }
        None
    }

    /// Host-side replacement of the shared preferences
    pub fn replace_context(&mut self, context: SessionContext) {
        self.context = context;
    }

    /// Everything a host needs to render the editor
    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            title: self.draft.title.clone(),
            body: self.draft.body.clone(),
            voice_active: self.flags.voice_active,
            gesture_active: self.flags.gesture_active,
            metrics: self.compute_metrics(),
            goal: self.goal_progress(),
            dark_mode: self.context.dark_mode,
            opened_at: self.opened_at,
        }
    }
}

/// Render-ready view of an editor session
#[derive(Debug, Clone, Serialize)]
pub struct EditorSnapshot {
    pub title: String,
    pub body: String,
    pub voice_active: bool,
    pub gesture_active: bool,
    pub metrics: DerivedMetrics,
    pub goal: GoalProgress,
    pub dark_mode: bool,
    pub opened_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_empty() {
        let session = EditorSession::default();
        assert_eq!(session.title(), "");
        assert_eq!(session.body(), "");
        assert!(!session.voice_active());
        assert!(!session.gesture_active());
        assert!(!session.dark_mode());

        let metrics = session.compute_metrics();
        assert_eq!(metrics.word_count, 0);
        assert_eq!(metrics.character_count, 0);
        assert_eq!(metrics.reading_time_minutes, 0);
        assert_eq!(session.goal_progress().percent, 0.0);
    }

    #[test]
    fn test_set_body_replaces_fully() {
        let mut session = EditorSession::default();
        session.set_body("first draft of the opening");
        session.set_body("rewrite");
        assert_eq!(session.body(), "rewrite");
        assert_eq!(session.compute_metrics().word_count, 1);
    }

    #[test]
    fn test_set_title_does_not_touch_body() {
        let mut session = EditorSession::default();
        session.set_body("hello world");
        session.set_title("  A title with   spaces ");
        assert_eq!(session.title(), "  A title with   spaces ");
        assert_eq!(session.compute_metrics().word_count, 2);
    }

    #[test]
    fn test_metrics_follow_body() {
        let mut session = EditorSession::default();
        session.set_body("  hello   world  ");
        let metrics = session.compute_metrics();
        assert_eq!(metrics.word_count, 2);
        assert_eq!(metrics.character_count, 17);
        assert_eq!(metrics.reading_time_minutes, 1);

        session.set_body("");
        assert_eq!(session.compute_metrics().word_count, 0);
    }

    #[test]
    fn test_compute_metrics_is_idempotent() {
        let mut session = EditorSession::default();
        session.set_body("the quick brown fox");
        assert_eq!(session.compute_metrics(), session.compute_metrics());
        assert_eq!(session.goal_progress(), session.goal_progress());
    }

    #[test]
    fn test_toggle_voice_is_independent() {
        let mut session = EditorSession::default();
        session.set_title("Title");
        session.set_body("Body text");

        session.toggle_voice();
        assert!(session.voice_active());
        assert!(!session.gesture_active());
        assert_eq!(session.title(), "Title");
        assert_eq!(session.body(), "Body text");

        session.toggle_voice();
        assert!(!session.voice_active());
    }

    #[test]
    fn test_toggle_gesture_is_independent() {
        let mut session = EditorSession::default();
        session.toggle_voice();
        session.toggle_gesture();
        assert!(session.voice_active());
        assert!(session.gesture_active());

        session.toggle_gesture();
        assert!(session.voice_active());
        assert!(!session.gesture_active());
    }

    #[test]
    fn test_goal_progress_uses_context_goals() {
        let goals = WritingGoals::new(10, 200).unwrap();
        let mut session = EditorSession::new(SessionContext::new(false, goals));
        session.set_body("one two three four five");
        assert_eq!(session.goal_progress().percent, 50.0);

        session.set_body(vec!["w"; 30].join(" "));
        assert_eq!(session.goal_progress().percent, 100.0);
    }

    #[test]
    fn test_quick_actions_leave_state_unchanged() {
        let mut session = EditorSession::default();
        session.set_body("keep me");
        let before = session.draft().clone();

        for action in [QuickAction::Save, QuickAction::ReadAloud, QuickAction::AiSuggest] {
            let outcome = session.apply(EditorEvent::QuickAction { action });
            assert_eq!(outcome, Some(ActionOutcome::Unavailable));
        }

        assert_eq!(session.draft(), &before);
        assert_eq!(session.flags(), InputModeFlags::default());
    }

    #[test]
    fn test_apply_events() {
        let mut session = EditorSession::default();
        assert_eq!(
            session.apply(EditorEvent::TitleChanged {
                value: "Notes".to_string()
            }),
            None
        );
        session.apply(EditorEvent::BodyChanged {
            value: "a b c".to_string(),
        });
        session.apply(EditorEvent::ToggleGesture);

        assert_eq!(session.title(), "Notes");
        assert_eq!(session.compute_metrics().word_count, 3);
        assert!(session.gesture_active());
        assert!(!session.voice_active());
    }

    #[test]
    fn test_replace_context_keeps_draft() {
        let mut session = EditorSession::default();
        session.set_body("still here");
        session.toggle_voice();

        session.replace_context(SessionContext::new(true, WritingGoals::default()));
        assert!(session.dark_mode());
        assert_eq!(session.body(), "still here");
        assert!(session.voice_active());
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut session = EditorSession::new(SessionContext::new(true, WritingGoals::default()));
        session.set_title("Essay");
        session.set_body("hello world");
        session.toggle_voice();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.metrics.word_count, 2);
        assert_eq!(snapshot.goal.target_words, 500);

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"title\":\"Essay\""));
        assert!(json.contains("\"voice_active\":true"));
        assert!(json.contains("\"gesture_active\":false"));
        assert!(json.contains("\"dark_mode\":true"));
        assert!(json.contains("\"word_count\":2"));
    }

    #[test]
    fn test_large_body() {
        let mut session = EditorSession::default();
        session.set_body("lorem ipsum ".repeat(50_000));
        let metrics = session.compute_metrics();
        assert_eq!(metrics.word_count, 100_000);
        assert_eq!(metrics.reading_time_minutes, 500);
        assert_eq!(session.goal_progress().percent, 100.0);
    }
}
