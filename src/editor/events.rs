//! Editor Events
//!
//! Input events a host feeds into an editor session: full-value text
//! changes, toggle clicks and quick-action clicks.

use serde::{Deserialize, Serialize};

use super::error::EditorResult;

/// Events delivered by the hosting UI shell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EditorEvent {
    /// Title input changed
    TitleChanged {
        /// Full new title
        value: String,
    },
    /// Body textarea changed
    BodyChanged {
        /// Full new body
        value: String,
    },
    /// "Start Voice" clicked
    ToggleVoice,
    /// "Start Gestures" clicked
    ToggleGesture,
    /// One of the action buttons clicked
    QuickAction { action: QuickAction },
}

impl EditorEvent {
    /// Decode an event from its JSON wire form.
    ///
    /// Anything that is not a well-formed event (unknown type, missing or
    /// non-string `value`) is rejected here.
    pub fn from_json(json: &str) -> EditorResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> EditorResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Buttons with no defined behavior yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickAction {
    Save,
    ReadAloud,
    AiSuggest,
}

impl QuickAction {
    pub fn label(&self) -> &'static str {
        match self {
            QuickAction::Save => "Save Document",
            QuickAction::ReadAloud => "Read Aloud",
            QuickAction::AiSuggest => "AI Suggest",
        }
    }
}

/// Result of triggering a quick action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionOutcome {
    /// No backing service is wired up for this action
    Unavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_text_events() {
        let event = EditorEvent::from_json(r#"{"type": "title_changed", "value": "Draft"}"#).unwrap();
        assert_eq!(
            event,
            EditorEvent::TitleChanged {
                value: "Draft".to_string()
            }
        );

        let event = EditorEvent::from_json(r#"{"type": "body_changed", "value": ""}"#).unwrap();
        assert_eq!(
            event,
            EditorEvent::BodyChanged {
                value: String::new()
            }
        );
    }

    #[test]
    fn test_decode_toggles_and_actions() {
        let event = EditorEvent::from_json(r#"{"type": "toggle_voice"}"#).unwrap();
        assert_eq!(event, EditorEvent::ToggleVoice);

        let event = EditorEvent::from_json(r#"{"type": "toggle_gesture"}"#).unwrap();
        assert_eq!(event, EditorEvent::ToggleGesture);

        let event =
            EditorEvent::from_json(r#"{"type": "quick_action", "action": "read_aloud"}"#).unwrap();
        assert_eq!(
            event,
            EditorEvent::QuickAction {
                action: QuickAction::ReadAloud
            }
        );
    }

    #[test]
    fn test_reject_non_text_values() {
        assert!(EditorEvent::from_json(r#"{"type": "body_changed", "value": null}"#).is_err());
        assert!(EditorEvent::from_json(r#"{"type": "title_changed", "value": 42}"#).is_err());
        assert!(EditorEvent::from_json(r#"{"type": "body_changed"}"#).is_err());
    }

    #[test]
    fn test_reject_unknown_events() {
        assert!(EditorEvent::from_json(r#"{"type": "start_dictation"}"#).is_err());
        assert!(EditorEvent::from_json(r#"{"type": "quick_action", "action": "publish"}"#).is_err());
        assert!(EditorEvent::from_json("not json").is_err());
    }

    #[test]
    fn test_encode_event() {
        let json = EditorEvent::QuickAction {
            action: QuickAction::AiSuggest,
        }
        .to_json()
        .unwrap();
        assert!(json.contains("\"type\":\"quick_action\""));
        assert!(json.contains("\"action\":\"ai_suggest\""));
    }
}
