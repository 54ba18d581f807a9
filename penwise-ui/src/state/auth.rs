//! Auth & Preferences State
//!
//! Signed-in user, the session-wide dark mode flag and toast messages,
//! provided to every page through context.
//!
//! There is no account service: signing in or up only validates the form
//! and records the user locally.

use leptos::*;

const DARK_MODE_KEY: &str = "penwise_dark_mode";

/// Shared auth and preference state
#[derive(Clone, Copy)]
pub struct AuthState {
    /// Currently signed-in user
    pub user: RwSignal<Option<User>>,
    /// Theme flag read by every page
    pub dark_mode: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub name: String,
    pub email: String,
}

/// Provide auth state to the component tree
pub fn provide_auth_state() {
    let state = AuthState {
        user: create_rw_signal(None),
        dark_mode: create_rw_signal(load_dark_mode()),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl AuthState {
    /// Sign in with email and password
    pub fn sign_in(&self, email: &str, password: &str) -> Result<(), String> {
        validate_sign_in(email, password)?;

        let email = email.trim().to_string();
        let name = display_name_from_email(&email);
        self.show_success(&format!("Welcome back, {}!", name));
        self.user.set(Some(User { name, email }));
        Ok(())
    }

    /// Create an account and sign in
    pub fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
        confirm: &str,
    ) -> Result<(), String> {
        validate_sign_up(name, email, password, confirm)?;

        let user = User {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
        };
        self.show_success(&format!("Welcome to Penwise, {}!", user.name));
        self.user.set(Some(user));
        Ok(())
    }

    pub fn sign_out(&self) {
        self.user.set(None);
        self.show_success("Signed out");
    }

    /// Flip the theme and remember it for the next visit
    pub fn toggle_dark_mode(&self) {
        self.dark_mode.update(|dark| *dark = !*dark);
        save_dark_mode(self.dark_mode.get_untracked());
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

fn load_dark_mode() -> bool {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(DARK_MODE_KEY).ok().flatten())
        .map(|value| value == "true")
        .unwrap_or(false)
}

fn save_dark_mode(dark: bool) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(DARK_MODE_KEY, if dark { "true" } else { "false" });
        }
    }
}

// ============ Form Validation ============

pub const MIN_PASSWORD_CHARS: usize = 8;

pub fn validate_email(email: &str) -> Result<(), String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required".to_string());
    }

    let (local, domain) = email
        .split_once('@')
        .ok_or_else(|| "Enter a valid email address".to_string())?;
    let domain_ok = domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains('@');

    if local.is_empty() || !domain_ok || email.contains(char::is_whitespace) {
        return Err("Enter a valid email address".to_string());
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_CHARS
        ));
    }
    Ok(())
}

pub fn validate_sign_in(email: &str, password: &str) -> Result<(), String> {
    validate_email(email)?;
    if password.is_empty() {
        return Err("Password is required".to_string());
    }
    Ok(())
}

pub fn validate_sign_up(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name is required".to_string());
    }
    validate_email(email)?;
    validate_password(password)?;
    if password != confirm {
        return Err("Passwords do not match".to_string());
    }
    Ok(())
}

/// Name shown for a user who signed in with only an email
pub fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    let mut chars = local.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "Writer".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ada@example.com").is_ok());
        assert!(validate_email("  ada@example.com ").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("ada.example.com").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("ada@example").is_err());
        assert!(validate_email("ada@.com").is_err());
        assert!(validate_email("ada@ex@ample.com").is_err());
        assert!(validate_email("a da@example.com").is_err());
    }

    #[test]
    fn test_validate_sign_in() {
        assert!(validate_sign_in("ada@example.com", "secret").is_ok());
        assert_eq!(
            validate_sign_in("ada@example.com", ""),
            Err("Password is required".to_string())
        );
    }

    #[test]
    fn test_validate_sign_up() {
        assert!(validate_sign_up("Ada", "ada@example.com", "longenough", "longenough").is_ok());
        assert_eq!(
            validate_sign_up(" ", "ada@example.com", "longenough", "longenough"),
            Err("Name is required".to_string())
        );
        assert!(validate_sign_up("Ada", "ada@example.com", "short", "short").is_err());
        assert_eq!(
            validate_sign_up("Ada", "ada@example.com", "longenough", "longenougj"),
            Err("Passwords do not match".to_string())
        );
    }

    #[test]
    fn test_display_name_from_email() {
        assert_eq!(display_name_from_email("ada@example.com"), "Ada");
        assert_eq!(display_name_from_email("élodie@example.com"), "Élodie");
        assert_eq!(display_name_from_email("@example.com"), "Writer");
    }
}
