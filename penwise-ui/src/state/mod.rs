//! State Management
//!
//! Auth and preference state shared across pages.

pub mod auth;

pub use auth::{provide_auth_state, AuthState};
