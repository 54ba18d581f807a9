//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod controls;
pub mod nav;
pub mod toast;

pub use controls::{ActionButton, ControlButton, StatItem};
pub use nav::Layout;
pub use toast::Toast;
