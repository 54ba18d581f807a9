//! Pages
//!
//! Top-level page components for each route.

pub mod about;
pub mod auth;
pub mod contact;
pub mod dashboard;
pub mod documents;
pub mod landing;
pub mod profile;
pub mod settings;
pub mod write;

pub use about::About;
pub use auth::{SignIn, SignUp};
pub use contact::Contact;
pub use dashboard::Dashboard;
pub use documents::Documents;
pub use landing::Landing;
pub use profile::Profile;
pub use settings::Settings;
pub use write::Write;
