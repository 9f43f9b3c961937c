//! External collaborators
//!
//! The resolver never fetches anything itself. Whoever owns the session
//! (auth, profile store) is reached through a trait here so adapters can be
//! tested without it.
//!
//! ## Usage
//!
//! ```ignore
//! let session = SessionProfile::new();
//! let permissions = Permissions::new(session.clone());
//! session.sign_in(profile).await;
//! permissions.has_access(Feature::TrendRush).await;
//! ```

pub mod profile;

pub use profile::{CurrentUserProvider, SessionProfile};
