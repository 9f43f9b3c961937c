mod feature;
mod plan;
mod user;

pub use feature::Feature;
pub use plan::Plan;
pub use user::{CurrentUser, Role, UserProfile};
