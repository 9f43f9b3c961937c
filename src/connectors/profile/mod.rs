mod connector;
pub mod mock;
mod session;

pub use connector::CurrentUserProvider;
pub use session::SessionProfile;
