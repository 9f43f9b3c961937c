use crate::models::CurrentUser;

/// Trait for the session/profile collaborator that knows who is signed in.
/// Allows mocking in tests and swapping implementations.
#[async_trait::async_trait]
pub trait CurrentUserProvider: Send + Sync {
    /// Current user's plan and role.
    /// Returns `None` while no profile is loaded (signed out or still loading).
    async fn current_user(&self) -> Option<CurrentUser>;
}
