use crate::models::CurrentUser;

use super::CurrentUserProvider;

/// Mock provider for testing - always returns the same user
pub struct MockCurrentUserProvider(pub Option<CurrentUser>);

impl MockCurrentUserProvider {
    pub fn signed_in(user: CurrentUser) -> Self {
        Self(Some(user))
    }

    pub fn signed_out() -> Self {
        Self(None)
    }
}

#[async_trait::async_trait]
impl CurrentUserProvider for MockCurrentUserProvider {
    async fn current_user(&self) -> Option<CurrentUser> {
        self.0
    }
}
