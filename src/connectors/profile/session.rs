use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{CurrentUser, Plan, UserProfile};

use super::CurrentUserProvider;

/// In-memory session holding the profile fetched by the surrounding app.
///
/// Clones share the same slot, so the app can keep one handle for writing
/// (sign in, plan change, sign out) while permission adapters read from
/// another.
#[derive(Debug, Clone, Default)]
pub struct SessionProfile {
    profile: Arc<RwLock<Option<UserProfile>>>,
}

impl SessionProfile {
    pub fn new() -> Self {
        Self::default()
    }

    #[tracing::instrument(name = "Session sign in", skip(self, profile), fields(user_id = %profile.id))]
    pub async fn sign_in(&self, profile: UserProfile) {
        *self.profile.write().await = Some(profile);
    }

    /// Record a plan change for the signed-in profile. Returns `false` when
    /// nobody is signed in.
    #[tracing::instrument(name = "Session plan change", skip(self))]
    pub async fn update_plan(&self, plan: Plan) -> bool {
        let mut guard = self.profile.write().await;
        match guard.as_mut() {
            Some(profile) => {
                profile.plan = Some(plan.as_str().to_string());
                true
            }
            None => {
                tracing::debug!("No profile loaded, ignoring plan change");
                false
            }
        }
    }

    pub async fn sign_out(&self) {
        *self.profile.write().await = None;
    }

    pub async fn profile(&self) -> Option<UserProfile> {
        self.profile.read().await.clone()
    }
}

#[async_trait::async_trait]
impl CurrentUserProvider for SessionProfile {
    async fn current_user(&self) -> Option<CurrentUser> {
        let guard = self.profile.read().await;
        guard
            .as_ref()
            .map(|profile| CurrentUser::from_profile(Some(profile)))
    }
}
