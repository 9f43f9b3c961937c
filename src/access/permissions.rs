use std::borrow::Cow;

use indexmap::IndexSet;

use crate::connectors::CurrentUserProvider;
use crate::models::{CurrentUser, Feature, Plan};
use crate::services::permission::{self, LimitKind, Quota};

/// Binds the resolver to a current-user provider.
///
/// Each query reads the provider again, so a plan change shows up on the
/// very next call. No profile means the anonymous free user.
pub struct Permissions<P> {
    provider: P,
}

impl<P: CurrentUserProvider> Permissions<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub async fn current_user(&self) -> CurrentUser {
        self.provider
            .current_user()
            .await
            .unwrap_or_else(CurrentUser::anonymous)
    }

    pub async fn current_plan(&self) -> Plan {
        self.current_user().await.plan
    }

    pub async fn is_admin(&self) -> bool {
        self.current_user().await.is_admin()
    }

    #[tracing::instrument(name = "Check feature access", skip(self))]
    pub async fn has_access(&self, feature: Feature) -> bool {
        let user = self.current_user().await;
        let allowed = permission::has_access_as(&user, feature);
        tracing::debug!(plan = %user.plan, admin = user.is_admin(), allowed, "Resolved access");
        allowed
    }

    /// Features listed for the current user. Admins see everything.
    pub async fn available_features(&self) -> IndexSet<Feature> {
        let user = self.current_user().await;
        if user.is_admin() {
            return Feature::ALL.into_iter().collect();
        }
        permission::available_features(user.plan)
    }

    pub async fn download_limit(&self) -> Quota {
        permission::download_limit(self.current_plan().await)
    }

    pub async fn trend_rush_limit(&self) -> Quota {
        permission::trend_rush_limit(self.current_plan().await)
    }

    pub async fn has_unlimited_downloads(&self) -> bool {
        permission::has_unlimited_downloads(self.current_plan().await)
    }

    pub async fn has_unlimited_trend_rush(&self) -> bool {
        permission::has_unlimited_trend_rush(self.current_plan().await)
    }

    pub async fn upgrade_message(&self, feature: Feature) -> Cow<'static, str> {
        permission::upgrade_message_as(&self.current_user().await, feature)
    }

    /// Quota prompt for the current plan, e.g. for the Trend Rush badge.
    pub async fn limit_upgrade_message(&self, kind: LimitKind) -> Cow<'static, str> {
        permission::limit_upgrade_message(self.current_plan().await, kind)
    }

    pub async fn limit_reached(&self, kind: LimitKind, used: u32) -> bool {
        permission::limit_reached(self.current_plan().await, kind, used)
    }

    pub async fn remaining(&self, kind: LimitKind, used: u32) -> Quota {
        permission::remaining(self.current_plan().await, kind, used)
    }
}
