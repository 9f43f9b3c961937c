use std::borrow::Cow;

use serde::Serialize;

use crate::connectors::CurrentUserProvider;
use crate::models::{CurrentUser, Feature};
use crate::services::permission;

use super::Permissions;

/// What a gated view should do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "camelCase")]
pub enum GateDecision {
    /// Show the gated content.
    Render,
    /// Show the upgrade prompt instead.
    Fallback { message: Cow<'static, str> },
}

impl GateDecision {
    pub fn is_render(&self) -> bool {
        matches!(self, GateDecision::Render)
    }
}

/// Guards one feature. Denial is the normal upgrade path, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureGate {
    pub feature: Feature,
}

impl FeatureGate {
    pub fn new(feature: Feature) -> Self {
        Self { feature }
    }

    pub fn evaluate(&self, user: &CurrentUser) -> GateDecision {
        if permission::has_access_as(user, self.feature) {
            return GateDecision::Render;
        }

        tracing::debug!(
            feature = %self.feature,
            plan = %user.plan,
            "Feature gated, rendering upgrade prompt"
        );
        GateDecision::Fallback {
            message: permission::upgrade_message(user.plan, self.feature),
        }
    }

    /// Evaluate against whoever the provider currently reports.
    pub async fn check<P: CurrentUserProvider>(&self, permissions: &Permissions<P>) -> GateDecision {
        self.evaluate(&permissions.current_user().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connectors::profile::mock::MockCurrentUserProvider;
    use crate::models::{Plan, Role};

    #[test]
    fn test_renders_when_plan_grants_feature() {
        let gate = FeatureGate::new(Feature::ViewServiceRequests);
        let member = CurrentUser::new(Plan::Member, Role::User);
        assert!(gate.evaluate(&member).is_render());
    }

    #[test]
    fn test_falls_back_with_upgrade_message() {
        let gate = FeatureGate::new(Feature::ViewServiceRequests);
        let decision = gate.evaluate(&CurrentUser::anonymous());

        assert_eq!(
            decision,
            GateDecision::Fallback {
                message: permission::upgrade_message(Plan::Free, Feature::ViewServiceRequests),
            }
        );
    }

    #[test]
    fn test_admin_always_renders() {
        let admin = CurrentUser::new(Plan::Free, Role::Admin);
        for feature in Feature::ALL {
            assert!(FeatureGate::new(feature).evaluate(&admin).is_render());
        }
    }

    #[test]
    fn test_decision_serializes_with_tag() {
        let decision = FeatureGate::new(Feature::Mentorship).evaluate(&CurrentUser::anonymous());
        let json = serde_json::to_value(&decision).unwrap();
        assert_eq!(json["decision"], "fallback");
        assert!(json["message"].as_str().unwrap().contains("Elite"));
    }

    #[tokio::test]
    async fn test_check_reads_provider() {
        let permissions = Permissions::new(MockCurrentUserProvider::signed_out());
        let decision = FeatureGate::new(Feature::PromoteCommunity)
            .check(&permissions)
            .await;
        assert!(!decision.is_render());
    }
}
