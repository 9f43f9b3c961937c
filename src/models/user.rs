use serde::{Deserialize, Serialize};

use super::Plan;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    /// Anything other than `admin` is treated as a regular user.
    pub fn parse_lenient(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("admin") {
            Role::Admin
        } else {
            Role::User
        }
    }
}

/// Profile row as stored by the hosted backend. Read, never written, here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub plan: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// The caller's plan and role, resolved from whatever profile is loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub plan: Plan,
    pub role: Role,
}

impl CurrentUser {
    pub fn new(plan: Plan, role: Role) -> Self {
        Self { plan, role }
    }

    /// No profile yet: lowest tier, no privileges.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Resolve a profile into a plan/role pair.
    ///
    /// Missing profiles and missing plans fall back to [`Plan::Free`].
    /// Unrecognised plan values also fall back to `Free` so that a bad row
    /// never grants more than the lowest tier.
    pub fn from_profile(profile: Option<&UserProfile>) -> Self {
        let Some(profile) = profile else {
            return Self::anonymous();
        };

        let plan = match profile.plan.as_deref() {
            None => Plan::Free,
            Some(raw) => raw.parse::<Plan>().unwrap_or_else(|err| {
                tracing::warn!(user_id = %profile.id, error = %err, "Falling back to free plan");
                Plan::Free
            }),
        };
        let role = profile
            .role
            .as_deref()
            .map(Role::parse_lenient)
            .unwrap_or_default();

        Self { plan, role }
    }
}
