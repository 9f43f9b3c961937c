//! Plan-based entitlement resolver.
//!
//! A static matrix decides which [`Feature`]s each [`Plan`] unlocks, and two
//! limit tables hold the numeric quotas. Every function here is a pure
//! lookup over those tables: no I/O, no state, no caching of the caller's
//! plan. The admin override lives in the `*_as` variants, layered on top of
//! the plan lookup rather than being a tier of its own.
//!
//! The matrix is the only source of truth for "who gets what". The minimum
//! plan of a feature and the upgrade prompts are both derived from it.

mod limits;
mod matrix;
mod messages;

#[cfg(test)]
mod tests;

use std::borrow::Cow;

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::models::{CurrentUser, Feature, Plan};

pub use limits::{LimitKind, LimitTable, Quota, DOWNLOAD_LIMITS, TREND_RUSH_LIMITS};
pub use messages::{
    limit_upgrade_message, upgrade_message, ALREADY_AVAILABLE_MESSAGE, NOT_OFFERED_MESSAGE,
};

pub fn has_access(plan: Plan, feature: Feature) -> bool {
    matrix::grants(plan).allows(feature)
}

/// Access check for a resolved user. Admins bypass the matrix.
pub fn has_access_as(user: &CurrentUser, feature: Feature) -> bool {
    user.is_admin() || has_access(user.plan, feature)
}

/// Features unlocked by `plan`, in [`Feature::ALL`] order.
pub fn available_features(plan: Plan) -> IndexSet<Feature> {
    Feature::ALL
        .into_iter()
        .filter(|feature| has_access(plan, *feature))
        .collect()
}

pub fn limit(kind: LimitKind, plan: Plan) -> Quota {
    kind.table().get(plan)
}

pub fn download_limit(plan: Plan) -> Quota {
    DOWNLOAD_LIMITS.get(plan)
}

pub fn trend_rush_limit(plan: Plan) -> Quota {
    TREND_RUSH_LIMITS.get(plan)
}

pub fn has_unlimited_downloads(plan: Plan) -> bool {
    download_limit(plan).is_unlimited()
}

pub fn has_unlimited_trend_rush(plan: Plan) -> bool {
    trend_rush_limit(plan).is_unlimited()
}

/// Whether `used` uses have exhausted `plan`'s quota of `kind`.
pub fn limit_reached(plan: Plan, kind: LimitKind, used: u32) -> bool {
    !limit(kind, plan).allows_usage(used)
}

pub fn remaining(plan: Plan, kind: LimitKind, used: u32) -> Quota {
    limit(kind, plan).remaining(used)
}

/// Lowest plan whose matrix row grants `feature`.
pub fn minimum_plan(feature: Feature) -> Option<Plan> {
    Plan::ALL
        .into_iter()
        .find(|plan| has_access(*plan, feature))
}

/// Ordinal check: does `plan` sit at or above the feature's minimum plan?
///
/// For a feature whose grants are not monotonic this can disagree with
/// [`has_access`], which is authoritative.
pub fn meets_minimum_plan(plan: Plan, feature: Feature) -> bool {
    minimum_plan(feature).is_some_and(|required| plan.meets(required))
}

/// Upgrade prompt for a resolved user. Admins always see the
/// already-available message.
pub fn upgrade_message_as(user: &CurrentUser, feature: Feature) -> Cow<'static, str> {
    if user.is_admin() {
        return Cow::Borrowed(ALREADY_AVAILABLE_MESSAGE);
    }
    upgrade_message(user.plan, feature)
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanEntitlements {
    pub plan: Plan,
    pub display_name: &'static str,
    pub features: IndexSet<Feature>,
    pub download_limit: Quota,
    pub trend_rush_limit: Quota,
}

/// Serializable view of the whole policy.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicySnapshot {
    pub plans: Vec<PlanEntitlements>,
    pub minimum_plans: IndexMap<Feature, Option<Plan>>,
}

pub fn policy_snapshot() -> PolicySnapshot {
    let plans = Plan::ALL
        .into_iter()
        .map(|plan| PlanEntitlements {
            plan,
            display_name: plan.display_name(),
            features: available_features(plan),
            download_limit: download_limit(plan),
            trend_rush_limit: trend_rush_limit(plan),
        })
        .collect();

    let minimum_plans = Feature::ALL
        .into_iter()
        .map(|feature| (feature, minimum_plan(feature)))
        .collect();

    PolicySnapshot {
        plans,
        minimum_plans,
    }
}
