use std::borrow::Cow;

use super::limits::{LimitKind, Quota};
use super::limit;
use super::matrix::{self, FeatureGrants};
use crate::models::{Feature, Plan};

/// Looks up the matrix row of a plan.
type Rows = fn(Plan) -> &'static FeatureGrants;

pub const ALREADY_AVAILABLE_MESSAGE: &str = "This feature is already available on your plan.";

pub const NOT_OFFERED_MESSAGE: &str = "This feature is not offered on any plan yet.";

/// Prompt shown when `plan` is denied `feature`.
pub fn upgrade_message(plan: Plan, feature: Feature) -> Cow<'static, str> {
    prompt(matrix::grants, plan, feature)
}

fn prompt(rows: Rows, plan: Plan, feature: Feature) -> Cow<'static, str> {
    if rows(plan).allows(feature) {
        return Cow::Borrowed(ALREADY_AVAILABLE_MESSAGE);
    }

    let Some(target) = upgrade_target(rows, plan, feature) else {
        return Cow::Borrowed(NOT_OFFERED_MESSAGE);
    };

    let message = match (feature, plan) {
        (Feature::ViewServiceRequests, _) => format!(
            "Service requests from clients are visible to {} subscribers and above. Upgrade to start receiving leads.",
            target.display_name()
        ),
        (Feature::PromoteServices, current) if current.next() == Some(target) => format!(
            "You're one step away: upgrade from {} to {} to promote your services.",
            current.display_name(),
            target.display_name()
        ),
        (Feature::PromoteServices, _) => format!(
            "Promote your services to the whole community with the {} plan.",
            target.display_name()
        ),
        (Feature::ExclusiveProducts, current) => format!(
            "Exclusive products are reserved for {} subscribers. You are currently on {}.",
            target.display_name(),
            current.display_name()
        ),
        _ => format!(
            "Upgrade to the {} plan to unlock {}.",
            target.display_name(),
            feature.display_name()
        ),
    };

    Cow::Owned(message)
}

/// Prompt describing how `plan`'s quota of `kind` grows on upgrade.
pub fn limit_upgrade_message(plan: Plan, kind: LimitKind) -> Cow<'static, str> {
    let current = limit(kind, plan);
    if current.is_unlimited() {
        return Cow::Borrowed(ALREADY_AVAILABLE_MESSAGE);
    }

    let better = Plan::ALL
        .into_iter()
        .filter(|candidate| *candidate > plan)
        .map(|candidate| (candidate, limit(kind, candidate)))
        .find(|(_, quota)| exceeds(*quota, current));

    let message = match better {
        Some((target, Quota::Unlimited)) => format!(
            "You have {} {} on {}. Upgrade to {} for unlimited {}.",
            current,
            kind.unit(),
            plan.display_name(),
            target.display_name(),
            kind.unit()
        ),
        Some((target, quota)) => format!(
            "You have {} {} on {}. Upgrade to {} for {}.",
            current,
            kind.unit(),
            plan.display_name(),
            target.display_name(),
            quota
        ),
        None => format!(
            "You already have the largest allowance of {} available.",
            kind.unit()
        ),
    };

    Cow::Owned(message)
}

/// Lowest plan above `plan` granting `feature`, else the lowest granting
/// plan overall. `None` when no row grants it.
fn upgrade_target(rows: Rows, plan: Plan, feature: Feature) -> Option<Plan> {
    let granting = |candidate: &Plan| rows(*candidate).allows(feature);
    Plan::ALL
        .into_iter()
        .filter(|candidate| *candidate > plan)
        .find(granting)
        .or_else(|| Plan::ALL.into_iter().find(granting))
}

fn exceeds(candidate: Quota, current: Quota) -> bool {
    match (candidate, current) {
        (Quota::Unlimited, Quota::Limited(_)) => true,
        (Quota::Limited(a), Quota::Limited(b)) => a > b,
        (_, Quota::Unlimited) => false,
    }
}
