use super::*;
use crate::models::Role;

/// Every (plan, feature) cell answers, and answers the same way twice
#[test]
fn test_matrix_is_total_and_deterministic() {
    for plan in Plan::ALL {
        for feature in Feature::ALL {
            assert_eq!(has_access(plan, feature), has_access(plan, feature));
        }
    }
}

/// Features open to the free tier stay open on every paid tier
#[test]
fn test_free_features_are_kept_on_upgrade() {
    for feature in Feature::ALL {
        if has_access(Plan::Free, feature) {
            for plan in [Plan::Member, Plan::Pro, Plan::Elite] {
                assert!(
                    has_access(plan, feature),
                    "{} lost on {}",
                    feature,
                    plan
                );
            }
        }
    }
}

/// Community promotion is the first paid grant: off for free, on from member
#[test]
fn test_promote_community_transition_from_free_to_member() {
    assert!(!has_access(Plan::Free, Feature::PromoteCommunity));
    assert!(has_access(Plan::Member, Feature::PromoteCommunity));
    assert!(has_access(Plan::Pro, Feature::PromoteCommunity));
    assert!(has_access(Plan::Elite, Feature::PromoteCommunity));
    assert_eq!(minimum_plan(Feature::PromoteCommunity), Some(Plan::Member));
}

#[test]
fn test_view_service_requests_gate() {
    assert!(!has_access(Plan::Free, Feature::ViewServiceRequests));
    assert!(has_access(Plan::Member, Feature::ViewServiceRequests));
}

#[test]
fn test_admin_bypasses_matrix() {
    let admin = CurrentUser::new(Plan::Free, Role::Admin);
    for feature in Feature::ALL {
        assert!(has_access_as(&admin, feature));
        assert_eq!(upgrade_message_as(&admin, feature), ALREADY_AVAILABLE_MESSAGE);
    }

    let user = CurrentUser::new(Plan::Free, Role::User);
    assert!(!has_access_as(&user, Feature::Mentorship));
}

#[test]
fn test_free_available_features() {
    let features = available_features(Plan::Free);
    assert!(features.contains(&Feature::WhatsappGenerator));
    assert!(features.contains(&Feature::FreeCourses));
    assert!(!features.contains(&Feature::PromoteCommunity));
    assert!(!features.contains(&Feature::CustomizationOptions));
}

#[test]
fn test_available_features_keep_listing_order() {
    let elite: Vec<Feature> = available_features(Plan::Elite).into_iter().collect();
    assert_eq!(elite, Feature::ALL.to_vec());

    let pro: Vec<Feature> = available_features(Plan::Pro).into_iter().collect();
    let expected: Vec<Feature> = Feature::ALL
        .into_iter()
        .filter(|f| has_access(Plan::Pro, *f))
        .collect();
    assert_eq!(pro, expected);
}

#[test]
fn test_download_limits() {
    assert_eq!(download_limit(Plan::Free), Quota::Limited(5));
    assert_eq!(download_limit(Plan::Member), Quota::Limited(20));
    assert_eq!(download_limit(Plan::Pro), Quota::Limited(50));
    assert_eq!(download_limit(Plan::Elite), Quota::UNLIMITED);
}

#[test]
fn test_trend_rush_limits() {
    assert_eq!(trend_rush_limit(Plan::Free), Quota::Limited(5));
    assert_eq!(trend_rush_limit(Plan::Member), Quota::Limited(10));
    assert_eq!(trend_rush_limit(Plan::Pro), Quota::Limited(15));
    assert_eq!(trend_rush_limit(Plan::Elite), Quota::UNLIMITED);
}

#[test]
fn test_unlimited_predicates_follow_tables() {
    for plan in Plan::ALL {
        assert_eq!(
            has_unlimited_downloads(plan),
            download_limit(plan) == Quota::UNLIMITED
        );
        assert_eq!(
            has_unlimited_trend_rush(plan),
            trend_rush_limit(plan) == Quota::UNLIMITED
        );
    }
    assert!(has_unlimited_downloads(Plan::Elite));
    assert!(has_unlimited_trend_rush(Plan::Elite));
    assert!(!has_unlimited_downloads(Plan::Pro));
}

#[test]
fn test_limit_reached_and_remaining() {
    assert!(!limit_reached(Plan::Free, LimitKind::Downloads, 4));
    assert!(limit_reached(Plan::Free, LimitKind::Downloads, 5));
    assert!(!limit_reached(Plan::Elite, LimitKind::TrendRush, 10_000));
    assert_eq!(
        remaining(Plan::Member, LimitKind::TrendRush, 3),
        Quota::Limited(7)
    );
}

#[test]
fn test_minimum_plan_is_derived_from_matrix() {
    for feature in Feature::ALL {
        let min = minimum_plan(feature).expect("every feature is offered somewhere");
        assert!(has_access(min, feature));
        for lower in Plan::ALL.into_iter().filter(|p| *p < min) {
            assert!(!has_access(lower, feature));
        }
    }
    assert_eq!(minimum_plan(Feature::ViewServiceRequests), Some(Plan::Member));
    assert_eq!(minimum_plan(Feature::PromoteServices), Some(Plan::Pro));
    assert_eq!(minimum_plan(Feature::Mentorship), Some(Plan::Elite));
}

#[test]
fn test_meets_minimum_plan_agrees_with_matrix() {
    // The shipped matrix is monotonic, so the ordinal helper and the
    // matrix lookup must agree everywhere.
    for plan in Plan::ALL {
        for feature in Feature::ALL {
            assert_eq!(meets_minimum_plan(plan, feature), has_access(plan, feature));
        }
    }
}

#[test]
fn test_upgrade_message_when_access_granted() {
    for plan in Plan::ALL {
        for feature in available_features(plan) {
            assert_eq!(upgrade_message(plan, feature), ALREADY_AVAILABLE_MESSAGE);
        }
    }
}

#[test]
fn test_upgrade_message_generic_fallback() {
    let message = upgrade_message(Plan::Free, Feature::CustomizationOptions);
    assert_eq!(
        message,
        "Upgrade to the Pro plan to unlock Customization Options."
    );
}

#[test]
fn test_upgrade_message_overrides_are_plan_sensitive() {
    let from_member = upgrade_message(Plan::Member, Feature::PromoteServices);
    assert!(from_member.contains("one step away"));
    assert!(from_member.contains("from Member to Pro"));

    let from_free = upgrade_message(Plan::Free, Feature::PromoteServices);
    assert!(!from_free.contains("one step away"));
    assert!(from_free.contains("Pro plan"));

    let exclusive = upgrade_message(Plan::Pro, Feature::ExclusiveProducts);
    assert!(exclusive.contains("Elite"));
    assert!(exclusive.contains("currently on Pro"));

    let requests = upgrade_message(Plan::Free, Feature::ViewServiceRequests);
    assert!(requests.contains("Member subscribers"));
}

/// Quota prompts must quote the numbers in the limit tables
#[test]
fn test_limit_upgrade_messages_match_tables() {
    for kind in LimitKind::ALL {
        for plan in [Plan::Free, Plan::Member, Plan::Pro] {
            let message = limit_upgrade_message(plan, kind);
            let current = limit(kind, plan).to_string();
            assert!(
                message.contains(&format!("You have {} ", current)),
                "{message}"
            );
            let next = plan.next().unwrap();
            let next_quota = limit(kind, next);
            if next_quota.is_unlimited() {
                assert!(message.contains("for unlimited"), "{message}");
            } else {
                assert!(message.ends_with(&format!("for {}.", next_quota)), "{message}");
            }
        }
        assert_eq!(
            limit_upgrade_message(Plan::Elite, kind),
            ALREADY_AVAILABLE_MESSAGE
        );
    }

    assert_eq!(
        limit_upgrade_message(Plan::Member, LimitKind::TrendRush),
        "You have 10 daily Trend Rush audios on Member. Upgrade to Pro for 15."
    );
}

#[test]
fn test_policy_snapshot_serializes_every_plan() {
    let snapshot = policy_snapshot();
    assert_eq!(snapshot.plans.len(), Plan::ALL.len());
    assert_eq!(snapshot.minimum_plans.len(), Feature::ALL.len());

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["plans"][0]["plan"], "gratuito");
    assert_eq!(json["plans"][0]["downloadLimit"], 5);
    assert_eq!(json["plans"][3]["trendRushLimit"], "unlimited");
    assert_eq!(json["minimumPlans"]["viewServiceRequests"], "member");
}
