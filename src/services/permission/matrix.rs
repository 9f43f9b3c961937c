use crate::models::{Feature, Plan};

/// One row of the entitlement matrix. Every feature is a field, so a plan
/// row that forgets a feature does not compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FeatureGrants {
    whatsapp_generator: bool,
    free_courses: bool,
    community_listing: bool,
    product_catalog: bool,
    content_downloads: bool,
    trend_rush: bool,
    premium_courses: bool,
    view_service_requests: bool,
    promote_community: bool,
    promote_services: bool,
    customization_options: bool,
    ai_copywriter: bool,
    exclusive_products: bool,
    mentorship: bool,
    priority_support: bool,
}

impl FeatureGrants {
    pub(crate) const fn allows(&self, feature: Feature) -> bool {
        match feature {
            Feature::WhatsappGenerator => self.whatsapp_generator,
            Feature::FreeCourses => self.free_courses,
            Feature::CommunityListing => self.community_listing,
            Feature::ProductCatalog => self.product_catalog,
            Feature::ContentDownloads => self.content_downloads,
            Feature::TrendRush => self.trend_rush,
            Feature::PremiumCourses => self.premium_courses,
            Feature::ViewServiceRequests => self.view_service_requests,
            Feature::PromoteCommunity => self.promote_community,
            Feature::PromoteServices => self.promote_services,
            Feature::CustomizationOptions => self.customization_options,
            Feature::AiCopywriter => self.ai_copywriter,
            Feature::ExclusiveProducts => self.exclusive_products,
            Feature::Mentorship => self.mentorship,
            Feature::PrioritySupport => self.priority_support,
        }
    }
}

const FREE: FeatureGrants = FeatureGrants {
    whatsapp_generator: true,
    free_courses: true,
    community_listing: true,
    product_catalog: true,
    content_downloads: true,
    trend_rush: true,
    premium_courses: false,
    view_service_requests: false,
    promote_community: false,
    promote_services: false,
    customization_options: false,
    ai_copywriter: false,
    exclusive_products: false,
    mentorship: false,
    priority_support: false,
};

/// A row granting nothing.
#[cfg(test)]
pub(crate) const NONE: FeatureGrants = FeatureGrants {
    whatsapp_generator: false,
    free_courses: false,
    community_listing: false,
    product_catalog: false,
    content_downloads: false,
    trend_rush: false,
    ..FREE
};

const MEMBER: FeatureGrants = FeatureGrants {
    premium_courses: true,
    view_service_requests: true,
    // Listing a community is the first paid privilege, not an elite one.
    promote_community: true,
    ..FREE
};

const PRO: FeatureGrants = FeatureGrants {
    promote_services: true,
    customization_options: true,
    ai_copywriter: true,
    ..MEMBER
};

const ELITE: FeatureGrants = FeatureGrants {
    exclusive_products: true,
    mentorship: true,
    priority_support: true,
    ..PRO
};

/// The matrix row for `plan`.
pub(crate) const fn grants(plan: Plan) -> &'static FeatureGrants {
    match plan {
        Plan::Free => &FREE,
        Plan::Member => &MEMBER,
        Plan::Pro => &PRO,
        Plan::Elite => &ELITE,
    }
}
