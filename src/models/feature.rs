use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::PolicyError;

/// A gatable capability of the dashboard: a tool, a content section or a
/// listing privilege.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Feature {
    WhatsappGenerator,
    FreeCourses,
    CommunityListing,
    ProductCatalog,
    ContentDownloads,
    TrendRush,
    PremiumCourses,
    ViewServiceRequests,
    PromoteCommunity,
    PromoteServices,
    CustomizationOptions,
    AiCopywriter,
    ExclusiveProducts,
    Mentorship,
    PrioritySupport,
}

impl Feature {
    /// Listing order used wherever features are rendered.
    pub const ALL: [Feature; 15] = [
        Feature::WhatsappGenerator,
        Feature::FreeCourses,
        Feature::CommunityListing,
        Feature::ProductCatalog,
        Feature::ContentDownloads,
        Feature::TrendRush,
        Feature::PremiumCourses,
        Feature::ViewServiceRequests,
        Feature::PromoteCommunity,
        Feature::PromoteServices,
        Feature::CustomizationOptions,
        Feature::AiCopywriter,
        Feature::ExclusiveProducts,
        Feature::Mentorship,
        Feature::PrioritySupport,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::WhatsappGenerator => "whatsappGenerator",
            Feature::FreeCourses => "freeCourses",
            Feature::CommunityListing => "communityListing",
            Feature::ProductCatalog => "productCatalog",
            Feature::ContentDownloads => "contentDownloads",
            Feature::TrendRush => "trendRush",
            Feature::PremiumCourses => "premiumCourses",
            Feature::ViewServiceRequests => "viewServiceRequests",
            Feature::PromoteCommunity => "promoteCommunity",
            Feature::PromoteServices => "promoteServices",
            Feature::CustomizationOptions => "customizationOptions",
            Feature::AiCopywriter => "aiCopywriter",
            Feature::ExclusiveProducts => "exclusiveProducts",
            Feature::Mentorship => "mentorship",
            Feature::PrioritySupport => "prioritySupport",
        }
    }

    /// Human-readable name used in upgrade prompts.
    pub fn display_name(&self) -> &'static str {
        match self {
            Feature::WhatsappGenerator => "WhatsApp Link Generator",
            Feature::FreeCourses => "Free Courses",
            Feature::CommunityListing => "Community Listing",
            Feature::ProductCatalog => "Product Catalog",
            Feature::ContentDownloads => "Content Downloads",
            Feature::TrendRush => "Trend Rush",
            Feature::PremiumCourses => "Premium Courses",
            Feature::ViewServiceRequests => "Service Requests",
            Feature::PromoteCommunity => "Community Promotion",
            Feature::PromoteServices => "Service Promotion",
            Feature::CustomizationOptions => "Customization Options",
            Feature::AiCopywriter => "AI Copywriter",
            Feature::ExclusiveProducts => "Exclusive Products",
            Feature::Mentorship => "Mentorship",
            Feature::PrioritySupport => "Priority Support",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feature {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Feature::ALL
            .into_iter()
            .find(|feature| feature.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| PolicyError::UnknownFeature(s.to_string()))
    }
}
