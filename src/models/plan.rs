use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::PolicyError;

/// Subscription tier, ordered along the upgrade path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    #[serde(rename = "gratuito", alias = "free")]
    Free,
    Member,
    Pro,
    Elite,
}

impl Plan {
    /// Every tier, lowest first.
    pub const ALL: [Plan; 4] = [Plan::Free, Plan::Member, Plan::Pro, Plan::Elite];

    /// Identifier used by the profile store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Free => "gratuito",
            Plan::Member => "member",
            Plan::Pro => "pro",
            Plan::Elite => "elite",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Plan::Free => "Gratuito",
            Plan::Member => "Member",
            Plan::Pro => "Pro",
            Plan::Elite => "Elite",
        }
    }

    /// The tier directly above this one, if any.
    pub fn next(&self) -> Option<Plan> {
        match self {
            Plan::Free => Some(Plan::Member),
            Plan::Member => Some(Plan::Pro),
            Plan::Pro => Some(Plan::Elite),
            Plan::Elite => None,
        }
    }

    /// Whether this plan sits at or above `required` on the upgrade path.
    pub fn meets(&self, required: Plan) -> bool {
        *self >= required
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Plan {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gratuito" | "free" => Ok(Plan::Free),
            "member" => Ok(Plan::Member),
            "pro" => Ok(Plan::Pro),
            "elite" => Ok(Plan::Elite),
            _ => Err(PolicyError::UnknownPlan(s.to_string())),
        }
    }
}
