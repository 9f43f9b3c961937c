use std::fmt;

use serde::{Serialize, Serializer};

use crate::models::Plan;

/// A per-plan usage allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quota {
    Limited(u32),
    Unlimited,
}

impl Quota {
    pub const UNLIMITED: Quota = Quota::Unlimited;

    pub fn is_unlimited(&self) -> bool {
        *self == Self::UNLIMITED
    }

    /// Whether one more use is allowed after `used` uses.
    pub fn allows_usage(&self, used: u32) -> bool {
        match self {
            Quota::Limited(max) => used < *max,
            Quota::Unlimited => true,
        }
    }

    /// What is left after `used` uses; never negative.
    pub fn remaining(&self, used: u32) -> Quota {
        match self {
            Quota::Limited(max) => Quota::Limited(max.saturating_sub(used)),
            Quota::Unlimited => Quota::Unlimited,
        }
    }
}

impl fmt::Display for Quota {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quota::Limited(n) => write!(f, "{}", n),
            Quota::Unlimited => f.write_str("unlimited"),
        }
    }
}

// Serialized as a number, or the string "unlimited".
impl Serialize for Quota {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Quota::Limited(n) => serializer.serialize_u32(*n),
            Quota::Unlimited => serializer.serialize_str("unlimited"),
        }
    }
}

/// The independently tuned quotas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LimitKind {
    Downloads,
    TrendRush,
}

impl LimitKind {
    pub const ALL: [LimitKind; 2] = [LimitKind::Downloads, LimitKind::TrendRush];

    /// Noun phrase used when a quota is described to the user.
    pub fn unit(&self) -> &'static str {
        match self {
            LimitKind::Downloads => "content downloads",
            LimitKind::TrendRush => "daily Trend Rush audios",
        }
    }

    pub(crate) fn table(&self) -> &'static LimitTable {
        match self {
            LimitKind::Downloads => &DOWNLOAD_LIMITS,
            LimitKind::TrendRush => &TREND_RUSH_LIMITS,
        }
    }
}

/// Plan to quota, with a field per plan so no tier can be left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitTable {
    pub free: Quota,
    pub member: Quota,
    pub pro: Quota,
    pub elite: Quota,
}

impl LimitTable {
    pub const fn get(&self, plan: Plan) -> Quota {
        match plan {
            Plan::Free => self.free,
            Plan::Member => self.member,
            Plan::Pro => self.pro,
            Plan::Elite => self.elite,
        }
    }
}

pub static DOWNLOAD_LIMITS: LimitTable = LimitTable {
    free: Quota::Limited(5),
    member: Quota::Limited(20),
    pro: Quota::Limited(50),
    elite: Quota::UNLIMITED,
};

pub static TREND_RUSH_LIMITS: LimitTable = LimitTable {
    free: Quota::Limited(5),
    member: Quota::Limited(10),
    pro: Quota::Limited(15),
    elite: Quota::UNLIMITED,
};
