use thiserror::Error;

/// Errors raised while turning external identifiers into policy types.
///
/// The resolver itself has no runtime failure mode: every (plan, feature)
/// pair is defined at compile time. These only show up at the edges, when
/// a plan or feature arrives as a string from a profile row or the CLI.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("unknown plan: {0}")]
    UnknownPlan(String),
    #[error("unknown feature: {0}")]
    UnknownFeature(String),
}
