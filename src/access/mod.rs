mod feature_gate;
mod permissions;

pub use feature_gate::{FeatureGate, GateDecision};
pub use permissions::Permissions;
