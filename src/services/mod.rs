pub mod permission;

pub use permission::{LimitKind, Quota};
