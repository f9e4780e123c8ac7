/// Domain policies - business rules for projecting components
pub mod visibility_policy;

pub use visibility_policy::{VisibilityPolicy, QUALIFIERS_WITH_VISIBILITY};
