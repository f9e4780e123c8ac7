use crate::component::domain::qualifier;

/// Qualifiers for which the concept of "visibility" is configured
///
/// Fixed set: changing which components expose a visibility means changing
/// this constant, never runtime configuration.
pub const QUALIFIERS_WITH_VISIBILITY: [&str; 3] = [qualifier::PROJECT, qualifier::VIEW, qualifier::APP];

/// VisibilityPolicy decides which optional attributes a qualifier carries
///
/// - visibility: projects, portfolios and applications
/// - tags: projects only
pub struct VisibilityPolicy;

impl VisibilityPolicy {
    /// Whether components with this qualifier expose a public/private visibility
    pub fn supports_visibility(qualifier: &str) -> bool {
        QUALIFIERS_WITH_VISIBILITY.contains(&qualifier)
    }

    /// Whether components with this qualifier expose tags
    pub fn supports_tags(qualifier: &str) -> bool {
        qualifier == qualifier::PROJECT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supports_visibility_allow_set() {
        assert!(VisibilityPolicy::supports_visibility("TRK"));
        assert!(VisibilityPolicy::supports_visibility("VW"));
        assert!(VisibilityPolicy::supports_visibility("APP"));
    }

    #[test]
    fn test_supports_visibility_rejects_others() {
        for q in [
            qualifier::SUBVIEW,
            qualifier::MODULE,
            qualifier::DIRECTORY,
            qualifier::FILE,
            qualifier::UNIT_TEST_FILE,
            "",
            "trk",
        ] {
            assert!(!VisibilityPolicy::supports_visibility(q), "{}", q);
        }
    }

    #[test]
    fn test_supports_tags_only_for_projects() {
        assert!(VisibilityPolicy::supports_tags(qualifier::PROJECT));
        assert!(!VisibilityPolicy::supports_tags(qualifier::VIEW));
        assert!(!VisibilityPolicy::supports_tags(qualifier::APP));
        assert!(!VisibilityPolicy::supports_tags(qualifier::FILE));
    }

    #[test]
    fn test_tags_imply_visibility() {
        for q in [qualifier::PROJECT, qualifier::VIEW, qualifier::APP, qualifier::FILE] {
            if VisibilityPolicy::supports_tags(q) {
                assert!(VisibilityPolicy::supports_visibility(q));
            }
        }
    }
}
