//! Path normalization

/// Canonical form of a path for comparison.
///
/// An empty path becomes `/` and `/` stays as is. Any other path loses its
/// trailing slash; a run of trailing slashes is removed as a whole so that
/// normalizing twice never changes the result. Stripping a single slash
/// instead would leave `/a//` as `/a/`.
pub fn normalize_path(path: &str) -> String {
    if path.is_empty() || path == "/" {
        return "/".to_string();
    }
    match path.trim_end_matches('/') {
        "" => "/".to_string(),
        trimmed => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_root_and_empty() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("//"), "/");
    }

    #[test]
    fn test_trailing_slash_stripped() {
        assert_eq!(
            normalize_path("/explore-delivery-playbook/"),
            normalize_path("/explore-delivery-playbook")
        );
        assert_eq!(normalize_path("/plan-my-workflow/"), "/plan-my-workflow");
        assert_eq!(normalize_path("/plan-my-workflow//"), "/plan-my-workflow");
    }

    #[test]
    fn test_inner_slashes_untouched() {
        assert_eq!(normalize_path("/docs//guide/"), "/docs//guide");
    }

    proptest! {
        #[test]
        fn prop_idempotent(raw in ".{0,40}") {
            let once = normalize_path(&raw);
            prop_assert_eq!(normalize_path(&once), once);
        }

        #[test]
        fn prop_never_empty_and_no_trailing_slash(raw in "(/[a-z0-9-]{0,12}){0,4}/{0,3}") {
            let normalized = normalize_path(&raw);
            prop_assert!(!normalized.is_empty());
            prop_assert!(normalized == "/" || !normalized.ends_with('/'));
        }

        #[test]
        fn prop_trailing_slash_variants_agree(segment in "[a-z0-9-]{1,24}") {
            let bare = format!("/{segment}");
            let slashed = format!("/{segment}/");
            prop_assert_eq!(normalize_path(&bare), normalize_path(&slashed));
        }
    }
}
