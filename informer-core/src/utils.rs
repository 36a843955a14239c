//! Shared utility functions for name and path handling.

/// Upper-case the first character (e.g., "deployment" -> "Deployment")
pub fn to_initial_upper(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lower-case the first character (e.g., "Deployment" -> "deployment")
pub fn to_initial_lower(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Return the text before the first dot (e.g., "apps.k8s.io" -> "apps")
pub fn first_dot_segment(s: &str) -> &str {
    s.split('.').next().unwrap_or(s)
}

/// Return the last `/`-separated segment of a package path, if it has a separator.
pub fn last_path_segment(path: &str) -> Option<&str> {
    path.rfind('/').map(|idx| &path[idx + 1..])
}

/// Join package path segments with `/`, dropping empty segments and
/// redundant separators.
///
/// Package paths are import paths, not filesystem paths, so the separator is
/// always `/` regardless of platform.
pub fn join_package_path<'a>(segments: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for segment in segments {
        for part in segment.split('/').filter(|p| !p.is_empty() && *p != ".") {
            if !out.is_empty() {
                out.push('/');
            }
            out.push_str(part);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_initial_upper() {
        assert_eq!(to_initial_upper("apps"), "Apps");
        assert_eq!(to_initial_upper("Apps"), "Apps");
        assert_eq!(to_initial_upper("aPPS"), "APPS");
        assert_eq!(to_initial_upper(""), "");
    }

    #[test]
    fn test_to_initial_lower() {
        assert_eq!(to_initial_lower("Deployment"), "deployment");
        assert_eq!(to_initial_lower("ReplicaSet"), "replicaSet");
        assert_eq!(to_initial_lower("URL"), "uRL");
        assert_eq!(to_initial_lower(""), "");
    }

    #[test]
    fn test_first_dot_segment() {
        assert_eq!(first_dot_segment("apps"), "apps");
        assert_eq!(first_dot_segment("flowcontrol.apiserver.k8s.io"), "flowcontrol");
        assert_eq!(first_dot_segment(""), "");
    }

    #[test]
    fn test_last_path_segment() {
        assert_eq!(last_path_segment("example.com/apis/apps"), Some("apps"));
        assert_eq!(last_path_segment("apps"), None);
        assert_eq!(last_path_segment("trailing/"), Some(""));
    }

    #[test]
    fn test_join_package_path() {
        assert_eq!(
            join_package_path(["example.com/informers", "externalversions"]),
            "example.com/informers/externalversions"
        );
        assert_eq!(join_package_path(["a/", "/b/", "", "c"]), "a/b/c");
        assert_eq!(join_package_path(["./a", "b"]), "a/b");
        assert_eq!(join_package_path(Vec::<&str>::new()), "");
    }
}
