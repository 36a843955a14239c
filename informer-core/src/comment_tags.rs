//! Extraction of `+name=value` annotations from comment blocks.

use indexmap::IndexMap;

/// Tag name -> values, in first-seen order.
pub type CommentTags = IndexMap<String, Vec<String>>;

/// Extract tags carrying the given marker from comment lines.
///
/// Each trimmed line that starts with `marker` contributes one value: the
/// text after the first `=` or an empty string when there is none. Repeated
/// tags accumulate values in line order.
///
/// ```text
/// +genclient               -> {"genclient": [""]}
/// +groupName=apps.k8s.io   -> {"groupName": ["apps.k8s.io"]}
/// ```
pub fn extract_comment_tags<S: AsRef<str>>(marker: &str, lines: &[S]) -> CommentTags {
    let mut out = CommentTags::new();
    for line in lines {
        let line = line.as_ref().trim_matches(' ');
        if line.is_empty() {
            continue;
        }
        let Some(rest) = line.strip_prefix(marker) else {
            continue;
        };
        let (name, value) = match rest.split_once('=') {
            Some((name, value)) => (name, value),
            None => (rest, ""),
        };
        out.entry(name.to_string())
            .or_default()
            .push(value.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_flag_and_value() {
        let tags = extract_comment_tags(
            "+",
            &["+genclient", "  +groupName=apps.k8s.io ", "plain comment"],
        );
        assert_eq!(tags.len(), 2);
        assert_eq!(tags["genclient"], vec![String::new()]);
        assert_eq!(tags["groupName"], vec!["apps.k8s.io".to_string()]);
    }

    #[test]
    fn test_repeated_tags_accumulate() {
        let tags = extract_comment_tags("+", &["+groupName=first", "+groupName=second"]);
        assert_eq!(tags["groupName"], vec!["first", "second"]);
    }

    #[test]
    fn test_value_keeps_later_equals() {
        let tags = extract_comment_tags("+", &["+genclient:method=Scale,verb=get"]);
        assert_eq!(tags["genclient:method"], vec!["Scale,verb=get"]);
    }

    #[test]
    fn test_other_marker_ignored() {
        let tags = extract_comment_tags("+", &["-genclient", "// +genclient", ""]);
        assert!(tags.is_empty());
    }
}
