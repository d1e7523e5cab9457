//! Album directory naming.
//!
//! Albums are identified by a path-like `dir` such as `travel/2024/japan`.
//! The same album can be spelled in several ways across album files
//! (`travel//2024/japan`, `travel/./2024/japan/`), so every dir goes through
//! [`normalize_dir`] before it is used as a lookup key.
//!
//! ## Helpers for page generators
//!
//! - [`dir_name`]: last segment, used as the album's output directory name
//! - [`root_path`]: relative path from an album directory back to the gallery root

/// Normalize an album dir the way a filesystem path would be normalized.
///
/// - `"a//b"` → `"a/b"`
/// - `"a/./b/"` → `"a/b"`
/// - `"a/b/../c"` → `"a/c"`
/// - `"../a"` → `"../a"` (nothing to fold into)
/// - `"a/.."` → `"."`
pub fn normalize_dir(dir: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in dir.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|&last| last != "..") {
                    segments.pop();
                } else {
                    segments.push("..");
                }
            }
            _ => segments.push(segment),
        }
    }
    if segments.is_empty() {
        ".".to_string()
    } else {
        segments.join("/")
    }
}

/// Last segment of a normalized album dir.
///
/// - `"travel/2024/japan"` → `"japan"`
/// - `"travel"` → `"travel"`
pub fn dir_name(dir: &str) -> &str {
    dir.rsplit('/').next().unwrap_or(dir)
}

/// Relative path from an album directory back to the gallery root.
///
/// - `"travel"` → `".."`
/// - `"travel/2024/japan"` → `"../../.."`
pub fn root_path(dir: &str) -> String {
    let depth = dir.split('/').filter(|s| !s.is_empty()).count().max(1);
    vec![".."; depth].join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_dir_unchanged() {
        assert_eq!(normalize_dir("travel/2024"), "travel/2024");
    }

    #[test]
    fn repeated_separators_collapse() {
        assert_eq!(normalize_dir("travel//2024///japan"), "travel/2024/japan");
    }

    #[test]
    fn trailing_separator_dropped() {
        assert_eq!(normalize_dir("travel/"), "travel");
    }

    #[test]
    fn dot_segments_dropped() {
        assert_eq!(normalize_dir("./travel/./2024"), "travel/2024");
    }

    #[test]
    fn parent_segments_fold() {
        assert_eq!(normalize_dir("travel/2023/../2024"), "travel/2024");
    }

    #[test]
    fn leading_parent_segments_kept() {
        assert_eq!(normalize_dir("../../travel"), "../../travel");
    }

    #[test]
    fn fully_folded_dir_is_dot() {
        assert_eq!(normalize_dir("travel/.."), ".");
    }

    #[test]
    fn dir_name_is_last_segment() {
        assert_eq!(dir_name("travel/2024/japan"), "japan");
        assert_eq!(dir_name("travel"), "travel");
    }

    #[test]
    fn root_path_per_depth() {
        assert_eq!(root_path("travel"), "..");
        assert_eq!(root_path("travel/2024/japan"), "../../..");
    }
}
