//! File inclusion predicate
//!
//! Pure filtering logic: extension allow-list, extension deny-list and
//! base-name substring search. No I/O happens here.

use std::path::Path;

/// Decides whether a discovered file belongs in the audit.
#[derive(Debug, Clone, Default)]
pub struct FileFilter {
    include: Vec<String>,
    exclude: Vec<String>,
    search: Vec<String>,
}

impl FileFilter {
    pub fn new(include: &[String], exclude: &[String], search: &[String]) -> Self {
        Self {
            include: include.to_vec(),
            exclude: exclude.to_vec(),
            search: search.to_vec(),
        }
    }

    /// Apply the predicate to a file path.
    ///
    /// Extension comparison is a case-preserving exact match against the
    /// extension without its leading dot; files with no extension compare
    /// as the empty string. Search terms match case-sensitively against
    /// the base name without extension. The exclude list wins over the
    /// include list, and extension filtering and search filtering must
    /// both pass.
    pub fn matches(&self, path: &Path) -> bool {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        self.matches_parts(stem, extension)
    }

    fn matches_parts(&self, stem: &str, extension: &str) -> bool {
        if !self.include.is_empty() && !self.include.iter().any(|e| e == extension) {
            return false;
        }

        // Exclude is evaluated regardless of include-set membership
        if self.exclude.iter().any(|e| e == extension) {
            return false;
        }

        if !self.search.is_empty() && !self.search.iter().any(|term| stem.contains(term)) {
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(include: &[&str], exclude: &[&str], search: &[&str]) -> FileFilter {
        let to_vec = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        FileFilter::new(&to_vec(include), &to_vec(exclude), &to_vec(search))
    }

    #[test]
    fn test_empty_filter_accepts_everything() {
        let f = filter(&[], &[], &[]);
        assert!(f.matches(Path::new("clip.mov")));
        assert!(f.matches(Path::new("no_extension")));
    }

    #[test]
    fn test_include_list_restricts() {
        let f = filter(&["png"], &[], &[]);
        assert!(f.matches(Path::new("image.png")));
        assert!(!f.matches(Path::new("clip.mov")));
        assert!(!f.matches(Path::new("no_extension")));
    }

    #[test]
    fn test_exclude_wins_over_include() {
        let f = filter(&["mov", "png"], &["mov"], &[]);
        assert!(!f.matches(Path::new("clip.mov")));
        assert!(f.matches(Path::new("image.png")));
    }

    #[test]
    fn test_extension_match_is_case_sensitive() {
        let f = filter(&["mov"], &[], &[]);
        assert!(!f.matches(Path::new("clip.MOV")));
        assert!(f.matches(Path::new("clip.mov")));
    }

    #[test]
    fn test_search_matches_base_name_without_extension() {
        let f = filter(&[], &[], &["intro"]);
        assert!(f.matches(Path::new("show_intro_v2.mov")));
        assert!(!f.matches(Path::new("outro.mov")));
        // The extension is not searched
        assert!(!f.matches(Path::new("clip.intro")));
    }

    #[test]
    fn test_search_is_case_sensitive() {
        let f = filter(&[], &[], &["Intro"]);
        assert!(!f.matches(Path::new("intro.mov")));
        assert!(f.matches(Path::new("Intro.mov")));
    }

    #[test]
    fn test_search_and_extension_must_both_pass() {
        let f = filter(&["mov"], &[], &["intro"]);
        assert!(f.matches(Path::new("intro.mov")));
        assert!(!f.matches(Path::new("intro.png")));
        assert!(!f.matches(Path::new("outro.mov")));
    }

    #[test]
    fn test_any_search_term_is_enough() {
        let f = filter(&[], &[], &["intro", "outro"]);
        assert!(f.matches(Path::new("outro.mov")));
        assert!(f.matches(Path::new("intro.mov")));
        assert!(!f.matches(Path::new("loop.mov")));
    }
}
