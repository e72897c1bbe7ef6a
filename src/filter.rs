//! Pattern matching and include/exclude filtering for tree walking and
//! content dumping.
//!
//! Matching is literal substring/prefix/suffix comparison — no glob or
//! regex engine. Visibility of a path is a pure function of its relative
//! path, its filename, and the two pattern lists.

use std::path::Path;

/// Check whether a single pattern matches a path.
///
/// `relative_path` is the path relative to the traversal root with `/`
/// separators; `file_name` is its final component. Pattern forms, in
/// priority order:
///
/// - `*X*` — `relative_path` contains `X`
/// - `*X` — `relative_path` ends with `X`
/// - `X*` — `relative_path` starts with `X`
/// - any other form containing `*` — `relative_path` contains the pattern
///   with every `*` removed (so `*a*b*` degrades to containment of `ab`)
/// - `X/` — `relative_path` is the directory `X` or anything under it
/// - bare name — `file_name` equals the pattern exactly
/// - path with `/` — `relative_path` equals the pattern exactly
///
/// Matching is case-sensitive and never fails; malformed patterns fall
/// through to the nearest applicable rule.
pub fn pattern_matches(relative_path: &str, file_name: &str, pattern: &str) -> bool {
    if pattern.contains('*') {
        let len = pattern.len();

        // *X* — containment. The body must be wildcard-free, otherwise
        // the pattern falls through to the strip-all-stars rule.
        if len >= 2 && pattern.starts_with('*') && pattern.ends_with('*') {
            let body = &pattern[1..len - 1];
            if !body.contains('*') {
                return relative_path.contains(body);
            }
        }

        // *X — suffix. ends_with handles paths shorter than X.
        if len >= 2 && pattern.starts_with('*') && !pattern.ends_with('*') {
            let body = &pattern[1..];
            if !body.contains('*') {
                return relative_path.ends_with(body);
            }
        }

        // X* — prefix.
        if len >= 2 && pattern.ends_with('*') && !pattern.starts_with('*') {
            let body = &pattern[..len - 1];
            if !body.contains('*') {
                return relative_path.starts_with(body);
            }
        }

        // Anything else with a wildcard: strip the stars and test
        // containment of what remains. A pattern of only stars strips to
        // the empty string, which every path contains.
        let stripped: String = pattern.chars().filter(|&c| c != '*').collect();
        return relative_path.contains(&stripped);
    }

    // X/ — the directory itself or anything under it.
    if let Some(dir_name) = pattern.strip_suffix('/') {
        return relative_path == dir_name
            || relative_path
                .strip_prefix(dir_name)
                .is_some_and(|rest| rest.starts_with('/'));
    }

    // Bare name — matched against the final component only.
    if !pattern.contains('/') {
        return file_name == pattern;
    }

    // Full relative path.
    relative_path == pattern
}

/// A single user-supplied pattern, normalized at construction so that
/// backslash separators become forward slashes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    text: String,
}

impl Pattern {
    pub fn new(raw: &str) -> Self {
        Self {
            text: raw.replace('\\', "/"),
        }
    }

    /// The normalized pattern text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn matches(&self, relative_path: &str, file_name: &str) -> bool {
        pattern_matches(relative_path, file_name, &self.text)
    }
}

/// Ordered include and exclude pattern lists for one filtering axis.
///
/// Includes override excludes: a path matching any include is visible even
/// when an exclude also matches it. A non-empty include list switches the
/// set into include-only mode, where unmatched paths are hidden.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    includes: Vec<Pattern>,
    excludes: Vec<Pattern>,
}

impl FilterSet {
    pub fn new<I, E>(includes: I, excludes: E) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        Self {
            includes: includes
                .into_iter()
                .map(|p| Pattern::new(p.as_ref()))
                .collect(),
            excludes: excludes
                .into_iter()
                .map(|p| Pattern::new(p.as_ref()))
                .collect(),
        }
    }

    /// True when the set has no patterns at all (every path is visible).
    pub fn is_empty(&self) -> bool {
        self.includes.is_empty() && self.excludes.is_empty()
    }

    /// Decide visibility of one path.
    ///
    /// Order matters: includes first (short-circuit show), then excludes
    /// (hide), then include-only mode (hide), then the default (show).
    pub fn is_visible(&self, relative_path: &str, file_name: &str) -> bool {
        if self
            .includes
            .iter()
            .any(|p| p.matches(relative_path, file_name))
        {
            return true;
        }

        if self
            .excludes
            .iter()
            .any(|p| p.matches(relative_path, file_name))
        {
            return false;
        }

        self.includes.is_empty()
    }
}

/// The two independent filtering axes.
#[derive(Debug, Clone, Default)]
pub struct Filters {
    /// Controls which entries appear in the tree and which directories are
    /// traversed at all.
    pub list: FilterSet,
    /// Controls which files have their contents emitted.
    pub print: FilterSet,
}

/// A derived, read-only view of one traversal entry: its path relative to
/// the root joined with `/`, and its final component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelPath {
    path: String,
    name: String,
}

impl RelPath {
    /// Derive the relative view of `path` under `root`.
    ///
    /// Returns `None` when `path` does not live under `root` or when
    /// either component is not valid UTF-8; callers treat that as hidden.
    pub fn new(root: &Path, path: &Path) -> Option<Self> {
        let rel = path.strip_prefix(root).ok()?;
        let rel_str = rel.to_str()?;
        if rel_str.is_empty() {
            return None;
        }
        let name = path.file_name()?.to_str()?;
        Some(Self {
            path: rel_str.replace('\\', "/"),
            name: name.to_string(),
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
