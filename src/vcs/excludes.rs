// Mon Oct 19 2026 - Alex

/// Paths that never belong in a release diff: lock files, images, caches, and
/// the repository metadata directory.
pub const DEFAULT_EXCLUDES: [&str; 12] = [
    "package-lock.json",
    "yarn.lock",
    "*.png",
    "*.jpg",
    "*.jpeg",
    "*.gif",
    "*.svg",
    "*.ico",
    "__pycache__",
    "*.pyc",
    "node_modules",
    ".git",
];

const EXCLUDE_MAGIC: &str = ":(exclude)";

pub fn default_excludes() -> Vec<String> {
    DEFAULT_EXCLUDES.iter().map(|p| p.to_string()).collect()
}

/// Fixed list first, then caller supplied patterns. Duplicates are dropped so
/// the generated command line stays stable.
pub fn merge_excludes(extra: &[String]) -> Vec<String> {
    let mut patterns = default_excludes();
    for pattern in extra {
        let pattern = pattern.trim();
        if pattern.is_empty() || patterns.iter().any(|p| p == pattern) {
            continue;
        }
        patterns.push(pattern.to_string());
    }
    patterns
}

pub fn to_pathspec(pattern: &str) -> String {
    if pattern.starts_with(EXCLUDE_MAGIC) {
        pattern.to_string()
    } else {
        format!("{}{}", EXCLUDE_MAGIC, pattern)
    }
}
