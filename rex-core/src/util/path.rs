//! src/util/path.rs
//! ============================================================================
//! # Backend path helpers
//!
//! Paths here are strings owned by the backend, not local filesystem paths,
//! so `std::path` is deliberately not used: a Windows backend can hand a
//! Unix client `C:\data\docs`. Both `/` and `\` count as separators.

const SEPARATORS: [char; 2] = ['/', '\\'];

fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// Everything before the last separator, or `""` when there is none.
///
/// `"/a/b"` → `"/a"`, `"/a"` → `""`, `"name"` → `""`.
pub fn truncate_at_last_separator(path: &str) -> &str {
    path.rfind(is_separator).map_or("", |idx| &path[..idx])
}

/// Target of the back button: the parent of `current`, or `root` when
/// truncation leaves nothing.
pub fn parent_path<'a>(current: &'a str, root: &'a str) -> &'a str {
    match truncate_at_last_separator(current) {
        "" => root,
        parent => parent,
    }
}

/// Directory a search hit lives in, for the `in <parent>` annotation.
pub fn containing_dir(entry_path: &str) -> Option<&str> {
    match truncate_at_last_separator(entry_path) {
        "" if entry_path.starts_with(is_separator) => Some(&entry_path[..1]),
        "" => None,
        parent => Some(parent),
    }
}

/// One clickable breadcrumb segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub target: String,
}

pub const ROOT_LABEL: &str = "Root";

/// Splits `current` into a `Root` crumb followed by one crumb per
/// component, each targeting the path up to and including itself.
///
/// `"/a/b/c"` yields Root→`root`, a→`/a`, b→`/a/b`, c→`/a/b/c`. The
/// separator style and leading separator of `current` are preserved.
pub fn breadcrumbs(current: &str, root: &str) -> Vec<Crumb> {
    let sep = current.chars().find(|c| is_separator(*c)).unwrap_or('/');
    let mut target = String::with_capacity(current.len());
    if current.starts_with(is_separator) {
        target.push(sep);
    }

    let mut crumbs = vec![Crumb {
        label: ROOT_LABEL.to_string(),
        target: root.to_string(),
    }];

    for (idx, part) in current
        .split(is_separator)
        .filter(|part| !part.is_empty())
        .enumerate()
    {
        if idx > 0 {
            target.push(sep);
        }
        target.push_str(part);
        crumbs.push(Crumb {
            label: part.to_string(),
            target: target.clone(),
        });
    }

    crumbs
}
