//! src/model/entry.rs
//! ============================================================================
//! # DirectoryEntry: one record returned by `/api/browse` or `/api/search`
//!
//! Entries are produced only by the backend and never edited locally; a new
//! listing replaces them wholesale.

use std::cmp::Ordering;
use std::fmt;

use bytesize::ByteSize;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Directory => "directory",
        }
    }

    pub const fn is_dir(self) -> bool {
        matches!(self, Self::Directory)
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Size as sent by the backend: a byte count or a preformatted label
/// such as `"1.50 KB"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntrySize {
    Bytes(u64),
    Fractional(f64),
    Text(String),
}

impl EntrySize {
    fn as_number(&self) -> Option<f64> {
        match self {
            Self::Bytes(n) => Some(*n as f64),
            Self::Fractional(n) => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }

    /// Loose less/greater comparison.
    ///
    /// Two labels compare as strings. Any other pairing compares
    /// numerically, and a label that is not a number compares equal to
    /// everything, which leaves such rows in their previous order.
    pub fn loose_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            _ => match (self.as_number(), other.as_number()) {
                (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
                _ => Ordering::Equal,
            },
        }
    }

    /// Text for the size column.
    pub fn display(&self) -> String {
        match self {
            Self::Bytes(n) => ByteSize::b(*n).to_string(),
            Self::Fractional(n) if *n >= 0.0 => ByteSize::b(n.round() as u64).to_string(),
            Self::Fractional(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub name: String,

    pub path: String,

    #[serde(rename = "type")]
    pub kind: EntryKind,

    pub size: EntrySize,

    pub last_modified: String,
}

impl DirectoryEntry {
    pub const fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_both_size_shapes() {
        let json = r#"[
            {"name":"report.pdf","path":"/docs/sub/report.pdf","type":"file","size":120,"last_modified":"2024-01-01"},
            {"name":"sub","path":"/docs/sub","type":"directory","size":"4.00 KB","last_modified":"2024-01-02 10:00:00"}
        ]"#;

        let entries: Vec<DirectoryEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries[0].size, EntrySize::Bytes(120));
        assert_eq!(entries[0].kind, EntryKind::File);
        assert_eq!(entries[1].size, EntrySize::Text("4.00 KB".into()));
        assert!(entries[1].is_dir());
    }

    #[test]
    fn unknown_entry_type_is_rejected() {
        let json = r#"{"name":"x","path":"/x","type":"socket","size":0,"last_modified":""}"#;
        assert!(serde_json::from_str::<DirectoryEntry>(json).is_err());
    }

    #[test]
    fn size_comparison_is_loose() {
        use Ordering::*;

        assert_eq!(EntrySize::Bytes(2).loose_cmp(&EntrySize::Bytes(10)), Less);
        // labels sort as text, so "10.00 B" lands before "9.00 B"
        assert_eq!(
            EntrySize::Text("10.00 B".into()).loose_cmp(&EntrySize::Text("9.00 B".into())),
            Less
        );
        assert_eq!(
            EntrySize::Bytes(5).loose_cmp(&EntrySize::Text("7".into())),
            Less
        );
        assert_eq!(
            EntrySize::Bytes(5).loose_cmp(&EntrySize::Text("1.00 KB".into())),
            Equal
        );
    }

    #[test]
    fn numeric_sizes_display_humanized() {
        assert_eq!(EntrySize::Bytes(120).display(), "120 B");
        let kib = EntrySize::Bytes(1536).display();
        assert_eq!(kib, ByteSize::b(1536).to_string());
        assert!(kib.starts_with("1.5 "));
        assert_eq!(EntrySize::Fractional(1535.6).display(), kib);
        assert_eq!(EntrySize::Text("2.00 MB".into()).display(), "2.00 MB");
    }
}
