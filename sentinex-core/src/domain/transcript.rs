//! Transcript domain types

use serde::{Deserialize, Serialize};

/// Who produced a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    System,
}

/// Presentation hint for system entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Info,
    Success,
    Warning,
    Error,
}

/// An actionable reference attached to an entry (e.g. "View on Explorer")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    pub label: String,
}

impl Link {
    pub fn new(url: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            label: label.into(),
        }
    }
}

/// A single chat-like entry in the transcript
///
/// Entries are immutable once created; the store only ever appends them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub role: Role,
    pub kind: EntryKind,
    pub text: String,
    pub links: Vec<Link>,
}

impl TranscriptEntry {
    /// Entry typed by the user
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, EntryKind::Info, text)
    }

    /// Neutral narration from the assistant
    pub fn system(text: impl Into<String>) -> Self {
        Self::new(Role::System, EntryKind::Info, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(Role::System, EntryKind::Success, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(Role::System, EntryKind::Warning, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(Role::System, EntryKind::Error, text)
    }

    fn new(role: Role, kind: EntryKind, text: impl Into<String>) -> Self {
        Self {
            timestamp: chrono::Utc::now(),
            role,
            kind,
            text: text.into(),
            links: Vec::new(),
        }
    }

    /// Attaches a link, keeping insertion order
    pub fn with_link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_role_and_kind() {
        let user = TranscriptEntry::user("hello");
        assert!(user.is_user());
        assert_eq!(user.kind, EntryKind::Info);

        let err = TranscriptEntry::error("boom");
        assert_eq!(err.role, Role::System);
        assert_eq!(err.kind, EntryKind::Error);
    }

    #[test]
    fn test_links_keep_order() {
        let entry = TranscriptEntry::success("done")
            .with_link(Link::new("https://a", "first"))
            .with_link(Link::new("https://b", "second"));

        let labels: Vec<_> = entry.links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["first", "second"]);
    }
}
