// src/session.rs

use crate::chat::Message;
use crate::constants::TITLE_MAX_CHARS;

/// Sidebar entry for one conversation thread.
#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub id: u64,
    pub title: String,
    /// Always empty in this version: nothing appends to it and loading a
    /// session never replays it.
    /// TODO: populate per-session transcripts so load_session can replay
    /// them instead of showing a placeholder.
    pub messages: Vec<Message>,
}

/// In-memory list of session summaries driving the sidebar.
#[derive(Debug)]
pub struct SessionList {
    entries: Vec<SessionSummary>,
    next_id: u64,
}

impl Default for SessionList {
    fn default() -> Self {
        SessionList::new()
    }
}

impl SessionList {
    pub fn new() -> Self {
        SessionList {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Registers a new session from the first message of a conversation and
    /// returns its id. Ids strictly increase and are never reused.
    pub fn register(&mut self, first_message: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.entries.push(SessionSummary {
            id,
            title: truncate_title(first_message),
            messages: Vec::new(),
        });

        id
    }

    /// Sidebar order: most recently created first.
    pub fn newest_first(&self) -> impl Iterator<Item = &SessionSummary> {
        self.entries.iter().rev()
    }

    pub fn get(&self, id: u64) -> Option<&SessionSummary> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Truncates a first message into a sidebar title: at most 30 characters,
/// with a trailing ellipsis when cut.
pub fn truncate_title(message: &str) -> String {
    if message.chars().count() > TITLE_MAX_CHARS {
        let head: String = message.chars().take(TITLE_MAX_CHARS).collect();
        format!("{}...", head)
    } else {
        message.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_title_kept_unchanged() {
        assert_eq!(truncate_title("Beach Party"), "Beach Party");
    }

    #[test]
    fn test_exactly_thirty_chars_kept_unchanged() {
        let message = "a".repeat(30);
        assert_eq!(truncate_title(&message), message);
    }

    #[test]
    fn test_long_title_truncated_with_ellipsis() {
        let message = "a".repeat(31);
        let title = truncate_title(&message);
        assert_eq!(title, format!("{}...", "a".repeat(30)));
    }

    #[test]
    fn test_ids_strictly_increase() {
        let mut sessions = SessionList::new();
        let first = sessions.register("one");
        let second = sessions.register("two");
        let third = sessions.register("three");
        assert!(first < second && second < third);
    }

    #[test]
    fn test_newest_first_ordering() {
        let mut sessions = SessionList::new();
        sessions.register("Beach Party");
        sessions.register("Space Theme");

        let titles: Vec<&str> = sessions
            .newest_first()
            .map(|entry| entry.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Space Theme", "Beach Party"]);
    }

    #[test]
    fn test_registered_session_has_empty_message_log() {
        let mut sessions = SessionList::new();
        let id = sessions.register("hello");
        assert!(sessions.get(id).unwrap().messages.is_empty());
    }
}
