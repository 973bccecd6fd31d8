// Mon Oct 19 2026 - Alex

use crate::error::{ContextError, Result};
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub const NO_NOTES: &str = "No adhoc notes provided.";
pub const NOTES_NOT_FOUND: &str = "No adhoc notes provided (File not found).";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotesStatus {
    NotProvided,
    NotFound,
    Loaded,
    Unreadable,
}

/// Notes section text plus the warning, if any, the caller should surface.
#[derive(Debug, Clone)]
pub struct Notes {
    pub content: String,
    pub status: NotesStatus,
    pub warning: Option<String>,
}

impl Notes {
    fn placeholder(content: &str, status: NotesStatus, warning: Option<String>) -> Self {
        Self {
            content: content.to_string(),
            status,
            warning,
        }
    }
}

/// Never fails: a missing or unreadable file degrades to placeholder text.
pub fn read_notes(path: Option<&Path>) -> Notes {
    let Some(path) = path else {
        return Notes::placeholder(NO_NOTES, NotesStatus::NotProvided, None);
    };

    match fs::read_to_string(path) {
        Ok(content) => Notes {
            content,
            status: NotesStatus::Loaded,
            warning: None,
        },
        Err(e) if e.kind() == ErrorKind::NotFound => Notes::placeholder(
            NOTES_NOT_FOUND,
            NotesStatus::NotFound,
            Some(format!("Notes file '{}' not found.", path.display())),
        ),
        Err(e) => {
            let message = format!("Error reading notes file: {}", e);
            Notes {
                content: message.clone(),
                status: NotesStatus::Unreadable,
                warning: Some(message),
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SystemPrompt {
    pub content: Option<String>,
    pub warning: Option<String>,
}

/// A missing prompt file is skipped with a warning; any other read error is fatal.
pub fn read_system_prompt(path: Option<&Path>) -> Result<SystemPrompt> {
    let Some(path) = path else {
        return Ok(SystemPrompt::default());
    };

    match fs::read_to_string(path) {
        Ok(content) => Ok(SystemPrompt {
            content: Some(content),
            warning: None,
        }),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(SystemPrompt {
            content: None,
            warning: Some(format!("System prompt '{}' not found.", path.display())),
        }),
        Err(source) => Err(ContextError::ReadInput {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_no_path_gives_placeholder() {
        let notes = read_notes(None);
        assert_eq!(notes.content, "No adhoc notes provided.");
        assert_eq!(notes.status, NotesStatus::NotProvided);
        assert!(notes.warning.is_none());
    }

    #[test]
    fn test_missing_file_warns() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.md");

        let notes = read_notes(Some(path.as_path()));
        assert_eq!(notes.content, "No adhoc notes provided (File not found).");
        assert_eq!(notes.status, NotesStatus::NotFound);
        let warning = notes.warning.unwrap();
        assert!(warning.contains("missing.md"));
        assert!(warning.ends_with("not found."));
    }

    #[test]
    fn test_contents_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.md");
        fs::write(&path, "Ship it.").unwrap();

        let notes = read_notes(Some(path.as_path()));
        assert_eq!(notes.content, "Ship it.");
        assert_eq!(notes.status, NotesStatus::Loaded);
    }

    #[test]
    fn test_trailing_whitespace_is_kept() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.md");
        fs::write(&path, "- focus on billing\n\n").unwrap();

        assert_eq!(read_notes(Some(path.as_path())).content, "- focus on billing\n\n");
    }

    #[test]
    fn test_unreadable_file_substitutes_message() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("binary.md");
        fs::write(&path, b"\xff\xfe\x00\x9f").unwrap();

        let notes = read_notes(Some(path.as_path()));
        assert_eq!(notes.status, NotesStatus::Unreadable);
        assert!(notes.content.starts_with("Error reading notes file: "));
        assert_eq!(notes.warning.as_deref(), Some(notes.content.as_str()));
    }

    #[test]
    fn test_directory_is_unreadable_not_missing() {
        let dir = TempDir::new().unwrap();

        let notes = read_notes(Some(dir.path()));
        assert_eq!(notes.status, NotesStatus::Unreadable);
    }

    #[test]
    fn test_system_prompt_variants() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prompt.md");

        assert!(read_system_prompt(None).unwrap().content.is_none());

        let missing = read_system_prompt(Some(path.as_path())).unwrap();
        assert!(missing.content.is_none());
        assert!(missing.warning.is_some());

        fs::write(&path, "Summarise for customers.").unwrap();
        let loaded = read_system_prompt(Some(path.as_path())).unwrap();
        assert_eq!(loaded.content.as_deref(), Some("Summarise for customers."));

        assert!(matches!(
            read_system_prompt(Some(dir.path())),
            Err(ContextError::ReadInput { .. })
        ));
    }
}
