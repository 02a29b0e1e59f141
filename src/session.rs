use crate::config::config_dir;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Credentials persisted between runs so the next start can try
/// `User::restore_session` instead of prompting for a password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
    pub username: String,
}

impl StoredSession {
    /// Best-effort load: a missing or unreadable file just means nobody is
    /// signed in.
    pub fn load() -> Option<StoredSession> {
        let path = session_file_path()?;
        if !path.is_file() {
            return None;
        }
        let contents = fs::read_to_string(&path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    pub fn save(&self) -> Result<()> {
        if let Some(path) = session_file_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let json = serde_json::to_string_pretty(self)?;
            fs::write(&path, json)?;
        }
        Ok(())
    }

    /// Forget the stored credentials (logout).
    pub fn clear() {
        if let Some(path) = session_file_path() {
            let _ = fs::remove_file(path);
        }
    }
}

fn session_file_path() -> Option<PathBuf> {
    let mut p = config_dir()?;
    p.push("session.json");
    Some(p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_json_round_trips() {
        let session = StoredSession {
            token: "tok-123".into(),
            username: "alice".into(),
        };
        let json = serde_json::to_string(&session).unwrap();
        let back: StoredSession = serde_json::from_str(&json).unwrap();
        assert_eq!(back.token, "tok-123");
        assert_eq!(back.username, "alice");
    }

    #[test]
    fn corrupt_session_file_parses_as_none() {
        assert!(serde_json::from_str::<StoredSession>("{not json").is_err());
    }
}
