//! JSON document storage, one file per (project, session) pair.

use crate::error::StoreError;
use camino::Utf8PathBuf;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;
use std::fs;
use std::io;

/// A session's metadata document: string keys to arbitrary JSON values.
/// `serde_json`'s default map keeps keys sorted, which gives the stored
/// files their stable ordering.
pub type Document = serde_json::Map<String, Value>;

/// Reserved key: the session the document belongs to.
pub const SESSION_ID_KEY: &str = "sessionId";

/// Reserved key: when the document was written.
pub const STORED_AT_KEY: &str = "storedAt";

/// Filesystem store for session metadata documents.
///
/// Layout: `<base>/<projectId>/<sessionId>.json`. Identifiers are opaque
/// host-assigned strings and are used for path construction as-is. Writes
/// fully replace the file; concurrent writers are last-write-wins.
#[derive(Debug, Clone)]
pub struct MetadataStore {
    /// Base directory for all projects
    base_dir: Utf8PathBuf,
}

impl MetadataStore {
    /// Create a store rooted at the given base directory.
    pub fn new(base_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Default base directory: `~/.config/session-plugin/metadata`.
    pub fn default_base() -> Utf8PathBuf {
        match dirs::home_dir().and_then(|p| Utf8PathBuf::from_path_buf(p).ok()) {
            Some(home) => home.join(".config/session-plugin/metadata"),
            None => Utf8PathBuf::from(".config/session-plugin/metadata"),
        }
    }

    /// Path of the document for one session. Pure, no I/O.
    pub fn resolve_path(&self, project_id: &str, session_id: &str) -> Utf8PathBuf {
        self.base_dir
            .join(project_id)
            .join(format!("{session_id}.json"))
    }

    /// Create the project's storage directory. Idempotent.
    pub fn ensure_directory(&self, project_id: &str) -> Result<(), StoreError> {
        let dir = self.base_dir.join(project_id);
        fs::create_dir_all(&dir).map_err(|source| StoreError::Io { path: dir, source })
    }

    /// Read and parse the session's document.
    ///
    /// An absent file is `StoreError::NotFound`; a present but invalid
    /// file is `StoreError::Malformed` with the path and parser message.
    pub fn read(&self, project_id: &str, session_id: &str) -> Result<Document, StoreError> {
        let path = self.resolve_path(project_id, session_id);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound {
                    session_id: session_id.to_string(),
                });
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        serde_json::from_str(&content).map_err(|source| StoreError::Malformed { path, source })
    }

    /// Write the session's document, replacing any previous content.
    ///
    /// The caller's fields are merged with the two reserved fields, which
    /// always win, and the full merged document is returned as written.
    pub fn write(
        &self,
        project_id: &str,
        session_id: &str,
        caller_fields: Document,
    ) -> Result<Document, StoreError> {
        self.ensure_directory(project_id)?;
        let document = build_document(session_id, caller_fields, Utc::now());
        let path = self.resolve_path(project_id, session_id);
        let content = serde_json::to_string_pretty(&document)?;
        fs::write(&path, content).map_err(|source| StoreError::Io { path, source })?;
        Ok(document)
    }
}

/// Merge caller fields with the reserved fields.
///
/// Two explicit steps: the caller document comes first, the reserved
/// overlay second, so precedence is unambiguous.
pub fn build_document(
    session_id: &str,
    caller_fields: Document,
    stored_at: DateTime<Utc>,
) -> Document {
    let mut document = caller_fields;
    document.insert(
        SESSION_ID_KEY.to_string(),
        Value::String(session_id.to_string()),
    );
    document.insert(
        STORED_AT_KEY.to_string(),
        Value::String(stored_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
    );
    document
}
