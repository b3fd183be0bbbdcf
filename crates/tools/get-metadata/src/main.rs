//! Tool: return the session's stored metadata document.
//!
//! Resolves the project id through the host API, then reads the document
//! from the metadata store. "Nothing stored yet" is a normal answer, not
//! an error.

use anyhow::Result;
use plugin_common::prelude::*;
use session_store::{Document, MetadataStore};

fn main() -> Result<()> {
    let invocation = ToolInvocation::from_stdin()?;
    let client = HostClient::new(DEFAULT_SERVER_URL);
    let store = MetadataStore::new(MetadataStore::default_base());
    println!("{}", run(&invocation, &client, &store));
    Ok(())
}

fn run(invocation: &ToolInvocation, client: &HostClient, store: &MetadataStore) -> String {
    let Some(session_id) = invocation.session_id.as_deref() else {
        return "Error getting metadata: invocation carries no session id".to_string();
    };
    let record = match client.get_session(session_id) {
        Ok(record) => record,
        Err(e) => return format!("Error getting metadata: {e}"),
    };
    let Some(project_id) = plugin_common::host::project_id(&record) else {
        return "Error getting metadata: session record carries no projectID".to_string();
    };
    render_metadata(store, project_id, session_id)
}

fn render_metadata(store: &MetadataStore, project_id: &str, session_id: &str) -> String {
    match store.read(project_id, session_id) {
        Ok(document) => render_document(&document),
        Err(e) if e.is_not_found() => format!("No metadata found for session {session_id}"),
        Err(e) => format!("Error reading metadata: {e}"),
    }
}

fn render_document(document: &Document) -> String {
    serde_json::to_string_pretty(document).unwrap_or_else(|_| format!("{document:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use session_store::SESSION_ID_KEY;
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> MetadataStore {
        MetadataStore::new(dir.path().to_str().unwrap())
    }

    #[test]
    fn test_render_metadata_after_write() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        let mut fields = Document::new();
        fields.insert("epic".to_string(), "feature-x".into());
        store.write("proj-123", "ses-1", fields).unwrap();

        let rendered = render_metadata(&store, "proj-123", "ses-1");
        assert!(rendered.contains("\"epic\": \"feature-x\""));
        assert!(rendered.contains(&format!("\"{SESSION_ID_KEY}\": \"ses-1\"")));
    }

    #[test]
    fn test_absent_document_is_not_an_error() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        let rendered = render_metadata(&store, "proj-123", "ses-1");
        assert_eq!(rendered, "No metadata found for session ses-1");
    }

    #[test]
    fn test_corrupt_document_is_a_distinct_error() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        store.ensure_directory("proj-123").unwrap();
        let path = store.resolve_path("proj-123", "ses-1");
        std::fs::write(&path, "not json at all").unwrap();

        let rendered = render_metadata(&store, "proj-123", "ses-1");
        assert!(rendered.starts_with("Error reading metadata:"));
        assert!(rendered.contains(path.as_str()));
    }

    #[test]
    fn test_run_requires_session_id() {
        let invocation: ToolInvocation = serde_json::from_str("{}").unwrap();
        let client = HostClient::new(DEFAULT_SERVER_URL);
        let dir = tempdir().unwrap();
        let result = run(&invocation, &client, &store_in(&dir));
        assert!(result.contains("no session id"));
    }
}
