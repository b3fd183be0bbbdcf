//! Tool: store a metadata document for the session.
//!
//! The caller's fields are written as given; the store overlays the
//! reserved `sessionId` and `storedAt` fields on top. Each write fully
//! replaces whatever was stored before.

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
        return "Error storing metadata: invocation carries no session id".to_string();
    };
    let Some(metadata) = invocation.args.metadata.clone() else {
        return "Error storing metadata: no metadata object provided".to_string();
    };
    let record = match client.get_session(session_id) {
        Ok(record) => record,
        Err(e) => return format!("Error storing metadata: {e}"),
    };
    let Some(project_id) = plugin_common::host::project_id(&record) else {
        return "Error storing metadata: session record carries no projectID".to_string();
    };
    store_metadata(store, project_id, session_id, metadata)
}

fn store_metadata(
    store: &MetadataStore,
    project_id: &str,
    session_id: &str,
    metadata: Document,
) -> String {
    match store.write(project_id, session_id, metadata) {
        Ok(document) => format!(
            "Stored metadata for session {session_id}:\n{}",
            serde_json::to_string_pretty(&document).unwrap_or_else(|_| format!("{document:?}"))
        ),
        Err(e) => format!("Error storing metadata: {e}"),
    }
}
