//! Tool: return the full session record from the host as formatted JSON.
//!
//! Pure passthrough; the host's record and error payloads are surfaced
//! verbatim.

use anyhow::Result;
use plugin_common::prelude::*;
use serde_json::Value;

fn main() -> Result<()> {
    let invocation = ToolInvocation::from_stdin()?;
    let client = HostClient::new(DEFAULT_SERVER_URL);
    println!("{}", run(&invocation, &client));
    Ok(())
}

fn run(invocation: &ToolInvocation, client: &HostClient) -> String {
    let Some(session_id) = invocation.session_id.as_deref() else {
        return "Error getting session data: invocation carries no session id".to_string();
    };
    match client.get_session(session_id) {
        Ok(record) => render_record(&record),
        Err(e) => format!("Error getting session data: {e}"),
    }
}

fn render_record(record: &Value) -> String {
    serde_json::to_string_pretty(record).unwrap_or_else(|_| record.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_record_is_pretty() {
        let record = serde_json::json!({"id": "ses-1", "title": "Fix the parser"});
        let rendered = render_record(&record);
        assert!(rendered.contains("\"id\": \"ses-1\""));
        assert!(rendered.lines().count() > 1);
    }

    #[test]
    fn test_missing_session_id_is_an_error_string() {
        let invocation: ToolInvocation = serde_json::from_str("{}").unwrap();
        let client = HostClient::new(DEFAULT_SERVER_URL);
        let result = run(&invocation, &client);
        assert!(result.starts_with("Error getting session data:"));
    }
}
