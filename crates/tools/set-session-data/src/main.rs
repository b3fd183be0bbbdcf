//! Tool: update the session title via the host API.
//!
//! Only the title is writable through this surface; everything else in
//! the session record belongs to the host.

use anyhow::Result;
use plugin_common::prelude::*;

fn main() -> Result<()> {
    let invocation = ToolInvocation::from_stdin()?;
    let client = HostClient::new(DEFAULT_SERVER_URL);
    println!("{}", run(&invocation, &client));
    Ok(())
}

fn run(invocation: &ToolInvocation, client: &HostClient) -> String {
    let Some(session_id) = invocation.session_id.as_deref() else {
        return "Error setting session data: invocation carries no session id".to_string();
    };
    let Some(title) = invocation.args.title.as_deref() else {
        return "Error setting session data: no title provided".to_string();
    };
    match client.update_title(session_id, title) {
        Ok(_) => format!("Updated title of session {session_id} to \"{title}\""),
        Err(e) => format!("Error setting session data: {e}"),
    }
}
