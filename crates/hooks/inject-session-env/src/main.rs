//! Pre-execution hook: inject session environment exports into bash commands.
//!
//! Reads the tool invocation from stdin and echoes it back to stdout,
//! with `args.command` rewritten to carry the session export block.
//! Non-bash tools, already-annotated commands, and non-POSIX platforms
//! pass through byte-for-byte.

use anyhow::Result;
use plugin_common::prelude::*;

fn main() -> Result<()> {
    let invocation = ToolInvocation::from_stdin()?;
    let rewritten = rewrite(invocation, shell_is_posix());
    println!("{}", serde_json::to_string(&rewritten)?);
    Ok(())
}

fn rewrite(mut invocation: ToolInvocation, posix_shell: bool) -> ToolInvocation {
    if !posix_shell || !invocation.is_bash() {
        return invocation;
    }
    let Some(session_id) = invocation.session_id.clone() else {
        return invocation;
    };
    let Some(command) = invocation.args.command.clone() else {
        return invocation;
    };

    let env = SessionEnv {
        session_id,
        workspace_dir: invocation.cwd.clone().unwrap_or_else(|| ".".to_string()),
        server_url: DEFAULT_SERVER_URL.to_string(),
    };
    invocation.args.command = Some(annotate_command(&command, &env));
    invocation
}
