//! Shell command annotation with session environment exports.
//!
//! Prepends a fixed block of `export` statements, bounded by sentinel
//! comment lines, to outbound bash commands. The start sentinel is the
//! sole idempotency signal: commands that already carry it pass through
//! unchanged.

/// First line of the injected block; its presence marks a command as
/// already annotated.
pub const ENV_BLOCK_START: &str = "# --- session env start ---";

/// Last line of the injected block.
pub const ENV_BLOCK_END: &str = "# --- session env end ---";

/// Values exported into the command's environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEnv {
    /// Session identifier assigned by the host
    pub session_id: String,
    /// Workspace root directory the session runs in
    pub workspace_dir: String,
    /// Address of the local host API server
    pub server_url: String,
}

impl SessionEnv {
    /// Render the export block, sentinels included.
    pub fn render(&self) -> String {
        format!(
            "{ENV_BLOCK_START}\n\
             export AGENT_SESSION_ID={}\n\
             export AGENT_WORKSPACE_DIR={}\n\
             export AGENT_SERVER_URL={}\n\
             {ENV_BLOCK_END}",
            shell_quote(&self.session_id),
            shell_quote(&self.workspace_dir),
            shell_quote(&self.server_url),
        )
    }
}

/// Prepend the export block to `command`, unless it is already annotated.
///
/// The transformation is purely textual: the original command text is
/// appended verbatim after the block, so its own quoting is never altered.
pub fn annotate_command(command: &str, env: &SessionEnv) -> String {
    if command.contains(ENV_BLOCK_START) {
        return command.to_string();
    }
    format!("{}\n{}", env.render(), command)
}

/// Whether the current platform hands commands to a POSIX-style shell.
/// Inline `export` syntax does not survive cmd.exe/PowerShell, so
/// annotation is skipped entirely on Windows.
pub fn shell_is_posix() -> bool {
    !cfg!(windows)
}

/// Single-quote a value for POSIX shells, escaping embedded quotes.
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
