//! Tool invocation parsing from stdin.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::{self, Read};

/// Name of the shell execution tool.
pub const BASH_TOOL: &str = "bash";

/// One tool invocation as delivered by the host framework.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolInvocation {
    /// The name of the tool being called (e.g., "bash", "get-metadata")
    #[serde(default)]
    pub tool: String,

    /// Tool-specific arguments
    #[serde(default)]
    pub args: ToolArgs,

    /// Session identifier assigned by the host
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    /// Workspace root the session runs in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,

    /// Additional fields, passed through untouched
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Tool arguments. A union of the fields the plugin's tools understand;
/// anything else rides along in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolArgs {
    /// Command for the bash tool
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// New title for set-session-data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Caller-supplied document for set-metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,

    /// Additional fields, passed through untouched
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl ToolInvocation {
    /// Read and parse one invocation from stdin.
    pub fn from_stdin() -> anyhow::Result<Self> {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        let parsed: ToolInvocation = serde_json::from_str(&input)?;
        Ok(parsed)
    }

    /// Check if this invokes the shell execution tool.
    pub fn is_bash(&self) -> bool {
        self.tool == BASH_TOOL
    }

    /// Get the command if this is a bash invocation.
    pub fn command(&self) -> Option<&str> {
        self.args.command.as_deref()
    }
}
