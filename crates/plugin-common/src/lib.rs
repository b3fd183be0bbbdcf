//! Common utilities for the session plugin binaries.
//!
//! This crate provides the pieces shared by all tools and hooks:
//! - JSON invocation parsing from stdin
//! - Shell command annotation with session environment exports
//! - Host session API client

pub mod annotate;
pub mod host;
pub mod invocation;

pub use annotate::{SessionEnv, annotate_command, shell_is_posix};
pub use host::{HostClient, HostError};
pub use invocation::{ToolArgs, ToolInvocation};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::annotate::{SessionEnv, annotate_command, shell_is_posix};
    pub use crate::host::{DEFAULT_SERVER_URL, HostClient, HostError};
    pub use crate::invocation::{ToolArgs, ToolInvocation};
    pub use anyhow::{Context, Result};
    pub use serde::{Deserialize, Serialize};
}
