use serde::{Deserialize, Serialize};

use crate::command::CommandInfo;
use crate::error::{ShellError, ShellResult};
use crate::vfs::{VirtualFileSystem, DEFAULT_PATH_HISTORY};

/// Knobs the host page can pass in; anything missing keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShellOptions {
    pub prompt: String,
    pub suggestion_limit: usize,
    pub path_history_limit: usize,
    pub history_limit: usize,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            prompt: ">".to_string(),
            suggestion_limit: 8,
            path_history_limit: DEFAULT_PATH_HISTORY,
            history_limit: 200,
        }
    }
}

/// Cosmetic only: decides which strings get printed, nothing is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessLevel {
    #[default]
    Visitor,
    Administrator,
}

impl AccessLevel {
    pub fn label(self) -> &'static str {
        match self {
            AccessLevel::Visitor => "Visitor",
            AccessLevel::Administrator => "Administrator",
        }
    }
}

/// Everything a command handler can touch during one `execute`.
pub struct ShellContext {
    pub vfs: VirtualFileSystem,
    pub access: AccessLevel,
    pub firewall_active: bool,
    /// set once `system status` has been looked at
    pub monitoring_active: bool,
    pub history: Vec<String>,
    pub options: ShellOptions,
    /// filled in by the shell so `help` can list what is registered
    pub catalog: Vec<CommandInfo>,
}

impl ShellContext {
    pub fn new(options: ShellOptions) -> Self {
        Self::new_with_vfs(VirtualFileSystem::default(), options)
    }

    pub fn new_with_vfs(vfs: VirtualFileSystem, options: ShellOptions) -> Self {
        Self {
            vfs: vfs.with_history_limit(options.path_history_limit),
            access: AccessLevel::Visitor,
            firewall_active: false,
            monitoring_active: false,
            history: Vec::new(),
            options,
            catalog: Vec::new(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.access == AccessLevel::Administrator
    }

    /// Gate for the advanced commands.
    pub fn require_admin(&self) -> ShellResult<()> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(ShellError::AccessDenied(
                "Administrator privileges required.\nUse \"sudo elevate\" to gain access.".to_string(),
            ))
        }
    }

    pub fn record_history(&mut self, line: &str) {
        self.history.push(line.to_string());
        let limit = self.options.history_limit.max(1);
        if self.history.len() > limit {
            let excess = self.history.len() - limit;
            self.history.drain(..excess);
        }
    }
}

impl Default for ShellContext {
    fn default() -> Self {
        Self::new(ShellOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_fill_missing_fields_with_defaults() {
        let opts: ShellOptions = serde_json::from_str(r#"{ "suggestionLimit": 3 }"#).unwrap();
        assert_eq!(opts.suggestion_limit, 3);
        assert_eq!(opts.history_limit, 200);
        assert_eq!(opts.prompt, ">");
    }

    #[test]
    fn history_drops_oldest_entries() {
        let mut ctx = ShellContext::new(ShellOptions { history_limit: 2, ..ShellOptions::default() });
        for line in ["ls", "pwd", "tree"] {
            ctx.record_history(line);
        }
        assert_eq!(ctx.history, ["pwd", "tree"]);
    }

    #[test]
    fn admin_gate_follows_access_level() {
        let mut ctx = ShellContext::default();
        assert_eq!(ctx.require_admin().unwrap_err().kind(), "access_denied");
        ctx.access = AccessLevel::Administrator;
        assert!(ctx.require_admin().is_ok());
    }
}
