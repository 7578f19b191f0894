use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Everything a command can fail with. Expected failures are returned by the
/// handlers; `Internal` is only produced by the shell's panic guard.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum ShellError {
    #[error("Usage: {0}")]
    Usage(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    #[error("{0} is a directory")]
    IsADirectory(String),

    #[error("{0}")]
    AlreadyExists(String),

    #[error("{0}")]
    InvalidName(String),

    #[error("{0}")]
    Protected(String),

    #[error("Access denied. {0}")]
    AccessDenied(String),

    #[error("Command not found: \"{input}\"")]
    UnknownCommand {
        input: String,
        suggestions: Vec<String>,
    },

    #[error("Command error: {0}")]
    Internal(String),
}

impl ShellError {
    /// Stable tag for the rendering layer and tests.
    pub fn kind(&self) -> &'static str {
        match self {
            ShellError::Usage(_) => "usage",
            ShellError::NotFound(_) => "not_found",
            ShellError::NotADirectory(_) | ShellError::IsADirectory(_) => "type_mismatch",
            ShellError::AlreadyExists(_) => "already_exists",
            ShellError::InvalidName(_) => "invalid_name",
            ShellError::Protected(_) => "protected",
            ShellError::AccessDenied(_) => "access_denied",
            ShellError::UnknownCommand { .. } => "unknown_command",
            ShellError::Internal(_) => "internal",
        }
    }

    /// Full text block shown in the terminal, including suggestions.
    pub fn render(&self) -> String {
        match self {
            ShellError::UnknownCommand { suggestions, .. } => {
                let mut out = format!("❌ {}", self);
                if !suggestions.is_empty() {
                    out.push_str(&format!("\n\n💡 Did you mean: {}?", suggestions.join(", ")));
                }
                out.push_str("\n\nType \"help\" for available commands.");
                out
            }
            _ => format!("❌ {}", self),
        }
    }
}

pub type ShellResult<T> = Result<T, ShellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_command_lists_suggestions() {
        let err = ShellError::UnknownCommand {
            input: "lsdir".to_string(),
            suggestions: vec!["ls".to_string()],
        };
        let text = err.render();
        assert!(text.starts_with("❌ Command not found: \"lsdir\""));
        assert!(text.contains("Did you mean: ls?"));
        assert_eq!(err.kind(), "unknown_command");
    }

    #[test]
    fn type_mismatch_variants_share_a_kind() {
        assert_eq!(ShellError::IsADirectory("logs".into()).kind(), "type_mismatch");
        assert_eq!(ShellError::NotADirectory("about.txt".into()).kind(), "type_mismatch");
        assert_eq!(ShellError::IsADirectory("logs".into()).to_string(), "logs is a directory");
    }
}
