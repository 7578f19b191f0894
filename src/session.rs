use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::command::{AnimationFrame, CommandResult, Mode};
use crate::context::ShellOptions;
use crate::shell::CommandShell;

/// What became of one submitted line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Submission {
    /// blank line, or input arrived while booting / after close
    Ignored,
    Result(CommandResult),
    /// chat mode is on; the host forwards this text to the assistant
    ChatMessage(String),
    Closed,
}

// these leave chat mode instead of being forwarded
const CHAT_EXITS: &[&str] = &["disconnect ai", "exit ai"];

/// One visitor's terminal: the shell plus prompt-level state (history
/// navigation, chat mode, boot and close flags).
pub struct ShellSession {
    id: Uuid,
    shell: CommandShell,
    cursor: Option<usize>,
    chat_mode: bool,
    booting: bool,
    closed: bool,
}

impl ShellSession {
    pub fn new(options: ShellOptions) -> Self {
        let id = Uuid::new_v4();
        tracing::debug!(%id, "session started");
        Self {
            id,
            shell: CommandShell::new(options),
            cursor: None,
            chat_mode: false,
            booting: false,
            closed: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn shell(&self) -> &CommandShell {
        &self.shell
    }

    pub fn shell_mut(&mut self) -> &mut CommandShell {
        &mut self.shell
    }

    pub fn is_chat_mode(&self) -> bool {
        self.chat_mode
    }

    pub fn is_booting(&self) -> bool {
        self.booting
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn history(&self) -> &[String] {
        &self.shell.context().history
    }

    pub fn submit(&mut self, line: &str) -> Submission {
        let line = line.trim();
        if line.is_empty() || self.booting || self.closed {
            return Submission::Ignored;
        }

        self.shell.context_mut().record_history(line);
        self.cursor = None;

        if self.chat_mode {
            let normalized = line.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
            if !CHAT_EXITS.contains(&normalized.as_str()) {
                return Submission::ChatMessage(line.to_string());
            }
        }

        let Some(result) = self.shell.execute(line) else {
            return Submission::Ignored;
        };
        match &result {
            CommandResult::ModeSwitch(Mode::EnterChat) => self.chat_mode = true,
            CommandResult::ModeSwitch(Mode::ExitChat) => self.chat_mode = false,
            CommandResult::Exit => {
                self.closed = true;
                self.chat_mode = false;
                tracing::debug!(id = %self.id, "session closed");
                return Submission::Closed;
            }
            _ => {}
        }
        Submission::Result(result)
    }

    /// Older entry, like pressing the up arrow. `None` when there is no history.
    pub fn history_up(&mut self) -> Option<String> {
        let history = &self.shell.context().history;
        if history.is_empty() {
            return None;
        }
        let next = match self.cursor {
            None => history.len() - 1,
            Some(i) => i.min(history.len() - 1).saturating_sub(1),
        };
        self.cursor = Some(next);
        history.get(next).cloned()
    }

    /// Newer entry; stepping past the newest gives back an empty prompt.
    pub fn history_down(&mut self) -> String {
        let history = &self.shell.context().history;
        match self.cursor {
            Some(i) if i + 1 < history.len() => {
                self.cursor = Some(i + 1);
                history[i + 1].clone()
            }
            _ => {
                self.cursor = None;
                String::new()
            }
        }
    }

    /// Starts the boot sequence; input is ignored until `finish_boot`.
    pub fn boot_frames(&mut self) -> Vec<AnimationFrame> {
        self.booting = true;
        let access = format!("Access level: {}", self.shell.context().access.label());
        vec![
            AnimationFrame::system("🚀 SECURITY SANDBOX INITIALIZING...", 300),
            AnimationFrame::system("⚡ Loading security modules...", 200),
            AnimationFrame::system("🔧 Initializing terminal engine...", 200),
            AnimationFrame::system("🗂️  Mounting virtual file system...", 200),
            AnimationFrame::system("📁 Loading project directories...", 200),
            AnimationFrame::system("🔒 Security protocols active...", 200),
            AnimationFrame::blank(100),
            AnimationFrame::system("Authenticating user...", 400),
            AnimationFrame::system(&access, 200),
            AnimationFrame::blank(100),
            AnimationFrame::system("✅ Interactive Security Sandbox ready!", 300),
            AnimationFrame::system("📁 File system mounted: /projects /infrastructure /logs /devices", 200),
            AnimationFrame::blank(100),
            AnimationFrame::system("💡 Type \"help\" to see available commands.", 0),
            AnimationFrame::system("🗂️  Type \"ls\" to explore the file system.", 0),
            AnimationFrame::system("🔐 Use \"sudo elevate\" to unlock advanced features.", 0),
        ]
    }

    pub fn finish_boot(&mut self) {
        self.booting = false;
    }
}

impl Default for ShellSession {
    fn default() -> Self {
        Self::new(ShellOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_not_history() {
        let mut session = ShellSession::default();
        assert_eq!(session.submit("   "), Submission::Ignored);
        assert!(session.history().is_empty());
        session.submit("pwd");
        assert_eq!(session.history(), ["pwd"]);
    }

    #[test]
    fn unknown_commands_are_still_recorded() {
        let mut session = ShellSession::default();
        let out = session.submit("nope");
        assert!(matches!(out, Submission::Result(ref r) if r.is_error()));
        assert_eq!(session.history(), ["nope"]);
    }

    #[test]
    fn history_navigation_walks_both_ways() {
        let mut session = ShellSession::default();
        assert_eq!(session.history_up(), None);
        for line in ["ls", "pwd", "tree"] {
            session.submit(line);
        }
        assert_eq!(session.history_up().as_deref(), Some("tree"));
        assert_eq!(session.history_up().as_deref(), Some("pwd"));
        assert_eq!(session.history_up().as_deref(), Some("ls"));
        assert_eq!(session.history_up().as_deref(), Some("ls"));
        assert_eq!(session.history_down(), "pwd");
        assert_eq!(session.history_down(), "tree");
        assert_eq!(session.history_down(), "");
        assert_eq!(session.history_up().as_deref(), Some("tree"));
    }

    #[test]
    fn chat_mode_forwards_until_left() {
        let mut session = ShellSession::default();
        assert_eq!(session.submit("connect ai"), Submission::Result(CommandResult::ModeSwitch(Mode::EnterChat)));
        assert!(session.is_chat_mode());
        assert_eq!(session.submit("ls -l"), Submission::ChatMessage("ls -l".into()));
        assert_eq!(
            session.submit("  Exit   AI "),
            Submission::Result(CommandResult::ModeSwitch(Mode::ExitChat))
        );
        assert!(!session.is_chat_mode());
        assert!(matches!(session.submit("ls"), Submission::Result(CommandResult::Output(_))));
    }

    #[test]
    fn ai_alias_and_disconnect() {
        let mut session = ShellSession::default();
        session.submit("ai");
        assert!(session.is_chat_mode());
        session.submit("disconnect ai");
        assert!(!session.is_chat_mode());
    }

    #[test]
    fn exit_closes_the_session() {
        let mut session = ShellSession::default();
        assert_eq!(session.submit("quit"), Submission::Closed);
        assert!(session.is_closed());
        assert_eq!(session.submit("ls"), Submission::Ignored);
    }

    #[test]
    fn boot_blocks_input_until_finished() {
        let mut session = ShellSession::default();
        let frames = session.boot_frames();
        assert!(frames.iter().any(|f| f.text == "Access level: Visitor"));
        assert_eq!(session.submit("ls"), Submission::Ignored);
        session.finish_boot();
        assert!(matches!(session.submit("ls"), Submission::Result(_)));
    }

    #[test]
    fn sessions_have_distinct_ids() {
        assert_ne!(ShellSession::default().id(), ShellSession::default().id());
    }
}
