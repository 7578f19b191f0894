use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::context::ShellContext;
use crate::error::{ShellError, ShellResult};

/// How a single animation frame should be styled by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameStyle {
    #[default]
    Output,
    System,
    Error,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationFrame {
    pub text: String,
    pub delay_ms: u32,
    pub style: FrameStyle,
}

impl AnimationFrame {
    pub fn new(text: &str, delay_ms: u32, style: FrameStyle) -> Self {
        Self { text: text.to_string(), delay_ms, style }
    }

    pub fn system(text: &str, delay_ms: u32) -> Self {
        Self::new(text, delay_ms, FrameStyle::System)
    }

    pub fn output(text: &str, delay_ms: u32) -> Self {
        Self::new(text, delay_ms, FrameStyle::Output)
    }

    pub fn error(text: &str, delay_ms: u32) -> Self {
        Self::new(text, delay_ms, FrameStyle::Error)
    }

    pub fn blank(delay_ms: u32) -> Self {
        Self::new("", delay_ms, FrameStyle::Output)
    }
}

/// Tags for the outer session; the shell itself never acts on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    EnterChat,
    ExitChat,
}

/// What one command line produced, ready for the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CommandResult {
    Output(String),
    SystemNotice(String),
    Error(ShellError),
    Clear,
    AnimatedOutput(Vec<AnimationFrame>),
    ModeSwitch(Mode),
    Exit,
}

impl CommandResult {
    pub fn is_error(&self) -> bool {
        matches!(self, CommandResult::Error(_))
    }

    /// Plain text for the variants that carry some.
    pub fn text(&self) -> Option<String> {
        match self {
            CommandResult::Output(text) | CommandResult::SystemNotice(text) => Some(text.clone()),
            CommandResult::Error(err) => Some(err.render()),
            _ => None,
        }
    }
}

pub type HandlerResult = ShellResult<CommandResult>;

pub trait Command {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn usage(&self) -> &'static str {
        self.name()
    }
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }
    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> HandlerResult;
}

/// Name, description and aliases of a registered command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandInfo {
    pub name: String,
    pub description: String,
    pub usage: String,
    pub aliases: Vec<String>,
}

/// Commands in registration order; that order drives help and suggestions.
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command + Send + Sync>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self { commands: Vec::new() }
    }

    pub fn register_command(&mut self, cmd: Box<dyn Command + Send + Sync>) {
        self.commands.push(cmd);
    }

    /// Case-insensitive: canonical names win over aliases.
    pub fn get(&self, token: &str) -> Option<&(dyn Command + Send + Sync)> {
        let wanted = token.to_lowercase();
        self.commands
            .iter()
            .find(|c| c.name().to_lowercase() == wanted)
            .or_else(|| {
                self.commands
                    .iter()
                    .find(|c| c.aliases().iter().any(|a| a.to_lowercase() == wanted))
            })
            .map(|c| c.as_ref())
    }

    /// Names and aliases related to `token` by prefix in either direction.
    pub fn suggestions(&self, token: &str, limit: usize) -> Vec<String> {
        let wanted = token.to_lowercase();
        let related = |candidate: &str| {
            let candidate = candidate.to_lowercase();
            candidate.starts_with(&wanted) || wanted.starts_with(&candidate)
        };
        let mut out = Vec::new();
        for cmd in &self.commands {
            if related(cmd.name()) {
                out.push(cmd.name().to_string());
            }
            out.extend(cmd.aliases().iter().filter(|a| related(a)).map(|a| a.to_string()));
        }
        out.truncate(limit);
        out
    }

    pub fn catalog(&self) -> Vec<CommandInfo> {
        self.commands
            .iter()
            .map(|c| CommandInfo {
                name: c.name().to_string(),
                description: c.description().to_string(),
                usage: c.usage().to_string(),
                aliases: c.aliases().iter().map(|a| a.to_string()).collect(),
            })
            .collect()
    }

    pub fn get_command_names(&self) -> Vec<String> {
        self.commands.iter().map(|c| c.name().to_string()).collect()
    }

    /// The virtual file system commands only.
    pub fn file_system_commands() -> Self {
        use crate::commands::*;
        let mut reg = Self::new();
        reg.register_command(Box::new(ls::LsCommand));
        reg.register_command(Box::new(cd::CdCommand));
        reg.register_command(Box::new(pwd::PwdCommand));
        reg.register_command(Box::new(cat::CatCommand));
        reg.register_command(Box::new(tree::TreeCommand));
        reg.register_command(Box::new(mkdir::MkdirCommand));
        reg.register_command(Box::new(touch::TouchCommand));
        reg.register_command(Box::new(rm::RmCommand));
        reg.register_command(Box::new(reset::ResetCommand));
        reg.register_command(Box::new(find::FindCommand));
        reg.register_command(Box::new(grep::GrepCommand));
        reg.register_command(Box::new(head::HeadCommand));
        reg.register_command(Box::new(head::TailCommand));
        reg.register_command(Box::new(wc::WcCommand));
        reg.register_command(Box::new(file::FileCommand));
        reg.register_command(Box::new(echo::EchoCommand));
        reg
    }

    /// File system commands plus the sandbox extras (help, sudo, chat mode...).
    pub fn default_commands() -> Self {
        use crate::commands::*;
        let mut reg = Self::new();
        reg.register_command(Box::new(help::HelpCommand));
        reg.register_command(Box::new(whoami::WhoamiCommand));
        reg.register_command(Box::new(stack::StackCommand));
        reg.register_command(Box::new(experience::ExperienceCommand));
        reg.register_command(Box::new(iot::IotCommand));
        reg.register_command(Box::new(architecture::ArchitectureCommand));
        reg.register_command(Box::new(deploy::DeployCommand));
        reg.register_command(Box::new(sudo::SudoCommand));
        reg.register_command(Box::new(scan::ScanCommand));
        reg.register_command(Box::new(system::SystemCommand));
        reg.register_command(Box::new(list::ListCommand));
        reg.register_command(Box::new(ping::PingCommand));
        reg.register_command(Box::new(view::ViewCommand));
        reg.register_command(Box::new(enable::EnableCommand));
        reg.register_command(Box::new(security::SecurityCommand));
        reg.register_command(Box::new(show::ShowCommand));
        reg.register_command(Box::new(history::HistoryCommand));
        reg.register_command(Box::new(clear::ClearCommand));
        reg.register_command(Box::new(exit::ExitCommand));
        reg.register_command(Box::new(ai::ConnectCommand));
        reg.register_command(Box::new(ai::DisconnectCommand));
        // file system last so its names come after the extras in suggestions
        for cmd in Self::file_system_commands().commands {
            reg.register_command(cmd);
        }
        reg
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::default_commands()
    }
}

/// Drops one leading and one trailing quote character, each independently.
pub fn strip_wrapping_quotes(text: &str) -> &str {
    let text = text.strip_prefix(['"', '\'']).unwrap_or(text);
    text.strip_suffix(['"', '\'']).unwrap_or(text)
}

/// `sudo elevate`, `show attack simulation`: leading args equal `words`, ignoring case.
pub fn subcommand_is(args: &[String], words: &[&str]) -> bool {
    args.len() >= words.len() && args.iter().zip(words).all(|(a, w)| a.eq_ignore_ascii_case(w))
}

/// Case-insensitive literal matcher; the pattern is never treated as a regex.
pub fn literal_matcher(pattern: &str) -> ShellResult<Regex> {
    RegexBuilder::new(&regex::escape(pattern))
        .case_insensitive(true)
        .build()
        .map_err(|e| ShellError::Usage(format!("bad pattern '{}': {}", pattern, e)))
}

/// Shared guard for handlers that take a file argument.
pub fn read_text_file<'a>(ctx: &'a ShellContext, filename: &str) -> ShellResult<&'a str> {
    match ctx.vfs.node_at(filename) {
        Some(crate::vfs::VfsNode::File { content, .. }) => Ok(content),
        Some(_) => Err(ShellError::IsADirectory(filename.to_string())),
        None => Err(ShellError::NotFound(format!("File not found: {}", filename))),
    }
}
