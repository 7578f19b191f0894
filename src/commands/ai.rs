//! Chat mode toggles. The session layer owns the mode, these only ask for it.

use crate::command::{Command, CommandResult, HandlerResult, Mode};
use crate::context::ShellContext;

pub struct ConnectCommand;

impl Command for ConnectCommand {
    fn name(&self) -> &'static str {
        "connect"
    }

    fn description(&self) -> &'static str {
        "Connect to AI assistant"
    }

    fn usage(&self) -> &'static str {
        "connect ai"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["ai"]
    }

    fn execute(&self, _args: &[String], _ctx: &mut ShellContext) -> HandlerResult {
        Ok(CommandResult::ModeSwitch(Mode::EnterChat))
    }
}

pub struct DisconnectCommand;

impl Command for DisconnectCommand {
    fn name(&self) -> &'static str {
        "disconnect"
    }

    fn description(&self) -> &'static str {
        "Disconnect from AI assistant"
    }

    fn usage(&self) -> &'static str {
        "disconnect ai"
    }

    fn execute(&self, _args: &[String], _ctx: &mut ShellContext) -> HandlerResult {
        Ok(CommandResult::ModeSwitch(Mode::ExitChat))
    }
}
