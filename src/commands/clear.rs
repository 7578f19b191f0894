use crate::command::{Command, CommandResult, HandlerResult};
use crate::context::ShellContext;

pub struct ClearCommand;

impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn description(&self) -> &'static str {
        "Clear terminal screen"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["cls"]
    }

    fn execute(&self, _args: &[String], _ctx: &mut ShellContext) -> HandlerResult {
        // the page wipes its own scrollback
        Ok(CommandResult::Clear)
    }
}
