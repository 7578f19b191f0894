use crate::command::{Command, CommandResult, HandlerResult};
use crate::context::ShellContext;

pub struct PwdCommand;

impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn description(&self) -> &'static str {
        "Print working directory"
    }

    fn execute(&self, _args: &[String], ctx: &mut ShellContext) -> HandlerResult {
        Ok(CommandResult::Output(format!("📍 Current directory: {}", ctx.vfs.current_path())))
    }
}
