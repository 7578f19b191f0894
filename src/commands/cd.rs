use crate::command::{Command, CommandResult, HandlerResult};
use crate::context::ShellContext;
use crate::error::ShellError;
use crate::vfs::SEPARATOR;

pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn description(&self) -> &'static str {
        "Change directory"
    }

    fn usage(&self) -> &'static str {
        "cd [directory]"
    }

    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> HandlerResult {
        let Some(target) = args.first() else {
            // no args goes back to root
            ctx.vfs.set_current_path(SEPARATOR);
            return Ok(CommandResult::SystemNotice("📁 Changed to root directory".to_string()));
        };

        let resolved = ctx.vfs.resolve_path(target);
        match ctx.vfs.node_at(&resolved) {
            Some(node) if node.is_dir() => {}
            Some(_) => return Err(ShellError::NotADirectory(target.clone())),
            None => return Err(ShellError::NotFound(format!("Directory not found: {}", target))),
        }

        ctx.vfs.set_current_path(&resolved);
        Ok(CommandResult::SystemNotice(format!("📁 Changed directory to: {}", resolved)))
    }
}
