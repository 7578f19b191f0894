use crate::command::{Command, CommandResult, HandlerResult};
use crate::context::ShellContext;
use crate::error::ShellError;
use crate::vfs::SEPARATOR;

pub struct RmCommand;

impl Command for RmCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn description(&self) -> &'static str {
        "Delete file or directory"
    }

    fn usage(&self) -> &'static str {
        "rm <filename_or_directory>"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["del", "delete"]
    }

    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> HandlerResult {
        let name = args.first().ok_or_else(|| ShellError::Usage(self.usage().to_string()))?;
        if name == SEPARATOR || name == "." || name == ".." {
            return Err(ShellError::Protected("Cannot delete system directories".to_string()));
        }
        let message = ctx.vfs.delete_entry(name, None)?;
        Ok(CommandResult::SystemNotice(format!("🗑️  {}", message)))
    }
}
