use crate::command::{Command, CommandResult, HandlerResult};
use crate::context::ShellContext;
use crate::error::ShellError;

pub struct MkdirCommand;

impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn description(&self) -> &'static str {
        "Create directory"
    }

    fn usage(&self) -> &'static str {
        "mkdir <directory_name>"
    }

    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> HandlerResult {
        let name = args.first().ok_or_else(|| ShellError::Usage(self.usage().to_string()))?;
        let message = ctx.vfs.create_directory(name, None)?;
        Ok(CommandResult::SystemNotice(format!("📁 {}", message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{args, ctx};

    #[test]
    fn creates_under_the_cursor() {
        let mut ctx = ctx();
        ctx.vfs.set_current_path("/projects");
        let out = MkdirCommand.execute(&args(&["drafts"]), &mut ctx).unwrap();
        assert_eq!(out, CommandResult::SystemNotice("📁 Directory created: drafts".into()));
        assert!(ctx.vfs.node_at("/projects/drafts").is_some_and(|n| n.is_dir() && n.is_user_created()));
    }

    #[test]
    fn propagates_create_failures() {
        let mut ctx = ctx();
        assert_eq!(MkdirCommand.execute(&[], &mut ctx), Err(ShellError::Usage("mkdir <directory_name>".into())));
        assert_eq!(
            MkdirCommand.execute(&args(&["logs"]), &mut ctx),
            Err(ShellError::AlreadyExists("Directory already exists: logs".into()))
        );
        assert_eq!(
            MkdirCommand.execute(&args(&["no/slash"]), &mut ctx),
            Err(ShellError::InvalidName("Invalid directory name: no/slash".into()))
        );
    }
}
