use crate::command::{Command, CommandResult, HandlerResult};
use crate::context::ShellContext;
use crate::error::ShellError;

pub struct TouchCommand;

impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn description(&self) -> &'static str {
        "Create empty file"
    }

    fn usage(&self) -> &'static str {
        "touch <filename>"
    }

    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> HandlerResult {
        let name = args.first().ok_or_else(|| ShellError::Usage(self.usage().to_string()))?;
        let message = ctx.vfs.create_file(name, "", None)?;
        Ok(CommandResult::SystemNotice(format!("📄 {}", message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{args, ctx};

    #[test]
    fn creates_an_empty_user_file() {
        let mut ctx = ctx();
        let out = TouchCommand.execute(&args(&["notes.txt"]), &mut ctx).unwrap();
        assert_eq!(out, CommandResult::SystemNotice("📄 File created: notes.txt".into()));
        let node = ctx.vfs.node_at("/notes.txt").unwrap();
        assert_eq!(node.size(), 0);
        assert!(node.is_user_created());
    }

    #[test]
    fn refuses_to_touch_existing_files() {
        let mut ctx = ctx();
        let before = ctx.vfs.root().clone();
        assert_eq!(
            TouchCommand.execute(&args(&["about.txt"]), &mut ctx),
            Err(ShellError::AlreadyExists("File already exists: about.txt".into()))
        );
        assert_eq!(ctx.vfs.root(), &before);
    }
}
