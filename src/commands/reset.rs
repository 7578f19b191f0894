use crate::command::{Command, CommandResult, HandlerResult};
use crate::context::ShellContext;

pub struct ResetCommand;

impl Command for ResetCommand {
    fn name(&self) -> &'static str {
        "reset"
    }

    fn description(&self) -> &'static str {
        "Reset file system to initial state"
    }

    fn execute(&self, _args: &[String], ctx: &mut ShellContext) -> HandlerResult {
        ctx.vfs.reset();
        Ok(CommandResult::SystemNotice(
            "🔄 File system reset to initial state. All user-created files and directories have been removed."
                .to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::ctx;
    use crate::seed::seeded_root;

    #[test]
    fn restores_seed_and_cursor() {
        let mut ctx = ctx();
        ctx.vfs.create_directory("a", None).unwrap();
        ctx.vfs.create_file("b.txt", "x", Some("/a")).unwrap();
        ctx.vfs.set_current_path("/a");
        ResetCommand.execute(&[], &mut ctx).unwrap();
        assert_eq!(ctx.vfs.root(), &seeded_root());
        assert_eq!(ctx.vfs.current_path(), "/");
    }
}
