use crate::command::{Command, CommandResult, HandlerResult};
use crate::context::ShellContext;
use crate::error::ShellError;

pub struct TreeCommand;

const TREE_LEGEND: &str = "💡 Files marked with * are user-created and can be deleted.";

impl Command for TreeCommand {
    fn name(&self) -> &'static str {
        "tree"
    }

    fn description(&self) -> &'static str {
        "Show directory tree"
    }

    fn usage(&self) -> &'static str {
        "tree [-L depth]"
    }

    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> HandlerResult {
        let max_depth = match args {
            [] => None,
            [flag, depth] if flag == "-L" => match depth.parse::<usize>() {
                Ok(n) if n > 0 => Some(n),
                _ => return Err(ShellError::Usage(self.usage().to_string())),
            },
            _ => return Err(ShellError::Usage(self.usage().to_string())),
        };

        let tree = ctx.vfs.render_tree_to(max_depth);
        Ok(CommandResult::Output(format!("🌳 Directory Tree Structure:\n\n{}\n\n{}", tree, TREE_LEGEND)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{args, ctx};

    #[test]
    fn renders_from_root_regardless_of_cursor() {
        let mut ctx = ctx();
        ctx.vfs.set_current_path("/logs");
        let text = TreeCommand.execute(&[], &mut ctx).unwrap().text().unwrap();
        assert!(text.starts_with("🌳 Directory Tree Structure:\n\n├── 📄 about.txt\n├── 📁 projects\n│   ├── 📄 portfolio.md"));
        assert!(text.contains("└── 📁 scripts\n    ├── 📄 deploy.sh\n    └── 📄 backup.sh"));
        assert!(text.ends_with(TREE_LEGEND));
    }

    #[test]
    fn depth_flag_limits_output() {
        let mut ctx = ctx();
        let text = TreeCommand.execute(&args(&["-L", "1"]), &mut ctx).unwrap().text().unwrap();
        assert!(!text.contains("portfolio.md"));
        assert!(text.contains("└── 📁 scripts"));
        assert!(matches!(TreeCommand.execute(&args(&["-L", "zero"]), &mut ctx), Err(ShellError::Usage(_))));
    }
}
