use crate::command::{Command, CommandResult, HandlerResult};
use crate::context::ShellContext;
use crate::error::ShellError;
use crate::vfs::{format_size, VfsNode};

pub struct LsCommand;

fn long_line(node: &VfsNode) -> String {
    let mark = if node.is_user_created() { " *" } else { "" };
    format!(
        "{} 1 user user {:>8} {} {} {}{}",
        node.permissions(),
        format_size(node.size()),
        node.modified_label(),
        node.icon(),
        node.name(),
        mark
    )
}

fn short_entry(node: &VfsNode) -> String {
    let mark = if node.is_user_created() { "*" } else { "" };
    format!("{} {}{}", node.icon(), node.name(), mark)
}

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn description(&self) -> &'static str {
        "List directory contents"
    }

    fn usage(&self) -> &'static str {
        "ls [-l] [-a] [directory]"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["dir"]
    }

    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> HandlerResult {
        let mut long = false;
        let mut target: Option<&str> = None;
        for arg in args {
            match arg.as_str() {
                "-l" | "--long" => long = true,
                // dot names are always listed, -a is accepted for muscle memory
                "-a" | "--all" => {}
                "-la" | "-al" => long = true,
                other if target.is_none() => target = Some(other),
                _ => {}
            }
        }

        let dir = match target {
            None => ctx.vfs.current_dir(),
            Some(path) => match ctx.vfs.node_at(path) {
                Some(node) if node.is_dir() => node,
                Some(_) => return Err(ShellError::NotADirectory(path.to_string())),
                None => return Err(ShellError::NotFound(format!("Directory not found: {}", path))),
            },
        };

        let entries: Vec<&VfsNode> = dir.children().iter().collect();
        if entries.is_empty() {
            return Ok(CommandResult::Output("📁 Directory is empty".to_string()));
        }

        if long {
            let mut lines = vec![format!("total {}", entries.len())];
            lines.extend(entries.iter().map(|n| long_line(n)));
            return Ok(CommandResult::Output(lines.join("\n")));
        }

        let items: Vec<String> = entries.iter().map(|n| short_entry(n)).collect();
        Ok(CommandResult::Output(items.join("  ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{args, ctx};

    #[test]
    fn short_listing_keeps_insertion_order() {
        let mut ctx = ctx();
        let out = LsCommand.execute(&[], &mut ctx).unwrap();
        assert_eq!(
            out,
            CommandResult::Output(
                "📄 about.txt  📁 projects  📁 infrastructure  📁 logs  📁 devices  📁 scripts".to_string()
            )
        );
    }

    #[test]
    fn long_listing_has_total_and_columns() {
        let mut ctx = ctx();
        ctx.vfs.set_current_path("/scripts");
        let text = LsCommand.execute(&args(&["-l"]), &mut ctx).unwrap().text().unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "total 2");
        assert!(lines[1].starts_with("-rwxr-xr-x 1 user user "));
        assert!(lines[1].ends_with("2025-01-14 16:20 📄 deploy.sh"));
    }

    #[test]
    fn user_entries_are_marked() {
        let mut ctx = ctx();
        ctx.vfs.create_directory("scratch", None).unwrap();
        ctx.vfs.set_current_path("/scratch");
        assert_eq!(LsCommand.execute(&[], &mut ctx).unwrap().text().unwrap(), "📁 Directory is empty");
        ctx.vfs.create_file("a.txt", "", None).unwrap();
        assert_eq!(LsCommand.execute(&[], &mut ctx).unwrap().text().unwrap(), "📄 a.txt*");
        let long = LsCommand.execute(&args(&["--long"]), &mut ctx).unwrap().text().unwrap();
        assert!(long.contains("      0B "));
        assert!(long.ends_with("📄 a.txt *"));
    }

    #[test]
    fn dot_files_are_listed_without_flags() {
        let mut ctx = ctx();
        ctx.vfs.create_directory("box", None).unwrap();
        ctx.vfs.set_current_path("/box");
        ctx.vfs.create_file(".env", "", None).unwrap();
        assert_eq!(LsCommand.execute(&[], &mut ctx).unwrap().text().unwrap(), "📄 .env*");
        let long = LsCommand.execute(&args(&["-l"]), &mut ctx).unwrap().text().unwrap();
        assert!(long.starts_with("total 1\n"));
        assert!(long.ends_with("📄 .env *"));
        let all = LsCommand.execute(&args(&["-la"]), &mut ctx).unwrap().text().unwrap();
        assert_eq!(all, long);
    }

    #[test]
    fn lists_an_explicit_directory() {
        let mut ctx = ctx();
        let out = LsCommand.execute(&args(&["logs"]), &mut ctx).unwrap().text().unwrap();
        assert_eq!(out, "📄 security.log  📄 system.log  📄 deployment.log");
        assert!(matches!(LsCommand.execute(&args(&["about.txt"]), &mut ctx), Err(ShellError::NotADirectory(_))));
        assert!(matches!(LsCommand.execute(&args(&["nope"]), &mut ctx), Err(ShellError::NotFound(_))));
    }
}
