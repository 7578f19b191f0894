use crate::command::{Command, CommandInfo, CommandResult, HandlerResult};
use crate::context::ShellContext;
use crate::error::ShellError;

/// help [COMMAND]
/// Lists what is registered, or the usage line of one command.
pub struct HelpCommand;

const INSPECT: &[&str] = &["ls", "cd", "pwd", "cat", "tree", "find", "grep", "head", "tail", "wc", "file"];
const MUTATE: &[&str] = &["mkdir", "touch", "rm", "reset", "echo"];
const SECURITY: &[&str] = &["sudo", "scan", "system", "list", "ping", "view"];
const ADMIN: &[&str] = &["enable", "security", "show"];

const FOOTER: &str = "🎯 Interactive Security Sandbox\n📁 Virtual File System: /projects /infrastructure /logs /devices\n💡 Create your own files and folders! Files marked with * are user-created.";

fn entry_line(info: &CommandInfo) -> String {
    let aliases = if info.aliases.is_empty() {
        String::new()
    } else {
        format!(" ({})", info.aliases.join(", "))
    };
    format!("  {:<14} - {}{}", info.name, info.description, aliases)
}

fn find_info<'a>(catalog: &'a [CommandInfo], token: &str) -> Option<&'a CommandInfo> {
    let wanted = token.to_lowercase();
    catalog
        .iter()
        .find(|c| c.name == wanted)
        .or_else(|| catalog.iter().find(|c| c.aliases.iter().any(|a| *a == wanted)))
}

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn description(&self) -> &'static str {
        "Display available commands"
    }

    fn usage(&self) -> &'static str {
        "help [command]"
    }

    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> HandlerResult {
        if let Some(topic) = args.first() {
            let info = find_info(&ctx.catalog, topic)
                .ok_or_else(|| ShellError::NotFound(format!("No help topics match '{}'", topic)))?;
            let mut out = format!("📖 {} - {}\n\nUsage: {}", info.name, info.description, info.usage);
            if !info.aliases.is_empty() {
                out.push_str(&format!("\nAliases: {}", info.aliases.join(", ")));
            }
            return Ok(CommandResult::Output(out));
        }

        // group by rough categories, anything unknown lands in the sandbox section
        let mut inspect = Vec::new();
        let mut mutate = Vec::new();
        let mut security = Vec::new();
        let mut admin = Vec::new();
        let mut sandbox = Vec::new();
        for info in &ctx.catalog {
            let line = entry_line(info);
            let name = info.name.as_str();
            if INSPECT.contains(&name) {
                inspect.push(line);
            } else if MUTATE.contains(&name) {
                mutate.push(line);
            } else if SECURITY.contains(&name) {
                security.push(line);
            } else if ADMIN.contains(&name) {
                admin.push(line);
            } else {
                sandbox.push(line);
            }
        }

        let mut sections = Vec::new();
        for (title, lines) in [
            ("🗂️  FILE SYSTEM COMMANDS", inspect),
            ("✏️  FILE SYSTEM MUTATIONS", mutate),
            ("🎮 SANDBOX COMMANDS", sandbox),
            ("🔐 SECURITY OPERATIONS", security),
            ("🛡️  ADVANCED (Admin Only)", admin),
        ] {
            if !lines.is_empty() {
                sections.push(format!("{}\n{}", title, lines.join("\n")));
            }
        }
        Ok(CommandResult::Output(format!(
            "📚 Available commands:\n\n{}\n\n{}",
            sections.join("\n\n"),
            FOOTER
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandRegistry;
    use crate::commands::test_support::{args, ctx};

    fn with_catalog() -> ShellContext {
        let mut ctx = ctx();
        ctx.catalog = CommandRegistry::default_commands().catalog();
        ctx
    }

    #[test]
    fn overview_groups_every_command() {
        let mut ctx = with_catalog();
        let text = HelpCommand.execute(&[], &mut ctx).unwrap().text().unwrap();
        assert!(text.contains("🗂️  FILE SYSTEM COMMANDS\n  ls             - List directory contents (dir)"));
        assert!(text.contains("✏️  FILE SYSTEM MUTATIONS\n  mkdir"));
        assert!(text.contains("🔐 SECURITY OPERATIONS\n  sudo "));
        assert!(text.contains("🛡️  ADVANCED (Admin Only)\n  enable "));
        for info in &ctx.catalog {
            assert!(text.contains(&format!("  {:<14} - ", info.name)), "{} missing", info.name);
        }
    }

    #[test]
    fn topic_help_resolves_aliases() {
        let mut ctx = with_catalog();
        let text = HelpCommand.execute(&args(&["DEL"]), &mut ctx).unwrap().text().unwrap();
        assert_eq!(
            text,
            "📖 rm - Delete file or directory\n\nUsage: rm <filename_or_directory>\nAliases: del, delete"
        );
        assert!(matches!(HelpCommand.execute(&args(&["nope"]), &mut ctx), Err(ShellError::NotFound(_))));
    }
}
