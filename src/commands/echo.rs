use crate::command::{strip_wrapping_quotes, Command, CommandResult, HandlerResult};
use crate::context::ShellContext;

pub struct EchoCommand;

const REDIRECT: &str = ">";

impl Command for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn description(&self) -> &'static str {
        "Create file with content or display text"
    }

    fn usage(&self) -> &'static str {
        "echo <text> [> filename]"
    }

    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> HandlerResult {
        if args.is_empty() {
            return Ok(CommandResult::Output(String::new()));
        }

        // `text > file` writes a new file; an existing name is rejected, never overwritten
        if let Some(idx) = args.iter().position(|a| a == REDIRECT) {
            if idx > 0 && idx + 1 < args.len() {
                let joined = args[..idx].join(" ");
                let content = strip_wrapping_quotes(&joined);
                let message = ctx.vfs.create_file(&args[idx + 1], content, None)?;
                return Ok(CommandResult::SystemNotice(format!("📄 {}", message)));
            }
        }

        let joined = args.join(" ");
        Ok(CommandResult::Output(strip_wrapping_quotes(&joined).to_string()))
    }
}
