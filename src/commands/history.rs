use crate::command::{Command, CommandResult, HandlerResult};
use crate::context::ShellContext;
use crate::error::ShellError;

pub struct HistoryCommand;

impl Command for HistoryCommand {
    fn name(&self) -> &'static str {
        "history"
    }

    fn description(&self) -> &'static str {
        "Show command history"
    }

    fn usage(&self) -> &'static str {
        "history [-c]"
    }

    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> HandlerResult {
        match args {
            [] => {
                let out = ctx
                    .history
                    .iter()
                    .enumerate()
                    .map(|(i, cmd)| format!("{:4}  {}", i + 1, cmd))
                    .collect::<Vec<_>>()
                    .join("\n");
                Ok(CommandResult::Output(out))
            }
            [flag] if flag == "-c" => {
                ctx.history.clear();
                Ok(CommandResult::SystemNotice("History cleared".to_string()))
            }
            _ => Err(ShellError::Usage(self.usage().to_string())),
        }
    }
}
