use crate::command::{read_text_file, Command, CommandResult, HandlerResult};
use crate::context::ShellContext;
use crate::error::ShellError;

pub struct CatCommand;

impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn description(&self) -> &'static str {
        "Display file contents"
    }

    fn usage(&self) -> &'static str {
        "cat <filename>"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["type", "more"]
    }

    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> HandlerResult {
        let filename = args.first().ok_or_else(|| ShellError::Usage(self.usage().to_string()))?;
        let content = read_text_file(ctx, filename)?;
        if content.is_empty() {
            return Ok(CommandResult::Output("📄 File is empty".to_string()));
        }
        Ok(CommandResult::Output(format!("📄 {}:\n\n{}", filename, content)))
    }
}
