use crate::command::{Command, CommandResult, HandlerResult};
use crate::context::ShellContext;
use crate::error::ShellError;

pub struct FileCommand;

fn describe(filename: &str) -> &'static str {
    let extension = filename.rsplit('.').next().unwrap_or_default().to_lowercase();
    match extension.as_str() {
        "txt" => "ASCII text",
        "md" => "Markdown document",
        "log" => "log file",
        "sh" => "shell script",
        _ => "text file",
    }
}

impl Command for FileCommand {
    fn name(&self) -> &'static str {
        "file"
    }

    fn description(&self) -> &'static str {
        "Determine file type"
    }

    fn usage(&self) -> &'static str {
        "file <filename>"
    }

    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> HandlerResult {
        let filename = args.first().ok_or_else(|| ShellError::Usage(self.usage().to_string()))?;
        let node = ctx
            .vfs
            .node_at(filename)
            .ok_or_else(|| ShellError::NotFound(format!("File not found: {}", filename)))?;
        let kind = if node.is_dir() { "directory" } else { describe(filename) };
        Ok(CommandResult::Output(format!("📄 {}: {}", filename, kind)))
    }
}
