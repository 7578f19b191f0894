use crate::command::{literal_matcher, Command, CommandResult, HandlerResult};
use crate::context::ShellContext;
use crate::error::ShellError;

pub struct FindCommand;

impl Command for FindCommand {
    fn name(&self) -> &'static str {
        "find"
    }

    fn description(&self) -> &'static str {
        "Search for files and directories"
    }

    fn usage(&self) -> &'static str {
        "find <pattern>"
    }

    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> HandlerResult {
        let pattern = args.first().ok_or_else(|| ShellError::Usage(self.usage().to_string()))?;
        let matcher = literal_matcher(pattern)?;

        // whole tree, not just the cursor; a path matches through any of its segments
        let results: Vec<String> = ctx
            .vfs
            .walk()
            .into_iter()
            .filter(|(path, _)| matcher.is_match(path))
            .map(|(path, node)| {
                let mark = if node.is_user_created() { " *" } else { "" };
                format!("{} {}{}", node.icon(), path, mark)
            })
            .collect();

        if results.is_empty() {
            return Ok(CommandResult::Output(format!("🔍 No files found matching: {}", pattern)));
        }
        Ok(CommandResult::Output(format!(
            "🔍 Search results for \"{}\":\n\n{}\n\n📊 Found {} matches",
            pattern,
            results.join("\n"),
            results.len()
        )))
    }
}
