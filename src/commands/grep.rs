use crate::command::{literal_matcher, read_text_file, strip_wrapping_quotes, Command, CommandResult, HandlerResult};
use crate::context::ShellContext;
use crate::error::ShellError;

pub struct GrepCommand;

impl Command for GrepCommand {
    fn name(&self) -> &'static str {
        "grep"
    }

    fn description(&self) -> &'static str {
        "Search text within files"
    }

    fn usage(&self) -> &'static str {
        "grep <pattern> <filename>"
    }

    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> HandlerResult {
        let [pattern, filename, ..] = args else {
            return Err(ShellError::Usage(self.usage().to_string()));
        };
        let pattern = strip_wrapping_quotes(pattern);
        let matcher = literal_matcher(pattern)?;
        let content = read_text_file(ctx, filename)?;
        if content.is_empty() {
            return Ok(CommandResult::Output("📄 File is empty".to_string()));
        }

        let matches: Vec<String> = content
            .split('\n')
            .enumerate()
            .filter(|(_, line)| matcher.is_match(line))
            .map(|(i, line)| format!("{:>3}: {}", i + 1, line))
            .collect();

        if matches.is_empty() {
            return Ok(CommandResult::Output(format!("🔍 No matches found for \"{}\" in {}", pattern, filename)));
        }
        Ok(CommandResult::Output(format!(
            "🔍 Matches for \"{}\" in {}:\n\n{}\n\n📊 Found {} matches",
            pattern,
            filename,
            matches.join("\n"),
            matches.len()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{args, ctx};

    #[test]
    fn numbers_matching_lines() {
        let mut ctx = ctx();
        ctx.vfs.create_file("notes.txt", "alpha\nRedis here\nbeta\nmore redis", None).unwrap();
        let text = GrepCommand.execute(&args(&["\"redis\"", "notes.txt"]), &mut ctx).unwrap().text().unwrap();
        assert_eq!(
            text,
            "🔍 Matches for \"redis\" in notes.txt:\n\n  2: Redis here\n  4: more redis\n\n📊 Found 2 matches"
        );
    }

    #[test]
    fn no_matches_and_empty_files_are_output() {
        let mut ctx = ctx();
        ctx.vfs.create_file("blank.txt", "", None).unwrap();
        assert_eq!(
            GrepCommand.execute(&args(&["x", "blank.txt"]), &mut ctx).unwrap(),
            CommandResult::Output("📄 File is empty".into())
        );
        assert_eq!(
            GrepCommand.execute(&args(&["zzz", "about.txt"]), &mut ctx).unwrap(),
            CommandResult::Output("🔍 No matches found for \"zzz\" in about.txt".into())
        );
    }

    #[test]
    fn argument_and_target_errors() {
        let mut ctx = ctx();
        assert_eq!(
            GrepCommand.execute(&args(&["x"]), &mut ctx),
            Err(ShellError::Usage("grep <pattern> <filename>".into()))
        );
        assert!(matches!(GrepCommand.execute(&args(&["x", "logs"]), &mut ctx), Err(ShellError::IsADirectory(_))));
        assert!(matches!(GrepCommand.execute(&args(&["x", "nope.txt"]), &mut ctx), Err(ShellError::NotFound(_))));
    }
}
