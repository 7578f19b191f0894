use crate::command::{read_text_file, Command, CommandResult, HandlerResult};
use crate::context::ShellContext;
use crate::error::ShellError;

pub struct WcCommand;

/// (lines, words, characters)
fn counts(content: &str) -> (usize, usize, usize) {
    if content.is_empty() {
        return (0, 0, 0);
    }
    (content.split('\n').count(), content.split_whitespace().count(), content.chars().count())
}

impl Command for WcCommand {
    fn name(&self) -> &'static str {
        "wc"
    }

    fn description(&self) -> &'static str {
        "Count lines, words, and characters in files"
    }

    fn usage(&self) -> &'static str {
        "wc <filename>"
    }

    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> HandlerResult {
        let filename = args.first().ok_or_else(|| ShellError::Usage(self.usage().to_string()))?;
        let (lines, words, chars) = counts(read_text_file(ctx, filename)?);
        Ok(CommandResult::Output(format!(
            "📊 {}: {} lines, {} words, {} characters",
            filename, lines, words, chars
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{args, ctx};

    #[test]
    fn counts_split_like_the_browser_did() {
        assert_eq!(counts(""), (0, 0, 0));
        assert_eq!(counts("a b\n\nc\n"), (4, 3, 7));
        assert_eq!(counts("héllo"), (1, 1, 5));
    }

    #[test]
    fn reports_per_file() {
        let mut ctx = ctx();
        ctx.vfs.create_file("w.txt", "one two three", None).unwrap();
        let out = WcCommand.execute(&args(&["w.txt"]), &mut ctx).unwrap();
        assert_eq!(out, CommandResult::Output("📊 w.txt: 1 lines, 3 words, 13 characters".into()));
    }
}
