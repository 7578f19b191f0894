//! `head` and `tail` share everything except which end of the file they keep.

use crate::command::{read_text_file, Command, CommandResult, HandlerResult};
use crate::context::ShellContext;
use crate::error::ShellError;

const DEFAULT_LINES: usize = 10;

#[derive(Clone, Copy)]
enum End {
    First,
    Last,
}

/// filename is the first token that isn't `-n` or its value
fn parse_args(args: &[String]) -> (Option<&str>, usize) {
    let mut filename = None;
    let mut count = DEFAULT_LINES;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "-n" {
            count = iter
                .next()
                .and_then(|v| v.parse::<usize>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_LINES);
        } else if filename.is_none() {
            filename = Some(arg.as_str());
        }
    }
    (filename, count)
}

fn show(end: End, usage: &str, args: &[String], ctx: &ShellContext) -> HandlerResult {
    let (filename, count) = parse_args(args);
    let filename = filename.ok_or_else(|| ShellError::Usage(usage.to_string()))?;
    let content = read_text_file(ctx, filename)?;
    if content.is_empty() {
        return Ok(CommandResult::Output("📄 File is empty".to_string()));
    }

    let lines: Vec<&str> = content.lines().collect();
    let (label, picked) = match end {
        End::First => ("First", &lines[..count.min(lines.len())]),
        End::Last => ("Last", &lines[lines.len().saturating_sub(count)..]),
    };
    Ok(CommandResult::Output(format!(
        "📄 {} {} lines of {}:\n\n{}",
        label,
        count,
        filename,
        picked.join("\n")
    )))
}

pub struct HeadCommand;

impl Command for HeadCommand {
    fn name(&self) -> &'static str {
        "head"
    }

    fn description(&self) -> &'static str {
        "Display first lines of a file"
    }

    fn usage(&self) -> &'static str {
        "head <filename> [-n lines]"
    }

    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> HandlerResult {
        show(End::First, self.usage(), args, ctx)
    }
}

pub struct TailCommand;

impl Command for TailCommand {
    fn name(&self) -> &'static str {
        "tail"
    }

    fn description(&self) -> &'static str {
        "Display last lines of a file"
    }

    fn usage(&self) -> &'static str {
        "tail <filename> [-n lines]"
    }

    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> HandlerResult {
        show(End::Last, self.usage(), args, ctx)
    }
}
