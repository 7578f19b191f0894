use crate::command::{Command, CommandResult, HandlerResult, Mode};
use crate::context::ShellContext;

pub struct ExitCommand;

impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn description(&self) -> &'static str {
        "Close sandbox"
    }

    fn usage(&self) -> &'static str {
        "exit [ai]"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["quit"]
    }

    fn execute(&self, args: &[String], _ctx: &mut ShellContext) -> HandlerResult {
        // `exit ai` only leaves chat mode
        if args.first().is_some_and(|a| a.eq_ignore_ascii_case("ai")) {
            return Ok(CommandResult::ModeSwitch(Mode::ExitChat));
        }
        Ok(CommandResult::Exit)
    }
}
