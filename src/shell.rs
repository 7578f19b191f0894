//! Line dispatch: tokenize, look the command up, run it behind a panic guard
//! and hand back one `CommandResult` for the renderer.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::command::{CommandRegistry, CommandResult};
use crate::context::{ShellContext, ShellOptions};
use crate::error::ShellError;
use crate::vfs::FileSystemState;
use crate::vfs_events::VfsEvent;

pub struct CommandShell {
    ctx: ShellContext,
    registry: CommandRegistry,
}

/// Plain whitespace split, no quoting rules.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unexpected failure".to_string()
    }
}

impl CommandShell {
    pub fn new(options: ShellOptions) -> Self {
        Self::with_registry(ShellContext::new(options), CommandRegistry::default_commands())
    }

    pub fn with_registry(mut ctx: ShellContext, registry: CommandRegistry) -> Self {
        ctx.catalog = registry.catalog();
        Self { ctx, registry }
    }

    pub fn context(&self) -> &ShellContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut ShellContext {
        &mut self.ctx
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// `None` for blank input, otherwise exactly one result. Never panics.
    pub fn execute(&mut self, line: &str) -> Option<CommandResult> {
        let tokens = tokenize(line);
        let (name, args) = tokens.split_first()?;

        let Some(cmd) = self.registry.get(name) else {
            let suggestions = self.registry.suggestions(name, self.ctx.options.suggestion_limit);
            tracing::debug!(input = %name, ?suggestions, "unknown command");
            return Some(CommandResult::Error(ShellError::UnknownCommand {
                input: line.trim().to_string(),
                suggestions,
            }));
        };

        tracing::debug!(command = cmd.name(), args = args.len(), "dispatch");
        let ctx = &mut self.ctx;
        let outcome = catch_unwind(AssertUnwindSafe(|| cmd.execute(args, ctx)));
        let result = match outcome {
            Ok(Ok(result)) => result,
            Ok(Err(err)) => CommandResult::Error(err),
            Err(payload) => {
                let msg = panic_message(payload.as_ref());
                tracing::warn!(command = cmd.name(), %msg, "handler panicked");
                CommandResult::Error(ShellError::Internal(msg))
            }
        };
        Some(result)
    }

    pub fn suggestions(&self, token: &str) -> Vec<String> {
        self.registry.suggestions(token, self.ctx.options.suggestion_limit)
    }

    pub fn current_path(&self) -> &str {
        self.ctx.vfs.current_path()
    }

    pub fn snapshot(&self) -> FileSystemState {
        self.ctx.vfs.snapshot()
    }

    /// Events queued by the file system since the last drain.
    pub fn drain_events(&mut self) -> Vec<VfsEvent> {
        self.ctx.vfs.take_events()
    }
}

impl Default for CommandShell {
    fn default() -> Self {
        Self::new(ShellOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{Command, HandlerResult};

    struct Explode;

    impl Command for Explode {
        fn name(&self) -> &'static str {
            "explode"
        }

        fn description(&self) -> &'static str {
            "always panics"
        }

        fn execute(&self, _args: &[String], _ctx: &mut ShellContext) -> HandlerResult {
            panic!("boom")
        }
    }

    #[test]
    fn blank_lines_produce_nothing() {
        let mut shell = CommandShell::default();
        assert_eq!(shell.execute(""), None);
        assert_eq!(shell.execute("   \t "), None);
    }

    #[test]
    fn lookup_ignores_case_and_extra_whitespace() {
        let mut shell = CommandShell::default();
        let out = shell.execute("   PWD   ");
        assert_eq!(out, Some(CommandResult::Output("📍 Current directory: /".into())));
    }

    #[test]
    fn unknown_commands_carry_suggestions() {
        let mut shell = CommandShell::default();
        match shell.execute("  lsdir -l ") {
            Some(CommandResult::Error(ShellError::UnknownCommand { input, suggestions })) => {
                assert_eq!(input, "lsdir -l");
                assert!(suggestions.contains(&"ls".to_string()));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn suggestion_count_follows_options() {
        let options = ShellOptions { suggestion_limit: 2, ..ShellOptions::default() };
        let mut shell = CommandShell::new(options);
        match shell.execute("d") {
            Some(CommandResult::Error(ShellError::UnknownCommand { suggestions, .. })) => {
                assert_eq!(suggestions.len(), 2)
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn handler_errors_become_error_results() {
        let mut shell = CommandShell::default();
        let out = shell.execute("cat").unwrap();
        assert_eq!(out, CommandResult::Error(ShellError::Usage("cat <filename>".into())));
    }

    #[test]
    fn panics_are_contained() {
        let mut registry = CommandRegistry::file_system_commands();
        registry.register_command(Box::new(Explode));
        let mut shell = CommandShell::with_registry(ShellContext::default(), registry);
        let out = shell.execute("explode now").unwrap();
        assert_eq!(out, CommandResult::Error(ShellError::Internal("boom".into())));
        // the shell keeps working afterwards
        assert!(shell.execute("mkdir after").is_some_and(|r| !r.is_error()));
    }

    #[test]
    fn events_drain_once() {
        let mut shell = CommandShell::default();
        shell.execute("mkdir notes");
        shell.execute("cd notes");
        assert_eq!(
            shell.drain_events(),
            vec![VfsEvent::CreateDir { path: "/notes".into() }, VfsEvent::ChangeDir { path: "/notes".into() }]
        );
        assert!(shell.drain_events().is_empty());
    }

    #[test]
    fn catalog_is_published_to_handlers() {
        let shell = CommandShell::default();
        assert_eq!(shell.context().catalog.len(), shell.registry().get_command_names().len());
    }
}
