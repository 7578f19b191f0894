use crate::command::{AnimationFrame, Command, CommandResult, HandlerResult};
use crate::context::{AccessLevel, ShellContext};
use crate::error::ShellError;

pub struct SudoCommand;

fn escalation_frames() -> Vec<AnimationFrame> {
    vec![
        AnimationFrame::system("🔐 Requesting privilege escalation...", 400),
        AnimationFrame::system("🔍 Verifying credentials...", 300),
        AnimationFrame::system("✅ Access granted!", 200),
        AnimationFrame::blank(100),
        AnimationFrame::system("🛡️  Access level: Administrator", 0),
        AnimationFrame::system("🔓 Advanced security commands unlocked.", 0),
    ]
}

impl Command for SudoCommand {
    fn name(&self) -> &'static str {
        "sudo"
    }

    fn description(&self) -> &'static str {
        "Elevate access privileges"
    }

    fn usage(&self) -> &'static str {
        "sudo elevate"
    }

    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> HandlerResult {
        if !args.first().is_some_and(|a| a.eq_ignore_ascii_case("elevate")) {
            return Err(ShellError::Usage(self.usage().to_string()));
        }
        if ctx.is_admin() {
            return Ok(CommandResult::SystemNotice("🔐 Already elevated to Administrator level.".to_string()));
        }
        ctx.access = AccessLevel::Administrator;
        tracing::debug!("access level raised to administrator");
        Ok(CommandResult::AnimatedOutput(escalation_frames()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{args, ctx};

    #[test]
    fn elevate_once_then_notice() {
        let mut ctx = ctx();
        let first = SudoCommand.execute(&args(&["elevate"]), &mut ctx).unwrap();
        assert!(matches!(first, CommandResult::AnimatedOutput(ref frames) if frames.len() == 6));
        assert!(ctx.is_admin());
        let again = SudoCommand.execute(&args(&["elevate"]), &mut ctx).unwrap();
        assert!(matches!(again, CommandResult::SystemNotice(_)));
    }

    #[test]
    fn anything_else_is_usage() {
        let mut ctx = ctx();
        assert_eq!(SudoCommand.execute(&[], &mut ctx), Err(ShellError::Usage("sudo elevate".into())));
        assert!(SudoCommand.execute(&args(&["rm"]), &mut ctx).is_err());
        assert!(!ctx.is_admin());
    }
}
