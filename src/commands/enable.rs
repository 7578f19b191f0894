use crate::command::{subcommand_is, AnimationFrame, Command, CommandResult, HandlerResult};
use crate::context::ShellContext;
use crate::error::ShellError;

pub struct EnableCommand;

fn firewall_frames() -> Vec<AnimationFrame> {
    vec![
        AnimationFrame::system("🛡️  Initializing firewall systems...", 400),
        AnimationFrame::system("🔧 Loading security rules...", 300),
        AnimationFrame::system("🌐 Configuring network filters...", 300),
        AnimationFrame::system("👁️  Starting intrusion detection...", 300),
        AnimationFrame::blank(200),
        AnimationFrame::system("✅ Firewall engaged.", 0),
        AnimationFrame::system("🔍 Intrusion detection active.", 0),
        AnimationFrame::system("⚠️  System will now monitor for threats.", 0),
    ]
}

impl Command for EnableCommand {
    fn name(&self) -> &'static str {
        "enable"
    }

    fn description(&self) -> &'static str {
        "Activate security firewall (Admin only)"
    }

    fn usage(&self) -> &'static str {
        "enable firewall"
    }

    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> HandlerResult {
        if !subcommand_is(args, &["firewall"]) {
            return Err(ShellError::Usage(self.usage().to_string()));
        }
        ctx.require_admin()?;
        if ctx.firewall_active {
            return Ok(CommandResult::SystemNotice("🛡️  Firewall is already active.".to_string()));
        }
        ctx.firewall_active = true;
        Ok(CommandResult::AnimatedOutput(firewall_frames()))
    }
}
