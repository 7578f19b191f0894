use crate::command::{subcommand_is, AnimationFrame, Command, CommandResult, HandlerResult};
use crate::context::ShellContext;
use crate::error::ShellError;

pub struct ShowCommand;

fn attack_frames() -> Vec<AnimationFrame> {
    vec![
        AnimationFrame::error("⚠️  Simulating DDoS attempt...", 400),
        AnimationFrame::error("📈 Traffic spike detected: 10,000 req/sec", 300),
        AnimationFrame::error("🚨 Alert: Potential DDoS attack in progress", 300),
        AnimationFrame::blank(200),
        AnimationFrame::system("🛡️  Activating defense systems...", 300),
        AnimationFrame::system("⚖️  Load balancer activated", 200),
        AnimationFrame::system("🚫 Rate limiting enabled", 200),
        AnimationFrame::system("🔒 Suspicious IPs blocked", 200),
        AnimationFrame::blank(300),
        AnimationFrame::system("✅ Attack mitigated successfully", 200),
        AnimationFrame::system("📊 Traffic normalized: 150 req/sec", 200),
        AnimationFrame::system("🛡️  System stabilized", 200),
        AnimationFrame::blank(100),
        AnimationFrame::system("🎯 Simulation complete. All systems secure.", 0),
    ]
}

impl Command for ShowCommand {
    fn name(&self) -> &'static str {
        "show"
    }

    fn description(&self) -> &'static str {
        "Demonstrate attack mitigation (Admin only)"
    }

    fn usage(&self) -> &'static str {
        "show attack simulation"
    }

    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> HandlerResult {
        if !subcommand_is(args, &["attack", "simulation"]) {
            return Err(ShellError::Usage(self.usage().to_string()));
        }
        ctx.require_admin()?;
        Ok(CommandResult::AnimatedOutput(attack_frames()))
    }
}
