use crate::command::{subcommand_is, AnimationFrame, Command, CommandResult, HandlerResult};
use crate::context::ShellContext;
use crate::error::ShellError;

/// security scan (Admin only)
pub struct SecurityCommand;

// (what is being checked, verdict)
const CHECKS: &[(&str, &str)] = &[
    ("📊 Scanning network topology...", "✅ Network topology: Secure"),
    ("🔐 Checking authentication systems...", "✅ Authentication: Strong"),
    ("🛡️  Analyzing firewall rules...", "✅ Firewall configuration: Optimal"),
    ("🔍 Scanning for vulnerabilities...", "✅ No critical vulnerabilities found"),
];

fn scan_frames() -> Vec<AnimationFrame> {
    let mut frames = vec![
        AnimationFrame::system("🔍 Initiating comprehensive security scan...", 400),
        AnimationFrame::blank(200),
    ];
    for (i, (step, verdict)) in CHECKS.iter().enumerate() {
        if i > 0 {
            frames.push(AnimationFrame::blank(100));
        }
        frames.push(AnimationFrame::system(step, 300));
        frames.push(AnimationFrame::output(verdict, 200));
    }
    frames.push(AnimationFrame::blank(200));
    frames.push(AnimationFrame::system("📋 SECURITY SCAN COMPLETE", 0));
    frames.push(AnimationFrame::system("🛡️  Overall Security Rating: EXCELLENT", 0));
    frames
}

impl Command for SecurityCommand {
    fn name(&self) -> &'static str {
        "security"
    }

    fn description(&self) -> &'static str {
        "Run comprehensive security scan (Admin only)"
    }

    fn usage(&self) -> &'static str {
        "security scan"
    }

    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> HandlerResult {
        if !subcommand_is(args, &["scan"]) {
            return Err(ShellError::Usage(self.usage().to_string()));
        }
        ctx.require_admin()?;
        Ok(CommandResult::AnimatedOutput(scan_frames()))
    }
}
