use crate::command::{Command, CommandResult, HandlerResult};
use crate::context::ShellContext;

pub struct WhoamiCommand;

impl Command for WhoamiCommand {
    fn name(&self) -> &'static str {
        "whoami"
    }

    fn description(&self) -> &'static str {
        "Display user information"
    }

    fn execute(&self, _args: &[String], ctx: &mut ShellContext) -> HandlerResult {
        let clearance = if ctx.is_admin() { "ELEVATED" } else { "STANDARD" };
        let firewall = if ctx.firewall_active { "ACTIVE" } else { "INACTIVE" };
        let rows = [
            ("Level", ctx.access.label()),
            ("Clearance", clearance),
            ("Firewall", firewall),
            ("Mode", "Security Sandbox"),
            ("Directory", ctx.vfs.current_path()),
        ];
        let mut out = String::from("┌─────────────────────────────────────┐\n");
        out.push_str("│        SECURITY CONSOLE USER        │\n");
        out.push_str("├─────────────────────────────────────┤\n");
        for (label, value) in rows {
            out.push_str(&format!("│ {:<10} {:<24} │\n", format!("{}:", label), value));
        }
        out.push_str("└─────────────────────────────────────┘");
        Ok(CommandResult::Output(out))
    }
}
