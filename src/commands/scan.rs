use crate::command::{subcommand_is, AnimationFrame, Command, CommandResult, HandlerResult};
use crate::context::ShellContext;
use crate::error::ShellError;

pub struct ScanCommand;

const HOSTS: &[(&str, &str)] = &[
    ("IoT Node 01", "192.168.0.101"),
    ("AWS Cloud Gateway", "192.168.0.1"),
    ("Django ASGI Core", "192.168.0.50"),
    ("Redis Channel Layer", "192.168.0.51"),
    ("ESP32 Sensor Hub", "192.168.0.102"),
];

fn discovery_frames() -> Vec<AnimationFrame> {
    let mut frames = vec![
        AnimationFrame::system("🔍 Scanning 192.168.0.0/24...", 400),
        AnimationFrame::blank(200),
    ];
    frames.extend(
        HOSTS
            .iter()
            .map(|(name, ip)| AnimationFrame::output(&format!("Host detected: {} ({})", name, ip), 300)),
    );
    frames.push(AnimationFrame::blank(200));
    frames.push(AnimationFrame::system("✅ Scan complete.", 200));
    frames.push(AnimationFrame::system("🛡️  No vulnerabilities detected.", 0));
    frames
}

impl Command for ScanCommand {
    fn name(&self) -> &'static str {
        "scan"
    }

    fn description(&self) -> &'static str {
        "Scan network for devices"
    }

    fn usage(&self) -> &'static str {
        "scan network"
    }

    fn execute(&self, args: &[String], _ctx: &mut ShellContext) -> HandlerResult {
        if !subcommand_is(args, &["network"]) {
            return Err(ShellError::Usage(self.usage().to_string()));
        }
        Ok(CommandResult::AnimatedOutput(discovery_frames()))
    }
}
