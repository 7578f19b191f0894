use crate::command::{subcommand_is, AnimationFrame, Command, CommandResult, HandlerResult};
use crate::context::ShellContext;
use crate::error::ShellError;

pub struct PingCommand;

const ESP32_IP: &str = "192.168.0.101";

fn ping_frames() -> Vec<AnimationFrame> {
    let mut frames = vec![
        AnimationFrame::system("📡 Pinging ESP32 Sensor Node...", 300),
        AnimationFrame::blank(400),
    ];
    for ms in [12, 11, 13] {
        frames.push(AnimationFrame::output(&format!("64 bytes from {}: time={}ms", ESP32_IP, ms), 200));
    }
    frames.extend([
        AnimationFrame::blank(100),
        AnimationFrame::system("✅ Response received.", 0),
        AnimationFrame::system("📊 Latency: 12ms", 0),
        AnimationFrame::system("📶 Signal strength: Strong", 0),
    ]);
    frames
}

impl Command for PingCommand {
    fn name(&self) -> &'static str {
        "ping"
    }

    fn description(&self) -> &'static str {
        "Test ESP32 device connectivity"
    }

    fn usage(&self) -> &'static str {
        "ping esp32"
    }

    fn execute(&self, args: &[String], _ctx: &mut ShellContext) -> HandlerResult {
        match args.first() {
            None => Err(ShellError::Usage(self.usage().to_string())),
            Some(_) if subcommand_is(args, &["esp32"]) => Ok(CommandResult::AnimatedOutput(ping_frames())),
            Some(host) => Err(ShellError::NotFound(format!("Host unreachable: {}", host))),
        }
    }
}
