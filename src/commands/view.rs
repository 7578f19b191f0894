use chrono::{Duration, Local, NaiveDateTime};

use crate::command::{subcommand_is, Command, CommandResult, HandlerResult};
use crate::context::ShellContext;
use crate::error::ShellError;

pub struct ViewCommand;

// seconds before now, level, message
const ENTRIES: &[(i64, &str, &str)] = &[
    (300, "INFO", "WebSocket connection established"),
    (240, "INFO", "Redis channel synchronized"),
    (180, "WARNING", "High traffic detected"),
    (120, "INFO", "Docker container healthy"),
    (90, "INFO", "ESP32 sensor data received"),
    (60, "INFO", "Database connection stable"),
    (30, "INFO", "SSL certificate renewed"),
    (15, "INFO", "Backup process completed"),
    (5, "INFO", "System health check passed"),
    (1, "INFO", "All services operational"),
];

fn log_block(now: NaiveDateTime) -> String {
    let mut lines = vec![format!("📜 SYSTEM LOGS (Last {} entries)", ENTRIES.len()), String::new()];
    for (ago, level, msg) in ENTRIES {
        let at = now - Duration::seconds(*ago);
        lines.push(format!("[{}] [{}] {}", at.format("%H:%M:%S"), level, msg));
    }
    lines.join("\n")
}

impl Command for ViewCommand {
    fn name(&self) -> &'static str {
        "view"
    }

    fn description(&self) -> &'static str {
        "Display system logs"
    }

    fn usage(&self) -> &'static str {
        "view logs"
    }

    fn execute(&self, args: &[String], _ctx: &mut ShellContext) -> HandlerResult {
        if !subcommand_is(args, &["logs"]) {
            return Err(ShellError::Usage(self.usage().to_string()));
        }
        Ok(CommandResult::Output(log_block(Local::now().naive_local())))
    }
}
