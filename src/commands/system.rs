use uuid::Uuid;

use crate::command::{subcommand_is, Command, CommandResult, HandlerResult};
use crate::context::ShellContext;
use crate::error::ShellError;

/// system status
pub struct SystemCommand;

/// Made-up readings, different on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    pub cpu_percent: u8,
    pub memory_tenths: u8,
    pub memory_total_gb: u8,
    pub connections: u8,
    pub redis_latency_ms: u8,
}

impl Metrics {
    /// cpu 15-44%, memory 1.0-2.9GB of 8, 1-5 connections, 1-5ms latency
    pub fn from_seed(seed: [u8; 16]) -> Self {
        Self {
            cpu_percent: 15 + seed[0] % 30,
            memory_tenths: 10 + seed[1] % 20,
            memory_total_gb: 8,
            connections: 1 + seed[2] % 5,
            redis_latency_ms: 1 + seed[3] % 5,
        }
    }

    pub fn sample() -> Self {
        Self::from_seed(Uuid::new_v4().into_bytes())
    }
}

fn status_card(m: Metrics, ctx: &ShellContext) -> String {
    let firewall = if ctx.firewall_active { "ACTIVE" } else { "INACTIVE" };
    [
        "┌─ REAL-TIME SYSTEM STATUS ──────────────┐".to_string(),
        String::new(),
        format!(" 💻 CPU Usage: {}%", m.cpu_percent),
        format!(" 🧠 Memory: {}.{}GB / {}GB", m.memory_tenths / 10, m.memory_tenths % 10, m.memory_total_gb),
        format!(" 🌐 Active WebSocket Connections: {}", m.connections),
        format!(" ⚡ Redis Latency: {}ms", m.redis_latency_ms),
        format!(" 🔒 Firewall: {}", firewall),
        format!(" 🛡️  Access Level: {}", ctx.access.label()),
        String::new(),
        " 📊 Status: All systems operational".to_string(),
        "└────────────────────────────────────────┘".to_string(),
    ]
    .join("\n")
}

impl Command for SystemCommand {
    fn name(&self) -> &'static str {
        "system"
    }

    fn description(&self) -> &'static str {
        "Show real-time system metrics"
    }

    fn usage(&self) -> &'static str {
        "system status"
    }

    fn execute(&self, args: &[String], ctx: &mut ShellContext) -> HandlerResult {
        if !subcommand_is(args, &["status"]) {
            return Err(ShellError::Usage(self.usage().to_string()));
        }
        ctx.monitoring_active = true;
        Ok(CommandResult::Output(status_card(Metrics::sample(), ctx)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{args, ctx};
    use crate::context::AccessLevel;

    #[test]
    fn metrics_stay_in_range() {
        for seed in [[0u8; 16], [255u8; 16], [29u8; 16]] {
            let m = Metrics::from_seed(seed);
            assert!((15..45).contains(&m.cpu_percent));
            assert!((10..30).contains(&m.memory_tenths));
            assert!((1..=5).contains(&m.connections));
            assert!((1..=5).contains(&m.redis_latency_ms));
        }
    }

    #[test]
    fn card_reflects_session_flags() {
        let mut ctx = ctx();
        let text = SystemCommand.execute(&args(&["status"]), &mut ctx).unwrap().text().unwrap();
        assert!(text.contains(" 🔒 Firewall: INACTIVE"));
        assert!(text.contains(" 🛡️  Access Level: Visitor"));
        assert!(ctx.monitoring_active);

        ctx.access = AccessLevel::Administrator;
        ctx.firewall_active = true;
        let text = SystemCommand.execute(&args(&["Status"]), &mut ctx).unwrap().text().unwrap();
        assert!(text.contains(" 🔒 Firewall: ACTIVE"));
        assert!(text.contains(" 🛡️  Access Level: Administrator"));
    }

    #[test]
    fn fixed_seed_renders_fixed_numbers() {
        let ctx = ctx();
        let text = status_card(Metrics::from_seed([0; 16]), &ctx);
        assert!(text.contains(" 💻 CPU Usage: 15%"));
        assert!(text.contains(" 🧠 Memory: 1.0GB / 8GB"));
    }
}
