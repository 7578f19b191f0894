use crate::command::{AnimationFrame, Command, CommandResult, HandlerResult};
use crate::context::ShellContext;

pub struct ArchitectureCommand;

const DIAGRAM: &[(&str, u32)] = &[
    ("┌─────────────────────────────────────────┐", 100),
    ("│           SYSTEM TOPOLOGY               │", 100),
    ("├─────────────────────────────────────────┤", 100),
    ("│                                         │", 50),
    ("│  [Frontend] ←→ [API Gateway] ←→ [Backend]│", 200),
    ("│      ↓              ↓              ↓    │", 200),
    ("│  [Browser]     [Load Balancer]  [Database]│", 200),
    ("│      ↓              ↓              ↓    │", 200),
    ("│   [Cache]       [Monitoring]    [Storage]│", 200),
    ("│                                         │", 100),
    ("└─────────────────────────────────────────┘", 100),
];

impl Command for ArchitectureCommand {
    fn name(&self) -> &'static str {
        "architecture"
    }

    fn description(&self) -> &'static str {
        "Display animated system architecture"
    }

    fn execute(&self, _args: &[String], _ctx: &mut ShellContext) -> HandlerResult {
        let mut frames = vec![
            AnimationFrame::system("🏗️  Initializing system architecture...", 500),
            AnimationFrame::blank(200),
        ];
        frames.extend(DIAGRAM.iter().map(|(line, delay)| AnimationFrame::output(line, *delay)));
        frames.push(AnimationFrame::blank(200));
        frames.push(AnimationFrame::system("✅ Architecture visualization complete!", 0));
        Ok(CommandResult::AnimatedOutput(frames))
    }
}
