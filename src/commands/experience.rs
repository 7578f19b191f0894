use crate::command::{Command, CommandResult, HandlerResult};
use crate::context::ShellContext;

pub struct ExperienceCommand;

// newest first
const JOBS: &[(&str, &str, &str, &[&str])] = &[
    ("2025 - Current", "🌟", "Max International", &["Junior Cloud Engineer", "AWS infrastructure management", "Scalable web deployments"]),
    ("2025 - Current", "🚀", "Innovate Nepal Group", &["Frontend Development Intern", "React ecosystem", "IoT integration projects"]),
    ("2023 - Present", "💻", "Freelance Developer", &["Custom web applications", "IoT system implementations", "Client solution architecture"]),
    ("2023 - 2024", "🎨", "KIEC PVT.LTD", &["IT Support & Graphics Design", "System administration", "Creative digital solutions"]),
];

impl Command for ExperienceCommand {
    fn name(&self) -> &'static str {
        "experience"
    }

    fn description(&self) -> &'static str {
        "List work experience"
    }

    fn execute(&self, _args: &[String], _ctx: &mut ShellContext) -> HandlerResult {
        let mut lines = vec!["┌─ PROFESSIONAL JOURNEY ─────────────────┐".to_string()];
        for (period, icon, place, duties) in JOBS {
            lines.push(String::new());
            lines.push(format!("[{}] {}", period, icon));
            lines.push(place.to_string());
            lines.extend(duties.iter().map(|d| format!("→ {}", d)));
        }
        lines.push(String::new());
        lines.push("└────────────────────────────────────────┘".to_string());
        Ok(CommandResult::Output(lines.join("\n")))
    }
}
