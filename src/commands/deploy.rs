use crate::command::{AnimationFrame, Command, CommandResult, HandlerResult};
use crate::context::ShellContext;

pub struct DeployCommand;

const PIPELINE: &[(&str, u32)] = &[
    ("🚀 Initializing deployment sequence...", 400),
    ("📦 Building application...", 300),
    ("🔍 Running tests...", 300),
    ("✅ Tests passed!", 200),
    ("🐳 Creating Docker image...", 400),
    ("☁️  Pushing to cloud registry...", 400),
    ("🌐 Deploying to production...", 500),
    ("✅ Deployment successful!", 300),
    ("", 200),
    ("🎯 Application is now live and ready!", 0),
];

impl Command for DeployCommand {
    fn name(&self) -> &'static str {
        "deploy"
    }

    fn description(&self) -> &'static str {
        "Show deployment pipeline"
    }

    fn execute(&self, _args: &[String], _ctx: &mut ShellContext) -> HandlerResult {
        let frames = PIPELINE.iter().map(|(text, delay)| AnimationFrame::system(text, *delay)).collect();
        Ok(CommandResult::AnimatedOutput(frames))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::ctx;

    #[test]
    fn pipeline_ends_live() {
        let Ok(CommandResult::AnimatedOutput(frames)) = DeployCommand.execute(&[], &mut ctx()) else {
            panic!("expected frames");
        };
        assert_eq!(frames.len(), PIPELINE.len());
        assert_eq!(frames[0].delay_ms, 400);
        assert_eq!(frames.last().unwrap().text, "🎯 Application is now live and ready!");
    }
}
