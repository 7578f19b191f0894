use crate::command::{Command, CommandResult, HandlerResult};
use crate::context::ShellContext;

pub struct StackCommand;

const CARD: &str = "\
┌─ TECH STACK ───────────────────────────┐
│                                        │
│ ⚛️  FRONTEND                            │
│   React 19 • TypeScript • Tailwind     │
│   Framer Motion • Vite                 │
│                                        │
│ 🔧 BACKEND                             │
│   Python • Django • Node.js            │
│   WebSocket • REST APIs                │
│                                        │
│ 🗄️  DATA LAYER                          │
│   PostgreSQL • Redis • MongoDB         │
│                                        │
│ ☁️  CLOUD INFRASTRUCTURE                │
│   AWS • Docker • Kubernetes            │
│   CI/CD Pipelines                      │
│                                        │
│ 🤖 AI/ML                               │
│   OpenAI • TensorFlow • PyTorch        │
│                                        │
│ 🔌 IOT                                 │
│   Arduino • Raspberry Pi • ESP32       │
│   MQTT • Sensor Networks               │
│                                        │
└────────────────────────────────────────┘";

impl Command for StackCommand {
    fn name(&self) -> &'static str {
        "stack"
    }

    fn description(&self) -> &'static str {
        "Show technology stack"
    }

    fn execute(&self, _args: &[String], _ctx: &mut ShellContext) -> HandlerResult {
        Ok(CommandResult::Output(CARD.to_string()))
    }
}
