use crate::command::{subcommand_is, Command, CommandResult, HandlerResult};
use crate::context::ShellContext;
use crate::error::ShellError;

/// list devices
pub struct ListCommand;

pub struct Device {
    pub icon: &'static str,
    pub name: &'static str,
    pub ip: &'static str,
    pub status: &'static str,
    pub detail: &'static str,
}

pub const DEVICES: &[Device] = &[
    Device { icon: "📱", name: "ESP32 Sensor Node", ip: "192.168.0.101", status: "Online", detail: "Sensors: DHT22, BMP280" },
    Device { icon: "🍓", name: "Raspberry Pi Gateway", ip: "192.168.0.102", status: "Online", detail: "Role: MQTT Broker" },
    Device { icon: "🌡️ ", name: "Temperature Sensor Unit", ip: "192.168.0.103", status: "Online", detail: "Last Reading: 24.5°C" },
    Device { icon: "👁️ ", name: "Motion Detection Unit", ip: "192.168.0.104", status: "Standby", detail: "Coverage: Living Room" },
];

impl Command for ListCommand {
    fn name(&self) -> &'static str {
        "list"
    }

    fn description(&self) -> &'static str {
        "List connected IoT devices"
    }

    fn usage(&self) -> &'static str {
        "list devices"
    }

    fn execute(&self, args: &[String], _ctx: &mut ShellContext) -> HandlerResult {
        if !subcommand_is(args, &["devices"]) {
            return Err(ShellError::Usage(self.usage().to_string()));
        }
        let mut out = String::from("📡 CONNECTED IOT DEVICES\n");
        for d in DEVICES {
            out.push_str(&format!(
                "\n{} {}\n   IP: {}\n   Status: {}\n   {}\n",
                d.icon, d.name, d.ip, d.status, d.detail
            ));
        }
        Ok(CommandResult::Output(out.trim_end().to_string()))
    }
}
