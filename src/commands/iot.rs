use crate::command::{Command, CommandResult, HandlerResult};
use crate::context::ShellContext;

pub struct IotCommand;

const SECTIONS: &[(&str, &[&str])] = &[
    ("🔧 HARDWARE", &["Arduino Ecosystem • Raspberry Pi", "ESP32/ESP8266 • NodeMCU", "Custom PCB Design"]),
    ("📡 SENSOR NETWORK", &["Environmental (DHT22, BMP280)", "Motion & Proximity (PIR, HC-SR04)", "Light & Color (LDR, TCS3200)", "Smart Home Integration"]),
    ("🌐 CONNECTIVITY PROTOCOLS", &["WiFi • Bluetooth • LoRa", "MQTT • HTTP/HTTPS • WebSocket", "Real-time Data Streaming"]),
    ("☁️  CLOUD INTEGRATION", &["AWS IoT Core • Firebase", "Real-time Dashboards", "Predictive Analytics"]),
    ("🏠 SMART APPLICATIONS", &["Home Automation Systems", "Environmental Monitoring", "Security & Surveillance", "Energy Management"]),
];

impl Command for IotCommand {
    fn name(&self) -> &'static str {
        "iot"
    }

    fn description(&self) -> &'static str {
        "Show IoT expertise"
    }

    fn execute(&self, _args: &[String], _ctx: &mut ShellContext) -> HandlerResult {
        let body: Vec<String> = SECTIONS
            .iter()
            .map(|(title, items)| {
                let items: Vec<String> = items.iter().map(|i| format!("  {}", i)).collect();
                format!("{}\n{}", title, items.join("\n"))
            })
            .collect();
        Ok(CommandResult::Output(format!("🔌 IOT TOOLKIT\n\n{}", body.join("\n\n"))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::ctx;

    #[test]
    fn sections_are_indented_lists() {
        let text = IotCommand.execute(&[], &mut ctx()).unwrap().text().unwrap();
        assert!(text.starts_with("🔌 IOT TOOLKIT\n\n🔧 HARDWARE\n  Arduino Ecosystem"));
        assert!(text.ends_with("  Energy Management"));
    }
}
