//! The tree every session starts from. File bodies live next to this module
//! under `seed/` and are baked in at compile time.

use crate::vfs::{stamp, VfsNode};

const RW: &str = "-rw-r--r--";
const RWX: &str = "-rwxr-xr-x";

fn doc(name: &str, content: &str, modified: &str) -> VfsNode {
    VfsNode::file(name, content, RW, stamp(modified))
}

pub fn seeded_root() -> VfsNode {
    VfsNode::directory(
        "/",
        stamp("2025-01-15 10:30"),
        vec![
            doc("about.txt", include_str!("seed/about.txt"), "2025-01-15 09:15"),
            VfsNode::directory(
                "projects",
                stamp("2025-01-15 11:45"),
                vec![
                    doc("portfolio.md", include_str!("seed/projects/portfolio.md"), "2025-01-15 11:45"),
                    doc("ecommerce.md", include_str!("seed/projects/ecommerce.md"), "2025-01-10 14:20"),
                    doc("iot-dashboard.md", include_str!("seed/projects/iot-dashboard.md"), "2025-01-08 16:30"),
                ],
            ),
            VfsNode::directory(
                "infrastructure",
                stamp("2025-01-15 08:45"),
                vec![
                    doc("topology.txt", include_str!("seed/infrastructure/topology.txt"), "2025-01-15 08:45"),
                    doc("docker.txt", include_str!("seed/infrastructure/docker.txt"), "2025-01-12 13:20"),
                    doc("aws-config.txt", include_str!("seed/infrastructure/aws-config.txt"), "2025-01-14 10:15"),
                ],
            ),
            VfsNode::directory(
                "logs",
                stamp("2025-01-15 12:00"),
                vec![
                    doc("security.log", include_str!("seed/logs/security.log"), "2025-01-15 12:00"),
                    doc("system.log", include_str!("seed/logs/system.log"), "2025-01-15 12:00"),
                    doc("deployment.log", include_str!("seed/logs/deployment.log"), "2025-01-15 09:30"),
                ],
            ),
            VfsNode::directory(
                "devices",
                stamp("2025-01-15 10:15"),
                vec![
                    doc("esp32.txt", include_str!("seed/devices/esp32.txt"), "2025-01-15 10:15"),
                    doc("raspberrypi.txt", include_str!("seed/devices/raspberrypi.txt"), "2025-01-15 10:10"),
                    doc("arduino.txt", include_str!("seed/devices/arduino.txt"), "2025-01-12 15:45"),
                ],
            ),
            VfsNode::directory(
                "scripts",
                stamp("2025-01-14 16:20"),
                vec![
                    VfsNode::file("deploy.sh", include_str!("seed/scripts/deploy.sh"), RWX, stamp("2025-01-14 16:20")),
                    VfsNode::file("backup.sh", include_str!("seed/scripts/backup.sh"), RWX, stamp("2025-01-13 08:30")),
                ],
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_in_the_seed_is_user_created() {
        fn check(node: &VfsNode) {
            assert!(!node.is_user_created(), "{} marked user-created", node.name());
            node.children().iter().for_each(check);
        }
        check(&seeded_root());
    }

    #[test]
    fn seed_is_deterministic() {
        assert_eq!(seeded_root(), seeded_root());
    }
}
