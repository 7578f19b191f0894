use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{ShellError, ShellResult};
use crate::vfs_events::VfsEvent;

pub const SEPARATOR: &str = "/";
pub const DEFAULT_PATH_HISTORY: usize = 50;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// parse a `YYYY-MM-DD HH:MM` stamp, epoch if it doesn't parse
pub fn stamp(text: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(text, TIME_FORMAT).unwrap_or_default()
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum VfsNode {
    File {
        name: String,
        content: String,
        permissions: String,
        modified: NaiveDateTime,
        created: Option<NaiveDateTime>,
        user_created: bool,
    },
    Directory {
        name: String,
        // kept in insertion order, listings rely on it
        children: Vec<VfsNode>,
        permissions: String,
        modified: NaiveDateTime,
        created: Option<NaiveDateTime>,
        user_created: bool,
    },
}

impl VfsNode {
    pub fn file(name: &str, content: &str, permissions: &str, modified: NaiveDateTime) -> Self {
        VfsNode::File {
            name: name.to_string(),
            content: content.to_string(),
            permissions: permissions.to_string(),
            modified,
            created: None,
            user_created: false,
        }
    }

    pub fn directory(name: &str, modified: NaiveDateTime, children: Vec<VfsNode>) -> Self {
        VfsNode::Directory {
            name: name.to_string(),
            children,
            permissions: "drwxr-xr-x".to_string(),
            modified,
            created: None,
            user_created: false,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            VfsNode::File { name, .. } | VfsNode::Directory { name, .. } => name,
        }
    }

    pub fn permissions(&self) -> &str {
        match self {
            VfsNode::File { permissions, .. } | VfsNode::Directory { permissions, .. } => permissions,
        }
    }

    pub fn modified(&self) -> NaiveDateTime {
        match self {
            VfsNode::File { modified, .. } | VfsNode::Directory { modified, .. } => *modified,
        }
    }

    pub fn modified_label(&self) -> String {
        self.modified().format(TIME_FORMAT).to_string()
    }

    pub fn is_user_created(&self) -> bool {
        match self {
            VfsNode::File { user_created, .. } | VfsNode::Directory { user_created, .. } => *user_created,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, VfsNode::Directory { .. })
    }

    /// byte length of the content, directories report 0
    pub fn size(&self) -> u64 {
        match self {
            VfsNode::File { content, .. } => content.len() as u64,
            VfsNode::Directory { .. } => 0,
        }
    }

    pub fn icon(&self) -> &'static str {
        if self.is_dir() { "📁" } else { "📄" }
    }

    pub fn children(&self) -> &[VfsNode] {
        match self {
            VfsNode::Directory { children, .. } => children,
            VfsNode::File { .. } => &[],
        }
    }

    pub fn child(&self, name: &str) -> Option<&VfsNode> {
        self.children().iter().find(|c| c.name() == name)
    }

    fn child_mut(&mut self, name: &str) -> Option<&mut VfsNode> {
        match self {
            VfsNode::Directory { children, .. } => children.iter_mut().find(|c| c.name() == name),
            VfsNode::File { .. } => None,
        }
    }
}

/// Read-only view handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSystemState {
    pub current_path: String,
    pub path_history: Vec<String>,
    pub file_system: VfsNode,
}

#[derive(Debug, Clone)]
pub struct VirtualFileSystem {
    root: VfsNode,
    seed: VfsNode,
    current_path: String,
    path_history: Vec<String>,
    history_limit: usize,
    events: Vec<VfsEvent>,
}

impl Default for VirtualFileSystem {
    fn default() -> Self {
        Self::new(crate::seed::seeded_root())
    }
}

impl VirtualFileSystem {
    pub fn new(seed: VfsNode) -> Self {
        Self {
            root: seed.clone(),
            seed,
            current_path: SEPARATOR.to_string(),
            path_history: vec![SEPARATOR.to_string()],
            history_limit: DEFAULT_PATH_HISTORY,
            events: Vec::new(),
        }
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit.max(1);
        self
    }

    pub fn root(&self) -> &VfsNode {
        &self.root
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn path_history(&self) -> &[String] {
        &self.path_history
    }

    /// Turn `path` into an absolute, normalized path. Does not check existence.
    pub fn resolve_path(&self, path: &str) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if !path.starts_with(SEPARATOR) {
            parts.extend(self.current_path.split('/').filter(|p| !p.is_empty()));
        }
        for segment in path.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    parts.pop();
                }
                other => parts.push(other),
            }
        }
        format!("/{}", parts.join("/"))
    }

    pub fn node_at(&self, path: &str) -> Option<&VfsNode> {
        let resolved = self.resolve_path(path);
        let mut node = &self.root;
        for part in resolved.split('/').filter(|p| !p.is_empty()) {
            node = node.child(part)?;
        }
        Some(node)
    }

    fn node_at_mut(&mut self, path: &str) -> Option<&mut VfsNode> {
        let resolved = self.resolve_path(path);
        let mut node = &mut self.root;
        for part in resolved.split('/').filter(|p| !p.is_empty()) {
            node = node.child_mut(part)?;
        }
        Some(node)
    }

    /// Directory under the cursor, root if the cursor went stale.
    pub fn current_dir(&self) -> &VfsNode {
        self.node_at(&self.current_path).unwrap_or(&self.root)
    }

    /// Moves the cursor without validating; callers check with `node_at` first.
    pub fn set_current_path(&mut self, path: &str) {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { SEPARATOR } else { trimmed };
        self.current_path = normalized.to_string();
        self.path_history.push(normalized.to_string());
        if self.path_history.len() > self.history_limit {
            let excess = self.path_history.len() - self.history_limit;
            self.path_history.drain(..excess);
        }
        self.events.push(VfsEvent::ChangeDir { path: normalized.to_string() });
    }

    /// Shared validation for the create operations; hands back the target
    /// directory's child list and its absolute path.
    fn creation_target(&mut self, name: &str, target: Option<&str>, noun: &str) -> ShellResult<(&mut Vec<VfsNode>, String)> {
        let target = target.map(str::to_string).unwrap_or_else(|| self.current_path.clone());
        let absolute = self.resolve_path(&target);
        let children = match self.node_at_mut(&absolute) {
            Some(VfsNode::Directory { children, .. }) => children,
            Some(VfsNode::File { .. }) => return Err(ShellError::NotADirectory(target)),
            None => return Err(ShellError::NotFound(format!("Directory not found: {}", target))),
        };
        if children.iter().any(|c| c.name() == name) {
            return Err(ShellError::AlreadyExists(format!("{} already exists: {}", noun, name)));
        }
        if !is_valid_name(name) {
            return Err(ShellError::InvalidName(format!("Invalid {} name: {}", noun.to_lowercase(), name)));
        }
        Ok((children, absolute))
    }

    pub fn create_directory(&mut self, name: &str, target: Option<&str>) -> ShellResult<String> {
        let (children, parent) = self.creation_target(name, target, "Directory")?;
        let stamp = now();
        children.push(VfsNode::Directory {
            name: name.to_string(),
            children: Vec::new(),
            permissions: "drwxr-xr-x".to_string(),
            modified: stamp,
            created: Some(stamp),
            user_created: true,
        });
        let path = join_path(&parent, name);
        tracing::debug!(%path, "directory created");
        self.events.push(VfsEvent::CreateDir { path });
        Ok(format!("Directory created: {}", name))
    }

    pub fn create_file(&mut self, name: &str, content: &str, target: Option<&str>) -> ShellResult<String> {
        let (children, parent) = self.creation_target(name, target, "File")?;
        let stamp = now();
        children.push(VfsNode::File {
            name: name.to_string(),
            content: content.to_string(),
            permissions: "-rw-r--r--".to_string(),
            modified: stamp,
            created: Some(stamp),
            user_created: true,
        });
        let path = join_path(&parent, name);
        tracing::debug!(%path, bytes = content.len(), "file created");
        self.events.push(VfsEvent::CreateFile { path, content: content.to_string() });
        Ok(format!("File created: {}", name))
    }

    /// Removes a user-created entry. Seeded entries stay put for the whole session.
    pub fn delete_entry(&mut self, name: &str, target: Option<&str>) -> ShellResult<String> {
        if matches!(name, "/" | "." | "..") {
            return Err(ShellError::Protected("Cannot delete system directories".to_string()));
        }
        let target = target.map(str::to_string).unwrap_or_else(|| self.current_path.clone());
        let absolute = self.resolve_path(&target);
        let children = match self.node_at_mut(&absolute) {
            Some(VfsNode::Directory { children, .. }) => children,
            Some(VfsNode::File { .. }) => return Err(ShellError::NotADirectory(target)),
            None => return Err(ShellError::NotFound(format!("Directory not found: {}", target))),
        };
        let index = children
            .iter()
            .position(|c| c.name() == name)
            .ok_or_else(|| ShellError::NotFound(format!("File or directory not found: {}", name)))?;
        if !children[index].is_user_created() {
            return Err(ShellError::Protected(format!("Cannot delete system file: {}", name)));
        }
        let removed = children.remove(index);
        let path = join_path(&absolute, name);
        tracing::debug!(%path, "entry deleted");
        self.events.push(VfsEvent::Delete { path });
        let noun = if removed.is_dir() { "Directory" } else { "File" };
        Ok(format!("{} deleted: {}", noun, name))
    }

    /// Back to the seeded tree, cursor at root.
    pub fn reset(&mut self) {
        self.root = self.seed.clone();
        self.current_path = SEPARATOR.to_string();
        self.path_history = vec![SEPARATOR.to_string()];
        tracing::debug!("file system reset");
        self.events.push(VfsEvent::Reset);
    }

    pub fn snapshot(&self) -> FileSystemState {
        FileSystemState {
            current_path: self.current_path.clone(),
            path_history: self.path_history.clone(),
            file_system: self.root.clone(),
        }
    }

    /// Every node below root, depth first, with its absolute path.
    pub fn walk(&self) -> Vec<(String, &VfsNode)> {
        fn visit<'a>(node: &'a VfsNode, path: &str, out: &mut Vec<(String, &'a VfsNode)>) {
            for child in node.children() {
                let child_path = join_path(path, child.name());
                out.push((child_path.clone(), child));
                visit(child, &child_path, out);
            }
        }
        let mut out = Vec::new();
        visit(&self.root, SEPARATOR, &mut out);
        out
    }

    pub fn render_tree(&self) -> String {
        self.render_tree_to(None)
    }

    /// Tree of the whole file system; `max_depth` of 1 shows only root's children.
    pub fn render_tree_to(&self, max_depth: Option<usize>) -> String {
        let mut lines = Vec::new();
        tree_lines(self.root.children(), "", 1, max_depth, &mut lines);
        lines.join("\n")
    }

    pub fn take_events(&mut self) -> Vec<VfsEvent> {
        std::mem::take(&mut self.events)
    }
}

fn tree_lines(children: &[VfsNode], prefix: &str, depth: usize, max_depth: Option<usize>, lines: &mut Vec<String>) {
    if max_depth.is_some_and(|max| depth > max) {
        return;
    }
    for (i, child) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        let connector = if last { "└── " } else { "├── " };
        let mark = if child.is_user_created() { " *" } else { "" };
        lines.push(format!("{}{}{} {}{}", prefix, connector, child.icon(), child.name(), mark));
        let next = format!("{}{}", prefix, if last { "    " } else { "│   " });
        tree_lines(child.children(), &next, depth + 1, max_depth, lines);
    }
}

pub fn join_path(parent: &str, name: &str) -> String {
    if parent == SEPARATOR {
        format!("/{}", name)
    } else {
        format!("{}/{}", parent, name)
    }
}

/// names are limited to `[a-zA-Z0-9._-]+`, and `.`/`..` are taken by path resolution
pub fn is_valid_name(name: &str) -> bool {
    !matches!(name, "" | "." | "..") && name.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}

/// 1536 -> "1.5KB", 0 -> "0B"
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}{}", rounded as u64, UNITS[unit])
    } else {
        format!("{:.1}{}", rounded, UNITS[unit])
    }
}
