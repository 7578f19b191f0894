use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use web_sys::{window, CustomEvent, CustomEventInit};

/// State changes the page may want to react to (file tree widgets, prompts).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum VfsEvent {
    CreateDir { path: String },
    CreateFile { path: String, content: String },
    Delete { path: String },
    ChangeDir { path: String },
    Reset,
}

impl VfsEvent {
    /// DOM event name used when no callback is registered
    pub fn dom_name(&self) -> &'static str {
        match self {
            VfsEvent::CreateDir { .. } => "vfs-create-dir",
            VfsEvent::CreateFile { .. } => "vfs-create-file",
            VfsEvent::Delete { .. } => "vfs-delete",
            VfsEvent::ChangeDir { .. } => "vfs-change-dir",
            VfsEvent::Reset => "vfs-reset",
        }
    }
}

// hand the event to the page: registered callback first, DOM event as fallback
pub fn emit_vfs_event(event: &VfsEvent, callback: Option<&js_sys::Function>) {
    let detail = serde_wasm_bindgen::to_value(event).unwrap_or(JsValue::NULL);

    if let Some(callback) = callback {
        match callback.call2(&JsValue::NULL, &event.dom_name().into(), &detail) {
            Ok(_) => return,
            Err(e) => {
                web_sys::console::error_2(&"[sandbox vfs] event callback failed:".into(), &e);
            }
        }
    }

    let Some(win) = window() else {
        web_sys::console::warn_1(&"[sandbox vfs] no window, dropping event".into());
        return;
    };

    let init = CustomEventInit::new();
    init.set_bubbles(true);
    init.set_detail(&detail);

    match CustomEvent::new_with_event_init_dict(event.dom_name(), &init) {
        Ok(custom_event) => {
            if let Err(e) = win.dispatch_event(&custom_event) {
                web_sys::console::error_3(
                    &"[sandbox vfs] window dispatch failed:".into(),
                    &event.dom_name().into(),
                    &e,
                );
            }
        }
        Err(e) => {
            web_sys::console::error_3(
                &"[sandbox vfs] couldn't create event:".into(),
                &event.dom_name().into(),
                &e,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_a_tag() {
        let json = serde_json::to_value(VfsEvent::Delete { path: "/notes".into() }).unwrap();
        assert_eq!(json, serde_json::json!({ "event": "delete", "path": "/notes" }));
        assert_eq!(VfsEvent::Reset.dom_name(), "vfs-reset");
    }
}
