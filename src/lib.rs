// browser terminal for the security sandbox overlay
// the page owns rendering, this owns the fake file system and the commands
pub mod animation;
pub mod command;
pub mod commands;
pub mod context;
pub mod error;
pub mod seed;
pub mod session;
pub mod shell;
pub mod vfs;
pub mod vfs_events;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use animation::{play, Playback, PlaybackOutcome};
use command::AnimationFrame;
use context::ShellOptions;
use session::{ShellSession, Submission};
use vfs_events::emit_vfs_event;

pub use error::{ShellError, ShellResult};
pub use shell::CommandShell;

// plain objects on the js side, not Maps
fn to_js<T: Serialize>(value: &T) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::NULL)
}

// response wrapper for js comms
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalResponse {
    pub success: bool,
    pub submission: Submission,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub cwd: String,
    pub chat_mode: bool,
}

impl TerminalResponse {
    fn new(submission: Submission, session: &ShellSession) -> Self {
        let (success, text) = match &submission {
            Submission::Result(result) => (!result.is_error(), result.text()),
            Submission::ChatMessage(msg) => (true, Some(msg.clone())),
            Submission::Ignored | Submission::Closed => (true, None),
        };
        Self {
            success,
            submission,
            text,
            cwd: session.shell().current_path().to_string(),
            chat_mode: session.is_chat_mode(),
        }
    }
}

// main terminal struct - keeps state between calls
// session is shared with in-flight boot futures
#[wasm_bindgen]
pub struct Terminal {
    session: Rc<RefCell<ShellSession>>,
    playback: Playback,
    event_callback: Option<js_sys::Function>,
}

#[wasm_bindgen]
impl Terminal {
    /// `options` is an optional plain object, see `ShellOptions`.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Terminal {
        let options = if options.is_undefined() || options.is_null() {
            ShellOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options).unwrap_or_else(|e| {
                web_sys::console::warn_2(&"[sandbox] bad terminal options, using defaults:".into(), &e.into());
                ShellOptions::default()
            })
        };
        let session = ShellSession::new(options);
        web_sys::console::log_2(&"[sandbox] terminal ready, session".into(), &session.id().to_string().into());
        Terminal {
            session: Rc::new(RefCell::new(session)),
            playback: Playback::new(),
            event_callback: None,
        }
    }

    /// Callback receives `(eventName, detail)`; without one, events go to `window`.
    #[wasm_bindgen]
    pub fn set_event_callback(&mut self, callback: js_sys::Function) {
        self.event_callback = Some(callback);
    }

    // main entry point - run a line and return the serialized response
    #[wasm_bindgen]
    pub fn execute_command(&mut self, input: &str) -> JsValue {
        let response = {
            let mut session = self.session.borrow_mut();
            let submission = session.submit(input);
            // a new command replaces whatever animation is still running
            if submission != Submission::Ignored {
                self.playback.cancel();
            }
            TerminalResponse::new(submission, &session)
        };
        self.flush_events();
        to_js(&response)
    }

    /// Plays `frames` through `on_frame`; resolves to `true` when every frame
    /// was shown, `false` when a later playback took over.
    #[wasm_bindgen]
    pub fn play_animation(&self, frames: JsValue, on_frame: js_sys::Function) -> js_sys::Promise {
        let frames: Vec<AnimationFrame> = match serde_wasm_bindgen::from_value(frames) {
            Ok(frames) => frames,
            Err(e) => {
                web_sys::console::error_2(&"[sandbox] couldn't read animation frames:".into(), &e.into());
                Vec::new()
            }
        };
        let ticket = self.playback.begin();
        wasm_bindgen_futures::future_to_promise(async move {
            let outcome = play(&frames, &ticket, TimeoutFuture::new, |frame| emit_frame(&on_frame, frame)).await;
            Ok(JsValue::from_bool(outcome == PlaybackOutcome::Completed))
        })
    }

    /// Runs the boot sequence; input is ignored until it resolves.
    #[wasm_bindgen]
    pub fn boot(&self, on_frame: js_sys::Function) -> js_sys::Promise {
        let frames = self.session.borrow_mut().boot_frames();
        let session = Rc::clone(&self.session);
        let ticket = self.playback.begin();
        wasm_bindgen_futures::future_to_promise(async move {
            let outcome = play(&frames, &ticket, TimeoutFuture::new, |frame| emit_frame(&on_frame, frame)).await;
            // cancelled or not, the prompt has to come back
            session.borrow_mut().finish_boot();
            Ok(JsValue::from_bool(outcome == PlaybackOutcome::Completed))
        })
    }

    #[wasm_bindgen]
    pub fn cancel_animation(&self) {
        self.playback.cancel();
    }

    #[wasm_bindgen]
    pub fn history_up(&mut self) -> Option<String> {
        self.session.borrow_mut().history_up()
    }

    #[wasm_bindgen]
    pub fn history_down(&mut self) -> String {
        self.session.borrow_mut().history_down()
    }

    #[wasm_bindgen]
    pub fn get_current_directory(&self) -> String {
        self.session.borrow().shell().current_path().to_string()
    }

    /// Detached copy of the tree, cursor and path history.
    #[wasm_bindgen]
    pub fn get_filesystem_state(&self) -> JsValue {
        to_js(&self.session.borrow().shell().snapshot())
    }

    // name, description, usage and aliases of every command
    #[wasm_bindgen]
    pub fn get_command_list(&self) -> JsValue {
        to_js(&self.session.borrow().shell().registry().catalog())
    }

    #[wasm_bindgen]
    pub fn suggest(&self, prefix: &str) -> JsValue {
        to_js(&self.session.borrow().shell().suggestions(prefix))
    }

    #[wasm_bindgen]
    pub fn is_chat_mode(&self) -> bool {
        self.session.borrow().is_chat_mode()
    }

    #[wasm_bindgen]
    pub fn is_closed(&self) -> bool {
        self.session.borrow().is_closed()
    }

    #[wasm_bindgen]
    pub fn session_id(&self) -> String {
        self.session.borrow().id().to_string()
    }

    #[wasm_bindgen]
    pub fn prompt(&self) -> String {
        let session = self.session.borrow();
        let ctx = session.shell().context();
        format!("{} {}", ctx.vfs.current_path(), ctx.options.prompt)
    }

    fn flush_events(&mut self) {
        let events = self.session.borrow_mut().shell_mut().drain_events();
        for event in &events {
            emit_vfs_event(event, self.event_callback.as_ref());
        }
    }
}

fn emit_frame(on_frame: &js_sys::Function, frame: &AnimationFrame) {
    if let Err(e) = on_frame.call1(&JsValue::NULL, &to_js(frame)) {
        web_sys::console::error_2(&"[sandbox] frame callback failed:".into(), &e);
    }
}
