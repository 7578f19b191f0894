//! Browser facade checks, run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use sandbox_term::Terminal;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn field(value: &JsValue, key: &str) -> JsValue {
    js_sys::Reflect::get(value, &key.into()).unwrap_or(JsValue::UNDEFINED)
}

#[wasm_bindgen_test]
fn execute_returns_plain_objects() {
    let mut term = Terminal::new(JsValue::UNDEFINED);
    let response = term.execute_command("pwd");
    assert_eq!(field(&response, "success"), JsValue::TRUE);
    assert_eq!(field(&response, "cwd").as_string().as_deref(), Some("/"));
    assert_eq!(field(&response, "text").as_string().as_deref(), Some("📍 Current directory: /"));
}

#[wasm_bindgen_test]
fn errors_report_failure() {
    let mut term = Terminal::new(JsValue::NULL);
    let response = term.execute_command("rm about.txt");
    assert_eq!(field(&response, "success"), JsValue::FALSE);
}

#[wasm_bindgen_test]
fn callback_receives_vfs_events() {
    let mut term = Terminal::new(JsValue::UNDEFINED);
    let seen = js_sys::Array::new();
    let sink = seen.clone();
    let callback = wasm_bindgen::closure::Closure::<dyn FnMut(JsValue, JsValue)>::new(move |name: JsValue, _detail: JsValue| {
        sink.push(&name);
    });
    term.set_event_callback(callback.as_ref().unchecked_ref::<js_sys::Function>().clone());
    term.execute_command("mkdir notes");
    term.execute_command("cd notes");
    assert_eq!(seen.length(), 2);
    assert_eq!(seen.get(0).as_string().as_deref(), Some("vfs-create-dir"));
    assert_eq!(seen.get(1).as_string().as_deref(), Some("vfs-change-dir"));
    assert_eq!(term.get_current_directory(), "/notes");
}

#[wasm_bindgen_test]
fn options_and_history_navigation() {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"prompt".into(), &"$".into()).unwrap();
    let mut term = Terminal::new(options.into());
    assert_eq!(term.prompt(), "/ $");
    term.execute_command("ls");
    term.execute_command("tree");
    assert_eq!(term.history_up().as_deref(), Some("tree"));
    assert_eq!(term.history_down(), "");
}

#[wasm_bindgen_test]
async fn animation_resolves_after_every_frame() {
    let term = Terminal::new(JsValue::UNDEFINED);
    let frames = js_sys::JSON::parse(r#"[{"text":"a","delayMs":1,"style":"system"},{"text":"b","delayMs":0,"style":"output"}]"#).unwrap();
    let count = std::rc::Rc::new(std::cell::Cell::new(0));
    let counter = count.clone();
    let on_frame = wasm_bindgen::closure::Closure::<dyn FnMut(JsValue)>::new(move |_frame: JsValue| {
        counter.set(counter.get() + 1);
    });
    let promise = term.play_animation(frames, on_frame.as_ref().unchecked_ref::<js_sys::Function>().clone());
    let done = wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
    assert_eq!(done, JsValue::TRUE);
    assert_eq!(count.get(), 2);
}
