use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use phrase_runner::{PhraseConfig, Sender};

pub mod clipboard;
pub mod runner;

pub use runner::SessionRunner;

thread_local! {
    static RUNNER: RefCell<Option<SessionRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut SessionRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
        f(runner)
    })
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn install_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Start a session from `location.search` with the default settings.
#[wasm_bindgen]
pub fn game_init(search: &str) {
    start_session(search, PhraseConfig::default());
}

/// Start a session with settings parsed from a JSON string.
#[wasm_bindgen]
pub fn game_init_with_config(search: &str, config_json: &str) -> Result<(), JsValue> {
    let config = PhraseConfig::from_json(config_json).map_err(to_js_error)?;
    start_session(search, config);
    Ok(())
}

fn start_session(search: &str, config: PhraseConfig) {
    install_logging();
    let runner = SessionRunner::from_query(search, config);
    if runner.used_fallback() {
        web_sys::console::warn_1(&JsValue::from_str("no valid phrase in link, using default"));
    }
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("phrase-runner: initialized");
}

// ---- Gameplay ----

#[wasm_bindgen]
pub fn game_collect_piece(index: i32) -> bool {
    with_runner(|r| r.collect_piece(index))
}

#[wasm_bindgen]
pub fn game_reset() {
    with_runner(|r| r.reset());
}

#[wasm_bindgen]
pub fn next_spawn_index() -> i32 {
    with_runner(|r| r.next_spawn_index())
}

// ---- HUD accessors ----

#[wasm_bindgen]
pub fn get_reconstructed_phrase() -> String {
    with_runner(|r| r.reconstructed_phrase())
}

#[wasm_bindgen]
pub fn get_counter_label() -> String {
    with_runner(|r| r.counter_label())
}

#[wasm_bindgen]
pub fn get_collected_non_space_count() -> u32 {
    with_runner(|r| r.collected_non_space_count())
}

#[wasm_bindgen]
pub fn get_non_space_count() -> u32 {
    with_runner(|r| r.non_space_count())
}

#[wasm_bindgen]
pub fn get_collected_count() -> u32 {
    with_runner(|r| r.collected_count())
}

#[wasm_bindgen]
pub fn get_total_count() -> u32 {
    with_runner(|r| r.total_count())
}

#[wasm_bindgen]
pub fn is_complete() -> bool {
    with_runner(|r| r.is_complete())
}

#[wasm_bindgen]
pub fn get_non_space_indices() -> Vec<u32> {
    with_runner(|r| r.non_space_indices())
}

#[wasm_bindgen]
pub fn get_next_uncollected_index() -> i32 {
    with_runner(|r| r.next_uncollected_index())
}

#[wasm_bindgen]
pub fn get_piece(index: u32) -> Option<String> {
    with_runner(|r| r.piece(index))
}

#[wasm_bindgen]
pub fn get_score() -> u32 {
    with_runner(|r| r.score())
}

#[wasm_bindgen]
pub fn get_hud_json() -> Result<String, JsValue> {
    with_runner(|r| r.hud_json()).map_err(to_js_error)
}

/// Pending session events as a JSON array; the queue is emptied.
#[wasm_bindgen]
pub fn drain_events_json() -> Result<String, JsValue> {
    let events = with_runner(|r| r.drain_events());
    serde_json::to_string(&events).map_err(to_js_error)
}

// ---- Codec and sender page ----

#[wasm_bindgen]
pub fn encode_phrase(text: &str) -> String {
    phrase_runner::encode(text)
}

#[wasm_bindgen]
pub fn decode_phrase(token: &str) -> Result<String, JsValue> {
    phrase_runner::decode(token).map_err(to_js_error)
}

/// Build the game link for the sender page at `origin` + `pathname`.
#[wasm_bindgen]
pub fn build_share_link(origin: &str, pathname: &str, phrase: &str) -> Result<String, JsValue> {
    let mut sender = Sender::new(PhraseConfig::default(), origin, pathname);
    let link = sender.generate_link(phrase).map_err(to_js_error)?;
    Ok(link.to_string())
}

/// Copy `link` to the clipboard. Resolves once the browser has accepted the
/// write and rejects with the reason when it refuses.
#[wasm_bindgen]
pub async fn copy_share_link(link: String) -> Result<(), JsValue> {
    clipboard::write_text(&link).await.map_err(|err| {
        log::warn!("{}", err);
        to_js_error(err)
    })
}
