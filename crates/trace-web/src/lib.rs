pub mod runner;

pub use runner::{board_projector, board_to_screen, TraceRunner, BOARD_SIZE};

use std::cell::RefCell;

use glam::Vec2;
use trace_engine::{PointerEvent, ViewportProjector, PROTOCOL_VERSION};
use wasm_bindgen::prelude::*;

// wasm-bindgen cannot export generic structs, so the runner lives in a
// thread-local and every export is a free function.
thread_local! {
    static RUNNER: RefCell<Option<TraceRunner<ViewportProjector>>> = RefCell::new(None);
}

/// Run `f` against the runner. Calls made before `tracer_init` are ignored.
fn with_runner<R: Default>(f: impl FnOnce(&mut TraceRunner<ViewportProjector>) -> R) -> R {
    RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
        Some(runner) => f(runner),
        None => {
            log::warn!("tracer not initialized, call tracer_init() first");
            R::default()
        }
    })
}

/// Create the tracing session.
///
/// `glyph_json` falls back to the built-in letter "A" and `config_json` to the
/// default tolerances. Invalid documents are thrown back to JS as an error string.
#[wasm_bindgen]
pub fn tracer_init(
    glyph_json: Option<String>,
    config_json: Option<String>,
    viewport_width: f32,
    viewport_height: f32,
) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = TraceRunner::for_board(
        glyph_json.as_deref(),
        config_json.as_deref(),
        Vec2::new(viewport_width, viewport_height),
    )
    .map_err(|err| {
        web_sys::console::error_1(&JsValue::from_str(&format!("tracer_init: {err}")));
        JsValue::from_str(&err.to_string())
    })?;

    let strokes = runner.stroke_count();
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("tracer: initialized with {strokes} strokes");
    Ok(())
}

#[wasm_bindgen]
pub fn tracer_resize(width: f32, height: f32) {
    with_runner(|r| r.resize(width, height));
}

#[wasm_bindgen]
pub fn tracer_tick() {
    with_runner(|r| r.tick());
}

#[wasm_bindgen]
pub fn tracer_reset() {
    with_runner(|r| r.reset());
}

#[wasm_bindgen]
pub fn tracer_pointer_down(x: f32, y: f32) {
    with_runner(|r| r.push_input(PointerEvent::Down { x, y }));
}

#[wasm_bindgen]
pub fn tracer_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(PointerEvent::Move { x, y }));
}

#[wasm_bindgen]
pub fn tracer_pointer_up(x: f32, y: f32) {
    with_runner(|r| r.push_input(PointerEvent::Up { x, y }));
}

#[wasm_bindgen]
pub fn tracer_pointer_leave() {
    with_runner(|r| r.push_input(PointerEvent::Leave));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_protocol_version() -> f32 {
    PROTOCOL_VERSION
}

#[wasm_bindgen]
pub fn get_events_ptr() -> *const f32 {
    RUNNER.with(|cell| {
        cell.borrow()
            .as_ref()
            .map_or(std::ptr::null(), |r| r.events_ptr())
    })
}

#[wasm_bindgen]
pub fn get_events_len() -> u32 {
    with_runner(|r| r.events_len())
}

#[wasm_bindgen]
pub fn get_cues_ptr() -> *const u8 {
    RUNNER.with(|cell| {
        cell.borrow()
            .as_ref()
            .map_or(std::ptr::null(), |r| r.cues_ptr())
    })
}

#[wasm_bindgen]
pub fn get_cues_len() -> u32 {
    with_runner(|r| r.cues_len())
}

/// Per-stroke progress as a fresh `Float32Array`.
#[wasm_bindgen]
pub fn get_stroke_progress() -> js_sys::Float32Array {
    RUNNER.with(|cell| match cell.borrow().as_ref() {
        Some(r) => js_sys::Float32Array::from(r.stroke_progress()),
        None => js_sys::Float32Array::new_with_length(0),
    })
}

#[wasm_bindgen]
pub fn get_current_stroke() -> u32 {
    with_runner(|r| r.current_stroke())
}

#[wasm_bindgen]
pub fn get_stroke_count() -> u32 {
    with_runner(|r| r.stroke_count())
}

#[wasm_bindgen]
pub fn get_overall_progress() -> f32 {
    with_runner(|r| r.overall_progress())
}

#[wasm_bindgen]
pub fn is_tracing() -> bool {
    with_runner(|r| r.is_tracing())
}

#[wasm_bindgen]
pub fn is_complete() -> bool {
    with_runner(|r| r.is_complete())
}
