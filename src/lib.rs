mod app;
mod components;
pub mod config;
pub mod form;
pub mod levels;
mod pages;
mod state;
pub mod tracker;
pub mod widget;

pub use app::App;
pub use config::EnvConfig;
pub use tracker::LevelTracker;
pub use widget::{ControlClasses, LevelNode, LevelWidget};

use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::logging::log!("requirement editor: mounting");
    mount_to_body(App);
}
