//! Animated theme backdrops for the arcade landing page.
//!
//! Three particle fields (a drifting starfield, a connected orb field and a
//! rising mote field), each bound to one visual theme. The simulation core is
//! plain Rust and compiles (and is tested) on any target; the `wasm` module
//! binds it to a `<canvas>`, `requestAnimationFrame` and the window resize
//! stream when building for the browser.

pub mod config;
pub mod debounce;
pub mod engine;
pub mod error;
pub mod pool;
pub mod render;
pub mod theme;
pub mod viewport;

// Only compile the browser bindings when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    pub(crate) mod canvas;
    pub(crate) mod render;

    /// Module bootstrap: panic reporting and console logging. The page
    /// decides when to construct a `BackdropApp`.
    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::render::BackdropApp;
