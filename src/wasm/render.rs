//! Canvas binding and the frame loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, HtmlCanvasElement, Window};

use super::canvas::CanvasTarget;
use crate::engine::Engine;
use crate::error::BackdropError;
use crate::theme::Theme;

/// JS-facing handle for one backdrop canvas.
///
/// The page constructs one of these, points its theme buttons at `setTheme`,
/// and calls `destroy` on teardown. The frame and resize closures are
/// intentionally leaked; they live as long as the page does.
#[wasm_bindgen]
pub struct BackdropApp {
    engine: Rc<RefCell<Engine>>,
    raf_id: Rc<Cell<i32>>,
}

#[wasm_bindgen]
impl BackdropApp {
    /// Attach to `<canvas id=canvas_id>` and start the frame loop.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<BackdropApp, JsValue> {
        let win = window().ok_or(BackdropError::WindowUnavailable)?;
        let document = win.document().ok_or(BackdropError::DocumentUnavailable)?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| BackdropError::CanvasNotFound(canvas_id.to_owned()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| BackdropError::CanvasNotFound(canvas_id.to_owned()))?;

        // Size the canvas to the window up front; later resizes flow through
        // the engine's debounced viewport.
        let (w, h) = window_size(&win);
        canvas.set_width(w as u32);
        canvas.set_height(h as u32);

        let target = CanvasTarget::new(&canvas)?;
        let engine = Rc::new(RefCell::new(Engine::new(w, h)));
        let raf_id = Rc::new(Cell::new(0));

        install_resize_listener(&win, &engine)?;
        start_loop(&win, &engine, target, &raf_id)?;

        Ok(BackdropApp { engine, raf_id })
    }

    /// Switch the active theme. Unknown tags are ignored.
    #[wasm_bindgen(js_name = setTheme)]
    pub fn set_theme(&self, tag: &str) {
        match Theme::parse(tag) {
            Some(theme) => self.engine.borrow_mut().set_theme(theme),
            None => log::debug!("ignoring unknown theme tag {tag:?}"),
        }
    }

    /// Stop the loop permanently and cancel the pending frame.
    pub fn destroy(&self) {
        self.engine.borrow_mut().destroy();
        if let Some(win) = window() {
            let _ = win.cancel_animation_frame(self.raf_id.get());
        }
    }
}

fn window_size(win: &Window) -> (f64, f64) {
    let w = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w, h)
}

fn install_resize_listener(win: &Window, engine: &Rc<RefCell<Engine>>) -> Result<(), JsValue> {
    let engine = engine.clone();
    let closure = Closure::wrap(Box::new(move || {
        if let Some(win) = window() {
            let (w, h) = window_size(&win);
            let now = win
                .performance()
                .map(|p| p.now())
                .unwrap_or_else(js_sys::Date::now);
            engine.borrow_mut().notify_resize(now, w, h);
        }
    }) as Box<dyn FnMut()>);
    win.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn start_loop(
    win: &Window,
    engine: &Rc<RefCell<Engine>>,
    mut target: CanvasTarget,
    raf_id: &Rc<Cell<i32>>,
) -> Result<(), JsValue> {
    // `f` holds the animation-frame closure so that it can keep calling
    // `request_animation_frame` on itself. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let engine = engine.clone();
    let raf = raf_id.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        if !engine.borrow_mut().tick(now, &mut target) {
            // Destroyed: let the closure chain end here.
            return;
        }
        if let Some(win) = window() {
            if let Ok(id) =
                win.request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref())
            {
                raf.set(id);
            }
        }
    }) as Box<dyn FnMut(f64)>));

    let id = win.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref())?;
    raf_id.set(id);
    Ok(())
}
