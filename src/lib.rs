pub mod config;
pub mod logging;

// MVC Architecture
pub mod model;
pub mod view;
pub mod controller;

#[cfg(target_arch = "wasm32")]
use std::{cell::RefCell, rc::Rc};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, prelude::wasm_bindgen, JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::{AddEventListenerOptions, HtmlCanvasElement, MouseEvent, TouchEvent};

#[cfg(target_arch = "wasm32")]
use controller::{input::wasm as web_input, InputEvent, Viewer};
#[cfg(target_arch = "wasm32")]
use model::MissionParams;
#[cfg(target_arch = "wasm32")]
use view::CanvasSurface;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    logging::init(&config::LogConfig::default());
}

/// Orbit view bound to one canvas element.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub struct MoonView {
    viewer: Rc<RefCell<Viewer>>,
    surface: Rc<RefCell<CanvasSurface>>,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl MoonView {
    /// Take over `<canvas id=canvas_id>`: size it, hook mouse and touch
    /// input, and draw the default scene.
    pub fn attach(canvas_id: &str) -> Result<MoonView, JsValue> {
        let canvas = find_canvas(canvas_id)?;
        let surface = CanvasSurface::new(canvas.clone())?;
        surface.fit_to_element();

        let view = MoonView {
            viewer: Rc::new(RefCell::new(Viewer::new(&config::ViewConfig::default()))),
            surface: Rc::new(RefCell::new(surface)),
        };
        view.setup_input_listeners(&canvas)?;
        view.redraw();
        tracing::info!(canvas_id, "moon view attached");
        Ok(view)
    }

    /// Compute action for a launch time in Unix milliseconds (UTC) and the
    /// entered orbit parameters (km). Redraws and returns the results text.
    pub fn compute(
        &self,
        epoch_ms: f64,
        perigee_km: f64,
        apogee_km: f64,
        lunar_orbit_radius_km: f64,
    ) -> Result<String, JsValue> {
        if !epoch_ms.is_finite() {
            return Err(js_error("launch time is not a finite number"));
        }
        let time = chrono::DateTime::from_timestamp_millis(epoch_ms as i64)
            .ok_or_else(|| js_error(format!("launch time {epoch_ms} out of range")))?;
        let params = MissionParams { perigee_km, apogee_km, lunar_orbit_radius_km };
        let summary = self
            .viewer
            .borrow_mut()
            .compute(&mut *self.surface.borrow_mut(), time, params);
        Ok(summary.to_string())
    }

    #[wasm_bindgen(js_name = renderAt)]
    pub fn render_at(&self, x: f64, y: f64, z: f64) {
        self.viewer
            .borrow_mut()
            .render_at(&mut *self.surface.borrow_mut(), glam::DVec3::new(x, y, z));
    }

    pub fn redraw(&self) {
        self.viewer.borrow_mut().redraw(&mut *self.surface.borrow_mut());
    }
}

#[cfg(target_arch = "wasm32")]
impl MoonView {
    fn setup_input_listeners(&self, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
        // Mouse
        self.listen::<MouseEvent>(canvas, "mousedown", true, web_input::mouse_down_to_input)?;
        self.listen::<MouseEvent>(canvas, "mousemove", true, web_input::mouse_move_to_input)?;
        self.listen::<MouseEvent>(canvas, "mouseup", true, |_| InputEvent::PointerUp)?;

        // Touch; touchmove must be non-passive so it can cancel page scroll/zoom
        self.listen::<TouchEvent>(canvas, "touchstart", true, web_input::touch_start_to_input)?;
        self.listen::<TouchEvent>(canvas, "touchmove", false, web_input::touch_move_to_input)?;
        self.listen::<TouchEvent>(canvas, "touchend", true, web_input::touch_end_to_input)?;
        Ok(())
    }

    fn listen<E>(
        &self,
        canvas: &HtmlCanvasElement,
        kind: &str,
        passive: bool,
        to_input: fn(&E) -> InputEvent,
    ) -> Result<(), JsValue>
    where
        E: AsRef<web_sys::Event> + wasm_bindgen::convert::FromWasmAbi + 'static,
    {
        let viewer = self.viewer.clone();
        let surface = self.surface.clone();
        let callback = Closure::wrap(Box::new(move |e: E| {
            let event = to_input(&e);
            let response = viewer.borrow_mut().on_input(&mut *surface.borrow_mut(), &event);
            if response.prevent_default {
                e.as_ref().prevent_default();
            }
        }) as Box<dyn FnMut(E)>);

        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        canvas.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        // Listeners live as long as the page
        callback.forget();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
fn find_canvas(canvas_id: &str) -> Result<HtmlCanvasElement, JsValue> {
    let window = web_sys::window().ok_or(js_error("no global `window`"))?;
    let document = window.document().ok_or(js_error("no document on window"))?;
    document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| js_error(format!("no element with id `{canvas_id}`")))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| js_error(format!("`{canvas_id}` is not a canvas")))
}

#[cfg(target_arch = "wasm32")]
fn js_error<E: Into<String>>(msg: E) -> JsValue {
    JsValue::from_str(&msg.into())
}
