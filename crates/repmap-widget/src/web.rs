//! Browser bindings.
//!
//! The host page forwards DOM events as JSON, performs the effects returned
//! by [`WebWidget::dispatch`] with `fetch`, dispatches their completion events
//! back, and renders [`WebWidget::snapshot`].

use wasm_bindgen::prelude::*;

use crate::event::Event;
use crate::widget::WidgetState;

#[wasm_bindgen(start)]
pub fn wasm_main() {
    // Better panic messages in the browser console
    console_error_panic_hook::set_once();
}

fn js_error(e: serde_json::Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
#[derive(Default)]
pub struct WebWidget {
    state: WidgetState,
}

#[wasm_bindgen]
impl WebWidget {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebWidget {
        WebWidget::default()
    }

    /// Apply a JSON event such as `{"type": "state_selected", "abbr": "CA"}`.
    /// Returns the effects to perform as a JSON array.
    pub fn dispatch(&mut self, event: &str) -> Result<String, JsValue> {
        let event: Event = serde_json::from_str(event).map_err(js_error)?;
        let effects = self.state.update(event);
        serde_json::to_string(&effects).map_err(js_error)
    }

    pub fn snapshot(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.state).map_err(js_error)
    }

    /// CSS transform for the map container.
    pub fn transform(&self) -> String {
        self.state.zoom.transform()
    }
}
