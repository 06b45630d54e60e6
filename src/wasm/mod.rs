//! WASM bindings for the paginator

pub mod flat_buffer;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::{Attribute, ConfigError, ListenerId, NavControl, PaginationConfig, Paginator};
use flat_buffer::StripBuffer;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// WASM-exposed paginator wrapper
#[wasm_bindgen]
pub struct WasmPaginator {
    paginator: Paginator,
    buffer: StripBuffer,
}

#[wasm_bindgen]
impl WasmPaginator {
    /// Create a paginator from a camelCase JSON config; `undefined` uses defaults
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<WasmPaginator, JsError> {
        let config = match config_json {
            Some(json) => PaginationConfig::from_json(&json)?,
            None => PaginationConfig::default(),
        };
        Ok(Self {
            paginator: Paginator::new(config)?,
            buffer: StripBuffer::new(),
        })
    }

    #[wasm_bindgen(getter, js_name = totalPages)]
    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages()
    }

    #[wasm_bindgen(getter, js_name = currentPage)]
    pub fn current_page(&self) -> usize {
        self.paginator.current_page()
    }

    #[wasm_bindgen(getter, js_name = currentItem)]
    pub fn current_item(&self) -> usize {
        self.paginator.current_item()
    }

    #[wasm_bindgen(js_name = setTotalItems)]
    pub fn set_total_items(&mut self, value: f64) -> Result<(), JsError> {
        self.set(Attribute::TotalItems, value)
    }

    #[wasm_bindgen(js_name = setItemsPerPage)]
    pub fn set_items_per_page(&mut self, value: f64) -> Result<(), JsError> {
        self.set(Attribute::ItemsPerPage, value)
    }

    #[wasm_bindgen(js_name = setCurrentItem)]
    pub fn set_current_item(&mut self, value: f64) -> Result<(), JsError> {
        self.set(Attribute::CurrentItem, value)
    }

    #[wasm_bindgen(js_name = setMaxVisiblePages)]
    pub fn set_max_visible_pages(&mut self, value: f64) -> Result<(), JsError> {
        self.set(Attribute::MaxVisiblePages, value)
    }

    #[wasm_bindgen(js_name = setEdgePages)]
    pub fn set_edge_pages(&mut self, value: f64) -> Result<(), JsError> {
        self.set(Attribute::EdgePages, value)
    }

    #[wasm_bindgen(js_name = setMiddlePages)]
    pub fn set_middle_pages(&mut self, value: f64) -> Result<(), JsError> {
        self.set(Attribute::MiddlePages, value)
    }

    #[wasm_bindgen(js_name = setMiddlePageGap)]
    pub fn set_middle_page_gap(&mut self, value: f64) -> Result<(), JsError> {
        self.set(Attribute::MiddlePageGap, value)
    }

    #[wasm_bindgen(js_name = setPrevNextMode)]
    pub fn set_prev_next_mode(&mut self, value: f64) -> Result<(), JsError> {
        self.set(Attribute::PrevNextMode, value)
    }

    #[wasm_bindgen(js_name = setFirstLastMode)]
    pub fn set_first_last_mode(&mut self, value: f64) -> Result<(), JsError> {
        self.set(Attribute::FirstLastMode, value)
    }

    /// Set a field from an HTML-style attribute, e.g. `("edge-pages", "2")`
    #[wasm_bindgen(js_name = setAttribute)]
    pub fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), JsError> {
        Ok(self.paginator.set_attribute(name, value)?)
    }

    #[wasm_bindgen(js_name = getAttribute)]
    pub fn get_attribute(&self, name: &str) -> Result<String, JsError> {
        Ok(self.paginator.attribute(name)?)
    }

    pub fn first(&mut self) -> bool {
        self.paginator.first()
    }

    pub fn last(&mut self) -> bool {
        self.paginator.last()
    }

    pub fn prev(&mut self) -> bool {
        self.paginator.prev()
    }

    pub fn next(&mut self) -> bool {
        self.paginator.next()
    }

    #[wasm_bindgen(js_name = goToPage)]
    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.paginator.go_to_page(page)
    }

    /// Click a navigation button by name: "first", "prev", "next" or "last"
    pub fn activate(&mut self, control: &str) -> Result<bool, JsError> {
        let control = match control {
            "first" => NavControl::First,
            "prev" => NavControl::Prev,
            "next" => NavControl::Next,
            "last" => NavControl::Last,
            other => return Err(JsError::new(&format!("unknown navigation control `{}`", other))),
        };
        Ok(self.paginator.activate(control))
    }

    /// Current update payload as a JS object
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> Result<JsValue, JsError> {
        to_js(&self.paginator.state())
    }

    /// Render strip (buttons, pages, gaps) as a JS object
    #[wasm_bindgen(js_name = getStrip)]
    pub fn get_strip(&self) -> Result<JsValue, JsError> {
        to_js(&self.paginator.strip())
    }

    /// Register `callback(update)`; returns an id for `offUpdate`
    #[wasm_bindgen(js_name = onUpdate)]
    pub fn on_update(&mut self, callback: js_sys::Function) -> u32 {
        let ListenerId(id) = self.paginator.subscribe(move |update| {
            if let Ok(value) = to_js(update) {
                // A throwing listener must not break the others
                if let Err(err) = callback.call1(&JsValue::NULL, &value) {
                    tracing::warn!(error = ?err, "update listener threw");
                }
            }
        });
        u32::try_from(id).unwrap_or(u32::MAX)
    }

    #[wasm_bindgen(js_name = offUpdate)]
    pub fn off_update(&mut self, id: u32) -> bool {
        self.paginator.unsubscribe(ListenerId(u64::from(id)))
    }

    /// Refresh the flat strip buffer and return its pointer into linear memory
    #[wasm_bindgen(js_name = stripBufferPtr)]
    pub fn strip_buffer_ptr(&mut self) -> u32 {
        self.buffer.write(self.paginator.window());
        self.buffer.u32_ptr()
    }

    /// Length of the flat strip buffer in u32 elements
    #[wasm_bindgen(js_name = stripBufferLen)]
    pub fn strip_buffer_len(&self) -> u32 {
        self.buffer.u32_len()
    }
}

impl WasmPaginator {
    fn set(&mut self, attr: Attribute, value: f64) -> Result<(), JsError> {
        let value = to_integer(attr, value)?;
        Ok(self.paginator.apply(attr, value)?)
    }
}

/// JS numbers are doubles; only integral values reach validation
fn to_integer(attr: Attribute, value: f64) -> Result<i64, ConfigError> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= i64::MAX as f64 {
        Ok(value as i64)
    } else {
        Err(ConfigError::InvalidAttributeValue {
            name: attr.name().to_string(),
            value: value.to_string(),
        })
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    let json = serde_json::to_string(value)?;
    js_sys::JSON::parse(&json).map_err(|_| JsError::new("failed to parse state JSON"))
}
