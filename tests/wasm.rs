//! WASM binding tests, run with `wasm-pack test --node`

#![cfg(target_arch = "wasm32")]

use page_window::WasmPaginator;
use wasm_bindgen::{JsCast, JsError, JsValue};
use wasm_bindgen_test::*;

fn ok<T>(result: Result<T, JsError>) -> T {
    result.unwrap_or_else(|_| panic!("call was rejected"))
}

fn field(value: &JsValue, name: &str) -> JsValue {
    js_sys::Reflect::get(value, &JsValue::from_str(name)).unwrap()
}

#[wasm_bindgen_test]
fn test_construct_from_json() {
    let paginator = ok(WasmPaginator::new(Some(
        r#"{"totalItems": 1237, "itemsPerPage": 12, "currentItem": 61}"#.to_string(),
    )));
    assert_eq!(paginator.total_pages(), 104);
    assert_eq!(paginator.current_page(), 6);
}

#[wasm_bindgen_test]
fn test_invalid_json_config_rejected() {
    assert!(WasmPaginator::new(Some(r#"{"itemsPerPage": 0}"#.to_string())).is_err());
}

#[wasm_bindgen_test]
fn test_setters_validate_numbers() {
    let mut paginator = ok(WasmPaginator::new(None));
    assert!(paginator.set_total_items(50.0).is_ok());
    assert!(paginator.set_total_items(-1.0).is_err());
    assert!(paginator.set_edge_pages(1.5).is_err());
    assert_eq!(paginator.total_pages(), 5);
}

#[wasm_bindgen_test]
fn test_state_object() {
    let mut paginator = ok(WasmPaginator::new(None));
    ok(paginator.set_total_items(95.0));
    assert!(paginator.next());

    let state = ok(paginator.get_state());
    assert_eq!(field(&state, "currentPage").as_f64(), Some(2.0));
    let range = field(&state, "currentRange");
    assert_eq!(field(&range, "start").as_f64(), Some(11.0));
    assert_eq!(field(&range, "end").as_f64(), Some(20.0));
}

#[wasm_bindgen_test]
fn test_on_update_callback() {
    let mut paginator = ok(WasmPaginator::new(None));
    let seen = js_sys::Array::new();
    let sink = seen.clone();
    let callback = wasm_bindgen::closure::Closure::<dyn FnMut(JsValue)>::new(move |update| {
        sink.push(&update);
    });
    let function = callback.as_ref().unchecked_ref::<js_sys::Function>().clone();
    let id = paginator.on_update(function);

    ok(paginator.set_total_items(30.0));
    paginator.last();
    assert_eq!(seen.length(), 2);

    assert!(paginator.off_update(id));
    paginator.first();
    assert_eq!(seen.length(), 2);
    drop(callback);
}

#[wasm_bindgen_test]
fn test_throwing_listener_does_not_block_others() {
    let mut paginator = ok(WasmPaginator::new(None));
    paginator.on_update(js_sys::Function::new_no_args("throw new Error('listener failed')"));

    let seen = js_sys::Array::new();
    let sink = seen.clone();
    let callback = wasm_bindgen::closure::Closure::<dyn FnMut(JsValue)>::new(move |update| {
        sink.push(&update);
    });
    paginator.on_update(callback.as_ref().unchecked_ref::<js_sys::Function>().clone());

    ok(paginator.set_total_items(30.0));
    assert!(paginator.next());
    assert_eq!(seen.length(), 2);
    assert_eq!(paginator.current_item(), 11);
    drop(callback);
}

#[wasm_bindgen_test]
fn test_activate_by_name() {
    let mut paginator = ok(WasmPaginator::new(Some(r#"{"totalItems": 40}"#.to_string())));
    assert!(ok(paginator.activate("next")));
    assert_eq!(paginator.current_item(), 11);
    assert!(paginator.activate("sideways").is_err());
}
