//! Console greeting for anyone who opens devtools.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::content::{BRAND, CONTACT_EMAIL};

/// Prints a short brand banner to the browser console on mount. Renders no DOM.
#[component]
pub fn ConsoleBrand() -> impl IntoView {
    Effect::new(move || print_brand());

    view! {}
}

fn print_brand() {
    if web_sys::window().is_none() {
        return;
    }

    web_sys::console::log_2(
        &JsValue::from_str(&format!("%c{BRAND} — trade-only wholesale")),
        &JsValue::from_str("color: #0f172a; font-weight: bold; font-size: 14px;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str(&format!("%cBuying for a store? Write to {CONTACT_EMAIL}")),
        &JsValue::from_str("color: #64748b;"),
    );
}
