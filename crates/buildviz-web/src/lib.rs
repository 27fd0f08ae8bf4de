pub mod app;
pub mod components;
pub mod ticker;

use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub use app::{App, Dashboard};

/// Id of the element in `index.html` the dashboard mounts into.
pub const ROOT_ID: &str = "root";

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    mount();
}

pub fn mount() {
    let Some(element) = document().get_element_by_id(ROOT_ID) else {
        web_sys::console::error_1(&format!("mount point #{ROOT_ID} not found").into());
        return;
    };
    let Ok(root) = element.dyn_into::<HtmlElement>() else {
        web_sys::console::error_1(&format!("#{ROOT_ID} is not an HTML element").into());
        return;
    };
    leptos::mount::mount_to(root, App).forget();
}
