#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod carousel;
pub mod catalog;
pub mod contact;
pub mod redirect;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // a second init (hot reload) is harmless
    console_log::init_with_level(log::Level::Debug).ok();
    leptos::mount::hydrate_body(App);
}
