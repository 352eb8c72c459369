//! Starfolio - single-page portfolio with an interactive starfield
//!
//! - core: the constellation effect (point field, proximity tracker, fading
//!   line buffer), camera, config and page content; platform-agnostic
//! - app: egui front-end drawing the starfield and the page (feature `wasm`)
//! - starfolio-cli: headless driver for the effect (feature `cli`)

pub mod core;
pub mod time;

#[cfg(feature = "wasm")]
mod app;
#[cfg(feature = "wasm")]
mod theme;

#[cfg(feature = "wasm")]
pub use app::StarfolioApp;

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
mod web {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::app::StarfolioApp;

    #[wasm_bindgen(start)]
    pub fn main() {
        console_error_panic_hook::set_once();

        // Initialize tracing for browser console
        tracing_wasm::set_as_global_default();

        let web_options = eframe::WebOptions::default();

        wasm_bindgen_futures::spawn_local(async {
            let canvas = web_sys::window()
                .expect("no window")
                .document()
                .expect("no document")
                .get_element_by_id("canvas")
                .expect("no canvas element")
                .dyn_into::<web_sys::HtmlCanvasElement>()
                .expect("not a canvas element");

            eframe::WebRunner::new()
                .start(
                    canvas,
                    web_options,
                    Box::new(|cc| Ok(Box::new(StarfolioApp::new(cc)))),
                )
                .await
                .expect("Failed to start eframe");
        });
    }
}
