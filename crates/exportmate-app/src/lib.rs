//! ExportMate App: WASM entry point.
//!
//! This crate is the composition root (DI wiring layer).
//! It assembles the browser transport and hands it to the egui UI.
//! Native builds compile it to an empty library.

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
const CANVAS_ID: &str = "exportmate_canvas";

/// WASM entry point: runs when the module loads
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn main() {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("ExportMate WASM starting...");

    let web_options = eframe::WebOptions::default();

    // Get the canvas element by ID
    let document = web_sys::window()
        .expect("No window")
        .document()
        .expect("No document");
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .expect("No canvas element with id 'exportmate_canvas'")
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .expect("Element is not a canvas");

    wasm_bindgen_futures::spawn_local(async move {
        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(app::ExportMateApp::new(cc)))),
            )
            .await
            .expect("Failed to start eframe");
    });
}
