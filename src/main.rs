use aprende_rust::StudyPlanApp;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Plan de Estudio de Rust",
        options,
        Box::new(|_cc| Ok(Box::new(StudyPlanApp::new()))),
    )
}

// Arranque para la versión web: pinta sobre el canvas de la página
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirige los macros de `log` a console.log
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("no hay window")
            .document()
            .expect("no hay document");
        let canvas = document
            .get_element_by_id("aprende_rust_canvas")
            .expect("falta el elemento #aprende_rust_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("#aprende_rust_canvas no es un canvas");

        let resultado = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::new(StudyPlanApp::new()))),
            )
            .await;

        if let Err(err) = resultado {
            log::error!("No se pudo arrancar eframe: {err:?}");
        }
    });
}
