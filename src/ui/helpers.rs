// src/ui/helpers.rs
use egui::{Color32, RichText, SelectableLabel, Ui};

/// Naranja "Rust" usado como color de acento en títulos y secciones.
pub const RUST_ORANGE: Color32 = Color32::from_rgb(247, 76, 0);

/// Etiqueta de sección de la barra lateral (PLAN DE ESTUDIO, ANEXOS).
pub fn section_label(ui: &mut Ui, text: &str) {
    ui.label(
        RichText::new(text.to_uppercase())
            .size(11.0)
            .weak()
            .strong(),
    );
    ui.add_space(4.0);
}

/// Fila clicable de la barra lateral. Devuelve `true` al pulsarla;
/// `active` la resalta como la entrada actual.
pub fn sidebar_button(ui: &mut Ui, label: &str, active: bool) -> bool {
    let width = ui.available_width();
    let clicked = ui
        .add_sized([width, 30.0], SelectableLabel::new(active, label))
        .clicked();
    ui.add_space(2.0);
    clicked
}
