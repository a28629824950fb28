pub mod resources;
pub mod sites;
pub mod solutions;
pub mod week;

use crate::ui::helpers::RUST_ORANGE;
use egui::{RichText, Ui};

/// Cabecera común de las vistas de anexo: título subrayado más párrafo
/// introductorio.
pub(crate) fn annex_heading(ui: &mut Ui, title: &str, intro: &str) {
    ui.label(RichText::new(title).size(24.0).strong());
    ui.separator();
    ui.add_space(8.0);
    ui.label(RichText::new(intro).weak());
    ui.add_space(16.0);
}

/// Subtítulo de sección en color de acento (temas de semana, categorías de
/// sitios).
pub(crate) fn accent_heading(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).size(19.0).strong().color(RUST_ORANGE));
}
