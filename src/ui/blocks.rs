use crate::app::CopyFeedback;
use crate::model::ContentBlock;
use crate::ui::helpers::RUST_ORANGE;
use crate::ui::layout::card;
use egui::{Align, Color32, CornerRadius, Frame, Layout, Margin, RichText, Stroke, Ui};
use egui_code_editor::{CodeEditor, ColorTheme, Syntax};
use egui_commonmark::{CommonMarkCache, CommonMarkViewer};

/// Pinta una secuencia de bloques de contenido tal cual, en orden.
/// Los llamantes envuelven cada sección en `ui.push_id(...)` para que los
/// ids de los bloques de código no colisionen entre secciones.
pub fn render_blocks(
    ui: &mut Ui,
    feedback: &mut CopyFeedback,
    cm_cache: &mut CommonMarkCache,
    blocks: &[ContentBlock],
) {
    for (index, block) in blocks.iter().enumerate() {
        match block {
            ContentBlock::Markdown(text) => {
                CommonMarkViewer::new().show(ui, cm_cache, text);
            }
            ContentBlock::Code(code) => code_block(ui, feedback, index, code),
            ContentBlock::OwnershipDiagram => ownership_diagram(ui),
        }
        ui.add_space(6.0);
    }
}

/// Bloque de código de solo lectura con botón de copiado. El copiado escribe
/// el texto recortado al portapapeles sin observar el resultado; el indicador
/// "Copiado" se apaga solo pasada la ventana de `CopyFeedback`.
fn code_block(ui: &mut Ui, feedback: &mut CopyFeedback, index: usize, code: &str) {
    let block_id = ui.make_persistent_id(("bloque_codigo", index));
    let now = ui.input(|i| i.time);
    let copied = feedback.is_on(block_id, now);

    ui.horizontal(|ui| {
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let label = if copied { "✔ Copiado" } else { "📋 Copiar" };
            if ui.small_button(label).clicked() {
                let text = code.trim().to_owned();
                log::debug!("copiando {} bytes al portapapeles", text.len());
                ui.ctx().copy_text(text);
                feedback.mark(block_id, now);
            }
        });
    });

    // El editor exige un buffer mutable; se descarta cada frame, así que el
    // bloque queda de solo lectura a efectos prácticos
    let mut buf = code.trim().to_owned();
    let rows = buf.lines().count().max(1);
    CodeEditor::default()
        .id_source(format!("{block_id:?}"))
        .with_rows(rows)
        .with_fontsize(13.0)
        .with_theme(ColorTheme::GITHUB_DARK)
        .with_syntax(Syntax::rust())
        .with_numlines(true)
        .vscroll(false)
        .show(ui, &mut buf);
}

/// Diagrama estático "propiedad vs. préstamos": dos paneles ilustrativos,
/// sin ninguna interacción.
fn ownership_diagram(ui: &mut Ui) {
    card(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("Explicación Visual: Propiedad y Préstamos")
                    .size(15.0)
                    .strong(),
            );
        });
        ui.add_space(10.0);

        ui.columns(2, |cols| {
            mutable_borrow_panel(&mut cols[0]);
            immutable_borrows_panel(&mut cols[1]);
        });

        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            ui.small(
                "Regla clave: O un préstamo mutable exclusivo, o varios \
                 inmutables compartidos, pero no ambos a la vez.",
            );
        });
    });
}

fn mutable_borrow_panel(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.colored_label(RUST_ORANGE, RichText::new("Préstamo Mutable (&mut)").strong());
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            value_tag(ui, "valor");
            ui.label("➡");
            borrow_tag(
                ui,
                "🔒 &mut referencia",
                Color32::from_rgb(62, 26, 26),
                Color32::from_rgb(190, 80, 80),
            );
        });
        ui.add_space(6.0);
        ui.small(
            "Una referencia mutable bloquea el valor original. \
             Solo puede existir un préstamo mutable a la vez.",
        );
    });
}

fn immutable_borrows_panel(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.colored_label(RUST_ORANGE, RichText::new("Préstamos Inmutables (&)").strong());
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            value_tag(ui, "valor");
            ui.label("➡");
            ui.vertical(|ui| {
                let fill = Color32::from_rgb(24, 38, 62);
                let stroke = Color32::from_rgb(90, 130, 200);
                borrow_tag(ui, "✨ & referencia 1", fill, stroke);
                ui.add_space(4.0);
                borrow_tag(ui, "✨ & referencia 2", fill, stroke);
            });
        });
        ui.add_space(6.0);
        ui.small(
            "Las referencias inmutables congelan el valor. Puedes tener \
             múltiples préstamos inmutables simultáneamente.",
        );
    });
}

fn value_tag(ui: &mut Ui, text: &str) {
    let stroke_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    Frame::default()
        .stroke(Stroke::new(1.0, stroke_color))
        .corner_radius(CornerRadius::same(4))
        .inner_margin(Margin::symmetric(8, 5))
        .show(ui, |ui| {
            ui.monospace(text);
        });
}

fn borrow_tag(ui: &mut Ui, text: &str, fill: Color32, stroke: Color32) {
    Frame::default()
        .fill(fill)
        .stroke(Stroke::new(1.0, stroke))
        .corner_radius(CornerRadius::same(4))
        .inner_margin(Margin::symmetric(8, 5))
        .show(ui, |ui| {
            ui.monospace(text);
        });
}
