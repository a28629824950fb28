use crate::app::CopyFeedback;
use crate::model::StudyPlan;
use crate::ui::blocks::render_blocks;
use crate::ui::layout::card;
use crate::ui::views::annex_heading;
use egui::{RichText, Ui};
use egui_commonmark::CommonMarkCache;

/// Anexo de soluciones: una ficha por semana con solución, en orden de
/// catálogo. Las semanas sin solución no aparecen, ni siquiera vacías.
pub fn ui_solutions(
    ui: &mut Ui,
    plan: &StudyPlan,
    feedback: &mut CopyFeedback,
    cm_cache: &mut CommonMarkCache,
) {
    annex_heading(
        ui,
        "Anexo: Soluciones a los Ejercicios",
        "Aquí encontrarás las soluciones a los ejercicios prácticos propuestos \
         cada semana. Úsalas para comparar tus resultados o si necesitas una \
         pista.",
    );

    for week in plan.weeks_with_solution() {
        if let Some(solution) = &week.exercise_solution {
            ui.push_id(("solucion", week.id), |ui| {
                card(ui, |ui| {
                    ui.label(RichText::new(&week.title).size(17.0).strong());
                    ui.add_space(8.0);
                    render_blocks(ui, feedback, cm_cache, solution);
                });
            });
            ui.add_space(14.0);
        }
    }
}
