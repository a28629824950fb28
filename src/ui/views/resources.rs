use crate::app::CopyFeedback;
use crate::model::{Resource, StudyPlan};
use crate::ui::blocks::render_blocks;
use crate::ui::layout::card;
use crate::ui::views::annex_heading;
use egui::{RichText, Ui};
use egui_commonmark::{CommonMarkCache, CommonMarkViewer};

pub fn ui_resources(
    ui: &mut Ui,
    plan: &StudyPlan,
    feedback: &mut CopyFeedback,
    cm_cache: &mut CommonMarkCache,
) {
    annex_heading(
        ui,
        "Herramientas y Recursos",
        "Para acompañar tu aprendizaje, aquí tienes algunas herramientas y \
         recursos gratuitos que te serán de gran ayuda:",
    );

    // Rejilla de dos columnas en orden de catálogo
    for pair in plan.resources.chunks(2) {
        ui.columns(2, |cols| {
            for (i, resource) in pair.iter().enumerate() {
                resource_card(&mut cols[i], resource, cm_cache);
            }
        });
        ui.add_space(10.0);
    }

    ui.add_space(16.0);
    card(ui, |ui| {
        ui.push_id("consejo_final", |ui| {
            render_blocks(ui, feedback, cm_cache, &plan.final_thoughts);
        });
    });
}

fn resource_card(ui: &mut Ui, resource: &Resource, cm_cache: &mut CommonMarkCache) {
    card(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(resource.icon.glyph()).size(20.0));
            ui.label(RichText::new(&resource.title).size(16.0).strong());
        });
        ui.add_space(4.0);
        CommonMarkViewer::new().show(ui, cm_cache, &resource.description);
    });
}
