use crate::app::{CopyFeedback, NavState};
use crate::model::{ContentBlock, Week};
use crate::ui::blocks::render_blocks;
use crate::ui::layout::card;
use crate::ui::views::accent_heading;
use egui::{Button, Color32, RichText, Ui, Vec2};
use egui_commonmark::CommonMarkCache;

/// Vista de una semana: título, resumen, temas en orden, lectura, ejercicio,
/// proyecto (si hay), botón de completada y despedida (si hay). La solución
/// del ejercicio no se enseña aquí: vive en el anexo de soluciones.
pub fn ui_week(
    ui: &mut Ui,
    week: &Week,
    nav: &mut NavState,
    feedback: &mut CopyFeedback,
    cm_cache: &mut CommonMarkCache,
) {
    ui.label(RichText::new(&week.title).size(26.0).strong());
    ui.add_space(4.0);
    ui.label(RichText::new(&week.summary).size(15.0).weak());
    ui.add_space(18.0);

    for (index, topic) in week.topics.iter().enumerate() {
        ui.push_id(("tema", index), |ui| {
            accent_heading(ui, &topic.title);
            ui.add_space(6.0);
            render_blocks(ui, feedback, cm_cache, &topic.content);
            ui.add_space(10.0);
        });
    }

    section_card(ui, feedback, cm_cache, "📖 Lectura Recomendada", "lectura", &week.reading);
    section_card(ui, feedback, cm_cache, "🧪 Ejercicio Práctico", "ejercicio", &week.exercise);
    if let Some(project) = &week.project {
        section_card(ui, feedback, cm_cache, "🔧 Proyecto Práctico", "proyecto", project);
    }

    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        completion_button(ui, nav, week);
    });

    if let Some(final_words) = &week.final_words {
        ui.add_space(24.0);
        card(ui, |ui| {
            ui.push_id("despedida", |ui| {
                render_blocks(ui, feedback, cm_cache, final_words);
            });
        });
    }
}

fn section_card(
    ui: &mut Ui,
    feedback: &mut CopyFeedback,
    cm_cache: &mut CommonMarkCache,
    title: &str,
    salt: &str,
    blocks: &[ContentBlock],
) {
    ui.add_space(8.0);
    card(ui, |ui| {
        ui.label(RichText::new(title).size(16.0).strong());
        ui.add_space(6.0);
        ui.push_id(salt, |ui| {
            render_blocks(ui, feedback, cm_cache, blocks);
        });
    });
}

/// El botón es función pura del estado de completada: estilo neutro para
/// marcar, estilo afirmativo con check una vez completada.
fn completion_button(ui: &mut Ui, nav: &mut NavState, week: &Week) {
    let completed = nav.is_completed(week.id);
    let button = if completed {
        Button::new(
            RichText::new("✔ Semana Completada")
                .strong()
                .color(Color32::WHITE),
        )
        .fill(Color32::from_rgb(22, 130, 70))
    } else {
        Button::new(RichText::new("Marcar como Completada").strong())
    };

    if ui.add(button.min_size(Vec2::new(240.0, 40.0))).clicked() {
        nav.toggle_completion(week.id);
    }
}
