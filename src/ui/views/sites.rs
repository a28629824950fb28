use crate::app::view_models::site_sections;
use crate::model::{SiteLink, StudyPlan};
use crate::ui::layout::card;
use crate::ui::views::{accent_heading, annex_heading};
use egui::{CursorIcon, OpenUrl, RichText, Sense, Ui};
use egui_commonmark::{CommonMarkCache, CommonMarkViewer};

/// Anexo de sitios: secciones por categoría en orden fijo; una categoría sin
/// enlaces no pinta sección alguna.
pub fn ui_sites(ui: &mut Ui, plan: &StudyPlan, cm_cache: &mut CommonMarkCache) {
    annex_heading(
        ui,
        "Sitios de Interés",
        "El ecosistema de Rust es amplio y activo. Aquí tienes algunos enlaces \
         clave para seguir aprendiendo, resolver dudas y mantenerte al día.",
    );

    for section in site_sections(plan) {
        accent_heading(ui, section.category.label());
        ui.add_space(8.0);
        for pair in section.sites.chunks(2) {
            ui.columns(2, |cols| {
                for (i, &site) in pair.iter().enumerate() {
                    site_card(&mut cols[i], site, cm_cache);
                }
            });
            ui.add_space(10.0);
        }
        ui.add_space(12.0);
    }
}

fn site_card(ui: &mut Ui, site: &SiteLink, cm_cache: &mut CommonMarkCache) {
    let response = card(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(site.icon.glyph()).size(20.0));
            ui.label(RichText::new(&site.title).size(16.0).strong());
        });
        ui.add_space(4.0);
        CommonMarkViewer::new().show(ui, cm_cache, &site.description);
        ui.add_space(2.0);
        ui.small(RichText::new(&site.url).weak());
    })
    .response;

    let response = response
        .interact(Sense::click())
        .on_hover_cursor(CursorIcon::PointingHand)
        .on_hover_text("Abrir en una pestaña nueva");

    if response.clicked() {
        // Contexto nuevo, sin acceso privilegiado sobre la vista actual
        ui.ctx().open_url(OpenUrl::new_tab(&site.url));
    }
}
