use crate::app::StudyPlanApp;
use crate::model::ActiveView;
use crate::ui::{helpers, views};
use egui::{
    CentralPanel, Context, CornerRadius, Frame, InnerResponse, Margin, RichText, ScrollArea,
    Stroke, Ui, Visuals,
};

pub fn side_panel(app: &mut StudyPlanApp, ctx: &Context) {
    egui::SidePanel::left("panel_lateral")
        .resizable(false)
        .exact_width(270.0)
        .show(ctx, |ui| {
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new("🦀").size(24.0));
                ui.label(RichText::new("Aprende Rust").size(18.0).strong());
            });
            ui.add_space(14.0);

            helpers::section_label(ui, "Plan de Estudio");
            for entry in app.week_entries() {
                if helpers::sidebar_button(ui, &entry.label(), entry.active) {
                    app.nav.select_week(entry.id);
                }
            }

            ui.add_space(14.0);
            helpers::section_label(ui, "Anexos");
            for entry in app.annex_entries() {
                if helpers::sidebar_button(ui, &entry.text(), entry.active) {
                    app.nav.select_view(entry.view);
                }
            }

            // ----------- BOTONES DE TEMA -----------
            ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("☀ Modo claro").clicked() {
                        ctx.set_visuals(Visuals::light());
                    }
                    if ui.button("🌙 Modo oscuro").clicked() {
                        ctx.set_visuals(Visuals::dark());
                    }
                });
            });
        });
}

pub fn content_panel(app: &mut StudyPlanApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let mut scroll = ScrollArea::vertical().auto_shrink([false; 2]);
        // Al navegar se vuelve arriba; marcar una semana como completada no
        // toca el scroll
        if app.nav.take_scroll_reset() {
            scroll = scroll.vertical_scroll_offset(0.0);
        }
        scroll.show(ui, |ui| {
            let content_width = (ui.available_width() * 0.94).min(860.0);
            let side_space = ((ui.available_width() - content_width) / 2.0).max(0.0);
            ui.horizontal(|ui| {
                ui.add_space(side_space);
                ui.vertical(|ui| {
                    ui.set_width(content_width);
                    header(ui);
                    route_content(app, ui);
                    ui.add_space(32.0);
                });
            });
        });
    });
}

fn header(ui: &mut Ui) {
    ui.add_space(18.0);
    ui.horizontal(|ui| {
        ui.label(RichText::new("🦀").size(40.0));
        ui.vertical(|ui| {
            ui.label(RichText::new("Plan de Estudio de Rust").size(28.0).strong());
            ui.label(
                RichText::new("Un viaje interactivo para convertirte en un Rustacean")
                    .size(15.0)
                    .weak(),
            );
        });
    });
    ui.add_space(20.0);
}

/// Dispatch por vista activa a las funciones de views/. El enum cerrado hace
/// inalcanzable cualquier otra variante; el camino defensivo que queda es la
/// semana no encontrada.
fn route_content(app: &mut StudyPlanApp, ui: &mut Ui) {
    let StudyPlanApp {
        plan,
        nav,
        copy_feedback,
        cm_cache,
    } = app;

    match nav.active_view {
        ActiveView::Resources => views::resources::ui_resources(ui, plan, copy_feedback, cm_cache),
        ActiveView::Solutions => views::solutions::ui_solutions(ui, plan, copy_feedback, cm_cache),
        ActiveView::Sites => views::sites::ui_sites(ui, plan, cm_cache),
        ActiveView::Week => match plan.week(nav.selected_week_id) {
            Some(week) => views::week::ui_week(ui, week, nav, copy_feedback, cm_cache),
            None => centered_placeholder(ui, "Selecciona una semana para comenzar."),
        },
    }
}

/// Mensaje centrado para los caminos sin contenido que mostrar.
pub fn centered_placeholder(ui: &mut Ui, text: &str) {
    ui.add_space(120.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(text).size(16.0).weak());
    });
}

/// Panel con borde y fondo tenue: el contenedor de "tarjeta" que usan las
/// secciones de semana y las fichas de los anexos.
pub fn card(ui: &mut Ui, inner: impl FnOnce(&mut Ui)) -> InnerResponse<()> {
    Frame::default()
        .fill(ui.visuals().faint_bg_color)
        .stroke(Stroke::new(
            1.0,
            ui.visuals().widgets.noninteractive.bg_stroke.color,
        ))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::symmetric(14, 12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            inner(ui);
        })
}
