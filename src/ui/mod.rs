mod helpers;
pub mod blocks;
pub mod layout;
pub mod views;

use crate::app::StudyPlanApp;
use eframe::{App, Frame};
use egui::Context;
use layout::{content_panel, side_panel};
use std::time::Duration;

impl App for StudyPlanApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Caduca los indicadores de "Copiado" y repinta periódicamente solo
        // mientras quede alguno encendido
        let now = ctx.input(|i| i.time);
        self.copy_feedback.prune(now);
        if self.copy_feedback.any_active() {
            ctx.request_repaint_after(Duration::from_millis(150));
        }

        side_panel(self, ctx);
        content_panel(self, ctx);
    }
}
