// src/view_models.rs

use crate::model::{ActiveView, SiteCategory, SiteLink, WeekId};

/// Fila de semana en la barra lateral, ya precalculada para pintar sin
/// mantener préstamos sobre el catálogo.
#[derive(Clone, Debug, PartialEq)]
pub struct WeekEntry {
    pub id: WeekId,
    pub title: String,
    pub completed: bool,
    pub active: bool,
}

impl WeekEntry {
    pub fn label(&self) -> String {
        let glyph = if self.completed { "✔" } else { "○" };
        format!("{glyph} {}", self.title)
    }
}

/// Entrada fija de anexo en la barra lateral.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnnexEntry {
    pub view: ActiveView,
    pub glyph: &'static str,
    pub label: &'static str,
    pub active: bool,
}

impl AnnexEntry {
    pub fn text(&self) -> String {
        format!("{} {}", self.glyph, self.label)
    }
}

/// Sección no vacía de la vista "Sitios de Interés".
#[derive(Clone, Debug)]
pub struct SiteSection<'a> {
    pub category: SiteCategory,
    pub sites: Vec<&'a SiteLink>,
}
