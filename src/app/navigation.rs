use crate::model::{ActiveView, WeekId};
use std::collections::HashSet;

/// Estado de navegación. Vive en memoria durante la sesión y se descarta al
/// cerrar; lo muta únicamente este módulo (y `completion.rs`).
pub struct NavState {
    pub selected_week_id: WeekId,
    pub completed_weeks: HashSet<WeekId>,
    pub active_view: ActiveView,
    // Flag de un solo uso: la vista lo consume para volver arriba del scroll
    scroll_reset: bool,
}

impl NavState {
    pub fn new(first_week: Option<WeekId>) -> Self {
        Self {
            // Con catálogo vacío el id no existe y la vista enseña el
            // placeholder "Selecciona una semana"
            selected_week_id: first_week.unwrap_or(0),
            completed_weeks: HashSet::new(),
            active_view: ActiveView::default(),
            scroll_reset: false,
        }
    }

    /// Selecciona una semana y fuerza la vista de semana, también al
    /// re-seleccionar la que ya estaba activa. No valida el id: un id
    /// desconocido acaba en el placeholder de "semana no encontrada".
    pub fn select_week(&mut self, id: WeekId) {
        if self.selected_week_id != id || self.active_view != ActiveView::Week {
            self.scroll_reset = true;
        }
        self.selected_week_id = id;
        self.active_view = ActiveView::Week;
    }

    /// Cambia la vista activa sin tocar la semana seleccionada.
    pub fn select_view(&mut self, view: ActiveView) {
        if self.active_view != view {
            self.scroll_reset = true;
        }
        self.active_view = view;
    }

    /// Consume el flag de scroll; devuelve `true` como mucho una vez por
    /// cambio de navegación.
    pub fn take_scroll_reset(&mut self) -> bool {
        std::mem::take(&mut self.scroll_reset)
    }
}
