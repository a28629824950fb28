use crate::data::read_study_plan_embedded;
use crate::model::StudyPlan;
use egui_commonmark::CommonMarkCache;

// Submódulos
pub mod completion;
pub mod feedback;
pub mod navigation;
pub mod queries;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{AnnexEntry, SiteSection, WeekEntry};
pub use feedback::CopyFeedback;
pub use navigation::NavState;

/// Estado raíz de la aplicación: el catálogo inmutable más el estado de
/// navegación efímero. No se persiste nada entre sesiones.
pub struct StudyPlanApp {
    pub plan: StudyPlan,
    pub nav: NavState,
    pub copy_feedback: CopyFeedback,
    pub cm_cache: CommonMarkCache,
}

impl StudyPlanApp {
    pub fn new() -> Self {
        Self::with_plan(read_study_plan_embedded())
    }

    /// Variante para tests con un catálogo arbitrario.
    pub fn with_plan(plan: StudyPlan) -> Self {
        let nav = NavState::new(plan.first_week_id());
        Self {
            plan,
            nav,
            copy_feedback: CopyFeedback::default(),
            cm_cache: CommonMarkCache::default(),
        }
    }
}

impl Default for StudyPlanApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ActiveView;

    #[test]
    fn initial_state_selects_first_week_with_nothing_completed() {
        let app = StudyPlanApp::new();
        assert_eq!(Some(app.nav.selected_week_id), app.plan.first_week_id());
        assert!(app.nav.completed_weeks.is_empty());
        assert_eq!(app.nav.active_view, ActiveView::Week);
        // La semana inicial existe: la vista arranca sin placeholder
        assert!(app.plan.week(app.nav.selected_week_id).is_some());
    }
}
