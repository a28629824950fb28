use super::StudyPlanApp;
use crate::model::Week;

impl StudyPlanApp {
    /// Semana actualmente seleccionada, si existe en el catálogo.
    /// `None` cubre el catálogo vacío o un id caducado: la vista de semana
    /// enseña entonces su placeholder en lugar de fallar.
    pub fn selected_week(&self) -> Option<&Week> {
        self.plan.week(self.nav.selected_week_id)
    }

    pub fn selected_week_is_completed(&self) -> bool {
        self.nav.is_completed(self.nav.selected_week_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ActiveView, ContentBlock, StudyPlan};

    fn tiny_plan() -> StudyPlan {
        let yaml = r#"
weeks:
  - id: 1
    title: "Semana 1"
    summary: "s1"
    topics: []
    reading: [ { markdown: "r" } ]
    exercise: [ { markdown: "e" } ]
  - id: 2
    title: "Semana 2"
    summary: "s2"
    topics: []
    reading: [ { markdown: "r" } ]
    exercise: [ { markdown: "e" } ]
    exercise_solution: [ { markdown: "sol" } ]
  - id: 3
    title: "Semana 3"
    summary: "s3"
    topics: []
    reading: [ { markdown: "r" } ]
    exercise: [ { markdown: "e" } ]
resources: []
sites: []
final_thoughts: []
"#;
        serde_yaml::from_str(yaml).expect("catálogo de prueba")
    }

    #[test]
    fn selected_week_follows_navigation() {
        let mut app = StudyPlanApp::with_plan(tiny_plan());
        assert_eq!(app.selected_week().map(|w| w.id), Some(1));

        app.nav.select_week(3);
        assert_eq!(app.selected_week().map(|w| w.id), Some(3));
    }

    #[test]
    fn stale_id_yields_no_week() {
        let mut app = StudyPlanApp::with_plan(tiny_plan());
        app.nav.select_week(42);
        assert!(app.selected_week().is_none());
        // La vista sigue siendo la de semana; el router pinta el placeholder
        assert_eq!(app.nav.active_view, ActiveView::Week);
    }

    #[test]
    fn solutions_listing_contains_exactly_the_weeks_with_solution() {
        let app = StudyPlanApp::with_plan(tiny_plan());
        let weeks = app.plan.weeks_with_solution();
        assert_eq!(weeks.len(), 1);
        assert_eq!(weeks[0].title, "Semana 2");
        assert!(matches!(
            weeks[0].exercise_solution.as_deref(),
            Some([ContentBlock::Markdown(_)])
        ));
    }
}
