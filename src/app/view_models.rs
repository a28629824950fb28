use super::StudyPlanApp;
use crate::model::{ActiveView, SiteCategory, StudyPlan};
use crate::view_models::{AnnexEntry, SiteSection, WeekEntry};

impl StudyPlanApp {
    /// Filas de semana de la barra lateral, precalculadas para no mantener
    /// el préstamo del catálogo durante el pintado.
    pub fn week_entries(&self) -> Vec<WeekEntry> {
        self.plan
            .weeks
            .iter()
            .map(|week| WeekEntry {
                id: week.id,
                title: week.title.clone(),
                completed: self.nav.is_completed(week.id),
                active: self.nav.active_view == ActiveView::Week
                    && week.id == self.nav.selected_week_id,
            })
            .collect()
    }

    /// Las tres entradas fijas de anexos, en su orden de la barra lateral.
    pub fn annex_entries(&self) -> [AnnexEntry; 3] {
        let entry = |view, glyph, label| AnnexEntry {
            view,
            glyph,
            label,
            active: self.nav.active_view == view,
        };
        [
            entry(ActiveView::Solutions, "📋", "Soluciones de Ejercicios"),
            entry(ActiveView::Resources, "📖", "Herramientas y Recursos"),
            entry(ActiveView::Sites, "🔗", "Sitios de Interés"),
        ]
    }
}

/// Secciones de "Sitios de Interés": particiona por categoría en el orden
/// fijo de presentación y omite por completo las categorías vacías.
pub fn site_sections(plan: &StudyPlan) -> Vec<SiteSection<'_>> {
    SiteCategory::DISPLAY_ORDER
        .into_iter()
        .filter_map(|category| {
            let sites = plan.sites_in(category);
            (!sites.is_empty()).then_some(SiteSection { category, sites })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Icon, SiteLink};

    fn plan_with_sites(categories: &[SiteCategory]) -> StudyPlan {
        StudyPlan {
            weeks: vec![],
            resources: vec![],
            sites: categories
                .iter()
                .enumerate()
                .map(|(i, &category)| SiteLink {
                    title: format!("sitio {i}"),
                    url: "https://example.org/".into(),
                    category,
                    description: String::new(),
                    icon: Icon::Link,
                })
                .collect(),
            final_thoughts: vec![],
        }
    }

    #[test]
    fn site_sections_omit_empty_categories_entirely() {
        let plan = plan_with_sites(&[
            SiteCategory::Oficial,
            SiteCategory::Comunidad,
            SiteCategory::Oficial,
        ]);
        let sections = site_sections(&plan);
        // Sin enlaces de Práctica ni Noticias no hay sección para ellas
        let categories: Vec<_> = sections.iter().map(|s| s.category).collect();
        assert_eq!(
            categories,
            vec![SiteCategory::Oficial, SiteCategory::Comunidad]
        );
        assert_eq!(sections[0].sites.len(), 2);
    }

    #[test]
    fn site_sections_follow_fixed_display_order() {
        let plan = plan_with_sites(&[
            SiteCategory::Noticias,
            SiteCategory::Practica,
            SiteCategory::Oficial,
            SiteCategory::Comunidad,
        ]);
        let categories: Vec<_> = site_sections(&plan).iter().map(|s| s.category).collect();
        assert_eq!(categories, SiteCategory::DISPLAY_ORDER.to_vec());
    }

    #[test]
    fn week_entries_mark_active_only_in_week_view() {
        let yaml = r#"
weeks:
  - { id: 1, title: "Semana 1", summary: "", topics: [], reading: [], exercise: [] }
  - { id: 2, title: "Semana 2", summary: "", topics: [], reading: [], exercise: [] }
resources: []
sites: []
final_thoughts: []
"#;
        let mut app =
            StudyPlanApp::with_plan(serde_yaml::from_str(yaml).expect("catálogo de prueba"));
        app.nav.select_week(2);
        app.nav.toggle_completion(1);

        let entries = app.week_entries();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].completed && !entries[0].active);
        assert!(!entries[1].completed && entries[1].active);
        assert!(entries[0].label().starts_with('✔'));
        assert!(entries[1].label().starts_with('○'));

        // En una vista de anexo ninguna semana se marca activa
        app.nav.select_view(ActiveView::Resources);
        assert!(app.week_entries().iter().all(|e| !e.active));
        let annexes = app.annex_entries();
        assert!(
            annexes
                .iter()
                .any(|a| a.view == ActiveView::Resources && a.active)
        );
        assert_eq!(annexes.iter().filter(|a| a.active).count(), 1);
    }
}
