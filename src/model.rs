use serde::{Deserialize, Serialize};

/// Identificador estable de una semana dentro del plan.
pub type WeekId = u32;

/// Bloque de contenido enriquecido. El catálogo es el único dueño de estos
/// bloques; las vistas los pintan tal cual, en el orden dado.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ContentBlock {
    /// Texto en CommonMark (párrafos, listas, negritas, enlaces...).
    Markdown(String),
    /// Fragmento de código literal, con botón de copiado.
    Code(String),
    /// Diagrama estático "propiedad vs. préstamos".
    OwnershipDiagram,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Topic {
    pub title: String,
    pub content: Vec<ContentBlock>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Week {
    pub id: WeekId,
    pub title: String,
    pub summary: String,
    pub topics: Vec<Topic>,
    pub reading: Vec<ContentBlock>,
    pub exercise: Vec<ContentBlock>,
    // Secciones opcionales: ausente = la sección no se pinta
    #[serde(default)]
    pub exercise_solution: Option<Vec<ContentBlock>>,
    #[serde(default)]
    pub project: Option<Vec<ContentBlock>>,
    #[serde(default)]
    pub final_words: Option<Vec<ContentBlock>>,
}

/// Etiqueta simbólica de icono; el glifo concreto se decide al pintar.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Play,
    PuzzlePiece,
    CommandLine,
    BookOpen,
    GlobeAlt,
    Users,
    CodeBracket,
    Link,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Play => "▶",
            Icon::PuzzlePiece => "🧩",
            Icon::CommandLine => "💻",
            Icon::BookOpen => "📖",
            Icon::GlobeAlt => "🌐",
            Icon::Users => "👥",
            Icon::CodeBracket => "⌨",
            Icon::Link => "🔗",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Resource {
    pub title: String,
    pub description: String,
    pub icon: Icon,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteCategory {
    Oficial,
    Comunidad,
    #[serde(rename = "Práctica")]
    Practica,
    Noticias,
}

impl SiteCategory {
    /// Orden fijo en que se muestran las secciones de "Sitios de Interés".
    pub const DISPLAY_ORDER: [SiteCategory; 4] = [
        SiteCategory::Oficial,
        SiteCategory::Practica,
        SiteCategory::Comunidad,
        SiteCategory::Noticias,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SiteCategory::Oficial => "Oficial",
            SiteCategory::Comunidad => "Comunidad",
            SiteCategory::Practica => "Práctica",
            SiteCategory::Noticias => "Noticias",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SiteLink {
    pub title: String,
    pub url: String,
    pub category: SiteCategory,
    pub description: String,
    pub icon: Icon,
}

/// Catálogo completo de contenido. Se construye una vez al arrancar a partir
/// del YAML embebido y no se muta nunca.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StudyPlan {
    pub weeks: Vec<Week>,
    pub resources: Vec<Resource>,
    pub sites: Vec<SiteLink>,
    pub final_thoughts: Vec<ContentBlock>,
}

impl StudyPlan {
    pub fn week(&self, id: WeekId) -> Option<&Week> {
        self.weeks.iter().find(|w| w.id == id)
    }

    /// Id de la primera semana del catálogo (selección inicial).
    pub fn first_week_id(&self) -> Option<WeekId> {
        self.weeks.first().map(|w| w.id)
    }

    /// Semanas que tienen solución de ejercicio, en orden de catálogo.
    pub fn weeks_with_solution(&self) -> Vec<&Week> {
        self.weeks
            .iter()
            .filter(|w| w.exercise_solution.is_some())
            .collect()
    }

    /// Enlaces de una categoría concreta, en orden de catálogo.
    pub fn sites_in(&self, category: SiteCategory) -> Vec<&SiteLink> {
        self.sites
            .iter()
            .filter(|s| s.category == category)
            .collect()
    }
}

/// Vista activa del panel de contenido.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    Week,
    Resources,
    Solutions,
    Sites,
}

impl Default for ActiveView {
    fn default() -> Self {
        ActiveView::Week
    }
}
