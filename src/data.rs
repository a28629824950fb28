// src/data.rs

use crate::model::StudyPlan;

/// Carga el catálogo del plan de estudio desde el YAML embebido.
/// Un YAML malformado es un defecto de contenido y debe fallar al arrancar.
pub fn read_study_plan_embedded() -> StudyPlan {
    let file_content = include_str!("data/study_plan.yaml");
    serde_yaml::from_str(file_content).expect("No se pudo parsear el catálogo YAML del plan")
}
