use std::collections::HashMap;

/// Ventana durante la que un bloque de código enseña "Copiado" tras pulsarse
/// su botón de copiar.
pub const COPY_FEEDBACK_SECS: f64 = 2.0;

/// Indicadores transitorios de copiado, uno por bloque de código. El tiempo
/// se inyecta (reloj de egui en la app, valores fijos en los tests); aquí no
/// hay temporizadores: cada frame compara marcas contra `now`.
#[derive(Default)]
pub struct CopyFeedback {
    copied_at: HashMap<egui::Id, f64>,
}

impl CopyFeedback {
    /// Marca el bloque como recién copiado. Volver a copiar reinicia la
    /// ventana del indicador.
    pub fn mark(&mut self, id: egui::Id, now: f64) {
        self.copied_at.insert(id, now);
    }

    pub fn is_on(&self, id: egui::Id, now: f64) -> bool {
        self.copied_at
            .get(&id)
            .is_some_and(|t| now - t < COPY_FEEDBACK_SECS)
    }

    /// Descarta marcas caducadas. Se llama una vez por frame.
    pub fn prune(&mut self, now: f64) {
        self.copied_at.retain(|_, t| now - *t < COPY_FEEDBACK_SECS);
    }

    /// `true` mientras quede algún indicador encendido (la UI pide repintados
    /// periódicos solo en ese caso).
    pub fn any_active(&self) -> bool {
        !self.copied_at.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u64) -> egui::Id {
        egui::Id::new(n)
    }

    #[test]
    fn indicator_turns_on_immediately_and_off_after_two_seconds() {
        let mut fb = CopyFeedback::default();
        fb.mark(id(1), 10.0);

        assert!(fb.is_on(id(1), 10.0));
        assert!(fb.is_on(id(1), 11.999));
        // Nunca antes de los 2000 ms
        assert!(!fb.is_on(id(1), 12.0));
        assert!(!fb.is_on(id(1), 30.0));
    }

    #[test]
    fn recopying_restarts_the_window() {
        let mut fb = CopyFeedback::default();
        fb.mark(id(1), 10.0);
        fb.mark(id(1), 11.5);

        assert!(fb.is_on(id(1), 13.0));
        assert!(!fb.is_on(id(1), 13.5));
    }

    #[test]
    fn indicators_are_independent_per_block() {
        let mut fb = CopyFeedback::default();
        fb.mark(id(1), 10.0);
        fb.mark(id(2), 11.0);

        assert!(!fb.is_on(id(1), 12.5));
        assert!(fb.is_on(id(2), 12.5));
    }

    #[test]
    fn prune_drops_expired_marks_only() {
        let mut fb = CopyFeedback::default();
        fb.mark(id(1), 10.0);
        fb.mark(id(2), 11.5);

        fb.prune(12.5);

        assert!(fb.any_active());
        assert!(!fb.is_on(id(1), 12.5));
        assert!(fb.is_on(id(2), 12.5));

        fb.prune(14.0);
        assert!(!fb.any_active());
    }
}
