use super::NavState;
use crate::model::WeekId;

impl NavState {
    /// Alterna la marca de completada de una semana: añade si no está,
    /// quita si está. Aplicarlo dos veces deja el conjunto como estaba.
    /// No dispara scroll ni cambia de vista.
    pub fn toggle_completion(&mut self, id: WeekId) {
        if !self.completed_weeks.remove(&id) {
            self.completed_weeks.insert(id);
        }
    }

    pub fn is_completed(&self, id: WeekId) -> bool {
        self.completed_weeks.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut nav = NavState::new(Some(1));
        assert!(!nav.is_completed(1));

        nav.toggle_completion(1);
        assert!(nav.is_completed(1));

        nav.toggle_completion(1);
        assert!(!nav.is_completed(1));
    }

    #[test]
    fn double_toggle_is_an_involution_over_any_prior_state() {
        let mut nav = NavState::new(Some(1));
        nav.toggle_completion(2);
        let before: Vec<_> = {
            let mut v: Vec<_> = nav.completed_weeks.iter().copied().collect();
            v.sort_unstable();
            v
        };

        nav.toggle_completion(5);
        nav.toggle_completion(5);

        let mut after: Vec<_> = nav.completed_weeks.iter().copied().collect();
        after.sort_unstable();
        assert_eq!(before, after);
    }

    #[test]
    fn toggling_one_week_leaves_the_rest_untouched() {
        let mut nav = NavState::new(Some(1));
        nav.toggle_completion(1);
        nav.toggle_completion(3);

        nav.toggle_completion(1);

        assert!(!nav.is_completed(1));
        assert!(nav.is_completed(3));
    }
}
