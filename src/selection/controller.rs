//! The selection state machine.
//!
//! Two states: Unselected, where the visible order is the base order
//! (population descending), and Selected(key), where the base order is
//! re-ranked by proximity to the selected division. Every transition
//! rebuilds the visible order from the base order.

use rand::Rng;

use crate::dataset::{Dataset, KeyMode};
use crate::division::{Division, DivisionKey};
use crate::rank::{base_order, sort_by_distance};

/// Reasons a selection request could not be resolved.
///
/// These are "no match yet" outcomes for the caller, not fatal errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("no division matches '{0}'")]
    NotFound(String),

    #[error("'{0}' matches more than one division")]
    Ambiguous(String),
}

/// Holds the applied division and the order derived from it.
pub struct SelectionController<'a> {
    dataset: &'a Dataset,
    base: Vec<&'a Division>,
    applied: Option<DivisionKey>,
    current: Vec<&'a Division>,
}

impl<'a> SelectionController<'a> {
    /// Creates a controller in the Unselected state.
    pub fn new(dataset: &'a Dataset) -> Self {
        let base = base_order(dataset.divisions());
        let current = base.clone();
        SelectionController {
            dataset,
            base,
            applied: None,
            current,
        }
    }

    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    /// Returns the key of the applied division, if any.
    pub fn applied(&self) -> Option<&DivisionKey> {
        self.applied.as_ref()
    }

    /// Returns the applied division, if any.
    pub fn applied_division(&self) -> Option<&'a Division> {
        let dataset = self.dataset;
        self.applied.as_ref().and_then(|k| dataset.get(k))
    }

    pub fn is_selected(&self) -> bool {
        self.applied.is_some()
    }

    /// Returns the population-descending order.
    pub fn base_order(&self) -> &[&'a Division] {
        &self.base
    }

    /// Returns the order currently on display.
    pub fn current_order(&self) -> &[&'a Division] {
        &self.current
    }

    /// Selects the division identified by `key` and re-ranks around it.
    ///
    /// On `NotFound` the state is left untouched.
    pub fn select(&mut self, key: &DivisionKey) -> Result<&'a Division, SelectionError> {
        let dataset = self.dataset;
        let division = dataset
            .get(key)
            .ok_or_else(|| SelectionError::NotFound(key.to_string()))?;
        self.apply(division);
        Ok(division)
    }

    /// Resolves free text typed by a user and selects the match.
    ///
    /// The text is trimmed and matched against names exactly. On an
    /// id-keyed dataset a bare number (optionally prefixed with `#`) is
    /// also accepted as an id.
    pub fn select_by_input(&mut self, input: &str) -> Result<&'a Division, SelectionError> {
        let text = input.trim();
        if text.is_empty() {
            return Err(SelectionError::NotFound(text.to_string()));
        }

        let dataset = self.dataset;
        match dataset.key_mode() {
            KeyMode::Name => self.select(&DivisionKey::name(text)),
            KeyMode::Id => {
                let digits = text.strip_prefix('#').unwrap_or(text);
                if let Ok(id) = digits.parse::<u64>() {
                    if let Some(division) = dataset.get(&DivisionKey::Id(id)) {
                        self.apply(division);
                        return Ok(division);
                    }
                }
                match dataset.find_by_name(text).as_slice() {
                    [] => Err(SelectionError::NotFound(text.to_string())),
                    [division] => {
                        let division = *division;
                        self.apply(division);
                        Ok(division)
                    }
                    _ => Err(SelectionError::Ambiguous(text.to_string())),
                }
            }
        }
    }

    /// Returns to the Unselected state and restores the base order.
    pub fn clear(&mut self) {
        if let Some(key) = self.applied.take() {
            log::debug!("selection cleared (was {})", key);
        }
        self.current = self.base.clone();
    }

    /// Selects a uniformly random division from the whole dataset.
    ///
    /// The currently applied division is a valid outcome.
    pub fn pick_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &'a Division {
        let dataset = self.dataset;
        let divisions = dataset.divisions();
        // A constructed dataset is never empty.
        let division = &divisions[rng.gen_range(0..divisions.len())];
        self.apply(division);
        division
    }

    fn apply(&mut self, division: &'a Division) {
        let key = division.key();
        log::debug!("selected {}", key);
        self.applied = Some(key);
        self.current = sort_by_distance(&self.base, division);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::division::DivisionType;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn names(order: &[&Division]) -> Vec<String> {
        order.iter().map(|d| d.name.clone()).collect()
    }

    fn abc() -> Dataset {
        Dataset::from_divisions(vec![
            Division::new("C", 10, DivisionType::Village),
            Division::new("A", 100, DivisionType::City).with_coord(0.0, 0.0),
            Division::new("B", 50, DivisionType::City).with_coord(1.0, 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn starts_unselected_with_base_order() {
        let ds = abc();
        let ctl = SelectionController::new(&ds);
        assert!(!ctl.is_selected());
        assert!(ctl.applied().is_none());
        assert_eq!(names(ctl.current_order()), vec!["A", "B", "C"]);
    }

    #[test]
    fn select_reorders_around_target() {
        let ds = abc();
        let mut ctl = SelectionController::new(&ds);
        let picked = ctl.select(&DivisionKey::name("B")).unwrap();
        assert_eq!(picked.name, "B");
        assert_eq!(ctl.applied(), Some(&DivisionKey::name("B")));
        assert_eq!(names(ctl.current_order()), vec!["B", "A", "C"]);
    }

    #[test]
    fn selecting_coordinate_less_division_keeps_base_order() {
        let ds = abc();
        let mut ctl = SelectionController::new(&ds);
        ctl.select(&DivisionKey::name("C")).unwrap();
        assert!(ctl.is_selected());
        assert_eq!(names(ctl.current_order()), vec!["A", "B", "C"]);
    }

    #[test]
    fn unknown_key_leaves_state_untouched() {
        let ds = abc();
        let mut ctl = SelectionController::new(&ds);
        ctl.select(&DivisionKey::name("B")).unwrap();
        let err = ctl.select(&DivisionKey::name("Z")).unwrap_err();
        assert_eq!(err, SelectionError::NotFound("Z".to_string()));
        assert_eq!(ctl.applied(), Some(&DivisionKey::name("B")));
        assert_eq!(names(ctl.current_order()), vec!["B", "A", "C"]);
    }

    #[test]
    fn clear_restores_base_order() {
        let ds = abc();
        let mut ctl = SelectionController::new(&ds);
        ctl.select(&DivisionKey::name("B")).unwrap();
        ctl.clear();
        assert!(!ctl.is_selected());
        assert_eq!(names(ctl.current_order()), names(ctl.base_order()));
    }

    #[test]
    fn select_by_input_trims_text() {
        let ds = abc();
        let mut ctl = SelectionController::new(&ds);
        assert_eq!(ctl.select_by_input("  B ").unwrap().name, "B");
        assert!(matches!(ctl.select_by_input("   "), Err(SelectionError::NotFound(_))));
        assert!(matches!(ctl.select_by_input("b"), Err(SelectionError::NotFound(_))));
    }

    #[test]
    fn select_by_input_on_id_keyed_dataset() {
        let ds = Dataset::from_divisions(vec![
            Division::new("중구", 120_000, DivisionType::District).with_id(1).with_coord(37.56, 126.99),
            Division::new("중구", 41_000, DivisionType::District).with_id(2).with_coord(35.10, 129.03),
            Division::new("해운대구", 380_000, DivisionType::District).with_id(3).with_coord(35.16, 129.16),
        ])
        .unwrap();
        let mut ctl = SelectionController::new(&ds);

        assert_eq!(ctl.select_by_input("2").unwrap().population, 41_000);
        assert_eq!(ctl.applied(), Some(&DivisionKey::Id(2)));
        assert_eq!(ctl.select_by_input("#3").unwrap().name, "해운대구");
        assert_eq!(ctl.select_by_input("해운대구").unwrap().id, Some(3));
        assert_eq!(
            ctl.select_by_input("중구").unwrap_err(),
            SelectionError::Ambiguous("중구".to_string())
        );
        assert!(matches!(ctl.select_by_input("9"), Err(SelectionError::NotFound(_))));
    }

    #[test]
    fn pick_random_is_deterministic_with_seed() {
        let ds = abc();
        let mut first = SelectionController::new(&ds);
        let mut second = SelectionController::new(&ds);
        let mut rng_a = SmallRng::seed_from_u64(7);
        let mut rng_b = SmallRng::seed_from_u64(7);
        for _ in 0..10 {
            let a = first.pick_random(&mut rng_a).name.clone();
            let b = second.pick_random(&mut rng_b).name.clone();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn pick_random_covers_whole_dataset() {
        let ds = abc();
        let mut ctl = SelectionController::new(&ds);
        let mut rng = SmallRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let picked = ctl.pick_random(&mut rng);
            assert_eq!(ctl.applied(), Some(&picked.key()));
            seen.insert(picked.name.clone());
        }
        assert_eq!(seen.len(), ds.len());
    }
}
