use crate::domain::model::Catalog;
use std::collections::BTreeSet;
use std::sync::Arc;

/// The three independent filter axes. A closed enum instead of the stringly
/// "makes"/"models"/"states" tags, so the cascade rule lives in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Make,
    Model,
    State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

/// Absolute limits the price filter may move within.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBounds {
    pub floor: u32,
    pub ceiling: u32,
}

impl Default for PriceBounds {
    fn default() -> Self {
        Self {
            floor: 2000,
            ceiling: 100_000,
        }
    }
}

/// The user's current filter selections.
///
/// Invariant: every selected model belongs to `catalog.models_of(m)` for some
/// selected make `m`. Maintained by the cascade in `toggle`, not merely
/// checked. Sets are `BTreeSet` so iteration (and therefore the derived
/// query) is deterministic.
#[derive(Debug, Clone)]
pub struct FilterState {
    catalog: Arc<Catalog>,
    makes: BTreeSet<String>,
    models: BTreeSet<String>,
    states: BTreeSet<String>,
    price: PriceRange,
    bounds: PriceBounds,
}

impl FilterState {
    pub fn new(bounds: PriceBounds) -> Self {
        Self {
            catalog: Arc::new(Catalog::default()),
            makes: BTreeSet::new(),
            models: BTreeSet::new(),
            states: BTreeSet::new(),
            price: PriceRange {
                min: bounds.floor,
                max: bounds.ceiling,
            },
            bounds,
        }
    }

    /// Installs the catalog once it has arrived from the backend.
    pub fn set_catalog(&mut self, catalog: Arc<Catalog>) {
        self.catalog = catalog;
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Flips membership of `value` on the given axis and returns whether the
    /// selection changed (a toggle always does).
    ///
    /// Removing a make cascades: every selected model owned by that make is
    /// dropped. Adding a make changes no models. The caller is responsible
    /// for only toggling models whose owning make is selected.
    pub fn toggle(&mut self, dimension: Dimension, value: &str) -> bool {
        let set = match dimension {
            Dimension::Make => &mut self.makes,
            Dimension::Model => &mut self.models,
            Dimension::State => &mut self.states,
        };

        let removed = set.remove(value);
        if !removed {
            set.insert(value.to_string());
        }

        if removed && dimension == Dimension::Make {
            for model in self.catalog.models_of(value) {
                self.models.remove(model);
            }
        }
        true
    }

    /// Applies a new price range. Rejected silently (prior range kept,
    /// returns false) when `min > max` or either end falls outside the
    /// absolute bounds. Returns false as well when nothing changed.
    pub fn set_price_range(&mut self, min: u32, max: u32) -> bool {
        if min > max || min < self.bounds.floor || max > self.bounds.ceiling {
            return false;
        }
        let range = PriceRange { min, max };
        if range == self.price {
            return false;
        }
        self.price = range;
        true
    }

    pub fn makes(&self) -> &BTreeSet<String> {
        &self.makes
    }

    pub fn models(&self) -> &BTreeSet<String> {
        &self.models
    }

    pub fn states(&self) -> &BTreeSet<String> {
        &self.states
    }

    pub fn price(&self) -> PriceRange {
        self.price
    }

    pub fn bounds(&self) -> PriceBounds {
        self.bounds
    }

    pub fn is_selected(&self, dimension: Dimension, value: &str) -> bool {
        match dimension {
            Dimension::Make => self.makes.contains(value),
            Dimension::Model => self.models.contains(value),
            Dimension::State => self.states.contains(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn toyota_honda_catalog() -> Arc<Catalog> {
        let mut models_by_make = HashMap::new();
        models_by_make.insert(
            "toyota".to_string(),
            vec!["camry".to_string(), "corolla".to_string()],
        );
        models_by_make.insert("honda".to_string(), vec!["civic".to_string()]);
        Arc::new(Catalog {
            makes: vec!["toyota".to_string(), "honda".to_string()],
            models_by_make,
            states: vec!["WA".to_string(), "OR".to_string()],
        })
    }

    fn state_with_catalog() -> FilterState {
        let mut state = FilterState::new(PriceBounds::default());
        state.set_catalog(toyota_honda_catalog());
        state
    }

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut state = state_with_catalog();
        assert!(state.toggle(Dimension::State, "WA"));
        assert!(state.is_selected(Dimension::State, "WA"));
        assert!(state.toggle(Dimension::State, "WA"));
        assert!(!state.is_selected(Dimension::State, "WA"));
    }

    #[test]
    fn test_make_removal_cascades_to_owned_models() {
        let mut state = state_with_catalog();
        state.toggle(Dimension::Make, "toyota");
        state.toggle(Dimension::Make, "honda");
        state.toggle(Dimension::Model, "camry");
        state.toggle(Dimension::Model, "corolla");
        state.toggle(Dimension::Model, "civic");

        state.toggle(Dimension::Make, "toyota");

        assert!(!state.is_selected(Dimension::Make, "toyota"));
        assert!(!state.is_selected(Dimension::Model, "camry"));
        assert!(!state.is_selected(Dimension::Model, "corolla"));
        // Unrelated selections stay untouched.
        assert!(state.is_selected(Dimension::Make, "honda"));
        assert!(state.is_selected(Dimension::Model, "civic"));
    }

    #[test]
    fn test_make_addition_does_not_touch_models() {
        let mut state = state_with_catalog();
        state.toggle(Dimension::Make, "honda");
        state.toggle(Dimension::Model, "civic");
        state.toggle(Dimension::Make, "toyota");
        assert!(state.is_selected(Dimension::Model, "civic"));
        assert!(state.models().len() == 1);
    }

    #[test]
    fn test_price_range_silent_rejection() {
        let mut state = state_with_catalog();
        assert!(state.set_price_range(5000, 20_000));

        // min > max
        assert!(!state.set_price_range(30_000, 10_000));
        assert_eq!(state.price(), PriceRange { min: 5000, max: 20_000 });

        // outside absolute bounds
        assert!(!state.set_price_range(1000, 20_000));
        assert!(!state.set_price_range(5000, 200_000));
        assert_eq!(state.price(), PriceRange { min: 5000, max: 20_000 });
    }

    #[test]
    fn test_price_range_unchanged_is_not_a_change() {
        let mut state = state_with_catalog();
        assert!(state.set_price_range(5000, 20_000));
        assert!(!state.set_price_range(5000, 20_000));
    }

    #[test]
    fn test_default_price_range_spans_bounds() {
        let state = FilterState::new(PriceBounds::default());
        assert_eq!(state.price(), PriceRange { min: 2000, max: 100_000 });
    }
}
