//! Object State Cell
//!
//! A single-value state container layering shallow partial-merge writes
//! over a Leptos signal, plus the dashboard's aggregate state.

use leptos::prelude::*;

use crate::models::FoodItem;

/// Types that accept a shallow partial update.
///
/// `apply` overwrites exactly the fields present in the patch and leaves
/// the rest untouched. Present fields replace the old value wholesale;
/// there is no recursive merge into nested structures.
pub trait Patchable: Sized {
    type Patch;

    fn apply(&mut self, patch: Self::Patch);
}

/// State cell supporting partial-merge writes.
///
/// Writes come in two forms: [`merge`](ObjectState::merge) takes a ready
/// patch, [`merge_with`](ObjectState::merge_with) takes a function of the
/// current value. Both notify reactive dependents.
pub struct ObjectState<T>
where
    T: Patchable + Send + Sync + 'static,
{
    value: RwSignal<T>,
}

impl<T> ObjectState<T>
where
    T: Patchable + Clone + Send + Sync + 'static,
{
    pub fn new(initial: T) -> Self {
        Self {
            value: RwSignal::new(initial),
        }
    }

    /// Current value (reactive read).
    pub fn get(&self) -> T {
        self.value.get()
    }

    /// Project a value out of the current state without cloning all of it.
    pub fn with<U>(&self, f: impl FnOnce(&T) -> U) -> U {
        self.value.with(f)
    }

    /// Shallow-merge a partial record into the current value.
    pub fn merge(&self, patch: T::Patch) {
        self.value.update(|value| value.apply(patch));
    }

    /// Shallow-merge the output of `f`, evaluated against the current value.
    ///
    /// `f` runs inside the signal update, so consecutive merges each
    /// observe the cumulative effect of the ones before them, never a
    /// stale snapshot.
    pub fn merge_with(&self, f: impl FnOnce(&T) -> T::Patch) {
        self.value.update(|value| {
            let patch = f(value);
            value.apply(patch);
        });
    }
}

impl<T> Clone for ObjectState<T>
where
    T: Patchable + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ObjectState<T> where T: Patchable + Send + Sync + 'static {}

/// Aggregate state for the dashboard page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    /// Foods in display order (append on create)
    pub foods: Vec<FoodItem>,
    /// Item currently targeted by the edit modal
    pub editing_food: Option<FoodItem>,
    /// Add-food modal visibility
    pub modal_open: bool,
    /// Edit-food modal visibility
    pub edit_modal_open: bool,
}

/// Partial record of [`DashboardState`]: `Some` fields overwrite, `None`
/// fields are left alone.
#[derive(Debug, Default)]
pub struct DashboardPatch {
    pub foods: Option<Vec<FoodItem>>,
    pub editing_food: Option<Option<FoodItem>>,
    pub modal_open: Option<bool>,
    pub edit_modal_open: Option<bool>,
}

impl Patchable for DashboardState {
    type Patch = DashboardPatch;

    fn apply(&mut self, patch: DashboardPatch) {
        if let Some(foods) = patch.foods {
            self.foods = foods;
        }
        if let Some(editing_food) = patch.editing_food {
            self.editing_food = editing_food;
        }
        if let Some(modal_open) = patch.modal_open {
            self.modal_open = modal_open;
        }
        if let Some(edit_modal_open) = patch.edit_modal_open {
            self.edit_modal_open = edit_modal_open;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_food(id: u64, name: &str) -> FoodItem {
        FoodItem {
            id,
            name: name.to_string(),
            description: "d".to_string(),
            price: 10.0,
            available: true,
            image: "i".to_string(),
        }
    }

    #[test]
    fn test_apply_overwrites_only_present_fields() {
        let mut state = DashboardState {
            foods: vec![make_food(1, "Cake")],
            editing_food: None,
            modal_open: false,
            edit_modal_open: true,
        };

        state.apply(DashboardPatch {
            modal_open: Some(true),
            ..Default::default()
        });

        assert!(state.modal_open);
        // Untouched fields keep their values
        assert_eq!(state.foods.len(), 1);
        assert!(state.editing_food.is_none());
        assert!(state.edit_modal_open);
    }

    #[test]
    fn test_empty_patch_changes_nothing() {
        let mut state = DashboardState {
            foods: vec![make_food(1, "Cake")],
            editing_food: Some(make_food(1, "Cake")),
            modal_open: true,
            edit_modal_open: false,
        };
        let before = state.clone();

        state.apply(DashboardPatch::default());

        assert_eq!(state, before);
    }

    #[test]
    fn test_apply_replaces_collections_wholesale() {
        let mut state = DashboardState {
            foods: vec![make_food(1, "Cake"), make_food(2, "Pie")],
            ..Default::default()
        };

        state.apply(DashboardPatch {
            foods: Some(vec![make_food(3, "Soup")]),
            ..Default::default()
        });

        // No splicing: the new list replaces the old one entirely
        assert_eq!(state.foods.len(), 1);
        assert_eq!(state.foods[0].id, 3);
    }

    #[test]
    fn test_full_patch_is_idempotent() {
        let full = || DashboardPatch {
            foods: Some(vec![make_food(1, "Cake")]),
            editing_food: Some(Some(make_food(1, "Cake"))),
            modal_open: Some(true),
            edit_modal_open: Some(false),
        };

        let mut once = DashboardState::default();
        once.apply(full());

        let mut twice = DashboardState::default();
        twice.apply(full());
        twice.apply(full());

        assert_eq!(once, twice);
    }

    #[test]
    fn test_merge_object_form() {
        let state = ObjectState::new(DashboardState::default());

        state.merge(DashboardPatch {
            foods: Some(vec![make_food(1, "Cake")]),
            ..Default::default()
        });

        let current = state.get();
        assert_eq!(current.foods.len(), 1);
        assert!(!current.modal_open);
    }

    #[test]
    fn test_merge_function_form_matches_object_form() {
        let object_form = ObjectState::new(DashboardState::default());
        let function_form = ObjectState::new(DashboardState::default());

        let patch = |state: &DashboardState| DashboardPatch {
            modal_open: Some(!state.modal_open),
            ..Default::default()
        };

        let precomputed = patch(&object_form.get());
        object_form.merge(precomputed);
        function_form.merge_with(patch);

        assert_eq!(object_form.get(), function_form.get());
    }

    #[test]
    fn test_chained_merges_observe_cumulative_state() {
        let state = ObjectState::new(DashboardState::default());

        state.merge_with(|s| DashboardPatch {
            foods: Some(vec![make_food(1, "Cake")]),
            modal_open: Some(!s.modal_open),
            ..Default::default()
        });
        // The second write must see the food appended by the first
        state.merge_with(|s| {
            let mut foods = s.foods.clone();
            foods.push(make_food(2, "Pie"));
            DashboardPatch {
                foods: Some(foods),
                ..Default::default()
            }
        });

        let current = state.get();
        assert_eq!(current.foods.len(), 2);
        assert_eq!(current.foods[1].id, 2);
        assert!(current.modal_open);
    }
}
