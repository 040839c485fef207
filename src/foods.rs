//! Food List Reconciliation
//!
//! Pure helpers that keep the in-memory list matching what a fresh fetch
//! from the backend would return after each mutation.

use crate::models::{FoodItem, FoodRequest};

/// Append a newly created food to the end of the list.
pub fn push_food(mut foods: Vec<FoodItem>, food: FoodItem) -> Vec<FoodItem> {
    foods.push(food);
    foods
}

/// Replace the entry whose id matches `updated`, leaving order and all
/// other entries untouched. No-op when the id is absent.
pub fn replace_food(mut foods: Vec<FoodItem>, updated: FoodItem) -> Vec<FoodItem> {
    if let Some(slot) = foods.iter_mut().find(|food| food.id == updated.id) {
        *slot = updated;
    }
    foods
}

/// Drop the entry with `id`, preserving the order of the rest.
pub fn remove_food(mut foods: Vec<FoodItem>, id: u64) -> Vec<FoodItem> {
    foods.retain(|food| food.id != id);
    foods
}

/// Build the PUT body for an edit: the remembered item overlaid with the
/// submitted form fields. `id` and `available` come from the original.
pub fn merged_update(editing: &FoodItem, food: &FoodRequest) -> FoodItem {
    FoodItem {
        id: editing.id,
        name: food.name.clone(),
        description: food.description.clone(),
        price: food.price,
        available: editing.available,
        image: food.image.clone(),
    }
}
