//! Food Card Component
//!
//! Single food entry: image, details, availability badge, edit/delete
//! actions.

use leptos::prelude::*;

use crate::models::FoodItem;

#[component]
pub fn FoodCard(
    food: FoodItem,
    #[prop(into)] on_edit: Callback<FoodItem>,
    #[prop(into)] on_delete: Callback<u64>,
) -> impl IntoView {
    let id = food.id;
    let edit_target = food.clone();
    let badge = if food.available {
        ("availability available", "Available")
    } else {
        ("availability unavailable", "Unavailable")
    };

    view! {
        <article class="food-card">
            <img src=food.image.clone() alt=food.name.clone() />
            <div class="food-body">
                <h3>{food.name.clone()}</h3>
                <p>{food.description.clone()}</p>
                <span class="food-price">{format!("R$ {:.2}", food.price)}</span>
                <span class=badge.0>{badge.1}</span>
            </div>
            <div class="food-actions">
                <button
                    type="button"
                    class="edit-btn"
                    on:click=move |_| on_edit.run(edit_target.clone())
                >
                    "Edit"
                </button>
                <button
                    type="button"
                    class="delete-btn"
                    on:click=move |_| on_delete.run(id)
                >
                    "Delete"
                </button>
            </div>
        </article>
    }
}
