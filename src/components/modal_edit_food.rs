//! Edit Food Modal
//!
//! Same form as the add modal, prefilled from the food being edited.

use leptos::prelude::*;

use super::food_form::FoodForm;
use crate::models::{FoodItem, FoodRequest};

#[component]
pub fn ModalEditFood(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] editing_food: Signal<Option<FoodItem>>,
    #[prop(into)] on_update: Callback<FoodRequest>,
) -> impl IntoView {
    view! {
        <Show when=move || is_open.get()>
            <div class="modal-overlay">
                <div class="modal">
                    <header class="modal-header">
                        <h2>"Edit food"</h2>
                        <button
                            type="button"
                            class="close-btn"
                            on:click=move |_| on_close.run(())
                        >
                            "×"
                        </button>
                    </header>
                    {move || {
                        editing_food.get().map(|food| {
                            view! {
                                <FoodForm
                                    initial=FoodRequest::from(food)
                                    submit_label="Save changes"
                                    on_submit=Callback::new(move |food| {
                                        on_update.run(food);
                                        on_close.run(());
                                    })
                                />
                            }
                        })
                    }}
                </div>
            </div>
        </Show>
    }
}
