//! Add Food Modal

use leptos::prelude::*;

use super::food_form::FoodForm;
use crate::models::FoodRequest;

/// Overlay for creating a new food. Renders nothing while closed.
#[component]
pub fn ModalAddFood(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_add: Callback<FoodRequest>,
) -> impl IntoView {
    view! {
        <Show when=move || is_open.get()>
            <div class="modal-overlay">
                <div class="modal">
                    <header class="modal-header">
                        <h2>"New food"</h2>
                        <button
                            type="button"
                            class="close-btn"
                            on:click=move |_| on_close.run(())
                        >
                            "×"
                        </button>
                    </header>
                    <FoodForm
                        initial=FoodRequest::default()
                        submit_label="Add food"
                        on_submit=Callback::new(move |food| {
                            on_add.run(food);
                            on_close.run(());
                        })
                    />
                </div>
            </div>
        </Show>
    }
}
