//! Header Component

use leptos::prelude::*;

/// Top bar with the new-food action.
#[component]
pub fn Header(#[prop(into)] on_open_modal: Callback<()>) -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Food Dash"</h1>
            <button
                type="button"
                class="new-food-btn"
                on:click=move |_| on_open_modal.run(())
            >
                "New food"
            </button>
        </header>
    }
}
