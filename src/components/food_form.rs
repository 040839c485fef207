//! Food Form Component
//!
//! Shared form body for the add/edit food modals: one signal per field,
//! cleared after a successful submit.

use leptos::prelude::*;

use crate::models::FoodRequest;

#[component]
pub fn FoodForm(
    /// Initial field values (empty for the add form)
    initial: FoodRequest,
    submit_label: &'static str,
    #[prop(into)] on_submit: Callback<FoodRequest>,
) -> impl IntoView {
    let (image, set_image) = signal(initial.image.clone());
    let (name, set_name) = signal(initial.name.clone());
    let (price, set_price) = signal(if initial.price == 0.0 {
        String::new()
    } else {
        initial.price.to_string()
    });
    let (description, set_description) = signal(initial.description.clone());
    // Availability is not editable here; it rides along from the prefill
    let available = initial.available;

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get();
        if name_value.is_empty() {
            return;
        }
        let price_value = price.get().parse().unwrap_or(0.0);

        on_submit.run(FoodRequest {
            name: name_value,
            description: description.get(),
            price: price_value,
            available,
            image: image.get(),
        });

        set_image.set(String::new());
        set_name.set(String::new());
        set_price.set(String::new());
        set_description.set(String::new());
    };

    view! {
        <form class="food-form" on:submit=submit>
            <input
                type="text"
                placeholder="Image URL"
                prop:value=move || image.get()
                on:input=move |ev| set_image.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Price"
                prop:value=move || price.get()
                on:input=move |ev| set_price.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Description"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <button type="submit">{submit_label}</button>
        </form>
    }
}
