//! Dashboard App
//!
//! Root component: owns the dashboard state cell, loads the food list on
//! mount, and wires the CRUD handlers into the page layout.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::Api;
use crate::components::{FoodCard, Header, ModalAddFood, ModalEditFood};
use crate::foods;
use crate::models::{FoodItem, FoodRequest};
use crate::state::{DashboardPatch, DashboardState, ObjectState};

#[component]
pub fn App() -> impl IntoView {
    let api = Api::default();
    let state = ObjectState::new(DashboardState::default());

    // Load the food list once on mount. A failed load leaves the empty
    // list in place; nothing is reported.
    {
        let api = api.clone();
        Effect::new(move |_| {
            let api = api.clone();
            spawn_local(async move {
                if let Ok(foods) = api.list_foods().await {
                    state.merge(DashboardPatch {
                        foods: Some(foods),
                        ..Default::default()
                    });
                }
            });
        });
    }

    let handle_add_food = {
        let api = api.clone();
        move |food: FoodRequest| {
            let api = api.clone();
            spawn_local(async move {
                match api.create_food(food).await {
                    Ok(created) => state.merge_with(|s| DashboardPatch {
                        foods: Some(foods::push_food(s.foods.clone(), created)),
                        ..Default::default()
                    }),
                    Err(err) => {
                        web_sys::console::error_1(&format!("add food failed: {err}").into());
                    }
                }
            });
        }
    };

    let handle_update_food = {
        let api = api.clone();
        move |food: FoodRequest| {
            let Some(editing) = state.with(|s| s.editing_food.clone()) else {
                return;
            };
            let api = api.clone();
            spawn_local(async move {
                let merged = foods::merged_update(&editing, &food);
                match api.update_food(&merged).await {
                    Ok(updated) => state.merge_with(|s| DashboardPatch {
                        foods: Some(foods::replace_food(s.foods.clone(), updated)),
                        ..Default::default()
                    }),
                    Err(err) => {
                        web_sys::console::error_1(&format!("update food failed: {err}").into());
                    }
                }
            });
        }
    };

    // Removal happens only after the backend confirms; on failure the
    // item stays visible and nothing is reported.
    let handle_delete_food = {
        let api = api.clone();
        move |id: u64| {
            let api = api.clone();
            spawn_local(async move {
                if api.delete_food(id).await.is_ok() {
                    state.merge_with(|s| DashboardPatch {
                        foods: Some(foods::remove_food(s.foods.clone(), id)),
                        ..Default::default()
                    });
                }
            });
        }
    };

    let toggle_modal = move || {
        state.merge_with(|s| DashboardPatch {
            modal_open: Some(!s.modal_open),
            ..Default::default()
        });
    };

    let toggle_edit_modal = move || {
        state.merge_with(|s| DashboardPatch {
            edit_modal_open: Some(!s.edit_modal_open),
            ..Default::default()
        });
    };

    let handle_edit_food = move |food: FoodItem| {
        state.merge(DashboardPatch {
            editing_food: Some(Some(food)),
            edit_modal_open: Some(true),
            ..Default::default()
        });
    };

    let on_edit = Callback::new(handle_edit_food);
    let on_delete = Callback::new(handle_delete_food);

    view! {
        <Header on_open_modal=Callback::new(move |_| toggle_modal()) />

        <ModalAddFood
            is_open=Signal::derive(move || state.with(|s| s.modal_open))
            on_close=Callback::new(move |_| toggle_modal())
            on_add=Callback::new(handle_add_food)
        />

        <ModalEditFood
            is_open=Signal::derive(move || state.with(|s| s.edit_modal_open))
            on_close=Callback::new(move |_| toggle_edit_modal())
            editing_food=Signal::derive(move || state.with(|s| s.editing_food.clone()))
            on_update=Callback::new(handle_update_food)
        />

        <main class="foods-container">
            <For
                each=move || state.with(|s| s.foods.clone())
                key=|food| food.id
                children=move |food| {
                    view! {
                        <FoodCard food=food on_edit=on_edit on_delete=on_delete />
                    }
                }
            />
        </main>
    }
}
