//! Domain Models
//!
//! Data structures matching the backend's food collection.

use serde::{Deserialize, Serialize};

/// Food item as served by the backend (`id` is server-assigned)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub available: bool,
    pub image: String,
}

/// Create/update payload: a food before the server assigns an id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodRequest {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub available: bool,
    pub image: String,
}

impl From<FoodItem> for FoodRequest {
    fn from(food: FoodItem) -> Self {
        Self {
            name: food.name,
            description: food.description,
            price: food.price,
            available: food.available,
            image: food.image,
        }
    }
}
