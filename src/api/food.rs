//! Food Endpoints
//!
//! One async method per backend operation, decoding into the domain
//! models.

use super::{check, Api, ApiError};
use crate::models::{FoodItem, FoodRequest};

impl Api {
    /// `GET /foods`: the full collection, in display order.
    pub async fn list_foods(&self) -> Result<Vec<FoodItem>, ApiError> {
        let response = self.client().get(self.url("/foods")).send().await?;
        Ok(check(response)?.json().await?)
    }

    /// `POST /foods`: create a food. The response carries the
    /// server-assigned id.
    pub async fn create_food(&self, food: FoodRequest) -> Result<FoodItem, ApiError> {
        let body = create_body(food);
        let response = self
            .client()
            .post(self.url("/foods"))
            .json(&body)
            .send()
            .await?;
        Ok(check(response)?.json().await?)
    }

    /// `PUT /foods/{id}`: full replacement keyed by the item's id.
    pub async fn update_food(&self, food: &FoodItem) -> Result<FoodItem, ApiError> {
        let response = self
            .client()
            .put(self.url(&format!("/foods/{}", food.id)))
            .json(food)
            .send()
            .await?;
        Ok(check(response)?.json().await?)
    }

    /// `DELETE /foods/{id}`: success is any 2xx, body ignored.
    pub async fn delete_food(&self, id: u64) -> Result<(), ApiError> {
        let response = self
            .client()
            .delete(self.url(&format!("/foods/{}", id)))
            .send()
            .await?;
        check(response)?;
        Ok(())
    }
}

/// New foods are always created as available.
fn create_body(mut food: FoodRequest) -> FoodRequest {
    food.available = true;
    food
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_body_forces_available() {
        let request = FoodRequest {
            name: "Pie".to_string(),
            description: "d".to_string(),
            price: 5.0,
            available: false,
            image: "i".to_string(),
        };

        let body = create_body(request.clone());

        assert!(body.available);
        // Every other field passes through untouched
        assert_eq!(body.name, request.name);
        assert_eq!(body.description, request.description);
        assert_eq!(body.price, request.price);
        assert_eq!(body.image, request.image);
    }
}
