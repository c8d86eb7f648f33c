use crate::db::traits::DocumentStore;
use crate::types::{
    AppError, DeleteOutcome, Food, FoodFilter, FoodPatch, FoodRequest, FoodSort, InsertOutcome,
    RequestStatus, Result, SortOrder, UpdateOutcome,
};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use parking_lot::RwLock;

/// In-memory document store.
///
/// Backs development runs and the integration suites; mirrors the MongoDB
/// store's observable behavior, including the error on malformed ids. The
/// one divergence: the name search treats the term as a literal substring
/// rather than a regular expression.
#[derive(Default)]
pub struct MemoryStore {
    foods: RwLock<Vec<Food>>,
    requests: RwLock<Vec<FoodRequest>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn object_id(id: &str) -> Result<ObjectId> {
        ObjectId::parse_str(id)
            .map_err(|e| AppError::Database(format!("Invalid document id '{}': {}", id, e)))
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    async fn insert_food(&self, mut food: Food) -> Result<InsertOutcome> {
        let oid = food.id.unwrap_or_else(ObjectId::new);
        food.id = Some(oid);
        self.foods.write().push(food);

        Ok(InsertOutcome {
            acknowledged: true,
            inserted_id: oid.to_hex(),
        })
    }

    async fn find_foods(&self, filter: &FoodFilter) -> Result<Vec<Food>> {
        let foods = self.foods.read();

        let mut matches: Vec<Food> = foods
            .iter()
            .filter(|food| {
                filter
                    .category
                    .as_ref()
                    .is_none_or(|c| food.category.as_ref() == Some(c))
            })
            .filter(|food| {
                filter.search.as_ref().is_none_or(|term| {
                    food.food_name
                        .to_lowercase()
                        .contains(&term.to_lowercase())
                })
            })
            .cloned()
            .collect();

        if let Some((field, order)) = filter.sort {
            matches.sort_by(|a, b| {
                let ordering = match field {
                    FoodSort::Expiry => a.expired_date_time.cmp(&b.expired_date_time),
                    FoodSort::Quantity => a.food_quantity.cmp(&b.food_quantity),
                };
                match order {
                    SortOrder::Asc => ordering,
                    SortOrder::Desc => ordering.reverse(),
                }
            });
        }

        Ok(matches)
    }

    async fn find_food_by_id(&self, id: &str) -> Result<Option<Food>> {
        let oid = Self::object_id(id)?;
        Ok(self
            .foods
            .read()
            .iter()
            .find(|food| food.id == Some(oid))
            .cloned())
    }

    async fn update_food(&self, id: &str, patch: &FoodPatch) -> Result<UpdateOutcome> {
        let oid = Self::object_id(id)?;
        let mut foods = self.foods.write();

        let Some(food) = foods.iter_mut().find(|food| food.id == Some(oid)) else {
            return Ok(UpdateOutcome {
                acknowledged: true,
                matched_count: 0,
                modified_count: 0,
            });
        };

        let before = food.clone();
        if let Some(v) = &patch.food_name {
            food.food_name = v.clone();
        }
        if let Some(v) = &patch.food_image {
            food.food_image = v.clone();
        }
        if let Some(v) = &patch.category {
            food.category = Some(v.clone());
        }
        if let Some(v) = patch.food_quantity {
            food.food_quantity = v;
        }
        if let Some(v) = &patch.pickup_location {
            food.pickup_location = v.clone();
        }
        if let Some(v) = &patch.expired_date_time {
            food.expired_date_time = v.clone();
        }
        if let Some(v) = &patch.additional_notes {
            food.additional_notes = Some(v.clone());
        }
        if let Some(v) = &patch.food_status {
            food.food_status = v.clone();
        }

        let modified = food.food_name != before.food_name
            || food.food_image != before.food_image
            || food.category != before.category
            || food.food_quantity != before.food_quantity
            || food.pickup_location != before.pickup_location
            || food.expired_date_time != before.expired_date_time
            || food.additional_notes != before.additional_notes
            || food.food_status != before.food_status;

        Ok(UpdateOutcome {
            acknowledged: true,
            matched_count: 1,
            modified_count: modified as u64,
        })
    }

    async fn delete_food(&self, id: &str) -> Result<DeleteOutcome> {
        let oid = Self::object_id(id)?;
        let mut foods = self.foods.write();

        let before = foods.len();
        foods.retain(|food| food.id != Some(oid));

        Ok(DeleteOutcome {
            acknowledged: true,
            deleted_count: (before - foods.len()) as u64,
        })
    }

    async fn find_foods_by_donor(&self, email: &str) -> Result<Vec<Food>> {
        Ok(self
            .foods
            .read()
            .iter()
            .filter(|food| food.donar_email == email)
            .cloned()
            .collect())
    }

    async fn insert_request(&self, mut request: FoodRequest) -> Result<InsertOutcome> {
        let oid = request.id.unwrap_or_else(ObjectId::new);
        request.id = Some(oid);
        self.requests.write().push(request);

        Ok(InsertOutcome {
            acknowledged: true,
            inserted_id: oid.to_hex(),
        })
    }

    async fn find_request_by_food_and_requester(
        &self,
        food_id: &str,
        requester_email: &str,
    ) -> Result<Option<FoodRequest>> {
        Ok(self
            .requests
            .read()
            .iter()
            .find(|r| r.food_id == food_id && r.requester_email == requester_email)
            .cloned())
    }

    async fn find_requests_by_requester(&self, email: &str) -> Result<Vec<FoodRequest>> {
        Ok(self
            .requests
            .read()
            .iter()
            .filter(|r| r.requester_email == email)
            .cloned()
            .collect())
    }

    async fn find_requests_for_food(&self, food_id: &str) -> Result<Vec<FoodRequest>> {
        Ok(self
            .requests
            .read()
            .iter()
            .filter(|r| r.food_id == food_id)
            .cloned()
            .collect())
    }

    async fn delete_request(&self, id: &str) -> Result<DeleteOutcome> {
        let oid = Self::object_id(id)?;
        let mut requests = self.requests.write();

        let before = requests.len();
        requests.retain(|r| r.id != Some(oid));

        Ok(DeleteOutcome {
            acknowledged: true,
            deleted_count: (before - requests.len()) as u64,
        })
    }

    async fn mark_request_delivered(&self, id: &str) -> Result<UpdateOutcome> {
        let oid = Self::object_id(id)?;
        let mut requests = self.requests.write();

        let Some(request) = requests.iter_mut().find(|r| r.id == Some(oid)) else {
            return Ok(UpdateOutcome {
                acknowledged: true,
                matched_count: 0,
                modified_count: 0,
            });
        };

        let modified = request.status != RequestStatus::Delivered;
        request.status = RequestStatus::Delivered;

        Ok(UpdateOutcome {
            acknowledged: true,
            matched_count: 1,
            modified_count: modified as u64,
        })
    }

    async fn shutdown(&self) {}
}
