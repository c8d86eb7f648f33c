use crate::db::traits::DocumentStore;
use crate::types::{
    AppError, DeleteOutcome, Food, FoodFilter, FoodPatch, FoodRequest, FoodSort, InsertOutcome,
    Result, SortOrder, UpdateOutcome,
};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use mongodb::{Client, Collection};

const FOODS_COLLECTION: &str = "foodsCollection";
const REQUESTS_COLLECTION: &str = "requestsCollection";

/// MongoDB-backed document store.
///
/// Thin wrapper over the driver's collection handles; the `Client` itself is
/// a cheaply cloneable handle with its own connection pooling, so one
/// `MongoStore` is shared process-wide behind an `Arc`.
pub struct MongoStore {
    client: Client,
    foods: Collection<Food>,
    requests: Collection<FoodRequest>,
}

impl MongoStore {
    /// Connects to the deployment and binds the food collections.
    pub async fn connect(uri: &str, database: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to MongoDB: {}", e)))?;

        let db = client.database(database);

        Ok(Self {
            foods: db.collection(FOODS_COLLECTION),
            requests: db.collection(REQUESTS_COLLECTION),
            client,
        })
    }

    fn object_id(id: &str) -> Result<ObjectId> {
        ObjectId::parse_str(id)
            .map_err(|e| AppError::Database(format!("Invalid document id '{}': {}", id, e)))
    }

    fn insert_outcome(inserted_id: Bson) -> InsertOutcome {
        InsertOutcome {
            acknowledged: true,
            inserted_id: inserted_id
                .as_object_id()
                .map(|oid| oid.to_hex())
                .unwrap_or_default(),
        }
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn ping(&self) -> Result<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::Database(format!("Ping failed: {}", e)))?;

        Ok(())
    }

    async fn insert_food(&self, food: Food) -> Result<InsertOutcome> {
        let result = self
            .foods
            .insert_one(&food)
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert listing: {}", e)))?;

        Ok(Self::insert_outcome(result.inserted_id))
    }

    async fn find_foods(&self, filter: &FoodFilter) -> Result<Vec<Food>> {
        let mut query = Document::new();
        if let Some(category) = &filter.category {
            query.insert("category", category);
        }
        if let Some(term) = &filter.search {
            query.insert("foodName", doc! { "$regex": term, "$options": "i" });
        }

        let mut find = self.foods.find(query);
        if let Some((field, order)) = filter.sort {
            let key = match field {
                FoodSort::Expiry => "expiredDateTime",
                FoodSort::Quantity => "foodQuantity",
            };
            let direction: i32 = match order {
                SortOrder::Asc => 1,
                SortOrder::Desc => -1,
            };
            let mut sort = Document::new();
            sort.insert(key, direction);
            find = find.sort(sort);
        }

        let cursor = find
            .await
            .map_err(|e| AppError::Database(format!("Failed to query listings: {}", e)))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::Database(format!("Failed to read listings: {}", e)))
    }

    async fn find_food_by_id(&self, id: &str) -> Result<Option<Food>> {
        let oid = Self::object_id(id)?;

        self.foods
            .find_one(doc! { "_id": oid })
            .await
            .map_err(|e| AppError::Database(format!("Failed to query listing: {}", e)))
    }

    async fn update_food(&self, id: &str, patch: &FoodPatch) -> Result<UpdateOutcome> {
        let oid = Self::object_id(id)?;

        let set = mongodb::bson::to_document(patch)
            .map_err(|e| AppError::Database(format!("Failed to encode patch: {}", e)))?;

        // An all-absent patch would make the driver reject the empty $set.
        if set.is_empty() {
            let matched = self
                .foods
                .find_one(doc! { "_id": oid })
                .await
                .map_err(|e| AppError::Database(format!("Failed to query listing: {}", e)))?
                .is_some();
            return Ok(UpdateOutcome {
                acknowledged: true,
                matched_count: matched as u64,
                modified_count: 0,
            });
        }

        let result = self
            .foods
            .update_one(doc! { "_id": oid }, doc! { "$set": set })
            .await
            .map_err(|e| AppError::Database(format!("Failed to update listing: {}", e)))?;

        Ok(UpdateOutcome {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    async fn delete_food(&self, id: &str) -> Result<DeleteOutcome> {
        let oid = Self::object_id(id)?;

        let result = self
            .foods
            .delete_one(doc! { "_id": oid })
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete listing: {}", e)))?;

        Ok(DeleteOutcome {
            acknowledged: true,
            deleted_count: result.deleted_count,
        })
    }

    async fn find_foods_by_donor(&self, email: &str) -> Result<Vec<Food>> {
        let cursor = self
            .foods
            .find(doc! { "donarEmail": email })
            .await
            .map_err(|e| AppError::Database(format!("Failed to query listings: {}", e)))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::Database(format!("Failed to read listings: {}", e)))
    }

    async fn insert_request(&self, request: FoodRequest) -> Result<InsertOutcome> {
        let result = self
            .requests
            .insert_one(&request)
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert request: {}", e)))?;

        Ok(Self::insert_outcome(result.inserted_id))
    }

    async fn find_request_by_food_and_requester(
        &self,
        food_id: &str,
        requester_email: &str,
    ) -> Result<Option<FoodRequest>> {
        self.requests
            .find_one(doc! { "foodId": food_id, "requesterEmail": requester_email })
            .await
            .map_err(|e| AppError::Database(format!("Failed to query request: {}", e)))
    }

    async fn find_requests_by_requester(&self, email: &str) -> Result<Vec<FoodRequest>> {
        let cursor = self
            .requests
            .find(doc! { "requesterEmail": email })
            .await
            .map_err(|e| AppError::Database(format!("Failed to query requests: {}", e)))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::Database(format!("Failed to read requests: {}", e)))
    }

    async fn find_requests_for_food(&self, food_id: &str) -> Result<Vec<FoodRequest>> {
        let cursor = self
            .requests
            .find(doc! { "foodId": food_id })
            .await
            .map_err(|e| AppError::Database(format!("Failed to query requests: {}", e)))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::Database(format!("Failed to read requests: {}", e)))
    }

    async fn delete_request(&self, id: &str) -> Result<DeleteOutcome> {
        let oid = Self::object_id(id)?;

        let result = self
            .requests
            .delete_one(doc! { "_id": oid })
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete request: {}", e)))?;

        Ok(DeleteOutcome {
            acknowledged: true,
            deleted_count: result.deleted_count,
        })
    }

    async fn mark_request_delivered(&self, id: &str) -> Result<UpdateOutcome> {
        let oid = Self::object_id(id)?;

        let result = self
            .requests
            .update_one(doc! { "_id": oid }, doc! { "$set": { "status": "Delivered" } })
            .await
            .map_err(|e| AppError::Database(format!("Failed to update request: {}", e)))?;

        Ok(UpdateOutcome {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    async fn shutdown(&self) {
        // Client::shutdown takes the handle by value; clones share the pool.
        self.client.clone().shutdown().await;
    }
}
