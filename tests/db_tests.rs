//! Document store tests
//!
//! These verify store behavior through the `DocumentStore` trait using the
//! in-memory backend, the same backend the API suites run over.

use cookiteer::db::{DocumentStore, MemoryStore};
use cookiteer::types::{Food, FoodFilter, FoodPatch, FoodRequest, FoodSort, RequestStatus, SortOrder};

fn create_test_store() -> MemoryStore {
    MemoryStore::new()
}

fn food(name: &str, donor: &str, category: &str, quantity: i64, expires: &str) -> Food {
    Food {
        id: None,
        food_name: name.to_string(),
        food_image: "https://img.example/food.png".to_string(),
        category: Some(category.to_string()),
        food_quantity: quantity,
        pickup_location: "Community Center".to_string(),
        expired_date_time: expires.to_string(),
        additional_notes: None,
        donar_name: "Test Donor".to_string(),
        donar_image: None,
        donar_email: donor.to_string(),
        food_status: "available".to_string(),
    }
}

fn request(food_id: &str, requester: &str) -> FoodRequest {
    FoodRequest {
        id: None,
        food_id: food_id.to_string(),
        food_name: None,
        donar_email: None,
        requester_email: requester.to_string(),
        requester_name: None,
        request_date: Some("2026-08-07".to_string()),
        expired_date_time: None,
        pickup_location: None,
        status: RequestStatus::Requested,
    }
}

// ============== Food Listings ==============

#[tokio::test]
async fn test_insert_assigns_id() {
    let store = create_test_store();

    let outcome = store
        .insert_food(food("Rice", "a@x.com", "Grains", 3, "2026-09-01"))
        .await
        .expect("insert should succeed");

    assert!(outcome.acknowledged);
    assert_eq!(outcome.inserted_id.len(), 24, "hex object id");
}

#[tokio::test]
async fn test_find_food_by_id_round_trip() {
    let store = create_test_store();

    let outcome = store
        .insert_food(food("Rice", "a@x.com", "Grains", 3, "2026-09-01"))
        .await
        .expect("insert should succeed");

    let found = store
        .find_food_by_id(&outcome.inserted_id)
        .await
        .expect("lookup should succeed")
        .expect("listing should exist");
    assert_eq!(found.food_name, "Rice");
}

#[tokio::test]
async fn test_absent_id_is_none() {
    let store = create_test_store();

    let found = store
        .find_food_by_id("0123456789abcdef01234567")
        .await
        .expect("well-formed id should not error");
    assert!(found.is_none());
}

#[tokio::test]
async fn test_malformed_id_is_error() {
    let store = create_test_store();

    assert!(store.find_food_by_id("not-an-id").await.is_err());
    assert!(store.delete_food("not-an-id").await.is_err());
    assert!(store
        .update_food("not-an-id", &FoodPatch::default())
        .await
        .is_err());
}

#[tokio::test]
async fn test_update_counts() {
    let store = create_test_store();

    let id = store
        .insert_food(food("Rice", "a@x.com", "Grains", 3, "2026-09-01"))
        .await
        .unwrap()
        .inserted_id;

    let patch = FoodPatch {
        food_quantity: Some(10),
        ..Default::default()
    };
    let outcome = store.update_food(&id, &patch).await.unwrap();
    assert_eq!(outcome.matched_count, 1);
    assert_eq!(outcome.modified_count, 1);

    // Same value again matches but modifies nothing.
    let outcome = store.update_food(&id, &patch).await.unwrap();
    assert_eq!(outcome.matched_count, 1);
    assert_eq!(outcome.modified_count, 0);

    // Empty patch is a matched no-op.
    let outcome = store.update_food(&id, &FoodPatch::default()).await.unwrap();
    assert_eq!(outcome.matched_count, 1);
    assert_eq!(outcome.modified_count, 0);

    // Unknown target matches nothing.
    let outcome = store
        .update_food("0123456789abcdef01234567", &patch)
        .await
        .unwrap();
    assert_eq!(outcome.matched_count, 0);
}

#[tokio::test]
async fn test_delete_counts() {
    let store = create_test_store();

    let id = store
        .insert_food(food("Rice", "a@x.com", "Grains", 3, "2026-09-01"))
        .await
        .unwrap()
        .inserted_id;

    let outcome = store.delete_food(&id).await.unwrap();
    assert_eq!(outcome.deleted_count, 1);

    // Already gone.
    let outcome = store.delete_food(&id).await.unwrap();
    assert_eq!(outcome.deleted_count, 0);
}

#[tokio::test]
async fn test_find_foods_filters_and_sorts() {
    let store = create_test_store();

    store
        .insert_food(food("Beef Curry", "a@x.com", "Meat&Veg", 2, "2026-08-15"))
        .await
        .unwrap();
    store
        .insert_food(food("Veg Curry", "a@x.com", "Meat&Veg", 7, "2026-08-10"))
        .await
        .unwrap();
    store
        .insert_food(food("Chips", "a@x.com", "Snacks", 4, "2026-12-01"))
        .await
        .unwrap();

    // Category filter is an exact match.
    let filter = FoodFilter {
        category: Some("Meat&Veg".to_string()),
        ..Default::default()
    };
    let foods = store.find_foods(&filter).await.unwrap();
    assert_eq!(foods.len(), 2);

    // Search is a case-insensitive substring on the name.
    let filter = FoodFilter {
        search: Some("CURRY".to_string()),
        ..Default::default()
    };
    let foods = store.find_foods(&filter).await.unwrap();
    assert_eq!(foods.len(), 2);

    // Sort by quantity, descending.
    let filter = FoodFilter {
        sort: Some((FoodSort::Quantity, SortOrder::Desc)),
        ..Default::default()
    };
    let foods = store.find_foods(&filter).await.unwrap();
    let quantities: Vec<i64> = foods.iter().map(|f| f.food_quantity).collect();
    assert_eq!(quantities, vec![7, 4, 2]);

    // Sort by expiry, ascending.
    let filter = FoodFilter {
        sort: Some((FoodSort::Expiry, SortOrder::Asc)),
        ..Default::default()
    };
    let foods = store.find_foods(&filter).await.unwrap();
    assert_eq!(foods[0].food_name, "Veg Curry");
    assert_eq!(foods[2].food_name, "Chips");

    // Filters compose.
    let filter = FoodFilter {
        category: Some("Meat&Veg".to_string()),
        search: Some("beef".to_string()),
        ..Default::default()
    };
    let foods = store.find_foods(&filter).await.unwrap();
    assert_eq!(foods.len(), 1);
    assert_eq!(foods[0].food_name, "Beef Curry");
}

#[tokio::test]
async fn test_find_foods_by_donor() {
    let store = create_test_store();

    store
        .insert_food(food("Rice", "a@x.com", "Grains", 3, "2026-09-01"))
        .await
        .unwrap();
    store
        .insert_food(food("Dal", "b@x.com", "Grains", 2, "2026-09-01"))
        .await
        .unwrap();

    let foods = store.find_foods_by_donor("a@x.com").await.unwrap();
    assert_eq!(foods.len(), 1);
    assert_eq!(foods[0].donar_email, "a@x.com");

    // Donor matching is exact, including case.
    let foods = store.find_foods_by_donor("A@x.com").await.unwrap();
    assert!(foods.is_empty());
}

// ============== Food Requests ==============

#[tokio::test]
async fn test_request_pair_lookup() {
    let store = create_test_store();

    store
        .insert_request(request("food-1", "a@x.com"))
        .await
        .unwrap();

    let found = store
        .find_request_by_food_and_requester("food-1", "a@x.com")
        .await
        .unwrap();
    assert!(found.is_some());

    let found = store
        .find_request_by_food_and_requester("food-1", "b@x.com")
        .await
        .unwrap();
    assert!(found.is_none());

    let found = store
        .find_request_by_food_and_requester("food-2", "a@x.com")
        .await
        .unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_requests_by_requester_and_listing() {
    let store = create_test_store();

    store
        .insert_request(request("food-1", "a@x.com"))
        .await
        .unwrap();
    store
        .insert_request(request("food-1", "b@x.com"))
        .await
        .unwrap();
    store
        .insert_request(request("food-2", "a@x.com"))
        .await
        .unwrap();

    let mine = store.find_requests_by_requester("a@x.com").await.unwrap();
    assert_eq!(mine.len(), 2);

    let against = store.find_requests_for_food("food-1").await.unwrap();
    assert_eq!(against.len(), 2);
}

#[tokio::test]
async fn test_mark_request_delivered() {
    let store = create_test_store();

    let id = store
        .insert_request(request("food-1", "a@x.com"))
        .await
        .unwrap()
        .inserted_id;

    let outcome = store.mark_request_delivered(&id).await.unwrap();
    assert_eq!(outcome.matched_count, 1);
    assert_eq!(outcome.modified_count, 1);

    let delivered = store
        .find_request_by_food_and_requester("food-1", "a@x.com")
        .await
        .unwrap()
        .expect("request should still exist");
    assert_eq!(delivered.status, RequestStatus::Delivered);

    // Second delivery matches but changes nothing.
    let outcome = store.mark_request_delivered(&id).await.unwrap();
    assert_eq!(outcome.matched_count, 1);
    assert_eq!(outcome.modified_count, 0);
}

#[tokio::test]
async fn test_delete_request() {
    let store = create_test_store();

    let id = store
        .insert_request(request("food-1", "a@x.com"))
        .await
        .unwrap()
        .inserted_id;

    let outcome = store.delete_request(&id).await.unwrap();
    assert_eq!(outcome.deleted_count, 1);

    let found = store
        .find_request_by_food_and_requester("food-1", "a@x.com")
        .await
        .unwrap();
    assert!(found.is_none());
}
