//! End-to-end tests against PostgreSQL. Set `FLEET_TEST_DATABASE_URL` to run
//! them; without it each test returns immediately.

mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

use common::TestApp;

macro_rules! connected_or_skip {
    () => {
        match TestApp::connected().await {
            Some(app) => app,
            None => {
                eprintln!("FLEET_TEST_DATABASE_URL not set; skipping");
                return;
            }
        }
    };
}

/// Unique marker so tests sharing a database only see their own rows.
fn tag() -> String {
    Uuid::new_v4().simple().to_string()[..10].to_string()
}

async fn create_driver(app: &TestApp, name: &str) -> i64 {
    let response = app
        .request("POST", "/drivers", Some(json!({ "driver_name": name })))
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    response.body["driver_id"].as_i64().expect("driver_id")
}

async fn create_truck(app: &TestApp, body: Value) -> Value {
    let response = app.request("POST", "/trucks", Some(body)).await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    response.body
}

#[tokio::test]
async fn test_db_health() {
    let app = connected_or_skip!();
    let response = app.request("GET", "/db-health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "db": "ok" }));
}

#[tokio::test]
async fn test_driver_lifecycle() {
    let app = connected_or_skip!();
    let t = tag();
    let id = create_driver(&app, &format!("Lifecycle {t}")).await;

    let fetched = app.request("GET", &format!("/drivers/{id}"), None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["is_active"], true);

    let renamed = app
        .request(
            "PATCH",
            &format!("/drivers/{id}"),
            Some(json!({ "driver_name": format!("Renamed {t}") })),
        )
        .await;
    assert_eq!(renamed.status, StatusCode::OK);
    assert_eq!(renamed.body["driver_name"], format!("Renamed {t}"));
    assert_eq!(renamed.body["is_active"], true);

    let deactivated = app.request("DELETE", &format!("/drivers/{id}"), None).await;
    assert_eq!(deactivated.status, StatusCode::OK);
    assert_eq!(deactivated.body["is_active"], false);

    // still readable after deactivation
    let fetched = app.request("GET", &format!("/drivers/{id}"), None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["is_active"], false);
}

#[tokio::test]
async fn test_missing_records() {
    let app = connected_or_skip!();

    let driver = app.request("GET", "/drivers/999999999", None).await;
    assert_eq!(driver.status, StatusCode::NOT_FOUND);
    assert_eq!(driver.body["message"], "Driver not found");

    let truck = app
        .request("PATCH", "/trucks/999999999", Some(json!({ "is_active": false })))
        .await;
    assert_eq!(truck.status, StatusCode::NOT_FOUND);

    let gone = app.request("DELETE", "/trucks/999999999", None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_driver_listing_pages_and_search() {
    let app = connected_or_skip!();
    let t = tag();
    for i in 0..7 {
        create_driver(&app, &format!("Pager {t} {i}")).await;
    }

    let first = app
        .request("GET", &format!("/drivers?search={t}&page_size=3&sort=driver_id"), None)
        .await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["total"], 7);
    assert_eq!(first.body["total_pages"], 3);
    assert_eq!(first.body["items"].as_array().unwrap().len(), 3);

    let last = app
        .request("GET", &format!("/drivers?search={t}&page_size=3&page=3&sort=driver_id"), None)
        .await;
    let items = last.body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["driver_name"], format!("Pager {t} 6"));

    let past = app
        .request("GET", &format!("/drivers?search={t}&page_size=3&page=9"), None)
        .await;
    assert_eq!(past.status, StatusCode::OK);
    assert!(past.body["items"].as_array().unwrap().is_empty());
    assert_eq!(past.body["total"], 7);

    // newest first by default
    let default = app
        .request("GET", &format!("/drivers?search={}", t.to_uppercase()), None)
        .await;
    assert_eq!(default.body["items"][0]["driver_name"], format!("Pager {t} 6"));
}

#[tokio::test]
async fn test_search_wildcards_are_literal() {
    let app = connected_or_skip!();
    let t = tag();
    create_driver(&app, &format!("{t} 100% sure")).await;
    create_driver(&app, &format!("{t} 1000 sure")).await;

    let response = app
        .request("GET", &format!("/drivers?search={t}%20100%25"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 1);

    let underscore = app
        .request("GET", &format!("/drivers?search={t}_"), None)
        .await;
    assert_eq!(underscore.body["total"], 0);
}

#[tokio::test]
async fn test_truck_rules() {
    let app = connected_or_skip!();
    let t = tag();
    let driver_id = create_driver(&app, &format!("Trucker {t}")).await;

    let truck = create_truck(
        &app,
        json!({
            "unit_number": format!("U-{t}"),
            "vin": format!("VIN-{t}"),
            "plate_number": "TX-100",
            "driver_id": driver_id,
        }),
    )
    .await;
    let truck_id = truck["truck_id"].as_i64().unwrap();
    assert_eq!(truck["is_active"], true);

    let duplicate_unit = app
        .request("POST", "/trucks", Some(json!({ "unit_number": format!("U-{t}") })))
        .await;
    assert_eq!(duplicate_unit.status, StatusCode::CONFLICT);
    assert_eq!(duplicate_unit.body["message"], "unit_number already exists");

    let duplicate_vin = app
        .request(
            "POST",
            "/trucks",
            Some(json!({ "unit_number": format!("U2-{t}"), "vin": format!("VIN-{t}") })),
        )
        .await;
    assert_eq!(duplicate_vin.status, StatusCode::CONFLICT);
    assert_eq!(duplicate_vin.body["message"], "vin already exists");

    let unknown_driver = app
        .request(
            "POST",
            "/trucks",
            Some(json!({ "unit_number": format!("U3-{t}"), "driver_id": 999999999 })),
        )
        .await;
    assert_eq!(unknown_driver.status, StatusCode::BAD_REQUEST);
    assert_eq!(unknown_driver.body["message"], "driver_id does not exist");

    // re-sending its own unit number is not a conflict
    let same = app
        .request(
            "PATCH",
            &format!("/trucks/{truck_id}"),
            Some(json!({ "unit_number": format!("U-{t}") })),
        )
        .await;
    assert_eq!(same.status, StatusCode::OK);

    let unassigned = app
        .request(
            "PATCH",
            &format!("/trucks/{truck_id}"),
            Some(json!({ "driver_id": null })),
        )
        .await;
    assert_eq!(unassigned.status, StatusCode::OK);
    assert_eq!(unassigned.body["driver_id"], Value::Null);
    assert_eq!(unassigned.body["vin"], format!("VIN-{t}"));

    let deactivated = app.request("DELETE", &format!("/trucks/{truck_id}"), None).await;
    assert_eq!(deactivated.status, StatusCode::OK);
    assert_eq!(deactivated.body["is_active"], false);
}

#[tokio::test]
async fn test_truck_listing_filters() {
    let app = connected_or_skip!();
    let t = tag();
    let driver_id = create_driver(&app, &format!("Owner {t}")).await;

    create_truck(&app, json!({ "unit_number": format!("A-{t}"), "driver_id": driver_id })).await;
    create_truck(&app, json!({ "unit_number": format!("B-{t}"), "driver_id": driver_id })).await;
    create_truck(&app, json!({ "unit_number": format!("C-{t}"), "plate_number": format!("P-{t}") })).await;

    let by_driver = app
        .request("GET", &format!("/trucks?driver_id={driver_id}&sort=-unit_number"), None)
        .await;
    assert_eq!(by_driver.status, StatusCode::OK);
    assert_eq!(by_driver.body["total"], 2);
    assert_eq!(by_driver.body["items"][0]["unit_number"], format!("B-{t}"));

    // search spans unit number and plate
    let searched = app
        .request("GET", &format!("/trucks?search={t}&sort=unit_number"), None)
        .await;
    assert_eq!(searched.body["total"], 3);

    let by_plate = app
        .request("GET", &format!("/trucks?search=P-{t}"), None)
        .await;
    assert_eq!(by_plate.body["total"], 1);
    assert_eq!(by_plate.body["items"][0]["unit_number"], format!("C-{t}"));

    let inactive = app
        .request("GET", &format!("/trucks?search={t}&is_active=false"), None)
        .await;
    assert_eq!(inactive.body["total"], 0);
    assert_eq!(inactive.body["total_pages"], 1);
}
