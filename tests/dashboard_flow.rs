//! End-to-end dashboard flows against the in-memory backend.

use food_dashboard::api::{ApiError, FoodBackend};
use food_dashboard::dashboard::{Dashboard, DashboardError};
use food_dashboard::food::NewFoodPlate;
use reqwest::StatusCode;

mod common;

fn form(name: &str, price: &str) -> NewFoodPlate {
    NewFoodPlate {
        name: name.into(),
        image: "https://example.com/new.png".into(),
        price: price.into(),
        description: format!("{} fresquinho", name),
    }
}

/// The local list must equal what a fresh GET returns.
async fn assert_in_sync(dashboard: &Dashboard<food_dashboard::HttpFoodApi>) {
    let server_side = dashboard.backend().list().await.unwrap();
    assert_eq!(dashboard.foods(), server_side.as_slice());
}

#[tokio::test]
async fn test_full_dashboard_flow() {
    let (addr, shutdown) = common::start_food_api(vec![
        common::plate(1, "Ao molho", true),
        common::plate(2, "Veggie", false),
    ])
    .await;
    let mut dashboard = Dashboard::new(common::api_for(addr));

    dashboard.load().await.unwrap();
    assert_eq!(dashboard.foods().len(), 2);

    // Add
    let added = dashboard.add_food(form("Moqueca", "32.00")).await.unwrap().clone();
    assert_eq!(added.id, 3);
    assert!(added.available);
    assert_eq!(dashboard.foods().last(), Some(&added));
    assert_in_sync(&dashboard).await;

    // Edit keeps id and availability of the selected plate
    let veggie = dashboard.find(2).unwrap().clone();
    dashboard.edit_food(veggie);
    let updated = dashboard.update_food(form("Veggie Deluxe", "24.50")).await.unwrap();
    assert_eq!(updated.id, 2);
    assert!(!updated.available);
    assert_eq!(dashboard.find(2).unwrap().price, "24.50");
    assert_in_sync(&dashboard).await;

    // Availability
    dashboard.toggle_availability(2).await.unwrap();
    assert!(dashboard.find(2).unwrap().available);
    let plate = dashboard.find(1).unwrap().clone();
    dashboard.set_availability(&plate, false).await.unwrap();
    assert!(!dashboard.find(1).unwrap().available);
    assert_in_sync(&dashboard).await;

    // Delete
    dashboard.delete_food(1).await.unwrap();
    let ids: Vec<_> = dashboard.foods().iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![2, 3]);
    assert_in_sync(&dashboard).await;

    shutdown.trigger();
}

#[tokio::test]
async fn test_delete_unknown_plate_rejects() {
    let (addr, shutdown) = common::start_food_api(vec![common::plate(1, "Ao molho", true)]).await;
    let mut dashboard = Dashboard::new(common::api_for(addr));
    dashboard.load().await.unwrap();

    let err = dashboard.delete_food(99).await.unwrap_err();
    match err {
        DashboardError::Api(api) => assert_eq!(api.status(), Some(StatusCode::NOT_FOUND)),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(dashboard.foods().len(), 1);

    shutdown.trigger();
}

#[tokio::test]
async fn test_update_after_remote_delete_keeps_state() {
    let (addr, shutdown) = common::start_food_api(vec![
        common::plate(1, "Ao molho", true),
        common::plate(2, "Veggie", true),
    ])
    .await;
    let mut dashboard = Dashboard::new(common::api_for(addr));
    dashboard.load().await.unwrap();
    let before = dashboard.foods().to_vec();

    // Another client removes plate 2.
    common::api_for(addr).delete(2).await.unwrap();

    dashboard.edit_food(before[1].clone());
    let err = dashboard.update_food(form("Veggie", "1.00")).await.unwrap_err();
    assert!(matches!(
        err,
        DashboardError::Api(ApiError::Status { status: StatusCode::NOT_FOUND, .. })
    ));
    assert_eq!(dashboard.foods(), before.as_slice());

    shutdown.trigger();
}

#[tokio::test]
async fn test_empty_backend() {
    let (addr, shutdown) = common::start_food_api(Vec::new()).await;
    let mut dashboard = Dashboard::new(common::api_for(addr));

    assert!(dashboard.load().await.unwrap().is_empty());
    let added = dashboard.add_food(form("Primeiro", "9.90")).await.unwrap();
    assert_eq!(added.id, 1);

    shutdown.trigger();
}
