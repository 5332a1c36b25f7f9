//! Full-stack tests: router, services and repositories over the seeded store.

mod common;

use axum::http::StatusCode;
use catalog_backend::dtos::ProductDto;
use catalog_backend::pagination::Page;
use common::*;
use serde_json::Value;
use tower::ServiceExt;

#[tokio::test]
async fn update_should_return_product_dto_when_id_exists() {
    let app = seeded_app().await;
    let product_dto = create_product_dto();
    let expected_name = product_dto.name.clone();

    let response = app
        .oneshot(json_request("PUT", &format!("/products/{}", EXISTING_ID), &product_dto))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["id"], EXISTING_ID);
    assert_eq!(body["name"], expected_name);
}

#[tokio::test]
async fn update_should_return_not_found_when_id_does_not_exist() {
    let app = seeded_app().await;

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/products/{}", NON_EXISTING_ID),
            &create_product_dto(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn find_all_paged_should_return_sorted_page_when_sort_by_name() {
    let app = seeded_app().await;

    let response = app
        .oneshot(empty_request("GET", "/products?page=0&size=12&sort=name,asc"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page: Page<ProductDto> = json_body(response.into_body()).await;
    assert_eq!(page.total_elements, COUNT_TOTAL_PRODUCTS);
    assert_eq!(page.content.len(), 12);
    assert_eq!(page.content[0].name, "Macbook Pro");
    assert_eq!(page.content[1].name, "PC Gamer");
    assert_eq!(page.content[2].name, "PC Gamer Alfa");
}

#[tokio::test]
async fn find_all_rejects_unknown_sort_field() {
    let app = seeded_app().await;

    let response = app
        .oneshot(empty_request("GET", "/products?sort=description,asc"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn insert_should_return_created_with_assigned_id() {
    let app = seeded_app().await;

    let response = app
        .clone()
        .oneshot(json_request("POST", "/products", &create_product_dto()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let created: ProductDto = json_body(response.into_body()).await;
    assert_eq!(created.id, Some(COUNT_TOTAL_PRODUCTS + 1));
    assert_eq!(created.categories[0].name, "Eletrônicos");

    let response = app
        .oneshot(empty_request("GET", &format!("/products/{}", COUNT_TOTAL_PRODUCTS + 1)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn insert_with_unknown_category_returns_bad_request() {
    let app = seeded_app().await;
    let mut dto = create_product_dto();
    dto.categories[0].id = Some(NON_EXISTING_ID);

    let response = app
        .oneshot(json_request("POST", "/products", &dto))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn insert_with_invalid_body_returns_bad_request() {
    let app = seeded_app().await;
    let mut dto = create_product_dto();
    dto.name = "TV".to_string();

    let response = app
        .oneshot(json_request("POST", "/products", &dto))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert!(body["details"]["name"].is_array());
}

#[tokio::test]
async fn delete_returns_no_content_then_not_found() {
    let app = seeded_app().await;
    let uri = format!("/products/{}", EXISTING_ID);

    let response = app.clone().oneshot(empty_request("DELETE", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.clone().oneshot(empty_request("GET", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(empty_request("DELETE", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_reports_ok() {
    let app = seeded_app().await;

    let response = app.oneshot(empty_request("GET", "/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
