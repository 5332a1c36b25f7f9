//! Category endpoints, including the referential constraint on delete.

mod common;

use axum::http::StatusCode;
use catalog_backend::dtos::CategoryDto;
use catalog_backend::pagination::Page;
use common::*;
use tower::ServiceExt;

#[tokio::test]
async fn list_sorted_by_name() {
    let app = seeded_app().await;

    let response = app
        .oneshot(empty_request("GET", "/categories?sort=name,asc"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page: Page<CategoryDto> = json_body(response.into_body()).await;
    let names: Vec<&str> = page.content.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Computadores", "Eletrônicos", "Livros"]);
    assert_eq!(page.total_elements, 3);
}

#[tokio::test]
async fn delete_referenced_category_returns_bad_request_and_keeps_it() {
    let app = seeded_app().await;

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/categories/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.oneshot(empty_request("GET", "/categories/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn create_then_delete_unreferenced_category() {
    let app = seeded_app().await;

    let response = app
        .clone()
        .oneshot(json_request("POST", "/categories", &create_category_dto("Games")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: CategoryDto = json_body(response.into_body()).await;
    assert_eq!(created.id, Some(4));

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/categories/4"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(empty_request("DELETE", &format!("/categories/{}", NON_EXISTING_ID)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_renames_existing_and_rejects_missing() {
    let app = seeded_app().await;

    let response = app
        .clone()
        .oneshot(json_request("PUT", "/categories/2", &create_category_dto("Electronics")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated: CategoryDto = json_body(response.into_body()).await;
    assert_eq!(updated, CategoryDto { id: Some(2), name: "Electronics".to_string() });

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/categories/{}", NON_EXISTING_ID),
            &create_category_dto("Electronics"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
