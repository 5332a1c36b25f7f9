//! Shared fixtures for integration tests.
#![allow(dead_code)]

use axum::{body::Body, http::Request, Router};
use catalog_backend::{app, database, dtos::CategoryDto, dtos::ProductDto, models::Category, models::Product};
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use sqlx::SqlitePool;

pub const EXISTING_ID: i64 = 1;
pub const NON_EXISTING_ID: i64 = 1000;
pub const COUNT_TOTAL_PRODUCTS: i64 = 25;

pub async fn seeded_pool() -> SqlitePool {
    database::connect_in_memory()
        .await
        .expect("in-memory catalog should start")
}

pub async fn seeded_app() -> Router {
    app::router(seeded_pool().await)
}

pub fn create_product() -> Product {
    Product {
        id: Some(1),
        name: "Phone".to_string(),
        description: "good phone".to_string(),
        price: 800.0,
        image_url: "https://img.example.com/img.png".to_string(),
        date: Utc.with_ymd_and_hms(2020, 7, 14, 10, 0, 0).unwrap(),
        categories: vec![Category::new(2, "Eletrônicos")],
    }
}

pub fn create_product_dto() -> ProductDto {
    ProductDto::from(create_product())
}

pub fn create_category_dto(name: &str) -> CategoryDto {
    CategoryDto { id: None, name: name.to_string() }
}

pub fn json_request<T: serde::Serialize>(method: &str, uri: &str, body: &T) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .header("accept", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("accept", "application/json")
        .body(Body::empty())
        .unwrap()
}

pub async fn json_body<T: DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
