//! Product catalog backend: products and categories over a relational store,
//! served as a paged REST API.

pub mod app;
pub mod config;
pub mod database;
pub mod dtos;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod pagination;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;

pub use config::AppConfig;
pub use error::AppError;
pub use state::AppState;
