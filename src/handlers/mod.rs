pub mod category;
pub mod health;
pub mod product;
