pub mod category;
pub mod error;
pub mod product;

pub use category::{CategoryService, CategoryServiceImpl};
pub use error::{ServiceError, ServiceResult};
pub use product::{ProductService, ProductServiceImpl};
