pub mod category;
pub mod product;

pub use category::CategoryDto;
pub use product::ProductDto;

use chrono::{DateTime, Utc};
use validator::ValidationError;

pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("Field is required".into()));
    }
    Ok(())
}

pub(crate) fn not_in_future(value: &DateTime<Utc>) -> Result<(), ValidationError> {
    if *value > Utc::now() {
        return Err(
            ValidationError::new("future_date").with_message("Date cannot be in the future".into()),
        );
    }
    Ok(())
}
