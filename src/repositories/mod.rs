//! Data access over sqlx. Repositories surface raw `sqlx::Error`s; turning
//! them into domain errors is the service layer's job.

pub mod category;
pub mod product;

pub use category::{CategoryRepository, SqlxCategoryRepository};
pub use product::{ProductRepository, SqlxProductRepository};

use sqlx::{QueryBuilder, Sqlite};

use crate::pagination::PageRequest;

/// Append `ORDER BY <sort>, id LIMIT ? OFFSET ?`. `id` always breaks ties so
/// that consecutive pages never overlap.
pub(crate) fn push_page_clause(query: &mut QueryBuilder<'_, Sqlite>, request: &PageRequest) {
    query.push(" ORDER BY ");
    match request.sort {
        Some(sort) if sort.column != "id" => {
            query.push(sort.column);
            query.push(" ");
            query.push(sort.direction.as_sql());
            query.push(", id ASC");
        }
        Some(sort) => {
            query.push("id ");
            query.push(sort.direction.as_sql());
        }
        None => {
            query.push("id ASC");
        }
    }

    query.push(" LIMIT ");
    query.push_bind(request.limit());
    query.push(" OFFSET ");
    query.push_bind(request.offset());
}
