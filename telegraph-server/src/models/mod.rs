//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod article;
pub mod pagination;
pub mod slug;
pub mod validation;

pub use article::{ArticleContent, ArticleTitle, UNTITLED};
pub use pagination::{PageMeta, Paginated, Pagination, PaginationParams};
pub use slug::Slug;
pub use validation::ValidationError;
