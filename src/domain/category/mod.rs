//! Category aggregate
//!
//! Categories group transactions and belong to exactly one Type.

pub mod model;
pub mod repository;

pub use model::{Category, CategoryOrderBy, CategoryPatch, CategoryQuery, CategoryWhere, NewCategory};
pub use repository::CategoryRepository;
