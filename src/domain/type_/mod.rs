//! Type aggregate

pub mod model;
pub mod repository;

pub use model::{NewType, Type, TypeOrderBy, TypePatch, TypeQuery, TypeWhere};
pub use repository::TypeRepository;
