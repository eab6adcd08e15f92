//! Database entities module

pub mod category;
pub mod transaction;
pub mod type_;

pub use category::Entity as Category;
pub use transaction::Entity as Transaction;
pub use type_::Entity as Type;
