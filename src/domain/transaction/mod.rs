//! Transaction aggregate

pub mod model;
pub mod repository;

pub use model::{
    NewTransaction, Transaction, TransactionOrderBy, TransactionPatch, TransactionQuery,
    TransactionWhere,
};
pub use repository::TransactionRepository;
