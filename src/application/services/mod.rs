//! Application services

mod category_service;
mod transaction_service;
mod type_service;

use std::sync::Arc;

use crate::domain::RepositoryProvider;

pub use category_service::CategoryService;
pub use transaction_service::TransactionService;
pub use type_service::TypeService;

/// The three entity services, sharing one repository provider.
#[derive(Clone)]
pub struct LedgerServices {
    pub types: TypeService,
    pub categories: CategoryService,
    pub transactions: TransactionService,
}

impl LedgerServices {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self {
            types: TypeService::new(repos.clone()),
            categories: CategoryService::new(repos.clone()),
            transactions: TransactionService::new(repos),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use crate::domain::{NewCategory, NewTransaction, NewType};
    use crate::infrastructure::database::connect_in_memory;
    use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;

    async fn services() -> LedgerServices {
        let db = connect_in_memory().await.unwrap();
        LedgerServices::new(Arc::new(SeaOrmRepositoryProvider::new(db)))
    }

    #[tokio::test]
    async fn reads_apply_relation_expansion() {
        let svc = services().await;
        let income = svc
            .types
            .create(NewType { name: "Income".into() })
            .await
            .unwrap();
        let salary = svc
            .categories
            .create(NewCategory {
                name: "Salary".into(),
                type_id: income.id,
            })
            .await
            .unwrap();
        let tx = svc
            .transactions
            .create(NewTransaction {
                amount: 3000.0,
                date: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
                description: "March salary".into(),
                category_id: salary.id,
            })
            .await
            .unwrap();

        let category = svc.categories.find(salary.id).await.unwrap().unwrap();
        assert_eq!(category.r#type, Some(income.clone()));

        let fetched = svc.transactions.find(tx.id).await.unwrap().unwrap();
        let category = fetched.category.unwrap();
        assert_eq!(category.id, salary.id);
        assert_eq!(category.r#type, Some(income));

        let all = svc.transactions.find_all(Default::default()).await.unwrap();
        assert_eq!(all.len(), 1);
        assert!(all[0].category.is_some());
    }

    #[tokio::test]
    async fn delete_then_find_is_none() {
        let svc = services().await;
        let t = svc
            .types
            .create(NewType { name: "Temp".into() })
            .await
            .unwrap();
        let removed = svc.types.delete(t.id).await.unwrap();
        assert_eq!(removed, t);
        assert!(svc.types.find(t.id).await.unwrap().is_none());
    }
}
