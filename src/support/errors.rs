use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Already exists: {0}")]
    Conflict(String),

    /// A foreign key points at a missing row, or a delete would orphan dependents.
    #[error("Referential integrity violation: {0}")]
    ReferentialIntegrity(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound {
            entity,
            field: "id",
            value: id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = DomainError::not_found("Category", 42);
        assert_eq!(err.to_string(), "Not found: Category with id=42");
    }

    #[test]
    fn referential_integrity_message_keeps_database_text() {
        let err = DomainError::ReferentialIntegrity("FOREIGN KEY constraint failed".into());
        assert!(err.to_string().contains("FOREIGN KEY constraint failed"));
    }
}
