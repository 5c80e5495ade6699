use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::category::Category;

/// Flat read model of a [`Category`] for display and transport.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Category> for CategoryDto {
    fn from(value: &Category) -> Self {
        Self {
            id: value.id().to_string(),
            name: value.name().to_string(),
            description: value.description().to_string(),
            is_active: value.is_active(),
            created_at: value.created_at(),
        }
    }
}

impl From<Category> for CategoryDto {
    fn from(value: Category) -> Self {
        Self::from(&value)
    }
}
