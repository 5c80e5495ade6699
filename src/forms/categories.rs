use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::domain::category::{Category, CategoryUpdate, NewCategory, validate_category};
use crate::domain::clock::Clock;
use crate::domain::types::ValidationError;

/// Keeps an explicit `null` apart from a missing field: missing stays `None`
/// through `#[serde(default)]`, `null` becomes `Some(None)`.
fn nullable<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Raw category input as submitted by a caller.
///
/// Every field is optional so that missing and `null` values reach the
/// validation routine instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddCategoryForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl AddCategoryForm {
    pub fn into_category(self, clock: &dyn Clock) -> Result<Category, CategoryFormError> {
        let new = NewCategory::try_from(self)?;
        Ok(Category::create_with_clock(new, clock)?)
    }
}

impl TryFrom<AddCategoryForm> for NewCategory {
    type Error = CategoryFormError;

    fn try_from(form: AddCategoryForm) -> Result<Self, Self::Error> {
        validate_category(form.name.as_deref(), form.description.as_deref()).inspect_err(|e| {
            log::warn!("Add category form rejected: {e}");
        })?;

        Ok(Self {
            name: form.name,
            description: form.description,
            is_active: form.is_active,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCategoryForm {
    #[serde(default)]
    pub name: Option<String>,
    /// Omitted keeps the current description; `null` is rejected.
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
}

impl UpdateCategoryForm {
    pub fn apply_to(self, category: &mut Category) -> Result<(), CategoryFormError> {
        let changes = CategoryUpdate::try_from(self)?;
        Ok(category.update(changes)?)
    }
}

impl TryFrom<UpdateCategoryForm> for CategoryUpdate {
    type Error = CategoryFormError;

    fn try_from(form: UpdateCategoryForm) -> Result<Self, Self::Error> {
        let changes = Self {
            name: form.name,
            description: form.description,
        };
        changes.validate().inspect_err(|e| {
            log::warn!("Update category form rejected: {e}");
        })?;
        Ok(changes)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CategoryFormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
