use chrono::{DateTime, Utc};
use serde::Serialize;
use validator::ValidateLength;

use crate::domain::clock::{Clock, SystemClock};
use crate::domain::types::{
    CategoryId, DESCRIPTION_MAX_LENGTH, NAME_MAX_LENGTH, NAME_MIN_LENGTH, ValidationError,
};

/// Checks the name rules and hands the name back on success.
fn require_name<S: AsRef<str>>(name: Option<S>) -> Result<S, ValidationError> {
    let name = match name {
        Some(name) if !name.as_ref().trim().is_empty() => name,
        _ => return Err(ValidationError::EmptyName),
    };
    let text = name.as_ref();
    if !text.validate_length(Some(NAME_MIN_LENGTH), None, None) {
        return Err(ValidationError::NameTooShort);
    }
    if !text.validate_length(None, Some(NAME_MAX_LENGTH), None) {
        return Err(ValidationError::NameTooLong);
    }
    Ok(name)
}

/// Checks the description rules and hands the description back on success.
fn require_description<S: AsRef<str>>(description: Option<S>) -> Result<S, ValidationError> {
    let Some(description) = description else {
        return Err(ValidationError::MissingDescription);
    };
    if !description
        .as_ref()
        .validate_length(None, Some(DESCRIPTION_MAX_LENGTH), None)
    {
        return Err(ValidationError::DescriptionTooLong);
    }
    Ok(description)
}

/// Runs the category rules in priority order and reports the first violation.
///
/// `None` stands for an absent (null) value. Lengths are counted in
/// characters, not bytes.
pub fn validate_category(
    name: Option<&str>,
    description: Option<&str>,
) -> Result<(), ValidationError> {
    require_name(name)?;
    require_description(description)?;
    Ok(())
}

/// Data required to create a new [`Category`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewCategory {
    pub name: Option<String>,
    pub description: Option<String>,
    /// `None` means the flag was not given; the category starts active.
    pub is_active: Option<bool>,
}

impl NewCategory {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
            is_active: None,
        }
    }

    /// Sets the initial activity flag explicitly.
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}

/// Changes applied by [`Category::update`].
///
/// The name is always replaced; a missing name is reported as an empty one.
/// For the description, the outer `None` keeps the current value while
/// `Some(None)` is a null description and fails validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
}

impl CategoryUpdate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    /// Runs the category rules over the values this update would write.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_name(self.name.as_deref())?;
        if let Some(description) = &self.description {
            require_description(description.as_deref())?;
        }
        Ok(())
    }
}

/// Classification record inside the content catalog.
///
/// Fields are private so that every instance observed by callers satisfies
/// the category rules; the only ways to change state are
/// [`activate`](Self::activate), [`deactivate`](Self::deactivate) and
/// [`update`](Self::update).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    description: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Category {
    /// Creates a category stamped with the wall clock.
    pub fn create(new: NewCategory) -> Result<Self, ValidationError> {
        Self::create_with_clock(new, &SystemClock)
    }

    /// Creates a category stamped with the instant reported by `clock`.
    pub fn create_with_clock(
        new: NewCategory,
        clock: &dyn Clock,
    ) -> Result<Self, ValidationError> {
        let id = CategoryId::generate();
        let created_at = clock.now();

        let name = require_name(new.name)?;
        let description = require_description(new.description)?;

        let category = Self {
            id,
            name,
            description,
            is_active: new.is_active.unwrap_or(true),
            created_at,
        };
        log::debug!("Created category {}", category.id);
        Ok(category)
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Replaces the name and, when given, the description.
    ///
    /// The new values are validated before anything is written, so a rejected
    /// update leaves the category exactly as it was.
    pub fn update(&mut self, changes: CategoryUpdate) -> Result<(), ValidationError> {
        let name = require_name(changes.name)?;
        let description = changes.description.map(require_description).transpose()?;

        self.name = name;
        if let Some(description) = description {
            self.description = description;
        }
        log::debug!("Updated category {}", self.id);
        Ok(())
    }

    /// Re-checks the current state against the category rules.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_category(Some(&self.name), Some(&self.description))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
