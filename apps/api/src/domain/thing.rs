use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Longest name a thing may carry
pub const MAX_NAME_LEN: usize = 100;

/// A named resource managed through the `/api/things` routes
///
/// A thing that hasn't been stored yet has id `0`; repositories assign the
/// real id on insert.
///
/// # Invariants
/// - Name is not blank and at most [`MAX_NAME_LEN`] characters
/// - `updated_at` is never earlier than `created_at`
///
/// # Example
/// ```
/// use resthelper_api::domain::Thing;
///
/// let thing = Thing::new("lamp".to_string(), None).expect("valid thing");
/// assert_eq!(thing.name(), "lamp");
/// assert_eq!(thing.id(), 0);
/// assert!(Thing::new("  ".to_string(), None).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Thing {
    id: i64,
    name: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Thing {
    /// Creates an unsaved thing
    ///
    /// # Returns
    /// * `Err(String)` - If the name is blank or too long
    pub fn new(name: String, description: Option<String>) -> Result<Self, String> {
        validate_name(&name)?;

        let now = Utc::now();
        Ok(Self {
            id: 0,
            name,
            description,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replaces name and description, bumping `updated_at`
    pub fn update(&mut self, name: String, description: Option<String>) -> Result<(), String> {
        validate_name(&name)?;

        self.name = name;
        self.description = description;
        self.updated_at = Utc::now().max(self.created_at);
        Ok(())
    }

    /// Returns the thing with its storage id set
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name cannot be empty".to_string());
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(format!("Name cannot exceed {} characters", MAX_NAME_LEN));
    }
    Ok(())
}

/// Criteria for listing things
///
/// All fields are optional; an empty filter matches everything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThingFilter {
    /// Case-insensitive substring of the name
    pub name_contains: Option<String>,
    /// Maximum number of results
    pub limit: Option<usize>,
    /// Number of matches to skip
    #[serde(default)]
    pub offset: usize,
}

impl ThingFilter {
    pub fn matches(&self, thing: &Thing) -> bool {
        match &self.name_contains {
            Some(needle) => thing
                .name
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            None => true,
        }
    }
}
