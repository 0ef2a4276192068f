use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Longest accepted item name, in characters. Matches the `VARCHAR(128)` column.
pub const NAME_MAX_LENGTH: u64 = 128;

/// A stored item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Assigned by the store on creation, never changes
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "pen")]
    pub name: String,
    /// Always serialized, as `null` when absent
    #[schema(example = "blue")]
    pub description: Option<String>,
}

/// Body of `POST /items` and `PUT /items/{id}`.
///
/// On update both fields are overwritten, so an omitted `description` clears it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ItemInput {
    #[validate(length(max = 128, message = "must be at most 128 characters"))]
    #[schema(example = "pen", max_length = 128)]
    pub name: String,

    #[serde(default)]
    #[schema(example = "blue")]
    pub description: Option<String>,
}

impl ItemInput {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            description,
        }
    }
}
