//! Persisted recipe record.

use serde::{Deserialize, Serialize};

/// A generated recipe, keyed by `(user_id, date)`.
///
/// One record per user per day: a later generation on the same day replaces
/// the earlier one. Records are never updated in place or deleted by this
/// service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeRecord {
    /// Requester the recipe belongs to.
    pub user_id: String,

    /// Day of generation, `YYYY-MM-DD`.
    pub date: String,

    /// Parsed recipe title.
    pub title: String,

    /// Parsed ingredients block, free text.
    pub ingredients_list: String,

    /// Parsed instructions block, free text.
    pub instructions: String,
}

impl RecipeRecord {
    pub fn new(
        user_id: String,
        date: String,
        title: String,
        ingredients_list: String,
        instructions: String,
    ) -> Self {
        Self {
            user_id,
            date,
            title,
            ingredients_list,
            instructions,
        }
    }
}
