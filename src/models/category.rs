use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppResult;

use super::{check_len, check_positive_id};

pub const CATEGORY_NAME_MIN: usize = 3;
pub const CATEGORY_NAME_MAX: usize = 50;

/// A product category. Used both as the stored record and as the create/update payload,
/// since an update replaces the whole entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    /// Positive, unique across categories.
    #[schema(minimum = 1, example = 1)]
    pub id: i64,
    #[schema(min_length = 3, max_length = 50, example = "Tools")]
    pub name: String,
}

impl Category {
    pub fn validate(&self) -> AppResult<()> {
        check_positive_id("id", self.id)?;
        check_len("name", &self.name, CATEGORY_NAME_MIN, CATEGORY_NAME_MAX)
    }
}
