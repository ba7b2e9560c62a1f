use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateCopyrightBody {
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,
}
