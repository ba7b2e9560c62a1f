use crate::api::error;
use crate::modules::upload::schema::ItemTreeBounds;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CopyrightRepository {
    /// Overwrites the content of every statement carrying `hash` inside the
    /// item's subtree. Returns the number of rows touched.
    async fn update_statement(
        &self,
        bounds: &ItemTreeBounds,
        hash: &str,
        content: &str,
        user_id: i64,
    ) -> Result<u64, error::SystemError>;
}
