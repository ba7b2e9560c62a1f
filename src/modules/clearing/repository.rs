use crate::api::error;
use crate::modules::clearing::schema::ClearingDecisionEntity;
use crate::modules::upload::schema::ItemTreeBounds;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ClearingRepository {
    /// Decisions recorded for every file inside the item's subtree, oldest
    /// first.
    async fn decisions_in_scope(
        &self,
        bounds: &ItemTreeBounds,
    ) -> Result<Vec<ClearingDecisionEntity>, error::SystemError>;
}
